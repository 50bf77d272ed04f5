/// YOLO-pose face detector using ONNX Runtime via `ort`.
///
/// Handles letterbox preprocessing, inference, NMS post-processing and the
/// mapping of the five face keypoints onto named landmark features.
use std::path::Path;

use crate::detection::domain::face_detector::FaceDetector;
use crate::detection::domain::face_landmarks::{FaceLandmarks, LandmarkFeature};
use crate::shared::frame::Frame;
use crate::shared::geometry::{FaceBox, Point};

/// Fallback YOLO model input resolution when the model doesn't specify dimensions.
const DEFAULT_INPUT_SIZE: u32 = 640;

/// Default confidence threshold for face detection.
pub const DEFAULT_CONFIDENCE: f64 = 0.5;

/// NMS IoU threshold.
const NMS_IOU_THRESH: f64 = 0.45;

/// Number of keypoints per detection (5 landmarks × 3 values each: x, y, conf).
const NUM_KEYPOINT_VALUES: usize = 15;

/// Minimum keypoint confidence to treat a nose or mouth landmark as visible.
/// Eye keypoints are always kept since every face needs a midline.
const KEYPOINT_CONF_THRESH: f64 = 0.5;

// Keypoint order in the widerface pose head.
const KP_LEFT_EYE: usize = 0;
const KP_RIGHT_EYE: usize = 1;
const KP_NOSE: usize = 2;
const KP_LEFT_MOUTH: usize = 3;
const KP_RIGHT_MOUTH: usize = 4;

/// YOLO face detector backed by an ONNX Runtime session.
pub struct OnnxYoloDetector {
    session: ort::session::Session,
    confidence: f64,
    input_size: u32,
}

impl OnnxYoloDetector {
    /// Load a YOLO ONNX model and prepare for inference.
    ///
    /// The input resolution is read from the model's input shape (expecting NCHW).
    /// Falls back to 640 if the shape is dynamic or unreadable.
    pub fn new(model_path: &Path, confidence: f64) -> Result<Self, Box<dyn std::error::Error>> {
        let session = ort::session::Session::builder()?.commit_from_file(model_path)?;

        // NCHW: [1, 3, H, W]
        let input_size = session
            .inputs()
            .first()
            .and_then(|input| {
                if let ort::value::ValueType::Tensor { ref shape, .. } = input.dtype() {
                    if shape.len() >= 4 && shape[2] > 0 {
                        Some(shape[2] as u32)
                    } else {
                        None
                    }
                } else {
                    None
                }
            })
            .unwrap_or(DEFAULT_INPUT_SIZE);

        log::debug!("YOLO model loaded, input size {input_size}");

        Ok(Self {
            session,
            confidence,
            input_size,
        })
    }

    /// Runs inference and returns NMS-filtered detections in frame coordinates,
    /// highest confidence first.
    fn infer(&mut self, frame: &Frame) -> Result<Vec<RawDetection>, Box<dyn std::error::Error>> {
        if frame.channels() != 3 {
            return Err(format!("expected an RGB frame, got {} channels", frame.channels()).into());
        }
        if frame.width() == 0 || frame.height() == 0 {
            return Ok(Vec::new());
        }

        let (input_tensor, scale, pad_x, pad_y) = letterbox(frame, self.input_size);

        let input_value = ort::value::Tensor::from_array(input_tensor)?;
        let outputs = self.session.run(ort::inputs![input_value])?;
        if outputs.len() == 0 {
            return Err("YOLO model produced no outputs".into());
        }
        let tensor = outputs[0].try_extract_array::<f32>()?;
        let shape = tensor.shape().to_vec();

        // YOLO output shape is [1, num_features, num_detections] (transposed)
        // or [1, num_detections, num_features]. Handle both.
        if shape.len() != 3 {
            return Err(format!("Unexpected YOLO output shape: {shape:?}").into());
        }
        let transposed = shape[1] < shape[2];
        let (num_dets, num_feats) = if transposed {
            (shape[2], shape[1])
        } else {
            (shape[1], shape[2])
        };

        let data = tensor.as_slice().ok_or("Cannot get tensor slice")?;

        let mut raw_dets = Vec::new();
        for i in 0..num_dets {
            let row: Vec<f32> = if transposed {
                (0..num_feats).map(|f| data[f * num_dets + i]).collect()
            } else {
                data[i * num_feats..(i + 1) * num_feats].to_vec()
            };
            if let Some(det) = parse_row(&row, self.confidence, scale, pad_x, pad_y) {
                raw_dets.push(det);
            }
        }

        let kept = nms(&mut raw_dets, NMS_IOU_THRESH);
        log::debug!(
            "YOLO: {} candidates above {:.2}, {} after NMS",
            raw_dets.len(),
            self.confidence,
            kept.len()
        );
        Ok(kept)
    }
}

impl FaceDetector for OnnxYoloDetector {
    fn face_locations(
        &mut self,
        frame: &Frame,
    ) -> Result<Vec<FaceBox>, Box<dyn std::error::Error>> {
        let (fw, fh) = frame.size();
        Ok(self
            .infer(frame)?
            .iter()
            .map(|d| FaceBox::from_corners(d.x1, d.y1, d.x2, d.y2, fw, fh))
            .collect())
    }

    fn face_landmarks(
        &mut self,
        frame: &Frame,
    ) -> Result<Vec<FaceLandmarks>, Box<dyn std::error::Error>> {
        Ok(self.infer(frame)?.iter().map(to_landmarks).collect())
    }
}

// ---------------------------------------------------------------------------
// Preprocessing
// ---------------------------------------------------------------------------

/// Letterbox-resize a frame to `target_size` × `target_size`.
///
/// Returns `(NCHW float32 tensor, scale, pad_x, pad_y)`.
fn letterbox(frame: &Frame, target_size: u32) -> (ndarray::Array4<f32>, f64, u32, u32) {
    let fw = frame.width() as f64;
    let fh = frame.height() as f64;
    let target = target_size as f64;

    let scale = (target / fw).min(target / fh);
    let new_w = ((fw * scale).round() as u32).min(target_size);
    let new_h = ((fh * scale).round() as u32).min(target_size);
    let pad_x = (target_size - new_w) / 2;
    let pad_y = (target_size - new_h) / 2;

    // Padded area filled with 114/255 gray (YOLO convention)
    let gray = 114.0f32 / 255.0;
    let mut tensor =
        ndarray::Array4::<f32>::from_elem((1, 3, target_size as usize, target_size as usize), gray);

    let src = frame.as_ndarray();
    let src_h = frame.height() as usize;
    let src_w = frame.width() as usize;

    // Nearest-neighbor resize + copy into padded region
    for y in 0..new_h as usize {
        let src_y = ((y as f64 / scale) as usize).min(src_h - 1);
        for x in 0..new_w as usize {
            let src_x = ((x as f64 / scale) as usize).min(src_w - 1);
            let ty = pad_y as usize + y;
            let tx = pad_x as usize + x;
            for c in 0..3 {
                tensor[[0, c, ty, tx]] = src[[src_y, src_x, c]] as f32 / 255.0;
            }
        }
    }

    (tensor, scale, pad_x, pad_y)
}

// ---------------------------------------------------------------------------
// Postprocessing
// ---------------------------------------------------------------------------

#[derive(Clone, Debug)]
struct RawDetection {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    confidence: f64,
    /// `None` for nose and mouth keypoints below the visibility threshold.
    /// Eyes are always present.
    keypoints: [Option<(f64, f64)>; 5],
}

/// Parses one output row `[cx, cy, w, h, conf, kp0_x, kp0_y, kp0_conf, ...]`
/// in letterbox space into frame coordinates.
///
/// Rows without the full keypoint block are dropped, so every detection
/// carries both eyes.
fn parse_row(
    row: &[f32],
    confidence: f64,
    scale: f64,
    pad_x: u32,
    pad_y: u32,
) -> Option<RawDetection> {
    if row.len() < 5 + NUM_KEYPOINT_VALUES {
        return None;
    }
    let conf = row[4] as f64;
    if conf < confidence {
        return None;
    }

    let unletterbox = |x: f64, y: f64| ((x - pad_x as f64) / scale, (y - pad_y as f64) / scale);

    let (cx, cy, w, h) = (row[0] as f64, row[1] as f64, row[2] as f64, row[3] as f64);
    let (x1, y1) = unletterbox(cx - w / 2.0, cy - h / 2.0);
    let (x2, y2) = unletterbox(cx + w / 2.0, cy + h / 2.0);

    let mut keypoints = [None; 5];
    for (k, slot) in keypoints.iter_mut().enumerate() {
        let base = 5 + k * 3;
        let is_eye = k == KP_LEFT_EYE || k == KP_RIGHT_EYE;
        if is_eye || row[base + 2] as f64 >= KEYPOINT_CONF_THRESH {
            *slot = Some(unletterbox(row[base] as f64, row[base + 1] as f64));
        }
    }

    Some(RawDetection {
        x1,
        y1,
        x2,
        y2,
        confidence: conf,
        keypoints,
    })
}

/// Maps the five pose keypoints onto named features. Mouth corners are
/// recorded as both lip endpoints, and only when both are visible.
fn to_landmarks(det: &RawDetection) -> FaceLandmarks {
    let point = |k: usize| {
        det.keypoints[k].map(|(x, y)| Point::new(x.round() as i32, y.round() as i32))
    };

    let mut landmarks = FaceLandmarks::new();
    for (kp, feature) in [
        (KP_LEFT_EYE, LandmarkFeature::LeftEye),
        (KP_RIGHT_EYE, LandmarkFeature::RightEye),
        (KP_NOSE, LandmarkFeature::NoseTip),
    ] {
        if let Some(p) = point(kp) {
            landmarks.insert(feature, vec![p]);
        }
    }
    if let (Some(l), Some(r)) = (point(KP_LEFT_MOUTH), point(KP_RIGHT_MOUTH)) {
        landmarks.insert(LandmarkFeature::TopLip, vec![l, r]);
        landmarks.insert(LandmarkFeature::BottomLip, vec![l, r]);
    }
    landmarks
}

/// Greedy NMS: sort by confidence descending, suppress overlapping boxes.
fn nms(dets: &mut [RawDetection], iou_thresh: f64) -> Vec<RawDetection> {
    dets.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut keep = Vec::new();
    let mut suppressed = vec![false; dets.len()];

    for i in 0..dets.len() {
        if suppressed[i] {
            continue;
        }
        keep.push(dets[i].clone());
        for j in (i + 1)..dets.len() {
            if suppressed[j] {
                continue;
            }
            let iou = bbox_iou(
                &[dets[i].x1, dets[i].y1, dets[i].x2, dets[i].y2],
                &[dets[j].x1, dets[j].y1, dets[j].x2, dets[j].y2],
            );
            if iou > iou_thresh {
                suppressed[j] = true;
            }
        }
    }
    keep
}

fn bbox_iou(a: &[f64; 4], b: &[f64; 4]) -> f64 {
    let x1 = a[0].max(b[0]);
    let y1 = a[1].max(b[1]);
    let x2 = a[2].min(b[2]);
    let y2 = a[3].min(b[3]);

    let inter = (x2 - x1).max(0.0) * (y2 - y1).max(0.0);
    if inter == 0.0 {
        return 0.0;
    }
    let area_a = (a[2] - a[0]) * (a[3] - a[1]);
    let area_b = (b[2] - b[0]) * (b[3] - b[1]);
    inter / (area_a + area_b - inter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symmetry::domain::midline::midline_points;
    use approx::assert_relative_eq;

    fn det(x1: f64, y1: f64, x2: f64, y2: f64, confidence: f64) -> RawDetection {
        RawDetection {
            x1,
            y1,
            x2,
            y2,
            confidence,
            keypoints: [None; 5],
        }
    }

    /// Output row with all five keypoints at the given confidence.
    fn row_with_keypoints(kp_conf: f32) -> Vec<f32> {
        let mut row = vec![100.0, 100.0, 40.0, 60.0, 0.9];
        let points = [
            (90.0, 90.0),
            (110.0, 90.0),
            (100.0, 100.0),
            (92.0, 115.0),
            (108.0, 115.0),
        ];
        for (x, y) in points {
            row.extend_from_slice(&[x, y, kp_conf]);
        }
        row
    }

    #[test]
    fn test_letterbox_preserves_aspect_ratio() {
        // 200x100 → scale 3.2, 640x320 content, 160 px vertical padding
        let frame = Frame::new(vec![128u8; 200 * 100 * 3], 200, 100, 3);
        let (tensor, scale, pad_x, pad_y) = letterbox(&frame, 640);

        assert_eq!(tensor.shape(), &[1, 3, 640, 640]);
        assert_relative_eq!(scale, 3.2, epsilon = 0.01);
        assert_eq!(pad_x, 0);
        assert_eq!(pad_y, 160);
    }

    #[test]
    fn test_letterbox_values_normalized() {
        let frame = Frame::new(vec![255u8; 100 * 50 * 3], 100, 50, 3);
        let (tensor, _, pad_x, pad_y) = letterbox(&frame, 640);

        let y = pad_y as usize + 1;
        let x = pad_x as usize + 1;
        assert_relative_eq!(tensor[[0, 0, y, x]], 1.0, epsilon = 0.01);
        assert_relative_eq!(tensor[[0, 0, 0, 0]], 114.0 / 255.0, epsilon = 0.01);
    }

    #[test]
    fn test_parse_row_below_confidence_is_dropped() {
        let mut row = row_with_keypoints(0.9);
        row[4] = 0.2;
        assert!(parse_row(&row, 0.5, 1.0, 0, 0).is_none());
    }

    #[test]
    fn test_parse_row_maps_back_to_frame_coords() {
        // scale 2, pad (10, 20): box center (100, 100) size 40x60 in letterbox
        let d = parse_row(&row_with_keypoints(0.9), 0.5, 2.0, 10, 20).unwrap();
        assert_relative_eq!(d.x1, (80.0 - 10.0) / 2.0);
        assert_relative_eq!(d.y1, (70.0 - 20.0) / 2.0);
        assert_relative_eq!(d.x2, (120.0 - 10.0) / 2.0);
        assert_relative_eq!(d.y2, (130.0 - 20.0) / 2.0);
        let (kx, ky) = d.keypoints[KP_LEFT_EYE].unwrap();
        assert_relative_eq!(kx, 40.0);
        assert_relative_eq!(ky, 35.0);
    }

    #[test]
    fn test_parse_row_low_confidence_hides_nose_and_mouth_only() {
        let d = parse_row(&row_with_keypoints(0.1), 0.5, 1.0, 0, 0).unwrap();
        assert!(d.keypoints[KP_LEFT_EYE].is_some());
        assert!(d.keypoints[KP_RIGHT_EYE].is_some());
        assert!(d.keypoints[KP_NOSE].is_none());
        assert!(d.keypoints[KP_LEFT_MOUTH].is_none());
        assert!(d.keypoints[KP_RIGHT_MOUTH].is_none());
    }

    #[test]
    fn test_parse_row_without_keypoints_is_dropped() {
        assert!(parse_row(&[50.0, 50.0, 10.0, 10.0, 0.8], 0.5, 1.0, 0, 0).is_none());
    }

    #[test]
    fn test_low_confidence_eye_still_yields_midline() {
        let mut row = row_with_keypoints(0.9);
        row[5 + KP_RIGHT_EYE * 3 + 2] = 0.45;
        let d = parse_row(&row, 0.5, 1.0, 0, 0).unwrap();
        let lm = to_landmarks(&d);

        assert_eq!(lm.get(LandmarkFeature::RightEye), Some(&[Point::new(110, 90)][..]));
        assert_eq!(midline_points(&[lm]).unwrap(), vec![Point::new(100, 90)]);
    }

    #[test]
    fn test_to_landmarks_maps_features() {
        let d = parse_row(&row_with_keypoints(0.9), 0.5, 1.0, 0, 0).unwrap();
        let lm = to_landmarks(&d);
        assert_eq!(lm.get(LandmarkFeature::LeftEye), Some(&[Point::new(90, 90)][..]));
        assert_eq!(lm.get(LandmarkFeature::RightEye), Some(&[Point::new(110, 90)][..]));
        assert_eq!(lm.get(LandmarkFeature::NoseTip), Some(&[Point::new(100, 100)][..]));
        assert_eq!(
            lm.get(LandmarkFeature::TopLip),
            Some(&[Point::new(92, 115), Point::new(108, 115)][..])
        );
        assert_eq!(lm.eye_midpoint(), Some(Point::new(100, 90)));
    }

    #[test]
    fn test_to_landmarks_one_hidden_mouth_corner_drops_lips() {
        let mut row = row_with_keypoints(0.9);
        row[5 + KP_RIGHT_MOUTH * 3 + 2] = 0.2;
        let lm = to_landmarks(&parse_row(&row, 0.5, 1.0, 0, 0).unwrap());
        assert_eq!(lm.get(LandmarkFeature::TopLip), None);
        assert_eq!(lm.get(LandmarkFeature::BottomLip), None);
        assert!(lm.get(LandmarkFeature::NoseTip).is_some());
        assert_eq!(lm.eye_midpoint(), Some(Point::new(100, 90)));
    }

    #[test]
    fn test_nms_suppresses_overlapping() {
        let mut dets = vec![
            det(0.0, 0.0, 100.0, 100.0, 0.9),
            det(5.0, 5.0, 105.0, 105.0, 0.8),
        ];
        let kept = nms(&mut dets, 0.3);
        assert_eq!(kept.len(), 1);
        assert_relative_eq!(kept[0].confidence, 0.9);
    }

    #[test]
    fn test_nms_keeps_non_overlapping_in_confidence_order() {
        let mut dets = vec![
            det(0.0, 0.0, 50.0, 50.0, 0.6),
            det(200.0, 200.0, 250.0, 250.0, 0.8),
        ];
        let kept = nms(&mut dets, 0.3);
        assert_eq!(kept.len(), 2);
        assert_relative_eq!(kept[0].confidence, 0.8);
        assert_relative_eq!(kept[1].confidence, 0.6);
    }

    #[test]
    fn test_nms_empty_input() {
        let mut dets: Vec<RawDetection> = Vec::new();
        assert!(nms(&mut dets, 0.3).is_empty());
    }

    #[test]
    fn test_bbox_iou_no_overlap() {
        assert_eq!(
            bbox_iou(&[0.0, 0.0, 10.0, 10.0], &[20.0, 20.0, 30.0, 30.0]),
            0.0
        );
    }

    #[test]
    fn test_bbox_iou_perfect() {
        let b = [0.0, 0.0, 10.0, 10.0];
        assert_relative_eq!(bbox_iou(&b, &b), 1.0);
    }
}
