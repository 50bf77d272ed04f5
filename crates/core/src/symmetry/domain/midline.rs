use crate::detection::domain::face_landmarks::FaceLandmarks;
use crate::shared::geometry::Point;
use crate::symmetry::domain::face_sym_error::FaceSymError;

/// Derives one midline point per face, in the same order as `landmarks`.
///
/// Fails on the first face lacking either eye.
pub fn midline_points(landmarks: &[FaceLandmarks]) -> Result<Vec<Point>, FaceSymError> {
    landmarks
        .iter()
        .enumerate()
        .map(|(face, lm)| {
            lm.eye_midpoint()
                .ok_or(FaceSymError::MissingEyeLandmarks { face })
        })
        .collect()
}

/// Clamps a midline x-coordinate to a valid split column in `[0, width]`.
///
/// A midline left of the image yields an empty left half and one right of
/// it an empty right half; negative columns never wrap from the right edge.
pub fn split_column(midline: Point, width: u32) -> u32 {
    midline.x.clamp(0, width.min(i32::MAX as u32) as i32) as u32
}
