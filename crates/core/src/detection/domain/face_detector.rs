use crate::detection::domain::face_landmarks::FaceLandmarks;
use crate::shared::frame::Frame;
use crate::shared::geometry::FaceBox;

/// Domain interface for face detection.
///
/// Locations and landmarks are requested separately. For the same frame an
/// implementation must return both lists in the same face order, so that
/// index `i` of each describes the same face.
pub trait FaceDetector: Send {
    fn face_locations(
        &mut self,
        frame: &Frame,
    ) -> Result<Vec<FaceBox>, Box<dyn std::error::Error>>;

    fn face_landmarks(
        &mut self,
        frame: &Frame,
    ) -> Result<Vec<FaceLandmarks>, Box<dyn std::error::Error>>;
}
