use thiserror::Error;

#[derive(Error, Debug)]
pub enum FaceSymError {
    #[error("'{0}' is not a valid location of an image")]
    InvalidLocation(String),
    #[error("failed to read image from {location}: {source}")]
    Read {
        location: String,
        #[source]
        source: Box<dyn std::error::Error>,
    },
    #[error("face detection failed: {0}")]
    Detection(#[source] Box<dyn std::error::Error>),
    #[error("detector returned {locations} face boxes but {landmarks} landmark sets")]
    DetectionMismatch { locations: usize, landmarks: usize },
    #[error("eye locations missing for face {face}")]
    MissingEyeLandmarks { face: usize },
    #[error("no face detected")]
    FaceNotDetected,
    #[error("face index {index} out of range (0 <= index <= {max})")]
    FaceIndexOutOfRange { index: usize, max: usize },
}
