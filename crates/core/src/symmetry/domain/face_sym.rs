use crate::detection::domain::face_detector::FaceDetector;
use crate::detection::domain::face_landmarks::FaceLandmarks;
use crate::imaging::domain::image_reader::ImageReader;
use crate::imaging::domain::image_source::ImageSource;
use crate::rendering::face_annotator;
use crate::shared::frame::Frame;
use crate::shared::geometry::{FaceBox, Point};
use crate::symmetry::domain::face_sym_error::FaceSymError;
use crate::symmetry::domain::midline::{midline_points, split_column};
use crate::symmetry::domain::symmetrized_images::SymmetrizedImages;

/// A loaded image together with its detected faces and their midlines.
///
/// Detection and midline derivation run once, at construction; every
/// derived image is computed from that cached state.
#[derive(Clone, Debug)]
pub struct FaceSym {
    location: String,
    image: Frame,
    face_locations: Vec<FaceBox>,
    face_landmarks: Vec<FaceLandmarks>,
    midlines: Vec<Point>,
}

impl FaceSym {
    /// Loads the image at `location` (URL or file path) and analyses it.
    pub fn load(
        location: &str,
        reader: &dyn ImageReader,
        detector: &mut dyn FaceDetector,
    ) -> Result<Self, FaceSymError> {
        let source = ImageSource::parse(location)
            .ok_or_else(|| FaceSymError::InvalidLocation(location.to_string()))?;
        let image = reader.read(&source).map_err(|source| FaceSymError::Read {
            location: location.to_string(),
            source,
        })?;
        log::info!("Loaded {location} ({}x{})", image.width(), image.height());
        Self::from_frame(location, image, detector)
    }

    /// Analyses an already decoded image. `location` is kept for reporting.
    pub fn from_frame(
        location: &str,
        image: Frame,
        detector: &mut dyn FaceDetector,
    ) -> Result<Self, FaceSymError> {
        let face_locations = detector
            .face_locations(&image)
            .map_err(FaceSymError::Detection)?;
        let face_landmarks = detector
            .face_landmarks(&image)
            .map_err(FaceSymError::Detection)?;

        if face_locations.len() != face_landmarks.len() {
            return Err(FaceSymError::DetectionMismatch {
                locations: face_locations.len(),
                landmarks: face_landmarks.len(),
            });
        }

        let midlines = midline_points(&face_landmarks)?;
        log::debug!("{location}: {} face(s), midlines {midlines:?}", midlines.len());

        Ok(Self {
            location: location.to_string(),
            image,
            face_locations,
            face_landmarks,
            midlines,
        })
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn full_image(&self) -> &Frame {
        &self.image
    }

    pub fn face_locations(&self) -> &[FaceBox] {
        &self.face_locations
    }

    pub fn face_landmarks(&self) -> &[FaceLandmarks] {
        &self.face_landmarks
    }

    pub fn midlines(&self) -> &[Point] {
        &self.midlines
    }

    pub fn face_count(&self) -> usize {
        self.face_locations.len()
    }

    /// `(width, height)` of the loaded image.
    pub fn size(&self) -> (u32, u32) {
        self.image.size()
    }

    /// Copy of the image with each face's box, index label and midline drawn.
    pub fn annotated_image(&self) -> Frame {
        face_annotator::annotate(&self.image, &self.face_locations, &self.midlines)
    }

    /// One crop per detected face, in detection order.
    pub fn cropped_face_images(&self) -> Vec<Frame> {
        self.face_locations
            .iter()
            .map(|b| {
                self.image
                    .crop(b.left as i64, b.top as i64, b.right as i64, b.bottom as i64)
            })
            .collect()
    }

    /// Left/right halves split at face `index`'s midline, with their
    /// inner and outer mirrored composites.
    pub fn symmetrized_images(&self, index: usize) -> Result<SymmetrizedImages, FaceSymError> {
        let count = self.midlines.len();
        if count == 0 {
            return Err(FaceSymError::FaceNotDetected);
        }
        let midline = *self
            .midlines
            .get(index)
            .ok_or(FaceSymError::FaceIndexOutOfRange {
                index,
                max: count - 1,
            })?;

        let x = split_column(midline, self.image.width());
        Ok(SymmetrizedImages::from_split(&self.image, x))
    }
}
