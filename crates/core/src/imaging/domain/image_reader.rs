use crate::imaging::domain::image_source::ImageSource;
use crate::shared::frame::Frame;

/// Loads and decodes an image into an RGB frame.
pub trait ImageReader: Send {
    fn read(&self, source: &ImageSource) -> Result<Frame, Box<dyn std::error::Error>>;
}
