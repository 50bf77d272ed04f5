use crate::shared::frame::Frame;

/// Presents a frame to the user. `title` is a short label for the window
/// or file name.
pub trait ImageViewer: Send {
    fn show(&self, title: &str, frame: &Frame) -> Result<(), Box<dyn std::error::Error>>;
}
