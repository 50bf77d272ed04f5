use crate::imaging::domain::image_viewer::ImageViewer;
use crate::shared::frame::Frame;

/// Shows frames in the platform's default image viewer.
///
/// Each frame is saved as a PNG that outlives the process, since the
/// viewer opens it asynchronously.
pub struct SystemImageViewer;

impl SystemImageViewer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemImageViewer {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageViewer for SystemImageViewer {
    fn show(&self, title: &str, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
        let img = frame
            .to_rgb_image()
            .ok_or("Failed to create image from frame data")?;

        let (_file, path) = tempfile::Builder::new()
            .prefix(&format!("facesym-{title}-"))
            .suffix(".png")
            .tempfile()?
            .keep()?;
        img.save(&path)?;

        log::debug!("Opening {} in system viewer", path.display());
        open::that(&path)?;
        Ok(())
    }
}
