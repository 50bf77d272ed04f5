use std::path::Path;

use crate::imaging::domain::image_reader::ImageReader;
use crate::imaging::domain::image_source::ImageSource;
use crate::shared::frame::Frame;

/// Reads images from local files or over HTTP, decoding with the `image`
/// crate and converting to RGB.
///
/// Network fetches use the blocking `reqwest` client with its default
/// timeouts; non-success status codes are errors.
pub struct SourceImageReader {
    client: reqwest::blocking::Client,
}

impl SourceImageReader {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("facesym/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    fn fetch(&self, url: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
        let response = self.client.get(url).send()?.error_for_status()?;
        let bytes = response.bytes()?;
        log::debug!("Fetched {} bytes from {url}", bytes.len());
        Ok(bytes.to_vec())
    }
}

fn decode_file(path: &Path) -> Result<Frame, Box<dyn std::error::Error>> {
    let img = image::open(path)?;
    Ok(Frame::from_rgb_image(img.to_rgb8()))
}

fn decode_bytes(bytes: &[u8]) -> Result<Frame, Box<dyn std::error::Error>> {
    let img = image::load_from_memory(bytes)?;
    Ok(Frame::from_rgb_image(img.to_rgb8()))
}

impl ImageReader for SourceImageReader {
    fn read(&self, source: &ImageSource) -> Result<Frame, Box<dyn std::error::Error>> {
        let frame = match source {
            ImageSource::Url(url) => decode_bytes(&self.fetch(url)?)?,
            ImageSource::File(path) => decode_file(path)?,
        };
        log::debug!("Decoded {source}: {}x{}", frame.width(), frame.height());
        Ok(frame)
    }
}
