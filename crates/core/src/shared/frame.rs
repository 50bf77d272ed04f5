use ndarray::{Array3, ArrayView3};

/// A decoded image: contiguous RGB bytes in row-major order.
///
/// Format conversion happens at I/O boundaries only; the domain layer
/// works on the `(height, width, channels)` ndarray view.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * (channels as usize),
            "data length must equal width * height * channels"
        );
        Self {
            data,
            width,
            height,
            channels,
        }
    }

    /// Builds a frame from an `(height, width, channels)` array in any memory layout.
    pub fn from_array(array: Array3<u8>) -> Self {
        let (height, width, channels) = array.dim();
        let data = array.iter().copied().collect();
        Self::new(data, width as u32, height as u32, channels as u8)
    }

    pub fn from_rgb_image(image: image::RgbImage) -> Self {
        let (width, height) = image.dimensions();
        Self::new(image.into_raw(), width, height, 3)
    }

    /// Converts back to an `image` buffer. `None` if the frame is not RGB.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        if self.channels != 3 {
            return None;
        }
        image::RgbImage::from_raw(self.width, self.height, self.data.clone())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// `(width, height)`, the order image libraries report sizes in.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("Frame data length must match dimensions")
    }

    /// Copies rows `[y1, y2)` and columns `[x1, x2)`, clamped to the frame.
    ///
    /// Inverted or fully out-of-bounds ranges yield an empty frame.
    pub fn crop(&self, x1: i64, y1: i64, x2: i64, y2: i64) -> Frame {
        let clamp_x = |v: i64| v.clamp(0, self.width as i64) as usize;
        let clamp_y = |v: i64| v.clamp(0, self.height as i64) as usize;

        let (x1, x2) = (clamp_x(x1), clamp_x(x2));
        let (y1, y2) = (clamp_y(y1), clamp_y(y2));
        let x2 = x2.max(x1);
        let y2 = y2.max(y1);

        let view = self.as_ndarray();
        let cropped = view.slice(ndarray::s![y1..y2, x1..x2, ..]);
        Frame::from_array(cropped.to_owned())
    }

    fn shape(&self) -> (usize, usize, usize) {
        (
            self.height as usize,
            self.width as usize,
            self.channels as usize,
        )
    }
}
