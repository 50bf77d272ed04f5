use ndarray::{s, Array3};

use crate::shared::frame::Frame;
use crate::symmetry::domain::composite::{hconcat, mirror, split_at_column};

/// The six images derived from splitting a photo at one face's midline.
///
/// "Inner" composites put the mirror seam (the midline itself) at the
/// centre; "outer" composites put the original outer edges there.
#[derive(Clone, Debug, PartialEq)]
pub struct SymmetrizedImages {
    pub left: Frame,
    pub left_inner: Frame,
    pub left_outer: Frame,
    pub right: Frame,
    pub right_inner: Frame,
    pub right_outer: Frame,
}

impl SymmetrizedImages {
    /// Splits `frame` at column `x` and builds both composites for each half.
    pub fn from_split(frame: &Frame, x: u32) -> Self {
        let (left, right) = split_at_column(frame, x);

        let left_mirrored = mirror(&left);
        let left_inner = hconcat(&left, &left_mirrored);
        let left_outer = hconcat(&left_mirrored, &left);

        let right_mirrored = mirror(&right);
        let right_inner = hconcat(&right_mirrored, &right);
        let right_outer = hconcat(&right, &right_mirrored);

        Self {
            left,
            left_inner,
            left_outer,
            right,
            right_inner,
            right_outer,
        }
    }

    /// `(name, image)` pairs in display order: the left row, then the right row.
    pub fn named(&self) -> [(&'static str, &Frame); 6] {
        [
            ("left", &self.left),
            ("left_inner", &self.left_inner),
            ("left_outer", &self.left_outer),
            ("right", &self.right),
            ("right_inner", &self.right_inner),
            ("right_outer", &self.right_outer),
        ]
    }

    /// Lays the six images out on a 2×3 sheet, one per cell, each cell the
    /// size of the largest image. Unused cell area is black.
    pub fn grid(&self) -> Frame {
        let named = self.named();
        let cell_w = named.iter().map(|(_, f)| f.width()).max().unwrap_or(0) as usize;
        let cell_h = named.iter().map(|(_, f)| f.height()).max().unwrap_or(0) as usize;
        let channels = self.left.channels() as usize;

        let mut sheet = Array3::<u8>::zeros((cell_h * 2, cell_w * 3, channels));
        for (i, (_, frame)) in named.iter().enumerate() {
            let y = (i / 3) * cell_h;
            let x = (i % 3) * cell_w;
            let (w, h) = (frame.width() as usize, frame.height() as usize);
            sheet
                .slice_mut(s![y..y + h, x..x + w, ..])
                .assign(&frame.as_ndarray());
        }
        Frame::from_array(sheet)
    }
}
