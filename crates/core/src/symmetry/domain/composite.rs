//! Half-image cropping, mirroring and horizontal concatenation.

use ndarray::{s, Array3, Axis};

use crate::shared::frame::Frame;

/// Splits `frame` at column `x`: `[0, x)` and `[x, width)`, full height.
/// `x` is clamped to the frame width.
pub fn split_at_column(frame: &Frame, x: u32) -> (Frame, Frame) {
    let x = x.min(frame.width()) as usize;
    let view = frame.as_ndarray();
    let left = view.slice(s![.., ..x, ..]).to_owned();
    let right = view.slice(s![.., x.., ..]).to_owned();
    (Frame::from_array(left), Frame::from_array(right))
}

/// Horizontally flipped copy.
pub fn mirror(frame: &Frame) -> Frame {
    let mut flipped = frame.as_ndarray().to_owned();
    flipped.invert_axis(Axis(1));
    Frame::from_array(flipped)
}

/// Places `right` to the right of `left`.
///
/// The result takes its height from `left`; extra rows of `right` are cut
/// and missing rows are left black.
pub fn hconcat(left: &Frame, right: &Frame) -> Frame {
    debug_assert_eq!(left.channels(), right.channels());
    let height = left.height() as usize;
    let lw = left.width() as usize;
    let rw = right.width() as usize;
    let rows = height.min(right.height() as usize);

    let mut out = Array3::<u8>::zeros((height, lw + rw, left.channels() as usize));
    out.slice_mut(s![.., ..lw, ..]).assign(&left.as_ndarray());
    out.slice_mut(s![..rows, lw.., ..])
        .assign(&right.as_ndarray().slice(s![..rows, .., ..]));
    Frame::from_array(out)
}
