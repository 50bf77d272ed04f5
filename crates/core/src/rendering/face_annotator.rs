use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;

use crate::rendering::label_font;
use crate::shared::constants::{BOX_COLOR, LABEL_TEXT_COLOR, MIDLINE_COLOR, MIDLINE_WIDTH};
use crate::shared::frame::Frame;
use crate::shared::geometry::{FaceBox, Point};

/// Label band padding: the band is text height + 10 tall, text inset by 6/5.
const LABEL_PADDING: i32 = 10;
const LABEL_TEXT_INSET_X: i32 = 6;
const LABEL_TEXT_INSET_Y: i32 = 5;

/// Returns a copy of `frame` with, for each face: its box outline, a filled
/// label band along the box bottom holding the zero-padded face index, and
/// a vertical line through its midline spanning the full image height.
///
/// `faces` and `midlines` are index-aligned. Non-RGB frames are returned
/// unchanged.
pub fn annotate(frame: &Frame, faces: &[FaceBox], midlines: &[Point]) -> Frame {
    let Some(mut img) = frame.to_rgb_image() else {
        log::warn!("Skipping annotation of {}-channel frame", frame.channels());
        return frame.clone();
    };

    for (idx, (face, midline)) in faces.iter().zip(midlines).enumerate() {
        draw_face_box(&mut img, face);
        draw_label(&mut img, face, &format!("{idx:02}"));
        draw_midline(&mut img, midline.x);
    }

    Frame::from_rgb_image(img)
}

/// Builds a rect from inclusive corners, `None` if it has no area.
fn inclusive_rect(left: i32, top: i32, right: i32, bottom: i32) -> Option<Rect> {
    let w = right - left + 1;
    let h = bottom - top + 1;
    (w > 0 && h > 0).then(|| Rect::at(left, top).of_size(w as u32, h as u32))
}

fn draw_face_box(img: &mut RgbImage, face: &FaceBox) {
    if let Some(rect) = inclusive_rect(face.left, face.top, face.right, face.bottom) {
        draw_hollow_rect_mut(img, rect, Rgb(BOX_COLOR));
    }
}

fn draw_label(img: &mut RgbImage, face: &FaceBox, text: &str) {
    let (_, text_height) = label_font::text_size(text);
    let text_height = text_height as i32;

    let band_top = face.bottom - text_height - LABEL_PADDING;
    if let Some(rect) = inclusive_rect(face.left, band_top, face.right, face.bottom) {
        draw_filled_rect_mut(img, rect, Rgb(BOX_COLOR));
    }
    label_font::draw_text(
        img,
        face.left + LABEL_TEXT_INSET_X,
        face.bottom - text_height - LABEL_TEXT_INSET_Y,
        text,
        Rgb(LABEL_TEXT_COLOR),
    );
}

fn draw_midline(img: &mut RgbImage, x: i32) {
    let height = img.height();
    if height == 0 {
        return;
    }
    let left = x - (MIDLINE_WIDTH / 2) as i32;
    let rect = Rect::at(left, 0).of_size(MIDLINE_WIDTH, height);
    draw_filled_rect_mut(img, rect, Rgb(MIDLINE_COLOR));
}
