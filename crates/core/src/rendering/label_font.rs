//! 5×7 bitmap digits for face index labels.

use image::{Rgb, RgbImage};

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance per character, including one column of spacing.
pub const ADVANCE: u32 = GLYPH_WIDTH + 1;

/// Each row uses bits 4..0, left to right.
fn glyph(ch: char) -> [u8; 7] {
    match ch {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => [0b01110, 0b10001, 0b00001, 0b00110, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b01110, 0b10000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b10000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00001, 0b01110],
        _ => [0; 7],
    }
}

/// `(width, height)` of `text` when drawn.
pub fn text_size(text: &str) -> (u32, u32) {
    let n = text.chars().count() as u32;
    if n == 0 {
        return (0, 0);
    }
    (n * ADVANCE - 1, GLYPH_HEIGHT)
}

/// Draws `text` with its top-left corner at `(x, y)`, clipped to the image.
/// Characters other than ASCII digits render as blanks.
pub fn draw_text(img: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgb<u8>) {
    let (width, height) = img.dimensions();
    for (i, ch) in text.chars().enumerate() {
        let origin_x = x + (i as u32 * ADVANCE) as i32;
        for (row, bits) in glyph(ch).iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                    continue;
                }
                let px = origin_x + col as i32;
                let py = y + row as i32;
                if px >= 0 && py >= 0 && (px as u32) < width && (py as u32) < height {
                    img.put_pixel(px as u32, py as u32, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    fn lit(img: &RgbImage) -> Vec<(u32, u32)> {
        img.enumerate_pixels()
            .filter(|(_, _, p)| p.0 == WHITE.0)
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn test_text_size() {
        assert_eq!(text_size(""), (0, 0));
        assert_eq!(text_size("7"), (5, 7));
        assert_eq!(text_size("00"), (11, 7));
    }

    #[test]
    fn test_draw_one() {
        let mut img = RgbImage::new(10, 10);
        draw_text(&mut img, 2, 1, "1", WHITE);
        // Top row of '1' is a single centre pixel; bottom row is three wide
        assert!(img.get_pixel(4, 1).0 == WHITE.0);
        assert!(img.get_pixel(2, 1).0 != WHITE.0);
        for x in 3..=5 {
            assert!(img.get_pixel(x, 7).0 == WHITE.0);
        }
        let pixels = lit(&img);
        assert!(pixels.iter().all(|&(x, y)| (2..7).contains(&x) && (1..8).contains(&y)));
    }

    #[test]
    fn test_second_character_is_advanced() {
        let mut a = RgbImage::new(20, 10);
        draw_text(&mut a, 0, 0, "8", WHITE);
        let mut b = RgbImage::new(20, 10);
        draw_text(&mut b, 0, 0, " 8", WHITE);
        let shifted: Vec<_> = lit(&a).into_iter().map(|(x, y)| (x + ADVANCE, y)).collect();
        assert_eq!(lit(&b), shifted);
    }

    #[test]
    fn test_draw_is_clipped() {
        let mut img = RgbImage::new(3, 3);
        draw_text(&mut img, -2, -2, "88", WHITE);
        draw_text(&mut img, 2, 2, "88", WHITE);
        assert!(!lit(&img).is_empty());
    }
}
