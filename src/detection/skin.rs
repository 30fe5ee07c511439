use image::{GrayImage, Luma, Rgb};
use crate::models::{Frame, SkinMask, SKIN};

/// Maximum of three channel values
pub fn max3(a: i32, b: i32, c: i32) -> i32 {
    a.max(b).max(c)
}

/// Minimum of three channel values
pub fn min3(a: i32, b: i32, c: i32) -> i32 {
    a.min(b).min(c)
}

/// Explicit RGB skin rule (Kovac/Peer uniform daylight thresholds)
pub fn is_skin(pixel: Rgb<u8>) -> bool {
    let [r, g, b] = pixel.0.map(i32::from);

    (r > 95 && g > 40 && b > 20)
        && max3(r, g, b) - min3(r, g, b) > 15
        && (r - g).abs() > 15
        && r > g
        && r > b
}

/// Classify every pixel independently into a fresh mask of the same size
pub fn detect_skin(frame: &Frame) -> SkinMask {
    let mut mask = GrayImage::new(frame.width(), frame.height());
    for (x, y, pixel) in frame.enumerate_pixels() {
        if is_skin(*pixel) {
            mask.put_pixel(x, y, Luma([SKIN]));
        }
    }
    mask
}
