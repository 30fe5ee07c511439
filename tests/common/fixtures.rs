#![allow(dead_code)]

use image::{GrayImage, Luma, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut};
use imageproc::point::Point;
use imageproc::rect::Rect;

/// A color the skin rule accepts
pub const SKIN_RGB: Rgb<u8> = Rgb([200, 150, 100]);

/// Width and height of the synthetic hand images
pub const HAND_SIZE: (u32, u32) = (260, 440);

/// Palm and forearm: x 40..=200, y 100..=400
pub const BODY: (i32, i32, u32, u32) = (40, 100, 161, 301);

/// Fingers as (left column, top row), each 14 pixels wide, ending on the palm.
/// The first one is flush with the palm's left edge; tips form a convex arc.
pub const FINGERS: [(i32, i32); 5] = [(40, 50), (69, 30), (98, 20), (127, 30), (156, 50)];

pub const FINGER_WIDTH: u32 = 14;

/// Binary mask of a hand with the first `fingers` fingers raised
pub fn hand_mask(fingers: usize) -> GrayImage {
    let (width, height) = HAND_SIZE;
    let mut mask = GrayImage::new(width, height);
    let (x, y, w, h) = BODY;
    draw_filled_rect_mut(&mut mask, Rect::at(x, y).of_size(w, h), Luma([255u8]));

    for &(left, top) in FINGERS.iter().take(fingers) {
        let length = (BODY.1 - top) as u32;
        draw_filled_rect_mut(&mut mask, Rect::at(left, top).of_size(FINGER_WIDTH, length), Luma([255u8]));
    }
    mask
}

/// Mask with a single filled disc
pub fn disc_mask(size: u32, center: (i32, i32), radius: i32) -> GrayImage {
    let mut mask = GrayImage::new(size, size);
    draw_filled_circle_mut(&mut mask, center, radius, Luma([255u8]));
    mask
}

/// Mask with filled rectangles given as (x, y, width, height)
pub fn rect_mask(width: u32, height: u32, rects: &[(i32, i32, u32, u32)]) -> GrayImage {
    let mut mask = GrayImage::new(width, height);
    for &(x, y, w, h) in rects {
        draw_filled_rect_mut(&mut mask, Rect::at(x, y).of_size(w, h), Luma([255u8]));
    }
    mask
}

/// Color frame: skin-colored where the mask is set, black elsewhere
pub fn frame_from_mask(mask: &GrayImage) -> RgbImage {
    RgbImage::from_fn(mask.width(), mask.height(), |x, y| {
        if mask.get_pixel(x, y)[0] > 0 {
            SKIN_RGB
        } else {
            Rgb([0, 0, 0])
        }
    })
}

pub fn hand_frame(fingers: usize) -> RgbImage {
    frame_from_mask(&hand_mask(fingers))
}

pub fn black_frame(width: u32, height: u32) -> RgbImage {
    RgbImage::new(width, height)
}

pub fn pt(x: i32, y: i32) -> Point<i32> {
    Point::new(x, y)
}

pub fn outer(points: &[(i32, i32)]) -> handshapes::Contour {
    handshapes::Contour {
        points: points.iter().map(|&(x, y)| Point::new(x, y)).collect(),
        kind: handshapes::BorderKind::Outer,
        parent: None,
    }
}

/// Save frames as numbered PNGs into `dir`
pub fn write_frames(dir: &std::path::Path, frames: &[RgbImage]) {
    for (i, frame) in frames.iter().enumerate() {
        frame
            .save_with_format(dir.join(format!("{:04}.png", i + 1)), image::ImageFormat::Png)
            .expect("Failed to save test frame");
    }
}
