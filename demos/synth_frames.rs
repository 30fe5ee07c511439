use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

const SKIN: Rgb<u8> = Rgb([205, 150, 110]);
const BACKGROUND: Rgb<u8> = Rgb([30, 40, 60]);

// (left column, top row) of each finger, left to right
const FINGERS: [(i32, i32); 5] = [(80, 90), (109, 70), (138, 60), (167, 70), (196, 90)];

fn hand(fingers: usize) -> RgbImage {
    let mut img = RgbImage::from_pixel(320, 480, BACKGROUND);
    draw_filled_rect_mut(&mut img, Rect::at(80, 140).of_size(161, 301), SKIN);
    for &(x, y) in FINGERS.iter().take(fingers) {
        draw_filled_rect_mut(&mut img, Rect::at(x, y).of_size(14, (140 - y) as u32), SKIN);
    }
    img
}

fn main() -> anyhow::Result<()> {
    let dir = std::path::PathBuf::from(std::env::args().nth(1).unwrap_or_else(|| "frames".to_string()));
    std::fs::create_dir_all(&dir)?;

    let sequence = [0, 0, 2, 2, 5, 5, 3, 0];
    for (i, &fingers) in sequence.iter().enumerate() {
        let path = dir.join(format!("{:04}.png", i + 1));
        hand(fingers).save(&path)?;
    }
    RgbImage::from_pixel(320, 480, BACKGROUND).save(dir.join(format!("{:04}.png", sequence.len() + 1)))?;

    println!("Wrote {} frames to {}", sequence.len() + 1, dir.display());
    Ok(())
}
