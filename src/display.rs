use std::convert::Infallible;
use std::path::PathBuf;

use anyhow::Result;
use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    mono_font::{ascii::FONT_10X20, MonoTextStyle},
    pixelcolor::{Rgb888, RgbColor},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
    Drawable, Pixel,
};
use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_circle_mut, draw_hollow_rect_mut, draw_line_segment_mut, draw_polygon_mut};
use imageproc::point::Point;

use crate::models::{Contour, Frame, FrameAnalysis, GestureLabel};

const RED: Rgb<u8> = Rgb([255, 0, 0]);
const GREEN: Rgb<u8> = Rgb([0, 255, 0]);
const BLUE: Rgb<u8> = Rgb([0, 0, 255]);
const CYAN: Rgb<u8> = Rgb([0, 255, 255]);
const TIP: Rgb<u8> = Rgb([255, 255, 124]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Caption color
pub const LABEL_COLOR: Rgb<u8> = Rgb([0, 0, 225]);

/// Bottom-left corner of the caption
pub const LABEL_ORIGIN: (i32, i32) = (50, 100);

/// Named display surfaces, one image each per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    Input,
    Skin,
    Contour,
    Gesture,
}

impl Surface {
    pub const ALL: [Surface; 4] = [Surface::Input, Surface::Skin, Surface::Contour, Surface::Gesture];

    pub fn name(&self) -> &'static str {
        match self {
            Surface::Input => "input",
            Surface::Skin => "skin",
            Surface::Contour => "contour",
            Surface::Gesture => "gesture",
        }
    }

    fn position(&self) -> usize {
        match self {
            Surface::Input => 0,
            Surface::Skin => 1,
            Surface::Contour => 2,
            Surface::Gesture => 3,
        }
    }
}

/// Receiver of rendered surfaces
pub trait DisplaySink {
    fn show(&mut self, surface: Surface, frame_index: usize, image: &DynamicImage) -> Result<()>;

    /// Surfaces that are never shown are not rendered
    fn wants(&self, _surface: Surface) -> bool {
        true
    }

    fn set_verbose(&mut self, _verbose: bool) {}
}

/// Discards everything
pub struct NullSink;

impl DisplaySink for NullSink {
    fn show(&mut self, _surface: Surface, _frame_index: usize, _image: &DynamicImage) -> Result<()> {
        Ok(())
    }

    fn wants(&self, _surface: Surface) -> bool {
        false
    }
}

/// Writes each surface to its own subdirectory, e.g. `03_contour/0007.png`
pub struct DebugDirSink {
    output_dir: PathBuf,
    verbose: bool,
}

impl DebugDirSink {
    /// The directory must be empty or non-existent
    pub fn new(output_dir: PathBuf) -> Result<Self> {
        if output_dir.exists() {
            let entries = std::fs::read_dir(&output_dir)?;
            if entries.count() > 0 {
                return Err(anyhow::anyhow!(
                    "Debug directory is not empty: {}",
                    output_dir.display()
                ));
            }
        } else {
            std::fs::create_dir_all(&output_dir)?;
        }

        Ok(Self {
            output_dir,
            verbose: false,
        })
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn surface_dir(&self, surface: Surface) -> PathBuf {
        self.output_dir.join(format!("{:02}_{}", surface.position(), surface.name()))
    }
}

impl DisplaySink for DebugDirSink {
    fn show(&mut self, surface: Surface, frame_index: usize, image: &DynamicImage) -> Result<()> {
        let dir = self.surface_dir(surface);
        std::fs::create_dir_all(&dir)?;

        let filename = format!("{:04}.png", frame_index);
        image.save(dir.join(&filename))
            .map_err(|e| anyhow::anyhow!("Failed to save debug image: {}", e))?;

        if self.verbose {
            log::debug!("saved {}/{}", dir.display(), filename);
        }
        Ok(())
    }

    fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }
}

/// Render one surface of an analysed frame
pub fn render_surface(surface: Surface, frame: &Frame, analysis: &FrameAnalysis) -> DynamicImage {
    match surface {
        Surface::Input => DynamicImage::ImageRgb8(frame.clone()),
        Surface::Skin => DynamicImage::ImageLuma8(analysis.mask.clone()),
        Surface::Contour => DynamicImage::ImageRgb8(render_contour(analysis)),
        Surface::Gesture => DynamicImage::ImageRgb8(render_gesture(frame, analysis)),
    }
}

/// Dominant contour filled red, outlined blue, with its bounding box in green
pub fn render_contour(analysis: &FrameAnalysis) -> RgbImage {
    let (width, height) = analysis.mask.dimensions();
    let mut canvas = RgbImage::new(width, height);

    if let Some(hand) = &analysis.hand {
        let contour = &analysis.contours.contours[hand.contour_index];
        fill_contour(&mut canvas, contour, RED);
        draw_closed(&mut canvas, &contour.points, BLUE);
        draw_hollow_rect_mut(&mut canvas, hand.bounding_rect, GREEN);
    }

    canvas
}

/// Frame with the hand contour, hull, finger defects, hand center and the label caption
pub fn render_gesture(frame: &Frame, analysis: &FrameAnalysis) -> RgbImage {
    let mut canvas = frame.clone();

    if let Some(hand) = &analysis.hand {
        let contour = &analysis.contours.contours[hand.contour_index];
        draw_hollow_rect_mut(&mut canvas, hand.bounding_rect, BLACK);
        draw_closed(&mut canvas, &contour.points, RED);
        draw_closed(&mut canvas, &hand.hull.points(contour), GREEN);

        let (cx, cy) = hand.enclosing.center;
        draw_hollow_circle_mut(&mut canvas, (cx.round() as i32, cy.round() as i32), 10, RED);

        for defect in &hand.fingers {
            let start = contour.points[defect.start];
            let end = contour.points[defect.end];
            let far = contour.points[defect.farthest];
            draw_line_segment_mut(&mut canvas, as_f32(start), as_f32(far), CYAN);
            draw_line_segment_mut(&mut canvas, as_f32(end), as_f32(far), CYAN);
            draw_hollow_circle_mut(&mut canvas, (start.x, start.y), 4, TIP);
        }
    }

    if let Some(label) = analysis.label {
        draw_caption(&mut canvas, label);
    }

    canvas
}

/// Write the label caption with its baseline at `LABEL_ORIGIN`
pub fn draw_caption(canvas: &mut RgbImage, label: GestureLabel) {
    let [r, g, b] = LABEL_COLOR.0;
    let character_style = MonoTextStyle::new(&FONT_10X20, Rgb888::new(r, g, b));
    let text_style = TextStyleBuilder::new()
        .alignment(Alignment::Left)
        .baseline(Baseline::Bottom)
        .build();
    let origin = embedded_graphics::geometry::Point::new(LABEL_ORIGIN.0, LABEL_ORIGIN.1);

    match Text::with_text_style(label.caption(), origin, character_style, text_style).draw(&mut Target(canvas)) {
        Ok(_) => {}
        Err(infallible) => match infallible {},
    }
}

struct Target<'a>(&'a mut RgbImage);

impl OriginDimensions for Target<'_> {
    fn size(&self) -> Size {
        Size::new(self.0.width(), self.0.height())
    }
}

impl DrawTarget for Target<'_> {
    type Color = Rgb888;

    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0
                && (point.x as u32) < self.0.width()
                && point.y >= 0
                && (point.y as u32) < self.0.height()
            {
                self.0.put_pixel(point.x as u32, point.y as u32, Rgb([color.r(), color.g(), color.b()]));
            }
        }

        Ok(())
    }
}

fn as_f32(p: Point<i32>) -> (f32, f32) {
    (p.x as f32, p.y as f32)
}

fn draw_closed(canvas: &mut RgbImage, points: &[Point<i32>], color: Rgb<u8>) {
    for (i, &a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        draw_line_segment_mut(canvas, as_f32(a), as_f32(b), color);
    }
}

fn fill_contour(canvas: &mut RgbImage, contour: &Contour, color: Rgb<u8>) {
    let mut poly = contour.points.clone();
    // the polygon must not repeat its first point
    while poly.len() > 1 && poly.first() == poly.last() {
        poly.pop();
    }
    if poly.len() >= 3 {
        draw_polygon_mut(canvas, &poly, color);
    }
}
