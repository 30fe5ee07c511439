use image::{GrayImage, RgbImage};
use imageproc::point::Point;
use imageproc::rect::Rect;

/// A captured color frame. The core only ever borrows it.
pub type Frame = RgbImage;

/// Binary skin mask: 255 where the skin rule holds, 0 elsewhere.
pub type SkinMask = GrayImage;

/// Mask value written for skin pixels
pub const SKIN: u8 = 255;

/// Whether a contour follows the outside of a region or the inside of a hole
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderKind {
    Outer,
    Hole,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    pub points: Vec<Point<i32>>,
    pub kind: BorderKind,
    /// Index of the enclosing contour in the same `ContourSet`
    pub parent: Option<usize>,
}

impl Contour {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Enclosed area of the closed polyline (shoelace formula)
    pub fn area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }

        let mut twice = 0i64;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            twice += a.x as i64 * b.y as i64 - b.x as i64 * a.y as i64;
        }
        (twice as f64 / 2.0).abs()
    }

    /// Up-right bounding rectangle, None for an empty contour
    pub fn bounding_rect(&self) -> Option<Rect> {
        let first = self.points.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &self.points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Rect::at(min_x, min_y).of_size((max_x - min_x + 1) as u32, (max_y - min_y + 1) as u32))
    }
}

/// All contours of one mask plus their nesting
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContourSet {
    pub contours: Vec<Contour>,
}

impl ContourSet {
    pub fn len(&self) -> usize {
        self.contours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Contour> {
        self.contours.get(index)
    }

    /// Indices of the contours directly nested inside `index`
    pub fn children(&self, index: usize) -> Vec<usize> {
        self.contours
            .iter()
            .enumerate()
            .filter(|(_, c)| c.parent == Some(index))
            .map(|(i, _)| i)
            .collect()
    }

    /// Nesting level: 0 for top-level contours
    pub fn depth(&self, index: usize) -> usize {
        let mut depth = 0;
        let mut current = self.contours.get(index).and_then(|c| c.parent);
        while let Some(parent) = current {
            depth += 1;
            current = self.contours.get(parent).and_then(|c| c.parent);
        }
        depth
    }
}

/// Convex hull as ascending indices into the contour's points
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvexHull {
    pub indices: Vec<usize>,
}

impl ConvexHull {
    pub fn points(&self, contour: &Contour) -> Vec<Point<i32>> {
        self.indices.iter().map(|&i| contour.points[i]).collect()
    }
}

/// Fixed-point scale of `Defect::depth`
pub const DEPTH_SCALE: u32 = 256;

/// Concavity between two consecutive hull points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Defect {
    pub start: usize,
    pub end: usize,
    pub farthest: usize,
    /// Distance from the farthest point to the hull edge, times 256
    pub depth: u32,
}

impl Defect {
    /// Depth in whole pixels
    pub fn pixel_depth(&self) -> u32 {
        self.depth / DEPTH_SCALE
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: (f32, f32),
    pub radius: f32,
}

/// Geometry of the dominant contour and the finger filter applied to it
#[derive(Debug, Clone, PartialEq)]
pub struct HandAnalysis {
    pub contour_index: usize,
    pub hull: ConvexHull,
    pub defects: Vec<Defect>,
    pub enclosing: Circle,
    pub bounding_rect: Rect,
    /// Defects accepted as fingers, kept for overlay rendering
    pub fingers: Vec<Defect>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GestureLabel {
    Fist,
    VSign,
    OpenHand,
}

impl GestureLabel {
    pub const ALL: [GestureLabel; 3] = [GestureLabel::Fist, GestureLabel::VSign, GestureLabel::OpenHand];

    pub fn name(&self) -> &'static str {
        match self {
            GestureLabel::Fist => "Fist",
            GestureLabel::VSign => "V-sign",
            GestureLabel::OpenHand => "Open hand",
        }
    }

    /// Text shown on the overlay
    pub fn caption(&self) -> &'static str {
        match self {
            GestureLabel::Fist => "A Fist!",
            GestureLabel::VSign => "V Yeah!",
            GestureLabel::OpenHand => "High Five!",
        }
    }
}

impl std::fmt::Display for GestureLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything derived from a single frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameAnalysis {
    pub mask: SkinMask,
    pub contours: ContourSet,
    /// None when the frame has no contour or the dominant one is degenerate
    pub hand: Option<HandAnalysis>,
    pub finger_count: usize,
    pub label: Option<GestureLabel>,
}
