use image::GrayImage;
use imageproc::contours::{self, BorderType};
use imageproc::point::Point;
use crate::models::{BorderKind, Contour, ContourSet};

/// Trace every region border of a binary mask, keeping the full nesting tree.
///
/// Borders are traced with Suzuki-Abe border following (any non-zero pixel is
/// foreground), then compressed so only the end points of straight
/// horizontal, vertical and diagonal runs remain. Everything outside the mask
/// counts as background, so regions touching the image edge still get an
/// outer border.
pub fn find_contours(mask: &GrayImage) -> ContourSet {
    // imageproc only starts an outer border next to a zero pixel inside the
    // image, so trace a copy framed by one background pixel on every side
    let mut framed = GrayImage::new(mask.width() + 2, mask.height() + 2);
    image::imageops::replace(&mut framed, mask, 1, 1);
    let traced = contours::find_contours::<i32>(&framed);

    let contours = traced
        .into_iter()
        .map(|c| {
            let points: Vec<Point<i32>> = c.points.iter().map(|p| Point::new(p.x - 1, p.y - 1)).collect();
            Contour {
                points: approximate_simple(&points),
                kind: match c.border_type {
                    BorderType::Outer => BorderKind::Outer,
                    BorderType::Hole => BorderKind::Hole,
                },
                parent: c.parent,
            }
        })
        .collect();

    ContourSet { contours }
}

/// Drop the interior points of straight runs in a closed chain of neighbouring
/// pixels. Chains of one or two points are returned unchanged.
pub fn approximate_simple(points: &[Point<i32>]) -> Vec<Point<i32>> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    let step = |a: Point<i32>, b: Point<i32>| ((b.x - a.x).signum(), (b.y - a.y).signum());

    (0..n)
        .filter(|&i| {
            let prev = points[(i + n - 1) % n];
            let curr = points[i];
            let next = points[(i + 1) % n];
            step(prev, curr) != step(curr, next)
        })
        .map(|i| points[i])
        .collect()
}

/// Index of the contour with the largest area.
///
/// Starts from index 0 with area 0 and only moves on a strictly larger area,
/// so equal areas keep the earlier contour.
pub fn dominant_contour(set: &ContourSet) -> Option<usize> {
    if set.is_empty() {
        return None;
    }

    let mut max_area = 0.0;
    let mut max_index = 0;
    for (i, contour) in set.contours.iter().enumerate() {
        let area = contour.area();
        if area > max_area {
            max_area = area;
            max_index = i;
        }
    }
    Some(max_index)
}
