use imageproc::point::Point;
use crate::models::{Circle, Contour, ConvexHull, Defect, DEPTH_SCALE};

fn cross(o: Point<i32>, a: Point<i32>, b: Point<i32>) -> i64 {
    (a.x - o.x) as i64 * (b.y - o.y) as i64 - (a.y - o.y) as i64 * (b.x - o.x) as i64
}

/// Convex hull of a contour as indices into its points, in contour order.
///
/// Collinear points on hull edges are not part of the hull.
pub fn convex_hull(contour: &Contour) -> ConvexHull {
    let points = &contour.points;
    if points.len() < 3 {
        let mut indices: Vec<usize> = (0..points.len()).collect();
        indices.dedup_by(|a, b| points[*a] == points[*b]);
        return ConvexHull { indices };
    }

    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by_key(|&i| (points[i].x, points[i].y, i));

    // Andrew's monotone chain, lower then upper half
    let mut hull: Vec<usize> = Vec::with_capacity(2 * order.len());
    for pass in [order.clone(), order.into_iter().rev().collect()] {
        let base = hull.len();
        for i in pass {
            while hull.len() >= base + 2
                && cross(points[hull[hull.len() - 2]], points[hull[hull.len() - 1]], points[i]) <= 0
            {
                hull.pop();
            }
            hull.push(i);
        }
        // the last point of each half starts the other one
        hull.pop();
    }

    hull.sort_unstable();
    hull.dedup();
    ConvexHull { indices: hull }
}

/// Convexity defects between a contour and its hull.
///
/// For every pair of consecutive hull vertices the contour points strictly
/// between them are searched for the one farthest from the hull edge. Edges
/// whose farthest point lies on the edge produce no defect.
pub fn convexity_defects(contour: &Contour, hull: &ConvexHull) -> Vec<Defect> {
    let points = &contour.points;
    let n = points.len();
    let h = &hull.indices;
    if n < 4 || h.len() < 3 {
        return Vec::new();
    }

    let mut defects = Vec::new();
    for k in 0..h.len() {
        let start = h[k];
        let end = h[(k + 1) % h.len()];
        let (a, b) = (points[start], points[end]);
        let dx = (b.x - a.x) as f64;
        let dy = (b.y - a.y) as f64;
        let length = (dx * dx + dy * dy).sqrt();
        if length == 0.0 {
            continue;
        }

        let mut max_depth = 0.0;
        let mut farthest = None;
        let mut j = (start + 1) % n;
        while j != end {
            let p = points[j];
            let dist = (dx * (p.y - a.y) as f64 - dy * (p.x - a.x) as f64).abs() / length;
            if dist > max_depth {
                max_depth = dist;
                farthest = Some(j);
            }
            j = (j + 1) % n;
        }

        if let Some(farthest) = farthest {
            defects.push(Defect {
                start,
                end,
                farthest,
                depth: (max_depth * DEPTH_SCALE as f64).round() as u32,
            });
        }
    }

    defects
}

fn circle_from_two(a: (f64, f64), b: (f64, f64)) -> (f64, f64, f64) {
    let cx = (a.0 + b.0) / 2.0;
    let cy = (a.1 + b.1) / 2.0;
    (cx, cy, ((a.0 - cx).powi(2) + (a.1 - cy).powi(2)).sqrt())
}

fn circle_from_three(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> (f64, f64, f64) {
    let d = 2.0 * (a.0 * (b.1 - c.1) + b.0 * (c.1 - a.1) + c.0 * (a.1 - b.1));
    if d.abs() < 1e-12 {
        // collinear: the widest pair spans the circle
        return [circle_from_two(a, b), circle_from_two(a, c), circle_from_two(b, c)]
            .into_iter()
            .fold((0.0, 0.0, -1.0), |best, next| if next.2 > best.2 { next } else { best });
    }

    let a2 = a.0 * a.0 + a.1 * a.1;
    let b2 = b.0 * b.0 + b.1 * b.1;
    let c2 = c.0 * c.0 + c.1 * c.1;
    let cx = (a2 * (b.1 - c.1) + b2 * (c.1 - a.1) + c2 * (a.1 - b.1)) / d;
    let cy = (a2 * (c.0 - b.0) + b2 * (a.0 - c.0) + c2 * (b.0 - a.0)) / d;
    (cx, cy, ((a.0 - cx).powi(2) + (a.1 - cy).powi(2)).sqrt())
}

fn contains(circle: (f64, f64, f64), p: (f64, f64)) -> bool {
    let (cx, cy, r) = circle;
    ((p.0 - cx).powi(2) + (p.1 - cy).powi(2)).sqrt() <= r + 1e-7 * r.max(1.0)
}

/// Smallest circle containing every point (incremental Welzl construction)
pub fn min_enclosing_circle(points: &[Point<i32>]) -> Option<Circle> {
    let pts: Vec<(f64, f64)> = points.iter().map(|p| (p.x as f64, p.y as f64)).collect();
    let first = *pts.first()?;

    let mut circle = (first.0, first.1, 0.0);
    for i in 1..pts.len() {
        if contains(circle, pts[i]) {
            continue;
        }
        circle = (pts[i].0, pts[i].1, 0.0);
        for j in 0..i {
            if contains(circle, pts[j]) {
                continue;
            }
            circle = circle_from_two(pts[i], pts[j]);
            for k in 0..j {
                if !contains(circle, pts[k]) {
                    circle = circle_from_three(pts[i], pts[j], pts[k]);
                }
            }
        }
    }

    Some(Circle {
        center: (circle.0 as f32, circle.1 as f32),
        radius: circle.2 as f32,
    })
}
