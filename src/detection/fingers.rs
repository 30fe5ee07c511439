use crate::models::{Circle, Contour, Defect};

/// Minimum defect depth in pixels for a concavity to separate two fingers
pub const MIN_FINGER_DEPTH: u32 = 15;

/// Keep the defects deep enough to be a gap between fingers whose start point
/// lies above the hand center (smaller row is higher in the image).
pub fn finger_defects(contour: &Contour, defects: &[Defect], hand: &Circle, min_depth: u32) -> Vec<Defect> {
    defects
        .iter()
        .filter(|d| {
            let tip = contour.points[d.start];
            d.pixel_depth() > min_depth && (tip.y as f32) < hand.center.1
        })
        .copied()
        .collect()
}

pub fn count_fingers(contour: &Contour, defects: &[Defect], hand: &Circle, min_depth: u32) -> usize {
    finger_defects(contour, defects, hand, min_depth).len()
}
