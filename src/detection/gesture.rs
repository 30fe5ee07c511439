use crate::models::GestureLabel;

/// Exact finger-count policy: only 0, 2 and 5 have a label, and 0 only
/// counts as a fist when something was segmented at all.
pub fn classify(finger_count: usize, has_contour: bool) -> Option<GestureLabel> {
    match finger_count {
        2 => Some(GestureLabel::VSign),
        5 => Some(GestureLabel::OpenHand),
        0 if has_contour => Some(GestureLabel::Fist),
        _ => None,
    }
}
