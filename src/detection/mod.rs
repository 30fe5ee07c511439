pub mod skin;
pub mod contours;
pub mod hull;
pub mod fingers;
pub mod gesture;

use crate::models::{ContourSet, Frame, FrameAnalysis, HandAnalysis, SkinMask};

/// Per-frame analysis: skin mask, contours, hull and defects of the largest
/// contour, finger count, label
#[derive(Debug, Clone)]
pub struct GesturePipeline {
    /// Defects must be deeper than this many pixels to count as a finger gap
    pub min_defect_depth: u32,
}

impl GesturePipeline {
    pub fn new() -> Self {
        Self {
            min_defect_depth: fingers::MIN_FINGER_DEPTH,
        }
    }

    pub fn with_min_defect_depth(mut self, depth: u32) -> Self {
        self.min_defect_depth = depth;
        self
    }

    /// Run the whole pipeline on one frame. Depends on nothing but `frame`.
    pub fn analyze(&self, frame: &Frame) -> FrameAnalysis {
        let mask = skin::detect_skin(frame);
        let contours = contours::find_contours(&mask);
        log::debug!("The number of contours detected is: {}", contours.len());

        let hand = self.analyze_hand(&contours);
        let finger_count = hand.as_ref().map_or(0, |h| h.fingers.len());
        let label = gesture::classify(finger_count, !contours.is_empty());

        FrameAnalysis {
            mask,
            contours,
            hand,
            finger_count,
            label,
        }
    }

    /// Hull, defects and finger filter for the dominant contour.
    ///
    /// None when there is no contour or the dominant one has fewer than three
    /// points.
    pub fn analyze_hand(&self, set: &ContourSet) -> Option<HandAnalysis> {
        let contour_index = contours::dominant_contour(set)?;
        let contour = &set.contours[contour_index];
        if contour.len() < 3 {
            log::debug!("dominant contour {} has only {} points", contour_index, contour.len());
            return None;
        }

        let hull = hull::convex_hull(contour);
        let defects = hull::convexity_defects(contour, &hull);
        let enclosing = hull::min_enclosing_circle(&hull.points(contour))?;
        let bounding_rect = contour.bounding_rect()?;
        let fingers = fingers::finger_defects(contour, &defects, &enclosing, self.min_defect_depth);

        log::debug!(
            "hand: contour {} ({} points, area {:.0}), {} hull points, {} defects, {} fingers",
            contour_index,
            contour.len(),
            contour.area(),
            hull.indices.len(),
            defects.len(),
            fingers.len()
        );

        Some(HandAnalysis {
            contour_index,
            hull,
            defects,
            enclosing,
            bounding_rect,
            fingers,
        })
    }

    /// Skin mask only (for debugging)
    pub fn get_mask(&self, frame: &Frame) -> SkinMask {
        skin::detect_skin(frame)
    }

    /// Contours of the skin mask only (for debugging)
    pub fn get_contours(&self, frame: &Frame) -> ContourSet {
        contours::find_contours(&skin::detect_skin(frame))
    }
}

impl Default for GesturePipeline {
    fn default() -> Self {
        Self::new()
    }
}
