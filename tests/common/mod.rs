mod fixtures;
#[allow(unused_imports)]
pub use fixtures::*;

// Re-export commonly used types from handshapes for tests
#[allow(unused_imports)]
pub use handshapes::models::{
    BorderKind, Circle, Contour, ContourSet, ConvexHull, Defect, Frame, FrameAnalysis, GestureLabel, SkinMask, SKIN,
};
