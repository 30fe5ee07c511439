pub mod capture;
pub mod detection;
pub mod display;
pub mod models;
pub mod pipeline;

pub use capture::{CaptureError, FrameList, FrameSource, ImageSequence};
pub use detection::GesturePipeline;
pub use models::{
    BorderKind, Circle, Contour, ContourSet, ConvexHull, Defect, Frame, FrameAnalysis, GestureLabel, HandAnalysis,
    SkinMask,
};
pub use pipeline::{FrameLoop, KeySource, NoKeys, RunSummary, StdinKeys, StopReason};
