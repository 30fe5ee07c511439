//! Video sources.
//!
//! A source yields frames until it is exhausted. Only still images and
//! directories of numbered frames are supported.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::models::Frame;

const FRAME_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "bmp"];

#[derive(Debug)]
pub enum CaptureError {
    /// The source could not be opened at all
    SourceUnavailable(String),
    /// A read inside the loop returned no frame
    FrameReadFailure(String),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::SourceUnavailable(msg) => write!(f, "cannot open video source: {msg}"),
            CaptureError::FrameReadFailure(msg) => write!(f, "cannot read a frame from video stream: {msg}"),
        }
    }
}

impl std::error::Error for CaptureError {}

/// Producer of frames. `Ok(None)` means the stream is exhausted.
pub trait FrameSource {
    fn read(&mut self) -> Result<Option<Frame>, CaptureError>;

    /// Human-readable name (used in log output)
    fn name(&self) -> String;
}

/// Frames decoded from an image file or from every image in a directory,
/// in file name order
pub struct ImageSequence {
    origin: PathBuf,
    paths: Vec<PathBuf>,
    next: usize,
}

impl ImageSequence {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CaptureError> {
        let path = path.as_ref();
        let unavailable = |e: std::io::Error| CaptureError::SourceUnavailable(format!("{}: {}", path.display(), e));

        let paths = if path.is_dir() {
            let mut paths = Vec::new();
            for entry in std::fs::read_dir(path).map_err(unavailable)? {
                let entry_path = entry.map_err(unavailable)?.path();
                if entry_path.is_file() && is_frame_file(&entry_path) {
                    paths.push(entry_path);
                }
            }
            paths.sort();
            paths
        } else if path.is_file() {
            vec![path.to_path_buf()]
        } else {
            return Err(CaptureError::SourceUnavailable(format!("{}: no such file or directory", path.display())));
        };

        if paths.is_empty() {
            return Err(CaptureError::SourceUnavailable(format!("{}: no image frames found", path.display())));
        }

        log::info!("opened {} ({} frames)", path.display(), paths.len());

        Ok(Self {
            origin: path.to_path_buf(),
            paths,
            next: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl FrameSource for ImageSequence {
    fn read(&mut self) -> Result<Option<Frame>, CaptureError> {
        let Some(path) = self.paths.get(self.next) else {
            return Ok(None);
        };
        self.next += 1;

        let img = image::open(path)
            .map_err(|e| CaptureError::FrameReadFailure(format!("{}: {}", path.display(), e)))?;
        Ok(Some(img.to_rgb8()))
    }

    fn name(&self) -> String {
        self.origin.display().to_string()
    }
}

/// Frames held in memory, handed out once each
pub struct FrameList {
    frames: std::vec::IntoIter<Frame>,
}

impl FrameList {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self {
            frames: frames.into_iter(),
        }
    }
}

impl FrameSource for FrameList {
    fn read(&mut self) -> Result<Option<Frame>, CaptureError> {
        Ok(self.frames.next())
    }

    fn name(&self) -> String {
        "memory".to_string()
    }
}

fn is_frame_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| FRAME_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}
