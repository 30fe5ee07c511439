use std::collections::BTreeMap;
use std::io::BufRead;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

use anyhow::Result;

use crate::capture::{CaptureError, FrameSource};
use crate::detection::GesturePipeline;
use crate::display::{self, DebugDirSink, DisplaySink, NullSink, Surface};
use crate::models::{FrameAnalysis, GestureLabel};

/// Default quit key
pub const ESC: char = '\u{1b}';

/// Default bounded wait per iteration
pub const DEFAULT_DELAY: Duration = Duration::from_millis(30);

/// Source of key presses checked once per frame
pub trait KeySource {
    /// Wait at most `timeout` for a key press
    fn wait_key(&mut self, timeout: Duration) -> Option<char>;
}

/// No keyboard: the wait only paces the loop
pub struct NoKeys;

impl KeySource for NoKeys {
    fn wait_key(&mut self, timeout: Duration) -> Option<char> {
        if !timeout.is_zero() {
            std::thread::sleep(timeout);
        }
        None
    }
}

/// Keys typed on stdin, one line at a time; the first character of a line is the key
pub struct StdinKeys {
    receiver: Receiver<char>,
}

impl StdinKeys {
    pub fn spawn() -> Self {
        let (sender, receiver) = mpsc::channel();
        std::thread::spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                if let Some(key) = line.trim().chars().next() {
                    if sender.send(key).is_err() {
                        break;
                    }
                }
            }
        });
        Self { receiver }
    }
}

impl KeySource for StdinKeys {
    fn wait_key(&mut self, timeout: Duration) -> Option<char> {
        match self.receiver.recv_timeout(timeout) {
            Ok(key) => Some(key),
            Err(RecvTimeoutError::Timeout) => None,
            // stdin closed, keep pacing the loop
            Err(RecvTimeoutError::Disconnected) => NoKeys.wait_key(timeout),
        }
    }
}

/// Why the loop ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    EndOfStream,
    ReadFailure(String),
    QuitKey,
    FrameLimit,
}

/// Counts gathered over one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: usize,
    pub labels: BTreeMap<GestureLabel, usize>,
    pub unlabeled: usize,
    pub stop: StopReason,
}

impl RunSummary {
    fn new() -> Self {
        Self {
            frames: 0,
            labels: BTreeMap::new(),
            unlabeled: 0,
            stop: StopReason::EndOfStream,
        }
    }

    fn record(&mut self, analysis: &FrameAnalysis) {
        self.frames += 1;
        match analysis.label {
            Some(label) => *self.labels.entry(label).or_insert(0) += 1,
            None => self.unlabeled += 1,
        }
    }

    pub fn count(&self, label: GestureLabel) -> usize {
        self.labels.get(&label).copied().unwrap_or(0)
    }
}

/// Acquire, analyse, render, wait for a key; one frame at a time
pub struct FrameLoop {
    analyzer: GesturePipeline,
    sink: Box<dyn DisplaySink>,
    keys: Box<dyn KeySource>,
    delay: Duration,
    max_frames: Option<usize>,
    quit_key: char,
    verbose: bool,
}

impl FrameLoop {
    pub fn new(analyzer: GesturePipeline) -> Self {
        Self {
            analyzer,
            sink: Box::new(NullSink),
            keys: Box::new(NoKeys),
            delay: DEFAULT_DELAY,
            max_frames: None,
            quit_key: ESC,
            verbose: false,
        }
    }

    /// Print one line per frame and let the sink log what it writes
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Write every surface of every frame below `output_dir`, which must be
    /// empty or non-existent
    pub fn with_debug(mut self, output_dir: std::path::PathBuf) -> Result<Self> {
        self.sink = Box::new(DebugDirSink::new(output_dir)?);
        Ok(self)
    }

    pub fn with_sink(mut self, sink: Box<dyn DisplaySink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_keys(mut self, keys: Box<dyn KeySource>) -> Self {
        self.keys = keys;
        self
    }

    /// Bounded key wait per iteration; also caps the frame rate
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_max_frames(mut self, max_frames: Option<usize>) -> Self {
        self.max_frames = max_frames;
        self
    }

    /// The one key that ends the loop, ESC unless set
    pub fn with_quit_key(mut self, key: char) -> Self {
        self.quit_key = key;
        self
    }

    /// Run until the source is exhausted, a read fails, a quit key is pressed
    /// or the frame limit is reached. Only sink errors are returned.
    pub fn run(&mut self, source: &mut dyn FrameSource) -> Result<RunSummary> {
        let mut summary = RunSummary::new();
        self.sink.set_verbose(self.verbose);
        log::info!("reading frames from {}", source.name());

        loop {
            if self.max_frames.is_some_and(|max| summary.frames >= max) {
                summary.stop = StopReason::FrameLimit;
                break;
            }

            let frame = match source.read() {
                Ok(Some(frame)) => frame,
                Ok(None) => {
                    summary.stop = StopReason::EndOfStream;
                    break;
                }
                Err(CaptureError::FrameReadFailure(msg)) => {
                    log::warn!("Cannot read a frame from video stream: {}", msg);
                    summary.stop = StopReason::ReadFailure(msg);
                    break;
                }
                Err(e) => return Err(e.into()),
            };

            let frame_index = summary.frames + 1;
            let analysis = self.analyzer.analyze(&frame);

            for surface in Surface::ALL {
                if self.sink.wants(surface) {
                    let image = display::render_surface(surface, &frame, &analysis);
                    self.sink.show(surface, frame_index, &image)?;
                }
            }

            if self.verbose {
                println!(
                    "frame {:4}: {} contours, {} fingers, {}",
                    frame_index,
                    analysis.contours.len(),
                    analysis.finger_count,
                    analysis.label.map_or("-", |l| l.caption())
                );
            }
            summary.record(&analysis);

            if let Some(key) = self.keys.wait_key(self.delay) {
                if key == self.quit_key {
                    log::info!("quit key pressed by user");
                    summary.stop = StopReason::QuitKey;
                    break;
                }
            }
        }

        log::info!("processed {} frames ({:?})", summary.frames, summary.stop);
        Ok(summary)
    }
}
