use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::LevelFilter;

use handshapes::models::GestureLabel;
use handshapes::pipeline::ESC;
use handshapes::{FrameLoop, GesturePipeline, ImageSequence, StdinKeys, StopReason};

#[derive(Parser)]
#[command(name = "handshapes")]
#[command(about = "Recognise fist, V-sign and open hand in a stream of frames")]
struct Cli {
    /// Image file or directory of frames (read in file name order)
    #[arg(value_name = "SOURCE")]
    source: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Save every display surface to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,

    /// Wait this long for a key press after each frame
    #[arg(long, value_name = "MS", default_value_t = 30)]
    delay_ms: u64,

    /// Stop after this many frames
    #[arg(long, value_name = "N")]
    max_frames: Option<usize>,

    /// Key that stops the loop when typed on stdin followed by Enter [default: ESC]
    #[arg(long, value_name = "KEY")]
    quit_key: Option<char>,

    /// Minimum defect depth in pixels between two fingers
    #[arg(long, value_name = "PX", default_value_t = 15)]
    min_depth: u32,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    env_logger::Builder::new()
        .filter(Some(env!("CARGO_CRATE_NAME")), level)
        .parse_default_env()
        .init();

    let mut source = ImageSequence::open(&args.source)?;

    let analyzer = GesturePipeline::new().with_min_defect_depth(args.min_depth);
    let mut frame_loop = FrameLoop::new(analyzer)
        .with_verbose(true)
        .with_keys(Box::new(StdinKeys::spawn()))
        .with_delay(Duration::from_millis(args.delay_ms))
        .with_max_frames(args.max_frames)
        .with_quit_key(args.quit_key.unwrap_or(ESC));

    if let Some(debug_dir) = args.debug_out {
        frame_loop = frame_loop.with_debug(debug_dir)?;
    }

    let summary = frame_loop.run(&mut source)?;

    println!("\n=== Hand Shape Results ===");
    println!("Frames processed: {}", summary.frames);
    for label in GestureLabel::ALL {
        println!("  {:<10} {}", label.name(), summary.count(label));
    }
    println!("  {:<10} {}", "none", summary.unlabeled);

    match summary.stop {
        StopReason::EndOfStream => println!("End of stream."),
        StopReason::ReadFailure(msg) => println!("Cannot read a frame from video stream: {}", msg),
        StopReason::QuitKey => println!("Quit key pressed by user."),
        StopReason::FrameLimit => println!("Frame limit reached."),
    }

    Ok(())
}
