//! Headless pose normalizer.
//!
//! Usage: `stickpose <pose.json> [out-dir]`
//!
//! Loads a pose file, applies it to a fresh figure, logs the resulting
//! limb lengths and writes the normalized export (`stick-figure-pose.json`)
//! into `out-dir` (default: the current directory). Set `RUST_LOG=info`
//! to see progress.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use stickpose::options::Options;
use stickpose::{PoseEngine, PoseError};

fn run(input: &Path, out_dir: &Path) -> Result<(), PoseError> {
    let mut engine = PoseEngine::new((800, 600), Options::default());
    engine.load_pose_file(input)?;
    engine.update();

    for segment in engine.segments().as_slice() {
        log::info!(
            "{} -> {}: length {:.3}",
            segment.bone.parent,
            segment.bone.child,
            segment.length
        );
    }

    let path = engine.save_pose_file(out_dir)?;
    log::info!("wrote {}", path.display());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args_os().skip(1);
    let Some(input) = args.next().map(PathBuf::from) else {
        log::error!("usage: stickpose <pose.json> [out-dir]");
        return ExitCode::FAILURE;
    };
    let out_dir = args.next().map_or_else(|| PathBuf::from("."), PathBuf::from);

    match run(&input, &out_dir) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
