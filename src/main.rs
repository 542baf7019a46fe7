//! cue-tones: writes the lofi.nvim notification sounds.
//!
//! With no arguments, generates error.wav, fail.wav and success.wav in
//! assets/sounds relative to the working directory.

use std::time::Instant;

use tracing::debug;

use cue_tones::cli::Cli;
use cue_tones::config::GeneratorConfig;
use cue_tones::error::{Result, ToneError};
use cue_tones::generation::generate_all;
use cue_tones::logging::init_logging;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.log_level());

    let config = cli.apply_to(GeneratorConfig::from_env());
    if let Some(reason) = config.validate() {
        return Err(ToneError::invalid_config(reason));
    }

    let cues = cli.selected_cues();
    debug!(
        output_dir = %config.output_dir.display(),
        amplitude = config.amplitude,
        cues = ?cues,
        "Starting generation"
    );

    let start_time = Instant::now();
    let clips = generate_all(&config, &cues)?;
    debug!(
        "Wrote {} clip(s) in {:.2}ms",
        clips.len(),
        start_time.elapsed().as_secs_f64() * 1000.0
    );

    if cli.json {
        print_json(&clips);
    }

    Ok(())
}

/// Prints the generated clips as a pretty JSON array on stdout.
fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Warning: failed to serialize clip summary: {}", e),
    }
}
