//! CLI argument parser.
//!
//! Every flag is optional; running with no arguments writes all three cues
//! into `assets/sounds`.

use std::path::PathBuf;

use clap::Parser;

use crate::config::GeneratorConfig;
use crate::types::SoundCue;

/// cue-tones: generate notification sounds for lofi.nvim
#[derive(Parser, Debug)]
#[command(name = "cue-tones")]
#[command(about = "Generate error, fail and success notification tones as WAV files")]
#[command(version)]
pub struct Cli {
    /// Directory to write WAV files into (default: assets/sounds)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Only generate the named cue (repeatable)
    #[arg(short, long = "cue", value_enum)]
    pub cues: Vec<SoundCue>,

    /// Peak amplitude as a fraction of full scale, in (0, 1] (default: 0.5)
    #[arg(short, long)]
    pub amplitude: Option<f64>,

    /// Print the generated clips as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Returns the cues to generate, in generation order, without repeats.
    ///
    /// Defaults to every cue when none were named.
    pub fn selected_cues(&self) -> Vec<SoundCue> {
        if self.cues.is_empty() {
            return SoundCue::ALL.to_vec();
        }
        SoundCue::ALL
            .into_iter()
            .filter(|cue| self.cues.contains(cue))
            .collect()
    }

    /// Layers the command-line overrides on top of `base`.
    pub fn apply_to(&self, base: GeneratorConfig) -> GeneratorConfig {
        base.with_overrides(self.output_dir.clone(), self.amplitude)
    }

    /// Returns the tracing filter directive for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
