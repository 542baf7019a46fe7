//! Generator configuration module.
//!
//! Contains the runtime configuration for cue-tones: where the clips are
//! written and how loud they are.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::synth::DEFAULT_AMPLITUDE;

/// Default asset directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "assets/sounds";

/// Environment variable overriding the output directory.
pub const ENV_OUTPUT_DIR: &str = "CUE_TONES_OUTPUT_DIR";

/// Environment variable overriding the peak amplitude.
pub const ENV_AMPLITUDE: &str = "CUE_TONES_AMPLITUDE";

/// Runtime configuration for the generator.
///
/// Built from defaults, then environment variables, then command-line
/// arguments, each layer overriding the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Directory the WAV files are written into.
    pub output_dir: PathBuf,

    /// Peak amplitude as a fraction of full scale.
    /// Default: 0.5
    pub amplitude: f64,
}

impl GeneratorConfig {
    /// Creates a new GeneratorConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a GeneratorConfig from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `CUE_TONES_OUTPUT_DIR` - Directory to write WAV files into
    /// - `CUE_TONES_AMPLITUDE` - Peak amplitude in (0, 1]
    ///
    /// Falls back to defaults for unset or invalid variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates a GeneratorConfig from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_OUTPUT_DIR) {
            if !path.trim().is_empty() {
                config.output_dir = PathBuf::from(path);
            }
        }

        if let Some(amplitude_str) = lookup(ENV_AMPLITUDE) {
            if let Ok(amplitude) = amplitude_str.trim().parse::<f64>() {
                if amplitude > 0.0 && amplitude <= 1.0 {
                    config.amplitude = amplitude;
                }
            }
        }

        config
    }

    /// Applies command-line overrides on top of this configuration.
    pub fn with_overrides(mut self, output_dir: Option<PathBuf>, amplitude: Option<f64>) -> Self {
        if let Some(dir) = output_dir {
            self.output_dir = dir;
        }
        if let Some(amplitude) = amplitude {
            self.amplitude = amplitude;
        }
        self
    }

    /// Validates the configuration.
    ///
    /// Returns an error message if validation fails, None otherwise.
    pub fn validate(&self) -> Option<String> {
        if self.output_dir.as_os_str().is_empty() {
            return Some("output_dir must not be empty".to_string());
        }

        if !self.amplitude.is_finite() || self.amplitude <= 0.0 || self.amplitude > 1.0 {
            return Some(format!(
                "amplitude out of range: {} (must be in (0, 1])",
                self.amplitude
            ));
        }

        None
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            amplitude: DEFAULT_AMPLITUDE,
        }
    }
}
