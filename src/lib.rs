//! cue-tones: notification tone generator for lofi.nvim.
//!
//! Synthesizes short sine-wave cues (error, fail, success) and writes them
//! as mono 16-bit PCM WAV files at 44.1kHz.
//!
//! # Modules
//!
//! - [`synth`]: Sine synthesis and 16-bit quantization
//! - [`audio`]: WAV writing and header probing
//! - [`types`]: Cue table and generated clip records
//! - [`generation`]: Writes cues into the output directory
//! - [`config`]: Runtime configuration (GeneratorConfig)
//! - [`error`]: Error types and codes (ToneError, ErrorCode)
//!
//! # Example
//!
//! ```rust,ignore
//! use cue_tones::{generate_all, GeneratorConfig, SoundCue};
//!
//! let config = GeneratorConfig {
//!     amplitude: 0.4,
//!     ..Default::default()
//! };
//!
//! // Writes assets/sounds/{error,fail,success}.wav
//! let clips = generate_all(&config, &SoundCue::ALL)?;
//! ```

pub mod audio;
pub mod cli;
pub mod config;
pub mod error;
pub mod generation;
pub mod logging;
pub mod synth;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use config::GeneratorConfig;
pub use error::{ErrorCode, Result, ToneError};
pub use generation::{generate_all, generate_cue};
pub use synth::{synthesize, ToneSpec, SAMPLE_RATE};
pub use types::{compute_clip_id, GeneratedClip, SoundCue};
