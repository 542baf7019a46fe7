//! Tone generation module.
//!
//! Provides the pipeline that turns cues into WAV files.

pub mod pipeline;

// Re-export commonly used items
pub use pipeline::{generate_all, generate_cue};
