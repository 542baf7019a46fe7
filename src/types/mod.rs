//! Core types for cue-tones.
//!
//! This module re-exports the data types used throughout the generator:
//! - [`SoundCue`]: One of the notification sounds and its default tone
//! - [`GeneratedClip`]: A cue tone that has been written to disk

mod clip;
mod cue;

// Re-export all types at the module level
pub use clip::{compute_clip_id, GeneratedClip};
pub use cue::SoundCue;
