//! Tone synthesis module.
//!
//! Renders sine tones to 16-bit PCM.

pub mod tone;

// Re-export commonly used items
pub use tone::{
    frame_count, sample_at, synthesize, validate_amplitude, ToneSpec, DEFAULT_AMPLITUDE,
    FULL_SCALE, MAX_DURATION_SEC, SAMPLE_RATE,
};
