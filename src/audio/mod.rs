//! Audio output module.
//!
//! Provides WAV file writing and header probing for generated tones.

pub mod wav;

// Re-export commonly used items
pub use wav::{
    probe_wav, samples_to_duration, write_pcm16, write_pcm16_to_buffer, WavInfo,
    BITS_PER_SAMPLE, CHANNELS,
};
