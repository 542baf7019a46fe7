//! GeneratedClip type recording a written cue file.
//!
//! Clips are identified by a content hash of their PCM payload, so two runs
//! with identical parameters report the same clip_id.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::PathBuf;

use crate::synth::ToneSpec;
use crate::types::SoundCue;

/// A cue tone that has been written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedClip {
    /// First 16 hex characters of the SHA256 of the PCM payload.
    pub clip_id: String,

    /// Which cue this file is.
    pub cue: SoundCue,

    /// Full filesystem path to the WAV file.
    pub path: PathBuf,

    pub frequency_hz: f64,

    /// Requested duration in seconds.
    pub duration_sec: f64,

    pub amplitude: f64,

    /// Audio sample rate in Hz. Always 44100 for cue tones.
    pub sample_rate: u32,

    /// Number of frames actually written.
    pub frames: usize,
}

impl GeneratedClip {
    /// Creates a GeneratedClip, hashing `samples` for the clip_id.
    pub fn new(
        cue: SoundCue,
        path: PathBuf,
        spec: &ToneSpec,
        sample_rate: u32,
        samples: &[i16],
    ) -> Self {
        Self {
            clip_id: compute_clip_id(samples),
            cue,
            path,
            frequency_hz: spec.frequency_hz,
            duration_sec: spec.duration_sec,
            amplitude: spec.amplitude,
            sample_rate,
            frames: samples.len(),
        }
    }
}

/// Computes a deterministic clip ID from PCM samples.
///
/// Samples are hashed as little-endian bytes, the same layout they have in
/// the WAV data chunk.
pub fn compute_clip_id(samples: &[i16]) -> String {
    let mut hasher = Sha256::new();
    for sample in samples {
        hasher.update(sample.to_le_bytes());
    }
    let result = hasher.finalize();
    // Take first 8 bytes (16 hex chars)
    hex::encode(&result[..8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::{synthesize, SAMPLE_RATE};

    #[test]
    fn clip_id_deterministic() {
        let id1 = compute_clip_id(&[0, 1, 2, -3]);
        let id2 = compute_clip_id(&[0, 1, 2, -3]);
        assert_eq!(id1, id2);
        assert_eq!(id1.len(), 16);
        assert!(id1.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn clip_id_varies_with_samples() {
        assert_ne!(compute_clip_id(&[0, 1, 2]), compute_clip_id(&[0, 1, 3]));
        assert_ne!(compute_clip_id(&[0, 1]), compute_clip_id(&[0, 1, 0]));
    }

    #[test]
    fn clip_records_tone_parameters() {
        let spec = SoundCue::Success.tone(0.5);
        let samples = synthesize(&spec, SAMPLE_RATE).unwrap();
        let clip = GeneratedClip::new(
            SoundCue::Success,
            PathBuf::from("assets/sounds/success.wav"),
            &spec,
            SAMPLE_RATE,
            &samples,
        );

        assert_eq!(clip.frames, 13230);
        assert_eq!(clip.frequency_hz, 800.0);
        assert_eq!(clip.sample_rate, 44100);
        assert_eq!(clip.clip_id, compute_clip_id(&samples));
    }

    #[test]
    fn clip_serializes_cue_name() {
        let spec = SoundCue::Error.tone(0.5);
        let clip = GeneratedClip::new(
            SoundCue::Error,
            PathBuf::from("error.wav"),
            &spec,
            SAMPLE_RATE,
            &[0, 1],
        );
        let json = serde_json::to_value(&clip).unwrap();
        assert_eq!(json["cue"], "error");
        assert_eq!(json["frames"], 2);
    }
}
