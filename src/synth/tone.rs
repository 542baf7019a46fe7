//! Sine tone synthesis.
//!
//! Computes a phase-zero sine wave and quantizes it to signed 16-bit PCM.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ToneError};

/// Output sample rate for every cue tone (44.1kHz).
pub const SAMPLE_RATE: u32 = 44100;

/// Default peak amplitude as a fraction of full scale.
pub const DEFAULT_AMPLITUDE: f64 = 0.5;

/// Largest positive 16-bit sample value.
pub const FULL_SCALE: f64 = 32767.0;

/// Longest tone accepted by [`ToneSpec::validate`].
pub const MAX_DURATION_SEC: f64 = 60.0;

/// Synthesis parameters for a single tone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToneSpec {
    /// Sine frequency in Hz.
    pub frequency_hz: f64,

    /// Length of the tone in seconds.
    pub duration_sec: f64,

    /// Peak amplitude as a fraction of full scale, in (0, 1].
    pub amplitude: f64,
}

impl ToneSpec {
    /// Creates a ToneSpec at the default amplitude.
    pub fn new(frequency_hz: f64, duration_sec: f64) -> Self {
        Self {
            frequency_hz,
            duration_sec,
            amplitude: DEFAULT_AMPLITUDE,
        }
    }

    /// Returns a copy with the given amplitude.
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Checks that the tone can be rendered at `sample_rate`.
    pub fn validate(&self, sample_rate: u32) -> Result<()> {
        let nyquist = sample_rate as f64 / 2.0;
        if !self.frequency_hz.is_finite() || self.frequency_hz <= 0.0 || self.frequency_hz > nyquist
        {
            return Err(ToneError::invalid_frequency(self.frequency_hz, sample_rate));
        }

        if !self.duration_sec.is_finite()
            || self.duration_sec <= 0.0
            || self.duration_sec > MAX_DURATION_SEC
        {
            return Err(ToneError::invalid_duration(self.duration_sec));
        }

        validate_amplitude(self.amplitude)
    }

    /// Number of frames this tone renders to.
    pub fn frames(&self, sample_rate: u32) -> usize {
        frame_count(self.duration_sec, sample_rate)
    }
}

/// Checks that an amplitude lies in (0, 1].
pub fn validate_amplitude(amplitude: f64) -> Result<()> {
    if !amplitude.is_finite() || amplitude <= 0.0 || amplitude > 1.0 {
        return Err(ToneError::invalid_amplitude(amplitude));
    }
    Ok(())
}

/// Number of whole frames in `duration_sec` of audio.
///
/// The partial trailing frame is dropped.
pub fn frame_count(duration_sec: f64, sample_rate: u32) -> usize {
    (duration_sec * sample_rate as f64) as usize
}

/// Quantized sample `index` of the tone.
///
/// The float value is truncated toward zero, so the peak never exceeds
/// `FULL_SCALE * amplitude`.
pub fn sample_at(index: usize, spec: &ToneSpec, sample_rate: u32) -> i16 {
    let phase = 2.0 * PI * spec.frequency_hz * index as f64 / sample_rate as f64;
    (FULL_SCALE * spec.amplitude * phase.sin()) as i16
}

/// Renders a tone to 16-bit PCM samples.
///
/// # Example
///
/// ```ignore
/// use cue_tones::synth::{synthesize, ToneSpec, SAMPLE_RATE};
///
/// let samples = synthesize(&ToneSpec::new(440.0, 0.5), SAMPLE_RATE)?;
/// assert_eq!(samples.len(), 22050);
/// ```
pub fn synthesize(spec: &ToneSpec, sample_rate: u32) -> Result<Vec<i16>> {
    spec.validate(sample_rate)?;

    let frames = spec.frames(sample_rate);
    Ok((0..frames)
        .map(|i| sample_at(i, spec, sample_rate))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn frame_count_truncates() {
        assert_eq!(frame_count(0.2, SAMPLE_RATE), 8820);
        assert_eq!(frame_count(0.3, SAMPLE_RATE), 13230);
        assert_eq!(frame_count(0.4, SAMPLE_RATE), 17640);
        assert_eq!(frame_count(1.0 / 44100.0 * 2.5, SAMPLE_RATE), 2);
    }

    #[test]
    fn synthesize_length_matches_duration() {
        let samples = synthesize(&ToneSpec::new(200.0, 0.2), SAMPLE_RATE).unwrap();
        assert_eq!(samples.len(), 8820);
    }

    #[test]
    fn first_sample_is_zero() {
        let samples = synthesize(&ToneSpec::new(800.0, 0.3), SAMPLE_RATE).unwrap();
        assert_eq!(samples[0], 0);
    }

    #[test]
    fn quarter_period_hits_truncated_peak() {
        // 441 Hz at 44.1kHz has exactly 100 frames per period.
        let spec = ToneSpec::new(441.0, 0.1);
        assert_eq!(sample_at(25, &spec, SAMPLE_RATE), 16383);
        assert_eq!(sample_at(75, &spec, SAMPLE_RATE), -16383);
    }

    #[test]
    fn samples_truncate_toward_zero() {
        let spec = ToneSpec::new(200.0, 0.2);
        for i in [1usize, 7, 50, 150, 333] {
            let phase = 2.0 * PI * 200.0 * i as f64 / SAMPLE_RATE as f64;
            let exact = FULL_SCALE * 0.5 * phase.sin();
            assert_eq!(sample_at(i, &spec, SAMPLE_RATE) as f64, exact.trunc());
        }
    }

    #[test]
    fn peak_stays_within_amplitude() {
        let spec = ToneSpec::new(150.0, 0.4).with_amplitude(0.25);
        let samples = synthesize(&spec, SAMPLE_RATE).unwrap();
        let limit = (FULL_SCALE * 0.25) as i16;
        assert!(samples.iter().all(|s| s.abs() <= limit));
        assert!(samples.iter().any(|s| s.abs() >= limit - 10));
    }

    #[test]
    fn full_amplitude_does_not_overflow() {
        let spec = ToneSpec::new(441.0, 0.01).with_amplitude(1.0);
        let samples = synthesize(&spec, SAMPLE_RATE).unwrap();
        assert_eq!(samples[25], 32767);
        assert_eq!(samples[75], -32767);
    }

    #[test]
    fn rejects_invalid_frequency() {
        for freq in [0.0, -10.0, 22051.0, f64::NAN, f64::INFINITY] {
            let err = synthesize(&ToneSpec::new(freq, 0.2), SAMPLE_RATE).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidFrequency);
        }
        assert!(ToneSpec::new(22050.0, 0.2).validate(SAMPLE_RATE).is_ok());
    }

    #[test]
    fn rejects_invalid_duration() {
        for duration in [0.0, -0.1, 60.5, f64::NAN] {
            let err = synthesize(&ToneSpec::new(440.0, duration), SAMPLE_RATE).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidDuration);
        }
    }

    #[test]
    fn rejects_invalid_amplitude() {
        for amplitude in [0.0, -0.5, 1.01, f64::NAN] {
            let spec = ToneSpec::new(440.0, 0.2).with_amplitude(amplitude);
            let err = synthesize(&spec, SAMPLE_RATE).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidAmplitude);
        }
    }

    #[test]
    fn synthesis_is_deterministic() {
        let spec = ToneSpec::new(200.0, 0.2);
        assert_eq!(
            synthesize(&spec, SAMPLE_RATE).unwrap(),
            synthesize(&spec, SAMPLE_RATE).unwrap()
        );
    }
}
