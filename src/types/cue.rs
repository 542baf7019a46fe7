//! SoundCue type naming the notification sounds.
//!
//! Each cue maps to a fixed file name and a default tone. Pitch falls
//! with severity: success is high, error low, fail lower still.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::synth::ToneSpec;

/// A notification sound emitted by the editor plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SoundCue {
    /// Something went wrong (200 Hz, 0.2s).
    Error,
    /// A generation failed outright (150 Hz, 0.4s).
    Fail,
    /// A generation finished (800 Hz, 0.3s).
    Success,
}

impl SoundCue {
    /// Every cue, in generation order.
    pub const ALL: [SoundCue; 3] = [SoundCue::Error, SoundCue::Fail, SoundCue::Success];

    /// Returns the string representation of the cue.
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::Error => "error",
            SoundCue::Fail => "fail",
            SoundCue::Success => "success",
        }
    }

    /// Parses a cue from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "error" => Some(SoundCue::Error),
            "fail" | "failure" => Some(SoundCue::Fail),
            "success" => Some(SoundCue::Success),
            _ => None,
        }
    }

    /// File name written inside the output directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            SoundCue::Error => "error.wav",
            SoundCue::Fail => "fail.wav",
            SoundCue::Success => "success.wav",
        }
    }

    /// Tone frequency in Hz.
    pub fn frequency_hz(&self) -> f64 {
        match self {
            SoundCue::Error => 200.0,
            SoundCue::Fail => 150.0,
            SoundCue::Success => 800.0,
        }
    }

    /// Tone length in seconds.
    pub fn duration_sec(&self) -> f64 {
        match self {
            SoundCue::Error => 0.2,
            SoundCue::Fail => 0.4,
            SoundCue::Success => 0.3,
        }
    }

    /// The cue's tone at the given peak amplitude.
    pub fn tone(&self, amplitude: f64) -> ToneSpec {
        ToneSpec::new(self.frequency_hz(), self.duration_sec()).with_amplitude(amplitude)
    }
}

impl std::fmt::Display for SoundCue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::{DEFAULT_AMPLITUDE, SAMPLE_RATE};

    #[test]
    fn cue_parsing() {
        assert_eq!(SoundCue::parse("error"), Some(SoundCue::Error));
        assert_eq!(SoundCue::parse("FAIL"), Some(SoundCue::Fail));
        assert_eq!(SoundCue::parse("failure"), Some(SoundCue::Fail));
        assert_eq!(SoundCue::parse(" success "), Some(SoundCue::Success));
        assert_eq!(SoundCue::parse("warning"), None);
    }

    #[test]
    fn cue_display_round_trips_parse() {
        for cue in SoundCue::ALL {
            assert_eq!(SoundCue::parse(&cue.to_string()), Some(cue));
        }
    }

    #[test]
    fn file_names() {
        assert_eq!(SoundCue::Error.file_name(), "error.wav");
        assert_eq!(SoundCue::Fail.file_name(), "fail.wav");
        assert_eq!(SoundCue::Success.file_name(), "success.wav");
    }

    #[test]
    fn default_tones() {
        let error = SoundCue::Error.tone(DEFAULT_AMPLITUDE);
        assert_eq!(error.frequency_hz, 200.0);
        assert_eq!(error.duration_sec, 0.2);
        assert_eq!(error.amplitude, 0.5);

        let fail = SoundCue::Fail.tone(DEFAULT_AMPLITUDE);
        assert_eq!(fail.frequency_hz, 150.0);
        assert_eq!(fail.duration_sec, 0.4);

        let success = SoundCue::Success.tone(DEFAULT_AMPLITUDE);
        assert_eq!(success.frequency_hz, 800.0);
        assert_eq!(success.duration_sec, 0.3);
    }

    #[test]
    fn pitch_orders_by_severity() {
        assert!(SoundCue::Success.frequency_hz() > SoundCue::Error.frequency_hz());
        assert!(SoundCue::Error.frequency_hz() > SoundCue::Fail.frequency_hz());
    }

    #[test]
    fn default_tones_are_valid() {
        for cue in SoundCue::ALL {
            assert!(cue.tone(DEFAULT_AMPLITUDE).validate(SAMPLE_RATE).is_ok());
        }
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&SoundCue::Fail).unwrap(), "\"fail\"");
        let cue: SoundCue = serde_json::from_str("\"success\"").unwrap();
        assert_eq!(cue, SoundCue::Success);
    }
}
