//! Error types for cue-tones.
//!
//! Defines the error codes and error type shared by synthesis, WAV output
//! and the generator.

use std::fmt;

/// Error codes identifying why a tone could not be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Tone frequency is outside the representable range.
    /// Trigger: Non-positive, non-finite, or above the Nyquist frequency.
    InvalidFrequency,

    /// Tone duration is outside the valid range.
    /// Trigger: Non-positive, non-finite, or longer than 60 seconds.
    InvalidDuration,

    /// Peak amplitude is outside the valid range.
    /// Trigger: Non-positive, non-finite, or greater than 1.0.
    InvalidAmplitude,

    /// Configuration failed validation.
    /// Trigger: Empty output directory or out-of-range settings.
    InvalidConfig,

    /// Output directory could not be created.
    /// Trigger: Permission denied, or a file exists at the path.
    OutputDirFailed,

    /// Failed to create, write or finalize a WAV file.
    /// Trigger: Invalid path, disk full, or permission denied.
    WavWriteFailed,

    /// Failed to open or parse a WAV file.
    /// Trigger: Missing file or a corrupt header.
    WavReadFailed,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidFrequency => "INVALID_FREQUENCY",
            ErrorCode::InvalidDuration => "INVALID_DURATION",
            ErrorCode::InvalidAmplitude => "INVALID_AMPLITUDE",
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
            ErrorCode::OutputDirFailed => "OUTPUT_DIR_FAILED",
            ErrorCode::WavWriteFailed => "WAV_WRITE_FAILED",
            ErrorCode::WavReadFailed => "WAV_READ_FAILED",
        }
    }

    /// Returns a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::InvalidFrequency => "Frequency must be positive and at most half the sample rate",
            ErrorCode::InvalidDuration => "Duration must be greater than 0 and at most 60 seconds",
            ErrorCode::InvalidAmplitude => "Amplitude must be greater than 0 and at most 1.0",
            ErrorCode::InvalidConfig => "Configuration failed validation",
            ErrorCode::OutputDirFailed => "Output directory could not be created",
            ErrorCode::WavWriteFailed => "Failed to write WAV file",
            ErrorCode::WavReadFailed => "Failed to read WAV file",
        }
    }

    /// Returns a recovery hint suggesting how to resolve this error.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCode::InvalidFrequency => {
                "Pick a frequency between 1 Hz and 22050 Hz (e.g., 440 for A4)"
            }
            ErrorCode::InvalidDuration => "Pick a duration between a few milliseconds and 60 seconds",
            ErrorCode::InvalidAmplitude => {
                "Pass --amplitude with a value in (0, 1], or unset CUE_TONES_AMPLITUDE"
            }
            ErrorCode::InvalidConfig => {
                "Check --output-dir and --amplitude, and the CUE_TONES_* environment variables"
            }
            ErrorCode::OutputDirFailed => {
                "Check that the parent directory is writable and that no file \
                 already exists at the output directory path"
            }
            ErrorCode::WavWriteFailed => {
                "Check the output path, available disk space and file permissions"
            }
            ErrorCode::WavReadFailed => "Regenerate the file; it may be missing or truncated",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for tone generation.
#[derive(Debug)]
pub struct ToneError {
    /// The error code identifying the type of error.
    pub code: ErrorCode,
    /// Human-readable error message with context.
    pub message: String,
    /// Optional underlying cause of the error.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ToneError {
    /// Creates a new ToneError with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new ToneError with an underlying cause.
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an INVALID_FREQUENCY error.
    pub fn invalid_frequency(frequency_hz: f64, sample_rate: u32) -> Self {
        Self::new(
            ErrorCode::InvalidFrequency,
            format!(
                "Invalid frequency: {} Hz (must be in (0, {}] at {} Hz)",
                frequency_hz,
                sample_rate / 2,
                sample_rate
            ),
        )
    }

    /// Creates an INVALID_DURATION error.
    pub fn invalid_duration(duration_sec: f64) -> Self {
        Self::new(
            ErrorCode::InvalidDuration,
            format!(
                "Invalid duration: {} seconds (must be in (0, 60])",
                duration_sec
            ),
        )
    }

    /// Creates an INVALID_AMPLITUDE error.
    pub fn invalid_amplitude(amplitude: f64) -> Self {
        Self::new(
            ErrorCode::InvalidAmplitude,
            format!("Invalid amplitude: {} (must be in (0, 1])", amplitude),
        )
    }

    /// Creates an INVALID_CONFIG error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InvalidConfig,
            format!("Invalid configuration: {}", reason.into()),
        )
    }

    /// Creates an OUTPUT_DIR_FAILED error.
    pub fn output_dir_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::with_source(
            ErrorCode::OutputDirFailed,
            format!("Failed to create output directory: {}", path.into()),
            source,
        )
    }

    /// Creates a WAV_WRITE_FAILED error.
    pub fn wav_write_failed(reason: impl Into<String>, source: hound::Error) -> Self {
        Self::with_source(ErrorCode::WavWriteFailed, reason, source)
    }

    /// Creates a WAV_READ_FAILED error.
    pub fn wav_read_failed(reason: impl Into<String>, source: hound::Error) -> Self {
        Self::with_source(ErrorCode::WavReadFailed, reason, source)
    }
}

impl fmt::Display for ToneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}. Recovery: {}",
            self.code,
            self.message,
            self.code.recovery_hint()
        )
    }
}

impl std::error::Error for ToneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias using ToneError.
pub type Result<T> = std::result::Result<T, ToneError>;
