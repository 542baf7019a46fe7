//! WAV file writer for cue tones.
//!
//! Writes mono 16-bit PCM using the hound crate, and reads headers back
//! for verification.

use std::io::{Seek, Write};
use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use serde::Serialize;

use crate::error::{Result, ToneError};

/// Number of audio channels (mono).
pub const CHANNELS: u16 = 1;

/// Bits per sample for PCM output.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Header and length of a WAV file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WavInfo {
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
    /// Number of frames (samples per channel).
    pub frames: u32,
    pub duration_sec: f32,
}

fn pcm16_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: CHANNELS,
        sample_rate,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    }
}

fn write_samples<W: Write + Seek>(mut writer: WavWriter<W>, samples: &[i16]) -> Result<()> {
    for sample in samples {
        writer
            .write_sample(*sample)
            .map_err(|e| ToneError::wav_write_failed("Failed to write sample", e))?;
    }

    writer
        .finalize()
        .map_err(|e| ToneError::wav_write_failed("Failed to finalize WAV file", e))
}

/// Writes 16-bit samples to a mono WAV file.
///
/// # Arguments
///
/// * `samples` - Quantized PCM samples
/// * `path` - Output file path; the parent directory must exist
/// * `sample_rate` - Sample rate in Hz (44100 for cue tones)
///
/// # Example
///
/// ```ignore
/// use cue_tones::audio::write_pcm16;
///
/// let samples = vec![0i16, 16383, 0, -16383];
/// write_pcm16(&samples, Path::new("/tmp/test.wav"), 44100)?;
/// ```
pub fn write_pcm16(samples: &[i16], path: &Path, sample_rate: u32) -> Result<()> {
    let writer = WavWriter::create(path, pcm16_spec(sample_rate)).map_err(|e| {
        ToneError::wav_write_failed(
            format!("Failed to create WAV file {}", path.display()),
            e,
        )
    })?;

    write_samples(writer, samples)
}

/// Writes 16-bit samples to an in-memory WAV buffer.
///
/// Returns the WAV file contents as a byte vector.
pub fn write_pcm16_to_buffer(samples: &[i16], sample_rate: u32) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();

    {
        let cursor = std::io::Cursor::new(&mut buffer);
        let writer = WavWriter::new(cursor, pcm16_spec(sample_rate))
            .map_err(|e| ToneError::wav_write_failed("Failed to create WAV writer", e))?;
        write_samples(writer, samples)?;
    }

    Ok(buffer)
}

/// Reads the header of a WAV file and reports what it contains.
pub fn probe_wav(path: &Path) -> Result<WavInfo> {
    let reader = WavReader::open(path).map_err(|e| {
        ToneError::wav_read_failed(format!("Failed to open WAV file {}", path.display()), e)
    })?;

    let spec = reader.spec();
    let frames = reader.duration();

    Ok(WavInfo {
        sample_rate: spec.sample_rate,
        channels: spec.channels,
        bits_per_sample: spec.bits_per_sample,
        frames,
        duration_sec: samples_to_duration(frames as usize, spec.sample_rate),
    })
}

/// Calculates the duration of audio in seconds from frame count.
pub fn samples_to_duration(sample_count: usize, sample_rate: u32) -> f32 {
    sample_count as f32 / sample_rate as f32
}
