//! Generation pipeline for cue tones.
//!
//! Synthesizes each requested cue and writes it into the output directory.

use std::fs;

use tracing::{debug, info};

use crate::audio::write_pcm16;
use crate::config::GeneratorConfig;
use crate::error::{Result, ToneError};
use crate::synth::{synthesize, validate_amplitude, SAMPLE_RATE};
use crate::types::{GeneratedClip, SoundCue};

/// Generates one cue and writes it to `<output_dir>/<file_name>`.
///
/// The output directory is created if it does not exist.
///
/// # Example
///
/// ```ignore
/// use cue_tones::{generate_cue, GeneratorConfig, SoundCue};
///
/// let clip = generate_cue(&GeneratorConfig::default(), SoundCue::Success)?;
/// assert_eq!(clip.frames, 13230);
/// ```
pub fn generate_cue(config: &GeneratorConfig, cue: SoundCue) -> Result<GeneratedClip> {
    let spec = cue.tone(config.amplitude);
    let samples = synthesize(&spec, SAMPLE_RATE)?;
    debug!(
        cue = %cue,
        frequency_hz = spec.frequency_hz,
        frames = samples.len(),
        "Synthesized tone"
    );

    fs::create_dir_all(&config.output_dir).map_err(|e| {
        ToneError::output_dir_failed(config.output_dir.display().to_string(), e)
    })?;

    let path = config.output_dir.join(cue.file_name());
    write_pcm16(&samples, &path, SAMPLE_RATE)?;
    info!("Generated {}", path.display());

    Ok(GeneratedClip::new(cue, path, &spec, SAMPLE_RATE, &samples))
}

/// Generates each cue in order, stopping at the first failure.
///
/// An empty `cues` slice generates nothing.
pub fn generate_all(config: &GeneratorConfig, cues: &[SoundCue]) -> Result<Vec<GeneratedClip>> {
    validate_amplitude(config.amplitude)?;

    cues.iter().map(|cue| generate_cue(config, *cue)).collect()
}
