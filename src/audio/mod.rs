//! Audio extraction: decode a downloaded media file into a mono track.

pub mod decoder;
pub mod encoder;
pub mod resample;

use std::path::Path;

use anyhow::{ensure, Context, Result};
use tracing::info;

use crate::types::AudioData;

/// Decode the first audio track of `path` and report its duration.
pub fn extract_audio(path: &Path) -> Result<AudioData> {
    let audio = decoder::decode_audio(path)
        .with_context(|| format!("Failed to extract audio from {}", path.display()))?;
    ensure!(
        !audio.samples.is_empty(),
        "No audio samples decoded from {}",
        path.display()
    );
    info!(
        samples = audio.samples.len(),
        sample_rate = audio.sample_rate,
        duration_secs = audio.duration_seconds(),
        "extracted audio track"
    );
    Ok(audio)
}
