//! Transcription collaborators: anything that turns audio into timed text.
//!
//! The chunking engine only consumes [`TranscriptionResult`]; which backend
//! produced it is irrelevant to it. A whisper-rs backend is available behind
//! the `whisper` cargo feature, and a precomputed whisper-style JSON transcript
//! can stand in for inference.

#[cfg(feature = "whisper")]
mod whisper;

#[cfg(feature = "whisper")]
pub use whisper::WhisperTranscriber;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::types::{AudioData, TranscriptionResult};

/// Converts decoded audio into a transcript.
///
/// Implementations are constructed once (model loading is the expensive part)
/// and reused across requests.
pub trait Transcriber {
    fn transcribe(&self, audio: &AudioData) -> Result<TranscriptionResult>;
}

/// Replays a transcript produced ahead of time, ignoring the audio.
#[derive(Debug, Clone)]
pub struct PrecomputedTranscriber {
    result: TranscriptionResult,
}

impl PrecomputedTranscriber {
    pub fn new(result: TranscriptionResult) -> Self {
        Self { result }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        load_transcription(path).map(Self::new)
    }
}

impl Transcriber for PrecomputedTranscriber {
    fn transcribe(&self, _audio: &AudioData) -> Result<TranscriptionResult> {
        Ok(self.result.clone())
    }
}

/// Load a whisper-style JSON transcript (`text` plus optional `segments`).
pub fn load_transcription(path: &Path) -> Result<TranscriptionResult> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read transcript file {:?}", path))?;
    let result: TranscriptionResult =
        serde_json::from_str(&data).context("Failed to parse transcript JSON")?;
    info!(
        path = %path.display(),
        segments = result.segments.len(),
        "loaded precomputed transcript"
    );
    Ok(result)
}
