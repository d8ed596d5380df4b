//! Core types for the vidchunk transcription and chunking pipeline

use serde::{Deserialize, Serialize};

/// Default soft maximum chunk span in seconds
pub const DEFAULT_TARGET_DURATION: f64 = 14.5;

/// Raw audio data representation (mono, f32 samples)
#[derive(Debug, Clone)]
pub struct AudioData {
    /// Audio samples, normalized to [-1.0, 1.0]
    pub samples: Vec<f32>,
    /// Sample rate in Hz (e.g., 44100)
    pub sample_rate: u32,
}

impl AudioData {
    /// Length of the decoded track in seconds
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// A time-stamped span of transcript text as emitted by a speech-to-text backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub start: f64, // seconds
    pub end: f64,   // seconds
    pub text: String,
}

impl TranscriptSegment {
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }
}

/// Transcription output: full text plus optional per-segment timing
///
/// Accepts whisper's JSON layout, where the full text lives under `text`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionResult {
    #[serde(alias = "text", default)]
    pub full_text: String,
    #[serde(default)]
    pub segments: Vec<TranscriptSegment>,
}

impl TranscriptionResult {
    /// Result carrying text only, with no segment timing
    pub fn text_only(full_text: impl Into<String>) -> Self {
        Self {
            full_text: full_text.into(),
            segments: Vec::new(),
        }
    }

    pub fn from_segments(segments: Vec<TranscriptSegment>) -> Self {
        let full_text = segments
            .iter()
            .map(|segment| segment.text.trim())
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            full_text,
            segments,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() && self.full_text.split_whitespace().next().is_none()
    }
}

/// A bounded-duration, time-aligned unit of transcript text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// 1-based position in the output sequence
    pub chunk_id: u32,
    pub start_time: f64, // seconds, two decimals
    pub end_time: f64,   // seconds, two decimals
    pub chunk_length: f64,
    pub text: String,
}

/// Configuration for chunking strategy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChunkConfig {
    pub target_duration: f64, // soft maximum chunk span in seconds
}

impl ChunkConfig {
    pub fn new(target_duration: f64) -> Self {
        Self { target_duration }
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_DURATION)
    }
}
