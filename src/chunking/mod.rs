//! Segmentation engine: turns transcription output into time-aligned chunks.

mod accumulator;
mod fallback;
mod planner;
mod record;

#[cfg(test)]
mod tests;

use tracing::{info, warn};

use crate::error::ChunkingError;
use crate::types::{Chunk, ChunkConfig, TranscriptSegment, TranscriptionResult};

use fallback::{fallback_chunk_count, MAX_FALLBACK_CHUNKS};

pub use fallback::fallback_chunk;
pub use planner::segment_chunk;

/// Slack allowed between the last segment end and the decoded audio length
/// before a mismatch is reported.
const DURATION_SLACK: f64 = 0.5;

/// Pure function to chunk a transcription result
///
/// Uses segment timing when the transcriber produced segments and falls back to
/// uniform word bucketing over `audio_duration` otherwise. An empty
/// transcription yields an empty list.
pub fn chunk_transcript(
    result: &TranscriptionResult,
    audio_duration: f64,
    config: ChunkConfig,
) -> Result<Vec<Chunk>, ChunkingError> {
    validate_inputs(result, audio_duration, config)?;

    if !result.segments.is_empty() {
        let chunks = segment_chunk(&result.segments, config.target_duration);
        if let Some(last) = result.segments.last() {
            if last.end > audio_duration + DURATION_SLACK {
                warn!(
                    last_segment_end = last.end,
                    audio_duration, "transcript extends past the decoded audio"
                );
            }
        }
        info!(
            path = "segments",
            segments = result.segments.len(),
            chunks = chunks.len(),
            "chunked transcript at segment boundaries"
        );
        return Ok(chunks);
    }

    if result.full_text.split_whitespace().next().is_none() {
        info!(path = "empty", "transcript is empty; nothing to chunk");
        return Ok(Vec::new());
    }

    let expected = fallback_chunk_count(audio_duration, config.target_duration);
    if expected > MAX_FALLBACK_CHUNKS as f64 {
        return Err(ChunkingError::TooManyChunks {
            chunks: expected,
            limit: MAX_FALLBACK_CHUNKS,
        });
    }
    let chunks = fallback_chunk(&result.full_text, audio_duration, config.target_duration);
    warn!(
        path = "fallback",
        chunks = chunks.len(),
        "no segment timing available; chunk boundaries are approximate"
    );
    Ok(chunks)
}

fn validate_inputs(
    result: &TranscriptionResult,
    audio_duration: f64,
    config: ChunkConfig,
) -> Result<(), ChunkingError> {
    let target = config.target_duration;
    if !target.is_finite() || target <= 0.0 {
        return Err(ChunkingError::InvalidTargetDuration { target });
    }
    if !audio_duration.is_finite() || audio_duration <= 0.0 {
        return Err(ChunkingError::InvalidDuration {
            duration: audio_duration,
        });
    }
    validate_segments(&result.segments)
}

fn validate_segments(segments: &[TranscriptSegment]) -> Result<(), ChunkingError> {
    let mut previous_start = 0.0;
    for (index, segment) in segments.iter().enumerate() {
        let invalid = |reason| ChunkingError::InvalidSegment {
            index,
            start: segment.start,
            end: segment.end,
            reason,
        };
        if !segment.start.is_finite() || !segment.end.is_finite() {
            return Err(invalid("timestamps must be finite"));
        }
        if segment.start < 0.0 {
            return Err(invalid("timestamps must be non-negative"));
        }
        if segment.end <= segment.start {
            return Err(invalid("end must be after start"));
        }
        if segment.start < previous_start {
            return Err(invalid("segments must be ordered by start time"));
        }
        previous_start = segment.start;
    }
    Ok(())
}
