use crate::types::{Chunk, TranscriptSegment};

use super::accumulator::ChunkAccumulator;

/// Greedily merge consecutive transcript segments into chunks whose span stays
/// within `target_duration`.
///
/// A chunk is closed when the next segment would push it past the target; the
/// closed chunk ends where that segment starts. Individual segments are never
/// subdivided, so a segment longer than the target becomes one oversized chunk.
///
/// Inputs are assumed valid; [`super::chunk_transcript`] validates before
/// calling this.
pub fn segment_chunk(segments: &[TranscriptSegment], target_duration: f64) -> Vec<Chunk> {
    let (Some(first), Some(last)) = (segments.first(), segments.last()) else {
        return Vec::new();
    };
    let mut accumulator = ChunkAccumulator::new(first.start);
    for segment in segments {
        accumulator.handle_segment(segment, target_duration);
    }
    accumulator.into_chunks(last.end)
}
