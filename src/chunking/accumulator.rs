use crate::types::{Chunk, TranscriptSegment};

use super::record::{build_chunk, round2};

pub(super) struct ChunkAccumulator {
    chunks: Vec<Chunk>,
    current_start: f64,
    current_text: String,
    current_segments: usize,
    next_id: u32,
}

impl ChunkAccumulator {
    pub(super) fn new(start: f64) -> Self {
        Self {
            chunks: Vec::new(),
            current_start: start,
            current_text: String::new(),
            current_segments: 0,
            next_id: 1,
        }
    }

    pub(super) fn handle_segment(&mut self, segment: &TranscriptSegment, target_duration: f64) {
        // Close at the overflowing segment's start, not at the previous segment's end.
        // A segment starting where the chunk starts (at reported precision) merges
        // instead, so no chunk ends up zero-length.
        if self.current_segments > 0
            && round2(segment.start) > round2(self.current_start)
            && segment.end - self.current_start > target_duration
        {
            self.finish_chunk(segment.start);
            self.current_start = segment.start;
        }
        self.attach_text(segment.text.trim());
        self.current_segments += 1;
    }

    pub(super) fn into_chunks(mut self, last_end: f64) -> Vec<Chunk> {
        if self.current_segments > 0 {
            self.finish_chunk(last_end);
        }
        self.chunks
    }

    fn finish_chunk(&mut self, end: f64) {
        let text = std::mem::take(&mut self.current_text);
        self.chunks
            .push(build_chunk(self.next_id, self.current_start, end, text));
        self.next_id += 1;
        self.current_segments = 0;
    }

    fn attach_text(&mut self, text: &str) {
        if !self.current_text.is_empty() {
            self.current_text.push(' ');
        }
        self.current_text.push_str(text);
    }
}
