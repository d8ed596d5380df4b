use crate::types::Chunk;

/// Round to two decimal places, the precision chunks are reported at.
pub(super) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Build a finalized chunk record. `chunk_length` is derived from the rounded
/// bounds so it always equals `round2(end_time - start_time)`.
pub(super) fn build_chunk(chunk_id: u32, start: f64, end: f64, text: String) -> Chunk {
    let start_time = round2(start);
    let end_time = round2(end);
    Chunk {
        chunk_id,
        start_time,
        end_time,
        chunk_length: round2(end_time - start_time),
        text,
    }
}
