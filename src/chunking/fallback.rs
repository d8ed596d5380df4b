use crate::types::Chunk;

use super::record::build_chunk;

/// Upper bound on fallback chunks; longer requests are rejected by the dispatcher.
pub(super) const MAX_FALLBACK_CHUNKS: usize = 1_000_000;

/// Number of buckets for `audio_duration`, as `floor_div(d, t) + 1`.
///
/// Floor division goes through the remainder: `0.1` is slightly more than a
/// tenth, so one second holds 9 whole buckets even though `1.0 / 0.1` rounds
/// to exactly `10.0`.
pub(super) fn fallback_chunk_count(audio_duration: f64, target_duration: f64) -> f64 {
    let whole = audio_duration - audio_duration % target_duration;
    (whole / target_duration).round() + 1.0
}

/// Split `full_text` into fixed-duration buckets assuming uniform word density.
///
/// Produces `floor(audio_duration / target_duration) + 1` chunks tiling
/// `[0, audio_duration]`, each holding `floor(words / chunks)` words. Words left
/// over after the last bucket are dropped and trailing buckets may be empty.
/// Boundaries are best-effort only; there is no real timing behind them.
/// The bucket count is capped at `MAX_FALLBACK_CHUNKS`.
pub fn fallback_chunk(full_text: &str, audio_duration: f64, target_duration: f64) -> Vec<Chunk> {
    let words: Vec<&str> = full_text.split_whitespace().collect();
    let total_chunks = fallback_chunk_count(audio_duration, target_duration)
        .min(MAX_FALLBACK_CHUNKS as f64) as usize;
    let words_per_chunk = words.len() / total_chunks;

    (0..total_chunks)
        .zip(1u32..)
        .map(|(i, chunk_id)| {
            let start_time = i as f64 * target_duration;
            let end_time = ((i + 1) as f64 * target_duration).min(audio_duration);
            let from = (i * words_per_chunk).min(words.len());
            let to = ((i + 1) * words_per_chunk).min(words.len());
            build_chunk(chunk_id, start_time, end_time, words[from..to].join(" "))
        })
        .collect()
}
