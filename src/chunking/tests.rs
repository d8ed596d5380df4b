use super::{chunk_transcript, fallback_chunk, segment_chunk};
use crate::error::ChunkingError;
use crate::types::{ChunkConfig, TranscriptSegment, TranscriptionResult};

fn seg(start: f64, end: f64, text: &str) -> TranscriptSegment {
    TranscriptSegment::new(start, end, text)
}

#[test]
fn test_basic_chunking() {
    let segments = vec![
        seg(0.0, 5.0, "hello"),
        seg(5.0, 9.0, "world"),
        seg(9.0, 20.0, "foo bar"),
    ];

    let chunks = segment_chunk(&segments, 14.5);

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].chunk_id, 1);
    assert_eq!(chunks[0].start_time, 0.0);
    assert_eq!(chunks[0].end_time, 9.0);
    assert_eq!(chunks[0].chunk_length, 9.0);
    assert_eq!(chunks[0].text, "hello world");
    assert_eq!(chunks[1].chunk_id, 2);
    assert_eq!(chunks[1].start_time, 9.0);
    assert_eq!(chunks[1].end_time, 20.0);
    assert_eq!(chunks[1].chunk_length, 11.0);
    assert_eq!(chunks[1].text, "foo bar");
}

#[test]
fn test_long_segment_is_not_split() {
    let segments = vec![seg(0.0, 30.0, "long sentence")];

    let chunks = segment_chunk(&segments, 14.5);

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].start_time, 0.0);
    assert_eq!(chunks[0].end_time, 30.0);
    assert_eq!(chunks[0].chunk_length, 30.0);
    assert_eq!(chunks[0].text, "long sentence");
}

#[test]
fn test_oversized_middle_segment_gets_its_own_chunk() {
    let segments = vec![
        seg(0.0, 2.0, "intro"),
        seg(2.0, 20.0, "a very long monologue"),
        seg(20.0, 22.0, "outro"),
    ];

    let chunks = segment_chunk(&segments, 5.0);

    let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, vec!["intro", "a very long monologue", "outro"]);
    assert_eq!(chunks[0].end_time, 2.0);
    assert_eq!(chunks[1].start_time, 2.0);
    assert_eq!(chunks[1].end_time, 20.0);
    assert_eq!(chunks[2].end_time, 22.0);
}

#[test]
fn test_closes_at_overflowing_segment_start_across_gaps() {
    let segments = vec![seg(1.0, 4.0, "first"), seg(6.0, 12.0, "second")];

    let chunks = segment_chunk(&segments, 8.0);

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].start_time, 1.0);
    assert_eq!(chunks[0].end_time, 6.0);
    assert_eq!(chunks[1].start_time, 6.0);
    assert_eq!(chunks[1].end_time, 12.0);
}

#[test]
fn test_does_not_assume_zero_start() {
    let segments = vec![seg(42.5, 44.0, "late"), seg(44.0, 46.25, "start")];

    let chunks = segment_chunk(&segments, 14.5);

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].start_time, 42.5);
    assert_eq!(chunks[0].end_time, 46.25);
    assert_eq!(chunks[0].chunk_length, 3.75);
}

#[test]
fn test_fallback_drops_remainder_words() {
    let chunks = fallback_chunk("a b c d e f g h", 29.0, 14.5);

    let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, vec!["a b", "c d", "e f"]);
    assert_eq!(chunks[0].start_time, 0.0);
    assert_eq!(chunks[0].end_time, 14.5);
    assert_eq!(chunks[1].end_time, 29.0);
    assert_eq!(chunks[2].start_time, 29.0);
    assert_eq!(chunks[2].end_time, 29.0);
    assert_eq!(chunks[2].chunk_length, 0.0);
}

#[test]
fn test_fallback_short_transcript_leaves_empty_chunks() {
    let chunks = fallback_chunk("just two", 40.0, 10.0);

    assert_eq!(chunks.len(), 5);
    assert!(chunks.iter().all(|c| c.text.is_empty()));
    assert_eq!(chunks.last().unwrap().end_time, 40.0);
}

#[test]
fn test_fallback_short_audio_single_chunk() {
    let chunks = fallback_chunk("one two three", 3.2, 14.5);

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].text, "one two three");
    assert_eq!(chunks[0].end_time, 3.2);
    assert_eq!(chunks[0].chunk_length, 3.2);
}

#[test]
fn test_dispatch_prefers_segments() {
    let result = TranscriptionResult {
        full_text: "ignored when segments exist".to_string(),
        segments: vec![seg(0.0, 3.0, "timed")],
    };

    let chunks = chunk_transcript(&result, 3.0, ChunkConfig::default()).unwrap();

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].text, "timed");
}

#[test]
fn test_dispatch_falls_back_without_segments() {
    let result = TranscriptionResult::text_only("a b c d e f g h");

    let chunks = chunk_transcript(&result, 29.0, ChunkConfig::default()).unwrap();

    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[2].end_time, 29.0);
}

#[test]
fn test_empty_transcript_is_not_an_error() {
    let result = TranscriptionResult::default();

    let chunks = chunk_transcript(&result, 10.0, ChunkConfig::default()).unwrap();

    assert!(chunks.is_empty());
}

#[test]
fn test_rejects_non_positive_duration() {
    let result = TranscriptionResult::text_only("words");

    let err = chunk_transcript(&result, 0.0, ChunkConfig::default()).unwrap_err();

    assert_eq!(err, ChunkingError::InvalidDuration { duration: 0.0 });
}

#[test]
fn test_rejects_non_positive_target() {
    let result = TranscriptionResult::text_only("words");

    let err = chunk_transcript(&result, 10.0, ChunkConfig::new(0.0)).unwrap_err();

    assert!(matches!(err, ChunkingError::InvalidTargetDuration { .. }));
}

#[test]
fn test_rejects_inverted_segment() {
    let result = TranscriptionResult::from_segments(vec![seg(0.0, 2.0, "ok"), seg(3.0, 3.0, "bad")]);

    let err = chunk_transcript(&result, 10.0, ChunkConfig::default()).unwrap_err();

    assert!(matches!(err, ChunkingError::InvalidSegment { index: 1, .. }));
}

#[test]
fn test_rejects_negative_timestamp() {
    let result = TranscriptionResult::from_segments(vec![seg(-1.0, 2.0, "early")]);

    let err = chunk_transcript(&result, 10.0, ChunkConfig::default()).unwrap_err();

    assert!(matches!(err, ChunkingError::InvalidSegment { index: 0, .. }));
}

#[test]
fn test_rejects_unordered_segments() {
    let result =
        TranscriptionResult::from_segments(vec![seg(5.0, 6.0, "later"), seg(1.0, 2.0, "earlier")]);

    let err = chunk_transcript(&result, 10.0, ChunkConfig::default()).unwrap_err();

    assert!(matches!(err, ChunkingError::InvalidSegment { index: 1, .. }));
}

#[test]
fn test_tied_start_merges_instead_of_emitting_empty_chunk() {
    let segments = vec![seg(0.0, 1.0, "a"), seg(0.0, 20.0, "b"), seg(20.0, 22.0, "c")];

    let chunks = segment_chunk(&segments, 14.5);

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].start_time, 0.0);
    assert_eq!(chunks[0].end_time, 20.0);
    assert_eq!(chunks[0].text, "a b");
    assert_eq!(chunks[1].chunk_id, 2);
    assert_eq!(chunks[1].start_time, 20.0);
    assert_eq!(chunks[1].end_time, 22.0);
    assert!(chunks.iter().all(|c| c.end_time > c.start_time));
}

#[test]
fn test_starts_equal_after_rounding_merge() {
    let result =
        TranscriptionResult::from_segments(vec![seg(0.001, 1.0, "a"), seg(0.004, 20.0, "b")]);

    let chunks = chunk_transcript(&result, 20.0, ChunkConfig::new(14.5)).unwrap();

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].start_time, 0.0);
    assert_eq!(chunks[0].end_time, 20.0);
    assert_eq!(chunks[0].chunk_length, 20.0);
    assert_eq!(chunks[0].text, "a b");
}

#[test]
fn test_fallback_count_uses_floor_division() {
    let text = "w0 w1 w2 w3 w4 w5 w6 w7 w8 w9";

    let chunks = fallback_chunk(text, 1.0, 0.1);

    assert_eq!(chunks.len(), 10);
    assert!(chunks.iter().all(|c| c.text.split_whitespace().count() == 1));
    assert_eq!(chunks[9].text, "w9");
    assert_eq!(chunks[9].end_time, 1.0);
    assert!(chunks.iter().all(|c| c.end_time > c.start_time));
}

#[test]
fn test_rejects_excessive_fallback_chunk_count() {
    let result = TranscriptionResult::text_only("a b");

    let err = chunk_transcript(&result, 3600.0, ChunkConfig::new(1e-6)).unwrap_err();

    assert!(matches!(
        err,
        ChunkingError::TooManyChunks {
            limit: 1_000_000,
            ..
        }
    ));
}

#[test]
fn test_tiny_target_still_fine_with_segments() {
    let result = TranscriptionResult::from_segments(vec![seg(0.0, 1.0, "a"), seg(1.0, 2.0, "b")]);

    let chunks = chunk_transcript(&result, 3600.0, ChunkConfig::new(1e-6)).unwrap();

    assert_eq!(chunks.len(), 2);
}
