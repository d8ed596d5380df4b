use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use super::Transcriber;
use crate::audio::resample::to_whisper_rate;
use crate::types::{AudioData, TranscriptSegment, TranscriptionResult};

/// Whisper backend holding a model loaded once at construction.
pub struct WhisperTranscriber {
    ctx: WhisperContext,
}

impl WhisperTranscriber {
    /// Load a ggml model, e.g. `ggml-base.en.bin` from
    /// https://huggingface.co/ggerganov/whisper.cpp
    pub fn load(model_path: &Path) -> Result<Self> {
        let path = model_path
            .to_str()
            .with_context(|| format!("Model path is not valid UTF-8: {:?}", model_path))?;
        let ctx = WhisperContext::new_with_params(path, WhisperContextParameters::default())
            .with_context(|| format!("Failed to load Whisper model from {:?}", model_path))?;
        info!(model = %model_path.display(), "loaded whisper model");
        Ok(Self { ctx })
    }
}

impl Transcriber for WhisperTranscriber {
    fn transcribe(&self, audio: &AudioData) -> Result<TranscriptionResult> {
        let audio = to_whisper_rate(audio)?;

        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);

        let mut state = self
            .ctx
            .create_state()
            .context("Failed to create Whisper state")?;
        state
            .full(params, &audio.samples)
            .context("Failed to transcribe audio")?;

        let mut segments: Vec<TranscriptSegment> = Vec::new();
        for segment in state.as_iter() {
            let text = segment
                .to_str()
                .context("Failed to get segment text")?
                .to_string();
            // Timestamps are in centiseconds
            let start = segment.start_timestamp() as f64 / 100.0;
            let end = segment.end_timestamp() as f64 / 100.0;
            if end <= start {
                // Fold zero-length segments into their predecessor to keep the text
                if let Some(previous) = segments.last_mut() {
                    debug!(start, end, "merging zero-length whisper segment");
                    previous.text.push_str(&text);
                } else {
                    warn!(start, end, text = %text, "dropping leading zero-length whisper segment");
                }
                continue;
            }
            segments.push(TranscriptSegment { start, end, text });
        }

        info!(segments = segments.len(), "transcription finished");
        Ok(TranscriptionResult::from_segments(segments))
    }
}
