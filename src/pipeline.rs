//! End-to-end request flow: acquire, extract, transcribe, chunk, persist.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::audio::{encoder::encode_wav, extract_audio};
use crate::chunking::chunk_transcript;
use crate::config::AppConfig;
use crate::report::{save_chunks, save_transcription};
use crate::source::MediaSource;
use crate::transcription::Transcriber;
use crate::types::Chunk;

const TRANSCRIPT_FILE_NAME: &str = "transcription.txt";
const CHUNKS_FILE_NAME: &str = "chunks.json";
const AUDIO_FILE_NAME: &str = "audio_tempfile.wav";

/// Everything one request produces
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub transcript: String,
    pub chunks: Vec<Chunk>,
    pub audio_duration: f64,
    pub transcript_path: PathBuf,
    pub chunks_path: PathBuf,
    pub audio_path: Option<PathBuf>,
}

/// Owns the collaborator handles; build once and call [`Pipeline::process`]
/// per video. The transcriber (and any model it holds) is never reloaded.
pub struct Pipeline {
    source: Box<dyn MediaSource>,
    transcriber: Box<dyn Transcriber>,
    config: AppConfig,
    keep_audio: bool,
}

impl Pipeline {
    pub fn new(
        source: Box<dyn MediaSource>,
        transcriber: Box<dyn Transcriber>,
        config: AppConfig,
    ) -> Self {
        Self {
            source,
            transcriber,
            config,
            keep_audio: false,
        }
    }

    /// Also write the extracted mono track as a WAV file in the work directory.
    pub fn keep_audio(mut self, keep: bool) -> Self {
        self.keep_audio = keep;
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn process(&self, source: &str) -> Result<PipelineOutput> {
        self.config.prepare_dirs()?;

        info!(source, "acquiring media");
        let media_path = self
            .source
            .fetch(source)
            .with_context(|| format!("Failed to acquire media for {source}"))?;

        info!(path = %media_path.display(), "extracting audio");
        let audio = extract_audio(&media_path)?;
        let audio_duration = audio.duration_seconds();
        let audio_path = if self.keep_audio {
            let path = self.config.work_dir.join(AUDIO_FILE_NAME);
            encode_wav(&audio, &path)?;
            Some(path)
        } else {
            None
        };

        info!("transcribing audio");
        let result = self
            .transcriber
            .transcribe(&audio)
            .context("Failed to transcribe audio")?;

        info!(target_duration = self.config.chunk.target_duration, "chunking transcript");
        let chunks = chunk_transcript(&result, audio_duration, self.config.chunk)
            .context("Failed to chunk transcript")?;

        let transcript_path = self.config.output_dir.join(TRANSCRIPT_FILE_NAME);
        save_transcription(&result.full_text, &transcript_path)?;
        let chunks_path = self.config.output_dir.join(CHUNKS_FILE_NAME);
        save_chunks(&chunks, &chunks_path)?;
        info!(
            chunks = chunks.len(),
            output = %self.config.output_dir.display(),
            "pipeline finished"
        );

        Ok(PipelineOutput {
            transcript: result.full_text,
            chunks,
            audio_duration,
            transcript_path,
            chunks_path,
            audio_path,
        })
    }
}
