use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use vidchunk::config::AppConfig;
use vidchunk::pipeline::Pipeline;
use vidchunk::source::{LocalFileSource, MediaSource, RetryPolicy, YtDlpSource};
use vidchunk::transcription::{PrecomputedTranscriber, Transcriber};
use vidchunk::types::{ChunkConfig, DEFAULT_TARGET_DURATION};
use vidchunk::{logging, report};

/// vidchunk - Video transcription and transcript chunking tool
///
/// Downloads a YouTube video (or reads a local media file), transcribes its
/// audio and splits the transcript into time-aligned chunks.
#[derive(Parser, Debug)]
#[command(name = "vidchunk")]
#[command(version)]
#[command(about = "Transcribe a video and split the transcript into timed chunks", long_about = None)]
struct Args {
    /// YouTube URL, or path to a local media file
    #[arg(value_name = "SOURCE")]
    source: String,

    /// Soft maximum chunk span in seconds
    #[arg(long, default_value_t = DEFAULT_TARGET_DURATION)]
    target_duration: f64,

    /// Scratch directory for the downloaded video and extracted audio
    #[arg(long, value_name = "DIR")]
    work_dir: Option<PathBuf>,

    /// Directory for transcription.txt and chunks.json (defaults to the work dir)
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Whisper-style JSON transcript to use instead of running a model
    #[arg(long, value_name = "FILE")]
    transcript: Option<PathBuf>,

    /// Path to a ggml whisper model (defaults to $WHISPER_MODEL_PATH)
    #[arg(long, value_name = "FILE")]
    model: Option<PathBuf>,

    /// Download attempts before giving up on transient failures
    #[arg(long, default_value_t = 3)]
    retries: u32,

    /// Per-attempt download timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 600)]
    download_timeout: u64,

    /// Keep the extracted audio as a WAV file in the work directory
    #[arg(long)]
    keep_audio: bool,
}

impl Args {
    fn validate(&self) -> Result<()> {
        if !self.target_duration.is_finite() || self.target_duration <= 0.0 {
            bail!(
                "Target duration must be positive, got: {}",
                self.target_duration
            );
        }
        if self.retries == 0 {
            bail!("Retries must be at least 1");
        }
        if let Some(path) = &self.transcript {
            if !path.is_file() {
                bail!("Transcript file does not exist: {:?}", path);
            }
        }
        Ok(())
    }

    fn app_config(&self) -> Result<AppConfig> {
        let config = AppConfig::from_overrides(
            self.work_dir.clone(),
            self.output_dir.clone(),
            self.model.clone(),
        )?
        .with_chunk(ChunkConfig::new(self.target_duration))?
        .with_retry(RetryPolicy {
            max_attempts: self.retries,
            ..RetryPolicy::default()
        })
        .with_download_timeout(Duration::from_secs(self.download_timeout));
        Ok(config)
    }

    fn is_local(&self) -> bool {
        Path::new(&self.source).is_file()
    }
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();
    args.validate()
        .context("Failed to validate command-line arguments")?;

    let config = args.app_config()?;
    let source = build_source(&args, &config);
    let transcriber = build_transcriber(&args, &config)?;
    let pipeline = Pipeline::new(source, transcriber, config).keep_audio(args.keep_audio);

    let output = pipeline.process(&args.source)?;

    println!("{}", report::render_chunks(&output.chunks)?);
    eprintln!(
        "Wrote {} chunks ({:.2}s of audio) to {:?}; transcript at {:?}",
        output.chunks.len(),
        output.audio_duration,
        output.chunks_path,
        output.transcript_path
    );
    Ok(())
}

fn build_source(args: &Args, config: &AppConfig) -> Box<dyn MediaSource> {
    if args.is_local() {
        Box::new(LocalFileSource)
    } else {
        Box::new(YtDlpSource::new(
            config.work_dir.clone(),
            config.download_timeout,
            config.retry,
        ))
    }
}

fn build_transcriber(args: &Args, config: &AppConfig) -> Result<Box<dyn Transcriber>> {
    if let Some(path) = &args.transcript {
        return Ok(Box::new(PrecomputedTranscriber::from_file(path)?));
    }
    whisper_transcriber(config)
}

#[cfg(feature = "whisper")]
fn whisper_transcriber(config: &AppConfig) -> Result<Box<dyn Transcriber>> {
    let transcriber = vidchunk::transcription::WhisperTranscriber::load(&config.model_path)
        .context("Download a model with: wget https://huggingface.co/ggerganov/whisper.cpp/resolve/main/ggml-base.en.bin -P ./models/")?;
    Ok(Box::new(transcriber))
}

#[cfg(not(feature = "whisper"))]
fn whisper_transcriber(config: &AppConfig) -> Result<Box<dyn Transcriber>> {
    bail!(
        "No transcript given and this build has no whisper support (model path would be {:?}); \
         pass --transcript FILE or rebuild with --features whisper",
        config.model_path
    )
}
