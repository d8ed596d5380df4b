use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, ensure, Context, Result};

use crate::source::RetryPolicy;
use crate::types::ChunkConfig;

const MODEL_PATH_ENV: &str = "WHISPER_MODEL_PATH";
const DEFAULT_MODEL_PATH: &str = "./models/ggml-base.en.bin";
const DEFAULT_DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(600);

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Scratch space for the downloaded video and extracted audio
    pub work_dir: PathBuf,
    /// Where the transcript text and chunk JSON are written
    pub output_dir: PathBuf,
    pub model_path: PathBuf,
    pub chunk: ChunkConfig,
    pub retry: RetryPolicy,
    pub download_timeout: Duration,
}

impl AppConfig {
    pub fn from_overrides(
        work_dir: Option<PathBuf>,
        output_dir: Option<PathBuf>,
        model_path: Option<PathBuf>,
    ) -> Result<Self> {
        let work_dir = work_dir.unwrap_or_else(default_work_dir);
        let output_dir = output_dir.unwrap_or_else(|| work_dir.clone());
        Ok(Self {
            work_dir,
            output_dir,
            model_path: model_path.unwrap_or_else(default_model_path),
            chunk: ChunkConfig::default(),
            retry: RetryPolicy::default(),
            download_timeout: DEFAULT_DOWNLOAD_TIMEOUT,
        })
    }

    pub fn with_chunk(mut self, chunk: ChunkConfig) -> Result<Self> {
        ensure!(
            chunk.target_duration.is_finite() && chunk.target_duration > 0.0,
            "Target duration must be positive, got: {}",
            chunk.target_duration
        );
        self.chunk = chunk;
        Ok(self)
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_download_timeout(mut self, timeout: Duration) -> Self {
        self.download_timeout = timeout;
        self
    }

    /// Create the work and output directories if missing.
    pub fn prepare_dirs(&self) -> Result<()> {
        ensure_dir(&self.work_dir)?;
        ensure_dir(&self.output_dir)
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    if path.exists() && !path.is_dir() {
        return Err(anyhow!("{:?} exists and is not a directory", path));
    }
    std::fs::create_dir_all(path).with_context(|| format!("failed to create directory {:?}", path))
}

fn default_work_dir() -> PathBuf {
    std::env::temp_dir().join("vidchunk")
}

fn default_model_path() -> PathBuf {
    std::env::var_os(MODEL_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH))
}
