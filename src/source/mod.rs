//! Media acquisition: turn a source identifier into a local media file.

mod process;

use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use tracing::{info, warn};

use crate::error::SourceError;

/// Format selector preferring mp4 video with m4a audio, falling back to any mp4.
const YT_DLP_FORMAT: &str = "bestvideo[ext=mp4]+bestaudio[ext=m4a]/mp4";
const VIDEO_FILE_NAME: &str = "video_tempfile.mp4";

/// Produces a local media file for a source identifier.
pub trait MediaSource {
    fn fetch(&self, source: &str) -> Result<PathBuf, SourceError>;
}

/// Retry schedule for transient acquisition failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    /// Delay before the second attempt; grows linearly per attempt.
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            backoff: Duration::ZERO,
        }
    }

    /// Run `operation` until it succeeds, fails permanently, or attempts run out.
    pub fn run<T>(
        &self,
        mut operation: impl FnMut(u32) -> Result<T, SourceError>,
    ) -> Result<T, SourceError> {
        let max_attempts = self.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            match operation(attempt) {
                Ok(value) => return Ok(value),
                Err(err) if err.is_transient() && attempt < max_attempts => {
                    let delay = self.backoff * attempt;
                    warn!(attempt, max_attempts, error = %err, ?delay, "transient failure; retrying");
                    thread::sleep(delay);
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

/// Accept only http(s) links on youtube.com (any subdomain) or youtu.be.
pub fn validate_video_url(url: &str) -> Result<(), SourceError> {
    let invalid = || SourceError::InvalidUrl(url.to_string());
    let trimmed = url.trim();
    let rest = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .ok_or_else(invalid)?;
    let authority = rest
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    let host = authority
        .rsplit('@')
        .next()
        .unwrap_or_default()
        .split(':')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    let allowed =
        host == "youtube.com" || host.ends_with(".youtube.com") || host == "youtu.be";
    if allowed {
        Ok(())
    } else {
        Err(invalid())
    }
}

/// Downloads videos with the `yt-dlp` command line tool.
#[derive(Debug, Clone)]
pub struct YtDlpSource {
    program: String,
    output_dir: PathBuf,
    timeout: Duration,
    retry: RetryPolicy,
}

impl YtDlpSource {
    pub fn new(output_dir: impl Into<PathBuf>, timeout: Duration, retry: RetryPolicy) -> Self {
        Self {
            program: "yt-dlp".to_string(),
            output_dir: output_dir.into(),
            timeout,
            retry,
        }
    }

    /// Use a different downloader binary with a yt-dlp compatible interface.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    fn output_path(&self) -> PathBuf {
        self.output_dir.join(VIDEO_FILE_NAME)
    }

    fn download_args(&self, url: &str) -> Vec<String> {
        vec![
            "-f".to_string(),
            YT_DLP_FORMAT.to_string(),
            "--force-overwrites".to_string(),
            "-o".to_string(),
            self.output_path().display().to_string(),
            url.to_string(),
        ]
    }
}

impl MediaSource for YtDlpSource {
    fn fetch(&self, source: &str) -> Result<PathBuf, SourceError> {
        validate_video_url(source)?;
        std::fs::create_dir_all(&self.output_dir)?;
        let args = self.download_args(source);
        info!(url = source, "downloading video");
        self.retry.run(|attempt| {
            info!(attempt, program = %self.program, "starting download");
            process::run_with_timeout(&self.program, &args, self.timeout)
        })?;
        let path = self.output_path();
        if !path.is_file() {
            return Err(SourceError::MissingArtifact(path));
        }
        info!(path = %path.display(), "video downloaded");
        Ok(path)
    }
}

/// Treats the source identifier as a path to a media file already on disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSource;

impl MediaSource for LocalFileSource {
    fn fetch(&self, source: &str) -> Result<PathBuf, SourceError> {
        let path = Path::new(source);
        if path.is_file() {
            Ok(path.to_path_buf())
        } else {
            Err(SourceError::MissingArtifact(path.to_path_buf()))
        }
    }
}
