use std::path::PathBuf;

use thiserror::Error;

/// Rejections raised by the chunking engine before any chunk is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChunkingError {
    #[error("audio duration must be positive and finite, got {duration}")]
    InvalidDuration { duration: f64 },

    #[error("target duration must be positive and finite, got {target}")]
    InvalidTargetDuration { target: f64 },

    #[error("{chunks} fallback chunks requested, more than the limit of {limit}")]
    TooManyChunks { chunks: f64, limit: usize },

    #[error("segment {index} ({start}s - {end}s) is invalid: {reason}")]
    InvalidSegment {
        index: usize,
        start: f64,
        end: f64,
        reason: &'static str,
    },
}

/// Failures from the media acquisition layer.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("invalid video URL `{0}`: expected a youtube.com or youtu.be link")]
    InvalidUrl(String),

    #[error("missing command `{command}` on PATH")]
    CommandMissing { command: String },

    #[error("command failed: `{command}` (status: {status}){stderr_suffix}")]
    CommandFailed {
        command: String,
        status: i32,
        stderr_suffix: String,
    },

    #[error("command timed out after {timeout_ms}ms: `{command}`")]
    TimedOut { command: String, timeout_ms: u64 },

    #[error("missing expected artifact at `{0}`")]
    MissingArtifact(PathBuf),

    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

impl SourceError {
    pub fn from_command_failure(command: String, status: i32, stderr: &str) -> Self {
        let trimmed = stderr.trim();
        let stderr_suffix = if trimmed.is_empty() {
            String::new()
        } else {
            format!("; stderr: {trimmed}")
        };
        Self::CommandFailed {
            command,
            status,
            stderr_suffix,
        }
    }

    /// Whether retrying the same request could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::CommandFailed { .. } | Self::TimedOut { .. } | Self::Io(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failure_includes_trimmed_stderr() {
        let err = SourceError::from_command_failure("yt-dlp x".into(), 1, "  HTTP 503\n");
        assert_eq!(
            err.to_string(),
            "command failed: `yt-dlp x` (status: 1); stderr: HTTP 503"
        );
    }

    #[test]
    fn command_failure_without_stderr_has_no_suffix() {
        let err = SourceError::from_command_failure("yt-dlp x".into(), 2, "");
        assert_eq!(err.to_string(), "command failed: `yt-dlp x` (status: 2)");
    }

    #[test]
    fn classifies_transient_failures() {
        assert!(SourceError::TimedOut {
            command: "yt-dlp".into(),
            timeout_ms: 10
        }
        .is_transient());
        assert!(!SourceError::InvalidUrl("ftp://x".into()).is_transient());
        assert!(!SourceError::CommandMissing {
            command: "yt-dlp".into()
        }
        .is_transient());
    }
}
