//! Transcribe remotely hosted videos and split the transcript into
//! time-aligned chunks.

pub mod audio;
pub mod chunking;
pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod source;
pub mod transcription;
pub mod types;
