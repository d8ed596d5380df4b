//! Presentation: persist and render pipeline output.

use std::path::Path;

use anyhow::{Context, Result};

use crate::types::Chunk;

/// Write the full transcript as UTF-8 text.
pub fn save_transcription(text: &str, path: &Path) -> Result<()> {
    std::fs::write(path, text)
        .with_context(|| format!("Failed to write transcription to {:?}", path))
}

/// Render chunks as a pretty-printed JSON array of flat records.
pub fn render_chunks(chunks: &[Chunk]) -> Result<String> {
    serde_json::to_string_pretty(chunks).context("Failed to serialize chunks")
}

pub fn save_chunks(chunks: &[Chunk], path: &Path) -> Result<()> {
    let rendered = render_chunks(chunks)?;
    std::fs::write(path, rendered).with_context(|| format!("Failed to write chunks to {:?}", path))
}
