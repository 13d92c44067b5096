//! Chunker configuration: size policy and boundary markers.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Size policy and boundary markers for a [`SemanticChunker`](crate::SemanticChunker).
///
/// Boundary patterns are configuration rather than hard-coded so callers
/// can adapt the engine to other document dialects. All sizes are measured
/// in characters, not tokens or bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkerConfig {
    /// Soft ceiling on a chunk's character length. A single sentence (or a
    /// heading segment with no internal boundaries) longer than this is
    /// emitted whole and oversized rather than cut mid-word.
    pub max_chunk_size: usize,
    /// Target upper bound on shared context between adjacent chunks.
    /// Applied best-effort at sentence granularity; `0` disables overlap.
    pub overlap_size: usize,
    /// Soft minimum chunk length. A buffer that closes short of this is
    /// still emitted so chunks stay in document order; only the final chunk
    /// of a document is routinely below it.
    pub min_chunk_size: usize,
    /// Leading marker character of a heading line.
    pub heading_marker: char,
    /// Maximum heading depth recognized (marker repetitions, `1..=6`).
    pub max_heading_level: usize,
    /// Characters that end a sentence when followed by whitespace.
    pub sentence_terminators: Vec<char>,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            max_chunk_size: 1000,
            overlap_size: 200,
            min_chunk_size: 100,
            heading_marker: '#',
            max_heading_level: 6,
            sentence_terminators: vec!['.', '!', '?', ';'],
        }
    }
}

impl ChunkerConfig {
    /// Reject size relationships that would degenerate the packing loops.
    ///
    /// Called at chunker construction; well-formed text input never fails
    /// after this point.
    pub fn validate(&self) -> Result<()> {
        if self.max_chunk_size == 0 {
            bail!("max_chunk_size must be greater than 0");
        }
        if self.overlap_size >= self.max_chunk_size {
            bail!(
                "overlap_size ({}) must be smaller than max_chunk_size ({})",
                self.overlap_size,
                self.max_chunk_size
            );
        }
        if self.min_chunk_size >= self.max_chunk_size {
            bail!(
                "min_chunk_size ({}) must be smaller than max_chunk_size ({})",
                self.min_chunk_size,
                self.max_chunk_size
            );
        }
        if self.sentence_terminators.is_empty() {
            bail!("sentence_terminators must not be empty");
        }
        if self.max_heading_level == 0 || self.max_heading_level > 6 {
            bail!(
                "max_heading_level must be between 1 and 6, got {}",
                self.max_heading_level
            );
        }
        Ok(())
    }
}
