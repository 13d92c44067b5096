//! The chunking engine: a cascade of segmentation strategies of strictly
//! decreasing granularity, then an indexing pass.
//!
//! 1. [`segment::split_headings`] partitions the document along heading
//!    boundaries.
//! 2. [`split::pack_paragraphs`] packs each segment into budget-sized
//!    pieces along blank-line boundaries.
//! 3. [`split::pack_sentences`] re-splits any piece still over budget
//!    along sentence boundaries.
//! 4. A final pass stamps `chunk_index` and `total_chunks`; the total is
//!    only known once the cascade has stabilized.
//!
//! The cascade bottoms out at sentences: a single sentence over budget is
//! emitted whole and oversized, never truncated.

use anyhow::Result;
use tracing::debug;

use crate::config::ChunkerConfig;
use crate::models::Chunk;
use crate::{segment, split};

/// Structure-aware document chunker.
///
/// Pure and stateless: each [`chunk`](SemanticChunker::chunk) call is an
/// independent transformation over one document, so a pipeline may fan out
/// across documents with no coordination between workers.
#[derive(Debug, Clone, Default)]
pub struct SemanticChunker {
    config: ChunkerConfig,
}

impl SemanticChunker {
    /// Create a chunker, rejecting malformed size configuration up front.
    pub fn new(config: ChunkerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    /// Split a document into an ordered sequence of chunks.
    ///
    /// `title` and `source` are carried through unchanged onto every chunk.
    /// Empty or whitespace-only text yields an empty sequence, which
    /// callers should treat as "nothing to index" rather than an error;
    /// `chunk` never fails for string input.
    pub fn chunk(&self, text: &str, title: &str, source: &str) -> Vec<Chunk> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let segments = segment::split_headings(text, &self.config);
        debug!(
            source,
            segments = segments.len(),
            "split document into heading segments"
        );

        let mut contents: Vec<String> = Vec::new();
        for seg in segments {
            for piece in split::pack_paragraphs(seg, &self.config) {
                if split::char_len(&piece) > self.config.max_chunk_size {
                    contents.extend(split::pack_sentences(&piece, &self.config));
                } else {
                    contents.push(piece);
                }
            }
        }

        debug!(source, chunks = contents.len(), "document chunking complete");
        index_chunks(contents, title, source)
    }
}

/// Stamp each chunk with its position and the document total.
fn index_chunks(contents: Vec<String>, title: &str, source: &str) -> Vec<Chunk> {
    let total = contents.len();
    contents
        .into_iter()
        .enumerate()
        .map(|(chunk_index, content)| Chunk {
            content,
            title: title.to_string(),
            source: source.to_string(),
            chunk_index,
            total_chunks: total,
            metadata: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_no_chunks() {
        let chunker = SemanticChunker::default();
        assert!(chunker.chunk("", "t", "s").is_empty());
        assert!(chunker.chunk("   \n\n\t ", "t", "s").is_empty());
    }

    #[test]
    fn test_within_budget_document_is_one_trimmed_chunk() {
        let chunker = SemanticChunker::default();
        let chunks = chunker.chunk("  A short document.  \n", "Doc", "a.md");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].content, "A short document.");
        assert_eq!(chunks[0].title, "Doc");
        assert_eq!(chunks[0].source, "a.md");
        assert_eq!(chunks[0].chunk_index, 0);
        assert_eq!(chunks[0].total_chunks, 1);
        assert!(chunks[0].metadata.is_none());
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let config = ChunkerConfig {
            max_chunk_size: 100,
            overlap_size: 100,
            ..ChunkerConfig::default()
        };
        assert!(SemanticChunker::new(config).is_err());
    }

    #[test]
    fn test_indexing_is_contiguous() {
        let config = ChunkerConfig {
            max_chunk_size: 120,
            overlap_size: 30,
            min_chunk_size: 20,
            ..ChunkerConfig::default()
        };
        let chunker = SemanticChunker::new(config).unwrap();
        let text = (0..10)
            .map(|i| format!("# Part {i}\n\nBody of part {i} with a little text in it."))
            .collect::<Vec<_>>()
            .join("\n\n");
        let chunks = chunker.chunk(&text, "Parts", "parts.md");
        let total = chunks.len();
        assert!(total >= 10);
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.chunk_index, i);
            assert_eq!(chunk.total_chunks, total);
            assert!(!chunk.content.is_empty());
        }
    }

    #[test]
    fn test_oversized_piece_falls_through_to_sentences() {
        let config = ChunkerConfig {
            max_chunk_size: 100,
            overlap_size: 20,
            min_chunk_size: 10,
            ..ChunkerConfig::default()
        };
        let chunker = SemanticChunker::new(config).unwrap();
        // one paragraph, well over budget, with sentence boundaries
        let text = (0..8)
            .map(|i| format!("Sentence {i} carries some words."))
            .collect::<Vec<_>>()
            .join(" ");
        let chunks = chunker.chunk(&text, "Long", "long.md");
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.content.chars().count() <= 100);
        }
    }
}
