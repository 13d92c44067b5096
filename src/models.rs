//! Data model for document chunks.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A bounded-size, ordered unit of a document's text, produced for
/// independent embedding and retrieval.
///
/// Chunks are immutable once returned by the engine. The indexing pipeline
/// keys storage by `(source, chunk_index)`, so within one document the
/// indices are contiguous from zero and `total_chunks` is identical on
/// every chunk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// Chunk text. Never empty.
    pub content: String,
    /// Document title, carried through unchanged from the input.
    pub title: String,
    /// Opaque source identifier (file path or URL), carried through unchanged.
    pub source: String,
    /// Zero-based position within the document's chunk sequence.
    pub chunk_index: usize,
    /// Number of chunks produced for the document.
    pub total_chunks: usize,
    /// Reserved extension point; not interpreted by the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl Chunk {
    /// Human-readable title: `"{title} - Chunk {i}/{n}"` (1-based) when the
    /// document split into more than one chunk, the bare title otherwise.
    pub fn display_title(&self) -> String {
        if self.total_chunks > 1 {
            format!(
                "{} - Chunk {}/{}",
                self.title,
                self.chunk_index + 1,
                self.total_chunks
            )
        } else {
            self.title.clone()
        }
    }

    /// Lowercase hex SHA-256 of `content`, for staleness detection in the
    /// embedding pipeline.
    pub fn content_hash(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.content.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}
