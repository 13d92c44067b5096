//! # Semantic Chunker
//!
//! Structure-aware document chunking for embedding and retrieval pipelines.
//!
//! Splits a document into bounded-size chunks along a cascade of boundaries
//! of strictly decreasing granularity: headings first, then blank-line
//! paragraphs, then sentences. Each chunk is sized in characters against a
//! configurable budget and stamped with a contiguous index once the full
//! sequence is known.
//!
//! This crate contains no I/O, async runtime, or storage dependencies; it
//! is a pure transformation from text to chunks. Loading, embedding, and
//! persistence belong to the calling pipeline, which may process documents
//! in parallel since every call is independent.
//!
//! # Example
//!
//! ```rust
//! use semantic_chunker::SemanticChunker;
//!
//! let chunker = SemanticChunker::default();
//! let chunks = chunker.chunk("# Intro\n\nHello world.", "Intro", "docs/intro.md");
//! assert_eq!(chunks.len(), 1);
//! assert_eq!(chunks[0].chunk_index, 0);
//! assert_eq!(chunks[0].total_chunks, 1);
//! ```

pub mod chunker;
pub mod config;
pub mod models;
pub mod segment;
pub mod split;

pub use chunker::SemanticChunker;
pub use config::ChunkerConfig;
pub use models::Chunk;
