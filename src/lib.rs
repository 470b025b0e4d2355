//! # Vocabulary Generator
//!
//! Builds vocabulary lists from plain text files.
//!
//! ## Features
//!
//! - **Word extraction**: Whitespace tokenization with a minimum length and a character-class policy
//! - **Deduplication**: Case-sensitive removal of repeated words
//! - **Deterministic order**: Case-insensitive merge sort with an ordinal tiebreak
//! - **Packaging**: The input and the lists are zipped together
//! - **Integrity**: SHA-512 checksum of the archive in a `.sha512` sibling file
//!
//! ## Usage
//!
//! ```bash
//! # Lowercase words of at least 4 letters
//! vocab-generator -i book.txt -l 4
//!
//! # Add a list of all-caps words
//! vocab-generator -i book.txt -l 3 --caps
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use vocab_generator::filter::WordPolicy;
//! use vocab_generator::pipeline::{Pipeline, PipelineConfig};
//! use std::path::Path;
//!
//! let config = PipelineConfig {
//!     min_length: 4,
//!     lowercase_policy: WordPolicy::Lowercase,
//!     caps_policy: Some(WordPolicy::AllCaps),
//!     keep_intermediate: false,
//! };
//!
//! let pipeline = Pipeline::new(config).unwrap();
//! // pipeline.run(Path::new("book.txt")).unwrap();
//! ```

pub mod archive;
pub mod cli;
pub mod dedup;
pub mod digest;
pub mod encoding;
pub mod error;
pub mod filter;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod sort;
pub mod tokenizer;

pub use cli::Args;
pub use error::VocabError;
pub use pipeline::{Pipeline, PipelineConfig, PipelineReport};
