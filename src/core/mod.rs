//! Core tokenization engine for tokspan.
//!
//! # Architecture
//!
//! - [`Tokenizer`]: encode/decode API, pre-tokenization regex, LRU chunk cache
//!   and Aho-Corasick special token matching
//! - `bpe`: byte-pair merge loop for one segment (linked list + min-heap)
//! - [`Vocabulary`]: immutable rank table loaded from tiktoken format
//! - [`TokenSpan`]: per-token character spans recovered by the alignment pass
//! - [`global`]: optional process-wide instance with one-time initialization

mod alignment;
mod bpe;
pub mod global;
mod tokenizer;
mod vocab;

pub use alignment::TokenSpan;
pub use bpe::byte_pair_encode;
pub use tokenizer::{
    parse_token_ids, Tokenizer, TokenizerError, CL100K_BASE_PATTERN, O200K_BASE_PATTERN,
    WHITESPACE_PATTERN,
};
pub use vocab::{Rank, VocabError, Vocabulary};
