//! tokspan - BPE tokenizer for tiktoken vocabularies with per-token character spans.
//!
//! Encodes text into token IDs, decodes them back, and recovers which
//! characters of the input each token covers so callers can visualize the
//! segmentation.
//!
//! ```ignore
//! use tokspan::{Tokenizer, Vocabulary, O200K_BASE_PATTERN};
//!
//! let vocab = Vocabulary::from_file("o200k_base.tiktoken")?;
//! let tokenizer = Tokenizer::new(vocab, Default::default(), O200K_BASE_PATTERN)?;
//! for span in tokenizer.encode_with_offsets("Hello world")? {
//!     println!("{} {:?} {}..{}", span.token_id, span.text, span.start, span.end);
//! }
//! ```

pub mod core;

pub use crate::core::{
    global, parse_token_ids, Rank, TokenSpan, Tokenizer, TokenizerError, VocabError, Vocabulary,
    CL100K_BASE_PATTERN, O200K_BASE_PATTERN, WHITESPACE_PATTERN,
};
