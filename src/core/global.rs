//! Process-wide tokenizer behind a one-time initialization guard.
//!
//! For callers that want a single shared instance instead of passing a
//! [`Tokenizer`] handle around. Initialization happens at most once; every
//! later call is a no-op that returns the existing instance. Encode and decode
//! fail with [`TokenizerError::NotInitialized`] until then.
//!
//! ```ignore
//! let vocab = Vocabulary::from_file("o200k_base.tiktoken")?;
//! init_tokenizer(vocab, O200K_BASE_PATTERN)?;
//! let spans = token_mapping("Hello world")?;
//! ```

use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use tracing::debug;

use super::alignment::TokenSpan;
use super::tokenizer::{Tokenizer, TokenizerError};
use super::vocab::{Rank, Vocabulary};

static TOKENIZER: OnceLock<Tokenizer> = OnceLock::new();

/// Build the shared tokenizer from `vocab` and `pattern`, unless one exists.
///
/// If two threads race, one instance wins and both receive it.
pub fn init_tokenizer(
    vocab: Vocabulary,
    pattern: &str,
) -> Result<&'static Tokenizer, TokenizerError> {
    if let Some(existing) = TOKENIZER.get() {
        debug!("tokenizer already initialized");
        return Ok(existing);
    }
    let tokenizer = Tokenizer::new(vocab, FxHashMap::default(), pattern)?;
    Ok(TOKENIZER.get_or_init(|| tokenizer))
}

/// Whether `init_tokenizer` has succeeded.
pub fn is_initialized() -> bool {
    TOKENIZER.get().is_some()
}

/// The shared tokenizer.
pub fn tokenizer() -> Result<&'static Tokenizer, TokenizerError> {
    TOKENIZER.get().ok_or(TokenizerError::NotInitialized)
}

/// Token IDs only.
pub fn token_ids(text: &str) -> Result<Vec<Rank>, TokenizerError> {
    tokenizer()?.encode(text)
}

/// Token IDs with their substrings and character spans.
pub fn token_mapping(text: &str) -> Result<Vec<TokenSpan>, TokenizerError> {
    tokenizer()?.encode_with_offsets(text)
}

/// Decode token IDs with the shared tokenizer.
pub fn decode_tokens(tokens: &[Rank]) -> Result<String, TokenizerError> {
    tokenizer()?.decode(tokens)
}
