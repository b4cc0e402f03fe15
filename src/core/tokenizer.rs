use aho_corasick::{AhoCorasick, MatchKind};
use lru::LruCache;
use rayon::prelude::*;
use regexr::{Regex as RegexrRegex, RegexBuilder};
use rustc_hash::FxHashMap;
use std::num::NonZeroUsize;
use std::path::Path;
use std::sync::Mutex;
use thiserror::Error;
use tracing::{debug, trace};

use super::alignment::{align_spans, TokenSpan};
use super::bpe::byte_pair_encode;
use super::vocab::{Rank, VocabError, Vocabulary};

#[derive(Error, Debug)]
pub enum TokenizerError {
    #[error("Regex compilation error (regexr): {0}")]
    Regex(#[from] regexr::Error),
    #[error("Vocabulary error: {0}")]
    Vocab(#[from] VocabError),
    #[error("Aho-Corasick build error: {0}")]
    AhoCorasick(#[from] aho_corasick::BuildError),
    #[error("Special token {token:?} reuses vocabulary rank {rank}")]
    SpecialTokenConflict { token: String, rank: Rank },
    #[error("Special tokens {first:?} and {second:?} share ID {rank}")]
    DuplicateSpecialId {
        first: String,
        second: String,
        rank: Rank,
    },
    #[error("Special token strings must not be empty (ID {0})")]
    EmptySpecialToken(Rank),
    #[error("Unknown token ID: {0}")]
    UnknownRank(Rank),
    #[error("Cannot align token {index} at or after character {cursor}")]
    Alignment { index: usize, cursor: usize },
    #[error("Decoding error: invalid UTF-8")]
    Utf8,
    #[error("Invalid token ID: {0:?}")]
    InvalidTokenId(String),
    #[error("Tokenizer not initialized")]
    NotInitialized,
}

impl TokenizerError {
    /// True for per-call failures caused by the input; retrying with different
    /// input can succeed. False for vocabulary and setup failures.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            TokenizerError::UnknownRank(_)
                | TokenizerError::Alignment { .. }
                | TokenizerError::Utf8
                | TokenizerError::InvalidTokenId(_)
        )
    }
}

/// Default regex pattern for cl100k_base (GPT-4, GPT-3.5-turbo)
pub const CL100K_BASE_PATTERN: &str = r"(?i:'s|'t|'re|'ve|'m|'ll|'d)|[^\r\n\p{L}\p{N}]?\p{L}+|\p{N}{1,3}| ?[^\s\p{L}\p{N}]+[\r\n]*|\s*[\r\n]+|\s+(?!\S)|\s+";

/// Default regex pattern for o200k_base (GPT-4o)
pub const O200K_BASE_PATTERN: &str = r"[^\r\n\p{L}\p{N}]?[\p{Lu}\p{Lt}\p{Lm}\p{Lo}\p{M}]*[\p{Ll}\p{Lm}\p{Lo}\p{M}]+(?i:'s|'t|'re|'ve|'m|'ll|'d)?|[^\r\n\p{L}\p{N}]?[\p{Lu}\p{Lt}\p{Lm}\p{Lo}\p{M}]+[\p{Ll}\p{Lm}\p{Lo}\p{M}]*(?i:'s|'t|'re|'ve|'m|'ll|'d)?|\p{N}{1,3}| ?[^\s\p{L}\p{N}]+[\r\n]*|\s*[\r\n]+|\s+(?!\S)|\s+";

/// Splits on whitespace boundaries only: runs of non-whitespace and runs of whitespace.
pub const WHITESPACE_PATTERN: &str = r"\S+|\s+";

/// Default cache size for encoded chunks
const DEFAULT_CACHE_SIZE: usize = 4096;

/// BPE tokenizer over an immutable [`Vocabulary`].
///
/// Text is split into segments by the pre-tokenization regex, each segment is
/// byte-pair merged independently, and the results are concatenated in order.
/// Text the pattern does not match is still encoded as its own segment, so an
/// encode call always covers the whole input.
///
/// The tokenizer is `Send + Sync`. The only interior mutability is the chunk
/// cache, which never changes results.
pub struct Tokenizer {
    vocab: Vocabulary,
    special_tokens: FxHashMap<String, Rank>,
    special_tokens_decoder: FxHashMap<Rank, String>,
    special_token_strings: Vec<String>,
    regex: Box<RegexrRegex>,
    pattern: String,
    special_matcher: Option<AhoCorasick>,
    chunk_cache: Mutex<LruCache<Vec<u8>, Vec<Rank>>>,
    cache_size: usize,
}

impl Tokenizer {
    /// Create a new tokenizer from a vocabulary, special tokens, and regex pattern.
    ///
    /// # Arguments
    /// * `vocab` - Loaded BPE vocabulary
    /// * `special_tokens` - Map of special token strings to token IDs
    /// * `pattern` - Pre-tokenization regex pattern
    pub fn new(
        vocab: Vocabulary,
        special_tokens: FxHashMap<String, Rank>,
        pattern: &str,
    ) -> Result<Self, TokenizerError> {
        Self::with_cache_size(vocab, special_tokens, pattern, DEFAULT_CACHE_SIZE)
    }

    /// Create a new tokenizer with custom cache size.
    ///
    /// A `cache_size` of zero is treated as one.
    pub fn with_cache_size(
        vocab: Vocabulary,
        special_tokens: FxHashMap<String, Rank>,
        pattern: &str,
        cache_size: usize,
    ) -> Result<Self, TokenizerError> {
        if let Some((token, &rank)) = special_tokens
            .iter()
            .find(|&(_, &rank)| vocab.contains_rank(rank))
        {
            return Err(TokenizerError::SpecialTokenConflict {
                token: token.clone(),
                rank,
            });
        }

        let mut special_tokens_decoder: FxHashMap<Rank, String> =
            FxHashMap::with_capacity_and_hasher(special_tokens.len(), Default::default());
        for (token, &rank) in &special_tokens {
            if token.is_empty() {
                return Err(TokenizerError::EmptySpecialToken(rank));
            }
            if let Some(first) = special_tokens_decoder.insert(rank, token.clone()) {
                return Err(TokenizerError::DuplicateSpecialId {
                    first,
                    second: token.clone(),
                    rank,
                });
            }
        }

        let regex = RegexBuilder::new(pattern).jit(true).build()?;

        let special_token_strings: Vec<String> = special_tokens.keys().cloned().collect();
        let special_matcher = if special_token_strings.is_empty() {
            None
        } else {
            Some(
                AhoCorasick::builder()
                    .match_kind(MatchKind::LeftmostLongest)
                    .build(&special_token_strings)?,
            )
        };

        let cache_size = cache_size.max(1);
        let chunk_cache = Mutex::new(LruCache::new(
            NonZeroUsize::new(cache_size).unwrap_or(NonZeroUsize::MIN),
        ));

        debug!(
            vocab_entries = vocab.len(),
            special_tokens = special_tokens.len(),
            cache_size,
            pattern,
            "tokenizer initialized"
        );

        Ok(Self {
            vocab,
            special_tokens,
            special_tokens_decoder,
            special_token_strings,
            regex: Box::new(regex),
            pattern: pattern.to_string(),
            special_matcher,
            chunk_cache,
            cache_size,
        })
    }

    /// Enable or disable JIT compilation for the regex backend.
    ///
    /// JIT availability depends on platform support. When enabled, JIT will be
    /// used if available.
    ///
    /// # Example
    /// ```ignore
    /// let tokenizer = Tokenizer::from_file("o200k_base.tiktoken", O200K_BASE_PATTERN, special)?.jit(false)?;
    /// ```
    pub fn jit(mut self, use_jit: bool) -> Result<Self, TokenizerError> {
        let regex = RegexBuilder::new(&self.pattern).jit(use_jit).build()?;
        self.regex = Box::new(regex);
        Ok(self)
    }

    /// Create a tokenizer from a tiktoken vocabulary file.
    pub fn from_file(
        vocab_path: impl AsRef<Path>,
        pattern: &str,
        special_tokens: FxHashMap<String, Rank>,
    ) -> Result<Self, TokenizerError> {
        let vocab = Vocabulary::from_file(vocab_path)?;
        Self::new(vocab, special_tokens, pattern)
    }

    /// Create a tokenizer from raw tiktoken vocabulary bytes.
    pub fn from_bytes(
        vocab_data: &[u8],
        pattern: &str,
        special_tokens: FxHashMap<String, Rank>,
    ) -> Result<Self, TokenizerError> {
        let vocab = Vocabulary::from_tiktoken(vocab_data)?;
        Self::new(vocab, special_tokens, pattern)
    }

    /// Segment boundaries as byte ranges covering the whole text.
    ///
    /// Gaps between regex matches become segments of their own.
    fn segments(&self, text: &str) -> Vec<(usize, usize)> {
        let mut segments = Vec::new();
        let mut last_end = 0;

        for m in self.regex.find_iter(text) {
            let (start, end) = (m.start(), m.end());
            if start == end {
                continue;
            }
            if start > last_end {
                segments.push((last_end, start));
            }
            segments.push((start, end));
            last_end = end;
        }

        if last_end < text.len() {
            segments.push((last_end, text.len()));
        }

        segments
    }

    /// Encode one segment with BPE and caching.
    fn encode_chunk(&self, bytes: &[u8]) -> Result<Vec<Rank>, TokenizerError> {
        // Fast path: the whole segment is a known token
        if let Some(rank) = self.vocab.get_rank(bytes) {
            return Ok(vec![rank]);
        }

        if let Ok(mut cache) = self.chunk_cache.lock() {
            if let Some(cached) = cache.get(bytes) {
                return Ok(cached.clone());
            }
        }

        let result = byte_pair_encode(bytes, &self.vocab)?;

        if let Ok(mut cache) = self.chunk_cache.lock() {
            cache.put(bytes.to_vec(), result.clone());
        }

        Ok(result)
    }

    /// Encode text to token IDs (ignores special tokens in input).
    pub fn encode(&self, text: &str) -> Result<Vec<Rank>, TokenizerError> {
        let text_bytes = text.as_bytes();
        let mut result = Vec::with_capacity(text.len() / 3 + 1);

        for (start, end) in self.segments(text) {
            result.extend(self.encode_chunk(&text_bytes[start..end])?);
        }

        Ok(result)
    }

    /// Encode text with special token handling.
    ///
    /// Special tokens in the input are encoded directly without BPE. Overlapping
    /// candidates resolve to the longest match.
    pub fn encode_with_special(&self, text: &str) -> Result<Vec<Rank>, TokenizerError> {
        let Some(ref special_matcher) = self.special_matcher else {
            return self.encode(text);
        };

        let mut result = Vec::new();
        let mut last_end = 0;

        for m in special_matcher.find_iter(text.as_bytes()) {
            let start = m.start();

            if start > last_end {
                result.extend(self.encode(&text[last_end..start])?);
            }

            let token_str = &self.special_token_strings[m.pattern().as_usize()];
            if let Some(&rank) = self.special_tokens.get(token_str) {
                result.push(rank);
            }

            last_end = m.end();
        }

        if last_end < text.len() {
            result.extend(self.encode(&text[last_end..])?);
        }

        Ok(result)
    }

    /// Encode text and attach the character span each token covers.
    pub fn encode_with_offsets(&self, text: &str) -> Result<Vec<TokenSpan>, TokenizerError> {
        let ids = self.encode(text)?;
        self.spans_for(text, &ids)
    }

    /// Like [`encode_with_offsets`](Self::encode_with_offsets), with special tokens
    /// in the input matched as single tokens.
    pub fn encode_with_offsets_special(
        &self,
        text: &str,
    ) -> Result<Vec<TokenSpan>, TokenizerError> {
        let ids = self.encode_with_special(text)?;
        self.spans_for(text, &ids)
    }

    fn spans_for(&self, text: &str, ids: &[Rank]) -> Result<Vec<TokenSpan>, TokenizerError> {
        let tokens = ids
            .iter()
            .map(|&id| self.token_bytes(id).map(|bytes| (id, bytes)))
            .collect::<Result<Vec<_>, TokenizerError>>()?;
        let spans = align_spans(text, tokens)?;
        trace!(chars = text.chars().count(), tokens = spans.len(), "aligned token spans");
        Ok(spans)
    }

    /// Bytes of one token ID, regular or special.
    pub fn token_bytes(&self, id: Rank) -> Result<&[u8], TokenizerError> {
        if let Some(bytes) = self.vocab.get_sequence(id) {
            Ok(bytes)
        } else if let Some(special) = self.special_tokens_decoder.get(&id) {
            Ok(special.as_bytes())
        } else {
            Err(TokenizerError::UnknownRank(id))
        }
    }

    /// Decode token IDs back to bytes.
    ///
    /// Fails on the first ID that is neither a vocabulary rank nor a special token.
    pub fn decode_bytes(&self, tokens: &[Rank]) -> Result<Vec<u8>, TokenizerError> {
        let mut result = Vec::with_capacity(tokens.len() * 4);

        for &token in tokens {
            result.extend_from_slice(self.token_bytes(token)?);
        }

        Ok(result)
    }

    /// Decode token IDs to a string.
    pub fn decode(&self, tokens: &[Rank]) -> Result<String, TokenizerError> {
        let bytes = self.decode_bytes(tokens)?;
        String::from_utf8(bytes).map_err(|_| TokenizerError::Utf8)
    }

    /// Decode token IDs to a string, replacing invalid UTF-8 with the replacement character.
    pub fn decode_lossy(&self, tokens: &[Rank]) -> Result<String, TokenizerError> {
        let bytes = self.decode_bytes(tokens)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Batch encode multiple texts in parallel.
    pub fn encode_batch(&self, texts: &[String]) -> Result<Vec<Vec<Rank>>, TokenizerError> {
        texts.par_iter().map(|text| self.encode(text)).collect()
    }

    /// Batch encode multiple texts with spans in parallel.
    pub fn encode_with_offsets_batch(
        &self,
        texts: &[String],
    ) -> Result<Vec<Vec<TokenSpan>>, TokenizerError> {
        texts
            .par_iter()
            .map(|text| self.encode_with_offsets(text))
            .collect()
    }

    /// Batch decode multiple token lists in parallel.
    pub fn decode_batch(&self, token_lists: &[Vec<Rank>]) -> Result<Vec<String>, TokenizerError> {
        token_lists
            .par_iter()
            .map(|tokens| self.decode(tokens))
            .collect()
    }

    /// Get the vocabulary size (max token ID + 1, including special tokens).
    pub fn vocab_size(&self) -> usize {
        let max_special_id = self.special_tokens.values().max().copied().unwrap_or(0);
        let max_id = self.vocab.max_rank().max(max_special_id);
        max_id as usize + 1
    }

    /// Get the underlying vocabulary.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Get the special tokens map.
    pub fn special_tokens(&self) -> &FxHashMap<String, Rank> {
        &self.special_tokens
    }

    /// Get the pre-tokenization pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Clear the encoding cache.
    pub fn clear_cache(&self) {
        if let Ok(mut cache) = self.chunk_cache.lock() {
            cache.clear();
        }
    }

    /// Get the current cache size.
    pub fn cache_len(&self) -> usize {
        self.chunk_cache.lock().map(|c| c.len()).unwrap_or(0)
    }

    /// Get the cache capacity.
    pub fn cache_capacity(&self) -> usize {
        self.cache_size
    }
}

/// Parse token IDs separated by commas and/or whitespace, e.g. `"12194, 11, 35553"`.
///
/// Empty items are skipped, so trailing commas are accepted.
pub fn parse_token_ids(input: &str) -> Result<Vec<Rank>, TokenizerError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<Rank>()
                .map_err(|_| TokenizerError::InvalidTokenId(s.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_tokenizer() -> Tokenizer {
        let vocab = Vocabulary::from_ranks(
            (0u8..=255)
                .map(|b| (vec![b], b as Rank))
                .chain([
                    (b"he".to_vec(), 300),
                    (b"ll".to_vec(), 301),
                    (b"hell".to_vec(), 400),
                    (b"Hello".to_vec(), 401),
                    (b"World".to_vec(), 402),
                    (b" World".to_vec(), 403),
                ]),
        )
        .unwrap();

        let mut special_tokens = FxHashMap::default();
        special_tokens.insert("<|endoftext|>".to_string(), 50256);

        Tokenizer::new(vocab, special_tokens, WHITESPACE_PATTERN).unwrap()
    }

    #[test]
    fn test_encode_decode() {
        let tokenizer = make_test_tokenizer();
        let text = "Hello World";
        let tokens = tokenizer.encode(text).unwrap();
        assert_eq!(tokens, vec![401, b' ' as Rank, 402]);
        assert_eq!(tokenizer.decode(&tokens).unwrap(), text);
    }

    #[test]
    fn test_hello_spans() {
        let tokenizer = make_test_tokenizer();
        let spans = tokenizer.encode_with_offsets("hello").unwrap();
        assert_eq!(
            spans,
            vec![
                TokenSpan {
                    token_id: 400,
                    text: "hell".to_string(),
                    start: 0,
                    end: 4
                },
                TokenSpan {
                    token_id: b'o' as Rank,
                    text: "o".to_string(),
                    start: 4,
                    end: 5
                },
            ]
        );
        assert_eq!(tokenizer.decode(&[400, b'o' as Rank]).unwrap(), "hello");
    }

    #[test]
    fn test_empty_text() {
        let tokenizer = make_test_tokenizer();
        assert!(tokenizer.encode("").unwrap().is_empty());
        assert!(tokenizer.encode_with_offsets("").unwrap().is_empty());
        assert_eq!(tokenizer.decode(&[]).unwrap(), "");
    }

    #[test]
    fn test_unknown_rank() {
        let tokenizer = make_test_tokenizer();
        let err = tokenizer.decode(&[401, 999999, 402]).unwrap_err();
        assert!(matches!(err, TokenizerError::UnknownRank(999999)));
        assert!(err.is_input_error());
    }

    #[test]
    fn test_invalid_utf8_decode() {
        let tokenizer = make_test_tokenizer();
        assert!(matches!(
            tokenizer.decode(&[0xff]),
            Err(TokenizerError::Utf8)
        ));
        assert_eq!(tokenizer.decode_lossy(&[0xff]).unwrap(), "\u{FFFD}");
    }

    #[test]
    fn test_encode_with_special() {
        let tokenizer = make_test_tokenizer();
        let text = "Hello<|endoftext|>World";
        let tokens = tokenizer.encode_with_special(text).unwrap();
        assert_eq!(tokens, vec![401, 50256, 402]);
        assert_eq!(tokenizer.decode(&tokens).unwrap(), text);

        let spans = tokenizer.encode_with_offsets_special(text).unwrap();
        assert_eq!((spans[1].start, spans[1].end), (5, 18));
        assert_eq!(spans[2].start, 18);
    }

    #[test]
    fn test_plain_encode_ignores_special() {
        let tokenizer = make_test_tokenizer();
        let tokens = tokenizer.encode("<|endoftext|>").unwrap();
        assert!(!tokens.contains(&50256));
    }

    #[test]
    fn test_special_token_conflict() {
        let vocab = Vocabulary::from_ranks(vec![(b"a".to_vec(), 0)]).unwrap();
        let mut special_tokens = FxHashMap::default();
        special_tokens.insert("<|x|>".to_string(), 0);
        let err = Tokenizer::new(vocab, special_tokens, WHITESPACE_PATTERN)
            .err()
            .unwrap();
        assert!(matches!(err, TokenizerError::SpecialTokenConflict { rank: 0, .. }));
        assert!(!err.is_input_error());
    }

    #[test]
    fn test_duplicate_special_id() {
        let vocab = Vocabulary::from_ranks(vec![(b"a".to_vec(), 0)]).unwrap();
        let mut special_tokens = FxHashMap::default();
        special_tokens.insert("<a>".to_string(), 1000);
        special_tokens.insert("<bb>".to_string(), 1000);
        let err = Tokenizer::new(vocab, special_tokens, WHITESPACE_PATTERN)
            .err()
            .unwrap();
        match err {
            TokenizerError::DuplicateSpecialId {
                first,
                second,
                rank,
            } => {
                assert_eq!(rank, 1000);
                let mut names = [first, second];
                names.sort();
                assert_eq!(names, ["<a>".to_string(), "<bb>".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_special_token() {
        let vocab = Vocabulary::from_ranks(vec![(b"a".to_vec(), 0)]).unwrap();
        let mut special_tokens = FxHashMap::default();
        special_tokens.insert(String::new(), 1000);
        let err = Tokenizer::new(vocab, special_tokens, WHITESPACE_PATTERN)
            .err()
            .unwrap();
        assert!(matches!(err, TokenizerError::EmptySpecialToken(1000)));
        assert!(!err.is_input_error());
    }

    #[test]
    fn test_distinct_special_ids_decode() {
        let vocab = Vocabulary::from_ranks((0u8..=255).map(|b| (vec![b], b as Rank))).unwrap();
        let mut special_tokens = FxHashMap::default();
        special_tokens.insert("<a>".to_string(), 1000);
        special_tokens.insert("<bb>".to_string(), 1001);
        let tokenizer = Tokenizer::new(vocab, special_tokens, WHITESPACE_PATTERN).unwrap();
        let text = "x<bb>y<a>";
        let spans = tokenizer.encode_with_offsets_special(text).unwrap();
        let ids: Vec<Rank> = spans.iter().map(|s| s.token_id).collect();
        assert_eq!(ids, vec![b'x' as Rank, 1001, b'y' as Rank, 1000]);
        assert_eq!(tokenizer.decode(&ids).unwrap(), text);
        assert_eq!(spans[1].start, 1);
        assert_eq!(spans[1].end, 5);
    }

    #[test]
    fn test_unmatched_text_is_still_encoded() {
        let vocab = Vocabulary::from_ranks((0u8..=255).map(|b| (vec![b], b as Rank))).unwrap();
        let tokenizer = Tokenizer::new(vocab, FxHashMap::default(), r"[a-z]+").unwrap();
        let text = "ab, cd!";
        let tokens = tokenizer.encode(text).unwrap();
        assert_eq!(tokenizer.decode(&tokens).unwrap(), text);
        let spans = tokenizer.encode_with_offsets(text).unwrap();
        assert_eq!(spans.last().map(|s| s.end), Some(7));
    }

    #[test]
    fn test_batch_encode() {
        let tokenizer = make_test_tokenizer();
        let texts = vec!["Hello".to_string(), "World".to_string()];
        let batch_tokens = tokenizer.encode_batch(&texts).unwrap();
        assert_eq!(batch_tokens, vec![vec![401], vec![402]]);
        let decoded = tokenizer.decode_batch(&batch_tokens).unwrap();
        assert_eq!(decoded, texts);
    }

    #[test]
    fn test_vocab_size() {
        let tokenizer = make_test_tokenizer();
        assert_eq!(tokenizer.vocab_size(), 50257);
    }

    #[test]
    fn test_cache_works() {
        let tokenizer = make_test_tokenizer();
        let tokens1 = tokenizer.encode("hellohello").unwrap();
        let tokens2 = tokenizer.encode("hellohello").unwrap();
        assert_eq!(tokens1, tokens2);
        assert!(tokenizer.cache_len() > 0);
    }

    #[test]
    fn test_clear_cache() {
        let tokenizer = make_test_tokenizer();
        tokenizer.encode("hellohello").unwrap();
        assert!(tokenizer.cache_len() > 0);
        tokenizer.clear_cache();
        assert_eq!(tokenizer.cache_len(), 0);
    }

    #[test]
    fn test_jit_disable() {
        let tokenizer = make_test_tokenizer().jit(false).unwrap();
        let text = "Hello World";
        let tokens = tokenizer.encode(text).unwrap();
        assert_eq!(tokenizer.decode(&tokens).unwrap(), text);
    }

    #[test]
    fn test_parse_token_ids() {
        assert_eq!(parse_token_ids("12194, 11, 35553").unwrap(), vec![12194, 11, 35553]);
        assert_eq!(parse_token_ids(" 1 2,3, ").unwrap(), vec![1, 2, 3]);
        assert!(parse_token_ids("").unwrap().is_empty());
        assert!(matches!(
            parse_token_ids("1, x2"),
            Err(TokenizerError::InvalidTokenId(ref s)) if s == "x2"
        ));
        assert!(matches!(
            parse_token_ids("-1"),
            Err(TokenizerError::InvalidTokenId(_))
        ));
    }
}
