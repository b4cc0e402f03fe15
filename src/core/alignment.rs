//! Maps encoded tokens back onto character spans of the source text.
//!
//! Tokens are aligned in emission order. Each token's text is searched for in
//! the source starting at the end of the previous token, so a substring that
//! recurs earlier in the text is never matched twice and offsets only move
//! forward.
//!
//! A byte-level vocabulary may split one character across several tokens (an
//! emoji is four bytes and often two tokens). Such fragments have no text of
//! their own: their bytes are buffered until the character completes. The
//! fragment tokens get an empty span at the cursor and the token that
//! completes the character carries it.

use super::tokenizer::TokenizerError;
use super::vocab::Rank;

/// One token and the part of the source text it covers.
///
/// `start` and `end` are character (Unicode scalar value) offsets, not byte
/// offsets, and `end - start == text.chars().count()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenSpan {
    pub token_id: Rank,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl TokenSpan {
    /// Number of characters covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True for a token that only carries part of a character.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Buffers token bytes and releases them only as complete UTF-8 characters.
#[derive(Debug, Default)]
pub(crate) struct Utf8Assembler {
    buffer: Vec<u8>,
}

impl Utf8Assembler {
    /// Append bytes and take every complete character now available.
    ///
    /// Returns `None` if the buffer holds bytes that can never become valid
    /// UTF-8, as opposed to an incomplete trailing sequence.
    pub(crate) fn push(&mut self, bytes: &[u8]) -> Option<String> {
        self.buffer.extend_from_slice(bytes);

        let valid_len = match std::str::from_utf8(&self.buffer) {
            Ok(_) => self.buffer.len(),
            Err(e) if e.error_len().is_none() => e.valid_up_to(),
            Err(_) => return None,
        };

        let rest = self.buffer.split_off(valid_len);
        let complete = std::mem::replace(&mut self.buffer, rest);
        String::from_utf8(complete).ok()
    }

    pub(crate) fn has_pending(&self) -> bool {
        !self.buffer.is_empty()
    }
}

/// Assign character spans to `tokens`, given as `(id, bytes)` in emission order.
///
/// Fails with [`TokenizerError::Alignment`] naming the token index and the
/// character cursor when a token's text does not occur at or after the cursor,
/// or when its bytes cannot form valid UTF-8.
pub(crate) fn align_spans<'a, I>(
    text: &str,
    tokens: I,
) -> Result<Vec<TokenSpan>, TokenizerError>
where
    I: IntoIterator<Item = (Rank, &'a [u8])>,
{
    let tokens = tokens.into_iter();
    let mut spans = Vec::with_capacity(tokens.size_hint().0);
    let mut assembler = Utf8Assembler::default();
    let mut byte_cursor = 0usize;
    let mut char_cursor = 0usize;

    for (index, (token_id, bytes)) in tokens.enumerate() {
        let piece = assembler.push(bytes).ok_or(TokenizerError::Alignment {
            index,
            cursor: char_cursor,
        })?;

        if piece.is_empty() {
            spans.push(TokenSpan {
                token_id,
                text: piece,
                start: char_cursor,
                end: char_cursor,
            });
            continue;
        }

        let rest = &text[byte_cursor..];
        let found = rest.find(piece.as_str()).ok_or(TokenizerError::Alignment {
            index,
            cursor: char_cursor,
        })?;

        let start = char_cursor + rest[..found].chars().count();
        let end = start + piece.chars().count();
        byte_cursor += found + piece.len();
        char_cursor = end;

        spans.push(TokenSpan {
            token_id,
            text: piece,
            start,
            end,
        });
    }

    if assembler.has_pending() {
        return Err(TokenizerError::Alignment {
            index: spans.len().saturating_sub(1),
            cursor: char_cursor,
        });
    }

    Ok(spans)
}
