//! Vocabulary loading and lookup for tiktoken BPE rank tables.
//!
//! # Tiktoken Format
//!
//! The tiktoken format is a simple text-based format where each line contains:
//! - A base64-encoded token (the byte sequence)
//! - A space separator
//! - An integer rank (the token's ID and its priority in BPE merging)
//!
//! Lower ranks indicate higher priority - byte sequences with lower ranks are
//! merged first during encoding.
//!
//! ```text
//! SGVsbG8= 0
//! V29ybGQ= 1
//! IQ== 2
//! ```
//!
//! Where `SGVsbG8=` decodes to `Hello` (rank 0), `V29ybGQ=` to `World` (rank 1)
//! and `IQ==` to `!` (rank 2). Base64 keeps non-printable bytes intact.
//!
//! # Layout
//!
//! A [`Vocabulary`] is immutable once built. The forward direction is a hash map
//! keyed by byte sequence; the reverse direction holds slots pointing into a
//! single contiguous byte arena, so decoding never touches the hash map. Dense
//! rank spaces index the slots directly by rank. Sparse ones keep them sorted
//! by rank and binary search.

use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine};
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

/// Token ID. Doubles as the merge priority: lower ranks merge first.
pub type Rank = u32;

/// Extra slack allowed in the rank-indexed table before a rank space counts as sparse.
const DENSE_RANK_SLACK: usize = 1024;

/// Errors that can occur when loading or querying a vocabulary.
#[derive(Error, Debug)]
pub enum VocabError {
    #[error("Invalid base64 encoding on line {line}: {source}")]
    Base64 {
        line: usize,
        #[source]
        source: base64::DecodeError,
    },
    #[error("Invalid line format on line {line}: {reason}")]
    Parse { line: usize, reason: String },
    #[error("Empty byte sequence for rank {0}")]
    EmptySequence(Rank),
    #[error("Duplicate rank: {0}")]
    DuplicateRank(Rank),
    #[error("Duplicate byte sequence {sequence:?} for ranks {first} and {second}")]
    DuplicateSequence {
        sequence: Vec<u8>,
        first: Rank,
        second: Rank,
    },
    #[error("Vocabulary contains no entries")]
    Empty,
    #[error("IO error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Unknown rank: {0}")]
    UnknownRank(Rank),
    #[error("Unknown byte sequence: {0:?}")]
    UnknownSequence(Vec<u8>),
}

/// Location of a token's bytes inside the arena.
#[derive(Debug, Clone, Copy)]
struct Slot {
    start: usize,
    end: usize,
}

/// Reverse lookup from rank to arena slot.
#[derive(Debug, Clone)]
enum RankIndex {
    /// Indexed directly by rank.
    Dense(Vec<Option<Slot>>),
    /// Sorted by rank.
    Sparse(Vec<(Rank, Slot)>),
}

impl RankIndex {
    #[inline]
    fn get(&self, rank: Rank) -> Option<Slot> {
        match self {
            RankIndex::Dense(slots) => *slots.get(rank as usize)?,
            RankIndex::Sparse(slots) => slots
                .binary_search_by_key(&rank, |&(r, _)| r)
                .ok()
                .map(|i| slots[i].1),
        }
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (Rank, Slot)> + '_> {
        match self {
            RankIndex::Dense(slots) => Box::new(
                slots
                    .iter()
                    .enumerate()
                    .filter_map(|(rank, slot)| slot.map(|s| (rank as Rank, s))),
            ),
            RankIndex::Sparse(slots) => Box::new(slots.iter().copied()),
        }
    }
}

/// Immutable bijection between byte sequences and ranks.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    encoder: FxHashMap<Vec<u8>, Rank>,
    arena: Vec<u8>,
    index: RankIndex,
    max_rank: Rank,
}

impl Vocabulary {
    /// Load a vocabulary from tiktoken-format bytes.
    ///
    /// Format: `base64_token rank\n` per line. Blank lines are skipped and a
    /// trailing `\r` is tolerated.
    pub fn from_tiktoken(data: &[u8]) -> Result<Self, VocabError> {
        let mut entries = Vec::new();

        for (idx, line) in data.split(|&b| b == b'\n').enumerate() {
            let line_no = idx + 1;
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            if line.is_empty() {
                continue;
            }

            let space_pos = line
                .iter()
                .rposition(|&b| b == b' ')
                .ok_or_else(|| VocabError::Parse {
                    line: line_no,
                    reason: "missing space separator".to_string(),
                })?;

            let token_b64 = &line[..space_pos];
            let rank_str = &line[space_pos + 1..];

            let token = STANDARD
                .decode(token_b64)
                .map_err(|source| VocabError::Base64 {
                    line: line_no,
                    source,
                })?;

            let rank_str = std::str::from_utf8(rank_str).map_err(|_| VocabError::Parse {
                line: line_no,
                reason: "invalid UTF-8 in rank".to_string(),
            })?;
            let rank: Rank = rank_str.trim().parse().map_err(|_| VocabError::Parse {
                line: line_no,
                reason: format!("invalid rank: {rank_str:?}"),
            })?;

            entries.push((token, rank));
        }

        Self::from_ranks(entries)
    }

    /// Load a tiktoken vocabulary from a file path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, VocabError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| VocabError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_tiktoken(&data)
    }

    /// Build a vocabulary from in-memory `(bytes, rank)` pairs.
    ///
    /// Rejects empty sequences, duplicate ranks and duplicate sequences. Ranks
    /// need not be contiguous.
    pub fn from_ranks<I>(pairs: I) -> Result<Self, VocabError>
    where
        I: IntoIterator<Item = (Vec<u8>, Rank)>,
    {
        let pairs = pairs.into_iter();
        let mut encoder: FxHashMap<Vec<u8>, Rank> =
            FxHashMap::with_capacity_and_hasher(pairs.size_hint().0, Default::default());
        let mut arena_len = 0usize;
        let mut max_rank: Option<Rank> = None;

        for (bytes, rank) in pairs {
            if bytes.is_empty() {
                return Err(VocabError::EmptySequence(rank));
            }
            if let Some(&first) = encoder.get(&bytes) {
                return Err(VocabError::DuplicateSequence {
                    sequence: bytes,
                    first,
                    second: rank,
                });
            }
            arena_len += bytes.len();
            max_rank = Some(max_rank.map_or(rank, |m| m.max(rank)));
            encoder.insert(bytes, rank);
        }

        let max_rank = max_rank.ok_or(VocabError::Empty)?;
        let len = encoder.len();
        let mut arena = Vec::with_capacity(arena_len);
        let mut placed: Vec<(Rank, Slot)> = Vec::with_capacity(len);
        for (bytes, &rank) in &encoder {
            let start = arena.len();
            arena.extend_from_slice(bytes);
            placed.push((
                rank,
                Slot {
                    start,
                    end: arena.len(),
                },
            ));
        }
        placed.sort_unstable_by_key(|&(rank, _)| rank);
        if let Some(w) = placed.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(VocabError::DuplicateRank(w[0].0));
        }

        let dense = max_rank as usize <= len.saturating_mul(4).saturating_add(DENSE_RANK_SLACK);
        let index = if dense {
            let mut slots: Vec<Option<Slot>> = vec![None; max_rank as usize + 1];
            for (rank, slot) in placed {
                slots[rank as usize] = Some(slot);
            }
            RankIndex::Dense(slots)
        } else {
            RankIndex::Sparse(placed)
        };

        debug!(
            entries = len,
            max_rank,
            dense,
            arena_bytes = arena.len(),
            "vocabulary loaded"
        );

        Ok(Self {
            encoder,
            arena,
            index,
            max_rank,
        })
    }

    /// Rank of a byte sequence, or `UnknownSequence` if absent.
    pub fn rank_of(&self, bytes: &[u8]) -> Result<Rank, VocabError> {
        self.get_rank(bytes)
            .ok_or_else(|| VocabError::UnknownSequence(bytes.to_vec()))
    }

    /// Rank of a byte sequence, if present.
    #[inline]
    pub fn get_rank(&self, bytes: &[u8]) -> Option<Rank> {
        self.encoder.get(bytes).copied()
    }

    /// Byte sequence for a rank, or `UnknownRank` if the rank is not in the vocabulary.
    pub fn sequence_of(&self, rank: Rank) -> Result<&[u8], VocabError> {
        self.get_sequence(rank).ok_or(VocabError::UnknownRank(rank))
    }

    /// Byte sequence for a rank, if present.
    #[inline]
    pub fn get_sequence(&self, rank: Rank) -> Option<&[u8]> {
        let slot = self.index.get(rank)?;
        Some(&self.arena[slot.start..slot.end])
    }

    /// Whether the rank maps to a byte sequence.
    #[inline]
    pub fn contains_rank(&self, rank: Rank) -> bool {
        self.index.get(rank).is_some()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.encoder.len()
    }

    /// Always false for a successfully loaded vocabulary.
    pub fn is_empty(&self) -> bool {
        self.encoder.is_empty()
    }

    /// Highest rank present.
    pub fn max_rank(&self) -> Rank {
        self.max_rank
    }

    /// Iterate `(rank, bytes)` pairs in ascending rank order.
    pub fn iter(&self) -> impl Iterator<Item = (Rank, &[u8])> + '_ {
        self.index
            .iter()
            .map(|(rank, s)| (rank, &self.arena[s.start..s.end]))
    }

    /// Serialize back to tiktoken format, one line per entry in rank order.
    pub fn to_tiktoken(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.arena.len() * 2);
        for (rank, bytes) in self.iter() {
            out.extend_from_slice(STANDARD.encode(bytes).as_bytes());
            out.push(b' ');
            out.extend_from_slice(rank.to_string().as_bytes());
            out.push(b'\n');
        }
        out
    }
}
