//! Byte-pair merge loop for a single pre-tokenized piece.
//!
//! The piece starts as one part per byte. Parts are kept in a linked list laid
//! over the byte offsets, and every adjacent pair is scored by the rank of its
//! concatenated bytes. A min-heap of `(rank, part)` entries picks the next
//! merge; entries made stale by earlier merges are skipped lazily when popped,
//! so each merge costs O(log n) instead of a full rescan.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::vocab::{Rank, VocabError, Vocabulary};

/// Marks a missing link and an unmergeable pair.
const NONE: usize = usize::MAX;
const NO_RANK: Rank = Rank::MAX;

#[derive(Debug, Clone, Copy)]
struct Part {
    /// Byte offset where this part starts.
    start: usize,
    prev: usize,
    next: usize,
    /// Rank of this part merged with `next`, or `NO_RANK`.
    rank: Rank,
}

/// End offset of part `i`: the start of its successor, or the piece length.
#[inline]
fn part_end(parts: &[Part], i: usize, len: usize) -> usize {
    match parts[i].next {
        NONE => len,
        j => parts[j].start,
    }
}

/// Rank of merging part `i` with its successor.
#[inline]
fn pair_rank(parts: &[Part], i: usize, piece: &[u8], vocab: &Vocabulary) -> Rank {
    let j = parts[i].next;
    if j == NONE {
        return NO_RANK;
    }
    let end = part_end(parts, j, piece.len());
    vocab
        .get_rank(&piece[parts[i].start..end])
        .unwrap_or(NO_RANK)
}

/// Encode one piece into ranks, merging the lowest-ranked adjacent pair first.
///
/// Ties go to the leftmost pair. Fails with `UnknownSequence` only when a
/// resulting part is not in the vocabulary, which means the vocabulary is
/// missing a base byte.
pub fn byte_pair_encode(piece: &[u8], vocab: &Vocabulary) -> Result<Vec<Rank>, VocabError> {
    match piece.len() {
        0 => return Ok(Vec::new()),
        1 => return Ok(vec![vocab.rank_of(piece)?]),
        _ => {}
    }

    let n = piece.len();
    let mut parts: Vec<Part> = (0..n)
        .map(|i| Part {
            start: i,
            prev: if i > 0 { i - 1 } else { NONE },
            next: if i + 1 < n { i + 1 } else { NONE },
            rank: NO_RANK,
        })
        .collect();

    let mut heap: BinaryHeap<Reverse<(Rank, usize)>> = BinaryHeap::with_capacity(n);
    for i in 0..n - 1 {
        let rank = pair_rank(&parts, i, piece, vocab);
        parts[i].rank = rank;
        if rank != NO_RANK {
            heap.push(Reverse((rank, i)));
        }
    }

    while let Some(Reverse((rank, i))) = heap.pop() {
        // Stale: the pair changed since this entry was pushed.
        if parts[i].rank != rank {
            continue;
        }

        let j = parts[i].next;
        let j_next = parts[j].next;
        parts[i].next = j_next;
        if j_next != NONE {
            parts[j_next].prev = i;
        }
        parts[j].rank = NO_RANK;

        let new_rank = pair_rank(&parts, i, piece, vocab);
        parts[i].rank = new_rank;
        if new_rank != NO_RANK {
            heap.push(Reverse((new_rank, i)));
        }

        let pred = parts[i].prev;
        if pred != NONE {
            let pred_rank = pair_rank(&parts, pred, piece, vocab);
            parts[pred].rank = pred_rank;
            if pred_rank != NO_RANK {
                heap.push(Reverse((pred_rank, pred)));
            }
        }
    }

    let mut ranks = Vec::new();
    let mut cur = 0;
    while cur != NONE {
        let end = part_end(&parts, cur, n);
        ranks.push(vocab.rank_of(&piece[parts[cur].start..end])?);
        cur = parts[cur].next;
    }
    Ok(ranks)
}
