//! Deterministic selection with median-of-medians (BFPRT) pivots.
//!
//! The sequence is cut into blocks of [`GROUP_SIZE`] elements, each block contributes its
//! median, and the median of those medians is found by recursing into the same selector.
//! That pivot is guaranteed to have roughly 30% of the elements on either side of it, so
//! the recurrence
//!
//! ```text
//!   T(n) <= T(n / 5) + T(7n / 10) + O(n)
//! ```
//!
//! solves to O(n) in the worst case. Five is the smallest odd block size for which this
//! holds.

use super::{
    check_rank, partition, sort_and_pick, Narrowed, GROUP_SIZE, SMALL_INPUT_THRESHOLD,
};
use crate::error::Result;

/// Returns the `k`-th smallest element (0-based) of `sequence` in worst-case linear time.
///
/// # Errors
///
/// [`crate::Error::OutOfRange`] if `k >= sequence.len()`.
pub fn select_deterministic<T: Ord + Clone>(sequence: &[T], k: usize) -> Result<T> {
    check_rank(sequence.len(), k)?;
    Ok(select_unchecked(sequence, k))
}

fn select_unchecked<T: Ord + Clone>(sequence: &[T], k: usize) -> T {
    if sequence.len() <= SMALL_INPUT_THRESHOLD {
        return sort_and_pick(sequence, k);
    }

    let pivot = median_of_medians(sequence);
    let parts = partition(sequence, &pivot);
    log::trace!(
        "deterministic level: len={} k={} lows={} equals={} highs={}",
        sequence.len(),
        k,
        parts.lows.len(),
        parts.equals.len(),
        parts.highs.len()
    );

    match parts.narrow(k) {
        Narrowed::Found => pivot,
        Narrowed::Descend { sequence, k } => select_unchecked(&sequence, k),
    }
}

/// Picks a pivot that splits `sequence` away from its extremes.
///
/// `sequence` must not be empty.
fn median_of_medians<T: Ord + Clone>(sequence: &[T]) -> T {
    let mut medians: Vec<T> = sequence.chunks(GROUP_SIZE).map(block_median).collect();
    if medians.len() == 1 {
        return medians.swap_remove(0);
    }
    let mid = medians.len() / 2;
    select_unchecked(&medians, mid)
}

// Element at index len / 2 of the sorted block, so the upper middle of an even-sized final block.
fn block_median<T: Ord + Clone>(block: &[T]) -> T {
    sort_and_pick(block, block.len() / 2)
}
