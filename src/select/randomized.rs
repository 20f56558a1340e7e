use std::borrow::Cow;

use rand::Rng;

use super::{check_rank, partition, sort_and_pick, Narrowed, SMALL_INPUT_THRESHOLD};
use crate::error::Result;

/// Returns the `k`-th smallest element (0-based) of `sequence` using randomized quickselect.
///
/// Each round draws one pivot uniformly from the current working set with `rng`,
/// partitions three ways around it and keeps only the group that holds rank `k`.
/// Working sets of at most [`SMALL_INPUT_THRESHOLD`] elements are finished by sorting.
///
/// Expected time is O(n), worst case O(n^2). The caller's slice is never copied
/// wholesale or mutated.
///
/// # Errors
///
/// [`crate::Error::OutOfRange`] if `k >= sequence.len()`.
pub fn select_randomized<T, R>(sequence: &[T], k: usize, rng: &mut R) -> Result<T>
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    check_rank(sequence.len(), k)?;

    let mut working: Cow<'_, [T]> = Cow::Borrowed(sequence);
    let mut k = k;
    loop {
        if working.len() <= SMALL_INPUT_THRESHOLD {
            return Ok(sort_and_pick(&working, k));
        }

        let pivot = working[rng.gen_range(0..working.len())].clone();
        let parts = partition(&working, &pivot);
        log::trace!(
            "randomized round: len={} k={} lows={} equals={} highs={}",
            working.len(),
            k,
            parts.lows.len(),
            parts.equals.len(),
            parts.highs.len()
        );

        match parts.narrow(k) {
            Narrowed::Found => return Ok(pivot),
            Narrowed::Descend { sequence, k: next } => {
                working = Cow::Owned(sequence);
                k = next;
            }
        }
    }
}
