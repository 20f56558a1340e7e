pub mod deterministic;
pub mod median;
pub mod partition;
pub mod randomized;

pub use deterministic::select_deterministic;
pub use median::{lower_median_rank, median_deterministic, median_low, median_randomized};
pub use partition::{partition, Narrowed, Partition};
pub use randomized::select_randomized;

use crate::error::{Error, Result};

/// Working sequences at or below this length are finished by sorting.
///
/// Both selectors share it so they agree on every input.
pub const SMALL_INPUT_THRESHOLD: usize = 10;

/// Block size used by median-of-medians pivot selection.
pub const GROUP_SIZE: usize = 5;

pub(crate) fn check_rank(len: usize, k: usize) -> Result<()> {
    if k < len {
        Ok(())
    } else {
        Err(Error::OutOfRange { k, len })
    }
}

/// Sorts a copy of `sequence` and returns its element at rank `k`.
///
/// Callers guarantee `k < sequence.len()`.
pub(crate) fn sort_and_pick<T: Ord + Clone>(sequence: &[T], k: usize) -> T {
    let mut sorted = sequence.to_vec();
    sorted.sort_unstable();
    sorted.swap_remove(k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_rank() {
        assert!(check_rank(3, 0).is_ok());
        assert!(check_rank(3, 2).is_ok());
        assert_eq!(check_rank(3, 3), Err(Error::OutOfRange { k: 3, len: 3 }));
        assert_eq!(check_rank(0, 0), Err(Error::OutOfRange { k: 0, len: 0 }));
    }

    #[test]
    fn test_sort_and_pick() {
        let data = [9, 4, 7, 1];
        assert_eq!(sort_and_pick(&data, 0), 1);
        assert_eq!(sort_and_pick(&data, 2), 7);
        assert_eq!(sort_and_pick(&data, 3), 9);
        assert_eq!(data, [9, 4, 7, 1]);
    }
}
