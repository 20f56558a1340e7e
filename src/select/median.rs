use rand::Rng;

use super::{select_deterministic, select_randomized, sort_and_pick};
use crate::error::{Error, Result};

/// Rank of the lower median in a sequence of `len` elements: `(len - 1) / 2`.
///
/// For an even length this is the smaller of the two middle elements, so four elements
/// give rank 1.
pub fn lower_median_rank(len: usize) -> Result<usize> {
    if len == 0 {
        return Err(Error::EmptyInput);
    }
    Ok((len - 1) / 2)
}

/// Lower median of `sequence` via randomized quickselect driven by `rng`.
pub fn median_randomized<T, R>(sequence: &[T], rng: &mut R) -> Result<T>
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    let k = lower_median_rank(sequence.len())?;
    select_randomized(sequence, k, rng)
}

/// Lower median of `sequence` via median-of-medians selection.
pub fn median_deterministic<T: Ord + Clone>(sequence: &[T]) -> Result<T> {
    let k = lower_median_rank(sequence.len())?;
    select_deterministic(sequence, k)
}

/// Lower median by sorting a copy. O(n log n), used as the reference answer.
pub fn median_low<T: Ord + Clone>(sequence: &[T]) -> Result<T> {
    let k = lower_median_rank(sequence.len())?;
    Ok(sort_and_pick(sequence, k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_lower_median_rank() {
        assert_eq!(lower_median_rank(0), Err(Error::EmptyInput));
        assert_eq!(lower_median_rank(1), Ok(0));
        assert_eq!(lower_median_rank(4), Ok(1));
        assert_eq!(lower_median_rank(5), Ok(2));
        assert_eq!(lower_median_rank(10), Ok(4));
    }

    #[test]
    fn test_ten_element_scenario() {
        let data = [7, 1, 3, 9, 5, 2, 8, 6, 4, 0];
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        assert_eq!(median_randomized(&data, &mut rng), Ok(4));
        assert_eq!(median_deterministic(&data), Ok(4));
        assert_eq!(median_low(&data), Ok(4));
    }

    #[test]
    fn test_even_length_takes_lower_middle() {
        let data = [40, 10, 30, 20];
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(median_randomized(&data, &mut rng), Ok(20));
        assert_eq!(median_deterministic(&data), Ok(20));
    }

    #[test]
    fn test_empty_input() {
        let empty: Vec<i64> = Vec::new();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(median_randomized(&empty, &mut rng), Err(Error::EmptyInput));
        assert_eq!(median_deterministic(&empty), Err(Error::EmptyInput));
        assert_eq!(median_low(&empty), Err(Error::EmptyInput));
    }

    #[test]
    fn test_both_medians_agree_with_reference() {
        let mut rng = ChaCha8Rng::seed_from_u64(1234);
        for len in 1..300 {
            let data: Vec<i64> = (0..len).map(|_| rng.gen_range(-200..200)).collect();
            let expected = median_low(&data).unwrap();
            assert_eq!(median_randomized(&data, &mut rng), Ok(expected));
            assert_eq!(median_deterministic(&data), Ok(expected));
        }
    }

    #[test]
    fn test_median_stable_under_permutation() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let mut data: Vec<i64> = (0..2_001).map(|_| rng.gen_range(0..20_010)).collect();
        let expected = median_low(&data).unwrap();
        for _ in 0..5 {
            data.shuffle(&mut rng);
            assert_eq!(median_randomized(&data, &mut rng), Ok(expected));
            assert_eq!(median_deterministic(&data), Ok(expected));
        }
    }
}
