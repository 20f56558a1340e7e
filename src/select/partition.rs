use std::cmp::Ordering;

/// The three groups produced by partitioning a sequence around a pivot value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<T> {
    /// Elements strictly less than the pivot.
    pub lows: Vec<T>,
    /// Elements equal to the pivot.
    pub equals: Vec<T>,
    /// Elements strictly greater than the pivot.
    pub highs: Vec<T>,
}

/// Where a rank lands after partitioning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Narrowed<T> {
    /// The rank falls inside the equals band, so the answer is the pivot.
    Found,
    /// Keep searching for rank `k` inside `sequence`.
    Descend { sequence: Vec<T>, k: usize },
}

impl<T> Partition<T> {
    pub fn len(&self) -> usize {
        self.lows.len() + self.equals.len() + self.highs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maps rank `k` of the partitioned sequence onto the group that holds it.
    pub fn narrow(self, k: usize) -> Narrowed<T> {
        let below = self.lows.len();
        let through = below + self.equals.len();
        if k < below {
            Narrowed::Descend {
                sequence: self.lows,
                k,
            }
        } else if k < through {
            Narrowed::Found
        } else {
            Narrowed::Descend {
                sequence: self.highs,
                k: k - through,
            }
        }
    }
}

/// Splits `sequence` into elements less than, equal to and greater than `pivot`.
///
/// The input is left untouched. `pivot` does not have to occur in `sequence`,
/// in which case `equals` is empty.
pub fn partition<T: Ord + Clone>(sequence: &[T], pivot: &T) -> Partition<T> {
    let mut lows = Vec::new();
    let mut equals = Vec::new();
    let mut highs = Vec::new();
    for item in sequence {
        match item.cmp(pivot) {
            Ordering::Less => lows.push(item.clone()),
            Ordering::Equal => equals.push(item.clone()),
            Ordering::Greater => highs.push(item.clone()),
        }
    }
    Partition {
        lows,
        equals,
        highs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_groups() {
        let data = [5, 1, 9, 5, 3, 7, 5];
        let parts = partition(&data, &5);
        assert_eq!(parts.lows, vec![1, 3]);
        assert_eq!(parts.equals, vec![5, 5, 5]);
        assert_eq!(parts.highs, vec![9, 7]);
        assert_eq!(parts.len(), data.len());
    }

    #[test]
    fn test_partition_pivot_not_present() {
        let data = [4, 8, 2, 6];
        let parts = partition(&data, &5);
        assert!(parts.equals.is_empty());
        assert!(parts.lows.iter().all(|&x| x < 5));
        assert!(parts.highs.iter().all(|&x| x > 5));
        assert_eq!(parts.len(), 4);
    }

    #[test]
    fn test_partition_empty() {
        let data: [i32; 0] = [];
        let parts = partition(&data, &0);
        assert!(parts.is_empty());
    }

    #[test]
    fn test_partition_is_permutation() {
        let data = [3, -1, 4, 1, -5, 9, 2, 6, 5, 3, 5];
        let parts = partition(&data, &3);
        let mut joined: Vec<i32> = parts
            .lows
            .iter()
            .chain(&parts.equals)
            .chain(&parts.highs)
            .copied()
            .collect();
        joined.sort_unstable();
        let mut expected = data.to_vec();
        expected.sort_unstable();
        assert_eq!(joined, expected);
    }

    #[test]
    fn test_narrow_branches() {
        let data = [1, 2, 3, 3, 4, 5];
        assert_eq!(
            partition(&data, &3).narrow(1),
            Narrowed::Descend {
                sequence: vec![1, 2],
                k: 1
            }
        );
        assert_eq!(partition(&data, &3).narrow(2), Narrowed::Found);
        assert_eq!(partition(&data, &3).narrow(3), Narrowed::Found);
        assert_eq!(
            partition(&data, &3).narrow(5),
            Narrowed::Descend {
                sequence: vec![4, 5],
                k: 1
            }
        );
    }
}
