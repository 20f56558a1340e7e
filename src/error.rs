use thiserror::Error;

/// Errors produced by selection, the median wrappers and the benchmark harness.
///
/// The selection core only ever returns [`Error::OutOfRange`] or [`Error::EmptyInput`].
/// The remaining variants come from the benchmarking code in [`crate::benchmark`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("rank {k} is out of range for a sequence of length {len}")]
    OutOfRange { k: usize, len: usize },

    #[error("cannot take the median of an empty sequence")]
    EmptyInput,

    #[error("invalid benchmark configuration: {0}")]
    InvalidConfig(String),

    #[error(
        "algorithms disagree on size {size}, trial {trial}: \
         randomized {randomized}, deterministic {deterministic}"
    )]
    Disagreement {
        size: usize,
        trial: usize,
        randomized: i64,
        deterministic: i64,
    },

    #[error(
        "sanity check failed: randomized {randomized}, deterministic {deterministic}, \
         reference {reference}"
    )]
    SanityCheck {
        randomized: i64,
        deterministic: i64,
        reference: i64,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = Error::OutOfRange { k: 4, len: 4 };
        assert_eq!(
            err.to_string(),
            "rank 4 is out of range for a sequence of length 4"
        );
    }

    #[test]
    fn test_disagreement_message_names_both_results() {
        let err = Error::Disagreement {
            size: 100,
            trial: 2,
            randomized: 7,
            deterministic: 8,
        };
        let msg = err.to_string();
        assert!(msg.contains("size 100"));
        assert!(msg.contains("randomized 7"));
        assert!(msg.contains("deterministic 8"));
    }
}
