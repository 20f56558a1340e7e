//! Selection of order statistics in linear time.
//!
//! Two interchangeable selectors find the `k`-th smallest element of an unsorted slice:
//!
//! - [`select_randomized`]: quickselect with a uniformly random pivot, O(n) expected.
//!   The caller supplies the random generator, so results and pivot choices can be
//!   reproduced from a seed.
//! - [`select_deterministic`]: median-of-medians (BFPRT), O(n) worst case.
//!
//! [`median_randomized`] and [`median_deterministic`] return the lower median.
//!
//! ```rust
//! use median_select::{median_deterministic, median_randomized, select_deterministic};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let data = [7, 1, 3, 9, 5, 2, 8, 6, 4, 0];
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//!
//! assert_eq!(median_randomized(&data, &mut rng), Ok(4));
//! assert_eq!(median_deterministic(&data), Ok(4));
//! assert_eq!(select_deterministic(&data, 9), Ok(9));
//! ```

pub mod benchmark;
pub mod error;
pub mod select;

pub use error::{Error, Result};
pub use select::{
    median_deterministic, median_randomized, select_deterministic, select_randomized,
};
