//! # Median benchmark harness
//!
//! Times [`median_randomized`] against [`median_deterministic`] on generated integer data
//! and checks on every trial that both algorithms return the same lower median.
//!
//! ```rust,no_run
//! use median_select::benchmark::{run_benchmark, sanity_check, BenchConfig};
//!
//! sanity_check().unwrap();
//! let config = BenchConfig {
//!     sizes: vec![10_000, 20_000],
//!     ..BenchConfig::default()
//! };
//! for report in run_benchmark(&config).unwrap() {
//!     println!("{report}");
//! }
//! ```
//!
//! Every trial is seeded from `config.seed + trial`, both for the generated data and for
//! the generator handed to the randomized selector, so a run can be reproduced exactly.

use std::fmt;
use std::time::{Duration, Instant};

use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{Error, Result};
use crate::select::{median_deterministic, median_low, median_randomized};

/// Fixed input for [`sanity_check`]. Its lower median is 4.
pub const SANITY_INPUT: [i64; 10] = [7, 1, 3, 9, 5, 2, 8, 6, 4, 0];

/// Parameters of a benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Input sizes, each benchmarked separately.
    pub sizes: Vec<usize>,
    /// Trials per size.
    pub trials: usize,
    /// Base seed; trial `t` uses `seed + t`.
    pub seed: u64,
    /// Draw unique values when true, allow duplicates otherwise.
    pub distinct: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: vec![1_000_000, 2_000_000],
            trials: 3,
            seed: 42,
            distinct: true,
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(Error::InvalidConfig("no input sizes given".to_string()));
        }
        if self.sizes.contains(&0) {
            return Err(Error::InvalidConfig(
                "input sizes must be positive".to_string(),
            ));
        }
        if self.trials == 0 {
            return Err(Error::InvalidConfig(
                "at least one trial per size is required".to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for BenchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sizes: {:?}, Trials per size: {}, Distinct: {}",
            self.sizes, self.trials, self.distinct
        )
    }
}

/// Parses a comma-separated list of sizes such as `"1000, 2_000"`.
///
/// Blank entries are skipped.
pub fn parse_sizes(list: &str) -> Result<Vec<usize>> {
    let sizes = list
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry
                .replace('_', "")
                .parse::<usize>()
                .map_err(|_| Error::InvalidConfig(format!("invalid size `{entry}`")))
        })
        .collect::<Result<Vec<_>>>()?;

    if sizes.is_empty() {
        return Err(Error::InvalidConfig(format!("no sizes in `{list}`")));
    }
    Ok(sizes)
}

/// Generates one trial's input of `size` integers from `seed`.
///
/// Distinct data is sampled without replacement from `0..size * 10`; otherwise values are
/// drawn uniformly from `0..=size * 10` with duplicates allowed.
pub fn generate_trial(size: usize, distinct: bool, seed: u64) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let span = size.saturating_mul(10);
    if distinct {
        index::sample(&mut rng, span, size)
            .into_iter()
            .map(|value| value as i64)
            .collect()
    } else {
        let upper = span as i64;
        (0..size).map(|_| rng.gen_range(0..=upper)).collect()
    }
}

/// Mean and population standard deviation of a set of timings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimingStats {
    pub mean: Duration,
    pub std_dev: Duration,
}

impl TimingStats {
    /// The deviation is zero when fewer than two samples are given.
    pub fn from_samples(samples: &[Duration]) -> Self {
        if samples.is_empty() {
            return Self::default();
        }
        let n = samples.len() as f64;
        let secs: Vec<f64> = samples.iter().map(Duration::as_secs_f64).collect();
        let mean = secs.iter().sum::<f64>() / n;
        let std_dev = if samples.len() > 1 {
            let variance = secs.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
            variance.sqrt()
        } else {
            0.0
        };
        Self {
            mean: Duration::from_secs_f64(mean),
            std_dev: Duration::from_secs_f64(std_dev),
        }
    }

    pub fn mean_ms(&self) -> f64 {
        self.mean.as_secs_f64() * 1e3
    }

    pub fn std_dev_ms(&self) -> f64 {
        self.std_dev.as_secs_f64() * 1e3
    }
}

/// Timings of both algorithms for one input size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeReport {
    pub size: usize,
    pub randomized: TimingStats,
    pub deterministic: TimingStats,
}

impl fmt::Display for SizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Size {} -> Randomized: {:.3} ms (±{:.3}), Deterministic: {:.3} ms (±{:.3})",
            group_thousands(self.size),
            self.randomized.mean_ms(),
            self.randomized.std_dev_ms(),
            self.deterministic.mean_ms(),
            self.deterministic.std_dev_ms()
        )
    }
}

fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Runs every configured size and returns one report per size, in order.
///
/// # Errors
///
/// [`Error::InvalidConfig`] for an unusable configuration and [`Error::Disagreement`] as
/// soon as the two algorithms return different medians for the same trial.
pub fn run_benchmark(config: &BenchConfig) -> Result<Vec<SizeReport>> {
    config.validate()?;
    config
        .sizes
        .iter()
        .map(|&size| bench_size(config, size))
        .collect()
}

fn bench_size(config: &BenchConfig, size: usize) -> Result<SizeReport> {
    log::info!("benchmarking size {} over {} trials", size, config.trials);

    let mut randomized_times = Vec::with_capacity(config.trials);
    let mut deterministic_times = Vec::with_capacity(config.trials);

    for trial in 0..config.trials {
        let trial_seed = config.seed.wrapping_add(trial as u64);
        let data = generate_trial(size, config.distinct, trial_seed);
        let mut rng = ChaCha8Rng::seed_from_u64(trial_seed);

        let start = Instant::now();
        let randomized = median_randomized(&data, &mut rng)?;
        randomized_times.push(start.elapsed());

        let start = Instant::now();
        let deterministic = median_deterministic(&data)?;
        deterministic_times.push(start.elapsed());

        log::debug!(
            "size {} trial {}: median {} (randomized {:?}, deterministic {:?})",
            size,
            trial,
            randomized,
            randomized_times[trial],
            deterministic_times[trial]
        );

        if randomized != deterministic {
            return Err(Error::Disagreement {
                size,
                trial,
                randomized,
                deterministic,
            });
        }
    }

    Ok(SizeReport {
        size,
        randomized: TimingStats::from_samples(&randomized_times),
        deterministic: TimingStats::from_samples(&deterministic_times),
    })
}

/// Checks both medians against [`median_low`] on [`SANITY_INPUT`] and returns the agreed value.
pub fn sanity_check() -> Result<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let randomized = median_randomized(&SANITY_INPUT, &mut rng)?;
    let deterministic = median_deterministic(&SANITY_INPUT)?;
    let reference = median_low(&SANITY_INPUT)?;
    if randomized != reference || deterministic != reference {
        return Err(Error::SanityCheck {
            randomized,
            deterministic,
            reference,
        });
    }
    Ok(reference)
}
