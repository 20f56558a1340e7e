use std::error::Error;

use clap::Parser;

use median_select::benchmark::{parse_sizes, run_benchmark, sanity_check, BenchConfig};

#[derive(Parser, Debug)]
#[command(name = "median_bench")]
#[command(about = "Compare randomized vs median-of-medians median selection", long_about = None)]
struct Args {
    /// Comma-separated input sizes
    #[arg(long, value_name = "LIST", default_value = "1000000,2000000")]
    sizes: String,

    /// Trials per size
    #[arg(long, default_value_t = 3)]
    trials: usize,

    /// Base RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Allow duplicates in input data
    #[arg(long)]
    allow_duplicates: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let median = sanity_check()?;
    log::info!("sanity check passed, median {}", median);

    let config = BenchConfig {
        sizes: parse_sizes(&args.sizes)?,
        trials: args.trials,
        seed: args.seed,
        distinct: !args.allow_duplicates,
    };

    println!("Benchmarking median selection algorithms");
    println!("{config}");

    for report in run_benchmark(&config)? {
        println!("{report}");
    }

    Ok(())
}
