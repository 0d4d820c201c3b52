//! statkit — command-line front end for `u_statkit`.
//!
//! Usage:
//!   statkit [--precision N] <command> <input>
//!
//! Sequence commands take a JSON array, integer commands a JSON scalar:
//!   statkit mean '[1, 2, 3.5]'
//!   statkit std-dev --population '[2, 4, 4, 4, 5, 5, 7, 9]'
//!   statkit stats '[1, 2, 2, 3]'
//!   statkit factorial 20
//!   statkit demo
//!
//! Logging follows `RUST_LOG` (default `info`).

use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};
use log::error;

use u_statkit::number::{parse_number, parse_numbers};
use u_statkit::random::{create_rng, integer_range, integer_sample, uniform_sample};
use u_statkit::{MathConfig, MathUtilities, Number, Result};

#[derive(Parser)]
#[command(name = "statkit")]
#[command(about = "Validated descriptive statistics and number theory", long_about = None)]
struct Cli {
    /// Decimal places for rounding float results
    #[arg(short, long, env = "STATKIT_PRECISION", default_value_t = MathConfig::default().precision, allow_negative_numbers = true)]
    precision: i64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sum of a JSON array of numbers
    Sum { numbers: String },
    /// Arithmetic mean
    Mean { numbers: String },
    /// Median
    Median { numbers: String },
    /// Unique most frequent value (prints "none" if there is none)
    Mode { numbers: String },
    /// Standard deviation (sample unless --population)
    StdDev {
        numbers: String,
        #[arg(long)]
        population: bool,
    },
    /// All descriptive statistics as JSON
    Stats { numbers: String },
    /// Exact factorial of a non-negative integer ≤ 1000
    Factorial {
        #[arg(allow_hyphen_values = true)]
        n: String,
    },
    /// Primality check
    IsPrime {
        #[arg(allow_hyphen_values = true)]
        n: String,
    },
    /// First N Fibonacci numbers
    Fibonacci {
        #[arg(allow_hyphen_values = true)]
        n: String,
    },
    /// Walk through every operation, including error handling
    Demo {
        /// Seed for the performance dataset
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("statkit failed: {e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let utils = MathConfig {
        precision: cli.precision,
    }
    .into_utilities()?;

    match cli.command {
        Commands::Sum { numbers } => println!("{}", utils.sum(&parse_numbers(&numbers)?)?),
        Commands::Mean { numbers } => println!("{}", utils.mean(&parse_numbers(&numbers)?)?),
        Commands::Median { numbers } => {
            println!("{}", utils.median(&parse_numbers(&numbers)?)?)
        }
        Commands::Mode { numbers } => match utils.mode(&parse_numbers(&numbers)?)? {
            Some(m) => println!("{m}"),
            None => println!("none"),
        },
        Commands::StdDev {
            numbers,
            population,
        } => println!(
            "{}",
            utils.standard_deviation(&parse_numbers(&numbers)?, population)?
        ),
        Commands::Stats { numbers } => {
            let stats = utils.statistics(&parse_numbers(&numbers)?)?;
            let text = serde_json::to_string_pretty(&stats.to_json())
                .unwrap_or_else(|_| stats.to_json().to_string());
            println!("{text}");
        }
        Commands::Factorial { n } => println!("{}", utils.factorial(parse_number(&n)?)?),
        Commands::IsPrime { n } => println!("{}", utils.is_prime(parse_number(&n)?)?),
        Commands::Fibonacci { n } => {
            let seq = utils.generate_fibonacci(parse_number(&n)?)?;
            println!("{}", format_list(&seq));
        }
        Commands::Demo { seed } => demo(&utils, seed),
    }
    Ok(())
}

fn format_list<T: std::fmt::Display>(items: &[T]) -> String {
    let parts: Vec<String> = items.iter().map(|x| x.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

fn show<T: std::fmt::Display>(result: Result<T>) -> String {
    match result {
        Ok(v) => v.to_string(),
        Err(e) => format!("error: {e}"),
    }
}

fn demo(utils: &MathUtilities, seed: u64) {
    println!("=== Mathematical Utilities Demo ({utils}) ===\n");

    let test_numbers = integer_range(1, 10);

    println!("1. Basic calculations:");
    println!("   Sum of {}: {}", format_list(&test_numbers), show(utils.sum(&test_numbers)));
    println!("   Mean: {}", show(utils.mean(&test_numbers)));
    println!("   Median: {}", show(utils.median(&test_numbers)));

    println!("\n2. Comprehensive statistics:");
    match utils.statistics(&test_numbers) {
        Ok(stats) => {
            println!("   Mean: {}", stats.mean);
            println!("   Median: {}", stats.median);
            println!("   Standard Deviation: {}", stats.std_dev);
            println!("   Min: {}, Max: {}", stats.min_value, stats.max_value);
            println!("   Count: {}", stats.count);
        }
        Err(e) => println!("   error: {e}"),
    }

    println!("\n3. Special calculations:");
    println!("   Factorial of 5: {}", show(utils.factorial(5)));
    println!("   Is 17 prime? {}", show(utils.is_prime(17)));
    println!("   Is 18 prime? {}", show(utils.is_prime(18)));

    println!("\n4. Fibonacci sequence (first 10 numbers):");
    match utils.generate_fibonacci(10) {
        Ok(seq) => println!("   {}", format_list(&seq)),
        Err(e) => println!("   error: {e}"),
    }

    println!("\n5. Error handling demonstration:");
    let empty: &[Number] = &[];
    for result in [
        utils.sum(empty).map(|_| ()),
        utils.factorial(-1).map(|_| ()),
        utils.is_prime(2.5).map(|_| ()),
        utils.mean(&[1.0, f64::NAN]).map(|_| ()),
    ] {
        if let Err(e) = result {
            println!("   Caught expected error: {e}");
        }
    }

    println!("\n6. Performance test with large dataset:");
    let mut rng = create_rng(seed);
    let large_dataset = integer_sample(&mut rng, 10_000, 1, 10_000);
    let start = Instant::now();
    let large_sum = utils.sum(&large_dataset);
    let elapsed = start.elapsed();
    println!("   Sum of 10,000 random integers (seed {seed}): {}", show(large_sum));
    println!("   Calculation time: {:.4} seconds", elapsed.as_secs_f64());

    let uniform = uniform_sample(&mut rng, 10_000, 0.0, 1.0);
    let start = Instant::now();
    let uniform_mean = utils.mean(&uniform);
    let elapsed = start.elapsed();
    println!("   Mean of 10,000 uniform floats in [0, 1): {}", show(uniform_mean));
    println!("   Calculation time: {:.4} seconds", elapsed.as_secs_f64());
}
