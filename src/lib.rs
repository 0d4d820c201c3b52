//! # u-statkit
//!
//! Validated descriptive statistics and elementary number theory.
//!
//! [`MathUtilities`] checks every input sequence up front (non-empty,
//! finite), computes, and rounds float results to a precision fixed at
//! construction. Failures are typed ([`MathError`]) and name the offending
//! element's index.
//!
//! ## Modules
//!
//! - [`utilities`] — The validating front end: sum, mean, median, mode,
//!   standard deviation, aggregate statistics, factorial, primality, Fibonacci
//! - [`stats`] — Unchecked descriptive statistics primitives
//! - [`number_theory`] — Factorial, trial-division primality, Fibonacci
//! - [`number`] — Integer/float values, exact sum totals and JSON conversion
//! - [`summary`] — The aggregate [`StatisticalResult`] record
//! - [`config`] — Serde-backed construction settings
//! - [`validate`] — Sequence preconditions
//! - [`monitor`] — Timing instrumentation
//! - [`random`] — Seeded sample generation
//!
//! ## Design Philosophy
//!
//! - **Validate before computing**: no partial work on invalid input
//! - **Numerical stability first**: Neumaier summation for sums and means
//! - **Exact where it matters**: integer sums stay integral, factorials and
//!   Fibonacci numbers are arbitrary precision
//! - **Property-based testing**: Mathematical invariants verified via proptest

pub mod config;
pub mod error;
pub mod monitor;
pub mod number;
pub mod number_theory;
pub mod random;
pub mod stats;
pub mod summary;
pub mod utilities;
pub mod validate;

pub use config::MathConfig;
pub use error::{MathError, Result};
pub use number::{Number, Total};
pub use summary::StatisticalResult;
pub use utilities::MathUtilities;
