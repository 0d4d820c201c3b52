//! Seeded sample generation.
//!
//! Produces reproducible datasets for demonstrations and load checks.
//!
//! # Reproducibility
//!
//! For reproducible runs, use [`create_rng`] with a fixed seed.
//! The underlying algorithm (SmallRng) is deterministic for a given seed
//! on the same platform.

use rand::Rng;

use crate::number::Number;

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++) for high performance.
/// The sequence is deterministic for a given seed on the same platform.
///
/// # Examples
/// ```
/// use u_statkit::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Draws `n` floats uniformly from `[lo, hi)`.
///
/// # Returns
/// - An empty vector if `n == 0`, the bounds are not finite, or `lo >= hi`.
///
/// # Examples
/// ```
/// use u_statkit::random::{create_rng, uniform_sample};
/// let mut rng = create_rng(7);
/// let v = uniform_sample(&mut rng, 100, -1.0, 1.0);
/// assert_eq!(v.len(), 100);
/// assert!(v.iter().all(|n| (-1.0..1.0).contains(&n.as_f64())));
/// ```
pub fn uniform_sample<R: Rng>(rng: &mut R, n: usize, lo: f64, hi: f64) -> Vec<Number> {
    if !(lo.is_finite() && hi.is_finite()) || lo >= hi {
        return Vec::new();
    }
    (0..n)
        .map(|_| Number::Float(rng.random_range(lo..hi)))
        .collect()
}

/// Draws `n` integers uniformly from `[lo, hi]`.
///
/// # Returns
/// - An empty vector if `n == 0` or `lo > hi`.
pub fn integer_sample<R: Rng>(rng: &mut R, n: usize, lo: i64, hi: i64) -> Vec<Number> {
    if lo > hi {
        return Vec::new();
    }
    (0..n)
        .map(|_| Number::Int(rng.random_range(lo..=hi)))
        .collect()
}

/// The integers `lo..=hi` in order, as a sequence.
///
/// # Examples
/// ```
/// use u_statkit::random::integer_range;
/// assert_eq!(integer_range(1, 3).len(), 3);
/// assert!(integer_range(3, 1).is_empty());
/// ```
pub fn integer_range(lo: i64, hi: i64) -> Vec<Number> {
    (lo..=hi).map(Number::Int).collect()
}
