//! Elementary number theory: factorial, primality, Fibonacci.
//!
//! These are the unchecked kernels. Argument validation and logging live
//! in [`MathUtilities`](crate::MathUtilities).

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Largest `n` accepted by [`MathUtilities::factorial`](crate::MathUtilities::factorial).
pub const FACTORIAL_LIMIT: u64 = 1000;

/// Longest sequence accepted by
/// [`MathUtilities::generate_fibonacci`](crate::MathUtilities::generate_fibonacci).
///
/// The whole sequence is held in memory and F(n) grows to about
/// `0.21 · n` decimal digits, so 10 000 terms take a few megabytes.
pub const FIBONACCI_LIMIT: u64 = 10_000;

/// Exact `n!`.
///
/// # Complexity
/// Time: O(n · M(n log n)) where M is big-integer multiplication cost.
///
/// # Examples
/// ```
/// use num_bigint::BigUint;
/// use u_statkit::number_theory::factorial;
/// assert_eq!(factorial(0), BigUint::from(1u32));
/// assert_eq!(factorial(10), BigUint::from(3_628_800u32));
/// ```
pub fn factorial(n: u64) -> BigUint {
    (2..=n).fold(BigUint::one(), |acc, k| acc * k)
}

/// Deterministic primality by trial division.
///
/// Handles `n < 2`, `n == 2` and even `n` directly, then tries odd
/// divisors `3, 5, 7, …` up to `⌊√n⌋`.
///
/// # Complexity
/// Time: O(√n), Space: O(1)
///
/// # Examples
/// ```
/// use u_statkit::number_theory::is_prime;
/// assert!(is_prime(97));
/// assert!(!is_prime(91));
/// assert!(!is_prime(-7));
/// ```
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut d: i64 = 3;
    // d <= n / d is d² <= n without overflow.
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// First `n` Fibonacci numbers, starting `0, 1, 1, 2, …`.
///
/// # Examples
/// ```
/// use num_bigint::BigUint;
/// use u_statkit::number_theory::fibonacci;
/// let expected: Vec<BigUint> = [0u32, 1, 1, 2, 3, 5, 8].into_iter().map(BigUint::from).collect();
/// assert_eq!(fibonacci(7), expected);
/// assert!(fibonacci(0).is_empty());
/// ```
pub fn fibonacci(n: usize) -> Vec<BigUint> {
    // Capacity grows with the pushes; never reserve from `n` up front.
    let mut seq: Vec<BigUint> = Vec::new();
    if n == 0 {
        return seq;
    }
    seq.push(BigUint::zero());
    if n == 1 {
        return seq;
    }
    seq.push(BigUint::one());
    for i in 2..n {
        let next = &seq[i - 1] + &seq[i - 2];
        seq.push(next);
    }
    seq
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn sieve(limit: usize) -> Vec<bool> {
        let mut is_p = vec![true; limit + 1];
        is_p[0] = false;
        if limit >= 1 {
            is_p[1] = false;
        }
        let mut i = 2;
        while i * i <= limit {
            if is_p[i] {
                let mut j = i * i;
                while j <= limit {
                    is_p[j] = false;
                    j += i;
                }
            }
            i += 1;
        }
        is_p
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        // --- Trial division agrees with a sieve ---
        #[test]
        fn is_prime_matches_sieve(n in 0_usize..20_000) {
            let reference = sieve(20_000);
            prop_assert_eq!(is_prime(n as i64), reference[n]);
        }

        // --- Products of two factors ≥ 2 are composite ---
        #[test]
        fn products_are_composite(a in 2_i64..50_000, b in 2_i64..50_000) {
            prop_assert!(!is_prime(a * b));
        }

        // --- n! = n · (n−1)! ---
        #[test]
        fn factorial_recurrence(n in 1_u64..200) {
            prop_assert_eq!(factorial(n), factorial(n - 1) * n);
        }

        // --- F(i) = F(i−1) + F(i−2) ---
        #[test]
        fn fibonacci_recurrence(n in 3_usize..300) {
            let seq = fibonacci(n);
            prop_assert_eq!(seq.len(), n);
            for i in 2..n {
                prop_assert_eq!(&seq[i], &(&seq[i - 1] + &seq[i - 2]));
            }
        }
    }
}
