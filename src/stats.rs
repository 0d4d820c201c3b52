//! Descriptive statistics primitives.
//!
//! Pure functions over slices. They return `None` for inputs they cannot
//! describe (empty, NaN/Inf) instead of erroring; the validating,
//! rounding front end is [`MathUtilities`](crate::MathUtilities).
//!
//! # Algorithms
//!
//! - **Sum/Mean**: Neumaier compensated summation for O(ε) error
//!   independent of n.
//! - **Median**: sort a copy, take the middle element or the average of
//!   the two middle elements.
//! - **Mode**: frequency table in first-seen order; only a unique,
//!   repeated maximum counts.

use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::number::Number;

/// Computes the arithmetic mean using compensated summation.
///
/// If the running sum overflows although every element is finite, each
/// term is divided by `n` before summing so the mean stays representable.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Returns
/// - `None` if `data` is empty or contains any NaN/Inf.
///
/// # Examples
/// ```
/// use u_statkit::stats::mean;
/// let v = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert!((mean(&v).unwrap() - 3.0).abs() < 1e-15);
/// assert_eq!(mean(&[f64::MAX, f64::MAX]), Some(f64::MAX));
/// ```
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    if !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    let n = data.len() as f64;
    let total = kahan_sum(data);
    if total.is_finite() {
        Some(total / n)
    } else {
        Some(kahan_sum_iter(data.iter().map(|&x| x / n)))
    }
}

/// Computes the median of `data` without mutating the input.
///
/// Internally clones and sorts the data by value. For odd-length data the
/// middle element is returned as-is, so integers stay exact; for
/// even-length data the two middle elements are averaged as a float.
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Returns
/// - `None` if `data` is empty or contains NaN.
///
/// # Examples
/// ```
/// use u_statkit::{Number, stats::median};
/// let odd: Vec<Number> = [3, 1, 2].into_iter().map(Number::from).collect();
/// assert_eq!(median(&odd), Some(Number::Int(2)));
/// let even: Vec<Number> = [4, 1, 3, 2].into_iter().map(Number::from).collect();
/// assert_eq!(median(&even), Some(Number::Float(2.5)));
/// ```
pub fn median(data: &[Number]) -> Option<Number> {
    if data.is_empty() {
        return None;
    }
    if data.iter().any(|n| matches!(n, Number::Float(x) if x.is_nan())) {
        return None;
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(|&a, &b| compare(a, b));
    let n = sorted.len();
    if n % 2 == 1 {
        return Some(sorted[n / 2]);
    }
    let mid = match (sorted[n / 2 - 1], sorted[n / 2]) {
        (Number::Int(a), Number::Int(b)) => (i128::from(a) + i128::from(b)) as f64 / 2.0,
        // Halve first so two values near f64::MAX do not overflow.
        (a, b) => a.as_f64() / 2.0 + b.as_f64() / 2.0,
    };
    Some(Number::Float(mid))
}

/// Sum of squared deviations of `data` from `center`, Σ(xᵢ − c)².
///
/// The result is `+∞` when the squares overflow; callers decide whether
/// that is an error.
pub fn sum_squared_deviations(data: &[f64], center: f64) -> f64 {
    kahan_sum_iter(data.iter().map(|&x| {
        let d = x - center;
        d * d
    }))
}

/// Returns the most frequent value, under a strict policy.
///
/// A value is the mode only if it alone attains the highest frequency
/// and that frequency is at least 2. Ties, all-unique data and
/// single-element data have no mode. Numerically equal values count as
/// one value (`2` and `2.0`); the first occurrence is returned.
///
/// # Examples
/// ```
/// use u_statkit::{Number, stats::mode};
/// let v: Vec<Number> = [1, 2, 2, 3, 4].into_iter().map(Number::from).collect();
/// assert_eq!(mode(&v), Some(Number::Int(2)));
/// let tie: Vec<Number> = [1, 1, 2, 2, 3].into_iter().map(Number::from).collect();
/// assert_eq!(mode(&tie), None);
/// ```
pub fn mode(data: &[Number]) -> Option<Number> {
    let mut slots: HashMap<ValueKey, usize> = HashMap::new();
    let mut counts: Vec<(Number, usize)> = Vec::new();
    for &n in data {
        match slots.entry(ValueKey::of(n)) {
            Entry::Occupied(e) => counts[*e.get()].1 += 1,
            Entry::Vacant(e) => {
                e.insert(counts.len());
                counts.push((n, 1));
            }
        }
    }

    let max_count = counts.iter().map(|&(_, c)| c).max()?;
    if max_count < 2 {
        return None;
    }
    let mut leaders = counts.iter().filter(|&&(_, c)| c == max_count);
    let first = leaders.next()?;
    if leaders.next().is_some() {
        None
    } else {
        Some(first.0)
    }
}

/// Hash key under which numerically equal values collide.
#[derive(Debug, PartialEq, Eq, Hash)]
enum ValueKey {
    Int(i64),
    Float(u64),
}

impl ValueKey {
    fn of(n: Number) -> Self {
        match n {
            Number::Int(i) => ValueKey::Int(i),
            Number::Float(x) => {
                if x.fract() == 0.0 && x >= i64::MIN as f64 && x < i64::MAX as f64 {
                    // Also folds -0.0 into 0.
                    ValueKey::Int(x as i64)
                } else {
                    ValueKey::Float(x.to_bits())
                }
            }
        }
    }
}

/// Orders two numbers by value; integers compare exactly.
pub fn compare(a: Number, b: Number) -> Ordering {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => x.cmp(&y),
        _ => a.as_f64().total_cmp(&b.as_f64()),
    }
}

/// Returns the smallest value, keeping the first one on ties.
///
/// # Examples
/// ```
/// use u_statkit::{Number, stats::min};
/// assert_eq!(min(&[Number::Int(3), Number::Float(1.5), Number::Int(2)]), Some(Number::Float(1.5)));
/// assert_eq!(min(&[]), None);
/// ```
pub fn min(data: &[Number]) -> Option<Number> {
    data.iter()
        .copied()
        .reduce(|best, n| if compare(n, best) == Ordering::Less { n } else { best })
}

/// Returns the largest value, keeping the first one on ties.
///
/// # Examples
/// ```
/// use u_statkit::{Number, stats::max};
/// assert_eq!(max(&[Number::Int(3), Number::Float(1.5), Number::Int(9)]), Some(Number::Int(9)));
/// ```
pub fn max(data: &[Number]) -> Option<Number> {
    data.iter()
        .copied()
        .reduce(|best, n| if compare(n, best) == Ordering::Greater { n } else { best })
}

/// Rounds `value` to `digits` decimal places.
///
/// Rounding is applied to the exact decimal expansion of the stored
/// binary value, so `4.35` (stored as `4.3499999…`) rounds down to `4.3`.
/// Exact ties go to the even digit.
///
/// # Examples
/// ```
/// use u_statkit::stats::round_to;
/// assert_eq!(round_to(1.23456, 2), 1.23);
/// assert_eq!(round_to(0.1 + 0.2, 10), 0.3);
/// assert_eq!(round_to(2.5, 0), 2.0);
/// assert_eq!(round_to(4.35, 1), 4.3);
/// ```
pub fn round_to(value: f64, digits: u32) -> f64 {
    if !value.is_finite() || digits > MAX_FRACTION_DIGITS {
        return value;
    }
    let digits = digits as usize;
    format!("{value:.digits$}").parse().unwrap_or(value)
}

/// Every finite f64 has at most 1074 digits after the decimal point.
const MAX_FRACTION_DIGITS: u32 = 1074;

// ---------------------------------------------------------------------------
// Kahan compensated summation
// ---------------------------------------------------------------------------

/// Neumaier compensated summation for O(ε) error independent of `n`.
///
/// This is an improved variant of Kahan summation that also handles the
/// case where the addend is larger in magnitude than the running sum.
///
/// Reference: Neumaier (1974), "Rundungsfehleranalyse einiger Verfahren
/// zur Summation endlicher Summen", *Zeitschrift für Angewandte
/// Mathematik und Mechanik* 54(1), pp. 39–51.
///
/// # Complexity
/// Time: O(n), Space: O(1)
pub fn kahan_sum(data: &[f64]) -> f64 {
    kahan_sum_iter(data.iter().copied())
}

/// [`kahan_sum`] over any iterator of terms.
pub fn kahan_sum_iter(terms: impl IntoIterator<Item = f64>) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for x in terms {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}
