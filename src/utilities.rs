//! Validating, rounding front end over [`stats`](crate::stats) and
//! [`number_theory`](crate::number_theory).
//!
//! Every sequence operation runs the same pipeline: convert to
//! [`Number`], validate, compute under [`timed`], round float results to
//! the configured precision. Failures that happen after validation are
//! logged at `error` level before being returned.

use std::fmt;

use log::{debug, error, info};
use num_bigint::BigUint;

use crate::config::DEFAULT_PRECISION;
use crate::error::{MathError, Result};
use crate::monitor::timed;
use crate::number::{Number, Total};
use crate::number_theory::{self, FACTORIAL_LIMIT, FIBONACCI_LIMIT};
use crate::stats::{self, round_to};
use crate::summary::StatisticalResult;
use crate::validate::validate_sequence;

/// Descriptive statistics and number theory with a fixed rounding precision.
///
/// Instances hold no mutable state, so they are `Copy` and can be shared
/// freely across threads.
///
/// # Examples
/// ```
/// use u_statkit::{MathUtilities, Total};
/// let utils = MathUtilities::new(4).unwrap();
/// assert_eq!(utils.sum(&[1, 2, 3, 4, 5]).unwrap(), Total::Int(15));
/// let stats = utils.statistics(&[1, 2, 3, 4, 5]).unwrap();
/// assert_eq!(stats.mean, 3.0);
/// assert_eq!(stats.std_dev, 1.5811);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MathUtilities {
    precision: u32,
}

impl Default for MathUtilities {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION as u32,
        }
    }
}

impl fmt::Display for MathUtilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MathUtilities(precision={})", self.precision)
    }
}

impl MathUtilities {
    /// Creates an instance rounding float results to `precision` decimals.
    ///
    /// # Errors
    /// [`MathError::InvalidArgument`] if `precision` is negative or does
    /// not fit in `u32`.
    pub fn new(precision: i64) -> Result<Self> {
        if precision < 0 {
            return Err(MathError::InvalidArgument(
                "Precision must be non-negative".to_string(),
            ));
        }
        let precision = u32::try_from(precision).map_err(|_| {
            MathError::InvalidArgument(format!("Precision {precision} is too large"))
        })?;
        info!("MathUtilities initialized with precision: {precision}");
        Ok(Self { precision })
    }

    /// Decimal places used for rounding.
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Converts, validates and times `f` on a sequence.
    fn run<N, T>(
        &self,
        label: &str,
        numbers: &[N],
        f: impl FnOnce(&[Number]) -> Result<T>,
    ) -> Result<T>
    where
        N: Into<Number> + Copy,
    {
        let numbers: Vec<Number> = numbers.iter().map(|&n| n.into()).collect();
        validate_sequence(&numbers)?;
        timed(label, || f(&numbers))
            .inspect_err(|e| error!("Error calculating {label}: {e}"))
    }

    fn round(&self, value: f64) -> f64 {
        round_to(value, self.precision)
    }

    /// Sum of all elements.
    ///
    /// All-integer input yields an exact [`Total::Int`], even past the
    /// `i64` range; any float makes the result a float rounded to the
    /// precision.
    ///
    /// # Errors
    /// Validation errors, or [`MathError::Overflow`] if a float sum is
    /// infinite.
    pub fn sum<N: Into<Number> + Copy>(&self, numbers: &[N]) -> Result<Total> {
        self.run("sum", numbers, |numbers| {
            let result = match exact_sum(numbers) {
                Some(total) => Total::Int(total),
                None => {
                    let total = stats::kahan_sum(&floats(numbers));
                    if !total.is_finite() {
                        return Err(MathError::Overflow(
                            "Sum calculation resulted in overflow".to_string(),
                        ));
                    }
                    Total::Float(self.round(total))
                }
            };
            debug!("Calculated sum of {} numbers: {result}", numbers.len());
            Ok(result)
        })
    }

    /// Arithmetic mean, rounded.
    pub fn mean<N: Into<Number> + Copy>(&self, numbers: &[N]) -> Result<f64> {
        self.run("mean", numbers, |numbers| {
            let mean = match exact_sum(numbers) {
                Some(total) => total as f64 / numbers.len() as f64,
                None => stats::mean(&floats(numbers)).ok_or(MathError::EmptyInput)?,
            };
            debug!("Calculated mean of {} numbers: {mean}", numbers.len());
            Ok(self.round(mean))
        })
    }

    /// Median: the middle element for odd counts, the average of the two
    /// middle elements for even counts.
    ///
    /// A middle integer is returned exactly; float results are rounded.
    pub fn median<N: Into<Number> + Copy>(&self, numbers: &[N]) -> Result<Number> {
        self.run("median", numbers, |numbers| {
            let median = match stats::median(numbers).ok_or(MathError::EmptyInput)? {
                Number::Float(x) => Number::Float(self.round(x)),
                exact => exact,
            };
            debug!("Calculated median of {} numbers: {median}", numbers.len());
            Ok(median)
        })
    }

    /// The unique most frequent value, if it occurs more than once.
    ///
    /// See [`stats::mode`] for the tie and single-occurrence policy.
    pub fn mode<N: Into<Number> + Copy>(&self, numbers: &[N]) -> Result<Option<Number>> {
        self.run("mode", numbers, |numbers| {
            let mode = stats::mode(numbers);
            match mode {
                Some(m) => debug!("Calculated mode of {} numbers: {m}", numbers.len()),
                None => debug!("No unique mode found for {} numbers", numbers.len()),
            }
            Ok(mode)
        })
    }

    /// Standard deviation around the rounded mean.
    ///
    /// `population` divides by `n`; otherwise the sample estimator divides
    /// by `n − 1`. A single value has population deviation `0`.
    ///
    /// # Errors
    /// Validation errors; [`MathError::InsufficientData`] for a sample
    /// deviation of fewer than two values; [`MathError::Overflow`] if the
    /// squared deviations overflow.
    pub fn standard_deviation<N: Into<Number> + Copy>(
        &self,
        numbers: &[N],
        population: bool,
    ) -> Result<f64> {
        self.run("standard deviation", numbers, |numbers| {
            let n = numbers.len();
            if n < 2 && !population {
                return Err(MathError::InsufficientData(
                    "Sample standard deviation requires at least 2 values".to_string(),
                ));
            }
            let mean = self.mean(numbers)?;
            let divisor = (if population { n } else { n - 1 }) as f64;
            let variance = stats::sum_squared_deviations(&floats(numbers), mean) / divisor;
            if !variance.is_finite() {
                return Err(MathError::Overflow(
                    "Standard deviation calculation resulted in overflow".to_string(),
                ));
            }
            let std_dev = variance.sqrt();
            debug!("Calculated standard deviation of {n} numbers: {std_dev}");
            Ok(self.round(std_dev))
        })
    }

    /// Mean, median, mode, sample standard deviation, variance, min, max
    /// and count in one call.
    ///
    /// `variance` is the square of the returned sample standard deviation,
    /// so a single-value sequence fails with [`MathError::InsufficientData`].
    pub fn statistics<N: Into<Number> + Copy>(&self, numbers: &[N]) -> Result<StatisticalResult> {
        self.run("statistics", numbers, |numbers| {
            let mean = self.mean(numbers)?;
            let median = self.median(numbers)?;
            let mode = self.mode(numbers)?;
            let std_dev = self.standard_deviation(numbers, false)?;
            let min_value = stats::min(numbers).ok_or(MathError::EmptyInput)?;
            let max_value = stats::max(numbers).ok_or(MathError::EmptyInput)?;
            let count = numbers.len();
            info!("Calculated comprehensive statistics for {count} numbers");
            Ok(StatisticalResult {
                mean,
                median,
                mode,
                std_dev,
                variance: std_dev * std_dev,
                min_value,
                max_value,
                count,
            })
        })
    }

    /// Exact `n!` for `0 ≤ n ≤ 1000`.
    ///
    /// # Errors
    /// [`MathError::InvalidType`] for non-integers,
    /// [`MathError::InvalidValue`] for negative `n`,
    /// [`MathError::Overflow`] above 1000.
    ///
    /// # Examples
    /// ```
    /// use num_bigint::BigUint;
    /// use u_statkit::{MathUtilities, MathError};
    /// let utils = MathUtilities::default();
    /// assert_eq!(utils.factorial(5).unwrap(), BigUint::from(120u32));
    /// assert!(matches!(utils.factorial(1001), Err(MathError::Overflow(_))));
    /// assert!(matches!(utils.factorial(2.5), Err(MathError::InvalidType { .. })));
    /// ```
    pub fn factorial(&self, n: impl Into<Number>) -> Result<BigUint> {
        let n = n.into().as_integer("Factorial")?;
        if n < 0 {
            return Err(MathError::invalid_value(
                "Factorial is not defined for negative numbers",
            ));
        }
        let n = n.unsigned_abs();
        if n > FACTORIAL_LIMIT {
            return Err(MathError::Overflow(
                "Factorial calculation would be too large".to_string(),
            ));
        }
        let result = timed("factorial", || number_theory::factorial(n));
        debug!("Calculated factorial of {n}: {result}");
        Ok(result)
    }

    /// Primality by trial division; `false` for anything below 2.
    ///
    /// # Errors
    /// [`MathError::InvalidType`] for non-integers.
    pub fn is_prime(&self, n: impl Into<Number>) -> Result<bool> {
        let n = n.into().as_integer("Prime check")?;
        let prime = timed("is_prime", || number_theory::is_prime(n));
        debug!("Prime check for {n}: {prime}");
        Ok(prime)
    }

    /// The first `n` Fibonacci numbers, `0, 1, 1, 2, 3, …`.
    ///
    /// # Errors
    /// [`MathError::InvalidType`] for non-integers,
    /// [`MathError::InvalidValue`] for negative `n`,
    /// [`MathError::Overflow`] above [`FIBONACCI_LIMIT`].
    pub fn generate_fibonacci(&self, n: impl Into<Number>) -> Result<Vec<BigUint>> {
        let n = n.into().as_integer("Fibonacci generation")?;
        if n < 0 {
            return Err(MathError::invalid_value(
                "Cannot generate negative number of Fibonacci numbers",
            ));
        }
        let n = n.unsigned_abs();
        if n > FIBONACCI_LIMIT {
            return Err(MathError::Overflow(
                "Fibonacci generation would be too large".to_string(),
            ));
        }
        let n = usize::try_from(n).map_err(|_| {
            MathError::Overflow("Fibonacci generation would be too large".to_string())
        })?;
        let seq = timed("generate_fibonacci", || number_theory::fibonacci(n));
        debug!("Generated {n} Fibonacci numbers");
        Ok(seq)
    }
}

/// Exact sum when every element is an integer, `None` otherwise.
fn exact_sum(numbers: &[Number]) -> Option<i128> {
    numbers.iter().try_fold(0_i128, |acc, n| match *n {
        Number::Int(i) => Some(acc + i128::from(i)),
        Number::Float(_) => None,
    })
}

fn floats(numbers: &[Number]) -> Vec<f64> {
    numbers.iter().map(|n| n.as_f64()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utils() -> MathUtilities {
        MathUtilities::new(10).unwrap()
    }

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    const EMPTY: &[f64] = &[];

    // --- construction ---

    #[test]
    fn test_default_precision() {
        assert_eq!(MathUtilities::default().precision(), 10);
    }

    #[test]
    fn test_custom_precision() {
        assert_eq!(MathUtilities::new(5).unwrap().precision(), 5);
        assert_eq!(MathUtilities::new(0).unwrap().precision(), 0);
    }

    #[test]
    fn test_invalid_precision() {
        let err = MathUtilities::new(-1).unwrap_err();
        assert_eq!(err, MathError::InvalidArgument("Precision must be non-negative".into()));
        assert!(matches!(
            MathUtilities::new(i64::MAX),
            Err(MathError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(MathUtilities::new(5).unwrap().to_string(), "MathUtilities(precision=5)");
    }

    // --- sum ---

    #[test]
    fn test_sum_integers() {
        assert_eq!(utils().sum(&[1, 2, 3, 4, 5]).unwrap(), Total::Int(15));
        assert_eq!(utils().sum(&[-1, 2, -3, 4, 2]).unwrap(), Total::Int(4));
        assert_eq!(utils().sum(&[42]).unwrap(), Total::Int(42));
    }

    #[test]
    fn test_sum_floats_rounded() {
        assert_eq!(utils().sum(&[0.1, 0.2, 0.3]).unwrap(), Total::Float(0.6));
        let two = MathUtilities::new(2).unwrap();
        assert_eq!(two.sum(&[1.234, 2.345]).unwrap(), Total::Float(3.58));
    }

    #[test]
    fn test_sum_mixed_is_float() {
        let v = [Number::Int(1), Number::Float(2.5)];
        assert_eq!(utils().sum(&v).unwrap(), Total::Float(3.5));
    }

    #[test]
    fn test_sum_overflow() {
        assert_eq!(
            utils().sum(&[f64::MAX, f64::MAX]),
            Err(MathError::Overflow("Sum calculation resulted in overflow".into()))
        );
    }

    #[test]
    fn test_sum_integers_past_i64_range() {
        assert_eq!(
            utils().sum(&[i64::MAX, 1]).unwrap(),
            Total::Int(i128::from(i64::MAX) + 1)
        );
        assert_eq!(
            utils().sum(&[i64::MIN, -1, i64::MIN]).unwrap(),
            Total::Int(2 * i128::from(i64::MIN) - 1)
        );
        // Intermediate excursions that cancel stay exact.
        assert_eq!(
            utils().sum(&[i64::MAX, 1, -2]).unwrap(),
            Total::Int(i128::from(i64::MAX) - 1)
        );
    }

    #[test]
    fn test_sum_large_dataset() {
        let data: Vec<i64> = (1..=10_000).collect();
        assert_eq!(utils().sum(&data).unwrap(), Total::Int(50_005_000));
        assert_eq!(utils().mean(&data).unwrap(), 5000.5);
        assert_eq!(utils().median(&data).unwrap(), Number::Float(5000.5));
    }

    // --- validation ---

    #[test]
    fn test_empty_input_everywhere() {
        let u = utils();
        assert_eq!(u.sum(EMPTY), Err(MathError::EmptyInput));
        assert_eq!(u.mean(EMPTY), Err(MathError::EmptyInput));
        assert_eq!(u.median(EMPTY), Err(MathError::EmptyInput));
        assert_eq!(u.mode(EMPTY), Err(MathError::EmptyInput));
        assert_eq!(u.standard_deviation(EMPTY, true), Err(MathError::EmptyInput));
        assert_eq!(u.statistics(EMPTY), Err(MathError::EmptyInput));
    }

    #[test]
    fn test_nan_and_infinity_rejected() {
        let u = utils();
        let err = u.mean(&[1.0, 2.0, f64::NAN, 4.0]).unwrap_err();
        assert_eq!(err.to_string(), "NaN value found at index 2");
        let err = u.sum(&[1.0, 2.0, f64::INFINITY]).unwrap_err();
        assert_eq!(err.to_string(), "Infinite value found at index 2");
        assert_eq!(u.median(&[f64::NEG_INFINITY]).unwrap_err().index(), Some(0));
    }

    #[test]
    fn test_validation_precedes_insufficient_data() {
        let err = utils().standard_deviation(&[f64::NAN], false).unwrap_err();
        assert!(matches!(err, MathError::InvalidValue { index: Some(0), .. }));
    }

    // --- mean / median ---

    #[test]
    fn test_mean() {
        assert_eq!(utils().mean(&[1, 2, 3, 4, 5]).unwrap(), 3.0);
        assert_eq!(utils().mean(&[42]).unwrap(), 42.0);
        assert!(close(utils().mean(&[1.5, 2.5, 3.5]).unwrap(), 2.5, 1e-10));
    }

    #[test]
    fn test_mean_rounding() {
        let three = MathUtilities::new(3).unwrap();
        assert_eq!(three.mean(&[1, 2, 2]).unwrap(), 1.667);
    }

    #[test]
    fn test_rounding_uses_stored_binary_value() {
        let one = MathUtilities::new(1).unwrap();
        assert_eq!(one.mean(&[4.35]).unwrap(), 4.3);
        assert_eq!(one.sum(&[4.35]).unwrap(), Total::Float(4.3));
        let two = MathUtilities::new(2).unwrap();
        assert_eq!(two.median(&[2.675]).unwrap(), Number::Float(2.67));
    }

    #[test]
    fn test_median() {
        assert_eq!(utils().median(&[1, 3, 2, 5, 4]).unwrap(), Number::Int(3));
        assert_eq!(utils().median(&[1, 2, 3, 4]).unwrap(), Number::Float(2.5));
        assert_eq!(utils().median(&[42]).unwrap(), Number::Int(42));
        assert_eq!(utils().median(&[1, 2, 2, 3]).unwrap(), Number::Float(2.0));
        let two = MathUtilities::new(2).unwrap();
        assert_eq!(two.median(&[1.0, 2.0, 3.333]).unwrap(), Number::Float(2.0));
        assert_eq!(two.median(&[1.111, 2.0, 3.333]).unwrap(), Number::Float(2.0));
        assert_eq!(two.median(&[0.0, 3.333]).unwrap(), Number::Float(1.67));
    }

    #[test]
    fn test_median_large_integers_exact() {
        let v = [i64::MAX, 1, i64::MAX - 1];
        assert_eq!(utils().median(&v).unwrap(), Number::Int(i64::MAX - 1));
        let big = (1_i64 << 53) + 1;
        assert_eq!(utils().median(&[big, big - 1, big + 1]).unwrap(), Number::Int(big));
    }

    // --- mode ---

    #[test]
    fn test_mode() {
        assert_eq!(utils().mode(&[1, 2, 2, 3, 4]).unwrap(), Some(Number::Int(2)));
        assert_eq!(utils().mode(&[1, 2, 3, 4, 5]).unwrap(), None);
        assert_eq!(utils().mode(&[1, 1, 2, 2, 3]).unwrap(), None);
        assert_eq!(utils().mode(&[5]).unwrap(), None);
    }

    // --- standard deviation ---

    #[test]
    fn test_std_dev_sample() {
        let sd = utils().standard_deviation(&[1, 2, 3, 4, 5], false).unwrap();
        assert!(close(sd, 1.5811388301, 1e-10));
    }

    #[test]
    fn test_std_dev_population() {
        let sd = utils().standard_deviation(&[1, 2, 3, 4, 5], true).unwrap();
        assert!(close(sd, 2f64.sqrt(), 1e-9));
        let v = [2, 4, 4, 4, 5, 5, 7, 9];
        assert_eq!(utils().standard_deviation(&v, true).unwrap(), 2.0);
    }

    #[test]
    fn test_std_dev_single_value() {
        assert_eq!(
            utils().standard_deviation(&[5], false),
            Err(MathError::InsufficientData(
                "Sample standard deviation requires at least 2 values".into()
            ))
        );
        assert_eq!(utils().standard_deviation(&[5], true).unwrap(), 0.0);
    }

    #[test]
    fn test_std_dev_overflow() {
        assert!(matches!(
            utils().standard_deviation(&[-1e300, 1e300], false),
            Err(MathError::Overflow(_))
        ));
    }

    // --- statistics ---

    #[test]
    fn test_statistics_basic() {
        let s = utils().statistics(&[1, 2, 3, 4, 5]).unwrap();
        assert_eq!(s.mean, 3.0);
        assert_eq!(s.median, Number::Int(3));
        assert_eq!(s.mode, None);
        assert!(close(s.std_dev, 1.5811, 1e-3));
        assert_eq!(s.min_value, Number::Int(1));
        assert_eq!(s.max_value, Number::Int(5));
        assert_eq!(s.count, 5);
    }

    #[test]
    fn test_statistics_workflow() {
        let data = [1, 2, 3, 4, 4, 4, 5, 6, 7, 8, 9, 10, 4];
        let s = utils().statistics(&data).unwrap();
        assert!(s.mean > 0.0);
        assert_eq!(s.median, Number::Int(4));
        assert_eq!(s.mode, Some(Number::Int(4)));
        assert!(s.std_dev > 0.0 && s.variance > 0.0);
        assert_eq!(s.min_value, Number::Int(1));
        assert_eq!(s.max_value, Number::Int(10));
        assert_eq!(s.count, 13);
        let json = s.to_json();
        assert!(json.get("mean").is_some());
        assert!(json.get("standard_deviation").is_some());
    }

    #[test]
    fn test_statistics_variance_is_sample_std_dev_squared() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let s = utils().statistics(&data).unwrap();
        let sd = utils().standard_deviation(&data, false).unwrap();
        assert_eq!(s.std_dev, sd);
        assert!(close(s.variance, sd * sd, 1e-12));
        // Sample, not population: 32 / 7.
        assert!(close(s.variance, 32.0 / 7.0, 1e-8));
    }

    #[test]
    fn test_statistics_single_value_fails() {
        assert!(matches!(
            utils().statistics(&[7]),
            Err(MathError::InsufficientData(_))
        ));
    }

    // --- factorial ---

    #[test]
    fn test_factorial() {
        let cases: [(i64, u64); 6] = [(0, 1), (1, 1), (2, 2), (3, 6), (5, 120), (10, 3_628_800)];
        for (n, expected) in cases {
            assert_eq!(utils().factorial(n).unwrap(), BigUint::from(expected));
        }
    }

    #[test]
    fn test_factorial_errors() {
        let err = utils().factorial(-1).unwrap_err();
        assert_eq!(err.to_string(), "Factorial is not defined for negative numbers");
        assert!(matches!(err, MathError::InvalidValue { .. }));

        let err = utils().factorial(5.5).unwrap_err();
        assert_eq!(err.to_string(), "Factorial requires an integer, got float");

        let err = utils().factorial(1001).unwrap_err();
        assert_eq!(err, MathError::Overflow("Factorial calculation would be too large".into()));

        assert!(utils().factorial(1000).is_ok());
    }

    // --- is_prime ---

    #[test]
    fn test_is_prime() {
        for n in [2, 3, 5, 7, 11, 13, 17, 19, 23, 97, 7919] {
            assert!(utils().is_prime(n).unwrap(), "{n} should be prime");
        }
        for n in [-7, 0, 1, 4, 6, 8, 9, 10, 15, 21, 25, 100] {
            assert!(!utils().is_prime(n).unwrap(), "{n} should not be prime");
        }
    }

    #[test]
    fn test_is_prime_non_integer() {
        let err = utils().is_prime(3.0).unwrap_err();
        assert_eq!(err.to_string(), "Prime check requires an integer, got float");
    }

    // --- fibonacci ---

    #[test]
    fn test_fibonacci() {
        let as_u64 = |v: Vec<BigUint>| -> Vec<u64> {
            v.iter().map(|x| x.to_string().parse().unwrap()).collect()
        };
        assert_eq!(
            as_u64(utils().generate_fibonacci(10).unwrap()),
            vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]
        );
        assert!(utils().generate_fibonacci(0).unwrap().is_empty());
        assert_eq!(as_u64(utils().generate_fibonacci(1).unwrap()), vec![0]);
        assert_eq!(as_u64(utils().generate_fibonacci(2).unwrap()), vec![0, 1]);
        assert_eq!(utils().generate_fibonacci(1000).unwrap().len(), 1000);
    }

    #[test]
    fn test_fibonacci_errors() {
        let err = utils().generate_fibonacci(-1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot generate negative number of Fibonacci numbers"
        );
        let err = utils().generate_fibonacci(2.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Fibonacci generation requires an integer, got float"
        );
    }

    #[test]
    fn test_fibonacci_too_large() {
        let too_large = MathError::Overflow("Fibonacci generation would be too large".into());
        assert_eq!(utils().generate_fibonacci(i64::MAX), Err(too_large.clone()));
        let above = i64::try_from(FIBONACCI_LIMIT).unwrap() + 1;
        assert_eq!(utils().generate_fibonacci(above), Err(too_large));
        let at_limit = utils().generate_fibonacci(above - 1).unwrap();
        assert_eq!(at_limit.len(), 10_000);
    }

    // --- concurrency ---

    #[test]
    fn test_independent_instances_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|p| {
                std::thread::spawn(move || {
                    let u = MathUtilities::new(p).unwrap();
                    u.mean(&[1, 2, 2]).unwrap()
                })
            })
            .collect();
        let means: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(means, vec![2.0, 1.7, 1.67, 1.667]);
    }
}
