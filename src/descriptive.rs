use num_traits::Float;

use crate::{Error, Kbn, validate};

/// Accumulates an iterator of values through a Kahan-Babuska-Neumaier
/// compensated accumulator.
#[inline]
pub(crate) fn compensated_sum<T, I>(values: I) -> T
where
    T: Float + Default,
    I: IntoIterator<Item = T>,
{
    let mut acc = Kbn::default();
    for v in values {
        acc += v;
    }
    acc.total()
}

/// Mean without re-validating the slice; callers must have checked it.
#[inline]
pub(crate) fn mean_unchecked<T: Float + Default>(returns: &[T]) -> T {
    let n = T::from(returns.len()).unwrap_or_else(T::nan);
    compensated_sum(returns.iter().copied()) / n
}

/// Returns the sum of a sequence of periodic returns.
///
/// Uses Kahan-Babuska-Neumaier compensated summation, so the rounding error
/// stays bounded by one unit of least precision regardless of sequence
/// length or of a large common offset across the elements.
///
/// # Arguments
///
/// * `returns` - Non-empty slice of finite periodic returns
///
/// # Returns
///
/// * `Result<T, Error>` - The sum, or [`Error::InvalidReturns`] when the
///   slice is empty or contains a non-finite element
///
/// # Examples
///
/// ```
/// use portfolio_statistics::sum;
///
/// assert_eq!(sum(&[1.5, 2.25, 3.0]), Ok(6.75));
/// ```
pub fn sum<T: Float + Default>(returns: &[T]) -> Result<T, Error> {
    validate::check_returns(returns)?;
    Ok(compensated_sum(returns.iter().copied()))
}

/// Returns the arithmetic mean of a sequence of periodic returns.
///
/// The underlying sum is compensated, so shifting every element by a
/// constant shifts the mean by exactly that constant; there is no drift from
/// cancellation even for thousands of elements sitting on a large offset.
///
/// # Arguments
///
/// * `returns` - Non-empty slice of finite periodic returns
///
/// # Returns
///
/// * `Result<T, Error>` - The mean, or [`Error::InvalidReturns`] when the
///   slice is empty or contains a non-finite element
///
/// # Examples
///
/// ```
/// use portfolio_statistics::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), Ok(2.5));
/// ```
pub fn mean<T: Float + Default>(returns: &[T]) -> Result<T, Error> {
    validate::check_returns(returns)?;
    Ok(mean_unchecked(returns))
}

/// Returns the sample variance of a sequence of periodic returns.
///
/// Computed with the corrected two-pass algorithm: the mean is taken first,
/// then the compensated sum of squared deviations is reduced by the squared
/// compensated sum of raw deviations over `n`, and the result is divided by
/// `n - 1` (Bessel's correction, unbiased estimator). The correction term
/// absorbs whatever rounding error is left in the mean, which is what makes
/// `Var(X + a) = Var(X)` hold numerically for data on a large offset; a
/// one-pass `E[X^2] - E[X]^2` formula loses all significant digits there.
///
/// A single-element slice has zero degrees of freedom: the call succeeds and
/// returns `NaN` by definition, not an error.
///
/// # Arguments
///
/// * `returns` - Non-empty slice of finite periodic returns
///
/// # Returns
///
/// * `Result<T, Error>` - The sample variance (`NaN` for one element), or
///   [`Error::InvalidReturns`] when the slice is empty or contains a
///   non-finite element
///
/// # Examples
///
/// ```
/// use portfolio_statistics::sample_variance;
///
/// assert_eq!(sample_variance(&[4.0, 7.0, 13.0, 16.0]), Ok(30.0));
/// assert!(sample_variance(&[0.01]).is_ok_and(f64::is_nan));
/// ```
pub fn sample_variance<T: Float + Default>(returns: &[T]) -> Result<T, Error> {
    validate::check_returns(returns)?;

    let len = returns.len();
    if len == 1 {
        return Ok(T::nan());
    }

    let mean = mean_unchecked(returns);
    let mut sum_sq = Kbn::default();
    let mut sum_dev = Kbn::default();
    for &x in returns {
        let d = x - mean;
        sum_sq += d * d;
        sum_dev += d;
    }

    let n = T::from(len).unwrap_or_else(T::nan);
    let dev = sum_dev.total();
    Ok((sum_sq.total() - dev * dev / n) / (n - T::one()))
}

/// Returns the sample standard deviation of a sequence of periodic returns.
///
/// Exactly the non-negative square root of [`sample_variance`]; `NaN`
/// propagates for a single-element slice.
///
/// # Arguments
///
/// * `returns` - Non-empty slice of finite periodic returns
///
/// # Returns
///
/// * `Result<T, Error>` - The sample standard deviation (`NaN` for one
///   element), or [`Error::InvalidReturns`] on malformed input
///
/// # Examples
///
/// ```
/// use portfolio_statistics::sample_stddev;
///
/// assert_eq!(sample_stddev(&[1.0, 5.0]), Ok(8.0f64.sqrt()));
/// ```
pub fn sample_stddev<T: Float + Default>(returns: &[T]) -> Result<T, Error> {
    sample_variance(returns).map(T::sqrt)
}
