//! Generalized partial moments of a return distribution.
//!
//! A partial moment averages the `order`-th power of deviations on one side
//! of a target return. The lower partial moment looks below the target and
//! measures downside risk; the higher partial moment looks above it and
//! measures upside potential. Order 1 gives the downside/upside potential of
//! Bacon's performance-measurement framework, order 2 the semi-variance
//! family.

use num_traits::Float;

use crate::{Error, Kbn, validate};

#[inline]
fn partial_moment<T, F>(returns: &[T], order: i32, deviation: F) -> T
where
    T: Float + Default,
    F: Fn(T) -> T,
{
    let mut acc = Kbn::default();
    for &x in returns {
        acc += deviation(x).max(T::zero()).powi(order);
    }
    let n = T::from(returns.len()).unwrap_or_else(T::nan);
    acc.total() / n
}

/// Returns the lower partial moment of order `order` with respect to a
/// target return `threshold`.
///
/// Each element `x` contributes `max(threshold - x, 0)^order`; the result is
/// the compensated-sum average of those contributions over the whole
/// sequence. Larger values mean more, or deeper, below-target returns.
///
/// For `order = 1` and `threshold = 0` on an all-non-positive sequence this
/// reduces to the mean of the negated sequence.
///
/// # Arguments
///
/// * `returns` - Non-empty slice of finite periodic returns
/// * `order` - Non-negative moment order (commonly 1 or 2)
/// * `threshold` - Target return the downside is measured against
///
/// # Returns
///
/// * `Result<T, Error>` - The lower partial moment,
///   [`Error::InvalidReturns`] on a malformed sequence, or
///   [`Error::InvalidOrder`] on a negative order
///
/// # Examples
///
/// ```
/// use portfolio_statistics::lpm;
///
/// // Only the two below-target returns contribute.
/// let downside = lpm(&[0.02, -0.01, 0.03, -0.04], 1, 0.0)?;
/// assert_eq!(downside, 0.05 / 4.0);
/// # Ok::<(), portfolio_statistics::Error>(())
/// ```
pub fn lpm<T: Float + Default>(returns: &[T], order: i32, threshold: T) -> Result<T, Error> {
    validate::check_returns(returns)?;
    validate::check_order(order)?;
    Ok(partial_moment(returns, order, |x| threshold - x))
}

/// Returns the higher partial moment of order `order` with respect to a
/// target return `threshold`.
///
/// Symmetric to [`lpm`]: each element `x` contributes
/// `max(x - threshold, 0)^order`. For `order = 1` and `threshold = 0` on an
/// all-non-negative sequence this reduces to the mean of the sequence.
///
/// # Arguments
///
/// * `returns` - Non-empty slice of finite periodic returns
/// * `order` - Non-negative moment order (commonly 1 or 2)
/// * `threshold` - Target return the upside is measured against
///
/// # Returns
///
/// * `Result<T, Error>` - The higher partial moment,
///   [`Error::InvalidReturns`] on a malformed sequence, or
///   [`Error::InvalidOrder`] on a negative order
///
/// # Examples
///
/// ```
/// use portfolio_statistics::hpm;
///
/// let upside = hpm(&[0.02, -0.01, 0.03, -0.04], 1, 0.0)?;
/// assert_eq!(upside, 0.05 / 4.0);
/// # Ok::<(), portfolio_statistics::Error>(())
/// ```
pub fn hpm<T: Float + Default>(returns: &[T], order: i32, threshold: T) -> Result<T, Error> {
    validate::check_returns(returns)?;
    validate::check_order(order)?;
    Ok(partial_moment(returns, order, |x| x - threshold))
}
