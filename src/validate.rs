use num_traits::Float;

use crate::Error;

/// Checks that `returns` is a non-empty slice of finite values.
#[inline]
pub(crate) fn check_returns<T: Float>(returns: &[T]) -> Result<(), Error> {
    if returns.is_empty() || returns.iter().any(|x| !x.is_finite()) {
        return Err(Error::InvalidReturns);
    }
    Ok(())
}

/// Checks that a moment order is a non-negative integer.
///
/// Zero is a valid order: the zeroth partial moment is well defined (it
/// degenerates to a constant 1 under IEEE `0^0 = 1`).
#[inline]
pub(crate) fn check_order(order: i32) -> Result<(), Error> {
    if order < 0 {
        return Err(Error::InvalidOrder);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_slice() {
        assert_eq!(check_returns::<f64>(&[]), Err(Error::InvalidReturns));
    }

    #[test]
    fn rejects_non_finite_elements() {
        assert_eq!(
            check_returns(&[0.01, f64::NAN, 0.02]),
            Err(Error::InvalidReturns)
        );
        assert_eq!(
            check_returns(&[0.01, f64::INFINITY]),
            Err(Error::InvalidReturns)
        );
        assert_eq!(
            check_returns(&[f64::NEG_INFINITY]),
            Err(Error::InvalidReturns)
        );
    }

    #[test]
    fn accepts_finite_values() {
        assert_eq!(check_returns(&[-0.05, 0.0, 1e9]), Ok(()));
        assert_eq!(check_returns(&[0.003f32]), Ok(()));
    }

    #[test]
    fn order_must_be_non_negative() {
        assert_eq!(check_order(-1), Err(Error::InvalidOrder));
        assert_eq!(check_order(0), Ok(()));
        assert_eq!(check_order(2), Ok(()));
    }
}
