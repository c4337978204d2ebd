/// Argument-validation error raised before any computation begins.
///
/// Every public function validates its arguments fail-fast and returns one of
/// these variants on malformed input. A `NaN` result is never signalled
/// through this type: a single-element sample variance is a *successful*
/// call with a defined-as-`NaN` value, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The returns argument was empty or contained a non-finite element.
    #[error("input must be an array of numbers")]
    InvalidReturns,
    /// The moment order was negative.
    ///
    /// The message wording is kept for compatibility with callers matching on
    /// it; an order of zero is accepted.
    #[error("input must be a positive integer")]
    InvalidOrder,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_stable() {
        assert_eq!(
            format!("{}", Error::InvalidReturns),
            "input must be an array of numbers"
        );
        assert_eq!(
            format!("{}", Error::InvalidOrder),
            "input must be a positive integer"
        );
    }
}
