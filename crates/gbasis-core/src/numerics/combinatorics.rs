//! Integer combinatorics used by Gaussian shell bookkeeping.
//!
//! Arithmetic stays in `i64` with the same accumulation order as the legacy
//! helpers; overflow is reported instead of wrapping.

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CombinatoricsError {
    #[error("binomial coefficient requires n >= m >= 0, got n={n}, m={m}")]
    InvalidBinomialArguments { n: i64, m: i64 },
    #[error("{operation} overflowed 64-bit signed arithmetic")]
    Overflow { operation: &'static str },
}

/// Computes `n * (n - 2) * (n - 4) * ...` down to 1 or 2.
///
/// Any `n <= 1`, negative values included, is the empty product and yields 1.
/// `(2l - 1)!!` with `l = 0` therefore evaluates `(-1)!! = 1`.
pub fn double_factorial(n: i64) -> Result<i64, CombinatoricsError> {
    let mut result: i64 = 1;
    let mut n = n;
    while n > 1 {
        result = result
            .checked_mul(n)
            .ok_or(CombinatoricsError::Overflow {
                operation: "double_factorial",
            })?;
        n -= 2;
    }
    Ok(result)
}

/// Double factorial with two's-complement wrapping on overflow, matching the
/// fixed-width behaviour of the legacy numeric ABI.
pub fn wrapping_double_factorial(n: i64) -> i64 {
    let mut result: i64 = 1;
    let mut n = n;
    while n > 1 {
        result = result.wrapping_mul(n);
        n -= 2;
    }
    result
}

/// Computes `C(n, m)` by accumulating `n! / m!` and `(n - m)!` while walking
/// `n` down to `m`, followed by a single division.
///
/// Intermediate products grow faster than the result, so moderately large `n`
/// overflows even when `C(n, m)` itself fits.
pub fn binomial(n: i64, m: i64) -> Result<i64, CombinatoricsError> {
    if m < 0 || n < m {
        return Err(CombinatoricsError::InvalidBinomialArguments { n, m });
    }

    let overflow = CombinatoricsError::Overflow {
        operation: "binomial",
    };
    let mut numer: i64 = 1;
    let mut denom: i64 = 1;
    let mut current = n;
    while current > m {
        numer = numer.checked_mul(current).ok_or(overflow)?;
        denom = denom.checked_mul(current - m).ok_or(overflow)?;
        current -= 1;
    }
    Ok(numer / denom)
}
