use super::combinatorics::{double_factorial, CombinatoricsError};
use crate::shell::cartesian::CartesianPowers;
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum NormalizationError {
    #[error("Gaussian exponent must be finite and positive, got {value}")]
    InvalidExponent { value: f64 },
    #[error("angular momentum must be non-negative, got {l}")]
    NegativeAngularMomentum { l: i64 },
    #[error(transparent)]
    Combinatorics(#[from] CombinatoricsError),
}

/// Normalization constant of a primitive Cartesian Gaussian
/// `x^a y^b z^c exp(-alpha r^2)`.
pub fn cartesian_normalization(
    alpha: f64,
    powers: CartesianPowers,
) -> Result<f64, NormalizationError> {
    const OPERATION: &str = "cartesian_normalization";
    validate_exponent(alpha)?;
    let mut denominator: i64 = 1;
    let mut l: i64 = 0;
    for power in [powers.x, powers.y, powers.z] {
        denominator = denominator
            .checked_mul(odd_double_factorial(power, OPERATION)?)
            .ok_or(CombinatoricsError::Overflow {
                operation: OPERATION,
            })?;
        l = l.checked_add(power).ok_or(CombinatoricsError::Overflow {
            operation: OPERATION,
        })?;
    }
    Ok(radial_prefactor(alpha, l, OPERATION)? / (denominator as f64).sqrt())
}

/// Normalization constant of a primitive pure (solid harmonic) Gaussian of
/// angular momentum `l`.
pub fn pure_normalization(alpha: f64, l: i64) -> Result<f64, NormalizationError> {
    const OPERATION: &str = "pure_normalization";
    validate_exponent(alpha)?;
    let denominator = odd_double_factorial(l, OPERATION)?;
    Ok(radial_prefactor(alpha, l, OPERATION)? / (denominator as f64).sqrt())
}

/// `(2l - 1)!!` for a non-negative `l`.
fn odd_double_factorial(l: i64, operation: &'static str) -> Result<i64, NormalizationError> {
    if l < 0 {
        return Err(NormalizationError::NegativeAngularMomentum { l });
    }
    let argument = l
        .checked_mul(2)
        .and_then(|twice| twice.checked_sub(1))
        .ok_or(CombinatoricsError::Overflow { operation })?;
    Ok(double_factorial(argument)?)
}

fn radial_prefactor(
    alpha: f64,
    l: i64,
    operation: &'static str,
) -> Result<f64, NormalizationError> {
    let exponent = i32::try_from(l).map_err(|_| CombinatoricsError::Overflow { operation })?;
    Ok(((4.0 * alpha).powi(exponent) * (2.0 * alpha / PI).powf(1.5)).sqrt())
}

fn validate_exponent(alpha: f64) -> Result<(), NormalizationError> {
    if !alpha.is_finite() || alpha <= 0.0 {
        return Err(NormalizationError::InvalidExponent { value: alpha });
    }
    Ok(())
}
