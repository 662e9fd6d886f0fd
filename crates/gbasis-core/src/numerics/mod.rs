pub mod combinatorics;
pub mod normalization;

pub use combinatorics::{binomial, double_factorial, wrapping_double_factorial, CombinatoricsError};
pub use normalization::{cartesian_normalization, pure_normalization, NormalizationError};
