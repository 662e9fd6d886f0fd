use super::ShellError;
use crate::numerics::combinatorics::binomial;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::iter::FusedIterator;

/// Exponents of one Cartesian monomial `x^x y^y z^z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct CartesianPowers {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl CartesianPowers {
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    pub const fn total(self) -> i64 {
        self.x + self.y + self.z
    }

    /// Enumerates the monomials of a Cartesian shell of angular momentum `l`
    /// in alphabetical order: `xx, xy, xz, yy, yz, zz` for `l = 2`.
    pub fn iter(l: i64) -> CartesianPowersIter {
        CartesianPowersIter {
            l,
            next: (l >= 0).then_some(Self::new(l, 0, 0)),
        }
    }

    /// Position of these powers in the order produced by [`CartesianPowers::iter`].
    pub const fn index_in_shell(self) -> i64 {
        let rest = self.total() - self.x;
        rest * (rest + 1) / 2 + self.z
    }
}

impl Display for CartesianPowers {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.total() == 0 {
            return f.write_str("1");
        }
        for (axis, power) in [('x', self.x), ('y', self.y), ('z', self.z)] {
            for _ in 0..power {
                write!(f, "{axis}")?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CartesianPowersIter {
    l: i64,
    next: Option<CartesianPowers>,
}

impl Iterator for CartesianPowersIter {
    type Item = CartesianPowers;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let CartesianPowers { x, y, z } = current;
        self.next = if y == 0 {
            (x > 0).then(|| CartesianPowers::new(x - 1, self.l - x + 1, 0))
        } else {
            Some(CartesianPowers::new(x, y - 1, z + 1))
        };
        Some(current)
    }
}

impl FusedIterator for CartesianPowersIter {}

/// Number of Cartesian functions in all shells up to and including `l`,
/// `C(l + 3, 3)`. Negative `l` covers no shells.
pub fn cartesian_count_cumulative(l: i64) -> Result<i64, ShellError> {
    if l < 0 {
        return Ok(0);
    }
    Ok(binomial(l + 3, 3)?)
}
