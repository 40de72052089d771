//! Pointwise membership evaluation.
//!
//! Exact integer evaluation of a basic map at a concrete point, used to
//! compare relations extensionally. Existential variables with a known
//! definition are computed bottom-up by floor division; evaluating a
//! relation with an unknown div is an error rather than a search.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

use crate::basic_map::BasicMap;
use crate::error::RelError;

/// `row[0] + sum(row[1 + i] * vals[i])`.
fn eval_row(row: &[BigInt], vals: &[BigInt]) -> BigInt {
    let mut acc = row[0].clone();
    for (c, v) in row[1..].iter().zip(vals) {
        if !c.is_zero() {
            acc += c * v;
        }
    }
    acc
}

impl BasicMap {
    /// Whether the point `[parameters, inputs, outputs]` satisfies every
    /// constraint for the (uniquely determined) values of the known
    /// existential variables.
    pub fn contains(&self, point: &[BigInt]) -> Result<bool, RelError> {
        if point.len() != self.total_dim() {
            return Err(RelError::DimensionMismatch {
                expected: self.total_dim(),
                actual: point.len(),
            });
        }

        // vals = [point, div values]; divs only reference earlier divs, so
        // one forward pass suffices.
        let mut vals = point.to_vec();
        vals.resize(self.total_dim() + self.n_div(), BigInt::zero());
        for i in 0..self.n_div() {
            let div = self.div(i);
            if div.denom.is_zero() {
                return Err(RelError::UnknownDiv { index: i });
            }
            debug_assert!(div.denom.is_positive());
            debug_assert!(div.def[self.div_offset() + i..]
                .iter()
                .all(|c| c.is_zero()));
            let num = eval_row(&div.def, &vals);
            vals[self.total_dim() + i] = num.div_floor(&div.denom);
        }

        for row in self.equalities() {
            if !eval_row(row, &vals).is_zero() {
                return Ok(false);
            }
        }
        for row in self.inequalities() {
            if eval_row(row, &vals).is_negative() {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bi(v: i64) -> BigInt {
        BigInt::from(v)
    }

    #[test]
    fn triangle_membership() {
        // {[i] -> [j] : 0 <= j <= i <= 10}
        let mut bmap = BasicMap::new(0, 1, 1, 0);
        bmap.add_inequality(&[bi(0), bi(0), bi(1)]);
        bmap.add_inequality(&[bi(0), bi(1), bi(-1)]);
        bmap.add_inequality(&[bi(10), bi(-1), bi(0)]);

        assert_eq!(bmap.contains(&[bi(10), bi(10)]), Ok(true));
        assert_eq!(bmap.contains(&[bi(0), bi(0)]), Ok(true));
        assert_eq!(bmap.contains(&[bi(11), bi(0)]), Ok(false));
        assert_eq!(bmap.contains(&[bi(5), bi(6)]), Ok(false));
    }

    #[test]
    fn div_values_use_floor_division() {
        // {[i] -> [j] : j = floor(i/2)} via an explicit div
        let mut bmap = BasicMap::new(0, 1, 1, 1);
        let d = bmap.alloc_div();
        bmap.set_div(d, bi(2), vec![bi(0), bi(1), bi(0), bi(0)]);
        // j - q = 0
        bmap.add_equality(&[bi(0), bi(0), bi(1), bi(-1)]);

        assert_eq!(bmap.contains(&[bi(7), bi(3)]), Ok(true));
        assert_eq!(bmap.contains(&[bi(6), bi(3)]), Ok(true));
        assert_eq!(bmap.contains(&[bi(7), bi(4)]), Ok(false));
        // Floor, not truncation: floor(-3/2) = -2.
        assert_eq!(bmap.contains(&[bi(-3), bi(-2)]), Ok(true));
        assert_eq!(bmap.contains(&[bi(-3), bi(-1)]), Ok(false));
    }

    #[test]
    fn unknown_div_is_an_error() {
        let mut bmap = BasicMap::new(0, 1, 1, 0);
        bmap.add_equality(&[bi(0), bi(1), bi(-2)]);
        let projected = bmap.project_out_outputs();
        assert_eq!(
            projected.contains(&[bi(4)]),
            Err(RelError::UnknownDiv { index: 0 })
        );
    }

    #[test]
    fn wrong_arity_is_an_error() {
        let bmap = BasicMap::new(0, 1, 1, 0);
        assert!(matches!(
            bmap.contains(&[bi(0)]),
            Err(RelError::DimensionMismatch { .. })
        ));
    }
}
