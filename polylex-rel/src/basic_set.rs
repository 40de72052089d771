//! Basic sets: basic maps with no input dims.

use num_bigint::BigInt;

use crate::basic_map::{BasicMap, Div};
use crate::error::RelError;

/// A conjunction of affine constraints over parameters and one block of set
/// dims. Representation-wise this is a [`BasicMap`] whose input dimension
/// count is zero; conversions in either direction only reinterpret the
/// dimension split and never touch the constraint rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicSet(BasicMap);

impl BasicSet {
    /// Create the universe set with the given dimensions and room for
    /// `extra` existential variables.
    pub fn new(nparam: usize, dim: usize, extra: usize) -> Self {
        Self(BasicMap::new(nparam, 0, dim, extra))
    }

    pub(crate) fn from_parts(bmap: BasicMap) -> Self {
        debug_assert_eq!(bmap.n_in(), 0);
        Self(bmap)
    }

    /// Number of parameters.
    pub fn nparam(&self) -> usize {
        self.0.nparam()
    }

    /// Number of set dims.
    pub fn dim(&self) -> usize {
        self.0.n_out()
    }

    /// Number of allocated existential variables.
    pub fn n_div(&self) -> usize {
        self.0.n_div()
    }

    /// All equality rows.
    pub fn equalities(&self) -> &[Vec<BigInt>] {
        self.0.equalities()
    }

    /// All inequality rows.
    pub fn inequalities(&self) -> &[Vec<BigInt>] {
        self.0.inequalities()
    }

    /// All div definitions.
    pub fn divs(&self) -> &[Div] {
        self.0.divs()
    }

    /// Append an equality row whose leading columns are `coeffs`.
    pub fn add_equality(&mut self, coeffs: &[BigInt]) -> usize {
        self.0.add_equality(coeffs)
    }

    /// Append an inequality row whose leading columns are `coeffs`.
    pub fn add_inequality(&mut self, coeffs: &[BigInt]) -> usize {
        self.0.add_inequality(coeffs)
    }

    /// View the set as a relation with no input dims.
    pub fn as_basic_map(&self) -> &BasicMap {
        &self.0
    }

    /// Reinterpret the set dims as `n_in` input dims followed by `n_out`
    /// output dims.
    pub fn into_basic_map(self, n_in: usize, n_out: usize) -> Result<BasicMap, RelError> {
        if n_in + n_out != self.dim() {
            return Err(RelError::DimensionMismatch {
                expected: self.dim(),
                actual: n_in + n_out,
            });
        }
        Ok(self.0.reinterpret_dims(n_in, n_out))
    }

    /// Whether the point `[parameters, dims]` satisfies every constraint.
    pub fn contains(&self, point: &[BigInt]) -> Result<bool, RelError> {
        self.0.contains(point)
    }
}
