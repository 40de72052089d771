//! Fixed-capacity disjoint unions of basic sets.

use num_bigint::BigInt;

use crate::basic_set::BasicSet;
use crate::error::RelError;

/// A union of basic sets over a common dimension signature, with the same
/// fixed-capacity contract as [`crate::Map`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Set {
    nparam: usize,
    dim: usize,
    cap: usize,
    disjoint: bool,
    parts: Vec<BasicSet>,
}

impl Set {
    /// Create an empty union with room for exactly `cap` basic sets.
    pub fn with_capacity(nparam: usize, dim: usize, cap: usize, disjoint: bool) -> Self {
        Self {
            nparam,
            dim,
            cap,
            disjoint,
            parts: Vec::with_capacity(cap),
        }
    }

    /// A union holding the single basic set `bset`.
    pub fn from_basic_set(bset: BasicSet) -> Self {
        let mut set = Self::with_capacity(bset.nparam(), bset.dim(), 1, true);
        set.add(bset);
        set
    }

    /// Number of parameters.
    pub fn nparam(&self) -> usize {
        self.nparam
    }

    /// Number of set dims.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The basic sets making up the union.
    pub fn parts(&self) -> &[BasicSet] {
        &self.parts
    }

    /// Number of basic sets in the union.
    pub fn n_parts(&self) -> usize {
        self.parts.len()
    }

    /// Whether the union holds no basic set at all.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Add a basic set to the union; see [`crate::Map::add`] for the
    /// capacity contract.
    pub fn add(&mut self, bset: BasicSet) {
        assert_eq!(bset.nparam(), self.nparam, "parameter count mismatch");
        assert_eq!(bset.dim(), self.dim, "set dim mismatch");
        assert!(self.parts.len() < self.cap, "union capacity exhausted");
        self.parts.push(bset);
    }

    pub(crate) fn into_parts(self) -> (usize, usize, bool, Vec<BasicSet>) {
        (self.nparam, self.cap, self.disjoint, self.parts)
    }

    /// Whether any part contains the point `[parameters, dims]`.
    pub fn contains(&self, point: &[BigInt]) -> Result<bool, RelError> {
        for part in &self.parts {
            if part.contains(point)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bi(v: i64) -> BigInt {
        BigInt::from(v)
    }

    #[test]
    fn singleton_union() {
        let mut bset = BasicSet::new(0, 1, 0);
        bset.add_inequality(&[bi(0), bi(1)]);
        let set = Set::from_basic_set(bset);
        assert_eq!(set.n_parts(), 1);
        assert_eq!(set.contains(&[bi(3)]), Ok(true));
        assert_eq!(set.contains(&[bi(-3)]), Ok(false));
    }
}
