//! Fixed-capacity disjoint unions of basic maps.

use num_bigint::BigInt;

use crate::basic_map::BasicMap;
use crate::error::RelError;
use crate::set::Set;

/// A union of basic maps over a common dimension signature.
///
/// The capacity is fixed at construction and [`Map::add`] must never exceed
/// it: producers size the union exactly up front (the quast decoder does so
/// from its counting pre-pass), and overflowing it is an internal invariant
/// violation rather than a recoverable condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    nparam: usize,
    n_in: usize,
    n_out: usize,
    cap: usize,
    disjoint: bool,
    parts: Vec<BasicMap>,
}

impl Map {
    /// Create an empty union with room for exactly `cap` basic maps.
    pub fn with_capacity(
        nparam: usize,
        n_in: usize,
        n_out: usize,
        cap: usize,
        disjoint: bool,
    ) -> Self {
        Self {
            nparam,
            n_in,
            n_out,
            cap,
            disjoint,
            parts: Vec::with_capacity(cap),
        }
    }

    /// The empty relation.
    pub fn empty(nparam: usize, n_in: usize, n_out: usize) -> Self {
        Self::with_capacity(nparam, n_in, n_out, 0, true)
    }

    /// Number of parameters.
    pub fn nparam(&self) -> usize {
        self.nparam
    }

    /// Number of input dims.
    pub fn n_in(&self) -> usize {
        self.n_in
    }

    /// Number of output dims.
    pub fn n_out(&self) -> usize {
        self.n_out
    }

    /// Whether the parts are known to be pairwise disjoint.
    pub fn is_disjoint(&self) -> bool {
        self.disjoint
    }

    /// The basic maps making up the union.
    pub fn parts(&self) -> &[BasicMap] {
        &self.parts
    }

    /// Number of basic maps in the union.
    pub fn n_parts(&self) -> usize {
        self.parts.len()
    }

    /// Whether the union holds no basic map at all.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Add a basic map to the union.
    ///
    /// Panics if the dimension signature differs or the capacity is already
    /// exhausted; both are producer bugs.
    pub fn add(&mut self, bmap: BasicMap) {
        assert_eq!(bmap.nparam(), self.nparam, "parameter count mismatch");
        assert_eq!(bmap.n_in(), self.n_in, "input dim mismatch");
        assert_eq!(bmap.n_out(), self.n_out, "output dim mismatch");
        assert!(self.parts.len() < self.cap, "union capacity exhausted");
        self.parts.push(bmap);
    }

    /// Project every part onto its parameters and input dims.
    pub fn domain(self) -> Set {
        let mut set = Set::with_capacity(self.nparam, self.n_in, self.cap, self.disjoint);
        for part in self.parts {
            set.add(part.project_out_outputs().into_basic_set());
        }
        set
    }

    /// Reinterpret a set over `n_in + n_out` dims as a relation.
    pub fn from_set(set: Set, n_in: usize, n_out: usize) -> Result<Map, RelError> {
        if set.dim() != n_in + n_out {
            return Err(RelError::DimensionMismatch {
                expected: n_in + n_out,
                actual: set.dim(),
            });
        }
        let (nparam, cap, disjoint, parts) = set.into_parts();
        let mut map = Map::with_capacity(nparam, n_in, n_out, cap, disjoint);
        for bset in parts {
            map.parts.push(bset.into_basic_map(n_in, n_out)?);
        }
        Ok(map)
    }

    /// Whether any part contains the point `[parameters, inputs, outputs]`.
    pub fn contains(&self, point: &[BigInt]) -> Result<bool, RelError> {
        for part in &self.parts {
            if part.contains(point)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
