//! Shared helpers for the bridge integration tests.
//!
//! The bridge consumes the solver through a trait, so the tests drive it
//! with hand-built decision trees served by a canned solver; the trees are
//! what a PILP solver would return for the relations under test.

#![allow(dead_code)] // not every test binary uses every helper

use num_bigint::BigInt;
use polylex_pilp::{Matrix, PilpError, PilpSolver, Quast, Result, SolveOptions};
use polylex_rel::{BasicMap, BasicSet};

pub fn bi(v: i64) -> BigInt {
    BigInt::from(v)
}

/// A solver that always answers with one prepared tree (or no tree).
pub struct Canned(pub Option<Quast>);

impl PilpSolver for Canned {
    fn solve(&self, _: &Matrix, _: &Matrix, _: &SolveOptions) -> Result<Option<Quast>> {
        Ok(self.0.clone())
    }
}

/// A solver that fails structurally on every call.
pub struct FailingSolver;

impl PilpSolver for FailingSolver {
    fn solve(&self, _: &Matrix, _: &Matrix, _: &SolveOptions) -> Result<Option<Quast>> {
        Err(PilpError::Solver("solver stub always fails".into()))
    }
}

/// `{[i] -> [j] : 0 <= j <= i <= 10}`
pub fn triangle() -> BasicMap {
    let mut bmap = BasicMap::new(0, 1, 1, 0);
    bmap.add_inequality(&[bi(0), bi(0), bi(1)]);
    bmap.add_inequality(&[bi(0), bi(1), bi(-1)]);
    bmap.add_inequality(&[bi(10), bi(-1), bi(0)]);
    bmap
}

/// `{[i] : 0 <= i <= 10}`
pub fn interval() -> BasicSet {
    let mut dom = BasicSet::new(0, 1, 0);
    dom.add_inequality(&[bi(0), bi(1)]);
    dom.add_inequality(&[bi(10), bi(-1)]);
    dom
}
