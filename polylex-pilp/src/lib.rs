//! PolyLex PILP bridge - lexicographic optimization of integer relations
//! through an external parametric ILP solver.
//!
//! The bridge has three layers:
//! - encoding a relation/context pair into the solver's matrix layout
//!   ([`basic_map_to_matrix`])
//! - invoking the solver through the [`PilpSolver`] trait ([`solve_pilp`]),
//!   where "no tree" is the valid globally-infeasible outcome
//! - decoding the returned decision tree ([`Quast`]) back into an exact
//!   disjoint union of relations, deduplicating existential variables and
//!   restoring the shared builder relation at every step
//!
//! The public entry points are [`lexmax`], [`lexmin`], and
//! [`compute_divisions`]; each composes encode, solve, and decode, and each
//! consumes its relation argument unconditionally.
//!
//! # Examples
//!
//! ```
//! use num_bigint::BigInt;
//! use polylex_rel::{BasicMap, BasicSet};
//! use polylex_pilp::{lexmax, Matrix, PilpSolver, Quast, SolveOptions};
//!
//! /// A solver that always answers with one prepared tree.
//! struct Canned(Quast);
//!
//! impl PilpSolver for Canned {
//!     fn solve(
//!         &self,
//!         _domain: &Matrix,
//!         _context: &Matrix,
//!         _options: &SolveOptions,
//!     ) -> polylex_pilp::Result<Option<Quast>> {
//!         Ok(Some(self.0.clone()))
//!     }
//! }
//!
//! let bi = |v: i64| BigInt::from(v);
//!
//! // {[i] -> [j] : 0 <= j <= i <= 10}
//! let mut bmap = BasicMap::new(0, 1, 1, 0);
//! bmap.add_inequality(&[bi(0), bi(0), bi(1)]);
//! bmap.add_inequality(&[bi(0), bi(1), bi(-1)]);
//! bmap.add_inequality(&[bi(10), bi(-1), bi(0)]);
//!
//! // {[i] : 0 <= i <= 10}
//! let mut dom = BasicSet::new(0, 1, 0);
//! dom.add_inequality(&[bi(0), bi(1)]);
//! dom.add_inequality(&[bi(10), bi(-1)]);
//!
//! // The lexicographic maximum is j = i on the whole domain.
//! let solver = Canned(Quast::solution(vec![vec![bi(1), bi(0)]]));
//! let result = lexmax(&solver, bmap, dom, false).unwrap();
//! assert_eq!(result.map.n_parts(), 1);
//! assert_eq!(result.map.contains(&[bi(7), bi(7)]), Ok(true));
//! assert_eq!(result.map.contains(&[bi(7), bi(6)]), Ok(false));
//! ```

#![warn(missing_docs)]

mod count;
mod decode;
mod encode;
mod error;
mod lex;
mod matrix;
mod quast;
mod solver;

pub use count::{count_quast, QuastCounts};
pub use encode::basic_map_to_matrix;
pub use error::{PilpError, Result};
pub use lex::{compute_divisions, lexmax, lexmin, LexExtremum};
pub use matrix::Matrix;
pub use quast::{NewParm, Quast, QuastNode};
pub use solver::{solve_pilp, PilpSolver, SolveOptions};
