//! PolyLex relation model - integer relations as affine constraint systems.
//!
//! This crate provides the data model consumed by the PILP bridge in
//! `polylex-pilp`:
//! - [`BasicMap`]: a single conjunction of integer linear equalities and
//!   inequalities over parameters, input dims, output dims, and existential
//!   (div) variables
//! - [`BasicSet`]: a basic map with no input dims
//! - [`Map`] / [`Set`]: fixed-capacity disjoint unions of basic maps/sets
//! - pointwise membership evaluation for exact comparison of relations
//!
//! # Examples
//!
//! ```
//! use num_bigint::BigInt;
//! use polylex_rel::BasicMap;
//!
//! // {[i] -> [j] : 0 <= j <= i <= 10}
//! let mut bmap = BasicMap::new(0, 1, 1, 0);
//! let bi = |v: i64| BigInt::from(v);
//! bmap.add_inequality(&[bi(0), bi(0), bi(1)]); // j >= 0
//! bmap.add_inequality(&[bi(0), bi(1), bi(-1)]); // i - j >= 0
//! bmap.add_inequality(&[bi(10), bi(-1), bi(0)]); // 10 - i >= 0
//!
//! assert_eq!(bmap.contains(&[bi(7), bi(3)]), Ok(true));
//! assert_eq!(bmap.contains(&[bi(3), bi(7)]), Ok(false));
//! ```

#![warn(missing_docs)]

mod basic_map;
mod basic_set;
mod error;
mod eval;
mod map;
mod set;

pub use basic_map::{BasicMap, Checkpoint, Div};
pub use basic_set::BasicSet;
pub use error::RelError;
pub use map::Map;
pub use set::Set;
