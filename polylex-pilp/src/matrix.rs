//! The solver's input matrix format.

use num_bigint::BigInt;
use num_traits::Zero;

/// A constraint matrix in the solver's layout: one row per constraint with
/// columns `[tag | front padding | decision vars | parameters | back padding
/// | constant]`, tag 0 for an equality and 1 for an inequality.
///
/// This exact column order is a contract between the encoder and the quast
/// decoder: the decoder's existential-variable position tracking assumes the
/// solver saw parameters in precisely this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    n_row: usize,
    n_col: usize,
    rows: Vec<Vec<BigInt>>,
}

impl Matrix {
    /// Create a zeroed `n_row` by `n_col` matrix.
    pub fn new(n_row: usize, n_col: usize) -> Self {
        Self {
            n_row,
            n_col,
            rows: vec![vec![BigInt::zero(); n_col]; n_row],
        }
    }

    /// Number of rows.
    pub fn n_row(&self) -> usize {
        self.n_row
    }

    /// Number of columns.
    pub fn n_col(&self) -> usize {
        self.n_col
    }

    /// Row `i`.
    pub fn row(&self, i: usize) -> &[BigInt] {
        &self.rows[i]
    }

    /// Mutable row `i`.
    pub fn row_mut(&mut self, i: usize) -> &mut [BigInt] {
        &mut self.rows[i]
    }
}
