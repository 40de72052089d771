//! Encoding a basic map into the solver's matrix layout.

use num_bigint::BigInt;
use num_traits::One;
use polylex_rel::BasicMap;

use crate::matrix::Matrix;

/// Translate one constraint row from the relation layout
/// `[constant | params | inputs | outputs | divs]` to the solver layout
/// `[tag | front | decision vars | parameters | back | constant]`.
///
/// The first `pilp_param` variables (in relation column order) become the
/// solver's parameters; the remaining `pilp_var` become decision variables,
/// which the solver expects *before* the parameter block.
fn copy_constraint_to(
    dst: &mut [BigInt],
    src: &[BigInt],
    pilp_param: usize,
    pilp_var: usize,
    extra_front: usize,
    extra_back: usize,
) {
    dst[1 + extra_front + pilp_var + pilp_param + extra_back] = src[0].clone();
    for k in 0..pilp_param {
        dst[1 + extra_front + pilp_var + k] = src[1 + k].clone();
    }
    for k in 0..pilp_var {
        dst[1 + extra_front + k] = src[1 + pilp_param + k].clone();
    }
}

/// Serialize `bmap` into the solver's matrix format.
///
/// `pilp_param` chooses the split point: the first `pilp_param` variables of
/// the relation become solver parameters, everything after them (including
/// the active divs) becomes a decision variable. `extra_front` reserves
/// leading zero rows and columns; `extra_back` reserves parameter columns
/// after the relation's own (used for a context's pre-existing divs).
/// Equalities are emitted before inequalities.
///
/// Panics if `pilp_param` exceeds the relation's variable count (dims plus
/// active divs); there is nothing left of the row to split at that point.
pub fn basic_map_to_matrix(
    bmap: &BasicMap,
    pilp_param: usize,
    extra_front: usize,
    extra_back: usize,
) -> Matrix {
    let n_var = bmap.total_dim() + bmap.n_div();
    assert!(
        pilp_param <= n_var,
        "split point {pilp_param} beyond the relation's {n_var} variables"
    );
    let pilp_var = n_var - pilp_param;
    let n_row = extra_front + bmap.n_eq() + bmap.n_ineq();
    let n_col = 1 + extra_front + pilp_var + pilp_param + extra_back + 1;
    let mut m = Matrix::new(n_row, n_col);

    let mut off = extra_front;
    for row in bmap.equalities() {
        copy_constraint_to(m.row_mut(off), row, pilp_param, pilp_var, extra_front, extra_back);
        off += 1;
    }
    for row in bmap.inequalities() {
        let dst = m.row_mut(off);
        dst[0] = BigInt::one();
        copy_constraint_to(dst, row, pilp_param, pilp_var, extra_front, extra_back);
        off += 1;
    }
    m
}
