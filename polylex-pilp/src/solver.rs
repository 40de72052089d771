//! The solver boundary: options, the solver trait, and the invocation
//! wrapper.

use tracing::debug;

use crate::error::Result;
use crate::matrix::Matrix;
use crate::quast::Quast;

/// Options passed to the solver on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveOptions {
    /// Ask the solver to simplify the tree it returns.
    pub simplify: bool,
    /// Compute the lexicographic maximum instead of the minimum.
    pub maximize: bool,
    /// Decision variables may take any sign.
    pub unrestricted_unknowns: bool,
    /// Parameters may take any sign.
    pub unrestricted_params: bool,
}

/// A parametric integer linear programming solver.
///
/// `domain` constrains the decision variables as a function of the
/// parameters; `context` constrains the parameters themselves. Both use the
/// [`Matrix`] column contract. The solver returns
/// - `Ok(Some(tree))`: a decision tree for the lexicographic optimum,
/// - `Ok(None)`: the problem is infeasible for *every* parameter value -
///   a valid outcome, not a failure,
/// - `Err(_)`: a structural failure inside the solver.
pub trait PilpSolver {
    /// Solve for the lexicographic optimum over the given domain/context.
    fn solve(
        &self,
        domain: &Matrix,
        context: &Matrix,
        options: &SolveOptions,
    ) -> Result<Option<Quast>>;
}

/// Configure and invoke the solver.
///
/// Simplification is always requested and neither decision variables nor
/// parameters are sign-restricted; only the optimization direction varies
/// between call sites.
pub fn solve_pilp<S: PilpSolver + ?Sized>(
    solver: &S,
    domain: &Matrix,
    context: &Matrix,
    maximize: bool,
) -> Result<Option<Quast>> {
    let options = SolveOptions {
        simplify: true,
        maximize,
        unrestricted_unknowns: true,
        unrestricted_params: true,
    };
    debug!(
        domain_rows = domain.n_row(),
        domain_cols = domain.n_col(),
        context_rows = context.n_row(),
        maximize,
        "invoking PILP solver"
    );
    let tree = solver.solve(domain, context, &options)?;
    if tree.is_none() {
        debug!("solver returned no tree: infeasible for every parameter value");
    }
    Ok(tree)
}

impl<S: PilpSolver + ?Sized> PilpSolver for &S {
    fn solve(
        &self,
        domain: &Matrix,
        context: &Matrix,
        options: &SolveOptions,
    ) -> Result<Option<Quast>> {
        (**self).solve(domain, context, options)
    }
}
