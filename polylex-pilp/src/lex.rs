//! Public entry points: lexicographic optimization and div recovery.

use polylex_rel::{BasicMap, BasicSet, Map, RelError, Set};
use tracing::debug;

use crate::count::count_quast;
use crate::decode::{ScanState, UNMAPPED};
use crate::encode::basic_map_to_matrix;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::quast::Quast;
use crate::solver::{solve_pilp, PilpSolver};

/// Result of a lexicographic optimization.
#[derive(Debug, Clone)]
pub struct LexExtremum {
    /// The optimum: one region per feasible leaf of the decision tree, a
    /// disjoint union mapping each domain point to its extremal output.
    pub map: Map,
    /// When requested, the part of the context where no solution exists,
    /// also as a disjoint union. `None` exactly when it was not requested.
    pub empty: Option<Set>,
}

/// Decode a decision tree into a disjoint union of relations with `context`
/// as domain and the first `keep` solution coordinates as range.
///
/// Sizes everything from one counting pre-pass: the solution and rest unions
/// get their exact leaf counts, the builder gets the counted existential
/// capacity. The builder starts as the context itself, reinterpreted as an
/// input-only relation and widened by the `keep` output dims; its
/// pre-existing divs keep their solver ranks, so the position map is seeded
/// with the identity over them.
fn map_from_quast(
    quast: &Quast,
    keep: usize,
    context: BasicSet,
    want_empty: bool,
) -> Result<(Map, Option<Set>)> {
    let nparam = context.nparam();
    let dim = context.dim();
    let pilp_param = nparam + dim;

    let counts = count_quast(quast, pilp_param);
    debug!(?counts, keep, "decoding quast");

    let mut rest =
        want_empty.then(|| Set::with_capacity(nparam, dim, counts.n_empty, true));
    let mut map = Map::with_capacity(nparam, dim, keep, counts.n_solutions, true);

    let mut builder = context.into_basic_map(dim, 0)?;
    builder.extend(keep, counts.n_new_divs);
    let mut pos = vec![UNMAPPED; builder.extra()];
    for (i, slot) in pos.iter_mut().take(builder.n_div()).enumerate() {
        *slot = i;
    }

    let mut state = ScanState {
        bmap: &mut builder,
        pos,
        rest: rest.as_mut(),
    };
    state.scan(quast, &mut map)?;
    Ok((map, rest))
}

/// Shared body of [`lexmax`] and [`lexmin`].
fn extremum_on<S: PilpSolver + ?Sized>(
    solver: &S,
    bmap: BasicMap,
    dom: BasicSet,
    want_empty: bool,
    maximize: bool,
) -> Result<LexExtremum> {
    if bmap.nparam() != dom.nparam() {
        return Err(RelError::DimensionMismatch {
            expected: bmap.nparam(),
            actual: dom.nparam(),
        }
        .into());
    }
    if bmap.n_in() != dom.dim() {
        return Err(RelError::DimensionMismatch {
            expected: bmap.n_in(),
            actual: dom.dim(),
        }
        .into());
    }

    // The relation's params and inputs are the solver's parameters; its
    // outputs and divs are the decision variables. The domain's own divs
    // become trailing parameter columns via back padding, mirroring their
    // position in the context matrix.
    let domain = basic_map_to_matrix(&bmap, bmap.nparam() + bmap.n_in(), 0, dom.n_div());
    let context = basic_map_to_matrix(dom.as_basic_map(), 0, 0, 0);

    let tree = solve_pilp(solver, &domain, &context, maximize)?;
    let mut result = match &tree {
        Some(quast) => {
            let (map, empty) = map_from_quast(quast, bmap.n_out(), dom.clone(), want_empty)?;
            LexExtremum { map, empty }
        }
        None => LexExtremum {
            map: Map::empty(bmap.nparam(), bmap.n_in(), bmap.n_out()),
            empty: None,
        },
    };
    // No feasible region at all: the whole context is the empty part,
    // whether the solver said so with no tree or with solution-free leaves.
    if result.map.is_empty() && want_empty {
        result.empty = Some(Set::from_basic_set(dom));
    }
    Ok(result)
}

/// Compute the lexicographic maximum of `bmap` over the domain `dom`.
///
/// For every parameter/input point of `dom` with at least one solution in
/// `bmap`, the result maps it to the output tuple maximal under
/// first-coordinate-dominant ordering. With `want_empty`, the part of `dom`
/// admitting no solution is returned alongside. Both relation arguments are
/// consumed unconditionally, error or not.
pub fn lexmax<S: PilpSolver + ?Sized>(
    solver: &S,
    bmap: BasicMap,
    dom: BasicSet,
    want_empty: bool,
) -> Result<LexExtremum> {
    extremum_on(solver, bmap, dom, want_empty, true)
}

/// Compute the lexicographic minimum of `bmap` over the domain `dom`.
///
/// See [`lexmax`].
pub fn lexmin<S: PilpSolver + ?Sized>(
    solver: &S,
    bmap: BasicMap,
    dom: BasicSet,
    want_empty: bool,
) -> Result<LexExtremum> {
    extremum_on(solver, bmap, dom, want_empty, false)
}

/// Rewrite `bmap` with an explicit, minimal existential structure.
///
/// Every dim of the relation is handed to the solver as a parameter and the
/// solve degenerates to a feasibility query over an unconstrained context;
/// the decision tree then carries exactly the divs needed to describe the
/// relation's integer points, which the decode recovers with `keep = 0`.
/// The result is logically equivalent to the input.
pub fn compute_divisions<S: PilpSolver + ?Sized>(solver: &S, bmap: BasicMap) -> Result<Map> {
    let (nparam, n_in, n_out) = (bmap.nparam(), bmap.n_in(), bmap.n_out());

    let domain = basic_map_to_matrix(&bmap, nparam + n_in + n_out, 0, 0);
    let context = Matrix::new(0, nparam + n_in + n_out + 2);

    let tree = solve_pilp(solver, &domain, &context, false)?;
    let map = match &tree {
        Some(quast) => {
            let dom = BasicSet::new(nparam, n_in + n_out, 0);
            map_from_quast(quast, 0, dom, false)?.0
        }
        None => Map::empty(nparam, n_in + n_out, 0),
    };

    let set = map.domain();
    Ok(Map::from_set(set, n_in, n_out)?)
}
