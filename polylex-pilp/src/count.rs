//! Pre-pass over a decision tree computing the sizing parameters for the
//! decode: the output unions cannot grow once allocated, so every capacity
//! has to be known before the traversal starts.

use crate::quast::{Quast, QuastNode};

/// Sizes computed by [`count_quast`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuastCounts {
    /// Existential slots the builder needs: the highest new-parameter rank
    /// seen, counted from the solver's own parameter columns onward. This
    /// covers both the context's pre-existing divs (whose ranks the solver
    /// reuses) and genuinely new parameters.
    pub n_new_divs: usize,
    /// Maximum number of branch nodes on any root-to-leaf path.
    pub max_depth: usize,
    /// Number of feasible leaves - the exact capacity of the solution union.
    pub n_solutions: usize,
    /// Number of infeasible leaves - the exact capacity of the
    /// infeasible-domain union.
    pub n_empty: usize,
}

/// Walk the tree once and compute its [`QuastCounts`].
///
/// `pilp_param` is the number of parameter columns the solver was given
/// (context dims plus back padding start there); new-parameter ranks at or
/// beyond it consume builder existential slots.
pub fn count_quast(quast: &Quast, pilp_param: usize) -> QuastCounts {
    let mut counts = QuastCounts::default();
    // Seeded one below the first countable rank, exactly like a maximum.
    let mut max_rank: isize = pilp_param as isize - 1;
    visit(quast, 0, &mut max_rank, &mut counts);
    counts.n_new_divs = (max_rank + 1 - pilp_param as isize) as usize;
    counts
}

fn visit(quast: &Quast, depth: usize, max_rank: &mut isize, counts: &mut QuastCounts) {
    for p in &quast.new_params {
        if p.rank as isize > *max_rank {
            *max_rank = p.rank as isize;
        }
    }
    match &quast.node {
        QuastNode::Branch {
            then_branch,
            else_branch,
            ..
        } => {
            let depth = depth + 1;
            if depth > counts.max_depth {
                counts.max_depth = depth;
            }
            visit(else_branch, depth, max_rank, counts);
            visit(then_branch, depth, max_rank, counts);
        }
        QuastNode::Leaf { solutions: Some(_) } => counts.n_solutions += 1,
        QuastNode::Leaf { solutions: None } => counts.n_empty += 1,
    }
}
