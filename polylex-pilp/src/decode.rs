//! Decoding a decision tree into a disjoint union of relations.
//!
//! The decoder threads one mutable builder relation through a depth-first
//! traversal of the tree. Every node records a checkpoint on entry and rolls
//! the builder back to it before returning, so the shared constraint prefix
//! of sibling regions is never duplicated: a leaf pays only for its own path.

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use polylex_rel::{BasicMap, Map, Set};
use tracing::trace;

use crate::error::{PilpError, Result};
use crate::quast::{NewParm, Quast, QuastNode};

/// State shared by the whole recursion of one decode.
///
/// `pos` maps a new-parameter rank (offset by the solver's parameter count)
/// to the builder existential variable realizing it. The indirection is
/// required because the builder's div block grows and shrinks as the
/// traversal descends and returns, while the solver's ranks are fixed.
pub(crate) struct ScanState<'a> {
    pub(crate) bmap: &'a mut BasicMap,
    pub(crate) pos: Vec<usize>,
    pub(crate) rest: Option<&'a mut Set>,
}

/// Sentinel for a rank whose div has not been declared on this path.
pub(crate) const UNMAPPED: usize = usize::MAX;

impl ScanState<'_> {
    fn pilp_param(&self) -> usize {
        self.bmap.nparam() + self.bmap.n_in()
    }

    /// Translate a solver vector (coefficients over the solver's parameter
    /// columns plus a trailing constant) into a builder row.
    ///
    /// Parameter and input coefficients transfer verbatim; coefficients of
    /// columns beyond them address existential variables through `pos` and
    /// are *added* into the target column, since several solver columns may
    /// resolve to one deduplicated div.
    fn import_constraint(&self, coeffs: &[BigInt]) -> Result<Vec<BigInt>> {
        let pilp_param = self.pilp_param();
        if coeffs.len() < pilp_param + 1 {
            return Err(PilpError::MalformedTree(format!(
                "vector has {} coefficients, need at least {}",
                coeffs.len(),
                pilp_param + 1
            )));
        }
        let div_off = self.bmap.div_offset();
        let mut row = vec![BigInt::zero(); self.bmap.row_len()];
        row[0] = coeffs[coeffs.len() - 1].clone();
        row[1..1 + pilp_param].clone_from_slice(&coeffs[..pilp_param]);
        for (i, c) in coeffs[pilp_param..coeffs.len() - 1].iter().enumerate() {
            if c.is_zero() {
                continue;
            }
            let slot = match self.pos.get(i) {
                Some(&slot) if slot != UNMAPPED && slot < self.bmap.n_div() => slot,
                _ => {
                    return Err(PilpError::MalformedTree(format!(
                        "vector references undeclared parameter column {}",
                        pilp_param + i
                    )))
                }
            };
            row[div_off + slot] += c;
        }
        Ok(row)
    }

    /// Realize a new-parameter declaration as a builder existential
    /// variable, reusing a structurally identical earlier div when one
    /// exists.
    ///
    /// A fresh div `q = floor(f/m)` gets the two bound inequalities
    ///
    /// ```text
    ///     f - m q >= 0
    ///     -(f - (m - 1)) + m q >= 0
    /// ```
    ///
    /// the second being the negation of `f - m q >= m`. A reused div already
    /// carries them.
    fn find_div(&mut self, p: &NewParm) -> Result<usize> {
        if !p.denom.is_positive() {
            return Err(PilpError::MalformedTree(format!(
                "new parameter {} has non-positive denominator",
                p.rank
            )));
        }
        let def = self.import_constraint(&p.coeffs)?;
        let i = self.bmap.alloc_div();
        self.bmap.set_div(i, p.denom.clone(), def.clone());
        for j in 0..i {
            if self.bmap.div_eq_prefix(i, j) {
                trace!(reused = j, "structurally identical div");
                self.bmap.free_divs(1);
                return Ok(j);
            }
        }

        let div_pos = self.bmap.div_offset() + i;
        let mut lower = def;
        lower[div_pos] = -p.denom.clone();
        let mut upper: Vec<BigInt> = lower.iter().map(|c| -c).collect();
        upper[0] = &upper[0] + &p.denom - BigInt::one();
        self.bmap.add_inequality(&lower);
        self.bmap.add_inequality(&upper);
        Ok(i)
    }

    /// Decode the subtree `quast`, adding one region to `map` per feasible
    /// leaf and one region to the rest union per infeasible leaf reached
    /// after the first feasible one.
    ///
    /// The builder's row and div counts at entry, and the position map
    /// entries declared at this node, are restored before returning. On
    /// error the whole decode aborts; the partially filled unions are
    /// dropped by the top-level caller.
    pub(crate) fn scan(&mut self, quast: &Quast, map: &mut Map) -> Result<()> {
        let cp = self.bmap.checkpoint();
        let pilp_param = self.pilp_param();

        for p in &quast.new_params {
            if p.rank < pilp_param || p.rank - pilp_param >= self.pos.len() {
                return Err(PilpError::MalformedTree(format!(
                    "new parameter rank {} outside the counted range",
                    p.rank
                )));
            }
            if self.pos[p.rank - pilp_param] != UNMAPPED {
                return Err(PilpError::MalformedTree(format!(
                    "new parameter rank {} already declared on this path",
                    p.rank
                )));
            }
            let div = self.find_div(p)?;
            self.pos[p.rank - pilp_param] = div;
        }

        match &quast.node {
            QuastNode::Branch {
                condition,
                then_branch,
                else_branch,
            } => {
                let row = self.import_constraint(condition)?;
                let i = self.bmap.add_inequality(&row);
                self.scan(then_branch, map)?;
                self.bmap.negate_inequality(i);
                self.scan(else_branch, map)?;
                self.bmap.free_inequalities(1);
            }
            QuastNode::Leaf {
                solutions: Some(vectors),
            } => {
                // A caller asking for zero output dims runs a
                // feasibility-only query; extra solution vectors beyond the
                // requested outputs are ignored (see DESIGN.md).
                let n_out = self.bmap.n_out();
                let out_off = self.bmap.out_offset();
                let mut added = 0;
                for (j, vector) in vectors.iter().take(n_out).enumerate() {
                    let mut row = self.import_constraint(vector)?;
                    row[out_off + j] = -BigInt::from(1);
                    self.bmap.add_equality(&row);
                    added += 1;
                }
                trace!(region = map.n_parts(), "committing feasible leaf");
                map.add(self.bmap.clone());
                self.bmap.free_equalities(added);
            }
            QuastNode::Leaf { solutions: None } => {
                // Only worth recording once some region is feasible: with no
                // feasible leaf at all, the caller reports the full context
                // as infeasible instead.
                if !map.is_empty() {
                    if let Some(rest) = self.rest.as_deref_mut() {
                        let dom = self.bmap.clone().project_out_outputs().into_basic_set();
                        rest.add(dom);
                    }
                }
            }
        }

        // Mappings are scoped to the path: a sibling branch may declare the
        // same rank again, with its own definition.
        for p in &quast.new_params {
            self.pos[p.rank - pilp_param] = UNMAPPED;
        }
        self.bmap.rollback(cp);
        Ok(())
    }
}
