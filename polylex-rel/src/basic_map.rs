//! Basic maps: single conjunctions of affine constraints over integer points.

use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::basic_set::BasicSet;

/// An existential (div) variable definition.
///
/// A known div has a positive denominator `m` and a definition row `f`, and
/// takes the value `floor(f / m)`. A denominator of zero marks an *unknown*
/// div: the variable is existentially quantified but carries no definition
/// (the result of projecting a constrained dimension out of a relation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Div {
    /// Denominator; zero when the definition is unknown.
    pub denom: BigInt,
    /// Definition row in the map's column layout; meaningless when unknown.
    pub def: Vec<BigInt>,
}

/// A snapshot of the builder's row and div counts.
///
/// Constraint rows and divs are allocated and freed in LIFO order, so
/// restoring the counts recorded at a scope's entry drops exactly what the
/// scope allocated. See [`BasicMap::checkpoint`] / [`BasicMap::rollback`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    pub(crate) n_eq: usize,
    pub(crate) n_ineq: usize,
    pub(crate) n_div: usize,
}

/// A conjunction of integer affine equalities and inequalities over
/// parameters, input dims, output dims, and existential (div) variables.
///
/// Every constraint row uses the column layout
/// `[constant | parameters | inputs | outputs | divs]` with a fixed width of
/// `1 + nparam + n_in + n_out + extra`, where `extra` is the div *capacity*;
/// columns of unallocated div slots stay zero. An equality row `a` asserts
/// `a = 0`; an inequality row asserts `a >= 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicMap {
    nparam: usize,
    n_in: usize,
    n_out: usize,
    extra: usize,
    divs: Vec<Div>,
    eq: Vec<Vec<BigInt>>,
    ineq: Vec<Vec<BigInt>>,
}

impl BasicMap {
    /// Create the universe relation with the given dimensions and room for
    /// `extra` existential variables.
    pub fn new(nparam: usize, n_in: usize, n_out: usize, extra: usize) -> Self {
        Self {
            nparam,
            n_in,
            n_out,
            extra,
            divs: Vec::with_capacity(extra),
            eq: Vec::new(),
            ineq: Vec::new(),
        }
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

    /// Capacity for existential variables.
    pub fn extra(&self) -> usize {
        self.extra
    }

    /// Number of allocated existential variables.
    pub fn n_div(&self) -> usize {
        self.divs.len()
    }

    /// Number of equality rows.
    pub fn n_eq(&self) -> usize {
        self.eq.len()
    }

    /// Number of inequality rows.
    pub fn n_ineq(&self) -> usize {
        self.ineq.len()
    }

    /// Total non-existential dimension count.
    pub fn total_dim(&self) -> usize {
        self.nparam + self.n_in + self.n_out
    }

    /// Width of every constraint row.
    pub fn row_len(&self) -> usize {
        1 + self.total_dim() + self.extra
    }

    /// Column index of the first output dim.
    pub fn out_offset(&self) -> usize {
        1 + self.nparam + self.n_in
    }

    /// Column index of the first existential variable.
    pub fn div_offset(&self) -> usize {
        1 + self.total_dim()
    }

    fn zero_row(&self) -> Vec<BigInt> {
        vec![BigInt::zero(); self.row_len()]
    }

    /// Append a zero equality row and return its index.
    pub fn alloc_equality(&mut self) -> usize {
        self.eq.push(self.zero_row());
        self.eq.len() - 1
    }

    /// Append a zero inequality row and return its index.
    pub fn alloc_inequality(&mut self) -> usize {
        self.ineq.push(self.zero_row());
        self.ineq.len() - 1
    }

    /// Append an equality row whose leading columns are `coeffs`.
    pub fn add_equality(&mut self, coeffs: &[BigInt]) -> usize {
        assert!(coeffs.len() <= self.row_len(), "equality row too wide");
        let i = self.alloc_equality();
        self.eq[i][..coeffs.len()].clone_from_slice(coeffs);
        i
    }

    /// Append an inequality row whose leading columns are `coeffs`.
    pub fn add_inequality(&mut self, coeffs: &[BigInt]) -> usize {
        assert!(coeffs.len() <= self.row_len(), "inequality row too wide");
        let i = self.alloc_inequality();
        self.ineq[i][..coeffs.len()].clone_from_slice(coeffs);
        i
    }

    /// All equality rows.
    pub fn equalities(&self) -> &[Vec<BigInt>] {
        &self.eq
    }

    /// All inequality rows.
    pub fn inequalities(&self) -> &[Vec<BigInt>] {
        &self.ineq
    }

    /// Mutable view of equality row `i`.
    pub fn eq_row_mut(&mut self, i: usize) -> &mut [BigInt] {
        &mut self.eq[i]
    }

    /// Mutable view of inequality row `i`.
    pub fn ineq_row_mut(&mut self, i: usize) -> &mut [BigInt] {
        &mut self.ineq[i]
    }

    /// Drop the last `n` equality rows.
    pub fn free_equalities(&mut self, n: usize) {
        assert!(n <= self.eq.len(), "freeing more equalities than exist");
        self.eq.truncate(self.eq.len() - n);
    }

    /// Drop the last `n` inequality rows.
    pub fn free_inequalities(&mut self, n: usize) {
        assert!(n <= self.ineq.len(), "freeing more inequalities than exist");
        self.ineq.truncate(self.ineq.len() - n);
    }

    /// Replace inequality `a >= 0` with its integer negation `-a - 1 >= 0`.
    pub fn negate_inequality(&mut self, i: usize) {
        let row = &mut self.ineq[i];
        for c in row.iter_mut() {
            *c = -std::mem::take(c);
        }
        row[0] -= BigInt::one();
    }

    /// Allocate an existential variable slot and return its index.
    ///
    /// The new div starts out unknown; fill it with [`BasicMap::set_div`].
    pub fn alloc_div(&mut self) -> usize {
        assert!(self.divs.len() < self.extra, "existential capacity exceeded");
        let def = self.zero_row();
        self.divs.push(Div {
            denom: BigInt::zero(),
            def,
        });
        self.divs.len() - 1
    }

    /// Set the definition of div `i` to `floor(def / denom)`.
    pub fn set_div(&mut self, i: usize, denom: BigInt, def: Vec<BigInt>) {
        assert_eq!(def.len(), self.row_len(), "div definition width mismatch");
        self.divs[i] = Div { denom, def };
    }

    /// The definition of div `i`.
    pub fn div(&self, i: usize) -> &Div {
        &self.divs[i]
    }

    /// All div definitions, in column order.
    pub fn divs(&self) -> &[Div] {
        &self.divs
    }

    /// Drop the last `n` existential variables.
    ///
    /// The caller is responsible for having dropped any constraint rows that
    /// mention them.
    pub fn free_divs(&mut self, n: usize) {
        assert!(n <= self.divs.len(), "freeing more divs than exist");
        self.divs.truncate(self.divs.len() - n);
    }

    /// Whether divs `i` and `j` (with `j < i`) are structurally identical:
    /// same denominator and same definition over the constant, the real
    /// dims, and the first `j` div columns - the variables fixed before
    /// either of them was introduced.
    pub fn div_eq_prefix(&self, i: usize, j: usize) -> bool {
        debug_assert!(j < i);
        let a = &self.divs[i];
        let b = &self.divs[j];
        let len = self.div_offset() + j;
        a.denom == b.denom && a.def[..len] == b.def[..len]
    }

    /// Record the current row and div counts.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            n_eq: self.eq.len(),
            n_ineq: self.ineq.len(),
            n_div: self.divs.len(),
        }
    }

    /// Drop every row and div allocated since `cp` was taken.
    pub fn rollback(&mut self, cp: Checkpoint) {
        assert!(
            cp.n_eq <= self.eq.len()
                && cp.n_ineq <= self.ineq.len()
                && cp.n_div <= self.divs.len(),
            "rollback to a checkpoint from a deeper scope"
        );
        self.eq.truncate(cp.n_eq);
        self.ineq.truncate(cp.n_ineq);
        self.divs.truncate(cp.n_div);
    }

    /// Widen the relation by `add_out` output dims and `add_div_cap`
    /// existential slots, rewriting every row in place.
    ///
    /// New output columns are inserted just before the div block and start
    /// out zero, as do the new trailing div columns.
    pub fn extend(&mut self, add_out: usize, add_div_cap: usize) {
        if add_out == 0 && add_div_cap == 0 {
            return;
        }
        let insert_at = self.div_offset();
        let widen = |row: &mut Vec<BigInt>| {
            row.splice(
                insert_at..insert_at,
                std::iter::repeat_with(BigInt::zero).take(add_out),
            );
            row.extend(std::iter::repeat_with(BigInt::zero).take(add_div_cap));
        };
        for row in self.eq.iter_mut().chain(self.ineq.iter_mut()) {
            widen(row);
        }
        for div in self.divs.iter_mut() {
            widen(&mut div.def);
        }
        self.n_out += add_out;
        self.extra += add_div_cap;
    }

    /// Project the output dims out of the relation.
    ///
    /// Output columns that no row or div definition mentions are simply
    /// removed. Constrained output columns are demoted to unknown
    /// existential variables (denominator zero), preserving the set of
    /// (parameter, input) points.
    pub fn project_out_outputs(mut self) -> BasicMap {
        if self.n_out == 0 {
            return self;
        }
        let out = self.out_offset();
        let n_out = self.n_out;
        let div_off = self.div_offset();
        let n_div = self.divs.len();

        let constrained = self
            .eq
            .iter()
            .chain(self.ineq.iter())
            .chain(self.divs.iter().map(|d| &d.def))
            .any(|row| row[out..out + n_out].iter().any(|c| !c.is_zero()));

        // Rebuild each row as [const | params | inputs | active divs] and,
        // when the outputs are constrained, append the output columns as
        // trailing unknown div columns. Unused capacity columns are dropped.
        let new_extra = if constrained { n_div + n_out } else { n_div };
        let rebuild = |row: &[BigInt]| -> Vec<BigInt> {
            let mut new_row = Vec::with_capacity(out + new_extra);
            new_row.extend_from_slice(&row[..out]);
            new_row.extend_from_slice(&row[div_off..div_off + n_div]);
            if constrained {
                new_row.extend_from_slice(&row[out..out + n_out]);
            }
            new_row
        };
        for row in self.eq.iter_mut().chain(self.ineq.iter_mut()) {
            *row = rebuild(row);
        }
        for div in self.divs.iter_mut() {
            div.def = rebuild(&div.def);
        }
        if constrained {
            let width = out + new_extra;
            for _ in 0..n_out {
                self.divs.push(Div {
                    denom: BigInt::zero(),
                    def: vec![BigInt::zero(); width],
                });
            }
        }
        self.n_out = 0;
        self.extra = new_extra;
        self
    }

    /// Reinterpret the input and output dims as a single set dimension
    /// block. The column layout does not change.
    pub fn into_basic_set(self) -> BasicSet {
        BasicSet::from_parts(BasicMap {
            nparam: self.nparam,
            n_in: 0,
            n_out: self.n_in + self.n_out,
            extra: self.extra,
            divs: self.divs,
            eq: self.eq,
            ineq: self.ineq,
        })
    }

    pub(crate) fn reinterpret_dims(mut self, n_in: usize, n_out: usize) -> BasicMap {
        debug_assert_eq!(self.n_in + self.n_out, n_in + n_out);
        self.n_in = n_in;
        self.n_out = n_out;
        self
    }
}
