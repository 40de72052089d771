//! The solver's output: a decision tree ("quast") describing the
//! lexicographic optimum piecewise as a function of the parameters.

use num_bigint::BigInt;

/// A new parameter introduced by the solver: an existentially quantified
/// integer `q = floor(coeffs . params / denom)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewParm {
    /// Column rank the solver assigned to the new parameter. Ranks continue
    /// the solver's parameter numbering, so the first new parameter of a
    /// tree has the rank just past the last supplied parameter column.
    pub rank: usize,
    /// Positive denominator of the floor division.
    pub denom: BigInt,
    /// Affine numerator: one coefficient per solver parameter declared
    /// before this one, followed by a trailing constant.
    pub coeffs: Vec<BigInt>,
}

/// The body of a quast node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuastNode {
    /// An affine condition on the parameters with subtrees for the
    /// `condition >= 0` and `condition < 0` halves of the domain.
    Branch {
        /// Condition vector, same shape as [`NewParm::coeffs`].
        condition: Vec<BigInt>,
        /// Subtree where the condition holds.
        then_branch: Box<Quast>,
        /// Subtree where it does not.
        else_branch: Box<Quast>,
    },
    /// A leaf of the tree.
    Leaf {
        /// `Some(vectors)` holds one affine solution vector per output dim
        /// (possibly none at all for a feasibility-only query); `None` means
        /// this region of the parameter domain is infeasible.
        solutions: Option<Vec<Vec<BigInt>>>,
    },
}

/// One node of the decision tree. Any node, branch or leaf, may introduce
/// new parameters scoped to its subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quast {
    /// New parameters declared at this node, in rank order.
    pub new_params: Vec<NewParm>,
    /// Branch or leaf body.
    pub node: QuastNode,
}

impl Quast {
    /// A feasible leaf with the given solution vectors.
    pub fn solution(vectors: Vec<Vec<BigInt>>) -> Self {
        Self {
            new_params: Vec::new(),
            node: QuastNode::Leaf {
                solutions: Some(vectors),
            },
        }
    }

    /// An infeasible leaf.
    pub fn empty() -> Self {
        Self {
            new_params: Vec::new(),
            node: QuastNode::Leaf { solutions: None },
        }
    }

    /// A branch on `condition >= 0`.
    pub fn branch(condition: Vec<BigInt>, then_branch: Quast, else_branch: Quast) -> Self {
        Self {
            new_params: Vec::new(),
            node: QuastNode::Branch {
                condition,
                then_branch: Box::new(then_branch),
                else_branch: Box::new(else_branch),
            },
        }
    }

    /// Attach new-parameter declarations to this node.
    pub fn with_new_params(mut self, new_params: Vec<NewParm>) -> Self {
        self.new_params = new_params;
        self
    }
}
