//! Property-based tests for the scoped builder discipline of `BasicMap`.

use num_bigint::BigInt;
use num_traits::Zero;
use polylex_rel::BasicMap;
use proptest::prelude::*;

/// One builder mutation, chosen at random.
#[derive(Debug, Clone)]
enum Op {
    PushEq(i64, i64),
    PushIneq(i64, i64),
    PushDiv(u8),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-8i64..8, -8i64..8).prop_map(|(a, b)| Op::PushEq(a, b)),
        (-8i64..8, -8i64..8).prop_map(|(a, b)| Op::PushIneq(a, b)),
        (1u8..4).prop_map(Op::PushDiv),
    ]
}

fn apply(bmap: &mut BasicMap, op: &Op) {
    match *op {
        Op::PushEq(a, b) => {
            bmap.add_equality(&[BigInt::from(a), BigInt::from(b)]);
        }
        Op::PushIneq(a, b) => {
            bmap.add_inequality(&[BigInt::from(a), BigInt::from(b)]);
        }
        Op::PushDiv(denom) => {
            let d = bmap.alloc_div();
            let mut def = vec![BigInt::zero(); bmap.row_len()];
            def[1] = BigInt::from(1);
            bmap.set_div(d, BigInt::from(denom), def);
        }
    }
}

proptest! {
    /// Rolling back to a checkpoint restores exactly the counts recorded at
    /// the checkpoint, whatever happened in between.
    #[test]
    fn rollback_restores_counts(
        before in prop::collection::vec(op_strategy(), 0..8),
        after in prop::collection::vec(op_strategy(), 0..16),
    ) {
        let mut bmap = BasicMap::new(0, 1, 0, 32);
        for op in &before {
            apply(&mut bmap, op);
        }
        let cp = bmap.checkpoint();
        let (n_eq, n_ineq, n_div) = (bmap.n_eq(), bmap.n_ineq(), bmap.n_div());
        let frozen: Vec<_> = bmap.equalities().to_vec();

        for op in &after {
            apply(&mut bmap, op);
        }
        bmap.rollback(cp);

        prop_assert_eq!(bmap.n_eq(), n_eq);
        prop_assert_eq!(bmap.n_ineq(), n_ineq);
        prop_assert_eq!(bmap.n_div(), n_div);
        // Rows below the checkpoint are untouched.
        prop_assert_eq!(bmap.equalities(), frozen.as_slice());
    }

    /// Negating an inequality twice restores it: the integer complement of
    /// `a >= 0` is `-a - 1 >= 0`, and complementing again gives back `a`.
    #[test]
    fn negate_is_an_involution(coeffs in prop::collection::vec(-20i64..20, 3)) {
        let mut bmap = BasicMap::new(1, 1, 0, 0);
        let row: Vec<BigInt> = coeffs.iter().map(|&c| BigInt::from(c)).collect();
        let i = bmap.add_inequality(&row);
        bmap.negate_inequality(i);
        bmap.negate_inequality(i);
        prop_assert_eq!(&bmap.inequalities()[i], &row);
    }

    /// Extending a map inserts zero output columns before the div block and
    /// leaves the existing coefficients where the layout says they belong.
    #[test]
    fn extend_preserves_coefficients(
        nparam in 0usize..3,
        n_in in 0usize..3,
        add_out in 0usize..3,
        add_div in 0usize..3,
        c in -9i64..9,
    ) {
        let mut bmap = BasicMap::new(nparam, n_in, 0, 1);
        let d = bmap.alloc_div();
        let mut def = vec![BigInt::zero(); bmap.row_len()];
        def[0] = BigInt::from(c);
        bmap.set_div(d, BigInt::from(2), def);
        let mut row = vec![BigInt::zero(); bmap.row_len()];
        row[bmap.div_offset()] = BigInt::from(c);
        bmap.add_inequality(&row);

        bmap.extend(add_out, add_div);

        prop_assert_eq!(bmap.n_out(), add_out);
        prop_assert_eq!(bmap.extra(), 1 + add_div);
        prop_assert_eq!(bmap.row_len(), 1 + nparam + n_in + add_out + 1 + add_div);
        // The div coefficient moved with the div block.
        prop_assert_eq!(&bmap.inequalities()[0][bmap.div_offset()], &BigInt::from(c));
        prop_assert_eq!(&bmap.div(0).def[0], &BigInt::from(c));
    }
}
