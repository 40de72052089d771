//! Property-based tests for the matrix encoder.
//!
//! The decoder's position tracking relies on the encoder's exact column
//! contract, so these properties pin it down over random relations:
//! `[tag | front | decision vars | parameters | back | constant]`.

use num_bigint::BigInt;
use num_traits::Zero;
use polylex_pilp::basic_map_to_matrix;
use polylex_rel::BasicMap;
use proptest::prelude::*;

fn coeff() -> impl Strategy<Value = i64> {
    -10i64..10
}

#[derive(Debug, Clone)]
struct RandomMap {
    nparam: usize,
    n_in: usize,
    n_out: usize,
    eq: Vec<Vec<i64>>,
    ineq: Vec<Vec<i64>>,
}

fn random_map() -> impl Strategy<Value = RandomMap> {
    (0usize..3, 0usize..3, 0usize..3).prop_flat_map(|(nparam, n_in, n_out)| {
        let width = 1 + nparam + n_in + n_out;
        (
            prop::collection::vec(prop::collection::vec(coeff(), width), 0..4),
            prop::collection::vec(prop::collection::vec(coeff(), width), 0..4),
        )
            .prop_map(move |(eq, ineq)| RandomMap {
                nparam,
                n_in,
                n_out,
                eq,
                ineq,
            })
    })
}

fn build(r: &RandomMap) -> BasicMap {
    let mut bmap = BasicMap::new(r.nparam, r.n_in, r.n_out, 0);
    for row in &r.eq {
        let row: Vec<BigInt> = row.iter().map(|&c| BigInt::from(c)).collect();
        bmap.add_equality(&row);
    }
    for row in &r.ineq {
        let row: Vec<BigInt> = row.iter().map(|&c| BigInt::from(c)).collect();
        bmap.add_inequality(&row);
    }
    bmap
}

proptest! {
    /// Row/column counts and the tag column follow the contract for any
    /// split point and any padding.
    #[test]
    fn shape_and_tags(
        r in random_map(),
        split_frac in 0usize..4,
        extra_front in 0usize..3,
        extra_back in 0usize..3,
    ) {
        let bmap = build(&r);
        let total = r.nparam + r.n_in + r.n_out;
        let pilp_param = split_frac.min(total);
        let m = basic_map_to_matrix(&bmap, pilp_param, extra_front, extra_back);

        prop_assert_eq!(m.n_row(), extra_front + r.eq.len() + r.ineq.len());
        prop_assert_eq!(m.n_col(), 1 + extra_front + total + extra_back + 1);

        for i in 0..extra_front {
            prop_assert!(m.row(i).iter().all(|c| c.is_zero()));
        }
        for i in 0..r.eq.len() {
            prop_assert!(m.row(extra_front + i)[0].is_zero());
        }
        for i in 0..r.ineq.len() {
            prop_assert_eq!(&m.row(extra_front + r.eq.len() + i)[0], &BigInt::from(1));
        }
    }

    /// Every coefficient lands in the column the contract assigns to it:
    /// constant last, parameters after the decision variables, decision
    /// variables right after the front padding.
    #[test]
    fn coefficients_are_permuted_not_changed(
        r in random_map(),
        split_frac in 0usize..4,
        extra_back in 0usize..3,
    ) {
        let bmap = build(&r);
        let total = r.nparam + r.n_in + r.n_out;
        let pilp_param = split_frac.min(total);
        let pilp_var = total - pilp_param;
        let m = basic_map_to_matrix(&bmap, pilp_param, 0, extra_back);

        let all_rows: Vec<&Vec<i64>> = r.eq.iter().chain(r.ineq.iter()).collect();
        for (i, src) in all_rows.iter().enumerate() {
            let dst = m.row(i);
            // constant
            prop_assert_eq!(&dst[1 + total + extra_back], &BigInt::from(src[0]));
            // parameters sit after the decision variables
            for k in 0..pilp_param {
                prop_assert_eq!(&dst[1 + pilp_var + k], &BigInt::from(src[1 + k]));
            }
            // decision variables come first
            for k in 0..pilp_var {
                prop_assert_eq!(&dst[1 + k], &BigInt::from(src[1 + pilp_param + k]));
            }
            // back padding columns stay zero
            for k in 0..extra_back {
                prop_assert!(dst[1 + total + k].is_zero());
            }
        }
    }
}
