//! Property-based tests for the distance measures.
//!
//! Banded results are checked against the exact dynamic program and the
//! randomized Hausdorff search against a brute-force nearest-neighbour scan.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use spatio_similarity::{
    BandedDistanceMatrix, directed_hausdorff_with_rng, euclidean_distance,
    exact_frechet_distance, frechet_distance,
};

fn hausdorff_reference(a: &[[f64; 2]], b: &[[f64; 2]]) -> f64 {
    a.iter()
        .map(|pa| {
            b.iter()
                .map(|pb| ((pa[0] - pb[0]).powi(2) + (pa[1] - pb[1]).powi(2)).sqrt())
                .fold(f64::INFINITY, f64::min)
        })
        .fold(0.0, f64::max)
}

fn arb_trajectory(max_len: usize) -> impl Strategy<Value = Vec<[f64; 2]>> {
    proptest::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 1..max_len)
        .prop_map(|points| points.into_iter().map(|(x, y)| [x, y]).collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 200,
        ..ProptestConfig::default()
    })]

    /// Banded Fréchet does not depend on argument order.
    #[test]
    fn frechet_is_symmetric(a in arb_trajectory(40), b in arb_trajectory(40)) {
        let ab = frechet_distance(&a, &b).unwrap();
        let ba = frechet_distance(&b, &a).unwrap();
        prop_assert_eq!(ab, ba);
    }

    /// exact <= banded <= diag_max, and both endpoints bound it from below.
    #[test]
    fn banded_frechet_bounds(a in arb_trajectory(40), b in arb_trajectory(40)) {
        let band = BandedDistanceMatrix::compute(&a, &b).unwrap();
        let banded = frechet_distance(&a, &b).unwrap();
        let exact = exact_frechet_distance(&a, &b).unwrap();

        let first = euclidean_distance(&a[0], &b[0]).unwrap();
        let last = euclidean_distance(&a[a.len() - 1], &b[b.len() - 1]).unwrap();

        prop_assert!(banded >= 0.0);
        prop_assert!(exact <= banded);
        prop_assert!(banded <= band.diag_max());
        prop_assert!(exact >= first.max(last));
    }

    /// A trajectory is at distance zero from itself.
    #[test]
    fn frechet_identity(a in arb_trajectory(60)) {
        prop_assert_eq!(frechet_distance(&a, &a).unwrap(), 0.0);
    }

    /// Pruned, shuffled search agrees with the brute-force definition.
    #[test]
    fn hausdorff_matches_reference(
        a in arb_trajectory(50),
        b in arb_trajectory(50),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let d = directed_hausdorff_with_rng(&a, &b, &mut rng).unwrap();
        let expected = hausdorff_reference(&a, &b);
        prop_assert!((d - expected).abs() <= 1e-9 * expected.max(1.0));
    }

    /// Every point is coupled with some point of the other trajectory.
    #[test]
    fn directed_hausdorff_below_frechet(a in arb_trajectory(30), b in arb_trajectory(30)) {
        let mut rng = StdRng::seed_from_u64(0);
        let h = directed_hausdorff_with_rng(&a, &b, &mut rng).unwrap();
        let f = exact_frechet_distance(&a, &b).unwrap();
        prop_assert!(h <= f + 1e-9);
    }
}
