//! Property-based checks over random instances.

use proptest::prelude::*;
use u_antcolony::aco::{
    AcoConfig, AcoRunner, DistanceMatrix, PheromoneMatrix, Point, Tour, TourBuilder, TourShape,
};
use u_antcolony::random::create_rng;

fn points(max: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-1000.0..1000.0f64, -1000.0..1000.0f64), 2..max)
        .prop_map(|coords| coords.into_iter().map(Point::from).collect())
}

fn is_permutation(order: &[usize], n: usize) -> bool {
    let mut sorted = order.to_vec();
    sorted.sort_unstable();
    sorted == (0..n).collect::<Vec<_>>()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn distance_matrix_symmetric_zero_diagonal(pts in points(20)) {
        let dm = DistanceMatrix::build(&pts).unwrap();
        for i in 0..pts.len() {
            prop_assert_eq!(dm.get(i, i), 0.0);
            for j in 0..pts.len() {
                prop_assert_eq!(dm.get(i, j), dm.get(j, i));
                prop_assert!(dm.get(i, j) >= 0.0);
            }
        }
    }

    #[test]
    fn built_tours_are_permutations(pts in points(25), seed in any::<u64>(), beta in 0.5..5.0f64) {
        let dm = DistanceMatrix::build(&pts).unwrap();
        let pm = PheromoneMatrix::init(pts.len(), 1.0 / pts.len() as f64).unwrap();
        let builder = TourBuilder::new(&dm, &pm, beta).with_coincidence_epsilon(1e-9);
        let mut rng = create_rng(seed);

        for _ in 0..5 {
            let tour = builder.build(&mut rng);
            prop_assert!(is_permutation(tour.order(), pts.len()));
            prop_assert!(tour.distance().is_finite());
        }
    }

    #[test]
    fn decay_scales_exactly(size in 1usize..12, initial in 0.001..10.0f64, factor in 0.0..1.0f64) {
        let pm = PheromoneMatrix::init(size, initial).unwrap();
        let decayed = pm.decay(factor).unwrap();
        for (&before, &after) in pm.as_slice().iter().zip(decayed.as_slice()) {
            prop_assert_eq!(after, before * (1.0 - factor));
        }
    }

    #[test]
    fn reinforce_is_monotone_and_local(pts in points(15), seed in any::<u64>()) {
        let n = pts.len();
        let dm = DistanceMatrix::build(&pts).unwrap();
        let pm = PheromoneMatrix::init(n, 0.5).unwrap();
        let mut rng = create_rng(seed);
        let builder = TourBuilder::new(&dm, &pm, 2.0).with_coincidence_epsilon(1e-9);
        let tours: Vec<Tour> = (0..4).map(|_| builder.build(&mut rng)).collect();

        let next = pm.reinforce(&tours);

        let mut traversed = vec![false; n * n];
        for tour in tours.iter().filter(|t| !t.is_degenerate()) {
            for (i, j) in tour.edges() {
                traversed[i * n + j] = true;
            }
        }
        for i in 0..n {
            for j in 0..n {
                prop_assert!(next.get(i, j) >= pm.get(i, j));
                if !traversed[i * n + j] {
                    prop_assert_eq!(next.get(i, j), pm.get(i, j));
                }
            }
        }
    }

    #[test]
    fn best_distance_never_regresses(pts in points(12), seed in any::<u64>(), closed in any::<bool>()) {
        let shape = if closed { TourShape::Closed } else { TourShape::Open };
        let config = AcoConfig::default()
            .with_generations(8)
            .with_population_size(5)
            .with_tour_shape(shape)
            .with_seed(seed);

        let result = AcoRunner::solve(&pts, &config).unwrap();

        prop_assert!(is_permutation(result.best.order(), pts.len()));
        for window in result.distance_history.windows(2) {
            prop_assert!(window[1] <= window[0]);
        }
        prop_assert!(result.pheromones.as_slice().iter().all(|v| v.is_finite() && *v >= 0.0));
    }
}
