use proptest::prelude::*;
use route_optimizer::{
    construct_heuristic, haversine, refine_2opt, solve_exact, tour_distance, Coordinate,
    DistanceMatrix, Optimizer, Stop,
};

fn coordinate() -> impl Strategy<Value = Coordinate> {
    (-60.0..60.0f64, -170.0..170.0f64).prop_map(|(lat, lon)| Coordinate::new(lat, lon))
}

fn regional() -> impl Strategy<Value = Coordinate> {
    (49.5..50.5f64, 4.5..5.5f64).prop_map(|(lat, lon)| Coordinate::new(lat, lon))
}

fn is_permutation_of_stops(tour: &[usize], n: usize) -> bool {
    let mut sorted = tour.to_vec();
    sorted.sort_unstable();
    sorted == (1..=n).collect::<Vec<_>>()
}

proptest! {
    #[test]
    fn distance_is_symmetric(a in coordinate(), b in coordinate()) {
        let ab = haversine(a, b).unwrap();
        let ba = haversine(b, a).unwrap();
        prop_assert!((ab - ba).abs() < 1e-9);
        prop_assert!(ab >= 0.0);
        prop_assert_eq!(haversine(a, a).unwrap(), 0.0);
    }

    #[test]
    fn exact_is_a_permutation_and_no_worse_than_input(
        start in regional(),
        stops in prop::collection::vec(regional(), 0..=6),
    ) {
        let dm = DistanceMatrix::from_locations(start, &stops).unwrap();
        let tour = solve_exact(&dm, 8).unwrap();
        prop_assert!(is_permutation_of_stops(&tour, stops.len()));
        prop_assert!(tour_distance(&tour, &dm) <= tour_distance(&dm.stop_indices(), &dm));
    }

    #[test]
    fn heuristic_and_refiner_keep_every_stop(
        start in regional(),
        stops in prop::collection::vec(regional(), 0..25),
    ) {
        let dm = DistanceMatrix::from_locations(start, &stops).unwrap();
        let built = construct_heuristic(&dm, 5.0);
        prop_assert!(is_permutation_of_stops(&built, stops.len()));

        let refined = refine_2opt(&built, &dm, 100);
        prop_assert!(is_permutation_of_stops(&refined, stops.len()));
        prop_assert!(tour_distance(&refined, &dm) <= tour_distance(&built, &dm));
    }

    #[test]
    fn refiner_never_worsens_any_tour(
        start in regional(),
        tour_and_stops in prop::collection::vec(regional(), 1..15)
            .prop_flat_map(|stops| {
                let n = stops.len();
                (Just(stops), Just((1..=n).collect::<Vec<usize>>()).prop_shuffle())
            }),
    ) {
        let (stops, tour) = tour_and_stops;
        let dm = DistanceMatrix::from_locations(start, &stops).unwrap();
        let refined = refine_2opt(&tour, &dm, 100);
        prop_assert!(tour_distance(&refined, &dm) <= tour_distance(&tour, &dm));
        if tour.len() < 4 {
            prop_assert_eq!(refined, tour);
        }
    }

    #[test]
    fn optimize_returns_each_located_stop_once(
        start in regional(),
        coords in prop::collection::vec(prop::option::of(regional()), 0..20),
    ) {
        let stops: Vec<Stop<usize>> = coords
            .iter()
            .enumerate()
            .map(|(i, c)| match c {
                Some(c) => Stop::new(i, *c),
                None => Stop::unlocated(i),
            })
            .collect();
        let located = coords.iter().filter(|c| c.is_some()).count();

        let result = Optimizer::default().optimize(&stops, start).unwrap();
        let mut ids: Vec<usize> = result.route().iter().map(|s| *s.id()).collect();
        prop_assert_eq!(ids.len(), located);
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), located);
        prop_assert_eq!(result.route().len() + result.unlocated().len(), stops.len());

        let again = Optimizer::default().optimize(&stops, start).unwrap();
        prop_assert_eq!(result.order(), again.order());
    }
}
