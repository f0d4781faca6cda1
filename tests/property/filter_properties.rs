//! Filter engine guarantees:
//! 1. Idempotency: filter(filter(L, F), F) == filter(L, F)
//! 2. Order: the output is an in-order subsequence of the input
//! 3. Partition: kept planets match the filter, dropped planets do not

use proptest::prelude::*;

use exodash::classification::PlanetType;
use exodash::filter::{filter_planets, FilterSpec};
use exodash::planet::PlanetRecord;

const METHODS: [&str; 4] = ["Transit", "Radial Velocity", "Imaging", "Microlensing"];

fn planet_strategy() -> impl Strategy<Value = PlanetRecord> {
    (
        "[A-Z][a-z]{2,6}-[0-9]{1,3} [b-h]",
        prop::option::of(0.1f64..30.0),
        prop::option::of(50.0f64..3000.0),
        prop::option::of(1.0f64..2000.0),
        prop::option::of(1990i32..2025),
        prop::option::of(prop::sample::select(METHODS.to_vec())),
    )
        .prop_map(|(name, radius, eqt, distance, year, method)| PlanetRecord {
            radius,
            equilibrium_temperature: eqt,
            distance,
            discovery_year: year,
            discovery_method: method.map(str::to_string),
            ..PlanetRecord::new(name, "Host")
        })
}

fn type_strategy() -> impl Strategy<Value = PlanetType> {
    prop::sample::select(vec![
        PlanetType::SubEarth,
        PlanetType::EarthLike,
        PlanetType::SuperEarth,
        PlanetType::NeptuneLike,
        PlanetType::GasGiant,
        PlanetType::Unknown,
    ])
}

fn spec_strategy() -> impl Strategy<Value = FilterSpec> {
    (
        prop::collection::btree_set(type_strategy(), 0..3),
        prop::collection::btree_set(prop::sample::select(METHODS.to_vec()), 0..3),
        (1990i32..2025, 1990i32..2025),
        (0.0f64..500.0, 0.0f64..2500.0),
        (0.0f64..1000.0, 0.0f64..3500.0),
        (0.0f64..5.0, 0.0f64..40.0),
        any::<bool>(),
    )
        .prop_map(|(types, methods, years, dist, temp, radius, habitable)| {
            FilterSpec::unrestricted()
                .planet_types(types)
                .discovery_methods(methods)
                .year_range(years.0, years.1)
                .distance_range(dist.0, dist.1)
                .temperature_range(temp.0, temp.1)
                .radius_range(radius.0, radius.1)
                .habitable_only(habitable)
        })
}

fn is_in_order_subsequence(sub: &[PlanetRecord], all: &[PlanetRecord]) -> bool {
    let mut remaining = all.iter();
    sub.iter().all(|p| remaining.any(|q| q == p))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn filter_is_idempotent(
        planets in prop::collection::vec(planet_strategy(), 0..40),
        spec in spec_strategy(),
    ) {
        let once = filter_planets(&planets, &spec);
        let twice = filter_planets(&once, &spec);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn filter_preserves_order(
        planets in prop::collection::vec(planet_strategy(), 0..40),
        spec in spec_strategy(),
    ) {
        let kept = filter_planets(&planets, &spec);
        prop_assert!(kept.len() <= planets.len());
        prop_assert!(is_in_order_subsequence(&kept, &planets));
    }

    #[test]
    fn filter_partitions_input(
        planets in prop::collection::vec(planet_strategy(), 0..40),
        spec in spec_strategy(),
    ) {
        let kept = filter_planets(&planets, &spec);
        let expected = planets.iter().filter(|p| spec.matches(p)).count();
        prop_assert_eq!(kept.len(), expected);
        prop_assert!(kept.iter().all(|p| spec.matches(p)));
    }

    #[test]
    fn unrestricted_filter_keeps_dated_planets(
        planets in prop::collection::vec(planet_strategy(), 0..40),
    ) {
        let kept = filter_planets(&planets, &FilterSpec::unrestricted());
        let dated = planets.iter().filter(|p| p.discovery_year.is_some()).count();
        prop_assert_eq!(kept.len(), dated);
    }
}
