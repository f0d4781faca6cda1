//! Derived-metric guarantees: radius bands, score bounds, orbit shape, habitable zone.

use proptest::prelude::*;

use exodash::classification::{categorize_planet_type, PlanetType};
use exodash::habitability::{calculate_habitability_score, calculate_habitable_zone};
use exodash::orbit_geometry::{generate_orbit_coordinates, position_at};
use exodash::planet::PlanetRecord;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn radius_bands_partition_and_are_monotone(r1 in 0.0001f64..200.0, r2 in 0.0001f64..200.0) {
        let (small, large) = if r1 <= r2 { (r1, r2) } else { (r2, r1) };
        let t_small = categorize_planet_type(Some(small));
        let t_large = categorize_planet_type(Some(large));

        prop_assert!(PlanetType::SIZE_CLASSES.contains(&t_small));
        prop_assert!(t_small <= t_large);
    }

    #[test]
    fn score_is_bounded(
        eqt in prop::option::of(-1.0e4f64..1.0e4),
        radius in prop::option::of(-100.0f64..100.0),
        mass in prop::option::of(-1.0e4f64..1.0e4),
        spectral in prop::option::of("[OBAFGKMXY][0-9] ?V?"),
    ) {
        let planet = PlanetRecord {
            equilibrium_temperature: eqt,
            radius,
            mass,
            spectral_type: spectral,
            ..PlanetRecord::new("Any b", "Any")
        };
        let score = calculate_habitability_score(&planet);
        prop_assert!(score <= 100);
    }

    #[test]
    fn circular_orbit_is_a_circle(a in 0.001f64..100.0, n in 1usize..256) {
        let path = generate_orbit_coordinates(Some(a), Some(0.0), n);
        prop_assert_eq!(path.len(), n);
        for p in &path {
            let r = (p.x * p.x + p.y * p.y).sqrt();
            prop_assert!((r - a).abs() <= 1e-9 * a);
        }
    }

    #[test]
    fn animation_index_stays_on_path(
        n in 1usize..200,
        elapsed in -1.0e6f64..1.0e6,
        period in 0.001f64..1.0e4,
    ) {
        let path = generate_orbit_coordinates(Some(1.0), Some(0.3), n);
        let point = position_at(&path, elapsed, period);
        prop_assert!(point.is_some_and(|p| path.contains(&p)));
    }

    #[test]
    fn habitable_zone_is_ordered(
        teff in prop::option::of(500.0f64..50_000.0),
        radius in prop::option::of(0.01f64..100.0),
    ) {
        let zone = calculate_habitable_zone(teff, radius);
        prop_assert_eq!(zone.is_some(), teff.is_some() && radius.is_some());
        if let Some(zone) = zone {
            prop_assert!(zone.inner < zone.outer);
        }
    }
}
