pub mod catalog;
pub mod classification;
pub mod constants;
pub mod conversion;
pub mod env_state;
pub mod exodash;
pub mod exodash_errors;
pub mod filter;
pub mod formatting;
pub mod habitability;
pub mod orbit_geometry;
pub mod planet;
pub mod statistics;

#[cfg(test)]
pub(crate) mod unit_test_global {
    use std::sync::LazyLock;

    use crate::{catalog::sample::sample_planets, planet::PlanetRecord};

    pub(crate) static SAMPLE_PLANETS_TEST: LazyLock<Vec<PlanetRecord>> =
        LazyLock::new(sample_planets);

    pub(crate) fn sample_planet(name: &str) -> &'static PlanetRecord {
        SAMPLE_PLANETS_TEST
            .iter()
            .find(|p| p.name == name)
            .unwrap_or_else(|| panic!("{name} is not in the sample catalog"))
    }
}
