#![allow(dead_code)]

use approx::assert_relative_eq;
use exodash::catalog::sample::sample_planets;
use exodash::env_state::{CatalogConfig, ResponseFormat};
use exodash::habitability::HabitableZone;
use exodash::planet::PlanetRecord;

pub fn assert_zone_close(actual: &HabitableZone, expected: &HabitableZone, epsilon: f64) {
    assert_relative_eq!(actual.inner, expected.inner, epsilon = epsilon);
    assert_relative_eq!(actual.outer, expected.outer, epsilon = epsilon);
}

pub fn sample_planet(name: &str) -> PlanetRecord {
    sample_planets()
        .into_iter()
        .find(|p| p.name == name)
        .unwrap_or_else(|| panic!("{name} is not in the sample catalog"))
}

pub fn planet_names(planets: &[PlanetRecord]) -> Vec<&str> {
    planets.iter().map(|p| p.name.as_str()).collect()
}

/// Catalog settings pointing at a local mock server.
pub fn mock_config(server_url: &str, format: ResponseFormat) -> CatalogConfig {
    CatalogConfig::builder()
        .base_url(format!("{server_url}/TAP/sync"))
        .format(format)
        .max_rows(50)
        .build()
        .unwrap()
}

pub const TAP_JSON: &str = r#"[
  {"pl_name": "TOI-700 d", "hostname": "TOI-700", "discoverymethod": "Transit",
   "disc_year": 2020, "pl_orbper": 37.426, "pl_orbsmax": 0.1633, "pl_rade": 1.073,
   "pl_bmasse": null, "pl_eqt": 269, "st_spectype": "M2 V", "st_rad": 0.42,
   "st_mass": 0.416, "st_teff": 3480, "st_dist": 31.1265, "sy_pnum": 4, "pl_orbeccen": 0.032},
  {"pl_name": "WASP-12 b", "hostname": "WASP-12", "discoverymethod": "Transit",
   "disc_year": 2008, "pl_orbper": 1.0914, "pl_orbsmax": 0.0234, "pl_rade": 21.3,
   "pl_bmasse": 466.0, "pl_eqt": 2580, "st_spectype": "G0 V", "st_rad": 1.66,
   "st_mass": 1.43, "st_teff": 6360, "st_dist": 427.2, "sy_pnum": 1, "pl_orbeccen": 0.0}
]"#;

pub const TAP_CSV: &str = "pl_name,hostname,discoverymethod,disc_year,pl_rade,pl_eqt,st_dist
TOI-700 d,TOI-700,Transit,2020,1.073,269,31.1265
51 Peg b,51 Peg,Radial Velocity,1995,,1284,15.4614
";
