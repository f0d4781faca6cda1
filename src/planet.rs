//! # Planet records
//!
//! [`PlanetRecord`] is the raw row delivered by the catalog (remote TAP query or bundled
//! sample). Column names are the NASA Exoplanet Archive `ps` table identifiers and are kept
//! verbatim through `serde` renames, so the same struct deserializes from JSON and CSV.
//!
//! Every measurement is optional. Catalog values of `0` or `NaN` carry no information either,
//! so the engines read them through the `*_value()` accessors which collapse such values
//! to `None`.
use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::{Au, Days, EarthMasses, EarthRadii, Kelvin, Parsec};

/// One confirmed exoplanet as delivered by the catalog.
///
/// # Fields
///
/// * `name` - planet designation, unique within a result set (`pl_name`)
/// * `hostname` - host star designation (`hostname`)
/// * `discovery_method` - detection technique, e.g. `"Transit"` (`discoverymethod`)
/// * `discovery_year` - year of the discovery publication (`disc_year`)
/// * `orbital_period` - days (`pl_orbper`)
/// * `semi_major_axis` - AU (`pl_orbsmax`)
/// * `radius` - Earth radii (`pl_rade`)
/// * `mass` - Earth masses (`pl_bmasse`)
/// * `equilibrium_temperature` - Kelvin (`pl_eqt`)
/// * `spectral_type` - stellar spectral type, first letter significant (`st_spectype`)
/// * `stellar_radius` - solar radii (`st_rad`)
/// * `stellar_mass` - solar masses (`st_mass`)
/// * `stellar_temperature` - stellar effective temperature in Kelvin (`st_teff`)
/// * `distance` - parsecs (`st_dist`)
/// * `planet_count` - number of planets in the system (`sy_pnum`)
/// * `eccentricity` - orbital eccentricity, circular when absent (`pl_orbeccen`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanetRecord {
    #[serde(rename = "pl_name", deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(rename = "hostname", deserialize_with = "null_as_empty")]
    pub hostname: String,
    #[serde(rename = "discoverymethod")]
    pub discovery_method: Option<String>,
    #[serde(rename = "disc_year")]
    pub discovery_year: Option<i32>,
    #[serde(rename = "pl_orbper")]
    pub orbital_period: Option<Days>,
    #[serde(rename = "pl_orbsmax")]
    pub semi_major_axis: Option<Au>,
    #[serde(rename = "pl_rade")]
    pub radius: Option<EarthRadii>,
    #[serde(rename = "pl_bmasse")]
    pub mass: Option<EarthMasses>,
    #[serde(rename = "pl_eqt")]
    pub equilibrium_temperature: Option<Kelvin>,
    #[serde(rename = "st_spectype")]
    pub spectral_type: Option<String>,
    #[serde(rename = "st_rad")]
    pub stellar_radius: Option<f64>,
    #[serde(rename = "st_mass")]
    pub stellar_mass: Option<f64>,
    #[serde(rename = "st_teff")]
    pub stellar_temperature: Option<Kelvin>,
    #[serde(rename = "st_dist")]
    pub distance: Option<Parsec>,
    #[serde(rename = "sy_pnum")]
    pub planet_count: Option<u32>,
    #[serde(rename = "pl_orbeccen")]
    pub eccentricity: Option<f64>,
}

/// Designations may come back as `null` from the archive; read them as empty strings.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Keep a measurement only when it carries information (not zero, not NaN).
#[inline]
pub(crate) fn informative(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

impl PlanetRecord {
    /// Create a record with only its designation and host star set.
    ///
    /// Arguments
    /// ---------
    /// * `name`: the planet designation
    /// * `hostname`: the host star designation
    ///
    /// Return
    /// ------
    /// * a new `PlanetRecord` with every measurement absent
    pub fn new(name: impl Into<String>, hostname: impl Into<String>) -> Self {
        PlanetRecord {
            name: name.into(),
            hostname: hostname.into(),
            ..Default::default()
        }
    }

    pub fn radius_value(&self) -> Option<EarthRadii> {
        informative(self.radius)
    }

    pub fn mass_value(&self) -> Option<EarthMasses> {
        informative(self.mass)
    }

    pub fn equilibrium_temperature_value(&self) -> Option<Kelvin> {
        informative(self.equilibrium_temperature)
    }

    pub fn semi_major_axis_value(&self) -> Option<Au> {
        informative(self.semi_major_axis)
    }

    pub fn orbital_period_value(&self) -> Option<Days> {
        informative(self.orbital_period)
    }

    pub fn distance_value(&self) -> Option<Parsec> {
        informative(self.distance)
    }

    pub fn stellar_radius_value(&self) -> Option<f64> {
        informative(self.stellar_radius)
    }

    pub fn stellar_temperature_value(&self) -> Option<Kelvin> {
        informative(self.stellar_temperature)
    }

    /// Spectral type string, `None` when absent or empty.
    ///
    /// The value is not trimmed: only its first character decides the class, so `" G2"` or a
    /// whitespace-only type falls in the "other" class.
    pub fn spectral_type_value(&self) -> Option<&str> {
        self.spectral_type.as_deref().filter(|s| !s.is_empty())
    }

    /// Discovery method, `None` when absent or blank.
    pub fn discovery_method_value(&self) -> Option<&str> {
        self.discovery_method.as_deref().filter(|s| !s.is_empty())
    }

    /// Orbital eccentricity, `0.0` (circular orbit) when the catalog has no value.
    pub fn eccentricity_or_circular(&self) -> f64 {
        self.eccentricity.filter(|e| !e.is_nan()).unwrap_or(0.0)
    }
}
