//! # Habitability model
//!
//! Scores how Earth-like a planet is and tests whether it orbits inside the habitable zone of
//! its star.
//!
//! ## Habitability score
//!
//! The score is a weighted sum of four factor scores, each in `[0, 100]`:
//!
//! | factor      | weight | driving field            | best value          |
//! |-------------|--------|--------------------------|---------------------|
//! | temperature | 0.35   | `pl_eqt`                 | 285 K               |
//! | size        | 0.25   | `pl_rade`                | 1 R⊕                |
//! | mass        | 0.20   | `pl_bmasse`              | 1 M⊕                |
//! | star        | 0.20   | `st_spectype`            | G class             |
//!
//! A factor whose field is absent contributes **zero**; weights are never renormalized over
//! the factors present. A planet known only by its equilibrium temperature therefore caps
//! at 35.
//!
//! ## Habitable zone
//!
//! Two membership tests coexist and are **not** interchangeable:
//!
//! - [`is_in_habitable_zone`] — orbital distance against the conservative zone computed from
//!   the stellar luminosity (needs `st_teff`, `st_rad` and `pl_orbsmax`).
//! - [`is_temperate`] — equilibrium temperature inside `[180, 310] K`; this is the test used
//!   by the "habitable only" filter.
use serde::{Deserialize, Serialize};

use crate::{
    classification::SpectralClass,
    constants::{
        Au, EarthMasses, EarthRadii, Kelvin, AU, DPI, HZ_INNER_COEFF, HZ_OUTER_COEFF,
        IDEAL_EQUILIBRIUM_TEMPERATURE, POTENTIALLY_HABITABLE_MAX_RADIUS, SECONDS_PER_DAY,
        SOLAR_TEFF, TEMPERATE_MAX_K, TEMPERATE_MIN_K,
    },
    planet::{informative, PlanetRecord},
};

pub const TEMPERATURE_WEIGHT: f64 = 0.35;
pub const SIZE_WEIGHT: f64 = 0.25;
pub const MASS_WEIGHT: f64 = 0.20;
pub const STAR_WEIGHT: f64 = 0.20;

/// Per-factor breakdown of the habitability score.
///
/// Each factor is `None` when its driving field is absent, otherwise a score in `[0, 100]`
/// before weighting.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HabitabilityFactors {
    pub temperature: Option<f64>,
    pub size: Option<f64>,
    pub mass: Option<f64>,
    pub star: Option<f64>,
}

impl HabitabilityFactors {
    /// Evaluate the four factors of a planet.
    pub fn from_planet(planet: &PlanetRecord) -> Self {
        HabitabilityFactors {
            temperature: planet.equilibrium_temperature_value().map(temperature_factor),
            size: planet.radius_value().map(size_factor),
            mass: planet.mass_value().map(mass_factor),
            star: planet
                .spectral_type_value()
                .map(|s| star_factor(SpectralClass::from_spectral_type(s))),
        }
    }

    /// Weighted sum of the factors, absent factors counting as zero.
    pub fn weighted_sum(&self) -> f64 {
        self.temperature.unwrap_or(0.0) * TEMPERATURE_WEIGHT
            + self.size.unwrap_or(0.0) * SIZE_WEIGHT
            + self.mass.unwrap_or(0.0) * MASS_WEIGHT
            + self.star.unwrap_or(0.0) * STAR_WEIGHT
    }
}

/// Temperature factor: 100 at 285 K, losing one point per 2 K of deviation, floored at 0.
pub fn temperature_factor(eq_temperature: Kelvin) -> f64 {
    100.0 - f64::min(
        100.0,
        (eq_temperature - IDEAL_EQUILIBRIUM_TEMPERATURE).abs() / 2.0,
    )
}

/// Size factor, steep inside `[0.5, 2.0]` R⊕ and shallower (floored at 0) outside.
pub fn size_factor(radius: EarthRadii) -> f64 {
    if (0.5..=2.0).contains(&radius) {
        100.0 - (radius - 1.0).abs() * 50.0
    } else {
        f64::max(0.0, 100.0 - (radius - 1.0).abs() * 30.0)
    }
}

/// Mass factor, steep inside `[0.5, 5.0]` M⊕ and shallower (floored at 0) outside.
pub fn mass_factor(mass: EarthMasses) -> f64 {
    if (0.5..=5.0).contains(&mass) {
        100.0 - (mass - 1.0).abs() * 20.0
    } else {
        f64::max(0.0, 100.0 - (mass - 1.0).abs() * 15.0)
    }
}

/// Star factor from the host spectral class: long-lived, stable stars score best.
pub fn star_factor(class: SpectralClass) -> f64 {
    match class {
        SpectralClass::G => 100.0,
        SpectralClass::K => 80.0,
        SpectralClass::F => 60.0,
        SpectralClass::M => 50.0,
        _ => 30.0,
    }
}

/// Compute the habitability score of a planet.
///
/// Arguments
/// ---------
/// * `planet`: the catalog record
///
/// Return
/// ------
/// * the rounded weighted sum of the factor scores, in `[0, 100]`
///
/// See also
/// --------
/// * [`HabitabilityFactors`] – the unweighted breakdown
pub fn calculate_habitability_score(planet: &PlanetRecord) -> u8 {
    let score = HabitabilityFactors::from_planet(planet).weighted_sum();
    score.round().clamp(0.0, 100.0) as u8
}

/// Qualitative bucket of a habitability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreCategory {
    Excellent,
    Good,
    Moderate,
    Poor,
    #[serde(rename = "Very Poor")]
    VeryPoor,
}

impl ScoreCategory {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreCategory::Excellent
        } else if score >= 60.0 {
            ScoreCategory::Good
        } else if score >= 40.0 {
            ScoreCategory::Moderate
        } else if score >= 20.0 {
            ScoreCategory::Poor
        } else {
            ScoreCategory::VeryPoor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreCategory::Excellent => "Excellent",
            ScoreCategory::Good => "Good",
            ScoreCategory::Moderate => "Moderate",
            ScoreCategory::Poor => "Poor",
            ScoreCategory::VeryPoor => "Very Poor",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ScoreCategory::Excellent => "#41AB5D",
            ScoreCategory::Good => "#74C476",
            ScoreCategory::Moderate => "#FD8D3C",
            ScoreCategory::Poor => "#F16913",
            ScoreCategory::VeryPoor => "#D73027",
        }
    }
}

/// Display color of a score (overall or single factor).
pub fn habitability_color(score: f64) -> &'static str {
    ScoreCategory::from_score(score).color()
}

/// Conservative habitable-zone boundaries around a star, in AU.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HabitableZone {
    pub inner: Au,
    pub outer: Au,
}

impl HabitableZone {
    pub fn contains(&self, distance: Au) -> bool {
        distance >= self.inner && distance <= self.outer
    }
}

/// Compute the habitable zone of a star from its luminosity relative to the Sun.
///
/// `L = R² · (T / 5772)⁴` (Stefan–Boltzmann), `inner = 0.95 √L`, `outer = 1.67 √L`.
///
/// Arguments
/// ---------
/// * `star_teff`: stellar effective temperature (K)
/// * `star_radius`: stellar radius (solar radii)
///
/// Return
/// ------
/// * the zone boundaries, `None` when either input is absent
pub fn calculate_habitable_zone(
    star_teff: Option<Kelvin>,
    star_radius: Option<f64>,
) -> Option<HabitableZone> {
    let teff = informative(star_teff)?;
    let radius = informative(star_radius)?;

    let luminosity = radius * radius * (teff / SOLAR_TEFF).powi(4);
    let sqrt_l = luminosity.sqrt();

    Some(HabitableZone {
        inner: HZ_INNER_COEFF * sqrt_l,
        outer: HZ_OUTER_COEFF * sqrt_l,
    })
}

/// Strict habitable-zone test: the orbit lies inside the luminosity-derived zone.
///
/// `false` whenever stellar temperature, stellar radius or semi-major axis is missing.
pub fn is_in_habitable_zone(planet: &PlanetRecord) -> bool {
    let Some(a) = planet.semi_major_axis_value() else {
        return false;
    };

    calculate_habitable_zone(planet.stellar_temperature, planet.stellar_radius)
        .is_some_and(|zone| zone.contains(a))
}

/// Simplified habitability test on the equilibrium temperature alone (`180 K ≤ T ≤ 310 K`).
///
/// This is the test behind the "habitable only" filter; a planet without equilibrium
/// temperature is never temperate.
pub fn is_temperate(planet: &PlanetRecord) -> bool {
    planet
        .equilibrium_temperature_value()
        .is_some_and(|t| (TEMPERATE_MIN_K..=TEMPERATE_MAX_K).contains(&t))
}

/// Catalog annotation of remote records: temperate and smaller than 2.5 Earth radii.
///
/// Note
/// ----
/// A planet without radius is never potentially habitable.
pub fn is_potentially_habitable(planet: &PlanetRecord) -> bool {
    is_temperate(planet)
        && planet
            .radius_value()
            .is_some_and(|r| r < POTENTIALLY_HABITABLE_MAX_RADIUS)
}

/// Surface gravity relative to Earth, `M / R²` in Earth units.
pub fn calculate_relative_surface_gravity(
    mass: Option<EarthMasses>,
    radius: Option<EarthRadii>,
) -> Option<f64> {
    let m = informative(mass)?;
    let r = informative(radius)?;
    Some(m / (r * r))
}

/// Mean orbital velocity in km/s assuming a circular orbit.
///
/// Arguments
/// ---------
/// * `semi_major_axis`: AU
/// * `period`: orbital period in days
///
/// Return
/// ------
/// * `2π a / P` in km/s, `None` if either input is absent
pub fn calculate_orbital_velocity(semi_major_axis: Option<Au>, period: Option<f64>) -> Option<f64> {
    let a = informative(semi_major_axis)?;
    let p = informative(period)?;
    Some(DPI * a * AU / (p * SECONDS_PER_DAY))
}
