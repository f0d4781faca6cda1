//! # Dataset statistics
//!
//! Aggregations computed over a loaded planet collection: discovery timeline, planetary
//! systems, size-ordering, and descriptive information about the detection techniques.
//!
//! All the functions are pure and leave their input untouched.
use std::{cmp::Ordering, collections::BTreeMap};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    classification::{categorize_planet_type, PlanetType},
    constants::{Au, EarthRadii, Kelvin},
    planet::PlanetRecord,
};

/// Number of planets found with one discovery method.
///
/// Also the row type of the catalog aggregate `discoverymethod, COUNT(*)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodCount {
    #[serde(rename = "discoverymethod")]
    pub method: String,
    pub count: usize,
}

/// Number of planets discovered in one year.
///
/// Also the row type of the catalog aggregate `disc_year, COUNT(*)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCount {
    #[serde(rename = "disc_year")]
    pub year: i32,
    pub count: usize,
}

/// One year of the discovery timeline.
///
/// # Fields
///
/// * `year` - calendar year
/// * `total` - planets discovered that year
/// * `by_method` - planets discovered that year, per method; every method present in the
///   dataset is listed (in order of first appearance), with a zero count if needed
/// * `cumulative` - planets discovered that year or before
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub year: i32,
    pub total: usize,
    pub by_method: Vec<MethodCount>,
    pub cumulative: usize,
}

/// Count the planets per discovery method, most frequent first.
///
/// Planets without method are not counted. Ties keep the order of first appearance.
pub fn discovery_method_counts(planets: &[PlanetRecord]) -> Vec<MethodCount> {
    let methods = distinct_methods(planets);
    methods
        .into_iter()
        .map(|method| MethodCount {
            count: planets
                .iter()
                .filter(|p| p.discovery_method_value() == Some(method.as_str()))
                .count(),
            method,
        })
        .sorted_by(|a, b| b.count.cmp(&a.count))
        .collect()
}

fn distinct_methods(planets: &[PlanetRecord]) -> Vec<String> {
    planets
        .iter()
        .filter_map(PlanetRecord::discovery_method_value)
        .unique()
        .map(str::to_string)
        .collect()
}

/// Build the year-by-year discovery timeline.
///
/// Arguments
/// ---------
/// * `planets`: the collection
/// * `start`: first year, earliest discovery year of the collection when `None`
/// * `end`: last year, latest discovery year of the collection when `None`
///
/// Return
/// ------
/// * one [`TimelineEntry`] per year of `start..=end`, empty when no bound can be
///   determined or when `start > end`
pub fn discovery_timeline(
    planets: &[PlanetRecord],
    start: Option<i32>,
    end: Option<i32>,
) -> Vec<TimelineEntry> {
    let years = || planets.iter().filter_map(|p| p.discovery_year);
    let (Some(start), Some(end)) = (start.or_else(|| years().min()), end.or_else(|| years().max()))
    else {
        return Vec::new();
    };

    let methods = distinct_methods(planets);

    (start..=end)
        .map(|year| {
            let of_year = planets
                .iter()
                .filter(|p| p.discovery_year == Some(year))
                .collect_vec();

            let by_method = methods
                .iter()
                .map(|m| MethodCount {
                    method: m.clone(),
                    count: of_year
                        .iter()
                        .filter(|p| p.discovery_method_value() == Some(m.as_str()))
                        .count(),
                })
                .collect();

            TimelineEntry {
                year,
                total: of_year.len(),
                by_method,
                cumulative: years().filter(|y| *y <= year).count(),
            }
        })
        .collect()
}

/// Group the planets by host star.
pub fn group_by_system(planets: &[PlanetRecord]) -> BTreeMap<String, Vec<PlanetRecord>> {
    planets
        .iter()
        .fold(BTreeMap::new(), |mut systems, planet| {
            systems
                .entry(planet.hostname.clone())
                .or_insert_with(Vec::new)
                .push(planet.clone());
            systems
        })
}

/// Planets of a system that can be drawn to scale, innermost first.
///
/// Only the planets having both a semi-major axis and a radius are kept.
pub fn system_layout(planets: &[PlanetRecord]) -> Vec<PlanetRecord> {
    planets
        .iter()
        .filter(|p| p.semi_major_axis_value().is_some() && p.radius_value().is_some())
        .cloned()
        .sorted_by(|a, b| {
            a.semi_major_axis_value()
                .partial_cmp(&b.semi_major_axis_value())
                .unwrap_or(Ordering::Equal)
        })
        .collect()
}

/// A solar-system planet used as comparison baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarSystemBody {
    pub name: &'static str,
    pub distance: Au,
    pub radius: EarthRadii,
    pub temperature: Kelvin,
    pub planet_type: PlanetType,
}

const fn body(
    name: &'static str,
    distance: Au,
    radius: EarthRadii,
    temperature: Kelvin,
    planet_type: PlanetType,
) -> SolarSystemBody {
    SolarSystemBody {
        name,
        distance,
        radius,
        temperature,
        planet_type,
    }
}

static SOLAR_SYSTEM: [SolarSystemBody; 8] = [
    body("Mercury", 0.39, 0.383, 340.0, PlanetType::SubEarth),
    body("Venus", 0.72, 0.949, 737.0, PlanetType::EarthLike),
    body("Earth", 1.0, 1.0, 288.0, PlanetType::EarthLike),
    body("Mars", 1.52, 0.532, 210.0, PlanetType::SubEarth),
    body("Jupiter", 5.2, 11.21, 165.0, PlanetType::GasGiant),
    body("Saturn", 9.58, 9.45, 134.0, PlanetType::GasGiant),
    body("Uranus", 19.22, 4.01, 76.0, PlanetType::NeptuneLike),
    body("Neptune", 30.05, 3.88, 72.0, PlanetType::NeptuneLike),
];

/// The eight planets of the solar system, innermost first.
pub fn solar_system_reference() -> &'static [SolarSystemBody] {
    &SOLAR_SYSTEM
}

/// Ordering criterion of [`sort_planets`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// radius, largest first
    #[default]
    Size,
    /// equilibrium temperature, coolest first
    Temperature,
    /// distance from the Sun, nearest first
    Distance,
    /// size class label, alphabetical
    Type,
}

/// Sort the planets having a radius for a size comparison.
///
/// Planets without radius are left out. For temperature and distance an absent value
/// sorts as `0`. The sort is stable.
pub fn sort_planets(planets: &[PlanetRecord], key: SortKey) -> Vec<PlanetRecord> {
    let with_radius = planets.iter().filter(|p| p.radius_value().is_some());
    let or_zero = |v: Option<f64>| v.unwrap_or(0.0);

    with_radius
        .sorted_by(|a, b| match key {
            SortKey::Size => or_zero(b.radius_value()).total_cmp(&or_zero(a.radius_value())),
            SortKey::Temperature => or_zero(a.equilibrium_temperature_value())
                .total_cmp(&or_zero(b.equilibrium_temperature_value())),
            SortKey::Distance => {
                or_zero(a.distance_value()).total_cmp(&or_zero(b.distance_value()))
            }
            SortKey::Type => categorize_planet_type(a.radius)
                .label()
                .cmp(&categorize_planet_type(b.radius).label()),
        })
        .cloned()
        .collect()
}

/// Descriptive information about a detection technique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiscoveryMethodInfo {
    pub display_name: &'static str,
    /// Material icon identifier
    pub icon: &'static str,
    pub description: &'static str,
}

/// Describe a catalog discovery method; unlisted methods get a generic description.
pub fn discovery_method_info(method: &str) -> DiscoveryMethodInfo {
    let (display_name, icon, description) = match method {
        "Transit" => (
            "Transit",
            "brightness_4",
            "Detects planets by measuring the dimming of starlight as a planet passes in front of its star.",
        ),
        "Radial Velocity" => (
            "Radial Velocity",
            "timeline",
            "Detects planets by measuring the wobble of a star caused by the gravitational pull of an orbiting planet.",
        ),
        "Imaging" => (
            "Direct Imaging",
            "camera_alt",
            "Directly observes planets by blocking the light from their host star.",
        ),
        "Microlensing" => (
            "Microlensing",
            "zoom_in",
            "Detects planets when their gravitational field temporarily magnifies light from a background star.",
        ),
        "Transit Timing Variations" => (
            "Transit Timing Variations",
            "access_time",
            "Detects planets by measuring variations in the timing of known transiting planets.",
        ),
        "Astrometry" => (
            "Astrometry",
            "explore",
            "Measures the precise positions of stars to detect the presence of planets.",
        ),
        _ => (
            "Other Method",
            "science",
            "Detected using specialized techniques.",
        ),
    };

    DiscoveryMethodInfo {
        display_name,
        icon,
        description,
    }
}
