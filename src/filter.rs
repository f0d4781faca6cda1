//! # Filter engine
//!
//! Evaluates a [`FilterSpec`] against a planet collection and keeps the matching records, in
//! their original order.
//!
//! ## Predicates
//!
//! A planet is kept when **all** of the following hold (evaluation stops at the first
//! failure):
//!
//! 1. **type** — its size class (see [`categorize_planet_type`]) is in `planet_types`;
//!    skipped when the set is empty.
//! 2. **discovery method** — its method is in `discovery_methods`; skipped when the set is
//!    empty, a planet without method fails otherwise.
//! 3. **year** — its discovery year is in `year_range`; always checked, a planet without
//!    year fails.
//! 4. **distance**, 5. **temperature**, 6. **radius** — the value is in the matching range;
//!    only checked when the planet has that value.
//! 7. **habitable only** — when set, the planet passes [`is_temperate`].
//!
//! Ranges are inclusive and taken literally: an inverted range (`min > max`) matches nothing
//! and is not reported as an error.
//!
//! ## Example
//!
//! ```rust
//! use exodash::filter::{filter_planets, FilterSpec};
//! use exodash::classification::PlanetType;
//! use exodash::planet::PlanetRecord;
//!
//! let mut cool = PlanetRecord::new("Cool b", "Cool");
//! cool.discovery_year = Some(2017);
//! cool.equilibrium_temperature = Some(200.0);
//! let mut hot = PlanetRecord::new("Hot b", "Hot");
//! hot.discovery_year = Some(2017);
//! hot.equilibrium_temperature = Some(400.0);
//!
//! let spec = FilterSpec::unrestricted().habitable_only(true);
//! let kept = filter_planets(&[cool, hot], &spec);
//! assert_eq!(kept.len(), 1);
//! assert_eq!(kept[0].name, "Cool b");
//! ```
use std::{collections::BTreeSet, ops::RangeInclusive};

use serde::{Deserialize, Serialize};

use crate::{
    classification::{categorize_planet_type, PlanetType},
    habitability::is_temperate,
    planet::PlanetRecord,
};

/// First discovery year of the default year range
pub const DEFAULT_MIN_YEAR: i32 = 1990;

/// Year used as upper bound when the system clock cannot be read
const FALLBACK_CURRENT_YEAR: i32 = 2025;

/// Composite filter over a planet collection.
///
/// All criteria are combined with a logical AND. Empty sets place no restriction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub planet_types: BTreeSet<PlanetType>,
    pub discovery_methods: BTreeSet<String>,
    pub year_range: RangeInclusive<i32>,
    /// parsecs
    pub distance_range: RangeInclusive<f64>,
    /// Kelvin
    pub temperature_range: RangeInclusive<f64>,
    /// Earth radii
    pub radius_range: RangeInclusive<f64>,
    pub habitable_only: bool,
}

/// Current Gregorian year (UTC), read through `hifitime`.
pub fn current_year() -> i32 {
    hifitime::Epoch::now()
        .map(|now| now.to_gregorian_utc().0)
        .unwrap_or(FALLBACK_CURRENT_YEAR)
}

impl Default for FilterSpec {
    /// Dashboard defaults: discoveries since 1990, within 1000 pc, 0–3000 K, 0–20 R⊕.
    fn default() -> Self {
        FilterSpec {
            planet_types: BTreeSet::new(),
            discovery_methods: BTreeSet::new(),
            year_range: DEFAULT_MIN_YEAR..=current_year(),
            distance_range: 0.0..=1000.0,
            temperature_range: 0.0..=3000.0,
            radius_range: 0.0..=20.0,
            habitable_only: false,
        }
    }
}

impl FilterSpec {
    /// A filter that keeps every planet having a discovery year.
    pub fn unrestricted() -> Self {
        FilterSpec {
            planet_types: BTreeSet::new(),
            discovery_methods: BTreeSet::new(),
            year_range: i32::MIN..=i32::MAX,
            distance_range: f64::NEG_INFINITY..=f64::INFINITY,
            temperature_range: f64::NEG_INFINITY..=f64::INFINITY,
            radius_range: f64::NEG_INFINITY..=f64::INFINITY,
            habitable_only: false,
        }
    }

    /// A filter spanning exactly the ranges observed in a dataset.
    ///
    /// Dimensions with no observed value stay unrestricted.
    pub fn from_observed(ranges: &ObservedRanges) -> Self {
        let open = Self::unrestricted();
        FilterSpec {
            year_range: ranges.years.clone().unwrap_or(open.year_range),
            distance_range: ranges.distances.clone().unwrap_or(open.distance_range),
            temperature_range: ranges
                .temperatures
                .clone()
                .unwrap_or(open.temperature_range),
            radius_range: ranges.radii.clone().unwrap_or(open.radius_range),
            ..open
        }
    }

    pub fn planet_types(mut self, types: impl IntoIterator<Item = PlanetType>) -> Self {
        self.planet_types = types.into_iter().collect();
        self
    }

    pub fn discovery_methods<S: Into<String>>(
        mut self,
        methods: impl IntoIterator<Item = S>,
    ) -> Self {
        self.discovery_methods = methods.into_iter().map(Into::into).collect();
        self
    }

    pub fn year_range(mut self, min: i32, max: i32) -> Self {
        self.year_range = min..=max;
        self
    }

    pub fn distance_range(mut self, min: f64, max: f64) -> Self {
        self.distance_range = min..=max;
        self
    }

    pub fn temperature_range(mut self, min: f64, max: f64) -> Self {
        self.temperature_range = min..=max;
        self
    }

    pub fn radius_range(mut self, min: f64, max: f64) -> Self {
        self.radius_range = min..=max;
        self
    }

    pub fn habitable_only(mut self, v: bool) -> Self {
        self.habitable_only = v;
        self
    }

    /// Add or remove a planet type from the accepted set.
    pub fn toggle_planet_type(&mut self, planet_type: PlanetType) {
        if !self.planet_types.remove(&planet_type) {
            self.planet_types.insert(planet_type);
        }
    }

    /// Add or remove a discovery method from the accepted set.
    pub fn toggle_discovery_method(&mut self, method: &str) {
        if !self.discovery_methods.remove(method) {
            self.discovery_methods.insert(method.to_string());
        }
    }

    /// Evaluate every predicate on one planet.
    ///
    /// Arguments
    /// ---------
    /// * `planet`: the catalog record
    ///
    /// Return
    /// ------
    /// * `true` when the planet passes every predicate of this filter
    pub fn matches(&self, planet: &PlanetRecord) -> bool {
        if !self.planet_types.is_empty()
            && !self
                .planet_types
                .contains(&categorize_planet_type(planet.radius))
        {
            return false;
        }

        if !self.discovery_methods.is_empty()
            && !planet
                .discovery_method
                .as_ref()
                .is_some_and(|m| self.discovery_methods.contains(m))
        {
            return false;
        }

        if !planet
            .discovery_year
            .is_some_and(|y| self.year_range.contains(&y))
        {
            return false;
        }

        if planet
            .distance_value()
            .is_some_and(|d| !self.distance_range.contains(&d))
        {
            return false;
        }

        if planet
            .equilibrium_temperature_value()
            .is_some_and(|t| !self.temperature_range.contains(&t))
        {
            return false;
        }

        if planet
            .radius_value()
            .is_some_and(|r| !self.radius_range.contains(&r))
        {
            return false;
        }

        !self.habitable_only || is_temperate(planet)
    }

    /// Iterate over the matching planets without cloning them.
    pub fn apply<'a>(
        &'a self,
        planets: &'a [PlanetRecord],
    ) -> impl Iterator<Item = &'a PlanetRecord> + 'a {
        planets.iter().filter(move |p| self.matches(p))
    }
}

/// Keep the planets matching a filter, preserving their order.
///
/// Arguments
/// ---------
/// * `planets`: the collection to filter, left untouched
/// * `spec`: the filter specification
///
/// Return
/// ------
/// * a new vector holding clones of the matching planets
pub fn filter_planets(planets: &[PlanetRecord], spec: &FilterSpec) -> Vec<PlanetRecord> {
    spec.apply(planets).cloned().collect()
}

/// Extent of the values present in a dataset, used to seed the filter controls.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ObservedRanges {
    pub years: Option<RangeInclusive<i32>>,
    pub distances: Option<RangeInclusive<f64>>,
    pub temperatures: Option<RangeInclusive<f64>>,
    pub radii: Option<RangeInclusive<f64>>,
    /// Distinct discovery methods, in order of first appearance
    pub discovery_methods: Vec<String>,
}

fn float_extent(values: impl Iterator<Item = f64>) -> Option<RangeInclusive<f64>> {
    values.fold(None, |acc, v| match acc {
        None => Some(v..=v),
        Some(r) => Some(r.start().min(v)..=r.end().max(v)),
    })
}

impl ObservedRanges {
    /// Scan a dataset for the extent of each filterable dimension.
    ///
    /// Absent and zero values are ignored.
    pub fn from_planets(planets: &[PlanetRecord]) -> Self {
        let years = planets
            .iter()
            .filter_map(|p| p.discovery_year)
            .filter(|y| *y != 0)
            .fold(None, |acc: Option<RangeInclusive<i32>>, y| match acc {
                None => Some(y..=y),
                Some(r) => Some(*r.start().min(&y)..=*r.end().max(&y)),
            });

        let mut discovery_methods: Vec<String> = Vec::new();
        for method in planets.iter().filter_map(PlanetRecord::discovery_method_value) {
            if !discovery_methods.iter().any(|m| m == method) {
                discovery_methods.push(method.to_string());
            }
        }

        ObservedRanges {
            years,
            distances: float_extent(planets.iter().filter_map(PlanetRecord::distance_value)),
            temperatures: float_extent(
                planets
                    .iter()
                    .filter_map(PlanetRecord::equilibrium_temperature_value),
            ),
            radii: float_extent(planets.iter().filter_map(PlanetRecord::radius_value)),
            discovery_methods,
        }
    }
}
