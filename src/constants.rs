//! # Constants and type definitions for exodash
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! aliases** used throughout the `exodash` library.
//!
//! ## Overview
//!
//! - Reference bodies (Earth, Jupiter, Sun) in SI-ish units
//! - Unit conversions (AU ↔ km, parsec ↔ light year, days ↔ years, Kelvin ↔ Celsius)
//! - Thresholds of the habitability model and of the simplified temperate band
//! - Type aliases naming the unit carried by a bare `f64`
//!
//! These definitions are shared by the classification, habitability, orbit and filter engines.

// -------------------------------------------------------------------------------------------------
// Reference bodies and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, one full revolution in radians
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Earth mass in kilograms
pub const EARTH_MASS_KG: f64 = 5.972e24;

/// Solar effective temperature in Kelvin, reference of the relative luminosity
pub const SOLAR_TEFF: f64 = 5772.0;

/// Astronomical Unit in kilometers (IAU 2012)
pub const AU: f64 = 149_597_870.7;

/// Light years in one parsec
pub const PARSEC_TO_LIGHT_YEARS: f64 = 3.26156;

/// Light years per parsec as rounded by the display formatters
pub const PARSEC_TO_LIGHT_YEARS_DISPLAY: f64 = 3.26;

/// Earth radii in one Jupiter radius
pub const JUPITER_RADIUS_EARTH: f64 = 11.2;

/// Earth masses in one Jupiter mass
pub const JUPITER_MASS_EARTH: f64 = 317.8;

/// Days in a Julian year
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Number of seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Offset between the Kelvin and Celsius scales
pub const KELVIN_OFFSET: f64 = 273.15;

// -------------------------------------------------------------------------------------------------
// Habitability thresholds
// -------------------------------------------------------------------------------------------------

/// Equilibrium temperature (K) scoring the maximum temperature factor
pub const IDEAL_EQUILIBRIUM_TEMPERATURE: f64 = 285.0;

/// Lower bound (K) of the simplified temperate band
pub const TEMPERATE_MIN_K: f64 = 180.0;

/// Upper bound (K) of the simplified temperate band
pub const TEMPERATE_MAX_K: f64 = 310.0;

/// Upper radius bound (Earth radii) of the catalog "potentially habitable" annotation
pub const POTENTIALLY_HABITABLE_MAX_RADIUS: f64 = 2.5;

/// Inner habitable-zone coefficient applied to √L (AU)
pub const HZ_INNER_COEFF: f64 = 0.95;

/// Outer habitable-zone coefficient applied to √L (AU)
pub const HZ_OUTER_COEFF: f64 = 1.67;

/// Number of vertices of an orbit path when none is requested
pub const DEFAULT_ORBIT_POINTS: usize = 100;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Distance in astronomical units
pub type Au = f64;
/// Distance in parsecs
pub type Parsec = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Temperature in Kelvin
pub type Kelvin = f64;
/// Radius in Earth radii
pub type EarthRadii = f64;
/// Mass in Earth masses
pub type EarthMasses = f64;
/// Duration in days
pub type Days = f64;
