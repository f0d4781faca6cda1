//! # Human-readable formatting of planet measurements
//!
//! Every formatter takes an `Option<f64>` and renders `"Unknown"` when the value is absent.
//! Unlike the numeric engines, a value of `0` is a legitimate display value here and is
//! printed as-is.
//!
//! Formatters pick a primary display unit from the magnitude of the value:
//!
//! | formatter                | switch                                      |
//! |--------------------------|---------------------------------------------|
//! | [`format_distance`]      | `< 1 pc` → light years only; `< 0.01 AU` → km |
//! | [`format_mass`]          | `> 50 M⊕` → Jupiter masses first            |
//! | [`format_radius`]        | `> 10 R⊕` → Jupiter radii first             |
//! | [`format_orbital_period`]| `< 1 d` → hours; `> 365 d` → years first     |
//!
//! Numbers are printed with a fixed number of decimals and `,` thousands separators.
use itertools::Itertools;

use crate::constants::{
    AU, DAYS_PER_YEAR, JUPITER_MASS_EARTH, JUPITER_RADIUS_EARTH, KELVIN_OFFSET,
    PARSEC_TO_LIGHT_YEARS_DISPLAY,
};

/// Placeholder rendered for absent values
pub const UNKNOWN: &str = "Unknown";

/// Unit in which a distance value is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceUnit {
    Parsec,
    Au,
}

/// Unit in which a temperature value is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
}

/// Reference body in which a mass or radius value is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyUnit {
    Earth,
    Jupiter,
}

/// Format a number with `decimals` fractional digits and `,` thousands separators.
///
/// Arguments
/// ---------
/// * `value`: the number to render
/// * `decimals`: the exact number of fractional digits
///
/// Return
/// ------
/// * the rendered string, e.g. `1234567.891` with 2 decimals gives `"1,234,567.89"`
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let raw = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let grouped = digits
        .rchunks(3)
        .rev()
        .map(|chunk| chunk.iter().collect::<String>())
        .join(",");

    // "-0.00" is printed without its sign
    let negative = value < 0.0 && raw.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if negative { "-" } else { "" };

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Format a number with the default two decimals, `"Unknown"` when absent.
pub fn format_optional(value: Option<f64>) -> String {
    value.map_or_else(|| UNKNOWN.to_string(), |v| format_number(v, 2))
}

fn fmt2(value: f64) -> String {
    format_number(value, 2)
}

/// Format a distance, converting parsecs to light years and tiny AU values to kilometers.
///
/// Arguments
/// ---------
/// * `distance`: the distance value, absent renders `"Unknown"`
/// * `unit`: the unit of `distance`
///
/// Return
/// ------
/// * e.g. `"12.43 parsecs (40.52 light years)"`, `"0.50 AU"` or `"299,195.74 kilometers"`
pub fn format_distance(distance: Option<f64>, unit: DistanceUnit) -> String {
    let Some(distance) = distance else {
        return UNKNOWN.to_string();
    };

    match unit {
        DistanceUnit::Parsec if distance < 1.0 => {
            format!(
                "{} light years",
                fmt2(distance * PARSEC_TO_LIGHT_YEARS_DISPLAY)
            )
        }
        DistanceUnit::Parsec => format!(
            "{} parsecs ({} light years)",
            fmt2(distance),
            fmt2(distance * PARSEC_TO_LIGHT_YEARS_DISPLAY)
        ),
        DistanceUnit::Au if distance < 0.01 => {
            format!("{} kilometers", fmt2(distance * AU.round()))
        }
        DistanceUnit::Au => format!("{} AU", fmt2(distance)),
    }
}

/// Format a temperature with its conversion to the other scale in parentheses.
pub fn format_temperature(temperature: Option<f64>, unit: TemperatureUnit) -> String {
    let Some(temperature) = temperature else {
        return UNKNOWN.to_string();
    };

    match unit {
        TemperatureUnit::Kelvin => format!(
            "{} K ({}°C)",
            fmt2(temperature),
            fmt2(temperature - KELVIN_OFFSET)
        ),
        TemperatureUnit::Celsius => format!(
            "{}°C ({} K)",
            fmt2(temperature),
            fmt2(temperature + KELVIN_OFFSET)
        ),
    }
}

/// Format a planet mass, switching to a Jupiter-primary display above 50 Earth masses
/// (or to an Earth-primary display below 0.1 Jupiter masses).
pub fn format_mass(mass: Option<f64>, unit: BodyUnit) -> String {
    let Some(mass) = mass else {
        return UNKNOWN.to_string();
    };

    match unit {
        BodyUnit::Earth if mass > 50.0 => format!(
            "{} Jupiter masses ({} Earth masses)",
            fmt2(mass / JUPITER_MASS_EARTH),
            fmt2(mass)
        ),
        BodyUnit::Earth => format!("{} Earth masses", fmt2(mass)),
        BodyUnit::Jupiter if mass < 0.1 => format!(
            "{} Earth masses ({} Jupiter masses)",
            fmt2(mass * JUPITER_MASS_EARTH),
            fmt2(mass)
        ),
        BodyUnit::Jupiter => format!("{} Jupiter masses", fmt2(mass)),
    }
}

/// Format a planet radius, switching to a Jupiter-primary display above 10 Earth radii
/// (or to an Earth-primary display below 0.2 Jupiter radii).
pub fn format_radius(radius: Option<f64>, unit: BodyUnit) -> String {
    let Some(radius) = radius else {
        return UNKNOWN.to_string();
    };

    match unit {
        BodyUnit::Earth if radius > 10.0 => format!(
            "{} Jupiter radii ({} Earth radii)",
            fmt2(radius / JUPITER_RADIUS_EARTH),
            fmt2(radius)
        ),
        BodyUnit::Earth => format!("{} Earth radii", fmt2(radius)),
        BodyUnit::Jupiter if radius < 0.2 => format!(
            "{} Earth radii ({} Jupiter radii)",
            fmt2(radius * JUPITER_RADIUS_EARTH),
            fmt2(radius)
        ),
        BodyUnit::Jupiter => format!("{} Jupiter radii", fmt2(radius)),
    }
}

/// Format an orbital period given in days.
pub fn format_orbital_period(days: Option<f64>) -> String {
    let Some(days) = days else {
        return UNKNOWN.to_string();
    };

    if days < 1.0 {
        format!("{} hours", fmt2(days * 24.0))
    } else if days > 365.0 {
        format!(
            "{} years ({} days)",
            fmt2(days / DAYS_PER_YEAR),
            fmt2(days)
        )
    } else {
        format!("{} days", fmt2(days))
    }
}
