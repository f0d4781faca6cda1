//! # Planet and star classification
//!
//! Size classes of planets and spectral classes of host stars, with the display colors the
//! dashboard associates to each of them.
//!
//! ## Planet size classes
//!
//! [`categorize_planet_type`] buckets a planet by its radius (Earth radii). Bands have an
//! inclusive lower bound and an exclusive upper bound and are evaluated in ascending order:
//!
//! ```text
//!   0 ── 0.5 ──── 1.6 ─────────── 4 ────────── 10 ─────────▶ R⊕
//!   Sub-Earth  Earth-like  Super-Earth/   Neptune-like   Gas Giant
//!                          Mini-Neptune
//! ```
//!
//! A radius that is absent, zero or NaN classifies as [`PlanetType::Unknown`].
//!
//! ## Spectral classes
//!
//! Only the first letter of the catalog spectral type (`"G2 V"`, `"M4.5"`, `"K0 IV-V"`)
//! is significant; see [`SpectralClass::from_spectral_type`].
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{constants::EarthRadii, exodash_errors::ExodashError, planet::informative};

/// Size class of a planet, derived from its radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlanetType {
    #[serde(rename = "Sub-Earth")]
    SubEarth,
    #[serde(rename = "Earth-like")]
    EarthLike,
    #[serde(rename = "Super-Earth/Mini-Neptune")]
    SuperEarth,
    #[serde(rename = "Neptune-like")]
    NeptuneLike,
    #[serde(rename = "Gas Giant")]
    GasGiant,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl PlanetType {
    /// The five size classes a measured radius can fall in, smallest first.
    pub const SIZE_CLASSES: [PlanetType; 5] = [
        PlanetType::SubEarth,
        PlanetType::EarthLike,
        PlanetType::SuperEarth,
        PlanetType::NeptuneLike,
        PlanetType::GasGiant,
    ];

    /// Display label, as used by the dashboard and in filter specifications.
    pub fn label(&self) -> &'static str {
        match self {
            PlanetType::SubEarth => "Sub-Earth",
            PlanetType::EarthLike => "Earth-like",
            PlanetType::SuperEarth => "Super-Earth/Mini-Neptune",
            PlanetType::NeptuneLike => "Neptune-like",
            PlanetType::GasGiant => "Gas Giant",
            PlanetType::Unknown => "Unknown",
        }
    }

    /// Hex display color of the class.
    pub fn color(&self) -> &'static str {
        match self {
            PlanetType::SubEarth => "#6BAED6",
            PlanetType::EarthLike => "#41AB5D",
            PlanetType::SuperEarth => "#4292C6",
            PlanetType::NeptuneLike => "#2171B5",
            PlanetType::GasGiant => "#F16913",
            PlanetType::Unknown => "#969696",
        }
    }
}

impl fmt::Display for PlanetType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for PlanetType {
    type Err = ExodashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [PlanetType::Unknown]
            .into_iter()
            .chain(PlanetType::SIZE_CLASSES)
            .find(|t| t.label() == s.trim())
            .ok_or_else(|| ExodashError::UnknownPlanetType(s.to_string()))
    }
}

/// Categorize a planet by its radius.
///
/// Arguments
/// ---------
/// * `radius`: planet radius in Earth radii
///
/// Return
/// ------
/// * the first band whose exclusive upper bound exceeds the radius, or
///   [`PlanetType::Unknown`] when the radius is absent, zero or NaN
pub fn categorize_planet_type(radius: Option<EarthRadii>) -> PlanetType {
    let Some(r) = informative(radius) else {
        return PlanetType::Unknown;
    };

    if r < 0.5 {
        PlanetType::SubEarth
    } else if r < 1.6 {
        PlanetType::EarthLike
    } else if r < 4.0 {
        PlanetType::SuperEarth
    } else if r < 10.0 {
        PlanetType::NeptuneLike
    } else {
        PlanetType::GasGiant
    }
}

/// Display color for a planet radius, shortcut for `categorize_planet_type(r).color()`.
pub fn planet_type_color(radius: Option<EarthRadii>) -> &'static str {
    categorize_planet_type(radius).color()
}

/// Harvard spectral class of a host star.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpectralClass {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
    Other,
}

impl SpectralClass {
    /// Read the class from the first letter of a catalog spectral type.
    ///
    /// The match is case sensitive: `"G2 V"` is [`SpectralClass::G`], `"g2"` or `"DA"` are
    /// [`SpectralClass::Other`].
    pub fn from_spectral_type(spectral_type: &str) -> Self {
        match spectral_type.chars().next() {
            Some('O') => SpectralClass::O,
            Some('B') => SpectralClass::B,
            Some('A') => SpectralClass::A,
            Some('F') => SpectralClass::F,
            Some('G') => SpectralClass::G,
            Some('K') => SpectralClass::K,
            Some('M') => SpectralClass::M,
            _ => SpectralClass::Other,
        }
    }

    /// Approximate photospheric color of the class.
    pub fn color(&self) -> &'static str {
        match self {
            SpectralClass::O => "#9BB0FF",
            SpectralClass::B => "#AAC4FF",
            SpectralClass::A => "#CAD7FF",
            SpectralClass::F => "#F8F7FF",
            SpectralClass::G => "#FFF4EA",
            SpectralClass::K => "#FFD2A1",
            SpectralClass::M => "#FFCC6F",
            SpectralClass::Other => "#FFFFFF",
        }
    }
}

impl fmt::Display for SpectralClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            SpectralClass::O => "O",
            SpectralClass::B => "B",
            SpectralClass::A => "A",
            SpectralClass::F => "F",
            SpectralClass::G => "G",
            SpectralClass::K => "K",
            SpectralClass::M => "M",
            SpectralClass::Other => "Other",
        };
        write!(f, "{}", str)
    }
}

/// Display color of a host star, white when the spectral type is absent.
pub fn star_type_color(spectral_type: Option<&str>) -> &'static str {
    spectral_type
        .filter(|s| !s.is_empty())
        .map(SpectralClass::from_spectral_type)
        .unwrap_or(SpectralClass::Other)
        .color()
}

#[cfg(test)]
mod classification_test {
    use super::*;

    #[test]
    fn test_reference_radii() {
        assert_eq!(categorize_planet_type(Some(1.0)), PlanetType::EarthLike);
        assert_eq!(categorize_planet_type(Some(11.2)), PlanetType::GasGiant);
        assert_eq!(categorize_planet_type(Some(0.383)), PlanetType::SubEarth);
        assert_eq!(categorize_planet_type(Some(2.74)), PlanetType::SuperEarth);
        assert_eq!(categorize_planet_type(Some(3.88)), PlanetType::SuperEarth);
        assert_eq!(categorize_planet_type(Some(4.01)), PlanetType::NeptuneLike);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(categorize_planet_type(Some(0.4999)), PlanetType::SubEarth);
        assert_eq!(categorize_planet_type(Some(0.5)), PlanetType::EarthLike);
        assert_eq!(categorize_planet_type(Some(1.6)), PlanetType::SuperEarth);
        assert_eq!(categorize_planet_type(Some(4.0)), PlanetType::NeptuneLike);
        assert_eq!(categorize_planet_type(Some(10.0)), PlanetType::GasGiant);
    }

    #[test]
    fn test_unknown_radius() {
        assert_eq!(categorize_planet_type(None), PlanetType::Unknown);
        assert_eq!(categorize_planet_type(Some(0.0)), PlanetType::Unknown);
        assert_eq!(categorize_planet_type(Some(f64::NAN)), PlanetType::Unknown);
        assert_eq!(planet_type_color(None), "#969696");
    }

    #[test]
    fn test_label_round_trip() {
        for t in PlanetType::SIZE_CLASSES {
            assert_eq!(t.label().parse::<PlanetType>().unwrap(), t);
        }
        assert_eq!(
            "Hot Jupiter".parse::<PlanetType>(),
            Err(ExodashError::UnknownPlanetType("Hot Jupiter".into()))
        );
        assert_eq!(
            serde_json::to_string(&PlanetType::SuperEarth).unwrap(),
            "\"Super-Earth/Mini-Neptune\""
        );
    }

    #[test]
    fn test_spectral_class() {
        assert_eq!(SpectralClass::from_spectral_type("G2 V"), SpectralClass::G);
        assert_eq!(SpectralClass::from_spectral_type("K0 IV-V"), SpectralClass::K);
        assert_eq!(SpectralClass::from_spectral_type("M4.5"), SpectralClass::M);
        assert_eq!(SpectralClass::from_spectral_type("g2"), SpectralClass::Other);
        assert_eq!(star_type_color(Some("F9 V")), "#F8F7FF");
        assert_eq!(star_type_color(None), "#FFFFFF");
        assert_eq!(star_type_color(Some("")), "#FFFFFF");
    }
}
