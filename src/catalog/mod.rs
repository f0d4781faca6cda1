//! # Planet catalog
//!
//! Where planet records come from:
//!
//! * [`tap`] — the NASA Exoplanet Archive, queried over HTTP with [`query::CatalogQuery`];
//! * [`sample`] — a small catalog bundled in the crate.
//!
//! The dashboard-facing entry point is [`crate::exodash::Exodash::load_planets`], which
//! returns a [`CatalogLoad`] and falls back to the sample whenever the archive fails.
use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::{exodash_errors::ExodashError, planet::PlanetRecord};

pub mod query;
pub mod sample;
pub mod tap;

/// Notice attached to a load that fell back to the bundled sample
pub const FALLBACK_NOTICE: &str = "Failed to fetch data from NASA API. Using sample data instead.";

/// Origin of a planet collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum DataSource {
    /// the bundled sample catalog
    #[default]
    Sample,
    /// the NASA Exoplanet Archive
    Remote,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DataSource::Sample => write!(f, "sample"),
            DataSource::Remote => write!(f, "api"),
        }
    }
}

impl FromStr for DataSource {
    type Err = ExodashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sample" => Ok(DataSource::Sample),
            "api" | "remote" => Ok(DataSource::Remote),
            _ => Err(ExodashError::UnknownDataSource(s.to_string())),
        }
    }
}

/// Result of loading a planet collection.
///
/// # Fields
///
/// * `planets` - the loaded records
/// * `source` - where they actually came from, `Sample` after a fallback
/// * `notice` - user-facing message set when the remote catalog failed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogLoad {
    pub planets: Vec<PlanetRecord>,
    pub source: DataSource,
    pub notice: Option<String>,
}

impl CatalogLoad {
    pub(crate) fn sample(notice: Option<String>) -> Self {
        CatalogLoad {
            planets: sample::sample_planets(),
            source: DataSource::Sample,
            notice,
        }
    }

    /// `true` when a remote load was replaced by the bundled sample.
    pub fn is_fallback(&self) -> bool {
        self.notice.is_some()
    }
}
