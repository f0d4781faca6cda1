//! # Exodash: catalog access with sample fallback
//!
//! This module defines [`Exodash`](crate::exodash::Exodash), the façade the dashboard talks
//! to. It wires together:
//!
//! 1. **Environment state** ([`ExodashEnv`](crate::env_state::ExodashEnv)) — catalog settings
//!    and the HTTP client.
//! 2. **Catalog client** ([`CatalogClient`](crate::catalog::tap::CatalogClient)) — TAP
//!    queries and response decoding.
//! 3. **Bundled sample** ([`sample_planets`](crate::catalog::sample::sample_planets)) — the
//!    collection served when the archive is unreachable.
//!
//! ## Typical usage
//!
//! ```rust, no_run
//! use exodash::exodash::Exodash;
//! use exodash::catalog::DataSource;
//!
//! # async fn run() -> Result<(), exodash::exodash_errors::ExodashError> {
//! let exodash = Exodash::with_defaults()?;
//!
//! // Never fails: falls back to the bundled sample on any remote error
//! let load = exodash.load_planets(DataSource::Remote).await;
//! if let Some(notice) = &load.notice {
//!     eprintln!("{notice}");
//! }
//! println!("{} planets from {}", load.planets.len(), load.source);
//! # Ok(())
//! # }
//! ```
//!
//! ## Notes
//!
//! - A remote load returning zero planets is treated like a failure: an empty dashboard is
//!   never more useful than the sample.
//! - The direct query methods ([`fetch`](Exodash::fetch) and friends) do **not** fall back;
//!   they surface every failure as an [`ExodashError`].
use tracing::{info, warn};

use crate::{
    catalog::{
        query::CatalogQuery, tap::CatalogClient, CatalogLoad, DataSource, FALLBACK_NOTICE,
    },
    env_state::{CatalogConfig, ExodashEnv},
    exodash_errors::ExodashError,
    planet::PlanetRecord,
    statistics::{MethodCount, YearCount},
};

#[derive(Debug, Clone)]
pub struct Exodash {
    client: CatalogClient,
}

impl Exodash {
    /// Construct a new [`Exodash`] context.
    ///
    /// Arguments
    /// -----------------
    /// * `config`: the validated catalog settings
    ///
    /// Return
    /// ----------
    /// * A new [`Exodash`] instance or an [`ExodashError`] if the HTTP client cannot be built.
    pub fn new(config: CatalogConfig) -> Result<Self, ExodashError> {
        Ok(Exodash {
            client: CatalogClient::new(ExodashEnv::new(config)?),
        })
    }

    /// Construct a context querying the public archive with the default settings.
    pub fn with_defaults() -> Result<Self, ExodashError> {
        Self::new(CatalogConfig::default())
    }

    pub fn client(&self) -> &CatalogClient {
        &self.client
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.client.env().config
    }

    pub async fn fetch(&self, query: &CatalogQuery) -> Result<Vec<PlanetRecord>, ExodashError> {
        self.client.fetch(query).await
    }

    pub async fn fetch_planet_details(
        &self,
        name: &str,
    ) -> Result<Option<PlanetRecord>, ExodashError> {
        self.client.fetch_planet_details(name).await
    }

    pub async fn discovery_method_stats(&self) -> Result<Vec<MethodCount>, ExodashError> {
        self.client.discovery_method_stats().await
    }

    pub async fn discovery_timeline_counts(&self) -> Result<Vec<YearCount>, ExodashError> {
        self.client.discovery_timeline_counts().await
    }

    /// Load the planet collection of the dashboard.
    ///
    /// Arguments
    /// -----------------
    /// * `source`: the requested data source
    ///
    /// Return
    /// ----------
    /// * [`DataSource::Sample`]: the bundled sample, no notice.
    /// * [`DataSource::Remote`]: every confirmed planet of the archive. If the request fails
    ///   or returns no planet, the bundled sample with `source = Sample` and the notice
    ///   [`FALLBACK_NOTICE`].
    pub async fn load_planets(&self, source: DataSource) -> CatalogLoad {
        if source == DataSource::Sample {
            return CatalogLoad::sample(None);
        }

        match self.client.fetch(&CatalogQuery::ConfirmedPlanets).await {
            Ok(planets) if !planets.is_empty() => {
                info!(count = planets.len(), "loaded planets from the archive");
                CatalogLoad {
                    planets,
                    source: DataSource::Remote,
                    notice: None,
                }
            }
            Ok(_) => {
                warn!(err = %ExodashError::EmptyCatalog, "falling back to the sample catalog");
                CatalogLoad::sample(Some(FALLBACK_NOTICE.to_string()))
            }
            Err(err) => {
                warn!(%err, "falling back to the sample catalog");
                CatalogLoad::sample(Some(FALLBACK_NOTICE.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod exodash_test {
    use super::*;

    #[tokio::test]
    async fn test_sample_source_does_not_touch_network() {
        // unroutable endpoint: any request would fail
        let config = CatalogConfig::builder()
            .base_url("http://127.0.0.1:9/TAP/sync")
            .build()
            .unwrap();
        let exodash = Exodash::new(config).unwrap();

        let load = exodash.load_planets(DataSource::Sample).await;
        assert_eq!(load.source, DataSource::Sample);
        assert_eq!(load.notice, None);
        assert_eq!(load.planets.len(), 16);
    }

    #[tokio::test]
    async fn test_unreachable_archive_falls_back() {
        let config = CatalogConfig::builder()
            .base_url("http://127.0.0.1:9/TAP/sync")
            .timeout(std::time::Duration::from_secs(2))
            .build()
            .unwrap();
        let exodash = Exodash::new(config).unwrap();

        let load = exodash.load_planets(DataSource::Remote).await;
        assert_eq!(load.source, DataSource::Sample);
        assert_eq!(load.notice.as_deref(), Some(FALLBACK_NOTICE));
        assert!(!load.planets.is_empty());
    }
}
