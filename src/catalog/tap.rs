//! # TAP catalog client
//!
//! HTTP access to the NASA Exoplanet Archive *Table Access Protocol* service.
//!
//! ## Overview
//!
//! A query is sent as a single GET on the synchronous endpoint with three parameters:
//!
//! | parameter | value                                     |
//! |-----------|-------------------------------------------|
//! | `query`   | ADQL text of a [`CatalogQuery`]           |
//! | `format`  | `json` or `csv` ([`ResponseFormat`])      |
//! | `maxrows` | row limit of the [`crate::env_state::CatalogConfig`] |
//!
//! The body is decoded with `serde_json` (array of objects keyed by column name) or with
//! `csv` (header row of column names). Both map to the same row types thanks to the `serde`
//! renames of [`PlanetRecord`], [`MethodCount`] and [`YearCount`].
//!
//! ## Errors
//!
//! * transport failures and timeouts → [`ExodashError::ReqwestError`]
//! * non-success HTTP status → [`ExodashError::CatalogStatus`]
//! * a VOTable body whose `QUERY_STATUS` is `ERROR` (the service reports rejected ADQL
//!   that way, whatever the requested format) → [`ExodashError::CatalogQueryError`]
//! * undecodable rows → [`ExodashError::JsonError`] / [`ExodashError::CsvError`]
use once_cell::sync::OnceCell;
use regex::Regex;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::{
    catalog::query::CatalogQuery,
    env_state::{ExodashEnv, ResponseFormat},
    exodash_errors::ExodashError,
    planet::PlanetRecord,
    statistics::{MethodCount, YearCount},
};

static QUERY_STATUS_ERROR: OnceCell<Regex> = OnceCell::new();

/// Extract the error message of a VOTable `QUERY_STATUS` error document.
///
/// Return
/// ------
/// * `Ok(Some(message))` if the body is a TAP error document, `Ok(None)` otherwise
pub fn query_status_error(body: &str) -> Result<Option<String>, ExodashError> {
    let regex = QUERY_STATUS_ERROR.get_or_try_init(|| {
        Regex::new(r#"(?s)<INFO[^>]*name="QUERY_STATUS"[^>]*value="ERROR"[^>]*>(.*?)</INFO>"#)
    })?;

    Ok(regex
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string()))
}

/// Decode the rows of a CSV document with a header line.
pub fn decode_csv<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, ExodashError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());

    reader
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(ExodashError::from)
}

/// Decode a TAP response body in the requested format.
///
/// Arguments
/// ---------
/// * `body`: the raw response body
/// * `format`: the format that was requested from the service
///
/// Return
/// ------
/// * the decoded rows, or the first error met (TAP error document included)
pub fn decode_rows<T: DeserializeOwned>(
    body: &str,
    format: ResponseFormat,
) -> Result<Vec<T>, ExodashError> {
    if let Some(message) = query_status_error(body)? {
        return Err(ExodashError::CatalogQueryError(message));
    }

    match format {
        ResponseFormat::Json => Ok(serde_json::from_str(body)?),
        ResponseFormat::Csv => decode_csv(body),
    }
}

/// Client of the remote catalog.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    env: ExodashEnv,
}

impl CatalogClient {
    pub fn new(env: ExodashEnv) -> Self {
        CatalogClient { env }
    }

    pub fn env(&self) -> &ExodashEnv {
        &self.env
    }

    /// Run a query and decode its rows into `T`.
    pub async fn fetch_rows<T: DeserializeOwned>(
        &self,
        query: &CatalogQuery,
    ) -> Result<Vec<T>, ExodashError> {
        let config = &self.env.config;
        let adql = query.to_adql(&config.table);
        debug!(%query, %adql, format = %config.format, "sending catalog query");

        let params = [
            ("query", adql),
            ("format", config.format.as_str().to_string()),
            ("maxrows", config.max_rows.to_string()),
        ];
        let body = self.env.get_from_url(&params).await?;
        decode_rows(&body, config.format)
    }

    /// Run a planet query.
    ///
    /// Return
    /// ------
    /// * the planets in the order returned by the service
    pub async fn fetch(&self, query: &CatalogQuery) -> Result<Vec<PlanetRecord>, ExodashError> {
        let planets: Vec<PlanetRecord> = self.fetch_rows(query).await?;
        info!(%query, count = planets.len(), "catalog planets received");
        Ok(planets)
    }

    /// Fetch one planet by name; `None` when the catalog has no such planet.
    pub async fn fetch_planet_details(
        &self,
        name: &str,
    ) -> Result<Option<PlanetRecord>, ExodashError> {
        let planets = self
            .fetch(&CatalogQuery::PlanetDetails(name.to_string()))
            .await?;
        Ok(planets.into_iter().next())
    }

    /// Planet count per discovery method, most frequent first.
    pub async fn discovery_method_stats(&self) -> Result<Vec<MethodCount>, ExodashError> {
        self.fetch_rows(&CatalogQuery::DiscoveryMethodStats).await
    }

    /// Planet count per discovery year, oldest first.
    pub async fn discovery_timeline_counts(&self) -> Result<Vec<YearCount>, ExodashError> {
        self.fetch_rows(&CatalogQuery::DiscoveryTimeline).await
    }
}
