use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExodashError {
    #[error("Invalid catalog configuration: {0}")]
    InvalidCatalogConfig(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP reqwest error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("Catalog answered with HTTP status {status}: {body}")]
    CatalogStatus { status: u16, body: String },

    #[error("Catalog rejected the query: {0}")]
    CatalogQueryError(String),

    #[error("Unable to decode catalog CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Unable to decode catalog JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid regular expression: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Unknown planet type label: {0}")]
    UnknownPlanetType(String),

    #[error("Unknown data source: {0}")]
    UnknownDataSource(String),

    #[error("Unknown catalog response format: {0}")]
    UnknownResponseFormat(String),

    #[error("Catalog returned no planet records")]
    EmptyCatalog,
}

impl PartialEq for ExodashError {
    fn eq(&self, other: &Self) -> bool {
        use ExodashError::*;
        match (self, other) {
            (InvalidCatalogConfig(a), InvalidCatalogConfig(b)) => a == b,
            (InvalidUrl(a), InvalidUrl(b)) => a == b,
            (
                CatalogStatus {
                    status: s1,
                    body: b1,
                },
                CatalogStatus {
                    status: s2,
                    body: b2,
                },
            ) => s1 == s2 && b1 == b2,
            (CatalogQueryError(a), CatalogQueryError(b)) => a == b,
            (UnknownPlanetType(a), UnknownPlanetType(b)) => a == b,
            (UnknownDataSource(a), UnknownDataSource(b)) => a == b,
            (UnknownResponseFormat(a), UnknownResponseFormat(b)) => a == b,

            // foreign errors are not comparable: same variant is enough
            (ReqwestError(_), ReqwestError(_)) => true,
            (CsvError(_), CsvError(_)) => true,
            (JsonError(_), JsonError(_)) => true,
            (RegexError(_), RegexError(_)) => true,

            (EmptyCatalog, EmptyCatalog) => true,

            _ => false,
        }
    }
}
