//! ADQL queries sent to the archive TAP service.
//!
//! Every planet query restricts the table to the default parameter set of each planet
//! (`default_flag = 1`), so one row is returned per planet.
use std::fmt;

/// Columns selected by the planet queries, in the order of [`crate::planet::PlanetRecord`].
pub const PLANET_COLUMNS: [&str; 16] = [
    "pl_name",
    "hostname",
    "discoverymethod",
    "disc_year",
    "pl_orbper",
    "pl_orbsmax",
    "pl_rade",
    "pl_bmasse",
    "pl_eqt",
    "st_spectype",
    "st_rad",
    "st_mass",
    "st_teff",
    "st_dist",
    "sy_pnum",
    "pl_orbeccen",
];

/// A query supported by the catalog client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogQuery {
    /// every confirmed planet, latest discoveries first
    ConfirmedPlanets,
    /// planets discovered between two years (inclusive), oldest first
    ByYearRange { start: i32, end: i32 },
    /// planets whose discovery method contains the given text
    ByDiscoveryMethod(String),
    /// temperate planets smaller than 2.5 Earth radii, coolest first
    PotentiallyHabitable,
    /// all the columns of one planet
    PlanetDetails(String),
    /// planets orbiting one host star, innermost first
    PlanetsInSystem(String),
    /// number of planets per discovery method
    DiscoveryMethodStats,
    /// number of planets per discovery year
    DiscoveryTimeline,
}

/// Quote a string literal for ADQL, doubling embedded single quotes.
pub fn adql_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

impl CatalogQuery {
    /// Render the ADQL text of the query against `table`.
    ///
    /// Arguments
    /// ---------
    /// * `table`: the catalog table, `ps` for the Planetary Systems table
    ///
    /// Return
    /// ------
    /// * a single-line ADQL statement
    pub fn to_adql(&self, table: &str) -> String {
        let columns = PLANET_COLUMNS.join(", ");
        let select = format!("SELECT {columns} FROM {table} WHERE default_flag = 1");

        match self {
            CatalogQuery::ConfirmedPlanets => format!("{select} ORDER BY disc_year DESC"),
            CatalogQuery::ByYearRange { start, end } => {
                format!("{select} AND disc_year BETWEEN {start} AND {end} ORDER BY disc_year ASC")
            }
            CatalogQuery::ByDiscoveryMethod(method) => format!(
                "{select} AND discoverymethod LIKE {} ORDER BY disc_year DESC",
                adql_literal(&format!("%{method}%"))
            ),
            CatalogQuery::PotentiallyHabitable => format!(
                "{select} AND pl_eqt BETWEEN 180 AND 310 AND pl_rade < 2.5 \
                 AND pl_rade IS NOT NULL AND pl_eqt IS NOT NULL ORDER BY pl_eqt ASC"
            ),
            CatalogQuery::PlanetDetails(name) => format!(
                "SELECT * FROM {table} WHERE default_flag = 1 AND pl_name = {}",
                adql_literal(name)
            ),
            CatalogQuery::PlanetsInSystem(host) => format!(
                "{select} AND hostname = {} ORDER BY pl_orbsmax ASC",
                adql_literal(host)
            ),
            CatalogQuery::DiscoveryMethodStats => format!(
                "SELECT discoverymethod, COUNT(*) as count FROM {table} WHERE default_flag = 1 \
                 GROUP BY discoverymethod ORDER BY count DESC"
            ),
            CatalogQuery::DiscoveryTimeline => format!(
                "SELECT disc_year, COUNT(*) as count FROM {table} WHERE default_flag = 1 \
                 AND disc_year IS NOT NULL GROUP BY disc_year ORDER BY disc_year ASC"
            ),
        }
    }
}

impl fmt::Display for CatalogQuery {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CatalogQuery::ConfirmedPlanets => write!(f, "confirmed planets"),
            CatalogQuery::ByYearRange { start, end } => {
                write!(f, "planets discovered in {start}-{end}")
            }
            CatalogQuery::ByDiscoveryMethod(m) => write!(f, "planets found by {m}"),
            CatalogQuery::PotentiallyHabitable => write!(f, "potentially habitable planets"),
            CatalogQuery::PlanetDetails(name) => write!(f, "details of {name}"),
            CatalogQuery::PlanetsInSystem(host) => write!(f, "planets of {host}"),
            CatalogQuery::DiscoveryMethodStats => write!(f, "discovery method statistics"),
            CatalogQuery::DiscoveryTimeline => write!(f, "discovery timeline"),
        }
    }
}
