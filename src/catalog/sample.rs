//! Bundled sample catalog.
//!
//! A small set of well-known planets compiled into the crate, used when the remote catalog
//! cannot be reached. The CSV uses the archive column names, so it decodes exactly like a
//! remote CSV response.
use once_cell::sync::OnceCell;
use tracing::error;

use crate::{
    catalog::tap::decode_csv, exodash_errors::ExodashError, planet::PlanetRecord,
};

const SAMPLE_CSV: &str = include_str!("../../data/sample_exoplanets.csv");

static SAMPLE: OnceCell<Vec<PlanetRecord>> = OnceCell::new();

/// Decode the bundled sample on first use and borrow it.
///
/// Return
/// ------
/// * the sample planets, or the CSV decoding error
pub fn try_sample_planets() -> Result<&'static [PlanetRecord], ExodashError> {
    SAMPLE
        .get_or_try_init(|| decode_csv(SAMPLE_CSV))
        .map(Vec::as_slice)
}

/// A copy of the bundled sample planets.
///
/// Never fails: a sample that does not decode is logged and yields an empty list.
pub fn sample_planets() -> Vec<PlanetRecord> {
    match try_sample_planets() {
        Ok(planets) => planets.to_vec(),
        Err(err) => {
            error!(%err, "bundled sample catalog does not decode");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod sample_test {
    use super::*;
    use crate::habitability::is_temperate;

    #[test]
    fn test_sample_decodes() {
        let planets = try_sample_planets().unwrap();
        assert_eq!(planets.len(), 16);
        assert_eq!(planets[0].name, "Proxima Cen b");
        assert!(planets.iter().all(|p| !p.hostname.is_empty()));
    }

    #[test]
    fn test_sample_content() {
        let planets = sample_planets();
        let temperate = planets.iter().filter(|p| is_temperate(p)).count();
        assert_eq!(temperate, 8);

        let peg = planets.iter().find(|p| p.name == "51 Peg b").unwrap();
        assert_eq!(peg.radius, None);
        assert_eq!(peg.discovery_year, Some(1995));
    }
}
