use crate::constants::{
    Au, Days, EarthMasses, EarthRadii, Kelvin, Kilometer, Parsec, AU, DAYS_PER_YEAR,
    EARTH_MASS_KG, EARTH_RADIUS_KM, JUPITER_MASS_EARTH, JUPITER_RADIUS_EARTH, KELVIN_OFFSET,
    PARSEC_TO_LIGHT_YEARS,
};
use crate::planet::informative;

/// Convert a distance in parsecs to light years
///
/// Arguments
/// ---------
/// * `parsecs`: the distance in parsecs
///
/// Return
/// ------
/// * the distance in light years, `None` if the input carries no value
pub fn parsecs_to_light_years(parsecs: Option<Parsec>) -> Option<f64> {
    informative(parsecs).map(|pc| pc * PARSEC_TO_LIGHT_YEARS)
}

pub fn light_years_to_parsecs(light_years: f64) -> Parsec {
    light_years / PARSEC_TO_LIGHT_YEARS
}

/// Convert a radius in Earth radii to kilometers, `None` on absent input
pub fn earth_radii_to_km(earth_radii: Option<EarthRadii>) -> Option<Kilometer> {
    informative(earth_radii).map(|r| r * EARTH_RADIUS_KM)
}

/// Convert a mass in Earth masses to kilograms, `None` on absent input
pub fn earth_masses_to_kg(earth_masses: Option<EarthMasses>) -> Option<f64> {
    informative(earth_masses).map(|m| m * EARTH_MASS_KG)
}

/// Convert astronomical units to kilometers, `None` on absent input
pub fn au_to_km(au: Option<Au>) -> Option<Kilometer> {
    informative(au).map(|a| a * AU)
}

/// Convert an orbital period in days to Julian years, `None` on absent input
pub fn days_to_years(days: Option<Days>) -> Option<f64> {
    informative(days).map(|d| d / DAYS_PER_YEAR)
}

pub fn earth_to_jupiter_radii(radius: EarthRadii) -> f64 {
    radius / JUPITER_RADIUS_EARTH
}

pub fn jupiter_to_earth_radii(radius: f64) -> EarthRadii {
    radius * JUPITER_RADIUS_EARTH
}

pub fn earth_to_jupiter_masses(mass: EarthMasses) -> f64 {
    mass / JUPITER_MASS_EARTH
}

pub fn jupiter_to_earth_masses(mass: f64) -> EarthMasses {
    mass * JUPITER_MASS_EARTH
}

pub fn kelvin_to_celsius(kelvin: Kelvin) -> f64 {
    kelvin - KELVIN_OFFSET
}

pub fn celsius_to_kelvin(celsius: f64) -> Kelvin {
    celsius + KELVIN_OFFSET
}
