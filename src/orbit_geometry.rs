//! # Orbit geometry for display
//!
//! Discretized 2D orbit paths, drawn with the star at the origin.
//!
//! This is a drawing aid, not an orbit propagator: points are spaced evenly in the
//! parametric angle of the ellipse (not in time), and the ellipse is placed with its focus
//! on the star by shifting it by `-a·e` along x.
//!
//! ```text
//!            y
//!            ▲      b = a·√(1 − e²)
//!        ....|....
//!      .     |     .
//!  ---.------★------.--▶ x       ★ star (focus), ellipse center at (−a·e, 0)
//!      .     |     .
//!        ....|....
//! ```
//!
//! Animation is left to the caller: [`position_at`] samples an existing path from an
//! elapsed time and a period, with no clock of its own.
use nalgebra::Point2;

use crate::{
    constants::{Au, DEFAULT_ORBIT_POINTS, DPI},
    planet::{informative, PlanetRecord},
};

/// A vertex of an orbit path, in the unit of the semi-major axis.
pub type OrbitPoint = Point2<f64>;

/// Generate the vertices of an elliptical orbit with the star at one focus.
///
/// Arguments
/// ---------
/// * `semi_major_axis`: semi-major axis `a`
/// * `eccentricity`: eccentricity `e`, circular orbit when absent
/// * `points`: number of vertices
///
/// Return
/// ------
/// * `points` vertices `(a·cos θ − a·e, b·sin θ)` for `θ = 2πi / points`,
///   or an empty path when the semi-major axis is absent or zero
///
/// Note
/// ----
/// Eccentricities outside `[0, 1)` have no bound ellipse; the semi-minor axis is then
/// clamped to zero and the path collapses onto the major axis.
pub fn generate_orbit_coordinates(
    semi_major_axis: Option<Au>,
    eccentricity: Option<f64>,
    points: usize,
) -> Vec<OrbitPoint> {
    let Some(a) = informative(semi_major_axis) else {
        return Vec::new();
    };
    let e = eccentricity.filter(|e| !e.is_nan()).unwrap_or(0.0);

    let b = a * (1.0 - e * e).max(0.0).sqrt();
    let focus_offset = -a * e;

    (0..points)
        .map(|i| {
            let angle = (i as f64 / points as f64) * DPI;
            OrbitPoint::new(a * angle.cos() + focus_offset, b * angle.sin())
        })
        .collect()
}

/// Orbit path of a catalog planet with [`DEFAULT_ORBIT_POINTS`] vertices.
pub fn planet_orbit(planet: &PlanetRecord) -> Vec<OrbitPoint> {
    generate_orbit_coordinates(
        planet.semi_major_axis,
        Some(planet.eccentricity_or_circular()),
        DEFAULT_ORBIT_POINTS,
    )
}

/// Sample an orbit path at a point in time.
///
/// The fraction of the period elapsed selects the vertex
/// `floor(((elapsed mod period) / period) · len)`.
///
/// Arguments
/// ---------
/// * `path`: the orbit vertices
/// * `elapsed`: time since the animation started
/// * `period`: duration of one revolution, same unit as `elapsed`
///
/// Return
/// ------
/// * the vertex at that time, `None` if the path is empty or the period is not a positive
///   finite number
pub fn position_at(path: &[OrbitPoint], elapsed: f64, period: f64) -> Option<OrbitPoint> {
    if path.is_empty() || !period.is_finite() || period <= 0.0 || !elapsed.is_finite() {
        return None;
    }

    let phase = elapsed.rem_euclid(period) / period;
    let index = ((phase * path.len() as f64).floor() as usize).min(path.len() - 1);
    Some(path[index])
}

/// Scale factor fitting the widest orbit of a set of planets into 40% of a drawing width.
///
/// Planets without semi-major axis are ignored; when none has one the widest orbit is
/// taken as 1.
pub fn orbit_scale_factor(planets: &[PlanetRecord], width: f64) -> f64 {
    let max_orbit = planets
        .iter()
        .filter_map(PlanetRecord::semi_major_axis_value)
        .fold(0.0_f64, f64::max);
    let max_orbit = if max_orbit > 0.0 { max_orbit } else { 1.0 };
    width * 0.4 / max_orbit
}

/// Return a new path with every vertex multiplied by `factor`.
pub fn scale_path(path: &[OrbitPoint], factor: f64) -> Vec<OrbitPoint> {
    path.iter()
        .map(|p| OrbitPoint::new(p.x * factor, p.y * factor))
        .collect()
}

/// Display radius of a planet marker: `4 + 4·log2(R)`, clamped to `[4, 20]`.
pub fn display_radius(radius: Option<f64>) -> f64 {
    match informative(radius) {
        Some(r) => (4.0 + r.log2() * 4.0).clamp(4.0, 20.0),
        None => 4.0,
    }
}
