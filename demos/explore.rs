use std::env;

use exodash::catalog::DataSource;
use exodash::classification::categorize_planet_type;
use exodash::exodash::Exodash;
use exodash::exodash_errors::ExodashError;
use exodash::filter::{filter_planets, FilterSpec};
use exodash::formatting::{
    format_distance, format_orbital_period, format_radius, format_temperature, BodyUnit,
    DistanceUnit, TemperatureUnit,
};
use exodash::habitability::{
    calculate_habitability_score, is_in_habitable_zone, ScoreCategory,
};
use exodash::statistics::{discovery_method_counts, discovery_method_info};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Load a planet collection, keep the temperate planets and print a short report.
///
/// Usage: `cargo run --example explore -- [sample|api] [--verbose]`
#[tokio::main]
async fn main() -> Result<(), ExodashError> {
    let mut args = env::args().skip(1).collect::<Vec<_>>();
    let verbose = if let Some(pos) = args.iter().position(|a| a == "--verbose") {
        args.remove(pos);
        true
    } else {
        false
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("exodash=debug,warn")
        } else {
            EnvFilter::new("exodash=info,warn")
        }
    });
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let source = match args.first() {
        Some(s) => s.parse::<DataSource>()?,
        None => DataSource::Sample,
    };

    let exodash = Exodash::with_defaults()?;
    let load = exodash.load_planets(source).await;
    if let Some(notice) = &load.notice {
        eprintln!("[explore] {notice}");
    }
    println!(
        "[explore] {} planets loaded from {}",
        load.planets.len(),
        load.source
    );

    for count in discovery_method_counts(&load.planets) {
        let info = discovery_method_info(&count.method);
        println!("  {:<28} {:>6}", info.display_name, count.count);
    }

    let spec = FilterSpec::unrestricted().habitable_only(true);
    let temperate = filter_planets(&load.planets, &spec);
    println!("\n[explore] {} temperate planets", temperate.len());

    for planet in &temperate {
        let score = calculate_habitability_score(planet);
        println!(
            "\n{} ({})\n  score    {} ({})\n  zone     {}\n  radius   {}\n  eq temp  {}\n  period   {}\n  distance {}",
            planet.name,
            categorize_planet_type(planet.radius),
            score,
            ScoreCategory::from_score(f64::from(score)).label(),
            if is_in_habitable_zone(planet) {
                "inside the conservative habitable zone"
            } else {
                "outside or unknown"
            },
            format_radius(planet.radius, BodyUnit::Earth),
            format_temperature(planet.equilibrium_temperature, TemperatureUnit::Kelvin),
            format_orbital_period(planet.orbital_period),
            format_distance(planet.distance, DistanceUnit::Parsec),
        );
    }

    Ok(())
}
