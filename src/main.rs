#![cfg(all(feature = "cli", feature = "web"))]

use chrono::DateTime;
use clap::{arg, command, Command};
use iss_spotter::{geo, visibility, Observer, Station};
use tracing::warn;

fn cli() -> Command {
    command!()
        .allow_negative_numbers(true)
        .arg(
            arg!(-y --lat <LATITUDE> "Observer's latitude in degrees")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            arg!(-x --lon <LONGITUDE> "Observer's longitude in degrees")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            arg!(-t --time <TIME> "Time of observation YYYY-MM-DDTHH:mm:SS+HH:mm")
                .value_parser(clap::value_parser!(String)),
        )
}

fn main() -> anyhow::Result<()> {
    let args = cli().get_matches();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Observer
    let mut observer = match (args.get_one("lat"), args.get_one("lon")) {
        (Some(lat), Some(lon)) => Observer::new(*lat, *lon)?,
        _ => Observer::from_ip().unwrap_or_else(|e| {
            warn!("Failed to locate observer by IP, assuming (0, 0): {e}");
            Observer::default()
        }),
    };
    if let Some(time) = args.get_one::<String>("time") {
        match DateTime::parse_from_rfc3339(time) {
            Ok(t) => observer.time = t.to_utc(),
            Err(e) => warn!("Failed to parse time: {e}"),
        }
    }

    // Station
    let station = Station::fetch()?;

    // Look
    let look = visibility::assess(station.position, observer.position, observer.time);
    let toward = geo::cardinal(look.azimuth_deg);

    // Output
    println!(
        "Observation {{ time: {} UTC, {} }}",
        observer.time.format("%Y-%m-%d %H:%M:%S"),
        if look.is_night { "night" } else { "day" }
    );
    println!(
        "Observer {{ lat: {:.4} deg, lon: {:.4} deg }}",
        observer.position.latitude(),
        observer.position.longitude()
    );
    println!(
        "Station {{ lat: {:.4} deg, lon: {:.4} deg, fixed: {} UTC }}",
        station.position.latitude(),
        station.position.longitude(),
        station.timestamp.format("%Y-%m-%d %H:%M:%S")
    );
    println!(
        "Look {{ azimuth: {:.1} deg ({toward}), elevation: {:.1} deg, distance: {:.1} km }}",
        look.azimuth_deg, look.elevation_deg, look.distance_km
    );
    if look.is_visible {
        println!(
            "The station is crossing your dark sky. Look {toward}, {:.0} degrees above the horizon!",
            look.elevation_deg
        );
    } else if !look.is_night {
        println!("No sighting: the sky over you is too bright.");
    } else {
        println!("No sighting: the station is too low on your horizon.");
    }

    Ok(())
}
