use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use jataka_base::{
    format_dms_with, nakshatra_from_longitude, rashi_from_longitude, try_panchangam,
    vimshottari_dasha,
};
use jataka_chart::{
    BirthRequest, ChartConfig, ChartService, ErrorBody, LoggingConfig, RecordedCollaborators,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(name = "jataka", about = "Birth-chart derivation CLI")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        #[arg(allow_negative_numbers = true)]
        deg: f64,
    },
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Nakshatra from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Panchang from Sun and Moon longitudes
    Panchang {
        /// Sidereal Sun longitude in degrees
        #[arg(long)]
        sun: f64,
        /// Sidereal Moon longitude in degrees
        #[arg(long)]
        moon: f64,
        /// Civil date at the birth place (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// Vimshottari dasha from the Moon's longitude
    Dasha {
        /// Sidereal Moon longitude in degrees
        #[arg(long)]
        moon: f64,
        /// Birth instant (RFC 3339, e.g. 1990-06-15T04:30:00Z)
        #[arg(long)]
        birth: String,
        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Full chart from recorded collaborator output
    Chart {
        /// JSON file with recorded positions, houses and navamsa
        #[arg(long)]
        fixture: PathBuf,
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        month: Option<u32>,
        #[arg(long)]
        day: Option<u32>,
        #[arg(long)]
        hour: Option<u32>,
        #[arg(long)]
        minute: Option<u32>,
        /// Latitude in degrees, north positive
        #[arg(long, allow_negative_numbers = true)]
        lat: Option<f64>,
        /// Longitude in degrees, east positive
        #[arg(long, allow_negative_numbers = true)]
        lon: Option<f64>,
        /// Timezone offset in hours
        #[arg(long, allow_negative_numbers = true)]
        tz: Option<f64>,
    },
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let registry = tracing_subscriber::registry().with(filter);
    if logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<ChartConfig> {
    match path {
        Some(p) => ChartConfig::load(p).with_context(|| format!("loading {}", p.display())),
        None => Ok(ChartConfig::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    init_tracing(&config.logging);
    debug!(path = ?cli.config, style = ?config.dms_style(), "configuration loaded");

    match cli.command {
        Commands::Dms { deg } => {
            println!("{}", format_dms_with(deg, config.dms_style()));
        }

        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            println!(
                "{} ({}, {}) - {} in rashi",
                info.rashi.name(),
                info.rashi.western_name(),
                info.rashi.tamil_name(),
                format_dms_with(info.degrees_in_rashi, config.dms_style())
            );
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            println!(
                "{} (index {}) - Pada {} ({:.4} deg in nakshatra), lord {}",
                info.nakshatra.name(),
                info.nakshatra_index,
                info.pada,
                info.degrees_in_nakshatra,
                info.nakshatra.vimshottari_lord().english_name()
            );
        }

        Commands::Panchang { sun, moon, date } => {
            let date: NaiveDate = date
                .parse()
                .with_context(|| format!("invalid date {date:?}, expected YYYY-MM-DD"))?;
            let nakshatra = nakshatra_from_longitude(moon).nakshatra.name();
            let p = try_panchangam(sun, moon, date, nakshatra)?;
            println!("Tithi:     {}", p.tithi);
            println!("Nakshatra: {}", p.nakshatra);
            println!("Yoga:      {}", p.yoga);
            println!("Karana:    {}", p.karana);
            println!("Vara:      {}", p.vara);
        }

        Commands::Dasha { moon, birth, json } => {
            let birth: DateTime<Utc> = DateTime::parse_from_rfc3339(&birth)
                .with_context(|| format!("invalid birth instant {birth:?}"))?
                .with_timezone(&Utc);
            let dasha = vimshottari_dasha(moon, birth)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&dasha)?);
            } else {
                println!(
                    "{} in {} ({:.2}% crossed), {:.4} years remaining",
                    dasha.current_lord.english_name(),
                    dasha.current_nakshatra,
                    dasha.percentage_in_nakshatra,
                    dasha.remaining_years_in_current_dasha
                );
                for p in &dasha.sequence {
                    println!(
                        "{:<8} {} - {} ({:.4} y){}",
                        p.lord.english_name(),
                        p.start_date.format("%Y-%m-%d"),
                        p.end_date.format("%Y-%m-%d"),
                        p.duration,
                        if p.is_active { " *" } else { "" }
                    );
                }
            }
        }

        Commands::Chart {
            fixture,
            year,
            month,
            day,
            hour,
            minute,
            lat,
            lon,
            tz,
        } => {
            let recorded = RecordedCollaborators::load(&fixture)
                .with_context(|| format!("loading {}", fixture.display()))?;
            let service = ChartService::with_config(&recorded, &recorded, &recorded, config);
            let request = BirthRequest {
                year,
                month,
                day,
                hour,
                minute,
                latitude: lat,
                longitude: lon,
                timezone: tz,
            };
            match service.handle(&request) {
                Ok(envelope) => println!("{}", serde_json::to_string_pretty(&envelope)?),
                Err(e) => {
                    println!("{}", serde_json::to_string_pretty(&ErrorBody::from(&e))?);
                    return Err(e).context("chart request failed");
                }
            }
        }
    }

    Ok(())
}
