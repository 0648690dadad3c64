//! geosmith CLI
//!
//! Command-line front end for street, city and point lookups, plus a few
//! offline helpers for transit IDs and address text.

#![allow(clippy::print_stdout)]

use std::sync::Arc;

use anyhow::Context;
use application::LocationService;
use clap::{Parser, Subcommand, ValueEnum};
use domain::{Assembled, OsmKind, address::sanitize_address, decode_tid, encode_tid};
use infrastructure::{AppConfig, LocationIqAdapter, init_telemetry};
use serde::Serialize;
use tracing::debug;

/// geosmith CLI
#[derive(Parser)]
#[command(name = "geosmith-cli")]
#[command(author, version, about = "Geocoding lookups normalized to streets, cities and points", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// LocationIQ access token, overriding the configuration
    #[arg(long, env = "LOCATIONIQ_TOKEN", hide_env_values = true, global = true)]
    token: Option<String>,

    /// Configuration file name (extension optional)
    #[arg(short, long, default_value = "config", global = true)]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve text to a single street
    Street {
        /// Free-form search text
        text: String,
    },

    /// Resolve text to a single city
    City {
        /// Free-form search text
        text: String,
    },

    /// Look up a point by transit ID
    ///
    /// Example: geosmith-cli point N5200886615
    Point {
        /// Transit ID (N, W or R followed by the OSM id)
        tid: String,
    },

    /// Look up a city by transit ID
    CityByTid {
        /// Transit ID (N, W or R followed by the OSM id)
        tid: String,
    },

    /// Every point matching the text
    Points {
        /// Free-form search text, also used as address prefix filter
        text: String,
    },

    /// Every city matching the text
    Cities {
        /// Free-form search text, also used as address prefix filter
        text: String,
    },

    /// City suggestions for partially typed text
    Autocomplete {
        /// Partially typed city name
        text: String,
    },

    /// Encode or decode transit IDs (offline)
    Tid {
        #[command(subcommand)]
        action: TidAction,
    },

    /// Clean up whitespace in address text (offline)
    Sanitize {
        /// Address text
        text: String,
    },

    /// Print the effective configuration; the access token is never shown
    Config,
}

#[derive(Subcommand)]
enum TidAction {
    /// Build a transit ID from an OSM id and element kind
    Encode {
        /// OSM id
        id: i64,

        /// OSM element kind
        #[arg(value_enum)]
        kind: KindArg,
    },

    /// Split a transit ID into OSM id and element kind
    Decode {
        /// Transit ID, e.g. W123
        tid: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum KindArg {
    Node,
    Way,
    Relation,
}

impl From<KindArg> for OsmKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Node => Self::Node,
            KindArg::Way => Self::Way,
            KindArg::Relation => Self::Relation,
        }
    }
}

/// Lookup result as printed: the places plus any field warnings
#[derive(Serialize)]
struct Output<T> {
    result: T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<String>,
}

#[derive(Serialize)]
struct DecodedTid {
    osm_id: i64,
    kind: OsmKind,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Render a lookup result as pretty JSON
fn render<T: Serialize>(assembled: Assembled<T>) -> serde_json::Result<String> {
    let Assembled { value, errors } = assembled;
    serde_json::to_string_pretty(&Output {
        result: value,
        warnings: errors.iter().map(ToString::to_string).collect(),
    })
}

fn print_result<T: Serialize>(assembled: Assembled<T>) -> anyhow::Result<()> {
    println!("{}", render(assembled)?);
    Ok(())
}

/// Build the location service; only lookups need a valid token
fn connect(config: &AppConfig) -> anyhow::Result<LocationService> {
    config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("Invalid configuration (set --token or GEOSMITH_LOCATIONIQ__ACCESS_TOKEN)")?;
    let adapter = LocationIqAdapter::new(&config.locationiq)?;
    debug!(?adapter, "Connected");
    Ok(LocationService::new(Arc::new(adapter)))
}

fn run_tid(action: TidAction) -> anyhow::Result<()> {
    match action {
        TidAction::Encode { id, kind } => println!("{}", encode_tid(id, kind.into())),
        TidAction::Decode { tid } => {
            let (osm_id, kind) = decode_tid(&tid)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&DecodedTid { osm_id, kind })?
            );
        },
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_from(&cli.config).context("Failed to load configuration")?;
    if let Some(token) = cli.token {
        config = config.with_access_token(token);
    }

    // -v on the command line wins over the configured filter
    let mut telemetry = config.telemetry.clone();
    if cli.verbose > 0 {
        telemetry = telemetry.with_filter(log_filter_from_verbosity(cli.verbose));
    }
    init_telemetry(&telemetry)?;

    match cli.command {
        Commands::Street { text } => {
            print_result(connect(&config)?.get_street_by_text(&text).await?)?;
        },
        Commands::City { text } => {
            print_result(connect(&config)?.get_city_by_text(&text).await?)?;
        },
        Commands::Point { tid } => {
            print_result(connect(&config)?.get_point_by_tid(&tid).await?)?;
        },
        Commands::CityByTid { tid } => {
            print_result(connect(&config)?.get_city_by_tid(&tid).await?)?;
        },
        Commands::Points { text } => {
            print_result(connect(&config)?.get_points_by_search(&text).await?)?;
        },
        Commands::Cities { text } => {
            print_result(connect(&config)?.get_cities_by_search(&text).await?)?;
        },
        Commands::Autocomplete { text } => {
            print_result(connect(&config)?.get_cities_by_autocomplete(&text).await?)?;
        },
        Commands::Tid { action } => run_tid(action)?,
        Commands::Sanitize { text } => println!("{}", sanitize_address(&text)),
        Commands::Config => print!("{}", toml::to_string_pretty(&config)?),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{FieldErrors, FieldParseError, OsmCity};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn log_filter_verbosity() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
        assert_eq!(log_filter_from_verbosity(1), "info");
        assert_eq!(log_filter_from_verbosity(2), "debug");
        assert_eq!(log_filter_from_verbosity(3), "trace");
        assert_eq!(log_filter_from_verbosity(10), "trace");
    }

    #[test]
    fn cli_parses_city() {
        let cli = parse(&["geosmith-cli", "city", "Springfield, IL"]);
        assert!(matches!(cli.command, Commands::City { ref text } if text == "Springfield, IL"));
        assert_eq!(cli.config, "config");
    }

    #[test]
    fn cli_parses_city_by_tid_with_global_flags() {
        let cli = parse(&["geosmith-cli", "city-by-tid", "R62", "-vv", "--token", "pk.1"]);
        assert!(matches!(cli.command, Commands::CityByTid { ref tid } if tid == "R62"));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.token.as_deref(), Some("pk.1"));
    }

    #[test]
    fn cli_parses_tid_encode() {
        let cli = parse(&["geosmith-cli", "tid", "encode", "123", "way"]);
        assert!(matches!(
            cli.command,
            Commands::Tid {
                action: TidAction::Encode {
                    id: 123,
                    kind: KindArg::Way
                }
            }
        ));
        assert_eq!(OsmKind::from(KindArg::Way), OsmKind::Way);
    }

    #[test]
    fn cli_rejects_unknown_kind() {
        assert!(Cli::try_parse_from(["geosmith-cli", "tid", "encode", "1", "area"]).is_err());
    }

    #[test]
    fn cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["geosmith-cli"]).is_err());
    }

    #[test]
    fn render_without_warnings() {
        let city = OsmCity {
            osm_id: 62,
            kind: OsmKind::Relation,
            lat: 39.8,
            lng: -89.6,
            display_name: "Springfield, IL, USA".to_string(),
            address: "Springfield, IL".to_string(),
        };
        let json = render(Assembled::clean(city)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["result"]["osm_id"], 62);
        assert_eq!(value["result"]["kind"], "relation");
        assert!(value.get("warnings").is_none());
    }

    #[test]
    fn render_lists_warnings() {
        let assembled = Assembled {
            value: Vec::<OsmCity>::new(),
            errors: FieldErrors::from(FieldParseError::new("osm_id", "abc", "bad")),
        };
        let value: serde_json::Value = serde_json::from_str(&render(assembled).unwrap()).unwrap();
        assert_eq!(value["warnings"][0], "Invalid osm_id 'abc': bad");
        assert_eq!(value["result"], serde_json::json!([]));
    }
}
