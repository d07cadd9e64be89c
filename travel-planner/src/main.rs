use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{NaiveDate, NaiveTime};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use travel_planner::domain::{StationId, resolve_station};
use travel_planner::resrobot::{MockTripFetcher, ResRobotClient, ResRobotConfig, TransportError};
use travel_planner::table::{OutputFormat, RenderError, TripTableBuilder, render_tables};
use travel_planner::{PlannerError, TravelPlanner, TripFetcher};

/// Show the stops of upcoming public-transport trips between two stations.
#[derive(Parser, Debug)]
#[command(name = "travel-planner", version, about, long_about = None)]
struct Cli {
    /// Origin: a known station (malmo, goteborg, umea) or a numeric station id
    #[arg(long, default_value = "umea", value_parser = resolve_station)]
    from: StationId,

    /// Destination: a known station or a numeric station id
    #[arg(long, default_value = "goteborg", value_parser = resolve_station)]
    to: StationId,

    /// Show every trip found instead of only the next one
    #[arg(long)]
    all: bool,

    /// Only print the number of trips found
    #[arg(long, conflicts_with = "all")]
    count: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Departure date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Departure time (HH:MM), defaults to now
    #[arg(long, value_parser = parse_hhmm)]
    time: Option<NaiveTime>,

    /// Fail if any stop has neither arrival nor departure data
    #[arg(long)]
    strict: bool,

    /// Serve recorded responses from this directory instead of calling ResRobot
    #[arg(long)]
    mock_dir: Option<PathBuf>,

    /// Trafiklab ResRobot access key
    #[arg(long, env = "RESROBOT_API_KEY", hide_env_values = true)]
    access_key: Option<String>,

    /// ResRobot base URL
    #[arg(long, env = "RESROBOT_BASE_URL")]
    base_url: Option<String>,

    /// Response language (sv, en, de)
    #[arg(long, default_value = "sv")]
    lang: String,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Planner(#[from] PlannerError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl From<TransportError> for CliError {
    fn from(err: TransportError) -> Self {
        CliError::Planner(err.into())
    }
}

fn parse_hhmm(s: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(s, "%H:%M")
}

fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // A missing .env is fine; real environment variables still apply
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_filter_from_verbosity(cli.verbose)));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<(), CliError> {
    let builder = if cli.strict {
        TripTableBuilder::strict()
    } else {
        TripTableBuilder::new()
    };

    let output = match &cli.mock_dir {
        Some(dir) => {
            if cli.date.is_some() || cli.time.is_some() {
                warn!("--date and --time are ignored with --mock-dir");
            }
            let fetcher = MockTripFetcher::new(dir)?;
            query(TravelPlanner::with_builder(fetcher, builder), cli).await?
        }
        None => {
            let access_key = cli.access_key.clone().ok_or_else(|| {
                TransportError::NotConfigured(
                    "RESROBOT_API_KEY is not set (use --access-key or --mock-dir)".to_string(),
                )
            })?;

            let mut config = ResRobotConfig::new(access_key).with_lang(&cli.lang);
            if let Some(base_url) = &cli.base_url {
                config = config.with_base_url(base_url);
            }

            let client = ResRobotClient::new(config)?.departing(cli.date, cli.time);
            query(TravelPlanner::with_builder(client, builder), cli).await?
        }
    };

    let Some(output) = output else {
        eprintln!(
            "No trips found from {} to {}",
            station_label(cli.from),
            station_label(cli.to)
        );
        return Ok(());
    };

    match &cli.output {
        Some(path) => {
            std::fs::write(path, output).map_err(|source| CliError::Write {
                path: path.clone(),
                source,
            })?;
            info!(path = %path.display(), "wrote output");
        }
        None => print!("{output}"),
    }

    Ok(())
}

/// Run the selected query and render it. `None` means no trips were found.
async fn query<F: TripFetcher>(
    planner: TravelPlanner<F>,
    cli: &Cli,
) -> Result<Option<String>, CliError> {
    if cli.count {
        let count = planner.trip_count(cli.from, cli.to).await?;
        return Ok(Some(format!("{count}\n")));
    }

    if cli.all {
        let tables = planner.trip_tables(cli.from, cli.to).await?;
        if tables.is_empty() {
            return Ok(None);
        }
        return Ok(Some(render_tables(&tables, cli.format)?));
    }

    match planner.next_trip_table(cli.from, cli.to).await? {
        Some(table) => Ok(Some(table.render(cli.format)?)),
        None => Ok(None),
    }
}

fn station_label(id: StationId) -> String {
    match id.known() {
        Some(station) => format!("{station} ({id})"),
        None => id.to_string(),
    }
}
