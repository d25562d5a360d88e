use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::cli::args::{Cli, Commands};
use crate::converters::{ConversionPolicy, CoordinateConverter};
use crate::error::{ProcessingError, Result};
use crate::models::{Axis, GeoCoordinate};
use crate::parsers::parse_decimal_degrees;
use crate::processors::{BatchMapper, Direction};
use crate::readers::RowReader;
use crate::utils::filename::generate_default_output_filename;
use crate::writers::RowWriter;

pub fn run(cli: Cli) -> Result<()> {
    setup_logging(cli.verbose);

    match cli.command {
        Commands::ToDecimal {
            input,
            output,
            report,
            validate_only,
            decimal_comma,
            pad_longitude,
            on_ambiguous,
        } => {
            let policy = build_policy(decimal_comma, pad_longitude, &on_ambiguous)?;
            run_batch(
                input,
                output,
                report,
                validate_only,
                policy,
                Direction::TextToDecimal,
            )
        }

        Commands::ToDms {
            input,
            output,
            report,
            validate_only,
            decimal_comma,
            pad_longitude,
            on_ambiguous,
        } => {
            let policy = build_policy(decimal_comma, pad_longitude, &on_ambiguous)?;
            run_batch(
                input,
                output,
                report,
                validate_only,
                policy,
                Direction::DecimalToText,
            )
        }

        Commands::Convert {
            text,
            lat,
            lon,
            decimal_comma,
            pad_longitude,
        } => {
            let policy = build_policy(decimal_comma, pad_longitude, "prefer-source")?;
            run_convert(text, lat, lon, policy)
        }
    }
}

fn build_policy(
    decimal_comma: bool,
    pad_longitude: bool,
    on_ambiguous: &str,
) -> Result<ConversionPolicy> {
    ConversionPolicy::new()
        .with_decimal_comma(decimal_comma)
        .with_padded_longitude(pad_longitude)
        .with_ambiguity(on_ambiguous)
}

fn run_batch(
    input: PathBuf,
    output: Option<PathBuf>,
    report_path: Option<PathBuf>,
    validate_only: bool,
    policy: ConversionPolicy,
    direction: Direction,
) -> Result<()> {
    println!("Converting location data...");
    println!("Input file: {}", input.display());

    let spinner = new_spinner("Converting rows...");

    let reader = RowReader::new();
    let rows = reader.read_rows(&input)?;

    let mapper = BatchMapper::with_policy(policy);
    let report = mapper.map_rows(&rows, direction);

    spinner.finish_with_message(format!("Processed {} rows", rows.len()));

    println!("\n{}", report.summary());

    if let Some(path) = report_path {
        let writer = RowWriter::new();
        writer.write_report_json(&path, &report)?;
        println!("\nBatch report written to {}", path.display());
    }

    if validate_only {
        println!("\nValidation complete - no output file written");
        return Ok(());
    }

    let output = output.unwrap_or_else(|| generate_default_output_filename(&input));

    // Create output directory if it doesn't exist
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let writer = RowWriter::new();
    writer.write_rows(&output, &rows, &report)?;

    println!("\nConverted data written to {}", output.display());

    if report.failed_rows == 0 {
        println!("Processing complete!");
    } else {
        println!(
            "Processing complete with {} failing rows - original cells were left unchanged",
            report.failed_rows
        );
    }

    Ok(())
}

fn run_convert(
    text: Option<String>,
    lat: Option<String>,
    lon: Option<String>,
    policy: ConversionPolicy,
) -> Result<()> {
    let converter = CoordinateConverter::with_policy(policy);

    match (text, lat, lon) {
        (Some(text), None, None) => {
            match converter.text_to_coordinate(&text) {
                Ok((coordinate, canonical)) => {
                    println!("latitude:  {:.8}", coordinate.latitude);
                    println!("longitude: {:.8}", coordinate.longitude);
                    println!("canonical: {}", canonical);
                    Ok(())
                }
                Err(pair_error) => {
                    // A lone DMS group is accepted when only one coordinate
                    // was given; its hemisphere letter selects the axis
                    for axis in [Axis::Latitude, Axis::Longitude] {
                        if let Ok((decimal, canonical)) = converter.text_to_axis(&text, axis) {
                            println!("{}: {:.8}", axis.name(), decimal);
                            println!("canonical: {}", canonical);
                            return Ok(());
                        }
                    }
                    Err(pair_error)
                }
            }
        }

        (None, Some(lat), Some(lon)) => {
            let coordinate = GeoCoordinate::new(
                parse_decimal_degrees(&lat)?,
                parse_decimal_degrees(&lon)?,
            );
            println!("{}", converter.coordinate_to_text(&coordinate)?);
            Ok(())
        }

        (None, Some(lat), None) => {
            let decimal = parse_decimal_degrees(&lat)?;
            println!("{}", converter.axis_to_text(decimal, Axis::Latitude)?);
            Ok(())
        }

        (None, None, Some(lon)) => {
            let decimal = parse_decimal_degrees(&lon)?;
            println!("{}", converter.axis_to_text(decimal, Axis::Longitude)?);
            Ok(())
        }

        _ => Err(ProcessingError::Config(
            "provide --text, or --lat and/or --lon".to_string(),
        )),
    }
}

fn new_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Set up structured logging on stderr, leaving stdout for results.
fn setup_logging(verbose: bool) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("coord_processor={}", level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("logging initialized at level: {}", level);
}
