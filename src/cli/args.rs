use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "coord-processor")]
#[command(about = "DMS <-> decimal-degree coordinate converter for tabular location data")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert DMS location text to decimal latitude/longitude columns
    ToDecimal {
        #[arg(short, long, help = "Input CSV file with location/latitude/longitude columns")]
        input: PathBuf,

        #[arg(
            short,
            long,
            help = "Output CSV file path [default: {input}-converted.csv]"
        )]
        output: Option<PathBuf>,

        #[arg(long, help = "Write the batch report with per-row failures to a JSON file")]
        report: Option<PathBuf>,

        #[arg(long, default_value = "false")]
        validate_only: bool,

        #[arg(long, default_value = "false", help = "Emit ',' as the seconds decimal separator")]
        decimal_comma: bool,

        #[arg(long, default_value = "false", help = "Zero-pad longitude degrees to three digits")]
        pad_longitude: bool,

        #[arg(
            long,
            default_value = "prefer-source",
            help = "Handling of rows whose DMS text and decimal fields disagree"
        )]
        on_ambiguous: String,
    },

    /// Convert decimal latitude/longitude columns to canonical DMS text
    ToDms {
        #[arg(short, long, help = "Input CSV file with location/latitude/longitude columns")]
        input: PathBuf,

        #[arg(
            short,
            long,
            help = "Output CSV file path [default: {input}-converted.csv]"
        )]
        output: Option<PathBuf>,

        #[arg(long, help = "Write the batch report with per-row failures to a JSON file")]
        report: Option<PathBuf>,

        #[arg(long, default_value = "false")]
        validate_only: bool,

        #[arg(long, default_value = "false", help = "Emit ',' as the seconds decimal separator")]
        decimal_comma: bool,

        #[arg(long, default_value = "false", help = "Zero-pad longitude degrees to three digits")]
        pad_longitude: bool,

        #[arg(
            long,
            default_value = "prefer-source",
            help = "Handling of rows whose DMS text and decimal fields disagree"
        )]
        on_ambiguous: String,
    },

    /// Convert a single coordinate and print the result
    Convert {
        #[arg(short, long, help = "Combined DMS string to convert to decimal degrees")]
        text: Option<String>,

        #[arg(long, allow_hyphen_values = true, help = "Decimal latitude ('.' or ',' separator)")]
        lat: Option<String>,

        #[arg(long, allow_hyphen_values = true, help = "Decimal longitude ('.' or ',' separator)")]
        lon: Option<String>,

        #[arg(long, default_value = "false", help = "Emit ',' as the seconds decimal separator")]
        decimal_comma: bool,

        #[arg(long, default_value = "false", help = "Zero-pad longitude degrees to three digits")]
        pad_longitude: bool,
    },
}
