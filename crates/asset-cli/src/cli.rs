//! CLI argument definitions for the asset import tool.

use std::path::PathBuf;

use asset_cli::overrides::{MappingOverride, parse_mapping_override};
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "asset-import",
    version,
    about = "Asset register CSV import - map, validate and normalize asset spreadsheets",
    long_about = "Import assets into the register from a CSV file.\n\n\
                  Columns are matched to asset fields by header text, rows are\n\
                  validated, and valid files are converted to normalized records."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow cell values (owner emails, names) to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Map, validate and convert a CSV file.
    Import(ImportArgs),

    /// Write the CSV import template.
    Template(TemplateArgs),

    /// List the asset fields columns can be mapped to.
    Fields,
}

#[derive(Parser)]
pub struct ImportArgs {
    /// CSV file to import.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Map a column to a field, overriding the automatic match.
    ///
    /// Use `none` as FIELD to skip the column. May be repeated.
    #[arg(long = "map", value_name = "COLUMN=FIELD", value_parser = parse_mapping_override)]
    pub map: Vec<MappingOverride>,

    /// Leave columns unmapped unless given with --map.
    #[arg(long = "no-auto-map")]
    pub no_auto_map: bool,

    /// Write imported records as JSON to this file.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// How to print validation findings.
    #[arg(long = "report-format", value_enum, default_value = "table")]
    pub report_format: ReportFormatArg,

    /// Validate only; do not build or write records.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct TemplateArgs {
    /// Directory to write the template into.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
