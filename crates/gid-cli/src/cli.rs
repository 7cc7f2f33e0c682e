//! CLI argument definitions for the GID mapper.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "gid",
    version,
    about = "GID Property Mapper - Map Revit parameters to IFC properties",
    long_about = "Browse the GID prescription dataset and map free-form Revit\n\
                  parameter names onto canonical IFC properties.\n\n\
                  Matching combines a French-to-IFC synonym dictionary with\n\
                  normalized edit-distance scoring."
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

    /// GID dataset CSV (default: $GID_DATABASE_PATH, then data/GID_DATABASE.csv).
    #[arg(long = "database", value_name = "CSV", global = true)]
    pub database: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the project phases.
    Phases,

    /// List element categories.
    Elements(ElementsArgs),

    /// Show the prescriptions for an element at a project phase.
    Prescriptions(PrescriptionsArgs),

    /// Map parameter names onto the IFC properties of an element category.
    Map(MapArgs),

    /// Match parameter names against the prescriptions of an element.
    Match(MatchArgs),

    /// Compare the prescriptions of an element between two phases.
    Compare(CompareArgs),
}

#[derive(Parser)]
pub struct ElementsArgs {
    /// Filter by name or alias (French, English or German).
    #[arg(long = "search", value_name = "TERM")]
    pub search: Option<String>,

    /// List the built-in element catalog instead of the dataset.
    #[arg(long = "from-catalog")]
    pub from_catalog: bool,
}

#[derive(Parser)]
pub struct PrescriptionsArgs {
    /// Element category, e.g. "Mur" (case-insensitive).
    #[arg(long = "element", value_name = "ELEMENT")]
    pub element: String,

    /// Project phase: APS, APD, PDE, EXE or EXP.
    #[arg(long = "phase", value_name = "PHASE")]
    pub phase: String,

    /// Also write the prescriptions to a CSV file.
    #[arg(long = "export", value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

/// Where parameter names come from.
#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct LabelSource {
    /// Parameter names separated by commas, semicolons or newlines.
    #[arg(long = "params", value_name = "LIST")]
    pub params: Option<String>,

    /// Read parameter names from a file.
    #[arg(long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,
}

#[derive(Parser)]
pub struct MapArgs {
    /// Element category from the built-in catalog, e.g. "Porte".
    #[arg(long = "category", value_name = "CATEGORY")]
    pub category: String,

    #[command(flatten)]
    pub source: LabelSource,

    /// JSON synonym table replacing the built-in French-to-IFC dictionary.
    #[arg(long = "synonyms", value_name = "FILE")]
    pub synonyms: Option<PathBuf>,

    /// Write the tab-separated mapping file (a directory gets the default file name).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct MatchArgs {
    /// Element category, e.g. "Mur" (case-insensitive).
    #[arg(long = "element", value_name = "ELEMENT")]
    pub element: String,

    /// Project phase: APS, APD, PDE, EXE or EXP.
    #[arg(long = "phase", value_name = "PHASE")]
    pub phase: String,

    #[command(flatten)]
    pub source: LabelSource,

    /// JSON synonym table replacing the built-in French-to-IFC dictionary.
    #[arg(long = "synonyms", value_name = "FILE")]
    pub synonyms: Option<PathBuf>,

    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct CompareArgs {
    /// Element category, e.g. "Mur" (case-insensitive).
    #[arg(long = "element", value_name = "ELEMENT")]
    pub element: String,

    /// Earlier phase.
    #[arg(long = "from", value_name = "PHASE")]
    pub from: String,

    /// Later phase; must differ from --from.
    #[arg(long = "to", value_name = "PHASE")]
    pub to: String,

    /// Print JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
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
