//! CLI argument definitions for the timeline renderer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "timeline",
    version,
    about = "Render tabular event data as an interactive SVG timeline",
    long_about = "Render tabular event data as an interactive SVG timeline.\n\n\
                  Columns are assigned semantic roles (date, event, description,\n\
                  color, symbol) via flags; rows become markers grouped by date,\n\
                  with hover tooltips embedded in the SVG output."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Render a CSV dataset as an SVG timeline.
    Render(RenderArgs),

    /// Print the mapped records without rendering.
    Inspect(InspectArgs),

    /// Print the formatting model descriptor as JSON.
    Settings,
}

/// Input selection shared by data-consuming subcommands.
#[derive(Parser)]
pub struct DataArgs {
    /// Path to the input CSV file (first row is the header).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Header of the column carrying the Date role.
    #[arg(long = "date-column", value_name = "HEADER")]
    pub date_column: Option<String>,

    /// Header of the column carrying the Event role.
    #[arg(long = "event-column", value_name = "HEADER")]
    pub event_column: Option<String>,

    /// Header of the column carrying the Description role.
    #[arg(long = "description-column", value_name = "HEADER")]
    pub description_column: Option<String>,

    /// Header of the column carrying the Color role.
    #[arg(long = "color-column", value_name = "HEADER")]
    pub color_column: Option<String>,

    /// Header of the column carrying the Symbol role.
    #[arg(long = "symbol-column", value_name = "HEADER")]
    pub symbol_column: Option<String>,
}

#[derive(Parser)]
pub struct RenderArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Output SVG path (default: <INPUT> with an .svg extension).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Viewport width in pixels.
    #[arg(long = "width", value_name = "PX", default_value_t = 800.0)]
    pub width: f64,

    /// Viewport height in pixels.
    #[arg(long = "height", value_name = "PX", default_value_t = 400.0)]
    pub height: f64,
}

#[derive(Parser)]
pub struct InspectArgs {
    #[command(flatten)]
    pub data: DataArgs,
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
