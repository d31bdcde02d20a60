//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use propmatch_map::TokenizerKind;
use propmatch_model::{Property, PropertyKind};

#[derive(Parser)]
#[command(
    name = "propmatch",
    version,
    about = "Classify how well source property names match destination property names",
    long_about = "Split source and destination property names into tokens and classify\n\
                  every source token as EXACT, IGNORING_CASE, IGNORING_TOKEN_POSITION,\n\
                  IGNORING_CASE_AND_TOKEN_POSITION or NONE."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Match source properties against destination properties.
    Match(MatchArgs),

    /// Print the tokens of a single property name.
    Tokenize(TokenizeArgs),

    /// List match strengths and their priorities.
    Strengths,
}

#[derive(Parser)]
pub struct MatchArgs {
    /// Source property as `name` or `kind:name` (repeatable, comma-separated).
    #[arg(
        short = 's',
        long = "source",
        value_name = "PROPERTY",
        value_delimiter = ','
    )]
    pub source: Vec<Property>,

    /// Destination property as `name` or `kind:name` (repeatable, comma-separated).
    #[arg(
        short = 'd',
        long = "dest",
        value_name = "PROPERTY",
        value_delimiter = ','
    )]
    pub destination: Vec<Property>,

    /// Matcher settings file (JSON).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Tokenizer for source names (overrides the settings file).
    #[arg(long = "source-tokenizer", value_enum)]
    pub source_tokenizer: Option<TokenizerArg>,

    /// Tokenizer for destination names (overrides the settings file).
    #[arg(long = "dest-tokenizer", value_enum)]
    pub destination_tokenizer: Option<TokenizerArg>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,
}

#[derive(Parser)]
pub struct TokenizeArgs {
    /// Property name to split.
    #[arg(value_name = "NAME")]
    pub name: String,

    #[arg(long = "tokenizer", value_enum, default_value = "camel-case")]
    pub tokenizer: TokenizerArg,

    #[arg(long = "kind", value_enum, default_value = "field")]
    pub kind: PropertyKindArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TokenizerArg {
    CamelCase,
    Underscore,
}

impl From<TokenizerArg> for TokenizerKind {
    fn from(arg: TokenizerArg) -> Self {
        match arg {
            TokenizerArg::CamelCase => Self::CamelCase,
            TokenizerArg::Underscore => Self::Underscore,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PropertyKindArg {
    Field,
    Accessor,
    Mutator,
}

impl From<PropertyKindArg> for PropertyKind {
    fn from(arg: PropertyKindArg) -> Self {
        match arg {
            PropertyKindArg::Field => Self::Field,
            PropertyKindArg::Accessor => Self::Accessor,
            PropertyKindArg::Mutator => Self::Mutator,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
    Text,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
