//! Command-line interface.
//!
//! Subcommands read a structogram source file and either print its tree,
//! report whether it parses, or dump the scanner's tokens.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};

use crate::config;
use crate::dsl::{parse_source_with, scan, BlockStart, ParseOptions, Structogram};
use crate::error::{Error, Result};
use crate::export::{self, OutputFormat};

/// Source file read when `parse` is given no path.
pub const DEFAULT_SOURCE: &str = "template.str";

#[derive(Debug, Parser)]
#[command(
    name = "structogram",
    version,
    about = "Convert structogram descriptions into JSON or YAML trees."
)]
pub struct Cli {
    /// Configuration file [default: ~/.structogram/config.yaml].
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Accept any statement keyword as the first statement of a block.
    #[arg(long, global = true)]
    pub any_statement_blocks: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a structogram and print its tree.
    Parse {
        /// The structogram source file.
        #[arg(default_value = DEFAULT_SOURCE)]
        file: PathBuf,
        /// Output format [default: from config, else json].
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// JSON indent width, 0 for compact output.
        #[arg(long)]
        indent: Option<usize>,
    },
    /// Report the first syntax error, or `ok`.
    Check {
        /// The structogram source file.
        #[arg(required = true)]
        file: PathBuf,
    },
    /// Print the scanner's token stream.
    Tokens {
        /// The structogram source file.
        #[arg(required = true)]
        file: PathBuf,
    },
}

/// Execute `cli`, writing results to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    let mut options = config.parse_options();
    if cli.any_statement_blocks {
        options.block_start = BlockStart::AnyStatement;
    }

    match &cli.command {
        Command::Parse {
            file,
            format,
            indent,
        } => {
            let structogram = parse_file(file, options)?;
            let rendered = export::render(
                &structogram,
                format.unwrap_or(config.format),
                indent.unwrap_or(config.indent),
            )?;
            if rendered.ends_with('\n') {
                write!(out, "{rendered}")?;
            } else {
                writeln!(out, "{rendered}")?;
            }
        }
        Command::Check { file } => {
            parse_file(file, options)?;
            writeln!(out, "ok")?;
        }
        Command::Tokens { file } => {
            for token in scan(&read_source(file)?) {
                writeln!(
                    out,
                    "{}:{} {} {:?}",
                    token.line, token.col, token.kind, token.text
                )?;
            }
        }
    }
    Ok(())
}

fn read_source(path: &Path) -> Result<String> {
    let source = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = source.len(), "read source");
    Ok(source)
}

fn parse_file(path: &Path, options: ParseOptions) -> Result<Structogram> {
    let source = read_source(path)?;
    parse_source_with(&source, options).map_err(|source| Error::Syntax {
        path: path.to_path_buf(),
        source,
    })
}
