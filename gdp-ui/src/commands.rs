//! Dashboard commands, one per input line.
//!
//! Lines are parsed with clap so every command gets usage text, `help`, and
//! argument validation for free. Years are range-checked here; the history
//! store itself accepts any year.

use clap::{Parser, Subcommand, builder::RangedI64ValueParser};
use gdp_core::{MAX_YEAR, MIN_YEAR};

use crate::models::FieldKey;

fn year_parser() -> RangedI64ValueParser<i32> {
    RangedI64ValueParser::new().range(i64::from(MIN_YEAR)..=i64::from(MAX_YEAR))
}

fn field_parser(s: &str) -> Result<FieldKey, String> {
    FieldKey::parse(s).ok_or_else(|| {
        format!("unknown field '{s}'; expected a coefficient such as 'a', 'ct' or 'C_k_ck'")
    })
}

#[derive(Debug, Parser)]
#[command(name = "gdp", no_binary_name = true, disable_version_flag = true)]
struct CommandLine {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Recompute GDP and redraw every chart.
    Render,

    /// Change one coefficient field, then redraw.
    Set {
        /// Field name: `a`, `ct`, `b`, `ck`, `h`, `i`, `d`, `g`, `e`, `x`, `f`, `m`
        /// (or qualified, e.g. `C_t_a`).
        #[arg(value_parser = field_parser)]
        field: FieldKey,

        /// New value, as typed.
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Save the current GDP for a year.
    Save {
        #[arg(value_parser = year_parser())]
        year: i32,

        /// Replace the value if the year is already saved.
        #[arg(long)]
        overwrite: bool,
    },

    /// Replace the saved GDP of a year with an explicit value.
    Update {
        #[arg(value_parser = year_parser())]
        year: i32,

        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Delete the saved GDP of a year.
    Delete {
        #[arg(value_parser = year_parser())]
        year: i32,
    },

    /// Show the saved GDP history.
    List,

    /// Show the coefficient fields.
    Params,

    /// Change the log filter (e.g. `debug`, `gdp_core=trace`).
    Log { level: String },

    /// Leave the dashboard.
    #[command(alias = "exit")]
    Quit,
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Command>, clap::Error> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return Ok(None);
    }
    CommandLine::try_parse_from(words).map(|cli| Some(cli.command))
}
