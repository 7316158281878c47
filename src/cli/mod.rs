//! CLI Module
//!
//! Command-line front end for trying out a `TriList<i64, String, f64>`.

pub mod commands;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// trilist demo - mixed integer/text/real lists with live per-type modifiers
#[derive(Parser, Debug)]
#[command(name = "trilist-demo")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub modifiers: ModifierArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Modifiers installed before any output is produced.
#[derive(Args, Debug, Clone, Default)]
pub struct ModifierArgs {
    /// Add this amount to every integer
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub add: Option<i64>,

    /// Multiply every real by this factor
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub scale: Option<f64>,

    /// Append this suffix to every text value
    #[arg(long, global = true)]
    pub suffix: Option<String>,
}

/// Payload type selector for the `view` command.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Int,
    Text,
    Real,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every element in insertion order
    #[command(name = "show")]
    Show {
        /// Values to store; integers, reals and anything else as text
        tokens: Vec<String>,
    },

    /// Print only the values of one type
    #[command(name = "view")]
    View {
        /// Which payload type to print
        #[arg(short, long, value_enum)]
        kind: Kind,

        /// Values to store; integers, reals and anything else as text
        tokens: Vec<String>,
    },

    /// Walk through the compose/reset sequence step by step
    #[command(name = "scenario")]
    Scenario,
}
