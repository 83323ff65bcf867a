//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, ValueHint};
use clap_complete::Shell;

/// Pretty-print employee management hierarchies from a JSON roster
#[derive(Parser, Debug)]
#[command(name = "orgtree")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input JSON file with the employee roster
    #[arg(value_hint = ValueHint::FilePath, required_unless_present = "generator")]
    pub input_file: Option<PathBuf>,

    /// Enable debug output (repeat for more verbosity: -d, -dd, -ddd)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Generate shell completions
    #[arg(long = "generate", value_enum, value_name = "SHELL")]
    pub generator: Option<Shell>,
}
