use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_DECLARATION_DIR: &str = "cheatsheets";

#[derive(Parser, Debug)]
#[command(
    name = "cheatsheets",
    version,
    about = "Load cheatsheet declarations and hand them to a docset generator"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_DECLARATION_DIR,
        help = "Directory holding the *.toml cheatsheet declarations"
    )]
    pub dir: PathBuf,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List loaded cheatsheets
    List,
    /// Print one cheatsheet by keyword
    Show { keyword: String },
    /// Check every declaration and report per-file status
    Validate,
    /// Write one JSON handoff document per cheatsheet
    Export {
        #[arg(long)]
        out: PathBuf,
    },
}
