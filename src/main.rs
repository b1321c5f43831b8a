use cheatsheets::cli::Cli;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    cheatsheets::logging::init();
    let cli = Cli::parse();
    cheatsheets::commands::handle_commands(&cli)
}
