//! trilist demo CLI
//!
//! Command-line playground for the trilist container.

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use trilist::cli::commands::{self, DemoList};
use trilist::cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    info!("trilist demo v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(cmd) => handle_command(cmd, &cli.modifiers),
        None => {
            println!("trilist demo v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    }
}

fn handle_command(cmd: Commands, modifiers: &trilist::cli::ModifierArgs) -> anyhow::Result<()> {
    let lines = match cmd {
        Commands::Show { tokens } => {
            let list: DemoList = commands::parse_tokens(&tokens);
            commands::install_modifiers(&list, modifiers);
            commands::show(&list)?
        }
        Commands::View { kind, tokens } => {
            let list = commands::parse_tokens(&tokens);
            commands::install_modifiers(&list, modifiers);
            commands::view(&list, kind)
        }
        Commands::Scenario => commands::scenario(),
    };

    for line in lines {
        println!("{}", line);
    }
    Ok(())
}
