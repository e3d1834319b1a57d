use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod common;
mod render;

#[derive(Parser)]
#[command(name = "weekgrid", version, about = "Weekly schedule grid")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Grid(commands::grid::GridAction),
    #[command(flatten)]
    Transfer(commands::transfer::TransferAction),
    /// Highlight slots near the current time
    Now(commands::clock::NowArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("WEEKGRID_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Grid(action) => commands::grid::run(action),
        Commands::Transfer(action) => commands::transfer::run(action),
        Commands::Now(args) => commands::clock::run(args),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "weekgrid", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
