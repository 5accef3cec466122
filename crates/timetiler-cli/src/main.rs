use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "timetiler-cli", version, about = "Timetiler CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Appointment layout computations
    Layout {
        #[command(subcommand)]
        action: commands::layout::LayoutAction,
    },
    /// Agenda listing
    Agenda {
        #[command(subcommand)]
        action: commands::agenda::AgendaAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Layout { action } => commands::layout::run(action),
        Commands::Agenda { action } => commands::agenda::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
