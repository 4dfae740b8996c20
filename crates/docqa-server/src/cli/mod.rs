use clap::{Parser, Subcommand};

pub mod search;

#[derive(Parser)]
#[command(name = "docqa-server")]
#[command(about = "docqa server CLI")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run database migrations
    Migrate,
    /// Look up users whose name contains TERM (parameter-bound query)
    Search(search::SearchArgs),
}

#[derive(Debug, Clone)]
pub enum RunMode {
    Server,
    Migrate,
    Search(search::SearchArgs),
}

pub fn parse_args() -> RunMode {
    let cli = Cli::parse();
    match cli.command {
        None => RunMode::Server,
        Some(Command::Migrate) => RunMode::Migrate,
        Some(Command::Search(args)) => RunMode::Search(args),
    }
}
