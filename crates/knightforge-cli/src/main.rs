use clap::{Parser, Subcommand};
use knightforge_core::board::Board;
use std::process;
use std::sync::Arc;
use tracing::{error, info};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long)]
    board: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Search(cmd::search::SearchArgs),
    Validate(cmd::validate::ValidateArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    info!("🚀 Initializing KnightForge...");

    let board = match &cli.board {
        Some(path) => {
            info!("📂 Loading Board: {}", path);
            Board::load_from_file(path).unwrap_or_else(|e| {
                error!("{}", e);
                process::exit(1);
            })
        }
        None => Board::standard(),
    };
    let board = Arc::new(board);

    match cli.command {
        Commands::Search(args) => cmd::search::run(args, board),
        Commands::Validate(args) => cmd::validate::run(args, board),
    }
}
