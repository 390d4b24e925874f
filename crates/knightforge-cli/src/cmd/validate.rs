use crate::reports;
use clap::Args;
use knightforge_core::board::Board;
use knightforge_core::config::Config;
use knightforge_core::core_types::{Score, Weights};
use knightforge_core::solver::{SolveOptions, Solver};
use std::process;
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short, long)]
    pub weights: String,
}

pub fn run(args: ValidateArgs, board: Arc<Board>) {
    let weights = Weights::parse(&args.weights).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });
    if let Err(e) = weights.validate() {
        error!("{}", e);
        process::exit(1);
    }
    if weights.sum() >= args.config.search.sum_bound {
        warn!(
            "⚠️  Sum {} is outside the sweep bound {}; a search would never try this candidate",
            weights.sum(),
            args.config.search.sum_bound
        );
    }

    let options = SolveOptions::from_config(&args.config).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });
    let solver = Solver::new(board.clone(), options).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    info!("🔎 Probing {} (A+B+C = {})", weights, weights.sum());

    match solver.evaluate(weights) {
        Some(solution) => {
            reports::print_board_grid(&board);
            reports::print_solution(&solution);
            for (i, path) in solution.paths.iter().enumerate() {
                info!("Score trace for trip {}:", i + 1);
                let initial = weights.get(board.category(path[0])) as Score;
                reports::print_score_trace(&board, path, weights, initial);
            }
            println!("{}", reports::submission_line(&solution));
        }
        None => warn!("⚠️  No exact-score paths exist for {}", weights),
    }
}
