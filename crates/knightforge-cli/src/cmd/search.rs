use crate::reports;
use clap::Args;
use knightforge_core::board::Board;
use knightforge_core::config::Config;
use knightforge_core::solver::{ProgressCallback, Solution, SolveOptions, Solver};
use std::process;
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

struct CliLogger;

impl ProgressCallback for CliLogger {
    fn on_improvement(&self, candidate_index: usize, solution: &Solution) {
        info!(
            "➡️  Candidate #{}: A+B+C = {} ({})",
            candidate_index,
            solution.weight_sum(),
            solution.weights
        );
    }
}

pub fn run(args: SearchArgs, board: Arc<Board>) {
    let options = SolveOptions::from_config(&args.config).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });
    let solver = Solver::new(board.clone(), options).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    let report = solver.run(&CliLogger).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    info!(
        "Sweep finished: {} candidates evaluated, {} accepted in {:.2}s",
        report.evaluated,
        report.accepted,
        report.elapsed.as_secs_f32()
    );

    if args.json {
        let output = reports::search_output(&report);
        println!("{}", serde_json::to_string_pretty(&output).expect("serializable output"));
        return;
    }

    match &report.best {
        Some(solution) => {
            info!("=== 🏆 FINAL RESULT ===");
            reports::print_board_grid(&board);
            reports::print_solution(solution);
            println!("{}", reports::submission_line(solution));
        }
        None => warn!("⚠️  No solution found."),
    }
}
