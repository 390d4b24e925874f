mod common;

use common::diag_board;
use knightforge_core::solver::{SilentProgress, SolveOptions, Solver, TripSpec};
use std::sync::Arc;

#[test]
fn test_sweep_determinism() {
    println!("\n=== TEST: Sweep Determinism (Run A vs Run B) ===");

    let run = || {
        let options = SolveOptions::builder()
            .target_score(6)
            .sum_bound(12)
            .trips(vec![TripSpec::parse("a1-c3").unwrap()])
            .build();
        let solver = Solver::new(Arc::new(diag_board()), options).unwrap();
        solver.run(&SilentProgress).unwrap()
    };

    let a = run();
    let b = run();

    assert_eq!(a.evaluated, b.evaluated);
    assert_eq!(a.accepted, b.accepted);

    let best_a = a.best.expect("run A solves");
    let best_b = b.best.expect("run B solves");
    println!(
        "Run A: {} | Run B: {}",
        best_a.weights, best_b.weights
    );
    assert_eq!(best_a.weights, best_b.weights);
    assert_eq!(best_a.paths, best_b.paths);
    println!("✅ Determinism Verified.");
}
