mod common;

use common::diag_board;
use knightforge_core::core_types::{Cell, Weights};
use knightforge_core::error::KnightForgeError;
use knightforge_core::search::PathFinder;
use knightforge_core::solver::{
    ProgressCallback, SilentProgress, Solution, SolveOptions, Solver, TripSpec,
};
use std::sync::{Arc, Mutex};

fn toy_solver(target_score: u64, sum_bound: u32, num_threads: usize) -> Solver {
    let trips = vec![
        TripSpec::parse("a1-c3").unwrap(),
        TripSpec::parse("a1-c3").unwrap(),
    ];
    let options = SolveOptions::builder()
        .target_score(target_score)
        .sum_bound(sum_bound)
        .num_threads(num_threads)
        .trips(trips)
        .build();
    Solver::new(Arc::new(diag_board()), options).unwrap()
}

#[test]
fn test_sweep_finds_minimal_candidate() {
    // With bound 7 the candidate space is exactly the six permutations of
    // {1,2,3}. Two of them score 6 on the toy trip; the tie resolves to the
    // earlier one in enumeration order.
    let solver = toy_solver(6, 7, 0);
    let report = solver.run(&SilentProgress).unwrap();

    assert_eq!(report.evaluated, 6);
    assert_eq!(report.accepted, 2);

    let best = report.best.expect("two candidates succeed");
    assert_eq!(best.weights, Weights::new(1, 3, 2));
    assert_eq!(best.weight_sum(), 6);

    let expected: Vec<Cell> = ["a1", "b2", "c3"]
        .iter()
        .map(|s| Cell::parse(s).unwrap())
        .collect();
    assert_eq!(best.paths, vec![expected.clone(), expected]);
}

#[test]
fn test_no_candidate_succeeds() {
    let solver = toy_solver(7, 7, 0);
    let report = solver.run(&SilentProgress).unwrap();

    assert!(report.best.is_none());
    assert_eq!(report.evaluated, 6);
    assert_eq!(report.accepted, 0);
}

#[test]
fn test_evaluate_matches_direct_search() {
    // The coordinator wrapper adds no behavior of its own.
    let solver = toy_solver(6, 7, 0);
    let weights = Weights::new(1, 3, 2);

    let solution = solver.evaluate(weights).expect("candidate succeeds");

    let board = diag_board();
    let start = Cell::parse("a1").unwrap();
    let target = Cell::parse("c3").unwrap();
    let initial = weights.get(board.category(start)) as u64;
    let direct = PathFinder::search(&board, weights, start, target, initial, 6).unwrap();

    assert_eq!(solution.paths, vec![direct.clone(), direct]);
    assert!(solver.evaluate(Weights::new(1, 2, 3)).is_none());
}

#[test]
fn test_single_accepted_candidate_matches_direct_probe() {
    // Asymmetric trips: a1->c3 scores 2ab, c1->a3 scores a*a*b. At target 12
    // and bound 7 only (2,3,1) satisfies both, so the sweep reduces to the
    // one candidate a direct probe would check.
    let trips = vec![
        TripSpec::parse("a1-c3").unwrap(),
        TripSpec::parse("c1-a3").unwrap(),
    ];
    let options = SolveOptions::builder()
        .target_score(12)
        .sum_bound(7)
        .trips(trips)
        .build();
    let solver = Solver::new(Arc::new(diag_board()), options).unwrap();

    let report = solver.run(&SilentProgress).unwrap();
    assert_eq!(report.accepted, 1);

    let best = report.best.unwrap();
    assert_eq!(best.weights, Weights::new(2, 3, 1));
    assert_eq!(best.weight_sum(), 6);
    assert_eq!(
        best.paths,
        solver.evaluate(Weights::new(2, 3, 1)).unwrap().paths
    );
}

#[test]
fn test_thread_count_does_not_change_result() {
    let serial = toy_solver(6, 7, 1).run(&SilentProgress).unwrap();
    let parallel = toy_solver(6, 7, 4).run(&SilentProgress).unwrap();

    let a = serial.best.unwrap();
    let b = parallel.best.unwrap();
    assert_eq!(a.weights, b.weights);
    assert_eq!(a.paths, b.paths);
    assert_eq!(serial.evaluated, parallel.evaluated);
    assert_eq!(serial.accepted, parallel.accepted);
}

struct Recorder {
    events: Mutex<Vec<(usize, u32)>>,
}

impl ProgressCallback for Recorder {
    fn on_improvement(&self, candidate_index: usize, solution: &Solution) {
        self.events
            .lock()
            .unwrap()
            .push((candidate_index, solution.weight_sum()));
    }
}

#[test]
fn test_improvements_are_monotone() {
    let solver = toy_solver(6, 7, 1);
    let recorder = Recorder {
        events: Mutex::new(Vec::new()),
    };
    solver.run(&recorder).unwrap();

    let events = recorder.events.into_inner().unwrap();
    // Serial sweep: the first success (index 1) wins, the later tie at
    // index 4 is not an improvement.
    assert_eq!(events, vec![(1, 6)]);
}

#[test]
fn test_rejects_bad_trips() {
    let board = Arc::new(diag_board());

    let options = SolveOptions::builder().trips(Vec::new()).build();
    assert!(matches!(
        Solver::new(board.clone(), options),
        Err(KnightForgeError::Config(_))
    ));

    let options = SolveOptions::builder()
        .trips(vec![TripSpec::parse("a1-f6").unwrap()])
        .build();
    assert!(matches!(
        Solver::new(board, options),
        Err(KnightForgeError::Config(_))
    ));
}
