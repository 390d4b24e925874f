use crate::board::Board;
use crate::candidates::WeightCandidates;
use crate::config::Config;
use crate::consts::{DEFAULT_SUM_BOUND, DEFAULT_TARGET_SCORE};
use crate::core_types::{Cell, Score, Weights};
use crate::error::{KnResult, KnightForgeError};
use crate::search::PathFinder;
use rayon::prelude::*;
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tracing::{debug, info};
use typed_builder::TypedBuilder;

/// One required trip: where a path must start and end. The initial score is
/// seeded from the start cell's category weight at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TripSpec {
    pub start: Cell,
    pub target: Cell,
}

impl TripSpec {
    /// Parse "a1-f6".
    pub fn parse(s: &str) -> KnResult<TripSpec> {
        let (start, target) = s.split_once('-').ok_or_else(|| {
            KnightForgeError::Config(format!("Trip '{}' must look like 'a1-f6'", s))
        })?;
        Ok(TripSpec {
            start: Cell::parse(start)?,
            target: Cell::parse(target)?,
        })
    }
}

#[derive(Debug, Clone, TypedBuilder)]
pub struct SolveOptions {
    #[builder(default = DEFAULT_TARGET_SCORE)]
    pub target_score: Score,

    #[builder(default = DEFAULT_SUM_BOUND)]
    pub sum_bound: u32,

    // 0 means one worker per available core.
    #[builder(default = 0)]
    pub num_threads: usize,

    pub trips: Vec<TripSpec>,
}

impl SolveOptions {
    pub fn from_config(cfg: &Config) -> KnResult<Self> {
        Ok(Self {
            target_score: cfg.search.target_score,
            sum_bound: cfg.search.sum_bound,
            num_threads: cfg.search.threads,
            trips: cfg.search.get_trips()?,
        })
    }
}

/// A winning candidate: the weight assignment plus one completed path per
/// trip, in trip order.
#[derive(Debug, Clone, Serialize)]
pub struct Solution {
    pub weights: Weights,
    pub paths: Vec<Vec<Cell>>,
}

impl Solution {
    pub fn weight_sum(&self) -> u32 {
        self.weights.sum()
    }
}

/// Summary of a full sweep.
#[derive(Debug)]
pub struct SolveReport {
    pub best: Option<Solution>,
    pub evaluated: usize,
    pub accepted: usize,
    pub elapsed: Duration,
}

/// Receives new-best events while the sweep runs.
pub trait ProgressCallback: Send + Sync {
    fn on_improvement(&self, candidate_index: usize, solution: &Solution);
}

/// For callers that only want the final report.
pub struct SilentProgress;

impl ProgressCallback for SilentProgress {
    fn on_improvement(&self, _candidate_index: usize, _solution: &Solution) {}
}

pub struct Solver {
    board: Arc<Board>,
    options: SolveOptions,
}

impl Solver {
    pub fn new(board: Arc<Board>, options: SolveOptions) -> KnResult<Self> {
        if options.trips.is_empty() {
            return Err(KnightForgeError::Config(
                "At least one trip is required".to_string(),
            ));
        }
        for trip in &options.trips {
            for cell in [trip.start, trip.target] {
                if !board.contains(cell) {
                    return Err(KnightForgeError::Config(format!(
                        "Trip cell {} is outside the {}x{} board",
                        cell,
                        board.size(),
                        board.size()
                    )));
                }
            }
        }
        Ok(Self { board, options })
    }

    /// Evaluate a single weight assignment against every trip. All trips
    /// must hit the target score exactly for the candidate to count.
    pub fn evaluate(&self, weights: Weights) -> Option<Solution> {
        let mut paths = Vec::with_capacity(self.options.trips.len());
        for trip in &self.options.trips {
            let initial = weights.get(self.board.category(trip.start)) as Score;
            let path = PathFinder::search(
                &self.board,
                weights,
                trip.start,
                trip.target,
                initial,
                self.options.target_score,
            )?;
            paths.push(path);
        }
        Some(Solution { weights, paths })
    }

    /// Sweep the whole candidate space and keep the minimal-sum winner.
    /// The space is always exhausted, so the reported minimum is provably
    /// minimal; ties resolve to the earliest candidate in enumeration order.
    pub fn run<CB: ProgressCallback>(&self, callback: &CB) -> KnResult<SolveReport> {
        let start_time = Instant::now();
        let candidates: Vec<Weights> = WeightCandidates::new(self.options.sum_bound).collect();
        info!(
            "Sweeping {} candidates across {} trips (target {})",
            candidates.len(),
            self.options.trips.len(),
            self.options.target_score
        );

        let evaluated = AtomicUsize::new(0);
        let accepted = AtomicUsize::new(0);
        // Keyed by (weight sum, enumeration index) so the reduction is
        // deterministic no matter how workers interleave.
        let best: Mutex<Option<(u32, usize, Solution)>> = Mutex::new(None);

        let sweep = || {
            candidates.par_iter().enumerate().for_each(|(idx, &weights)| {
                evaluated.fetch_add(1, Ordering::Relaxed);
                let Some(solution) = self.evaluate(weights) else {
                    return;
                };
                accepted.fetch_add(1, Ordering::Relaxed);

                let mut guard = best.lock().unwrap();
                let better = match guard.as_ref() {
                    None => true,
                    Some((sum, seen_idx, _)) => (solution.weight_sum(), idx) < (*sum, *seen_idx),
                };
                if better {
                    callback.on_improvement(idx, &solution);
                    *guard = Some((solution.weight_sum(), idx, solution));
                }
            });
        };

        if self.options.num_threads > 0 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.options.num_threads)
                .build()
                .map_err(|e| KnightForgeError::Config(format!("Worker pool: {}", e)))?;
            pool.install(sweep);
        } else {
            sweep();
        }

        let best = best.into_inner().unwrap().map(|(_, _, solution)| solution);
        let report = SolveReport {
            best,
            evaluated: evaluated.into_inner(),
            accepted: accepted.into_inner(),
            elapsed: start_time.elapsed(),
        };
        debug!(
            "Sweep done: {} evaluated, {} accepted in {:.2}s",
            report.evaluated,
            report.accepted,
            report.elapsed.as_secs_f32()
        );
        Ok(report)
    }
}
