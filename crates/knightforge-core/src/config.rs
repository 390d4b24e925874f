use crate::consts::{DEFAULT_SUM_BOUND, DEFAULT_TARGET_SCORE, DEFAULT_TRIPS};
use crate::core_types::Score;
use crate::error::KnResult;
use crate::solver::TripSpec;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
}

#[derive(Args, Debug, Clone)]
pub struct SearchParams {
    #[arg(long, default_value_t = DEFAULT_TARGET_SCORE)]
    pub target_score: Score,

    #[arg(long, default_value_t = DEFAULT_SUM_BOUND)]
    pub sum_bound: u32,

    // Comma-separated trips in algebraic notation.
    #[arg(long, default_value = DEFAULT_TRIPS)]
    pub trips: String,

    // 0 = one worker per available core.
    #[arg(long, default_value_t = 0)]
    pub threads: usize,
}

impl SearchParams {
    pub fn get_trips(&self) -> KnResult<Vec<TripSpec>> {
        self.trips.split(',').map(TripSpec::parse).collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search: SearchParams::default(),
        }
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            target_score: DEFAULT_TARGET_SCORE,
            sum_bound: DEFAULT_SUM_BOUND,
            trips: DEFAULT_TRIPS.to_string(),
            threads: 0,
        }
    }
}
