use super::SolverStatus;
use crate::io::PrintTarget;
use crate::timers::*;

/// Progress information gathered while a solver runs.
#[derive(Default, Debug)]
pub struct SolveInfo {
    /// step metric: decisions evaluated so far
    pub steps: u64,
    pub solve_time: f64,
    pub status: SolverStatus,
    pub(crate) stream: PrintTarget,
}

impl SolveInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset counters and timers before a solve.  The print target is kept.
    pub fn reset(&mut self, timers: &mut Timers) {
        self.status = SolverStatus::Unsolved;
        self.steps = 0;
        self.solve_time = 0f64;

        timers.reset();
    }

    /// Count one decision.
    #[inline]
    pub fn step(&mut self) {
        self.steps += 1;
    }

    pub fn finalize(&mut self, timers: &Timers) {
        self.solve_time = timers.total_time().as_secs_f64();
    }
}
