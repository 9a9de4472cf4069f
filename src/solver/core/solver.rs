use super::{SolveInfo, SolverSettings, SpanningSolution};
use crate::algebra::*;
use crate::graph::{Edge, StationIndex};
use crate::timers::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ---------------------------------
// Solver status type
// ---------------------------------

/// Status of solver at termination

#[repr(u32)]
#[derive(PartialEq, Eq, Clone, Debug, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SolverStatus {
    /// Problem is not solved (solver hasn't run).
    #[default]
    Unsolved,
    /// Solver terminated with a spanning tree.
    Solved,
    /// The tunnels cannot connect every station.  The greedy solver
    /// returns the partial forest it built, the backtracking solver
    /// returns no edges.
    Disconnected,
    /// No candidate tunnels were given.
    EmptyNetwork,
    /// The total weight is not representable in the weight type.
    WeightOverflow,
    /// A candidate has a negative weight, which the backtracking bound
    /// cannot handle.
    NegativeWeight,
}

impl SolverStatus {
    pub fn is_solved(&self) -> bool {
        matches!(*self, SolverStatus::Solved)
    }

}

impl std::fmt::Display for SolverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

// ---------------------------------
// state shared by every solver
// ---------------------------------

/// Settings, progress information and results common to all solvers.
///
/// Each solver owns one of these and drives it through
/// [`begin`](SolverCore::begin) and [`finish`](SolverCore::finish) around
/// its own search.
#[derive(Debug)]
pub struct SolverCore<W> {
    pub settings: SolverSettings,
    pub info: SolveInfo,
    pub solution: SpanningSolution<W>,
    pub stations: StationIndex,
    pub timers: Timers,
}

impl<W> SolverCore<W>
where
    W: WeightT,
{
    pub fn new(settings: SolverSettings) -> Self {
        Self {
            settings,
            info: SolveInfo::new(),
            solution: SpanningSolution::new(),
            stations: StationIndex::new(),
            timers: Timers::default(),
        }
    }

    /// Reset per-solve state, derive the station universe and print the
    /// problem configuration.
    pub(crate) fn begin(&mut self, name: &'static str, candidates: &[Edge<W>]) {
        self.info.reset(&mut self.timers);
        self.solution = SpanningSolution::new();

        self.timers.start_as_current("solve");
        timeit! {self.timers => "setup"; {
            self.stations = StationIndex::from_edges(candidates);
        }}

        notimeit! {self.timers; {
            // printing failures never abort a solve
            let _ = self
                .info
                .print_configuration(&self.settings, name, &self.stations, candidates.len());
        }}
    }

    /// Record the final status, stop the solve timer and print a footer.
    pub(crate) fn finish(&mut self, status: SolverStatus) {
        self.timers.stop_current();

        self.info.status = status;
        self.info.finalize(&self.timers);

        self.solution.status = status;
        self.solution.steps = self.info.steps;
        self.solution.solve_time = self.info.solve_time;

        let _ = self
            .info
            .print_footer(&self.settings, &self.solution, &self.timers);
    }

    /// Status for a finished connectivity check.
    pub(crate) fn connectivity_status(&self, number_of_sets: usize) -> SolverStatus {
        if self.stations.is_empty() {
            SolverStatus::EmptyNetwork
        } else if number_of_sets == 1 {
            SolverStatus::Solved
        } else {
            SolverStatus::Disconnected
        }
    }

    pub(crate) fn report(&mut self, name: &'static str) -> std::io::Result<()> {
        self.info.print_report(&self.settings, name, &self.solution)
    }
}

/// Forward [`ConfigurablePrintTarget`](crate::io::ConfigurablePrintTarget)
/// to the print stream held by a solver's [`SolverCore`].
macro_rules! impl_print_target {
    ($solver:ident) => {
        impl<W> $crate::io::ConfigurablePrintTarget for $solver<W>
        where
            W: $crate::algebra::WeightT,
        {
            fn print_to_stdout(&mut self) {
                $crate::io::ConfigurablePrintTarget::print_to_stdout(&mut self.core.info.stream)
            }
            fn print_to_file(&mut self, file: std::fs::File) {
                $crate::io::ConfigurablePrintTarget::print_to_file(&mut self.core.info.stream, file)
            }
            fn print_to_stream(&mut self, stream: Box<dyn std::io::Write + Send + Sync>) {
                $crate::io::ConfigurablePrintTarget::print_to_stream(&mut self.core.info.stream, stream)
            }
            fn print_to_buffer(&mut self) {
                $crate::io::ConfigurablePrintTarget::print_to_buffer(&mut self.core.info.stream)
            }
            fn print_to_sink(&mut self) {
                $crate::io::ConfigurablePrintTarget::print_to_sink(&mut self.core.info.stream)
            }
            fn get_print_buffer(&mut self) -> std::io::Result<String> {
                $crate::io::ConfigurablePrintTarget::get_print_buffer(&mut self.core.info.stream)
            }
        }
    };
}
pub(crate) use impl_print_target;
