use super::{SolveInfo, SolverSettings, SpanningSolution};
use crate::algebra::*;
use crate::graph::StationIndex;
use crate::solver::SolverStatus;
use crate::timers::Timers;
use itertools::Itertools;
use std::io::Write;
use std::time::Duration;

fn print_banner(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "-------------------------------------------------------------")?;
    writeln!(
        out,
        "           railspan v{}  -  minimum spanning tunnels",
        crate::VERSION
    )?;
    writeln!(out, "-------------------------------------------------------------")?;
    Ok(())
}

impl SolveInfo {
    /// Print the banner and problem dimensions.  Called once at the start
    /// of each solve.
    pub fn print_configuration(
        &mut self,
        settings: &SolverSettings,
        name: &str,
        stations: &StationIndex,
        ncandidates: usize,
    ) -> std::io::Result<()> {
        if !settings.verbose {
            return Ok(());
        }

        let out = &mut self.stream;
        print_banner(out)?;

        writeln!(out, "\nproblem:")?;
        writeln!(out, "  algorithm     = {}", name)?;
        writeln!(out, "  stations      = {}", stations.len())?;
        writeln!(out, "  tunnels       = {}", ncandidates)?;
        writeln!(out)?;
        out.flush()
    }

    /// Print final status.  Called at solver termination.
    pub fn print_footer<W: WeightT>(
        &mut self,
        settings: &SolverSettings,
        solution: &SpanningSolution<W>,
        timers: &Timers,
    ) -> std::io::Result<()> {
        if !settings.verbose {
            return Ok(());
        }

        let out = &mut self.stream;

        writeln!(out, "-------------------------------------------------------------")?;
        writeln!(out, "Terminated with status = {}", self.status)?;
        match (self.status, solution.weight()) {
            (SolverStatus::WeightOverflow, _) => writeln!(out, "total weight = (overflow)")?,
            (SolverStatus::NegativeWeight, _) => {
                writeln!(out, "total weight = (negative weights not supported)")?
            }
            (_, Some(weight)) => writeln!(out, "total weight = {}", weight)?,
            (_, None) => writeln!(out, "total weight = (no spanning tree)")?,
        }
        writeln!(out, "steps = {}", self.steps)?;
        writeln!(
            out,
            "solve time = {:?}",
            Duration::from_secs_f64(self.solve_time)
        )?;
        writeln!(out, "\ntimers:")?;
        timers.write_to(out)?;
        out.flush()
    }

    /// Print the solution: the algorithm, the accepted tunnels, total
    /// weight, the step metric and the elapsed time.  Printed regardless
    /// of the `verbose` setting.
    pub fn print_report<W: WeightT>(
        &mut self,
        settings: &SolverSettings,
        name: &str,
        solution: &SpanningSolution<W>,
    ) -> std::io::Result<()> {
        let out = &mut self.stream;
        let prefix = settings.station_prefix.as_str();

        writeln!(out, "algorithm: {}", name)?;
        writeln!(out, "status: {}", solution.status)?;
        writeln!(out, "solution:")?;
        writeln!(
            out,
            "{}",
            solution.edges.iter().map(|e| e.label(prefix)).join(", ")
        )?;
        writeln!(out, "total weight: {}", solution.total_weight)?;
        writeln!(out, "metric: {}", solution.steps)?;
        writeln!(
            out,
            "elapsed time: {:?}",
            Duration::from_secs_f64(solution.solve_time)
        )?;
        writeln!(out)?;
        out.flush()
    }
}
