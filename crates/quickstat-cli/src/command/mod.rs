use clap::{Parser, Subcommand};

use self::{correlation::CorrelationArg, robust::RobustArg, summary::SummaryArg};

mod correlation;
mod robust;
mod summary;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Statistic to compute
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print a JSON summary (median, MAD, mean, variance, ...)
    Summary(#[clap(flatten)] SummaryArg),
    /// Print the median
    Median(#[clap(flatten)] RobustArg),
    /// Print the median absolute deviation
    Mad(#[clap(flatten)] RobustArg),
    /// Print the Pearson correlation of two samples
    Correlation(#[clap(flatten)] CorrelationArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Summary(arg) => summary::run(&arg)?,
        Mode::Median(arg) => robust::run_median(&arg)?,
        Mode::Mad(arg) => robust::run_mad(&arg)?,
        Mode::Correlation(arg) => correlation::run(&arg)?,
    }
    Ok(())
}
