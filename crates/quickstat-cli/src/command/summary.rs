use std::path::PathBuf;

use anyhow::Context;
use quickstat_stats::{select::SelectionSeed, summary::RobustSummary};
use serde::Serialize;

use crate::{command::robust, util};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct SummaryArg {
    /// Input file with whitespace- or comma-separated numbers (stdin if omitted)
    pub input: Option<PathBuf>,

    /// Pivot selection seed as 32 hex characters (random if omitted)
    #[arg(long)]
    pub seed: Option<SelectionSeed>,

    /// Output file path (stdout if omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Summary record written as JSON, tagged with the seed that produced it.
#[derive(Debug, Serialize)]
struct SummaryReport {
    seed: SelectionSeed,
    #[serde(flatten)]
    summary: RobustSummary,
}

pub(crate) fn run(arg: &SummaryArg) -> anyhow::Result<()> {
    let values = util::read_values(arg.input.as_deref())?;
    let mut selector = robust::new_selector(arg.seed);
    let summary = selector
        .summarize(&values)
        .context("Failed to summarize values")?;

    let report = SummaryReport {
        seed: selector.seed(),
        summary,
    };
    util::Output::save_json(&report, arg.output.clone())
}
