use std::path::PathBuf;

use anyhow::Context;
use quickstat_stats::select::{SelectionSeed, Selector};

use crate::util;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct RobustArg {
    /// Input file with whitespace- or comma-separated numbers (stdin if omitted)
    pub input: Option<PathBuf>,

    /// Pivot selection seed as 32 hex characters (random if omitted)
    #[arg(long)]
    pub seed: Option<SelectionSeed>,
}

impl RobustArg {
    fn load(&self) -> anyhow::Result<(Vec<f64>, Selector)> {
        let values = util::read_values(self.input.as_deref())?;
        let selector = new_selector(self.seed);
        Ok((values, selector))
    }
}

pub(crate) fn new_selector(seed: Option<SelectionSeed>) -> Selector {
    let selector = seed.map_or_else(Selector::new, Selector::with_seed);
    tracing::debug!(seed = %selector.seed(), "initialized selector");
    selector
}

pub(crate) fn run_median(arg: &RobustArg) -> anyhow::Result<()> {
    let (mut values, mut selector) = arg.load()?;
    let median = selector
        .median(&mut values)
        .context("Failed to compute median")?;
    println!("{median}");
    Ok(())
}

pub(crate) fn run_mad(arg: &RobustArg) -> anyhow::Result<()> {
    let (mut values, mut selector) = arg.load()?;
    let mad = selector
        .mad(&mut values)
        .context("Failed to compute median absolute deviation")?;
    println!("{mad}");
    Ok(())
}
