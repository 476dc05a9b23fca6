use std::path::PathBuf;

use anyhow::Context;
use quickstat_stats::moments;

use crate::util;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct CorrelationArg {
    /// File with the x sample
    pub xs: PathBuf,

    /// File with the y sample
    pub ys: PathBuf,
}

pub(crate) fn run(arg: &CorrelationArg) -> anyhow::Result<()> {
    let xs = util::read_values(Some(&arg.xs))?;
    let ys = util::read_values(Some(&arg.ys))?;
    let r = moments::correlation(&xs, &ys).with_context(|| {
        format!(
            "Failed to correlate {} with {}",
            arg.xs.display(),
            arg.ys.display()
        )
    })?;
    println!("{r}");
    Ok(())
}
