use anyhow::{Context, Result};
use log::{error, info};

use crate::job::JobSet;
use crate::logging;
use crate::sync::run_all;

pub fn run(set: &JobSet) -> Result<()> {
    for job in &set.jobs {
        info!("Job {}: {} -> {:?}", job.name, job.source_url, job.destination_path);
    }

    run_all(set).context("Sync failed")?;
    Ok(())
}

/// Entry point shared by the executables: log, load jobs, run, exit 1 on failure.
pub fn main_with<F>(load: F)
where
    F: FnOnce() -> Result<JobSet>,
{
    logging::init();
    info!("sheetsync {} starting", env!("CARGO_PKG_VERSION"));

    match load().and_then(|set| run(&set)) {
        Ok(()) => info!("Sync completed successfully"),
        Err(e) => {
            error!("Sync failed: {:#}", e);
            eprintln!("update failed: {}", describe(&e));
            std::process::exit(1);
        }
    }
}

/// Joins the error chain, skipping causes whose text the previous message already includes.
pub fn describe(err: &anyhow::Error) -> String {
    let mut parts: Vec<String> = Vec::new();
    for cause in err.chain() {
        let text = cause.to_string();
        if parts.last().is_some_and(|prev| prev.contains(&text)) {
            continue;
        }
        parts.push(text);
    }
    parts.join(": ")
}
