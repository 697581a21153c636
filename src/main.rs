use anyhow::Context;
use std::path::PathBuf;

use sheetsync::{app, JobSet};

fn main() {
    let job_file = std::env::args_os().nth(1).map(PathBuf::from);

    app::main_with(move || match job_file {
        Some(path) => JobSet::from_file(&path)
            .with_context(|| format!("Failed to load jobs from {:?}", path)),
        None => Ok(JobSet::builtin()),
    });
}
