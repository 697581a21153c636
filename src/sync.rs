use reqwest::blocking::Client;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::download::{build_client, fetch_bytes};
use crate::error::SyncError;
use crate::job::{JobSet, SyncJob};
use crate::verify::sha256_hex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub destination_path: PathBuf,
    pub bytes_written: usize,
    pub sha256: String,
}

/// Fetches `job.source_url` and overwrites `job.destination_path` with the body.
///
/// The body is read in full before the destination is opened, so a failed
/// request leaves any existing file as it was. The write itself is not atomic.
pub fn sync(job: &SyncJob) -> Result<SyncReport, SyncError> {
    let client = build_client()?;
    sync_with(&client, job)
}

pub fn sync_with(client: &Client, job: &SyncJob) -> Result<SyncReport, SyncError> {
    job.validate()?;

    println!("updating {}...", job.file_label());
    log::info!("Syncing job {}: {} -> {:?}", job.name, job.source_url, job.destination_path);

    if let Some(parent) = job.destination_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| SyncError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    let bytes = fetch_bytes(client, &job.source_url)?;

    let write_err = |source: std::io::Error| SyncError::Write {
        path: job.destination_path.clone(),
        source,
    };
    let mut file = fs::File::create(&job.destination_path).map_err(write_err)?;
    file.write_all(&bytes).map_err(write_err)?;

    let report = SyncReport {
        destination_path: job.destination_path.clone(),
        bytes_written: bytes.len(),
        sha256: sha256_hex(&bytes),
    };

    log::info!(
        "Wrote {} bytes to {:?} (sha256 {})",
        report.bytes_written,
        report.destination_path,
        report.sha256
    );
    println!("updated: {}", job.destination_path.display());

    Ok(report)
}

/// Runs every job in order, stopping at the first failure.
pub fn run_all(set: &JobSet) -> Result<Vec<SyncReport>, SyncError> {
    let client = build_client()?;
    let mut reports = Vec::with_capacity(set.jobs.len());

    for job in &set.jobs {
        reports.push(sync_with(&client, job)?);
    }

    log::info!("All {} job(s) completed", reports.len());
    Ok(reports)
}
