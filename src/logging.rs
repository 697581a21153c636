use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs;
use std::path::PathBuf;

pub fn log_dir() -> Result<PathBuf> {
    let dir = directories::BaseDirs::new()
        .ok_or_else(|| anyhow::anyhow!("Failed to get base directories"))?
        .data_local_dir()
        .join("sheetsync")
        .join("logs");
    Ok(dir)
}

pub fn setup_logging() -> Result<PathBuf> {
    let log_dir = log_dir()?;
    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join(format!(
        "sheetsync_{}.log",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    ));

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .set_location_level(LevelFilter::Debug)
        .build();

    let file = fs::File::create(&log_file).context("Failed to create log file")?;
    WriteLogger::init(LevelFilter::Info, config, file)?;

    Ok(log_file)
}

/// Like [`setup_logging`], but a broken log location only costs the log file.
pub fn init() {
    if let Err(e) = setup_logging() {
        eprintln!("warning: file logging disabled: {:#}", e);
    }
}
