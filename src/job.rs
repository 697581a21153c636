use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{JobSetError, SyncError};

pub const ART_DESCRIPTIONS_URL: &str = "https://docs.google.com/spreadsheets/d/1D60iEzPocS3x-Rb3b8Y0eefuyqXHTR0N802U5_6K95Y/export?format=csv&gid=0";
pub const ART_DESCRIPTIONS_PATH: &str = "/Users/penguinsenior/Documents/GitHub/refsite/assets/artdescriptions/REFsiteartdescriptions.csv";

pub const PRODUCT_DESCRIPTIONS_URL: &str = "https://docs.google.com/spreadsheets/d/1ChEJHOebdtZLAgGKED-1c0kLeO6OvsthxqLEgJ0tXXM/export?format=csv&gid=0";
pub const PRODUCT_DESCRIPTIONS_PATH: &str = "/Users/penguinsenior/Documents/GitHub/refsite/assets/productdescriptions/REFsiteproductdescriptions.csv";

/// One sheet export and where it lands on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncJob {
    pub name: String,
    pub source_url: String,
    pub destination_path: PathBuf,
}

impl SyncJob {
    pub fn new(
        name: impl Into<String>,
        source_url: impl Into<String>,
        destination_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            source_url: source_url.into(),
            destination_path: destination_path.into(),
        }
    }

    pub fn art_descriptions() -> Self {
        Self::new("artdescriptions", ART_DESCRIPTIONS_URL, ART_DESCRIPTIONS_PATH)
    }

    pub fn product_descriptions() -> Self {
        Self::new(
            "productdescriptions",
            PRODUCT_DESCRIPTIONS_URL,
            PRODUCT_DESCRIPTIONS_PATH,
        )
    }

    /// Label used in the start message: the destination's file name.
    pub fn file_label(&self) -> String {
        self.destination_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.destination_path.display().to_string())
    }

    pub fn validate(&self) -> Result<(), SyncError> {
        if self.name.trim().is_empty() {
            return Err(SyncError::InvalidJob("job name is empty".into()));
        }

        if self.source_url.is_empty() {
            return Err(SyncError::InvalidJob(format!(
                "job {} has an empty source_url",
                self.name
            )));
        }

        let url = reqwest::Url::parse(&self.source_url).map_err(|e| {
            SyncError::InvalidJob(format!("job {} has an invalid source_url: {}", self.name, e))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(SyncError::InvalidJob(format!(
                "job {} uses unsupported scheme: {}",
                self.name,
                url.scheme()
            )));
        }

        if self.destination_path.as_os_str().is_empty() {
            return Err(SyncError::InvalidJob(format!(
                "job {} has an empty destination_path",
                self.name
            )));
        }

        if self.destination_path.file_name().is_none() {
            return Err(SyncError::InvalidJob(format!(
                "job {} destination_path has no file name: {:?}",
                self.name, self.destination_path
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSet {
    pub jobs: Vec<SyncJob>,
}

impl JobSet {
    pub fn builtin() -> Self {
        Self {
            jobs: vec![SyncJob::art_descriptions(), SyncJob::product_descriptions()],
        }
    }

    pub fn single(job: SyncJob) -> Self {
        Self { jobs: vec![job] }
    }

    pub fn from_json_str(text: &str) -> Result<Self, JobSetError> {
        let set: JobSet = serde_json::from_str(text)?;
        set.validate()?;
        Ok(set)
    }

    pub fn from_file(path: &Path) -> Result<Self, JobSetError> {
        log::info!("Loading jobs from: {:?}", path);
        let text = fs::read_to_string(path).map_err(|source| JobSetError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let set = Self::from_json_str(&text)?;
        log::info!("Loaded {} job(s)", set.jobs.len());
        Ok(set)
    }

    pub fn validate(&self) -> Result<(), JobSetError> {
        if self.jobs.is_empty() {
            return Err(JobSetError::Empty);
        }

        let mut names = HashSet::new();
        let mut destinations: HashMap<&Path, &str> = HashMap::new();
        for job in &self.jobs {
            job.validate()?;
            if !names.insert(job.name.as_str()) {
                return Err(JobSetError::DuplicateName(job.name.clone()));
            }
            if let Some(first) =
                destinations.insert(job.destination_path.as_path(), job.name.as_str())
            {
                return Err(JobSetError::DuplicateDestination {
                    first: first.to_string(),
                    second: job.name.clone(),
                    path: job.destination_path.clone(),
                });
            }
        }

        Ok(())
    }
}
