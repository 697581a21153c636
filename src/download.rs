use bytes::Bytes;
use reqwest::blocking::Client;

use crate::error::SyncError;

/// Blocking client with no overall timeout; a slow export waits as long as it takes.
pub fn build_client() -> Result<Client, SyncError> {
    Client::builder()
        .timeout(None::<std::time::Duration>)
        .build()
        .map_err(SyncError::Client)
}

/// Issues one GET and returns the full body. Non-2xx responses are errors.
pub fn fetch_bytes(client: &Client, url: &str) -> Result<Bytes, SyncError> {
    log::info!("Downloading from {}", url);

    let response = client.get(url).send().map_err(|source| SyncError::Request {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(SyncError::Status {
            url: url.to_string(),
            status,
        });
    }

    let bytes = response.bytes().map_err(|source| SyncError::Request {
        url: url.to_string(),
        source,
    })?;

    log::info!("Download completed: {} bytes", bytes.len());
    Ok(bytes)
}
