pub mod app;
pub mod download;
pub mod error;
pub mod job;
pub mod logging;
pub mod sync;
pub mod verify;

pub use error::{JobSetError, SyncError};
pub use job::{JobSet, SyncJob};
pub use sync::{run_all, sync, SyncReport};
