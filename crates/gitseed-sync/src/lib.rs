//! Content API client: one create-file request per planned file, carrying
//! synthetic author/committer metadata.

pub mod client;
pub mod payload;
pub mod retry;

pub use client::{ApiConfig, ContentClient, ContentWriter, SyncError, WriteOutcome};
pub use payload::CreateFileRequest;
pub use retry::RetryPolicy;
