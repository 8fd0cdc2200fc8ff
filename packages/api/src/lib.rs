//! # API crate — the directory source
//!
//! This crate is everything the directory needs from the network. The UI calls
//! [`fetch_directory`] once on mount; the rest is plumbing behind it.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`source`] | The [`DirectorySource`] trait and the `reqwest`-based [`RandomUserSource`] |
//! | [`models`] | Wire format of randomuser.me responses and the projection into [`store::UserRecord`] |
//! | [`error`] | [`FetchError`]: transport, status and decode failures |
//!
//! ## Failure policy
//!
//! A failed fetch is logged and swallowed. [`fetch_directory`] returns `None`
//! and the caller keeps whatever records it already had (none on first load).
//! There is no retry.

pub mod error;
pub mod models;
pub mod source;

pub use error::FetchError;
pub use source::{DirectorySource, RandomUserSource};
pub use store::UserRecord;

/// Fetch one batch, logging and swallowing any failure.
pub async fn fetch_directory<S: DirectorySource>(
    source: &S,
    count: usize,
) -> Option<Vec<UserRecord>> {
    match source.fetch_batch(count).await {
        Ok(records) => {
            tracing::debug!("Fetched {} users", records.len());
            Some(records)
        }
        Err(e) => {
            tracing::error!("Error fetching user data: {}", e);
            None
        }
    }
}
