//! Shared database utilities: connection retry helpers.

pub mod retry;

pub use retry::{RetryConfig, retry, retry_with_backoff};
