//! MongoDB connector with retry and health checking.
//!
//! # Features
//!
//! - `config` - load [`mongodb::MongoConfig`] from the environment via
//!   `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb;
//!
//! let client = mongodb::connect("mongodb://localhost:27017").await?;
//! let db = client.database("mydb");
//! ```

pub mod common;
pub mod mongodb;

pub use common::{RetryConfig, retry, retry_with_backoff};
