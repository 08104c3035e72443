//! Typed async client for the WAIaaS wallet daemon.
//!
//! [`retry`] holds the backoff policy and the retry loop every call runs
//! through; [`client`] exposes the REST endpoints as methods returning the
//! records in [`models`].

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod retry;

pub use client::{ClientBuilder, WaiaasClient};
pub use error::{ApiError, WaiaasError};
pub use retry::{Retryable, RetryPolicy};
