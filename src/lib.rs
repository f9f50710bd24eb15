//! Demo HTTP info service for validating CI/CD deployment mechanics.
//!
//! Exposes three static JSON endpoints used by deployment tooling
//! (load-balancer health checks, smoke tests):
//!
//! ```text
//! GET /health     -> {status, timestamp, version}
//! GET /           -> {message, environment, timestamp}
//! GET /api/info   -> {app, version, runtimeVersion, environment, uptimeSeconds}
//! ```
//!
//! Handlers are side-effect-free: each response is built from the
//! request-local clock plus read-only process state ([`api::AppState`]).
//! The process shuts down gracefully on Ctrl-C or SIGTERM, letting
//! in-flight requests complete before the listener is released.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: Router, handlers, and response types
//! - [`metrics`]: Request counters
//! - [`utils`]: Shutdown signal and timestamp helpers

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
