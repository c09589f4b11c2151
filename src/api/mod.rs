//! # API Module
//!
//! This module provides the HTTP endpoints for the local analysis server
//! started by `spinsight serve`. It is the web-facing presentation layer
//! over the same pipeline the CLI drives.
//!
//! ## Endpoints
//!
//! - [`analyze`] - Runs the full pipeline for a playlist passed as a query
//!   parameter and returns the feature summary together with the generated
//!   commentary as JSON.
//! - [`health`] - Health check returning application status and version
//!   for monitoring.
//!
//! ## Error Mapping
//!
//! Every tagged [`crate::error::InsightError`] variant maps to its own
//! HTTP status code, and the JSON body carries the error kind so clients
//! can branch on it:
//!
//! - `InvalidPlaylist` → 400
//! - `NotFound` → 404
//! - `EmptyPlaylist` → 422
//! - `RateLimited` → 429
//! - `Authentication`, `UpstreamUnavailable`, `InvalidResponse`, `Http` → 502
//!
//! ## Architecture
//!
//! Built on [Axum](https://docs.rs/axum); each endpoint is an async
//! function wired into the router in [`crate::server`]. The completion
//! provider is shared through an [`axum::Extension`] layer.

mod analyze;
mod health;

pub use analyze::analyze;
pub use health::health;
