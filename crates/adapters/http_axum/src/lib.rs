//! # geotrack-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the tracker **JSON API** under `/api/tracker`
//!   (`POST /location`, `GET /locations`, `GET /latest/{imei}`, `GET /stats/{imei}`)
//!   plus a `/health` liveness probe
//! - Hand the raw body and its content type to the ingestion use-case, so
//!   trackers posting `text/plain` (or nothing at all) are accepted
//! - Wrap every result in a `{ "success": bool, ... }` envelope
//! - Answer permissive CORS and trace every request
//!
//! ## Dependency rule
//! Depends on `geotrack-app` (for port traits and services) and `geotrack-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod envelope;
pub mod error;
pub mod router;
pub mod state;
