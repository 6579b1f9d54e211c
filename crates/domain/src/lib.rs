//! # geotrack-domain
//!
//! Pure domain model for the geotrack GPS tracker backend.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Location reports** (one validated position fix of a device)
//! - Parse the **delimited wire format** `imei&longitude&height&latitude`
//! - Decode request **payloads** (JSON envelope or raw text) into that format
//! - Define **Device stats** (per-IMEI aggregate read model)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod fix;
pub mod location;
pub mod payload;
pub mod stats;
