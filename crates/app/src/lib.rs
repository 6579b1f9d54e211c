//! # geotrack-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that storage adapters implement:
//!   - `LocationRepository` — append reports, query by IMEI and time
//! - Define **driving/inbound** use-case structs:
//!   - `IngestService` — decode, parse, validate and store a posted report
//!   - `QueryService` — list, latest-by-device, stats-by-device
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `geotrack-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
