//! Scoring and tiered content generation engine for the Ikigai career
//! assessment platform. The binary in `main.rs` exposes the engine over a
//! small HTTP service and a CLI demo; everything with behavior lives in
//! the library so it can be driven in-process.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
