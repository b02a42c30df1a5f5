//! Run orchestration
//!
//! This module provides the core workflow logic:
//! - [`engine`]: the [`engine::Session`] context object and the run
//!   orchestrator
//! - [`errors`]: the crate-wide [`errors::SortError`] taxonomy
//!
//! # Execution model
//!
//! Fully synchronous and single-threaded: a run copies the loaded numbers,
//! dispatches the selected algorithm, applies the requested order, and
//! computes statistics before returning.  There is no cancellation, no
//! timeout, and no background work.  Each run is independent; its result
//! replaces the previous one.

pub mod engine;
pub mod errors;
