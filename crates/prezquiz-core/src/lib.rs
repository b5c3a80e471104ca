//! prezquiz-core — Quiz engine, catalog, and scoring.
//!
//! This crate defines the president catalog, the session state machine,
//! and the statistics types that the CLI builds on.

pub mod catalog;
pub mod config;
pub mod dataset;
pub mod error;
pub mod session;
pub mod statistics;
pub mod traits;
