//! counterdex: creature stat/damage estimation and team-counter scoring.
//!
//! Reference data (roster, relic catalog, meta pool) is loaded once into a
//! [data::DataRegistry]; everything downstream is a pure computation over
//! that context and the current team configuration.

pub mod analysis;
pub mod cli;
pub mod data;
pub mod engine;
pub mod parallel;
pub mod server;
