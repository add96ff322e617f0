//! Webtoon Favorites — Library Root
//!
//! Re-exports all modules for the CLI, integration tests and benchmarks.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod usecases;
