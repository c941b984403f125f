//! Testing infrastructure for holocron tests.
//!
//! This crate provides utilities for writing robust tests:
//! - `fixtures`: Catalog records and a small canonical catalog
//! - `TestWorld`: Isolated data directory with a seeded catalog cache
//! - `assertions`: Custom assertions over the CLI's JSON output

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CATALOG_FILE, CliResult, TestWorld};
