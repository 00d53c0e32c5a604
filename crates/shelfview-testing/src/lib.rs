//! Testing infrastructure for shelfview integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: Fluent interface for declarative test setup
//! - `fixtures`: Sample draft and catalog generation

pub mod fixtures;
pub mod world;

pub use world::TestWorld;
