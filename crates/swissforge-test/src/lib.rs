//! Shared test fixtures for SwissForge crates.
//!
//! This crate provides data builders and checks for testing. It only depends
//! on `swissforge-core`, so every other crate can use it as a dev-dependency.
//!
//! - [`scenario`] - lettered standings and histories (`A` is id 1, `B` is id 2, ...)
//! - [`check`] - round invariant assertions
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! swissforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use swissforge_test::scenario::{history, lettered_standings, pairing};
//! use swissforge_test::check::assert_valid_round;
//! ```

pub mod check;
pub mod scenario;

pub use check::assert_valid_round;
pub use scenario::{flat_standings, history, id, lettered_standings, pairing};
