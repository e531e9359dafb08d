//! EcoSpire: resale value and recycling guidance for used electronics.
//!
//! The pricing core in [`domain`] is pure and synchronous. [`infra`] adds the
//! optional analysis service, and [`config`]/[`util`] carry the ambient plumbing
//! shared with the desktop app.

pub mod config;
pub mod domain;
pub mod infra;
pub mod util;
