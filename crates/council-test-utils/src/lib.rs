//! Shared test utilities for the council workspace.
//!
//! Dev-dependency only. [`TestCouncil`] builds a temporary project with a
//! council root, expert files and a project configuration.

pub mod council;

pub use council::TestCouncil;
