//! Obscura Studio Library
//!
//! Core functionality for the Obscura Studio terminal showcase: the
//! service catalog and slug derivation, the carousel animation engine,
//! the deep-link selection router, and the TUI sections built on them.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod content;
pub mod models;
pub mod services;
pub mod tui;
