//! Sheetnav - a terminal UI for browsing a folder tree and the sheets of
//! the workbook inside each folder.
//!
//! This library exposes modules for use in integration tests.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod scan;
pub mod state;
pub mod terminal;
pub mod ui;
pub mod workbook;
