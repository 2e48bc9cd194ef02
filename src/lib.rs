//! p4tl - Perforce file timeline
//!
//! A TUI showing the revision history of Perforce files as an expandable tree.
//!
//! This library provides:
//! - [`app`]: Application state and logic
//! - [`cli`]: Command-line interface
//! - [`config`]: Runtime configuration
//! - [`keys`]: Key binding definitions
//! - [`model`]: Domain models
//! - [`p4`]: p4 command execution and parsing
//! - [`timeline`]: History tree presenter and controller
//! - [`ui`]: User interface components

pub mod app;
pub mod cli;
pub mod config;
pub mod keys;
pub mod model;
pub mod p4;
pub mod timeline;
pub mod ui;
