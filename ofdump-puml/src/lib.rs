//! Command-line support for drawing OpenFlow flow dumps.
//!
//! Parsing and rendering live in `flowdump-core`; this crate adds the
//! pieces a terminal tool needs on top:
//!
//! - [`config`] — TOML render settings with embedded defaults
//! - [`report`] — colored summaries of a parsed dump
//! - [`path_guard`] — keeps the diagram from overwriting its input

pub mod config;
pub mod path_guard;
pub mod report;
