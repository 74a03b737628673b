//! # I/O Module
//!
//! - [`scenario`] - TOML descriptions of the particles a workflow should create

pub mod scenario;
