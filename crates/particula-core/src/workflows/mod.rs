//! # Workflows Module
//!
//! High-level procedures that tie the `core` building blocks together.
//!
//! - [`populate`] - Build a model from a [`Scenario`](crate::core::io::scenario::Scenario),
//!   decorate every particle and render the result
//! - [`error`] - The error type shared by workflows

pub mod error;
pub mod populate;
