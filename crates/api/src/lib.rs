//! Public API types for the gfpoly library
//!
//! This crate provides the shared surface of the gfpoly ecosystem: the
//! error taxonomy every operation reports through, and the `Result` alias
//! used across the workspace. Arithmetic lives in `gfpoly-algorithms`;
//! this crate deliberately carries no logic of its own.

#![forbid(unsafe_code)]

pub mod error;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
