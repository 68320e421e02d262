//! Shared utilities for the nmod configuration tool.
//!
//! This crate provides the cross-cutting concerns used by the other nmod
//! crates: the unified error type and small filesystem helpers.

pub mod errors;
pub mod fs;
