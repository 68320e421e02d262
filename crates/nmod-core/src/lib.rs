//! Core data types for the nmod configuration tool.
//!
//! This crate defines the types that describe an nmod project: the
//! `Nmod.toml` manifest, the layered property bag supplying externally
//! provided values (credentials among them), and the built-in defaults
//! shared by all of the maintainer's mod projects.
//!
//! This crate performs no network I/O and registers nothing; the
//! publish-side behavior lives in `nmod-publish`.

pub mod defaults;
pub mod manifest;
pub mod pom;
pub mod properties;
