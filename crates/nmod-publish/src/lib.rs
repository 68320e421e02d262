//! Conditional publish configuration.
//!
//! Decides, at configuration time, whether each remote publishing target
//! should be registered, based on the presence of externally supplied
//! credential properties. Incomplete credentials silently skip the target;
//! only invoking the publish action with zero registered targets is an
//! error.

pub mod configurator;
pub mod credentials;
pub mod rule;
pub mod target;
pub mod task;
