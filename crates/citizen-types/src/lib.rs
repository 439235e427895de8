//! Foundation types for the Citizen skin.
//!
//! This crate contains the host-agnostic value types shared by the Citizen
//! crates: the template document model and its key naming convention, the
//! mutable render options bag, the navigation URL table, configuration
//! lookup, and error types.

pub mod config;
pub mod error;
pub mod nav;
pub mod options;
pub mod value;
