//! Citizen skin assembler.
//!
//! Assembles page chrome (header, drawer, footer, title, tagline, page
//! tools) into the template document consumed by the host wiki's Mustache
//! renderer. The assembler owns no rendering logic of its own: it toggles
//! optional feature modules from configuration flags, asks each partial
//! builder for its region's data, and overlays the result on the host's
//! base document.

// Re-exports from citizen-types (foundation types).
pub use citizen_types::config;
pub use citizen_types::error;
pub use citizen_types::nav;
pub use citizen_types::options;
pub use citizen_types::value;

pub mod assembler;
pub mod context;
pub mod features;
pub mod partials;

pub use assembler::SkinAssembler;
pub use context::{HostContext, PageTitle};
pub use partials::Partials;
