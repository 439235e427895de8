//! Read-only configuration flags consumed by the skin.
//!
//! The assembler receives a flag reader at construction and asks it one
//! question: is this named feature enabled? Anything the reader does not
//! know about reads as disabled.

use std::collections::HashMap;

use crate::error::{CitizenError, Result};

/// Boolean feature-flag lookup by name.
pub trait ConfigLookup {
    /// Whether the named flag is enabled. Unknown flags are disabled.
    fn is_enabled(&self, flag: &str) -> bool;
}

/// Map-backed flag set, loadable from a TOML table of booleans.
#[derive(Debug, Clone, Default)]
pub struct ConfigFlags {
    flags: HashMap<String, bool>,
}

impl ConfigFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style enable, for construction sites and tests.
    #[must_use]
    pub fn enable(mut self, flag: impl Into<String>) -> Self {
        self.flags.insert(flag.into(), true);
        self
    }

    /// Set a flag to an explicit value.
    pub fn set(&mut self, flag: impl Into<String>, value: bool) {
        self.flags.insert(flag.into(), value);
    }

    /// Parse a TOML table of booleans, e.g.:
    ///
    /// ```toml
    /// EnableCJKFonts = true
    /// ShowDebug = false
    /// ```
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let flags: HashMap<String, bool> = toml::from_str(toml_str)
            .map_err(|e| CitizenError::Config(format!("flags: {e}")))?;
        Ok(Self { flags })
    }
}

impl ConfigLookup for ConfigFlags {
    fn is_enabled(&self, flag: &str) -> bool {
        self.flags.get(flag).copied().unwrap_or(false)
    }
}
