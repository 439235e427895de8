//! Render options mutated during skin initialization.
//!
//! The host constructs one options bag per page view and hands it to the
//! skin before initialization. The skin appends optional feature modules
//! and disables the host ToC, then the host initializer takes ownership.

use serde::Deserialize;

/// Mutable configuration bag passed at skin construction time.
///
/// Script and style module lists are ordered; append order determines the
/// module-loading order downstream.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RenderOptions {
    /// Script module identifiers, in load order.
    #[serde(default)]
    pub scripts: Vec<String>,
    /// Style module identifiers, in load order.
    #[serde(default)]
    pub styles: Vec<String>,
    /// Whether the host renders its own table of contents.
    #[serde(default = "yes")]
    pub toc: bool,
}

fn yes() -> bool {
    true
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scripts: Vec::new(),
            styles: Vec::new(),
            toc: true,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a script module identifier.
    pub fn add_script(&mut self, id: impl Into<String>) {
        self.scripts.push(id.into());
    }

    /// Append a style module identifier.
    pub fn add_style(&mut self, id: impl Into<String>) {
        self.styles.push(id.into());
    }
}
