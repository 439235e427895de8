//! Host rendering context contract.
//!
//! The skin is a plugin inside the host wiki's rendering pipeline. One
//! context exists per page view; everything on it is synchronous and
//! request-scoped.

use citizen_types::error::Result;
use citizen_types::nav::NavUrls;
use citizen_types::options::RenderOptions;
use citizen_types::value::TemplateData;

/// Title of the page being rendered.
///
/// Carries the host's content-page classification so the skin never has
/// to guess which namespace a page lives in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTitle {
    text: String,
    content_page: bool,
}

impl PageTitle {
    pub fn new(text: impl Into<String>, content_page: bool) -> Self {
        Self {
            text: text.into(),
            content_page,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the host classifies this page as a content page (as
    /// opposed to special or administrative views).
    pub fn is_content_page(&self) -> bool {
        self.content_page
    }
}

/// Operations the host rendering pipeline exposes to the skin.
pub trait HostContext {
    /// Title of the page being rendered. Absent for some special views;
    /// callers must treat absence as "not a content page".
    fn title(&self) -> Option<PageTitle>;

    /// Resolve an interface message in the wiki's content language and
    /// parse it from wikitext to HTML.
    fn parsed_message(&self, key: &str) -> String;

    /// The host's own template data for the current page. The skin layers
    /// its entries on top of this document.
    fn base_template_data(&self) -> Result<TemplateData>;

    /// The host's default navigation URL table.
    fn base_navigation_urls(&self) -> Result<NavUrls>;

    /// Hand the mutated options to the host initializer. Mandatory final
    /// step of skin initialization; the host owns the options afterwards.
    fn complete_initialization(&self, options: RenderOptions) -> Result<()>;

    /// Wrap rendered body HTML the way the host wraps page content.
    fn wrap_html(&self, title: &PageTitle, body_html: &str) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_title_accessors() {
        let title = PageTitle::new("Main Page", true);
        assert_eq!(title.text(), "Main Page");
        assert!(title.is_content_page());

        let special = PageTitle::new("Special:Preferences", false);
        assert!(!special.is_content_page());
    }
}
