//! Contracts for the partial builders.
//!
//! Each partial is responsible for one region of the page chrome. The
//! assembler never looks inside them: it invokes their operations and
//! merges what comes back. Operations return `Result` so a failing
//! partial aborts the rendering pass; there is no recovery policy here.

use citizen_types::error::Result;
use citizen_types::options::RenderOptions;
use citizen_types::value::TemplateData;

use crate::context::PageTitle;

/// Header region: user info and the search box.
pub trait Header {
    /// Data for the logged-in / anonymous user block, derived from the
    /// host's user-page portlet data.
    fn user_info_data(&self, user_page: &TemplateData) -> Result<TemplateData>;

    /// Decorate the host's search box data with skin-specific entries.
    fn decorate_search_box_data(&self, search_box: TemplateData) -> Result<TemplateData>;
}

/// Drawer region: site statistics and the sidebar portlets.
pub trait Drawer {
    fn site_stats_data(&self) -> Result<TemplateData>;

    fn decorate_sidebar_data(&self, sidebar: TemplateData) -> Result<TemplateData>;
}

/// Footer region.
pub trait Footer {
    fn decorate_footer_data(&self, footer: TemplateData) -> Result<TemplateData>;
}

/// Formatted page title heading.
pub trait TitleBuilder {
    fn build_title(&self, base: &TemplateData, title: &PageTitle) -> Result<String>;
}

/// Site tagline below the title.
pub trait Tagline {
    fn tagline(&self) -> Result<String>;
}

/// Formatted page body content.
pub trait BodyContent {
    fn build_body_content(&self) -> Result<String>;
}

/// Page tools (edit, history, watch, ...) shown next to the content.
pub trait PageTools {
    /// Extra template entries derived from the host's base document. Keys
    /// already produced by the assembler are not overwritten.
    fn page_tools_data(&self, base: &TemplateData) -> Result<TemplateData>;
}

/// Document metadata (meta tags, preconnect hints). Opaque side effect on
/// the rendering context.
pub trait Metadata {
    fn add_metadata(&self) -> Result<()>;
}

/// Theme handling (light/dark/auto). May mutate the render options.
pub trait ThemeSetter {
    fn set_skin_theme(&self, options: &mut RenderOptions) -> Result<()>;
}

/// The full set of partial builders bound to one rendering context.
pub struct Partials {
    pub header: Box<dyn Header>,
    pub drawer: Box<dyn Drawer>,
    pub footer: Box<dyn Footer>,
    pub title: Box<dyn TitleBuilder>,
    pub tagline: Box<dyn Tagline>,
    pub body_content: Box<dyn BodyContent>,
    pub page_tools: Box<dyn PageTools>,
    pub metadata: Box<dyn Metadata>,
    pub theme: Box<dyn ThemeSetter>,
}
