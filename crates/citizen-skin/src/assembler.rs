//! The skin assembler.
//!
//! Merges the partial builders' output over the host's base template
//! document, toggles optional feature modules during initialization, and
//! masks navigation entries the drawer re-surfaces. Composition over the
//! host context: the host injects the context, the bound partial set, and
//! a configuration reader at construction.

use citizen_types::config::ConfigLookup;
use citizen_types::error::Result;
use citizen_types::nav::NavUrls;
use citizen_types::options::RenderOptions;
use citizen_types::value::{TemplateData, TemplateValue};

use crate::context::{HostContext, PageTitle};
use crate::features;
use crate::partials::Partials;

/// Assembles the page chrome template document for one page view.
pub struct SkinAssembler {
    ctx: Box<dyn HostContext>,
    partials: Partials,
    config: Box<dyn ConfigLookup>,
}

impl SkinAssembler {
    pub fn new(
        ctx: Box<dyn HostContext>,
        partials: Partials,
        config: Box<dyn ConfigLookup>,
    ) -> Self {
        Self {
            ctx,
            partials,
            config,
        }
    }

    /// Set up optional skin features and hand the options to the host
    /// initializer.
    pub fn initialize(&self, mut options: RenderOptions) -> Result<()> {
        self.partials.metadata.add_metadata()?;
        self.partials.theme.set_skin_theme(&mut options)?;
        features::apply_feature_modules(
            self.config.as_ref(),
            self.ctx.title().as_ref(),
            &mut options,
        );
        self.ctx.complete_initialization(options)
    }

    /// Build the template document: the host's base data overlaid with
    /// the skin's entries. New keys win on conflict; base keys are
    /// preserved otherwise.
    pub fn template_data(&self) -> Result<TemplateData> {
        let title = self.ctx.title();
        let mut base = self.ctx.base_template_data()?;

        let mut data = TemplateData::new();

        let toc_enabled = base.get("data-toc").is_some_and(TemplateValue::is_truthy);
        data.insert("toc-enabled", TemplateValue::Bool(toc_enabled))?;

        data.insert(
            "data-sitestats",
            self.partials.drawer.site_stats_data()?.into(),
        )?;

        let user_page = base
            .expect_data("data-portlets")?
            .expect_data("data-user-page")?;
        data.insert(
            "data-user-info",
            self.partials.header.user_info_data(user_page)?.into(),
        )?;

        // Conditionally absent values are null, never false or "".
        let heading = match &title {
            Some(t) => TemplateValue::String(self.partials.title.build_title(&base, t)?),
            None => TemplateValue::Null,
        };
        data.insert("html-title-heading--formatted", heading)?;

        let jump_to_top = base.expect_str("msg-citizen-jumptotop")?;
        data.insert(
            "html-citizen-jumptotop",
            format!("{jump_to_top} [home]").into(),
        )?;

        data.insert(
            "html-body-content--formatted",
            self.partials.body_content.build_body_content()?.into(),
        )?;
        data.insert("html-tagline", self.partials.tagline.tagline()?.into())?;

        // Parsed here because the messages are wikitext.
        data.insert(
            "msg-citizen-footer-desc",
            self.ctx.parsed_message("citizen-footer-desc").into(),
        )?;
        data.insert(
            "msg-citizen-footer-tagline",
            self.ctx.parsed_message("citizen-footer-tagline").into(),
        )?;

        // Decorate data provided by the host.
        let search_box = base.expect_data("data-search-box")?.clone();
        data.insert(
            "data-search-box",
            self.partials
                .header
                .decorate_search_box_data(search_box)?
                .into(),
        )?;

        let sidebar = base.expect_data("data-portlets-sidebar")?.clone();
        data.insert(
            "data-portlets-sidebar",
            self.partials.drawer.decorate_sidebar_data(sidebar)?.into(),
        )?;

        let footer = base.expect_data("data-footer")?.clone();
        data.insert(
            "data-footer",
            self.partials.footer.decorate_footer_data(footer)?.into(),
        )?;

        data.merge_missing(self.partials.page_tools.page_tools_data(&base)?);

        // Show labels on the variants portlet.
        // TODO: drop once the host exposes portlet labels directly.
        if let Some(TemplateValue::Data(portlets)) = base.get_mut("data-portlets")
            && let Some(TemplateValue::Data(variants)) = portlets.get_mut("data-variants")
            && variants.get("is-empty") == Some(&TemplateValue::Bool(false))
        {
            variants.insert("has-label", TemplateValue::Bool(true))?;
        }

        Ok(base.overlaid_with(data))
    }

    /// The host's navigation URL table with the tools the drawer
    /// re-surfaces masked out of the generic toolbox.
    pub fn navigation_urls(&self) -> Result<NavUrls> {
        let mut urls = self.ctx.base_navigation_urls()?;
        urls.disable("upload");
        urls.disable("specialpages");
        Ok(urls)
    }

    /// Wrap body HTML the way the host wraps page content. Re-exposed for
    /// the partials.
    pub fn wrap_html(&self, title: &PageTitle, body_html: &str) -> String {
        self.ctx.wrap_html(title, body_html)
    }
}
