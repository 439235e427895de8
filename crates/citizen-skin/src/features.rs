//! Optional feature modules toggled from configuration flags.
//!
//! Each flag independently appends script or style module identifiers to
//! the render options. The append order is fixed and load-bearing: the
//! host loads modules in list order.

use citizen_types::config::ConfigLookup;
use citizen_types::options::RenderOptions;

use crate::context::PageTitle;

/// Configuration flag names.
pub mod flags {
    pub const ENABLE_COLLAPSIBLE_SECTIONS: &str = "EnableCollapsibleSections";
    pub const ENABLE_CJK_FONTS: &str = "EnableCJKFonts";
    pub const ENABLE_DRAWER_SITE_STATS: &str = "EnableDrawerSiteStats";
    pub const ENABLE_DRAWER_SUB_SEARCH: &str = "EnableDrawerSubSearch";
    pub const SHOW_DEBUG: &str = "ShowDebug";
    pub const SHOW_EXCEPTION_DETAILS: &str = "ShowExceptionDetails";
}

/// Module identifiers registered with the host loader.
pub mod modules {
    pub const SCRIPT_SECTIONS: &str = "skins.citizen.scripts.sections";
    pub const STYLE_SECTIONS: &str = "skins.citizen.styles.sections";
    pub const STYLE_SECTION_ICONS: &str = "skins.citizen.icons.sections";
    pub const STYLE_CJK_FONTS: &str = "skins.citizen.styles.fonts.cjk";
    pub const STYLE_SITESTATS: &str = "skins.citizen.styles.sitestats";
    pub const SCRIPT_DRAWER: &str = "skins.citizen.scripts.drawer";
    pub const STYLE_DEBUG: &str = "skins.citizen.styles.debug";
}

/// Toggle optional feature modules on the render options.
///
/// A missing title means "not a content page"; the collapsible-sections
/// branch is skipped without error.
pub fn apply_feature_modules(
    config: &dyn ConfigLookup,
    title: Option<&PageTitle>,
    options: &mut RenderOptions,
) {
    // The skin renders its own table of contents.
    options.toc = false;

    // Collapsible sections, content pages only.
    if title.is_some_and(PageTitle::is_content_page)
        && config.is_enabled(flags::ENABLE_COLLAPSIBLE_SECTIONS)
    {
        options.add_script(modules::SCRIPT_SECTIONS);
        options.add_style(modules::STYLE_SECTIONS);
        options.add_style(modules::STYLE_SECTION_ICONS);
        log::debug!("collapsible sections enabled");
    }

    // CJK fonts.
    if config.is_enabled(flags::ENABLE_CJK_FONTS) {
        options.add_style(modules::STYLE_CJK_FONTS);
    }

    // Drawer site statistics.
    if config.is_enabled(flags::ENABLE_DRAWER_SITE_STATS) {
        options.add_style(modules::STYLE_SITESTATS);
    }

    // Drawer subsearch.
    if config.is_enabled(flags::ENABLE_DRAWER_SUB_SEARCH) {
        options.add_script(modules::SCRIPT_DRAWER);
    }

    // Debug styles.
    if config.is_enabled(flags::SHOW_DEBUG) || config.is_enabled(flags::SHOW_EXCEPTION_DETAILS) {
        options.add_style(modules::STYLE_DEBUG);
    }
}
