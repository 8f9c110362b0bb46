//! Build-time site metadata generated from `gallery.manifest.toml`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Presentation of a sidebar link.
pub enum LinkStyle {
    /// Prominent call-to-action button.
    Primary,
    /// Secondary button.
    Button,
    /// Plain external link row with a trailing arrow.
    External,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One sidebar link.
pub struct SidebarLink {
    /// Stable identifier used for DOM ids.
    pub id: &'static str,
    /// Visible label.
    pub label: &'static str,
    /// Absolute target URL.
    pub href: &'static str,
    /// Presentation.
    pub style: LinkStyle,
}

include!(concat!(env!("OUT_DIR"), "/gallery_manifest_generated.rs"));

/// Links rendered as buttons at the top of the sidebar.
pub fn action_links() -> impl Iterator<Item = &'static SidebarLink> {
    SIDEBAR_LINKS
        .iter()
        .filter(|link| link.style != LinkStyle::External)
}

/// Links rendered as external rows below the actions.
pub fn external_links() -> impl Iterator<Item = &'static SidebarLink> {
    SIDEBAR_LINKS
        .iter()
        .filter(|link| link.style == LinkStyle::External)
}

/// Document title for the gallery page.
pub fn document_title() -> String {
    format!("{GALLERY_TITLE} · {GALLERY_TAGLINE}")
}
