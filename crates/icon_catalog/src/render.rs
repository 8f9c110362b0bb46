//! SVG snippet and inline-style rendering for catalog icons.
//!
//! Two forms of the same style exist: [`StyleParams`] holds the raw user-facing values exactly as
//! they appear in the address bar (used verbatim in the copyable snippet), and [`IconStyle`] holds
//! CSS values applied to rendered previews.

use crate::catalog::IconEntry;

/// Coordinate frame every icon body is drawn in.
pub const ICON_VIEW_BOX: &str = "0 0 24 24";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Raw presentation parameters, inserted literally into exported markup.
pub struct StyleParams {
    /// Icon edge length in pixels (numeric string, not validated).
    pub size: String,
    /// Stroke width in pixels (numeric string, not validated).
    pub stroke_width: String,
    /// `stroke-linecap` keyword.
    pub stroke_linecap: String,
    /// `stroke-linejoin` keyword.
    pub stroke_linejoin: String,
    /// Stroke color in CSS color syntax.
    pub color: String,
}

impl Default for StyleParams {
    fn default() -> Self {
        Self {
            size: "24".to_string(),
            stroke_width: "2".to_string(),
            stroke_linecap: "round".to_string(),
            stroke_linejoin: "round".to_string(),
            color: "currentColor".to_string(),
        }
    }
}

/// Builds the standalone SVG document shown in the detail panel for copy/paste and download.
pub fn svg_snippet(entry: &IconEntry, params: &StyleParams) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{ICON_VIEW_BOX}\" width=\"{size}\" height=\"{size}\" fill=\"none\" stroke=\"{color}\" stroke-width=\"{stroke_width}\" stroke-linecap=\"{linecap}\" stroke-linejoin=\"{linejoin}\">\n  {markup}\n</svg>",
        size = params.size,
        color = params.color,
        stroke_width = params.stroke_width,
        linecap = params.stroke_linecap,
        linejoin = params.stroke_linejoin,
        markup = entry.markup,
    )
}

/// File name offered when downloading an icon's snippet.
pub fn download_file_name(entry: &IconEntry) -> String {
    format!("{}.svg", entry.name)
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// CSS presentation for a rendered icon preview.
pub struct IconStyle {
    /// CSS length used for both width and height.
    pub size: String,
    /// CSS length for `stroke-width`.
    pub stroke_width: String,
    /// `stroke-linecap` value.
    pub stroke_linecap: String,
    /// `stroke-linejoin` value.
    pub stroke_linejoin: String,
    /// `stroke` color.
    pub color: String,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self::ambient(&StyleParams::default())
    }
}

impl IconStyle {
    /// Derives the ambient preview style from raw parameters; pixel quantities get a `px` unit.
    pub fn ambient(params: &StyleParams) -> Self {
        Self {
            size: format!("{}px", params.size),
            stroke_width: format!("{}px", params.stroke_width),
            stroke_linecap: params.stroke_linecap.clone(),
            stroke_linejoin: params.stroke_linejoin.clone(),
            color: params.color.clone(),
        }
    }

    /// Applies per-instance overrides, which take precedence over ambient values.
    ///
    /// Overrides are CSS values and are used as given (`"24px"`, `"100%"`, `"var(--x)"`).
    pub fn with_overrides(mut self, size: Option<&str>, color: Option<&str>) -> Self {
        if let Some(size) = size {
            self.size = size.to_string();
        }
        if let Some(color) = color {
            self.color = color.to_string();
        }
        self
    }

    /// Serializes the style as an inline `style` attribute value.
    pub fn to_inline_css(&self) -> String {
        format!(
            "width:{size};height:{size};stroke:{color};stroke-width:{stroke_width};stroke-linecap:{linecap};stroke-linejoin:{linejoin}",
            size = self.size,
            color = self.color,
            stroke_width = self.stroke_width,
            linecap = self.stroke_linecap,
            linejoin = self.stroke_linejoin,
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn home() -> IconEntry {
        IconEntry {
            name: "home".to_string(),
            markup: "<path/>".to_string(),
            tags: vec!["nav".to_string()],
        }
    }

    #[test]
    fn snippet_carries_size_and_color() {
        let params = StyleParams {
            size: "32".to_string(),
            color: "#ff0000".to_string(),
            ..StyleParams::default()
        };
        let snippet = svg_snippet(&home(), &params);

        assert!(snippet.contains(r#"width="32" height="32""#));
        assert!(snippet.contains(r##"stroke="#ff0000""##));
        assert_eq!(
            snippet,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 24 24\" width=\"32\" height=\"32\" fill=\"none\" stroke=\"#ff0000\" stroke-width=\"2\" stroke-linecap=\"round\" stroke-linejoin=\"round\">\n  <path/>\n</svg>"
        );
    }

    #[test]
    fn snippet_uses_linejoin_and_passes_values_through() {
        let params = StyleParams {
            size: "huge".to_string(),
            stroke_linejoin: "miter".to_string(),
            stroke_linecap: "butt".to_string(),
            ..StyleParams::default()
        };
        let snippet = svg_snippet(&home(), &params);

        assert!(snippet.contains(r#"width="huge""#));
        assert!(snippet.contains(r#"stroke-linecap="butt""#));
        assert!(snippet.contains(r#"stroke-linejoin="miter""#));
        assert_eq!(download_file_name(&home()), "home.svg");
    }

    #[test]
    fn overrides_win_over_ambient_style() {
        let ambient = IconStyle::ambient(&StyleParams {
            size: "48".to_string(),
            color: "teal".to_string(),
            ..StyleParams::default()
        });
        assert_eq!(ambient.size, "48px");
        assert_eq!(ambient.stroke_width, "2px");

        let chrome = ambient.clone().with_overrides(Some("24px"), Some("currentColor"));
        assert_eq!(chrome.size, "24px");
        assert_eq!(chrome.color, "currentColor");
        assert_eq!(chrome.stroke_linecap, ambient.stroke_linecap);

        let untouched = ambient.clone().with_overrides(None, None);
        assert_eq!(untouched, ambient);
    }

    #[test]
    fn inline_css_lists_every_property() {
        assert_eq!(
            IconStyle::default().to_inline_css(),
            "width:24px;height:24px;stroke:currentColor;stroke-width:2px;stroke-linecap:round;stroke-linejoin:round"
        );
    }
}
