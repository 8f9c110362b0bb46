//! Gallery primitives and their `data-ui-*` tokens.
//!
//! Every primitive renders `data-ui-primitive="true"` plus a `data-ui-kind`; variant and layout
//! choices are emitted as token attributes so the stylesheet never keys off element names.

use leptos::ev::MouseEvent;
use leptos::*;

mod controls;
mod data_display;
mod layout;

pub use controls::{Button, IconButton, LinkRow, RangeField, SelectField, TextField};
pub use data_display::{CodeBlock, Heading, Panel, PreviewStage, Swatch, Text};
pub use layout::{Cluster, IconGrid, IconGridItem, Stack};

macro_rules! ui_tokens {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident => $token:literal),+ $(,)? } default $default:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl $name {
            pub(crate) const fn token(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }
        }
    };
}

ui_tokens!(
    /// Button treatments.
    ButtonVariant {
        /// Filled action.
        Standard => "standard",
        /// Chrome-level action without a fill.
        Quiet => "quiet",
        /// Selectable tile (grid cells, tags).
        Tile => "tile",
    } default Standard
);

ui_tokens!(
    /// Typographic roles.
    TextRole {
        /// Running text.
        Body => "body",
        /// Field and section labels.
        Label => "label",
        /// Page or panel title.
        Title => "title",
        /// Monospace values.
        Code => "code",
    } default Body
);

ui_tokens!(
    /// Text emphasis.
    TextTone {
        /// Full contrast.
        Primary => "primary",
        /// Muted.
        Secondary => "secondary",
    } default Primary
);

ui_tokens!(
    /// Spacing between flow children.
    LayoutGap {
        /// Flush.
        None => "none",
        /// Tight.
        Sm => "sm",
        /// Regular.
        Md => "md",
        /// Loose.
        Lg => "lg",
    } default Md
);

ui_tokens!(
    /// Inner padding.
    LayoutPadding {
        /// Flush.
        None => "none",
        /// Tight.
        Sm => "sm",
        /// Regular.
        Md => "md",
    } default None
);

ui_tokens!(
    /// Cross-axis alignment.
    LayoutAlign {
        /// Fill the cross axis.
        Stretch => "stretch",
        /// Align to the start edge.
        Start => "start",
        /// Center.
        Center => "center",
    } default Stretch
);

ui_tokens!(
    /// Main-axis distribution.
    LayoutJustify {
        /// Pack at the start.
        Start => "start",
        /// Push first and last children to the edges.
        Between => "between",
    } default Start
);

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(extra) if !extra.is_empty() => format!("{base} {extra}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Percent position of `value` within `[min, max]`, used for the range track fill.
pub(crate) fn range_percent(value: &str, min: &str, max: &str) -> f32 {
    let value = value.parse::<f32>().unwrap_or(0.0);
    let min = min.parse::<f32>().unwrap_or(0.0);
    let max = max.parse::<f32>().unwrap_or(100.0);
    let span = max - min;
    if span <= 0.0 {
        return 0.0;
    }
    (((value - min) / span) * 100.0).clamp(0.0, 100.0)
}

/// Inline `grid-template-columns` for an auto-filling grid with a minimum cell width.
pub(crate) fn grid_columns_style(min_cell_px: i64) -> String {
    format!("grid-template-columns:repeat(auto-fill, minmax({min_cell_px}px, 1fr))")
}
