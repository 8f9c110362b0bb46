//! Shared UI primitive library for the icon gallery.
//!
//! The crate owns reusable Leptos primitives and the stable `data-ui-*` DOM contract consumed by
//! the gallery stylesheet. Gallery views compose these primitives instead of emitting ad hoc
//! control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    Button, ButtonVariant, Cluster, CodeBlock, Heading, IconButton, IconGrid, IconGridItem,
    LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, LinkRow, Panel, PreviewStage,
    RangeField, SelectField, Stack, Swatch, Text, TextField, TextRole, TextTone,
};

/// Convenience imports for crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Button, ButtonVariant, Cluster, CodeBlock, Heading, IconButton, IconGrid, IconGridItem,
        LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, LinkRow, Panel, PreviewStage,
        RangeField, SelectField, Stack, Swatch, Text, TextField, TextRole, TextTone,
    };
}
