//! The seven address-synchronized gallery fields.

use std::{fmt, str::FromStr};

use icon_catalog::StyleParams;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// One user-adjustable gallery field.
pub enum ViewField {
    /// Search query.
    Query,
    /// Selected icon name (empty means none).
    SelectedIcon,
    /// Icon size in pixels.
    Size,
    /// Stroke width in pixels.
    StrokeWidth,
    /// Stroke line cap.
    StrokeLinecap,
    /// Stroke line join.
    StrokeLinejoin,
    /// Stroke color.
    Color,
}

impl ViewField {
    /// Every field, in declaration (and parameter append) order.
    pub const ALL: [ViewField; 7] = [
        Self::Query,
        Self::SelectedIcon,
        Self::Size,
        Self::StrokeWidth,
        Self::StrokeLinecap,
        Self::StrokeLinejoin,
        Self::Color,
    ];

    /// Address-bar query parameter that mirrors this field.
    pub const fn param_name(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::SelectedIcon => "icon",
            Self::Size => "size",
            Self::StrokeWidth => "stroke_width",
            Self::StrokeLinecap => "stroke_linecap",
            Self::StrokeLinejoin => "stroke_linejoin",
            Self::Color => "color",
        }
    }

    /// Value used when the parameter is absent or empty.
    pub const fn default_value(self) -> &'static str {
        match self {
            Self::Query | Self::SelectedIcon => "",
            Self::Size => "24",
            Self::StrokeWidth => "2",
            Self::StrokeLinecap | Self::StrokeLinejoin => "round",
            Self::Color => "currentColor",
        }
    }
}

impl fmt::Display for ViewField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.param_name())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
/// Errors parsing field names and keyword values.
pub enum ParseFieldError {
    /// The string is not a known parameter name.
    #[error("unknown view parameter `{0}`")]
    UnknownParam(String),
    /// The string is not one of the keyword values accepted by the field.
    #[error("`{value}` is not a valid {field} keyword")]
    UnknownKeyword {
        /// Field whose keyword set was checked.
        field: ViewField,
        /// Rejected value.
        value: String,
    },
}

impl FromStr for ViewField {
    type Err = ParseFieldError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.param_name() == raw)
            .ok_or_else(|| ParseFieldError::UnknownParam(raw.to_string()))
    }
}

macro_rules! keyword_enum {
    ($(#[$meta:meta])* $name:ident, $field:expr, { $($(#[$vmeta:meta])* $variant:ident => ($token:literal, $label:literal)),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// Every keyword, in menu order.
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            /// CSS/SVG keyword.
            pub const fn token(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }

            /// Menu label.
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = ParseFieldError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                match raw {
                    $($token => Ok(Self::$variant),)+
                    _ => Err(ParseFieldError::UnknownKeyword {
                        field: $field,
                        value: raw.to_string(),
                    }),
                }
            }
        }
    };
}

keyword_enum!(
    /// `stroke-linecap` keywords offered by the style controls.
    StrokeLinecap, ViewField::StrokeLinecap, {
        /// Rounded ends.
        Round => ("round", "Round"),
        /// Squared ends extending past the path.
        Square => ("square", "Square"),
        /// Flat ends flush with the path.
        Butt => ("butt", "Butt"),
    }
);

keyword_enum!(
    /// `stroke-linejoin` keywords offered by the style controls.
    StrokeLinejoin, ViewField::StrokeLinejoin, {
        /// Rounded corners.
        Round => ("round", "Round"),
        /// Cut-off corners.
        Bevel => ("bevel", "Bevel"),
        /// Sharp corners.
        Miter => ("miter", "Miter"),
    }
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Bounds of an interactive range control. Only the widget enforces them.
pub struct ControlRange {
    /// Lower bound.
    pub min: &'static str,
    /// Upper bound.
    pub max: &'static str,
    /// Step increment.
    pub step: &'static str,
    /// Highlighted tick (the field default).
    pub tick: &'static str,
}

/// Size slider bounds.
pub const SIZE_RANGE: ControlRange = ControlRange {
    min: "12",
    max: "100",
    step: "4",
    tick: ViewField::Size.default_value(),
};

/// Stroke-width slider bounds.
pub const STROKE_WIDTH_RANGE: ControlRange = ControlRange {
    min: "1",
    max: "3",
    step: "0.5",
    tick: ViewField::StrokeWidth.default_value(),
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Current value of every gallery field. Values are kept as literal strings.
pub struct ViewState {
    query: String,
    selected_icon: String,
    size: String,
    stroke_width: String,
    stroke_linecap: String,
    stroke_linejoin: String,
    color: String,
}

fn leading_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    let mut value: Option<i64> = None;
    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(digit - b'0');
        let current = value.unwrap_or(0);
        value = Some(if negative {
            current.saturating_mul(10).saturating_sub(digit)
        } else {
            current.saturating_mul(10).saturating_add(digit)
        });
    }
    value
}

impl Default for ViewState {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl ViewState {
    /// Builds a state from a parameter lookup; absent or empty parameters yield field defaults.
    pub fn from_lookup(mut lookup: impl FnMut(&str) -> Option<String>) -> Self {
        let mut value = |field: ViewField| {
            lookup(field.param_name())
                .filter(|raw| !raw.is_empty())
                .unwrap_or_else(|| field.default_value().to_string())
        };
        Self {
            query: value(ViewField::Query),
            selected_icon: value(ViewField::SelectedIcon),
            size: value(ViewField::Size),
            stroke_width: value(ViewField::StrokeWidth),
            stroke_linecap: value(ViewField::StrokeLinecap),
            stroke_linejoin: value(ViewField::StrokeLinejoin),
            color: value(ViewField::Color),
        }
    }

    /// Current value of `field`.
    pub fn get(&self, field: ViewField) -> &str {
        match field {
            ViewField::Query => &self.query,
            ViewField::SelectedIcon => &self.selected_icon,
            ViewField::Size => &self.size,
            ViewField::StrokeWidth => &self.stroke_width,
            ViewField::StrokeLinecap => &self.stroke_linecap,
            ViewField::StrokeLinejoin => &self.stroke_linejoin,
            ViewField::Color => &self.color,
        }
    }

    pub(crate) fn slot_mut(&mut self, field: ViewField) -> &mut String {
        match field {
            ViewField::Query => &mut self.query,
            ViewField::SelectedIcon => &mut self.selected_icon,
            ViewField::Size => &mut self.size,
            ViewField::StrokeWidth => &mut self.stroke_width,
            ViewField::StrokeLinecap => &mut self.stroke_linecap,
            ViewField::StrokeLinejoin => &mut self.stroke_linejoin,
            ViewField::Color => &mut self.color,
        }
    }

    /// Search query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Selected icon name, or `None` when nothing is selected.
    pub fn selected_icon(&self) -> Option<&str> {
        Some(self.selected_icon.as_str()).filter(|name| !name.is_empty())
    }

    /// Raw size value.
    pub fn size(&self) -> &str {
        &self.size
    }

    /// Raw stroke-width value.
    pub fn stroke_width(&self) -> &str {
        &self.stroke_width
    }

    /// Stroke color.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Typed line cap, when the raw value is a known keyword.
    pub fn stroke_linecap(&self) -> Option<StrokeLinecap> {
        self.stroke_linecap.parse().ok()
    }

    /// Typed line join, when the raw value is a known keyword.
    pub fn stroke_linejoin(&self) -> Option<StrokeLinejoin> {
        self.stroke_linejoin.parse().ok()
    }

    /// Minimum grid cell width: three times the leading integer of `size`.
    ///
    /// The leading integer is read like `parseInt`: leading whitespace and one sign are accepted
    /// and parsing stops at the first non-digit. Out-of-range magnitudes saturate. Falls back to
    /// the default size when `size` has no leading digits.
    pub fn grid_cell_min_px(&self) -> i64 {
        let size = leading_integer(&self.size)
            .or_else(|| leading_integer(ViewField::Size.default_value()))
            .unwrap_or(24);
        size.saturating_mul(3)
    }

    /// Presentation parameters for snippet and preview rendering.
    pub fn style_params(&self) -> StyleParams {
        StyleParams {
            size: self.size.clone(),
            stroke_width: self.stroke_width.clone(),
            stroke_linecap: self.stroke_linecap.clone(),
            stroke_linejoin: self.stroke_linejoin.clone(),
            color: self.color.clone(),
        }
    }
}
