//! Variable Font Axes
//!
//! Axis tags as they appear in a Google Fonts family request and their
//! mapping onto CSS. Registered axes (OpenType 1.8 registered design axes)
//! have a dedicated CSS property; custom axes are defined by Google Fonts and
//! can only be reached through `font-variation-settings`.

use std::fmt;

use crate::{Result, TextError};

/// CSS properties a registered axis maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CssProperty {
    FontOpticalSizing,
    FontStretch,
    FontStyle,
    FontWeight,
}

impl CssProperty {
    pub fn name(self) -> &'static str {
        match self {
            CssProperty::FontOpticalSizing => "font-optical-sizing",
            CssProperty::FontStretch => "font-stretch",
            CssProperty::FontStyle => "font-style",
            CssProperty::FontWeight => "font-weight",
        }
    }
}

/// Registered (standard) axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegisteredAxis {
    Italic,
    OpticalSize,
    Slant,
    Weight,
    Width,
}

struct RegisteredAxisSpec {
    tag: &'static str,
    label: &'static str,
    property: CssProperty,
    to_css: fn(&AxisValue) -> Option<String>,
}

// Indexed by `RegisteredAxis as usize`.
static REGISTERED_AXES: [RegisteredAxisSpec; 5] = [
    RegisteredAxisSpec { tag: "ital", label: "Italic", property: CssProperty::FontStyle, to_css: italic_to_css },
    RegisteredAxisSpec { tag: "opsz", label: "Optical size", property: CssProperty::FontOpticalSizing, to_css: optical_size_to_css },
    RegisteredAxisSpec { tag: "slnt", label: "Slant", property: CssProperty::FontStyle, to_css: slant_to_css },
    RegisteredAxisSpec { tag: "wght", label: "Weight", property: CssProperty::FontWeight, to_css: weight_to_css },
    RegisteredAxisSpec { tag: "wdth", label: "Width", property: CssProperty::FontStretch, to_css: width_to_css },
];

impl RegisteredAxis {
    pub const ALL: [RegisteredAxis; 5] = [
        RegisteredAxis::Italic,
        RegisteredAxis::OpticalSize,
        RegisteredAxis::Slant,
        RegisteredAxis::Weight,
        RegisteredAxis::Width,
    ];

    fn spec(self) -> &'static RegisteredAxisSpec {
        &REGISTERED_AXES[self as usize]
    }

    pub fn tag(self) -> &'static str {
        self.spec().tag
    }

    pub fn label(self) -> &'static str {
        self.spec().label
    }

    pub fn css_property(self) -> CssProperty {
        self.spec().property
    }

    /// CSS value for `value` on this axis.
    pub fn to_css(self, value: &AxisValue) -> Result<String> {
        (self.spec().to_css)(value).ok_or_else(|| TextError::InvalidAxisValue {
            tag: self.tag().to_string(),
            value: value.to_string(),
        })
    }
}

/// Axes defined by Google Fonts, without a CSS property of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomAxis {
    AscenderHeight,
    Bounce,
    Casual,
    CounterWidth,
    Cursive,
    DescenderDepth,
    EdgeHighlight,
    ElementGrid,
    ElementShape,
    ExtrusionDepth,
    FigureHeight,
    Fill,
    Flare,
    Grade,
    HyperExpansion,
    Informality,
    LowercaseHeight,
    Monospace,
    Mutation,
    RotationX,
    RotationY,
    Roundness,
    Softness,
    Spacing,
    ThickStroke,
    ThinStroke,
    UppercaseHeight,
    Wonky,
    Year,
}

// Indexed by `CustomAxis as usize`: (tag, label).
static CUSTOM_AXES: [(&str, &str); 29] = [
    ("YTAS", "Ascender height"),
    ("BNCE", "Bounce"),
    ("CASL", "Casual"),
    ("XTRA", "Counter width"),
    ("CRSV", "Cursive"),
    ("YTDE", "Descender depth"),
    ("EHLT", "Edge highlight"),
    ("ELGR", "Element grid"),
    ("ELSH", "Element shape"),
    ("EDPT", "Extrusion depth"),
    ("YTFI", "Figure height"),
    ("FILL", "Fill"),
    ("FLAR", "Flare"),
    ("GRAD", "Grade"),
    ("HEXP", "Hyper expansion"),
    ("INFM", "Informality"),
    ("YTLC", "Lowercase height"),
    ("MONO", "Monospace"),
    ("MUTA", "Mutation"),
    ("XROT", "Rotation in X"),
    ("YROT", "Rotation in Y"),
    ("ROND", "Roundness"),
    ("SOFT", "Softness"),
    ("SPAC", "Spacing"),
    ("XOPQ", "Thick stroke"),
    ("YOPQ", "Thin stroke"),
    ("YTUC", "Uppercase height"),
    ("WONK", "Wonky"),
    ("YEAR", "Year"),
];

impl CustomAxis {
    pub const ALL: [CustomAxis; 29] = [
        CustomAxis::AscenderHeight,
        CustomAxis::Bounce,
        CustomAxis::Casual,
        CustomAxis::CounterWidth,
        CustomAxis::Cursive,
        CustomAxis::DescenderDepth,
        CustomAxis::EdgeHighlight,
        CustomAxis::ElementGrid,
        CustomAxis::ElementShape,
        CustomAxis::ExtrusionDepth,
        CustomAxis::FigureHeight,
        CustomAxis::Fill,
        CustomAxis::Flare,
        CustomAxis::Grade,
        CustomAxis::HyperExpansion,
        CustomAxis::Informality,
        CustomAxis::LowercaseHeight,
        CustomAxis::Monospace,
        CustomAxis::Mutation,
        CustomAxis::RotationX,
        CustomAxis::RotationY,
        CustomAxis::Roundness,
        CustomAxis::Softness,
        CustomAxis::Spacing,
        CustomAxis::ThickStroke,
        CustomAxis::ThinStroke,
        CustomAxis::UppercaseHeight,
        CustomAxis::Wonky,
        CustomAxis::Year,
    ];

    pub fn tag(self) -> &'static str {
        CUSTOM_AXES[self as usize].0
    }

    pub fn label(self) -> &'static str {
        CUSTOM_AXES[self as usize].1
    }
}

/// A 4-character axis identifier from a family request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisTag {
    Registered(RegisteredAxis),
    Custom(CustomAxis),
}

impl AxisTag {
    /// Look a tag up in the closed set of known axes.
    pub fn parse(tag: &str) -> Result<Self> {
        if let Some(axis) = RegisteredAxis::ALL.into_iter().find(|a| a.tag() == tag) {
            return Ok(AxisTag::Registered(axis));
        }
        CustomAxis::ALL
            .into_iter()
            .find(|a| a.tag() == tag)
            .map(AxisTag::Custom)
            .ok_or_else(|| TextError::UnknownAxisTag(tag.to_string()))
    }

    pub fn tag(self) -> &'static str {
        match self {
            AxisTag::Registered(axis) => axis.tag(),
            AxisTag::Custom(axis) => axis.tag(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AxisTag::Registered(axis) => axis.label(),
            AxisTag::Custom(axis) => axis.label(),
        }
    }

    /// Dedicated CSS property, if the axis has one.
    pub fn css_property(self) -> Option<CssProperty> {
        match self {
            AxisTag::Registered(axis) => Some(axis.css_property()),
            AxisTag::Custom(_) => None,
        }
    }
}

impl fmt::Display for AxisTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One entry of a style tuple: a fixed position or a `min..max` range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisValue {
    Single(f64),
    Range(f64, f64),
}

impl AxisValue {
    pub fn parse(tag: AxisTag, value: &str) -> Result<Self> {
        let invalid = || TextError::InvalidAxisValue {
            tag: tag.tag().to_string(),
            value: value.to_string(),
        };
        let parse_number = |s: &str| s.trim().parse::<f64>().ok().filter(|v| v.is_finite());

        match value.split_once("..") {
            Some((min, max)) => {
                let (min, max) = (
                    parse_number(min).ok_or_else(invalid)?,
                    parse_number(max).ok_or_else(invalid)?,
                );
                Ok(AxisValue::Range(min.min(max), min.max(max)))
            }
            None => parse_number(value).map(AxisValue::Single).ok_or_else(invalid),
        }
    }

    /// Entry for `font-variation-settings`; ranges have none.
    pub fn variation_setting(&self, tag: AxisTag) -> Option<String> {
        match *self {
            AxisValue::Single(v) => Some(format!("\"{}\" {}", tag, number(v))),
            AxisValue::Range(..) => None,
        }
    }
}

impl fmt::Display for AxisValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            AxisValue::Single(v) => f.write_str(&number(v)),
            AxisValue::Range(min, max) => write!(f, "{}..{}", number(min), number(max)),
        }
    }
}

// `-0.0 + 0.0` is `0.0`, so zero never renders as "-0".
fn number(v: f64) -> String {
    format!("{}", v + 0.0)
}

fn weight_to_css(value: &AxisValue) -> Option<String> {
    Some(match *value {
        AxisValue::Single(v) => number(v),
        AxisValue::Range(min, max) => format!("{} {}", number(min), number(max)),
    })
}

fn width_to_css(value: &AxisValue) -> Option<String> {
    Some(match *value {
        AxisValue::Single(v) => format!("{}%", number(v)),
        AxisValue::Range(min, max) => format!("{}% {}%", number(min), number(max)),
    })
}

fn italic_to_css(value: &AxisValue) -> Option<String> {
    match *value {
        AxisValue::Single(v) if v == 0.0 => Some("normal".to_string()),
        AxisValue::Single(v) if v == 1.0 => Some("italic".to_string()),
        _ => None,
    }
}

// Positive `slnt` leans left, CSS oblique angles lean right.
fn slant_to_css(value: &AxisValue) -> Option<String> {
    Some(match *value {
        AxisValue::Single(v) if v == 0.0 => "normal".to_string(),
        AxisValue::Single(v) => format!("oblique {}deg", number(-v)),
        AxisValue::Range(min, max) => format!("oblique {}deg {}deg", number(-max), number(-min)),
    })
}

fn optical_size_to_css(_: &AxisValue) -> Option<String> {
    Some("auto".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(tag: AxisTag, v: &str) -> AxisValue {
        AxisValue::parse(tag, v).unwrap()
    }

    #[test]
    fn test_table_order_matches_enum() {
        for axis in RegisteredAxis::ALL {
            assert_eq!(AxisTag::parse(axis.tag()).unwrap(), AxisTag::Registered(axis));
        }
        for axis in CustomAxis::ALL {
            assert_eq!(AxisTag::parse(axis.tag()).unwrap(), AxisTag::Custom(axis));
        }
    }

    #[test]
    fn test_unknown_tag() {
        assert_eq!(
            AxisTag::parse("ZZZZ"),
            Err(TextError::UnknownAxisTag("ZZZZ".into()))
        );
    }

    #[test]
    fn test_registered_properties() {
        let wght = AxisTag::parse("wght").unwrap();
        assert_eq!(wght, AxisTag::Registered(RegisteredAxis::Weight));
        assert_eq!(wght.css_property(), Some(CssProperty::FontWeight));
        assert_eq!(wght.label(), "Weight");

        let grad = AxisTag::parse("GRAD").unwrap();
        assert!(matches!(grad, AxisTag::Custom(_)));
        assert_eq!(grad.css_property(), None);
        assert_eq!(grad.label(), "Grade");
    }

    #[test]
    fn test_weight_passes_through() {
        let tag = AxisTag::Registered(RegisteredAxis::Weight);
        assert_eq!(RegisteredAxis::Weight.to_css(&value(tag, "700")).unwrap(), "700");
        assert_eq!(RegisteredAxis::Weight.to_css(&value(tag, "100..900")).unwrap(), "100 900");
    }

    #[test]
    fn test_width_is_a_percentage() {
        let tag = AxisTag::Registered(RegisteredAxis::Width);
        assert_eq!(RegisteredAxis::Width.to_css(&value(tag, "87.5")).unwrap(), "87.5%");
        assert_eq!(RegisteredAxis::Width.to_css(&value(tag, "75..100")).unwrap(), "75% 100%");
    }

    #[test]
    fn test_italic_enumeration() {
        let tag = AxisTag::Registered(RegisteredAxis::Italic);
        assert_eq!(RegisteredAxis::Italic.to_css(&value(tag, "0")).unwrap(), "normal");
        assert_eq!(RegisteredAxis::Italic.to_css(&value(tag, "1")).unwrap(), "italic");
        assert!(RegisteredAxis::Italic.to_css(&value(tag, "0.5")).is_err());
    }

    #[test]
    fn test_slant() {
        let tag = AxisTag::Registered(RegisteredAxis::Slant);
        assert_eq!(RegisteredAxis::Slant.to_css(&value(tag, "0")).unwrap(), "normal");
        assert_eq!(RegisteredAxis::Slant.to_css(&value(tag, "-10")).unwrap(), "oblique 10deg");
        assert_eq!(
            RegisteredAxis::Slant.to_css(&value(tag, "-15..0")).unwrap(),
            "oblique 0deg 15deg"
        );
    }

    #[test]
    fn test_variation_setting() {
        let tag = AxisTag::parse("XTRA").unwrap();
        assert_eq!(value(tag, "468").variation_setting(tag).unwrap(), "\"XTRA\" 468");
        assert_eq!(value(tag, "323..603").variation_setting(tag), None);
    }

    #[test]
    fn test_invalid_value() {
        let tag = AxisTag::parse("wght").unwrap();
        assert!(AxisValue::parse(tag, "bold").is_err());
        assert!(AxisValue::parse(tag, "100..").is_err());
    }
}
