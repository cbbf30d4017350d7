//! Style resolution
//!
//! Turns a style's axis positions into the CSS properties a page needs to
//! select it, and lists the subset files actually served for it.

use fontima_css::parse_blocks;
use fontima_text::{AxisTag, AxisValue, CssProperty};
use serde::Serialize;

use crate::error::FamilyError;

/// Properties selecting one optimized style.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CssProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_stretch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_optical_sizing: Option<String>,
    pub font_variation_settings: String,
    /// One descriptor per chunk.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unicode_range: Vec<String>,
}

impl CssProperties {
    /// Resolve axis positions through the axis table.
    pub fn from_axes(axes: &[(AxisTag, AxisValue)]) -> Result<Self, FamilyError> {
        let mut props = CssProperties::default();
        let mut variation_settings = Vec::new();

        for (tag, value) in axes {
            if let Some(setting) = value.variation_setting(*tag) {
                variation_settings.push(setting);
            }

            let AxisTag::Registered(axis) = *tag else {
                continue;
            };
            let css = axis.to_css(value)?;
            match axis.css_property() {
                CssProperty::FontStretch => props.font_stretch = Some(css),
                CssProperty::FontWeight => props.font_weight = Some(css),
                CssProperty::FontOpticalSizing => props.font_optical_sizing = Some(css),
                // `ital` and `slnt` share `font-style`; italic wins.
                CssProperty::FontStyle => {
                    if props.font_style.as_deref() != Some("italic") {
                        props.font_style = Some(css);
                    }
                }
            }
        }

        props.font_variation_settings = if variation_settings.is_empty() {
            "normal".to_string()
        } else {
            variation_settings.join(", ")
        };
        Ok(props)
    }

    pub fn with_unicode_ranges(mut self, ranges: Vec<String>) -> Self {
        self.unicode_range = ranges;
        self
    }
}

/// A served subset file and the ranges it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkedCssProperties {
    pub unicode_range: String,
    pub url: String,
}

/// One optimized style of a family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedFontStyle {
    pub css_properties: CssProperties,
    pub chunked_css_properties_list: Vec<ChunkedCssProperties>,
}

impl OptimizedFontStyle {
    /// Pair `css_properties` with every `@font-face` of the style's
    /// reassembled stylesheet.
    pub fn new(css_properties: CssProperties, css: &str) -> Self {
        let chunked_css_properties_list = parse_blocks(css)
            .iter()
            .filter(|block| block.is_font_face())
            .filter_map(|block| {
                let url = block.source_urls().next()?;
                Some(ChunkedCssProperties {
                    unicode_range: block.declaration("unicode-range").unwrap_or_default().to_string(),
                    url: url.to_string(),
                })
            })
            .collect();

        Self {
            css_properties,
            chunked_css_properties_list,
        }
    }
}
