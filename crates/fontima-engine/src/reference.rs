//! Font Reference Parser
//!
//! A reference is a Google Fonts CSS2 request URL:
//!
//! ```text
//! https://fonts.googleapis.com/css2?family=Roboto:ital,wght@0,400;1,700&family=Inter&display=swap
//! ```
//!
//! Each `family=` segment is a [`FamilyValue`]:
//! `<name>[:<axis>,<axis>,...][@<tuple>;<tuple>;...]`.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use fontima_text::{AxisTag, AxisValue};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;

use crate::error::{FamilyError, ReferenceError};

/// Base of every stylesheet request.
pub const CSS_API: &str = "https://fonts.googleapis.com/css2";

const DISPLAY: &str = "display=swap";

/// Left as-is in `text=`: the unreserved marks of a URI component.
const TEXT_QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const REFERENCE_PATTERN: &str =
    r"https://fonts\.googleapis\.com/css2\?(?:family=[A-Za-z0-9+,.:;@-]+&)+display=swap";

static FULL_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{REFERENCE_PATTERN}$")).expect("valid regex"));

static EMBEDDED_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(REFERENCE_PATTERN).expect("valid regex"));

/// A validated stylesheet request URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontReference(String);

impl FontReference {
    /// Accept `url` only if it is exactly a stylesheet request, surrounding
    /// whitespace included.
    pub fn validate(url: &str) -> Result<Self, ReferenceError> {
        if FULL_REFERENCE.is_match(url) {
            Ok(Self(url.to_string()))
        } else {
            Err(ReferenceError(url.to_string()))
        }
    }

    /// Find the first stylesheet request inside arbitrary text, such as a
    /// pasted `<link>` tag.
    pub fn find_in(text: &str) -> Result<Self, ReferenceError> {
        EMBEDDED_REFERENCE
            .find(text)
            .map(|m| Self(m.as_str().to_string()))
            .ok_or_else(|| ReferenceError(text.trim().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Family values in request order.
    pub fn family_values(&self) -> Vec<FamilyValue> {
        let query = self.0.split_once('?').map_or("", |(_, q)| q);
        query
            .split('&')
            .filter_map(|pair| pair.strip_prefix("family="))
            .map(FamilyValue::new)
            .collect()
    }

    /// This reference with a `text=` filter restricting it to `chars`.
    pub fn with_text(&self, chars: &str) -> String {
        format!("{}&text={}", self.0, utf8_percent_encode(chars, TEXT_QUERY))
    }
}

impl fmt::Display for FontReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for FontReference {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::validate(s)
    }
}

/// One family's request segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FamilyValue(String);

impl FamilyValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Encoded name: everything before the first `:` or `@`.
    fn encoded_name(&self) -> &str {
        let end = self.0.find([':', '@']).unwrap_or(self.0.len());
        &self.0[..end]
    }

    /// Display name, `+` decoded to space.
    pub fn family_name(&self) -> String {
        self.encoded_name().replace('+', " ")
    }

    /// Axis tags between `:` and `@`; `None` without a `:` segment.
    pub fn axis_headers(&self) -> Option<Vec<&str>> {
        let (_, rest) = self.0.split_once(':')?;
        let headers = rest.split_once('@').map_or(rest, |(h, _)| h);
        Some(headers.split(',').collect())
    }

    /// Style tuples after `@`; `None` without an `@` segment.
    pub fn style_tuples(&self) -> Option<Vec<Vec<&str>>> {
        let (_, tuples) = self.0.split_once('@')?;
        Some(tuples.split(';').map(|t| t.split(',').collect()).collect())
    }

    /// Single-family stylesheet request for this value.
    pub fn reference(&self) -> FontReference {
        FontReference(format!("{CSS_API}?family={}&{DISPLAY}", self.0))
    }

    /// One style per tuple, or the single default style without tuples.
    ///
    /// Fails when headers and tuples do not come together, a tuple has the
    /// wrong arity, or a tag/value is not understood.
    pub fn styles(&self) -> Result<Vec<FamilyStyle>, FamilyError> {
        let (headers, tuples) = match (self.axis_headers(), self.style_tuples()) {
            (None, None) => {
                return Ok(vec![FamilyStyle {
                    value: self.clone(),
                    axes: Vec::new(),
                }]);
            }
            (Some(headers), Some(tuples)) => (headers, tuples),
            _ => {
                return Err(FamilyError::InvalidFamily(format!(
                    "{}: axis headers and style tuples must appear together",
                    self.0
                )));
            }
        };

        let tags = headers
            .iter()
            .map(|h| AxisTag::parse(h))
            .collect::<Result<Vec<_>, _>>()?;
        let name = self.encoded_name();
        let header_list = headers.join(",");

        tuples
            .iter()
            .map(|tuple| {
                if tuple.len() != tags.len() {
                    return Err(FamilyError::InvalidFamily(format!(
                        "{}: tuple {:?} has {} values for {} axes",
                        self.0,
                        tuple.join(","),
                        tuple.len(),
                        tags.len()
                    )));
                }
                let axes = tags
                    .iter()
                    .zip(tuple)
                    .map(|(&tag, value)| Ok((tag, AxisValue::parse(tag, value)?)))
                    .collect::<Result<Vec<_>, FamilyError>>()?;

                Ok(FamilyStyle {
                    value: FamilyValue(format!("{name}:{header_list}@{}", tuple.join(","))),
                    axes,
                })
            })
            .collect()
    }
}

impl fmt::Display for FamilyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One requestable style of a family.
#[derive(Debug, Clone, PartialEq)]
pub struct FamilyStyle {
    /// Family value requesting only this style.
    pub value: FamilyValue,
    /// Axis positions, in header order. Empty for the default style.
    pub axes: Vec<(AxisTag, AxisValue)>,
}
