//! Unicode code-point ranges as used by the `unicode-range` descriptor.

use std::fmt;

/// Inclusive code-point interval; `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnicodeRange {
    start: u32,
    end: u32,
}

impl UnicodeRange {
    /// Create a range, swapping the bounds if they come in reverse.
    pub fn new(start: u32, end: u32) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self { start: end, end: start }
        }
    }

    /// Range holding one code point.
    pub fn single(code_point: u32) -> Self {
        Self { start: code_point, end: code_point }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Number of code points covered.
    pub fn len(&self) -> u32 {
        self.end - self.start + 1
    }

    /// Minimal sorted set of ranges covering exactly `chars`.
    ///
    /// Adjacent code points collapse into one range, gaps start a new one.
    pub fn covering(chars: impl IntoIterator<Item = char>) -> Vec<UnicodeRange> {
        let mut code_points: Vec<u32> = chars.into_iter().map(u32::from).collect();
        code_points.sort_unstable();
        code_points.dedup();

        let mut ranges: Vec<UnicodeRange> = Vec::new();
        for cp in code_points {
            match ranges.last_mut() {
                Some(last) if last.end + 1 == cp => last.end = cp,
                _ => ranges.push(UnicodeRange::single(cp)),
            }
        }
        ranges
    }
}

impl fmt::Display for UnicodeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "U+{:04X}", self.start)
        } else {
            write!(f, "U+{:04X}-{:04X}", self.start, self.end)
        }
    }
}

/// Render ranges the way a `unicode-range` descriptor expects them.
pub fn format_ranges(ranges: &[UnicodeRange]) -> String {
    ranges
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
