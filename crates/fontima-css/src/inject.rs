//! Unicode-range injection
//!
//! Responses to `text=` requests carry no `unicode-range`, so the browser
//! would download every subset. Each `src` line gets the chunk's ranges
//! right after it.

use fontima_text::{UnicodeRange, format_ranges};

/// Insert `unicode-range: <ranges>;` after every `src: ...;` line, using the
/// `src` line's indentation.
pub fn inject_unicode_range(css: &str, ranges: &[UnicodeRange]) -> String {
    if ranges.is_empty() {
        return css.to_string();
    }

    let descriptor = format_ranges(ranges);
    let mut out = String::with_capacity(css.len() + descriptor.len() + 32);

    for line in css.split_inclusive('\n') {
        let content = line.trim_end_matches(['\n', '\r']);
        let newline = &line[content.len()..];
        out.push_str(content);

        if is_src_line(content) {
            let indent = &content[..content.len() - content.trim_start().len()];
            out.push('\n');
            out.push_str(indent);
            out.push_str("unicode-range: ");
            out.push_str(&descriptor);
            out.push(';');
        }
        out.push_str(newline);
    }

    out
}

fn is_src_line(line: &str) -> bool {
    let line = line.trim();
    line.starts_with("src:") && line.ends_with(';')
}
