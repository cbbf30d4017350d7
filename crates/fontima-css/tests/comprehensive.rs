//! Comprehensive tests for fontima-css
//!
//! Real-shaped API responses through injection and reassembly.

use fontima_css::*;
use fontima_text::UnicodeRange;
use pretty_assertions::assert_eq;

const CHUNK_A: &str = "@font-face {
  font-family: 'Roboto';
  font-style: normal;
  font-weight: 400;
  font-display: swap;
  src: url(https://fonts.gstatic.com/l/font?kit=KFOmCnqEu92Fr1Me4GZLCzYlKw&skey=a0a0114a1dcab3ac&v=v30) format('woff2');
}
";

const CHUNK_B: &str = "@font-face {
  font-family: 'Roboto';
  font-style: normal;
  font-weight: 400;
  font-display: swap;
  src: url(https://fonts.gstatic.com/l/font?kit=KFOmCnqEu92Fr1Me4WZLCzYlKw&skey=a0a0114a1dcab3ac&v=v30) format('woff2');
}
";

// ============================================================================
// REASSEMBLY TESTS
// ============================================================================

#[test]
fn test_injected_chunks_reassemble_in_order() {
    let a = inject_unicode_range(CHUNK_A, &UnicodeRange::covering("abc".chars()));
    let b = inject_unicode_range(CHUNK_B, &UnicodeRange::covering("xyz".chars()));

    let css = reassemble([&a, &b]);
    assert_eq!(css, format!("{a}{b}"));

    let blocks = parse_blocks(&css);
    assert_eq!(blocks[0].declaration("unicode-range"), Some("U+0061-0063"));
    assert_eq!(blocks[1].declaration("unicode-range"), Some("U+0078-007A"));
}

#[test]
fn test_identical_blocks_collapse() {
    let a = inject_unicode_range(CHUNK_A, &[UnicodeRange::single(0x41)]);
    let css = reassemble([a.clone(), a.clone(), a.clone()]);
    assert_eq!(css, a);
}

#[test]
fn test_reassemble_is_idempotent() {
    let (a, b) = (CHUNK_A.to_string(), CHUNK_B.to_string());
    let once = reassemble([format!("{a}{b}"), format!("{b}{a}")]);
    let twice = reassemble([&once]);
    assert_eq!(once, twice);
}

#[test]
fn test_same_ranges_different_files_are_kept() {
    let ranges = [UnicodeRange::single(0x41)];
    let a = inject_unicode_range(CHUNK_A, &ranges);
    let b = inject_unicode_range(CHUNK_B, &ranges);
    assert_eq!(parse_blocks(&reassemble([a, b])).len(), 2);
}

// ============================================================================
// SOURCE URL TESTS
// ============================================================================

#[test]
fn test_source_urls_in_first_seen_order() {
    let blocks = parse_blocks(&format!("{CHUNK_B}{CHUNK_A}{CHUNK_B}"));
    let urls = source_urls(&blocks);
    assert_eq!(urls.len(), 2);
    assert!(urls[0].contains("4WZL"));
    assert!(urls[1].contains("4GZL"));
}

#[test]
fn test_chunk_without_trailing_newline() {
    let a = CHUNK_A.trim_end();
    let css = reassemble([a, CHUNK_B]);
    assert_eq!(css, format!("{CHUNK_A}{CHUNK_B}"));
}
