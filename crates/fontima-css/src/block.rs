//! `@font-face` block grammar.

use indexmap::IndexSet;

/// CSS declaration (property: value)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

/// One rule as served by the API, with its optional leading comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFaceBlock {
    /// Exact source text from the comment (or selector) through `}` plus a
    /// trailing newline.
    pub text: String,
    /// Comment body without the `/*` `*/` delimiters.
    pub comment: Option<String>,
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

impl FontFaceBlock {
    pub fn is_font_face(&self) -> bool {
        self.selector == "@font-face"
    }

    /// Value of the first declaration of `property`.
    pub fn declaration(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|d| d.property.eq_ignore_ascii_case(property))
            .map(|d| d.value.as_str())
    }

    /// Targets of every `url(...)` in the `src` declarations.
    pub fn source_urls(&self) -> impl Iterator<Item = &str> {
        self.declarations
            .iter()
            .filter(|d| d.property.eq_ignore_ascii_case("src"))
            .flat_map(|d| UrlIter { rest: &d.value })
    }
}

/// Parse every complete block in `css`, in source order.
///
/// Text outside blocks is skipped. A comment only belongs to a block when it
/// sits on the line right before the selector. An unterminated trailing block
/// is dropped.
pub fn parse_blocks(css: &str) -> Vec<FontFaceBlock> {
    let mut blocks = Vec::new();
    let mut comment: Option<(usize, String)> = None;
    let mut open: Option<OpenBlock> = None;
    let mut offset = 0;

    for line in css.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();
        let content = line.trim_end_matches(['\n', '\r']);

        if open.is_some() {
            if content.trim() == "}" {
                let close = line_start + line.find('}').unwrap_or(0) + 1;
                if let Some(block) = open.take() {
                    let source = &css[block.start..close];
                    blocks.push(block.close(source));
                }
            } else if let (Some(block), Some(declaration)) = (open.as_mut(), parse_declaration(content)) {
                block.declarations.push(declaration);
            }
            continue;
        }

        let trimmed = content.trim();
        if let Some(body) = trimmed.strip_prefix("/*").and_then(|s| s.strip_suffix("*/")) {
            comment = Some((line_start, body.trim().to_string()));
            continue;
        }

        match trimmed.strip_suffix('{').map(str::trim) {
            Some(selector) if !selector.is_empty() => {
                let (start, comment) = match comment.take() {
                    Some((start, text)) => (start, Some(text)),
                    None => (line_start, None),
                };
                open = Some(OpenBlock {
                    start,
                    comment,
                    selector: selector.to_string(),
                    declarations: Vec::new(),
                });
            }
            _ => comment = None,
        }
    }

    if open.is_some() {
        tracing::debug!("Dropping unterminated block at end of stylesheet");
    }
    blocks
}

/// Ordered, deduplicated `url(...)` targets of all `src` declarations.
pub fn source_urls<'a>(blocks: impl IntoIterator<Item = &'a FontFaceBlock>) -> Vec<String> {
    let urls: IndexSet<&str> = blocks.into_iter().flat_map(FontFaceBlock::source_urls).collect();
    urls.into_iter().map(str::to_string).collect()
}

struct OpenBlock {
    start: usize,
    comment: Option<String>,
    selector: String,
    declarations: Vec<Declaration>,
}

impl OpenBlock {
    fn close(self, source: &str) -> FontFaceBlock {
        let mut text = source.to_string();
        text.push('\n');
        FontFaceBlock {
            text,
            comment: self.comment,
            selector: self.selector,
            declarations: self.declarations,
        }
    }
}

fn parse_declaration(line: &str) -> Option<Declaration> {
    let line = line.trim();
    let line = line.strip_suffix(';').unwrap_or(line);
    let (property, value) = line.split_once(':')?;
    let property = property.trim();
    if property.is_empty() {
        return None;
    }
    Some(Declaration {
        property: property.to_string(),
        value: value.trim().to_string(),
    })
}

struct UrlIter<'a> {
    rest: &'a str,
}

impl<'a> Iterator for UrlIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let start = self.rest.find("url(")? + 4;
        let len = self.rest[start..].find(')')?;
        let url = &self.rest[start..start + len];
        self.rest = &self.rest[start + len + 1..];
        Some(url.trim().trim_matches(|c| c == '"' || c == '\''))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LATIN: &str = "/* latin */
@font-face {
  font-family: 'Roboto';
  font-style: normal;
  font-weight: 400;
  font-display: swap;
  src: url(https://fonts.gstatic.com/s/roboto/v30/latin.woff2) format('woff2');
  unicode-range: U+0000-00FF;
}
";

    #[test]
    fn test_parse_block_with_comment() {
        let blocks = parse_blocks(LATIN);
        assert_eq!(blocks.len(), 1);

        let block = &blocks[0];
        assert_eq!(block.text, LATIN);
        assert_eq!(block.comment.as_deref(), Some("latin"));
        assert!(block.is_font_face());
        assert_eq!(block.declarations.len(), 6);
        assert_eq!(block.declaration("font-weight"), Some("400"));
        assert_eq!(block.declaration("unicode-range"), Some("U+0000-00FF"));
    }

    #[test]
    fn test_source_urls() {
        let blocks = parse_blocks(LATIN);
        let urls: Vec<&str> = blocks[0].source_urls().collect();
        assert_eq!(urls, vec!["https://fonts.gstatic.com/s/roboto/v30/latin.woff2"]);
    }

    #[test]
    fn test_quoted_and_multiple_urls() {
        let css = "@font-face {\n  src: local('X'), url(\"a.woff2\") format('woff2'), url('b.ttf');\n}\n";
        let blocks = parse_blocks(css);
        let urls: Vec<&str> = blocks[0].source_urls().collect();
        assert_eq!(urls, vec!["a.woff2", "b.ttf"]);
    }

    #[test]
    fn test_source_urls_dedup_across_blocks() {
        let css = format!("{LATIN}{LATIN}");
        let blocks = parse_blocks(&css);
        assert_eq!(blocks.len(), 2);
        assert_eq!(source_urls(&blocks).len(), 1);
    }

    #[test]
    fn test_comment_must_be_adjacent() {
        let css = "/* stray */\n\n@font-face {\n  font-weight: 400;\n}\n";
        let blocks = parse_blocks(css);
        assert_eq!(blocks[0].comment, None);
        assert!(blocks[0].text.starts_with("@font-face"));
    }

    #[test]
    fn test_missing_trailing_newline() {
        let blocks = parse_blocks("@font-face {\n  font-weight: 400;\n}");
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].text.ends_with("}\n"));
    }

    #[test]
    fn test_unterminated_block_dropped() {
        assert!(parse_blocks("@font-face {\n  font-weight: 400;\n").is_empty());
    }

    #[test]
    fn test_garbage_ignored() {
        assert!(parse_blocks("<html>Bad Request</html>\n").is_empty());
        assert!(parse_blocks("").is_empty());
    }
}
