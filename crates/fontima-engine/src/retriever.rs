//! Remote CSS Retriever
//!
//! One request per call, no retries. Responses are classified into
//! success, subset declined, or transport failure.

use fontima_css::{FontFaceBlock, parse_blocks};
use fontima_net::{NetError, Transport};

use crate::error::FetchError;
use crate::reference::FontReference;

/// Fetches stylesheets and font sizes through a [`Transport`].
#[derive(Debug)]
pub struct CssRetriever<'a, T> {
    transport: &'a T,
}

impl<'a, T: Transport> CssRetriever<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    /// The unfiltered stylesheet for `reference`.
    pub async fn fetch_css(&self, reference: &FontReference) -> Result<String, FetchError> {
        let (css, blocks) = self.fetch_stylesheet(reference.as_str()).await?;
        require_font_face(&blocks)?;
        Ok(css)
    }

    /// The stylesheet for `reference` restricted to `chars`.
    ///
    /// When the API cannot subset a family it falls back to the full font
    /// and marks each block with a leading comment. That is reported as
    /// [`FetchError::SubsetDeclined`].
    pub async fn fetch_chunk_css(&self, reference: &FontReference, chars: &str) -> Result<String, FetchError> {
        let (css, blocks) = self.fetch_stylesheet(&reference.with_text(chars)).await?;

        if blocks.iter().any(|b| b.is_font_face() && b.comment.is_some()) {
            tracing::debug!("Subset declined for {}", reference);
            return Err(FetchError::SubsetDeclined);
        }
        require_font_face(&blocks)?;
        Ok(css)
    }

    /// Declared size of a font file.
    pub async fn fetch_resource_byte_size(&self, url: &str) -> Result<u64, FetchError> {
        Ok(self.transport.content_length(url).await?)
    }

    async fn fetch_stylesheet(&self, url: &str) -> Result<(String, Vec<FontFaceBlock>), FetchError> {
        let response = self.transport.get(url).await?;
        if !response.is_success() {
            return Err(NetError::HttpError { status: response.status }.into());
        }

        let css = response.text()?.to_string();
        let blocks = parse_blocks(&css);
        Ok((css, blocks))
    }
}

fn require_font_face(blocks: &[FontFaceBlock]) -> Result<(), FetchError> {
    if blocks.iter().any(FontFaceBlock::is_font_face) {
        Ok(())
    } else {
        Err(NetError::UnexpectedBody("no @font-face rules in response".into()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::FamilyValue;
    use fontima_net::Response;

    /// Answers every request with the same response.
    struct Fixed(Response);

    impl Transport for Fixed {
        async fn get(&self, _url: &str) -> Result<Response, NetError> {
            Ok(self.0.clone())
        }

        async fn content_length(&self, _url: &str) -> Result<u64, NetError> {
            Ok(self.0.body.len() as u64)
        }
    }

    const FACE: &str = "@font-face {\n  font-family: 'Inter';\n  src: url(https://cdn/inter.woff2) format('woff2');\n}\n";

    fn chunk(response: Response) -> Result<String, FetchError> {
        let transport = Fixed(response);
        let reference = FamilyValue::new("Inter").reference();
        smol::block_on(CssRetriever::new(&transport).fetch_chunk_css(&reference, "abc"))
    }

    #[test]
    fn test_chunk_css_success() {
        assert_eq!(chunk(Response::ok(FACE)).unwrap(), FACE);
    }

    #[test]
    fn test_adjacent_comment_means_declined() {
        let css = format!("/* [0] */\n{FACE}");
        assert_eq!(chunk(Response::ok(css)), Err(FetchError::SubsetDeclined));
    }

    #[test]
    fn test_detached_comment_is_not_a_decline() {
        let css = format!("/* [0] */\n\n{FACE}");
        assert_eq!(chunk(Response::ok(css.clone())).unwrap(), css);
    }

    #[test]
    fn test_body_without_font_face() {
        let err = chunk(Response::ok("<html>oops</html>")).unwrap_err();
        assert!(matches!(err, FetchError::Transport(NetError::UnexpectedBody(_))));
    }

    #[test]
    fn test_body_not_utf8() {
        let response = Response {
            status: 200,
            headers: vec![],
            body: vec![0xff, 0xfe],
        };
        let err = chunk(response).unwrap_err();
        assert!(matches!(err, FetchError::Transport(NetError::InvalidEncoding(_))));
    }

    #[test]
    fn test_error_status() {
        let response = Response {
            status: 503,
            headers: vec![],
            body: FACE.as_bytes().to_vec(),
        };
        assert_eq!(
            chunk(response),
            Err(FetchError::Transport(NetError::HttpError { status: 503 }))
        );
    }

    #[test]
    fn test_full_css_keeps_subset_comments() {
        let css = format!("/* latin */\n{FACE}");
        let transport = Fixed(Response::ok(css.clone()));
        let reference = FamilyValue::new("Inter").reference();
        let fetched = smol::block_on(CssRetriever::new(&transport).fetch_css(&reference)).unwrap();
        assert_eq!(fetched, css);
    }

    #[test]
    fn test_resource_byte_size() {
        let transport = Fixed(Response::ok("0123456789"));
        let size = smol::block_on(CssRetriever::new(&transport).fetch_resource_byte_size("https://cdn/a.woff2"));
        assert_eq!(size, Ok(10));
    }
}
