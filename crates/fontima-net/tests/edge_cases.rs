//! Edge case tests for fontima-net
//!
//! Response helpers, client configuration and error rendering.

use std::time::Duration;

use fontima_net::*;
use pretty_assertions::assert_eq;

// ============================================================================
// RESPONSE TESTS
// ============================================================================

#[test]
fn test_response_success_codes() {
    for code in [200, 201, 204, 206] {
        let resp = Response {
            status: code,
            headers: vec![],
            body: vec![],
        };
        assert!(resp.is_success(), "Status {} should be success", code);
    }
}

#[test]
fn test_response_error_codes() {
    for code in [301, 400, 403, 404, 500, 503] {
        let resp = Response {
            status: code,
            headers: vec![],
            body: vec![],
        };
        assert!(!resp.is_success(), "Status {} should not be success", code);
    }
}

#[test]
fn test_response_ok_helper() {
    let resp = Response::ok("@font-face {}");
    assert_eq!(resp.status, 200);
    assert_eq!(resp.text().unwrap(), "@font-face {}");
    assert_eq!(resp.header("Content-Type"), Some("text/css; charset=utf-8"));
}

#[test]
fn test_response_missing_header() {
    let resp = Response::ok("");
    assert_eq!(resp.header("etag"), None);
}

// ============================================================================
// CLIENT TESTS
// ============================================================================

#[test]
fn test_builder_timeouts() {
    let client = HttpClient::builder()
        .connect_timeout(Duration::from_secs(5))
        .request_timeout(Duration::from_secs(10))
        .build()
        .unwrap();

    assert_eq!(client.config().connect_timeout, Duration::from_secs(5));
    assert_eq!(client.config().request_timeout, Duration::from_secs(10));
}

#[test]
fn test_builder_without_redirects() {
    let client = HttpClient::builder().max_redirects(0).build().unwrap();
    assert_eq!(client.config().max_redirects, 0);
}

// ============================================================================
// ERROR TESTS
// ============================================================================

#[test]
fn test_error_messages() {
    assert_eq!(NetError::HttpError { status: 404 }.to_string(), "HTTP error: 404");
    assert_eq!(
        NetError::MissingContentLength("https://x/y.woff2".into()).to_string(),
        "Missing content-length for https://x/y.woff2"
    );
}
