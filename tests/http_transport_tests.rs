//! `HttpTransport` against a loopback HTTP server.
//!
//! Each test starts a `tiny_http` server that answers every request with the
//! same canned response and counts how many requests it received.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use ghorg::{get_json, Config, Error, GitHubError, HttpTransport, RetryConfig, Transport};
use serde_json::json;
use tiny_http::{Header, Response, Server, StatusCode};

// ============================================================================
// Test Helpers
// ============================================================================

/// Canned response served for every request.
#[derive(Clone)]
struct Canned {
    status: u16,
    body: &'static str,
    retry_after: Option<&'static str>,
}

/// Start a server answering `canned` until it has been idle for a second.
///
/// Returns the base URL and the request counter.
fn serve(canned: Canned) -> (String, Arc<AtomicUsize>) {
    let server = Server::http("127.0.0.1:0").expect("bind loopback");
    let addr = server.server_addr().to_ip().expect("ip listener");
    let requests = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&requests);

    thread::spawn(move || {
        while let Ok(Some(request)) = server.recv_timeout(Duration::from_secs(1)) {
            counter.fetch_add(1, Ordering::SeqCst);

            let mut response = Response::from_string(canned.body)
                .with_status_code(StatusCode(canned.status))
                .with_header(
                    Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                        .expect("valid header"),
                );
            if let Some(value) = canned.retry_after {
                response = response.with_header(
                    Header::from_bytes(&b"Retry-After"[..], value.as_bytes()).expect("valid header"),
                );
            }
            let _ = request.respond(response);
        }
    });

    (format!("http://{addr}"), requests)
}

/// Transport with three retries and no waiting between them.
fn fast_retry_transport() -> HttpTransport {
    let config = Config {
        timeout: Duration::from_secs(5),
        ..Config::default()
    };
    HttpTransport::new(
        &config,
        Some(RetryConfig {
            max_retries: 3,
            jitter: 0.0,
            max_backoff: 0.0,
            ..RetryConfig::default()
        }),
    )
    .expect("transport should build")
}

// ============================================================================
// Responses
// ============================================================================

#[tokio::test]
async fn test_success_body_is_decoded() {
    let (base, requests) = serve(Canned {
        status: 200,
        body: r#"{"login": "google", "repos_url": "https://api.github.com/orgs/google/repos"}"#,
        retry_after: None,
    });
    let transport = fast_retry_transport();

    let value = get_json(&transport, &format!("{base}/orgs/google"))
        .await
        .expect("200 should succeed");

    assert_eq!(value["login"], json!("google"));
    assert_eq!(requests.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_malformed_success_body_is_not_retried() {
    let (base, requests) = serve(Canned {
        status: 200,
        body: "not json",
        retry_after: None,
    });
    let transport = fast_retry_transport();

    let err = transport
        .get(&format!("{base}/orgs/google"))
        .await
        .expect_err("body is not JSON");

    assert!(matches!(err, Error::Serialization(_)), "{err:?}");
    assert_eq!(requests.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_rate_limit_keeps_retry_after() {
    let (base, requests) = serve(Canned {
        status: 429,
        body: r#"{"message": "API rate limit exceeded"}"#,
        retry_after: Some("0"),
    });
    let transport = fast_retry_transport();

    let err = get_json(&transport, &format!("{base}/orgs/google"))
        .await
        .expect_err("429 should fail after retries");

    match err {
        Error::GitHub(GitHubError::RateLimited {
            status,
            message,
            retry_after,
        }) => {
            assert_eq!(status, 429);
            assert_eq!(message, "API rate limit exceeded");
            assert_eq!(retry_after, 0);
        }
        other => panic!("expected RateLimited, got {other:?}"),
    }
    assert_eq!(requests.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn test_not_found_is_not_retried() {
    let (base, requests) = serve(Canned {
        status: 404,
        body: "",
        retry_after: None,
    });
    let transport = fast_retry_transport();

    let response = transport
        .get(&format!("{base}/orgs/nobody"))
        .await
        .expect("404 is a response, not a transport error");

    assert_eq!(response.status, 404);
    assert!(response.body.is_none());
    assert_eq!(requests.load(Ordering::SeqCst), 1);
}
