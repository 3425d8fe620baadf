// ===== gutenlex/crates/gutenlex-core/tests/fetch_tests.rs =====
use axum::routing::get;
use axum::Router;
use gutenlex_core::fetch::{title_from_url, Fetcher};
use gutenlex_core::Error;
use rstest::rstest;
use std::net::SocketAddr;
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(5);

/// Serves canned routes on a loopback port and returns the bound address.
async fn spawn_server(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[rstest]
#[case("ftp://example.com/book.txt")]
#[case("file:///etc/passwd")]
#[case("gopher://example.com")]
#[case("not a url at all")]
#[case("")]
#[tokio::test]
async fn rejects_non_http_urls_before_any_network_io(#[case] url: &str) {
    // No server is listening anywhere; an attempted connection would error
    // as Fetch, not InvalidUrl.
    let fetcher = Fetcher::new();
    let err = fetcher.fetch_text(url, TIMEOUT).await.unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)), "got {:?}", err);
}

#[tokio::test]
async fn downloads_body_as_text() {
    let app = Router::new().route("/pg42.txt", get(|| async { "Call me Ishmael." }));
    let addr = spawn_server(app).await;

    let fetcher = Fetcher::new();
    let text = fetcher
        .fetch_text(&format!("http://{}/pg42.txt", addr), TIMEOUT)
        .await
        .unwrap();
    assert_eq!(text, "Call me Ishmael.");
}

#[tokio::test]
async fn non_success_status_is_a_fetch_error() {
    let app = Router::new(); // every path 404s
    let addr = spawn_server(app).await;

    let fetcher = Fetcher::new();
    let err = fetcher
        .fetch_text(&format!("http://{}/missing.txt", addr), TIMEOUT)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Fetch(_)), "got {:?}", err);
}

#[tokio::test]
async fn unreachable_host_is_a_fetch_error() {
    // Bind a port and drop the listener so nothing accepts.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let fetcher = Fetcher::new();
    let err = fetcher
        .fetch_text(&format!("http://{}/pg1.txt", addr), TIMEOUT)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Fetch(_)), "got {:?}", err);
}

#[rstest]
#[case("https://www.gutenberg.org/cache/epub/1342/pg1342.txt", "Pg1342")]
#[case("http://host/books/moby-dick.txt", "Moby Dick")]
#[case("http://host/pride-and-prejudice", "Pride And Prejudice")]
#[case("http://host/WAR-AND-PEACE.txt", "War And Peace")]
fn derives_title_from_url(#[case] url: &str, #[case] expected: &str) {
    assert_eq!(title_from_url(url), expected);
}
