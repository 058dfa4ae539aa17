use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use punch_server::{ServerConfig, StaticFiles};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

fn site_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/site")
}

fn site() -> StaticFiles {
    StaticFiles::new(site_root())
}

#[tokio::test]
async fn test_root_serves_index() {
    let files = site();
    let root = files.serve("/").await;
    let index = files.serve("/index.html").await;
    assert_eq!(root.status, 200);
    assert_eq!(root.content_type, "text/html");
    assert_eq!(root.body, index.body);
    assert!(String::from_utf8_lossy(&root.body).contains("punch-canvas"));
}

#[tokio::test]
async fn test_javascript_content_type() {
    let resp = site().serve("/app.js").await;
    assert_eq!(resp.status, 200);
    assert_eq!(resp.content_type, "text/javascript");
}

#[tokio::test]
async fn test_missing_file_is_404() {
    let resp = site().serve("/nope.css").await;
    assert_eq!(resp.status, 404);
    assert_eq!(resp.content_type, "text/html");
    assert!(String::from_utf8_lossy(&resp.body).contains("404"));
}

#[tokio::test]
async fn test_directory_read_is_500() {
    let resp = site().serve("/docs").await;
    assert_eq!(resp.status, 500);
    assert!(String::from_utf8_lossy(&resp.body).contains("500"));
}

#[tokio::test]
async fn test_query_string_ignored() {
    let files = site();
    let plain = files.serve("/app.js").await;
    let cached = files.serve("/app.js?v=42").await;
    assert_eq!(cached.status, 200);
    assert_eq!(plain.body, cached.body);
}

#[tokio::test]
async fn test_parent_dirs_clamped_at_root() {
    let files = site();
    let index = files.serve("/index.html").await;
    let dotted = files.serve("/docs/../index.html").await;
    assert_eq!(dotted.status, 200);
    assert_eq!(dotted.body, index.body);

    // resolves to <root>/serve.rs, which the site does not have
    let escaped = files.serve("/../serve.rs").await;
    assert_eq!(escaped.status, 404);
}

async fn spawn_server() -> u16 {
    let config = ServerConfig {
        port: 0,
        root: site_root(),
    };
    let listener = punch_server::bind(&config).await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let files = Arc::new(StaticFiles::new(&config.root));
    tokio::spawn(punch_server::serve(listener, files));
    port
}

async fn roundtrip(port: u16, request: impl AsRef<[u8]>) -> String {
    let mut stream = TcpStream::connect(("127.0.0.1", port)).await.unwrap();
    stream.write_all(request.as_ref()).await.unwrap();
    let mut raw = Vec::new();
    let read = tokio::time::timeout(Duration::from_secs(5), stream.read_to_end(&mut raw)).await;
    read.expect("no response within 5s").unwrap();
    String::from_utf8(raw).unwrap()
}

#[tokio::test]
async fn test_serves_over_tcp() {
    let port = spawn_server().await;

    let ok = roundtrip(port, "GET / HTTP/1.1\r\nHost: localhost\r\n\r\n").await;
    assert!(ok.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(ok.contains("Content-Type: text/html\r\n"));
    assert!(ok.contains("punch-canvas"));

    let missing = roundtrip(port, "GET /missing.png HTTP/1.1\r\n\r\n").await;
    assert!(missing.starts_with("HTTP/1.1 404 Not Found\r\n"));
    assert!(missing.ends_with("<h1>404 - File Not Found</h1>"));
}

#[tokio::test]
async fn test_malformed_request_is_400() {
    let port = spawn_server().await;
    let resp = roundtrip(port, "garbage\r\n\r\n").await;
    assert!(resp.starts_with("HTTP/1.1 400 Bad Request\r\n"));
}

#[tokio::test]
async fn test_non_utf8_request_line_is_400() {
    let port = spawn_server().await;
    let resp = roundtrip(port, b"GET /\xff\xfe HTTP/1.1\r\n\r\n").await;
    assert!(resp.starts_with("HTTP/1.1 400 Bad Request\r\n"));
    assert!(resp.ends_with("<h1>400 - Bad Request</h1>"));
}

#[tokio::test]
async fn test_unterminated_head_is_400() {
    let port = spawn_server().await;
    // twice the head limit, no newline, connection left open
    let flood = vec![b'A'; 2 * punch_server::server::MAX_HEAD_BYTES];
    let resp = roundtrip(port, flood).await;
    assert!(resp.starts_with("HTTP/1.1 400 Bad Request\r\n"));
}

#[tokio::test]
async fn test_oversized_header_line_is_400() {
    let port = spawn_server().await;
    let mut request = b"GET / HTTP/1.1\r\nX-Padding: ".to_vec();
    request.extend(std::iter::repeat(b'x').take(punch_server::server::MAX_HEAD_BYTES));
    request.extend_from_slice(b"\r\n\r\n");
    let resp = roundtrip(port, request).await;
    assert!(resp.starts_with("HTTP/1.1 400 Bad Request\r\n"));
}
