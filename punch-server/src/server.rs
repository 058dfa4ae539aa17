//! Accept loop - one task per connection, one request per connection

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

use crate::config::ServerConfig;
use crate::error::ServeError;
use crate::files::StaticFiles;
use crate::http::{Request, Response};

/// Request heads longer than this are rejected
pub const MAX_HEAD_BYTES: usize = 8 * 1024;

/// Unread input discarded after rejecting an oversized head, so closing
/// the socket does not reset the connection before the client reads the 400
const DRAIN_BYTES: u64 = 64 * 1024;
const DRAIN_TIMEOUT: Duration = Duration::from_millis(500);

/// Bind the listener for `config` on localhost
pub async fn bind(config: &ServerConfig) -> io::Result<TcpListener> {
    TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], config.port))).await
}

/// Serve connections until the listener fails
pub async fn serve(listener: TcpListener, files: Arc<StaticFiles>) -> io::Result<()> {
    loop {
        let (stream, peer) = listener.accept().await?;
        let files = Arc::clone(&files);
        tokio::spawn(async move {
            if let Err(err) = handle_connection(stream, &files).await {
                log::debug!("Connection from {} closed: {}", peer, err);
            }
        });
    }
}

async fn handle_connection(stream: TcpStream, files: &StaticFiles) -> io::Result<()> {
    let mut reader = BufReader::new(stream);
    let request = read_request(&mut reader).await?;
    let response = match &request {
        Ok(request) => {
            log::debug!("{} {}", request.method, request.target);
            files.serve(&request.target).await
        }
        Err(err) => {
            log::warn!("{}", err);
            Response::from_error(err)
        }
    };

    reader.get_mut().write_all(&response.to_bytes()).await?;
    reader.get_mut().shutdown().await?;

    if let Err(ServeError::HeadTooLarge(_)) = request {
        let mut limited = (&mut reader).take(DRAIN_BYTES);
        let mut sink = tokio::io::sink();
        let drain = tokio::io::copy(&mut limited, &mut sink);
        let _ = tokio::time::timeout(DRAIN_TIMEOUT, drain).await;
    }
    Ok(())
}

enum HeadLine {
    /// One line, terminator included; empty at end of stream
    Line(Vec<u8>),
    TooLarge,
}

/// Read one head line without letting the whole head exceed `budget` bytes
async fn next_line(reader: &mut BufReader<TcpStream>, budget: &mut usize) -> io::Result<HeadLine> {
    if *budget == 0 {
        return Ok(HeadLine::TooLarge);
    }

    let mut line = Vec::new();
    let n = (&mut *reader)
        .take(*budget as u64)
        .read_until(b'\n', &mut line)
        .await?;
    *budget -= n;

    if *budget == 0 && line.last() != Some(&b'\n') {
        return Ok(HeadLine::TooLarge);
    }
    Ok(HeadLine::Line(line))
}

/// Read the request line and drain headers up to the blank line
async fn read_request(
    reader: &mut BufReader<TcpStream>,
) -> io::Result<Result<Request, ServeError>> {
    let mut budget = MAX_HEAD_BYTES;

    let request = match next_line(reader, &mut budget).await? {
        HeadLine::TooLarge => return Ok(Err(ServeError::HeadTooLarge(MAX_HEAD_BYTES))),
        HeadLine::Line(bytes) => String::from_utf8(bytes)
            .map_err(|_| ServeError::BadRequest("request line is not valid UTF-8".into()))
            .and_then(|line| Request::parse_line(&line)),
    };

    loop {
        match next_line(reader, &mut budget).await? {
            HeadLine::TooLarge => return Ok(Err(ServeError::HeadTooLarge(MAX_HEAD_BYTES))),
            HeadLine::Line(bytes) if matches!(bytes.as_slice(), b"" | b"\n" | b"\r\n") => break,
            HeadLine::Line(_) => {}
        }
    }

    Ok(request)
}
