//! Test utility functions for jpost

use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;

/// A request as received by the stub server
#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl ReceivedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Minimal HTTP/1.1 stub server for exercising the real transport.
///
/// Binds an ephemeral port, answers every connection with the canned
/// response and hands each received request back over a channel.
pub struct StubServer {
    addr: SocketAddr,
    requests: mpsc::UnboundedReceiver<ReceivedRequest>,
}

impl StubServer {
    /// Start a server answering `HTTP/1.1 <status_line>` with `body`
    pub async fn start(status_line: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("stub server should bind an ephemeral port");
        let addr = listener.local_addr().expect("stub server local addr");
        let (tx, rx) = mpsc::unbounded_channel();

        let response = format!(
            "HTTP/1.1 {}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );

        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let tx = tx.clone();
                let response = response.clone();
                tokio::spawn(handle_connection(stream, tx, response));
            }
        });

        Self { addr, requests: rx }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Next request the server received
    pub async fn received(&mut self) -> ReceivedRequest {
        tokio::time::timeout(Duration::from_secs(5), self.requests.recv())
            .await
            .expect("timed out waiting for the stub server to receive a request")
            .expect("stub server channel closed")
    }

    /// True when no request has arrived
    pub fn received_nothing(&mut self) -> bool {
        matches!(
            self.requests.try_recv(),
            Err(mpsc::error::TryRecvError::Empty)
        )
    }
}

async fn handle_connection(
    mut stream: TcpStream,
    tx: mpsc::UnboundedSender<ReceivedRequest>,
    response: String,
) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    // Read up to the end of the request head
    let header_end = loop {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
        if let Some(end) = find_header_end(&buf) {
            break end;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).into_owned();
    let mut lines = head.split("\r\n");
    let request_line = lines.next().unwrap_or_default();
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let headers: Vec<(String, String)> = lines
        .filter_map(|line| {
            let (name, value) = line.split_once(':')?;
            Some((name.trim().to_string(), value.trim().to_string()))
        })
        .collect();

    let content_length = headers
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.parse::<usize>().ok())
        .unwrap_or(0);

    // Read the body to its declared length
    while buf.len() < header_end + content_length {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }

    let body_end = (header_end + content_length).min(buf.len());
    let body = String::from_utf8_lossy(&buf[header_end..body_end]).into_owned();

    tx.send(ReceivedRequest {
        method,
        path,
        headers,
        body,
    })
    .ok();

    stream.write_all(response.as_bytes()).await.ok();
    stream.shutdown().await.ok();
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n").map(|p| p + 4)
}
