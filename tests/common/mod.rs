//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// One request as the backend saw it.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub request_line: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn path(&self) -> &str {
        self.request_line.split_whitespace().nth(1).unwrap_or("")
    }
}

pub type Captured = Arc<Mutex<Vec<CapturedRequest>>>;

/// A canned response.
#[derive(Debug, Clone, Copy)]
pub struct Reply {
    pub status: &'static str,
    pub headers: &'static [(&'static str, &'static str)],
    pub body: &'static str,
}

impl Reply {
    pub const fn ok(headers: &'static [(&'static str, &'static str)], body: &'static str) -> Self {
        Self {
            status: "200 OK",
            headers,
            body,
        }
    }
}

/// Start a backend on an ephemeral port that records every request and
/// answers with 200, the given extra headers and body.
pub async fn start_recording_backend(
    extra_headers: &'static [(&'static str, &'static str)],
    body: &'static str,
) -> (SocketAddr, Captured) {
    start_scripted_backend(&[], Reply::ok(extra_headers, body)).await
}

/// Like `start_recording_backend`, but answers each listed path with its
/// own reply and everything else with `fallback`.
pub async fn start_scripted_backend(
    script: &'static [(&'static str, Reply)],
    fallback: Reply,
) -> (SocketAddr, Captured) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let captured: Captured = Arc::new(Mutex::new(Vec::new()));
    let sink = captured.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    let sink = sink.clone();
                    tokio::spawn(async move {
                        handle(socket, sink, script, fallback).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, captured)
}

async fn handle(
    mut socket: TcpStream,
    sink: Captured,
    script: &'static [(&'static str, Reply)],
    fallback: Reply,
) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let head_end = loop {
        if let Some(pos) = find(&buf, b"\r\n\r\n") {
            break pos;
        }
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    };

    let head = String::from_utf8_lossy(&buf[..head_end]).into_owned();
    let mut lines = head.split("\r\n");
    let request_line = lines.next().unwrap_or_default().to_string();
    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect();

    let content_length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);

    let mut request_body = buf[head_end + 4..].to_vec();
    while request_body.len() < content_length {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => request_body.extend_from_slice(&chunk[..n]),
        }
    }

    let captured = CapturedRequest {
        request_line,
        headers,
        body: request_body,
    };
    let reply = script
        .iter()
        .find(|(path, _)| *path == captured.path())
        .map(|(_, reply)| *reply)
        .unwrap_or(fallback);
    sink.lock().unwrap().push(captured);

    let mut response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n",
        reply.status,
        reply.body.len()
    );
    for (name, value) in reply.headers {
        response.push_str(&format!("{}: {}\r\n", name, value));
    }
    response.push_str("\r\n");
    response.push_str(reply.body);

    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
