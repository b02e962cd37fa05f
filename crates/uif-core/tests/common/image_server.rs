//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a single static body on every path, with a configurable status
//! line and Content-Type header.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone)]
pub struct ImageServerOptions {
    /// Status line after "HTTP/1.1 ", e.g. "200 OK".
    pub status: &'static str,
    /// Content-Type header value; None omits the header entirely.
    pub content_type: Option<String>,
}

impl Default for ImageServerOptions {
    fn default() -> Self {
        Self {
            status: "200 OK",
            content_type: Some("image/png".to_string()),
        }
    }
}

/// Starts a server in a background thread serving `body`. Returns the base URL
/// (e.g. "http://127.0.0.1:12345/"). The server runs until the process exits.
pub fn start(body: Vec<u8>) -> String {
    start_with_options(body, ImageServerOptions::default())
}

/// Like `start` but allows customizing the response (error status, odd or
/// missing Content-Type).
pub fn start_with_options(body: Vec<u8>, opts: ImageServerOptions) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    let opts = Arc::new(opts);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let opts = Arc::clone(&opts);
            thread::spawn(move || handle(stream, &body, &opts));
        }
    });
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: std::net::TcpStream, body: &[u8], opts: &ImageServerOptions) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(_) => {}
    }
    let content_type = match &opts.content_type {
        Some(value) => format!("Content-Type: {}\r\n", value),
        None => String::new(),
    };
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\n{}Connection: close\r\n\r\n",
        opts.status,
        body.len(),
        content_type
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body);
}
