//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a fixed table of paths. Each path either answers with a status and
//! body, or drops the connection without a response to simulate a transport
//! failure. Unknown paths get 404. Every requested path is recorded.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub enum Route {
    Respond { status: u32, body: Vec<u8> },
    /// Close the socket without writing anything.
    Drop,
}

impl Route {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Route::Respond {
            status: 200,
            body: body.into(),
        }
    }

    pub fn status(status: u32) -> Self {
        Route::Respond {
            status,
            body: Vec::new(),
        }
    }
}

/// Handle to a running server.
pub struct AssetServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl AssetServer {
    /// Full URL for `path` (no leading slash).
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Paths requested so far, in order, without the leading slash.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread. The server runs until the process exits.
pub fn start(routes: Vec<(&str, Route)>) -> AssetServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<String, Route>> = Arc::new(
        routes
            .into_iter()
            .map(|(p, r)| (p.trim_start_matches('/').to_string(), r))
            .collect(),
    );
    let requests = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let log = Arc::clone(&log);
            thread::spawn(move || handle(stream, &routes, &log));
        }
    });
    AssetServer {
        base_url: format!("http://127.0.0.1:{}/", port),
        requests,
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    routes: &HashMap<String, Route>,
    log: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let path = request_path(request).trim_start_matches('/').to_string();
    log.lock().unwrap().push(path.clone());

    let (status, body) = match routes.get(&path) {
        Some(Route::Drop) => return,
        Some(Route::Respond { status, body }) => (*status, body.as_slice()),
        None => (404, &b""[..]),
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        reason(status),
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body);
}

fn reason(status: u32) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    }
}

/// Path of the request line (`GET /x HTTP/1.1` → `/x`).
fn request_path(request: &str) -> &str {
    request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
}
