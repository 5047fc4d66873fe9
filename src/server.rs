// HTTP server for the music theory API.
//
// Architecture: a fixed pool of worker threads sharing one
// `tiny_http::Server`. Each worker polls `recv_timeout`, routes the request
// through `api::routes::handle` and writes the JSON response itself. There is
// no shared mutable state beyond the `keep_running` flag; lookups are pure.
//
// Shutdown: `ServerHandle::stop` clears `keep_running`, wakes any blocked
// workers with `Server::unblock` and joins them. Workers notice the flag
// within one poll interval.

use std::io;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tiny_http::{Header, Request, Response, Server};

use crate::api::routes::{self, ApiResponse};
use crate::config::ServerConfig;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Headers attached to every response
const RESPONSE_HEADERS: [(&str, &str); 4] = [
    ("Content-Type", "application/json"),
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "GET, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type"),
];

/// Handle returned by `start_server` to control the running server.
pub struct ServerHandle {
    server: Arc<Server>,
    keep_running: Arc<AtomicBool>,
    workers: Vec<thread::JoinHandle<()>>,
}

impl ServerHandle {
    /// Signal the workers to stop and wait for them to exit.
    pub fn stop(self) {
        self.keep_running.store(false, Ordering::SeqCst);
        for _ in &self.workers {
            self.server.unblock();
        }
        for worker in self.workers {
            let _ = worker.join();
        }
        log::info!("Server stopped");
    }

    pub fn is_running(&self) -> bool {
        self.keep_running.load(Ordering::SeqCst)
    }
}

/// Bind the server and start its workers. Returns the handle and the actual
/// bound address (useful when port 0 is used to let the OS pick a free port).
pub fn start_server(config: &ServerConfig) -> io::Result<(ServerHandle, SocketAddr)> {
    let server = Server::http(config.bind_addr())
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    let addr = server.server_addr().to_ip().ok_or_else(|| {
        io::Error::new(io::ErrorKind::Other, "server is not bound to an IP address")
    })?;

    let server = Arc::new(server);
    let keep_running = Arc::new(AtomicBool::new(true));

    let workers = (0..config.workers)
        .map(|id| {
            let server = server.clone();
            let keep_running = keep_running.clone();
            thread::Builder::new()
                .name(format!("http-worker-{}", id))
                .spawn(move || run_worker(&server, &keep_running))
        })
        .collect::<io::Result<Vec<_>>>()?;

    log::info!("Listening on {} with {} workers", addr, workers.len());

    Ok((
        ServerHandle {
            server,
            keep_running,
            workers,
        },
        addr,
    ))
}

/// Worker loop. Runs until `keep_running` is cleared or the listener fails.
fn run_worker(server: &Server, keep_running: &AtomicBool) {
    while keep_running.load(Ordering::SeqCst) {
        match server.recv_timeout(POLL_INTERVAL) {
            Ok(Some(request)) => serve(request),
            Ok(None) => {}
            Err(e) => {
                log::error!("Failed to receive request: {}", e);
                break;
            }
        }
    }
}

fn serve(request: Request) {
    let method = request.method().to_string();
    let url = request.url().to_string();

    let api_response = routes::handle(&method, &url);
    log::info!("{} {} -> {}", method, url, api_response.status);

    if let Err(e) = request.respond(to_http_response(&api_response)) {
        log::warn!("Failed to write response for {} {}: {}", method, url, e);
    }
}

fn to_http_response(api_response: &ApiResponse) -> Response<io::Cursor<Vec<u8>>> {
    RESPONSE_HEADERS
        .iter()
        .filter_map(|(name, value)| header(name, value))
        .fold(
            Response::from_string(api_response.to_json_string())
                .with_status_code(api_response.status),
            |response, header| response.with_header(header),
        )
}

fn header(name: &str, value: &str) -> Option<Header> {
    let parsed = Header::from_bytes(name.as_bytes(), value.as_bytes()).ok();
    if parsed.is_none() {
        log::error!("Invalid response header {}: {}", name, value);
    }
    parsed
}
