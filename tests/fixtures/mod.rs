//! Test fixtures shared by the integration test suites.

use std::{net::TcpStream, sync::Arc, thread, time::Duration};

use tamariba::ui::{build_router, state::AppState};

/// A server running in the background for the duration of a test.
///
/// Each test starts its own instance on a distinct port so the suites can
/// run in parallel. The server thread is detached; the process ends it.
pub struct TestServer {
    port: u16,
}

impl TestServer {
    /// Start a server with fresh in-memory stores on the given port and
    /// wait until it accepts connections.
    pub fn start(port: u16) -> Self {
        thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build test runtime");
            rt.block_on(async move {
                let state = Arc::new(AppState::new_in_memory());
                let app = build_router(state);
                let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
                    .await
                    .expect("failed to bind test port");
                axum::serve(listener, app)
                    .await
                    .expect("test server exited");
            });
        });

        for _ in 0..100 {
            if TcpStream::connect(("127.0.0.1", port)).is_ok() {
                return Self { port };
            }
            thread::sleep(Duration::from_millis(50));
        }
        panic!("test server on port {port} did not become ready");
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    #[allow(dead_code)]
    pub fn ws_url(&self) -> String {
        format!("ws://127.0.0.1:{}", self.port)
    }
}
