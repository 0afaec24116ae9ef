//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use pagination_hook::config::ServiceConfig;
use pagination_hook::{HttpServer, Shutdown};
use tokio::net::TcpListener;

/// A running server bound to an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub client: reqwest::Client,
}

impl TestServer {
    pub fn url(&self, path_and_query: &str) -> String {
        format!("http://{}{}", self.addr, path_and_query)
    }

    /// GET `path_and_query` and decode the JSON body.
    pub async fn get_json(&self, path_and_query: &str) -> serde_json::Value {
        self.client
            .get(self.url(path_and_query))
            .send()
            .await
            .expect("server unreachable")
            .json()
            .await
            .expect("body is not JSON")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the service with `config` on 127.0.0.1 and an OS-assigned port.
pub async fn start_server(mut config: ServiceConfig) -> TestServer {
    config.listener.bind_address = "127.0.0.1:0".to_string();

    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config).unwrap();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;

    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    TestServer {
        addr,
        shutdown,
        client,
    }
}
