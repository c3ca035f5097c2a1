//! End-to-end tests against a real listener on an ephemeral port.

use std::net::{SocketAddr, TcpListener};

use futures::future::join_all;
use tokio::task::JoinHandle;

use swarm_hello::config::AppConfig;
use swarm_hello::host::FixedHostname;
use swarm_hello::http::{serve, Handle, ServerError};
use swarm_hello::{create_router, AppState};

struct TestServer {
    addr: SocketAddr,
    handle: Handle,
    task: JoinHandle<Result<(), ServerError>>,
}

impl TestServer {
    fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let state =
            AppState::with_hostname_source(AppConfig::default(), FixedHostname("node-7".into()));
        let app = create_router(state);

        let handle = Handle::new();
        let task = tokio::spawn(serve(listener, app, handle.clone()));

        Self { addr, handle, task }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn stop(self) {
        self.handle.shutdown();
        self.task.await.unwrap().unwrap();
    }
}

/// Client that ignores proxy settings from the environment.
fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

#[tokio::test]
async fn test_serves_health_over_tcp() {
    let server = TestServer::start();

    let response = client().get(server.url("/health")).send().await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), r#"{"status":"healthy"}"#);

    server.stop().await;
}

#[tokio::test]
async fn test_serves_greeting_and_404_over_tcp() {
    let server = TestServer::start();
    let client = client();

    let greeting: serde_json::Value = client
        .get(server.url("/"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(greeting["message"], "Hello from Docker Swarm!");
    assert_eq!(greeting["hostname"], "node-7");
    assert_eq!(greeting["version"], "1.0.0");

    let missing = client.get(server.url("/nope")).send().await.unwrap();
    assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);

    server.stop().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests() {
    let server = TestServer::start();
    let client = client();

    let requests = (0..32).map(|i| {
        let path = if i % 2 == 0 { "/" } else { "/health" };
        client.get(server.url(path)).send()
    });

    for response in join_all(requests).await {
        assert_eq!(response.unwrap().status(), reqwest::StatusCode::OK);
    }

    let status: serde_json::Value = client
        .get(server.url("/status"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(status["requests_processed"], 32);

    server.stop().await;
}

#[test]
fn test_bind_conflict_is_reported() {
    let taken = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = taken.local_addr().unwrap().port();

    let config = AppConfig::default()
        .with_overrides(Some("127.0.0.1".to_string()), Some(port))
        .unwrap();
    let app = create_router(AppState::new(config.clone()));

    let runtime = tokio::runtime::Runtime::new().unwrap();
    let result = runtime.block_on(swarm_hello::http::start_server(app, &config));
    assert!(matches!(result, Err(ServerError::Bind(_))));
}
