//! In-process stand-in for the Lichess API used by the async tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::http::{header, StatusCode, Uri};
use axum::Router;
use tokio::net::TcpListener;

use crate::{ClientConfig, LichessClient};

pub(crate) struct MockApi {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockApi {
    /// Serve every request with `respond(path_and_query)`.
    pub async fn spawn<F>(respond: F) -> Self
    where
        F: Fn(&str) -> (StatusCode, String) + Send + Sync + 'static,
    {
        Self::spawn_with_delay(respond, |_| Duration::ZERO).await
    }

    /// Like [`spawn`](Self::spawn), but hold each response back for
    /// `delay(path_and_query)`. Requests are recorded on arrival.
    pub async fn spawn_with_delay<F, D>(respond: F, delay: D) -> Self
    where
        F: Fn(&str) -> (StatusCode, String) + Send + Sync + 'static,
        D: Fn(&str) -> Duration + Send + Sync + 'static,
    {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let respond = Arc::new(respond);
        let delay = Arc::new(delay);

        let recorded = requests.clone();
        let app = Router::new().fallback(move |uri: Uri| {
            let recorded = recorded.clone();
            let respond = respond.clone();
            let delay = delay.clone();
            async move {
                let target = uri
                    .path_and_query()
                    .map(|pq| pq.as_str().to_owned())
                    .unwrap_or_default();
                recorded.lock().unwrap().push(target.clone());
                tokio::time::sleep(delay(&target)).await;
                let (status, body) = respond(&target);
                (status, [(header::CONTENT_TYPE, "application/json")], body)
            }
        });

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    pub fn client(&self) -> LichessClient {
        LichessClient::with_config(ClientConfig {
            api_base: self.base_url.clone(),
            ..ClientConfig::default()
        })
    }

    /// Path and query of every request received so far.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

pub(crate) fn ok(body: &str) -> (StatusCode, String) {
    (StatusCode::OK, body.to_string())
}

pub(crate) fn not_found() -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, r#"{"error":"Not found"}"#.to_string())
}
