#![allow(dead_code)]

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use std::collections::{HashMap, VecDeque};
use std::io;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::runtime::Runtime;

#[derive(Debug, Clone)]
pub enum Canned {
    Ok(Vec<u8>),
    Status(u16),
    /// Declares `declared` bytes, sends `sent`, then aborts the connection.
    Truncated { declared: usize, sent: Vec<u8> },
}

type Routes = Arc<Mutex<HashMap<String, VecDeque<Canned>>>>;

/// Serves canned responses per request path, each response once, in order.
pub struct TestServer {
    pub base_url: String,
    routes: Routes,
    _runtime: Runtime,
}

impl TestServer {
    pub fn start(responses: Vec<(&str, Canned)>) -> Self {
        let mut table: HashMap<String, VecDeque<Canned>> = HashMap::new();
        for (path, response) in responses {
            table.entry(path.to_string()).or_default().push_back(response);
        }
        let routes: Routes = Arc::new(Mutex::new(table));

        let app = Router::new()
            .fallback(serve_canned)
            .with_state(routes.clone());

        let runtime = Runtime::new().unwrap();
        let listener = runtime
            .block_on(TcpListener::bind("127.0.0.1:0"))
            .unwrap();
        let addr = listener.local_addr().unwrap();

        runtime.spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            routes,
            _runtime: runtime,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fails the test if any canned response was never requested.
    pub fn assert_drained(&self) {
        let routes = self.routes.lock().unwrap();
        for (path, queue) in routes.iter() {
            assert!(queue.is_empty(), "{} response(s) left for {}", queue.len(), path);
        }
    }
}

async fn serve_canned(State(routes): State<Routes>, uri: Uri) -> Response {
    let next = routes
        .lock()
        .unwrap()
        .get_mut(uri.path())
        .and_then(|queue| queue.pop_front());

    match next {
        Some(Canned::Ok(body)) => {
            (StatusCode::OK, [(header::CONTENT_TYPE, "text/csv")], body).into_response()
        }
        Some(Canned::Status(code)) => StatusCode::from_u16(code).unwrap().into_response(),
        Some(Canned::Truncated { declared, sent }) => {
            let chunks = futures_util::stream::iter(vec![
                Ok(Bytes::from(sent)),
                Err(io::Error::new(io::ErrorKind::ConnectionAborted, "body cut short")),
            ]);
            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, "text/csv")
                .header(header::CONTENT_LENGTH, declared)
                .body(Body::from_stream(chunks))
                .unwrap()
        }
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("no canned response left for {}", uri.path()),
        )
            .into_response(),
    }
}

/// A URL on a port nothing is listening on.
pub fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/export?format=csv", port)
}
