//! Log lines written while serving requests.
//!
//! Runs in its own test binary with a single test so that the thread-local
//! subscriber only ever sees this test's requests.

use std::io::Write;
use std::sync::{Arc, Mutex};

use menagerie_auth::Credentials;
use reqwest::StatusCode;
use serde_json::json;

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn ingest_and_admin_requests_are_logged() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    // Current-thread runtime: the server task runs on this thread too.
    let _guard = tracing::subscriber::set_default(subscriber);

    let app = menagerie_api::app::build_app(Credentials::new("alfa1", "password"));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = reqwest::Client::new();

    let res = client
        .post(format!("http://{addr}/cats"))
        .json(&json!({ "name": "Tom", "type": "tabby" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!("http://{addr}/admin/main"))
        .basic_auth("alfa1", Some("password"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    handle.abort();

    let output = logs.contents();

    let pet_line = output
        .lines()
        .find(|l| l.contains("This is your cat"))
        .unwrap_or_else(|| panic!("no ingest line in:\n{output}"));
    assert!(pet_line.contains("name=Tom"), "{pet_line}");
    assert!(pet_line.contains("kind=tabby"), "{pet_line}");

    let request_line = output
        .lines()
        .find(|l| l.contains("path=/admin/main"))
        .unwrap_or_else(|| panic!("no request line in:\n{output}"));
    assert!(request_line.contains("status=200"), "{request_line}");
    assert!(request_line.contains("method=GET"), "{request_line}");
    assert!(request_line.contains(&format!("host={addr}")), "{request_line}");
    assert!(request_line.contains("latency="), "{request_line}");
    assert!(request_line.contains("time="), "{request_line}");
}
