/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for coinpayments-adapter tests

#![allow(dead_code)]

use coinpayments_adapter::{ClientConfig, CoinPaymentsClient, Credentials, Logger};
use std::io;
use std::sync::{Arc, Mutex};
use wiremock::MockServer;

pub const PUBLIC_KEY: &str = "test-public-key";
pub const PRIVATE_KEY: &str = "test-private-key";
pub const IPN_URL: &str = "https://shop.example.com/ipn";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Endpoint on the mock server the client posts to
pub fn api_endpoint(server: &MockServer) -> String {
    format!("{}/api.php", server.uri())
}

pub fn test_credentials() -> Credentials {
    Credentials::new(PUBLIC_KEY, PRIVATE_KEY)
}

/// Client pointed at `endpoint`; must be built and dropped off the async runtime
pub fn test_client(endpoint: &str) -> CoinPaymentsClient {
    let config = ClientConfig {
        endpoint: endpoint.to_string(),
        ..ClientConfig::default()
    };
    CoinPaymentsClient::with_config(test_credentials(), IPN_URL, config).expect("client init")
}

/// Run blocking client code on the blocking pool
pub async fn run_blocking<T, F>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .expect("blocking task panicked")
}

/// Decode a form-encoded body into ordered pairs
pub fn parse_form(body: &[u8]) -> Vec<(String, String)> {
    url::form_urlencoded::parse(body)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

pub fn form_value<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

/// In-memory log sink
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        let buffer = self.0.lock().expect("log buffer poisoned");
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// Logger handle writing every event at DEBUG and above into this buffer
    pub fn logger(&self) -> Logger {
        let sink = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || sink.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        Logger::new(subscriber)
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .expect("log buffer poisoned")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
