use std::time::Duration;

use reqwest::{header::CONTENT_TYPE, Client, ClientBuilder, Url};

use crate::{
    domain::exchange::{TransportError, TransportErrorKind},
    infra::{config::BackendConfig, error::AppError},
};

/// Posts serialized transcripts to the helpdesk endpoint.
#[derive(Debug, Clone)]
pub struct HelpdeskClient {
    http: Client,
    endpoint: Url,
}

impl HelpdeskClient {
    pub fn new(config: &BackendConfig) -> Result<Self, AppError> {
        let endpoint = parse_endpoint(&config.endpoint_url)?;
        let http = client_builder(config)
            .build()
            .map_err(AppError::HttpClientBuild)?;

        Ok(Self::with_http(http, endpoint))
    }

    pub fn with_http(http: Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Sends one `POST` and returns the raw response body.
    ///
    /// The HTTP status is not interpreted: any body that arrives is handed
    /// back for decoding.
    pub async fn post_transcript(&self, body: Vec<u8>) -> Result<Vec<u8>, TransportError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                code = "HELPDESK_HTTP_STATUS",
                status = status.as_u16(),
                "helpdesk endpoint answered with a non-success status"
            );
        }

        let bytes = response.bytes().await.map_err(|error| {
            TransportError::new(
                TransportErrorKind::Body,
                format!("failed to read response: {error}"),
            )
        })?;

        tracing::debug!(status = status.as_u16(), bytes = bytes.len(), "helpdesk response received");
        Ok(bytes.to_vec())
    }
}

fn client_builder(config: &BackendConfig) -> ClientBuilder {
    let builder = Client::builder();
    match config.request_timeout_ms {
        Some(timeout_ms) => builder.timeout(Duration::from_millis(timeout_ms)),
        None => builder,
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, AppError> {
    let url = Url::parse(raw).map_err(|error| AppError::InvalidEndpoint {
        url: raw.to_owned(),
        details: error.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::InvalidEndpoint {
            url: raw.to_owned(),
            details: format!("unsupported scheme {:?}", url.scheme()),
        });
    }

    Ok(url)
}

fn classify(error: reqwest::Error) -> TransportError {
    let kind = if error.is_timeout() {
        TransportErrorKind::Timeout
    } else if error.is_connect() {
        TransportErrorKind::Connect
    } else {
        TransportErrorKind::Other
    };

    TransportError::new(kind, error.to_string())
}

#[cfg(test)]
mod tests {
    use std::{
        io::{Read, Write},
        net::TcpListener,
        sync::mpsc,
        thread,
    };

    use super::*;

    fn test_runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("runtime should build")
    }

    fn loopback_client(port: u16) -> HelpdeskClient {
        let http = Client::builder().no_proxy().build().expect("client");
        let endpoint = Url::parse(&format!("http://127.0.0.1:{port}/appChatBot")).expect("url");
        HelpdeskClient::with_http(http, endpoint)
    }

    /// Accepts one connection, captures the raw request, replies with `response`.
    fn serve_once(response: &'static str) -> (u16, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().expect("addr").port();

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept");
            let mut raw = Vec::new();
            let mut buf = [0_u8; 4096];

            loop {
                let read = stream.read(&mut buf).expect("read");
                if read == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..read]);
                if request_complete(&raw) {
                    break;
                }
            }

            stream.write_all(response.as_bytes()).expect("write");
            String::from_utf8_lossy(&raw).into_owned()
        });

        (port, handle)
    }

    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };

        let content_length = text[..header_end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);

        raw.len() >= header_end + 4 + content_length
    }

    #[test]
    fn posts_json_body_and_returns_response_bytes() {
        let (port, server) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 20\r\nConnection: close\r\n\r\n{\"message\":\"Hello!\"}",
        );
        let client = loopback_client(port);

        let body = test_runtime()
            .block_on(client.post_transcript(br#"{"messages":[]}"#.to_vec()))
            .expect("request should succeed");
        let request = server.join().expect("server thread");

        assert_eq!(body, br#"{"message":"Hello!"}"#.to_vec());
        assert!(request.starts_with("POST /appChatBot HTTP/1.1"));
        assert!(request
            .to_ascii_lowercase()
            .contains("content-type: application/json"));
        assert!(request.ends_with(r#"{"messages":[]}"#));
    }

    #[test]
    fn non_success_status_still_returns_body() {
        let (port, server) = serve_once(
            "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 4\r\nConnection: close\r\n\r\noops",
        );
        let client = loopback_client(port);

        let body = test_runtime()
            .block_on(client.post_transcript(b"{}".to_vec()))
            .expect("a body was delivered");
        server.join().expect("server thread");

        assert_eq!(body, b"oops".to_vec());
    }

    #[test]
    fn refused_connection_is_a_transport_error() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
            listener.local_addr().expect("addr").port()
        };
        let client = loopback_client(port);

        let error = test_runtime()
            .block_on(client.post_transcript(b"{}".to_vec()))
            .expect_err("nothing listens on the port");

        assert_eq!(error.kind, TransportErrorKind::Connect);
        assert!(!error.description.is_empty());
    }

    #[test]
    fn default_config_bounds_request_time() {
        assert_eq!(BackendConfig::default().request_timeout_ms, Some(60_000));
    }

    #[test]
    fn stalled_server_ends_in_timeout_error() {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().expect("addr").port();
        let (release_tx, release_rx) = mpsc::channel::<()>();

        // Holds the accepted connection open without answering.
        let server = thread::spawn(move || {
            let (_stream, _) = listener.accept().expect("accept");
            let _ = release_rx.recv();
        });

        let config = BackendConfig {
            endpoint_url: format!("http://127.0.0.1:{port}/appChatBot"),
            request_timeout_ms: Some(200),
            ..BackendConfig::default()
        };
        let http = client_builder(&config).no_proxy().build().expect("client");
        let client = HelpdeskClient::with_http(
            http,
            parse_endpoint(&config.endpoint_url).expect("endpoint"),
        );

        let error = test_runtime()
            .block_on(client.post_transcript(b"{}".to_vec()))
            .expect_err("server never answers");
        drop(release_tx);
        server.join().expect("server thread");

        assert_eq!(error.kind, TransportErrorKind::Timeout);
    }

    #[test]
    fn new_rejects_invalid_endpoints() {
        let config = BackendConfig {
            endpoint_url: "not a url".to_owned(),
            ..BackendConfig::default()
        };
        assert!(matches!(
            HelpdeskClient::new(&config),
            Err(AppError::InvalidEndpoint { .. })
        ));

        let config = BackendConfig {
            endpoint_url: "ftp://example.com/chat".to_owned(),
            ..BackendConfig::default()
        };
        assert!(matches!(
            HelpdeskClient::new(&config),
            Err(AppError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn new_accepts_default_endpoint() {
        let client = HelpdeskClient::new(&BackendConfig::default()).expect("default endpoint");

        assert_eq!(client.endpoint().scheme(), "https");
        assert_eq!(client.endpoint().path(), "/appChatBot");
    }
}
