//! Inference provider implementations for Postcraft.
//!
//! All providers implement the `postcraft_core::Provider` trait.
//! The router selects the correct provider based on configuration.

pub mod openai_compat;
pub mod router;
pub mod workers_ai;

pub use openai_compat::OpenAiCompatProvider;
pub use router::{ProviderRouter, build_from_config, inference_provider};
pub use workers_ai::WorkersAiProvider;

use postcraft_core::error::ProviderError;
use tracing::warn;

/// Build the shared HTTP client used by every provider.
pub(crate) fn http_client(timeout_secs: u64) -> reqwest::Client {
    match reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_secs))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            warn!(error = %e, timeout_secs, "HTTP client build failed, using defaults without a timeout");
            reqwest::Client::new()
        }
    }
}

/// Map a non-success HTTP status and its body to a provider error.
pub(crate) fn status_error(provider: &str, status: u16, body: String) -> ProviderError {
    match status {
        429 => ProviderError::RateLimited {
            retry_after_secs: 5,
        },
        401 | 403 => ProviderError::AuthenticationFailed(
            "Invalid API key or insufficient permissions".into(),
        ),
        404 => ProviderError::ModelNotFound(format!(
            "{provider} returned 404 for the requested model"
        )),
        _ => {
            warn!(provider, status, body = %body, "Provider returned error");
            ProviderError::ApiError {
                status_code: status,
                message: body,
            }
        }
    }
}

/// Pass a 200 response through; anything else becomes a provider error.
pub(crate) async fn check_status(
    provider: &str,
    response: reqwest::Response,
) -> Result<reqwest::Response, ProviderError> {
    let status = response.status().as_u16();
    if status == 200 {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(status_error(provider, status, body))
}

/// Classify a transport-level failure.
pub(crate) fn transport_error(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout(e.to_string())
    } else {
        ProviderError::Network(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postcraft_core::message::Message;
    use postcraft_core::provider::{Provider, ProviderRequest};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// True once `request` holds the headers and the whole declared body.
    fn request_complete(request: &[u8]) -> bool {
        let text = String::from_utf8_lossy(request);
        let Some(end) = text.find("\r\n\r\n") else {
            return false;
        };
        let length = text[..end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                if name.eq_ignore_ascii_case("content-length") {
                    value.trim().parse::<usize>().ok()
                } else {
                    None
                }
            })
            .unwrap_or(0);
        request.len() >= end + 4 + length
    }

    /// Serve one canned HTTP response on a local port and return its base URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                if request_complete(&request) {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: text/plain\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        format!("http://{addr}")
    }

    fn request() -> ProviderRequest {
        ProviderRequest::new("@cf/meta/llama-3-8b-instruct", vec![Message::user("AI")])
    }

    #[test]
    fn status_error_mapping() {
        assert!(matches!(
            status_error("workers_ai", 429, String::new()),
            ProviderError::RateLimited {
                retry_after_secs: 5
            }
        ));
        for status in [401, 403] {
            assert!(matches!(
                status_error("workers_ai", status, String::new()),
                ProviderError::AuthenticationFailed(_)
            ));
        }
        match status_error("openai", 404, String::new()) {
            ProviderError::ModelNotFound(msg) => assert!(msg.starts_with("openai returned 404")),
            other => panic!("expected ModelNotFound, got {other:?}"),
        }
        match status_error("openai", 500, "upstream exploded".into()) {
            ProviderError::ApiError {
                status_code,
                message,
            } => {
                assert_eq!(status_code, 500);
                assert_eq!(message, "upstream exploded");
            }
            other => panic!("expected ApiError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn server_error_body_reaches_caller() {
        let base = serve_once("500 Internal Server Error", "model overloaded").await;
        let provider = WorkersAiProvider::new("acct-1", "token").with_base_url(base);

        match provider.complete(request()).await.unwrap_err() {
            ProviderError::ApiError {
                status_code,
                message,
            } => {
                assert_eq!(status_code, 500);
                assert_eq!(message, "model overloaded");
            }
            other => panic!("expected ApiError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn rate_limit_status_is_classified() {
        let base = serve_once("429 Too Many Requests", "").await;
        let provider = WorkersAiProvider::new("acct-1", "token").with_base_url(base);
        assert!(matches!(
            provider.complete(request()).await.unwrap_err(),
            ProviderError::RateLimited { .. }
        ));
    }

    #[tokio::test]
    async fn silent_server_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(std::time::Duration::from_secs(10)).await;
        });

        let err = http_client(1)
            .get(format!("http://{addr}/models"))
            .send()
            .await
            .unwrap_err();
        assert!(matches!(transport_error(err), ProviderError::Timeout(_)));
    }

    #[tokio::test]
    async fn refused_connection_is_network_error() {
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap()
        };

        let err = http_client(5)
            .get(format!("http://{addr}/models"))
            .send()
            .await
            .unwrap_err();
        assert!(matches!(transport_error(err), ProviderError::Network(_)));
    }
}
