//! HTTP retrieval of the download listing.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{Error, Result};
use crate::fetch::{split_lines, PageSource};

/// Fetches the listing page with a single GET. No retries.
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    /// Create a source for `url` with the given user agent and request timeout.
    pub fn new(url: &str, user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    /// Create a source around an existing client.
    pub fn with_client(url: &str, client: Client) -> Self {
        Self {
            client,
            url: url.to_string(),
        }
    }
}

#[async_trait]
impl PageSource for HttpSource {
    async fn fetch_lines(&self) -> Result<Vec<String>> {
        tracing::debug!("GET {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(Error::HttpStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        tracing::debug!("Received {} bytes", body.len());

        Ok(split_lines(&body))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response per connection.
    async fn start_server(status_line: &'static str, body: &'static str) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_line,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        addr
    }

    fn source(url: String) -> HttpSource {
        // Keep ambient proxy settings away from the loopback server
        let client = Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        HttpSource::with_client(&url, client)
    }

    #[tokio::test]
    async fn test_fetch_lines_ok() {
        let addr = start_server("200 OK", "<table>\r\n  120  \r\n</table>\r\n").await;
        let lines = source(format!("http://{}/downloads/list", addr))
            .fetch_lines()
            .await
            .unwrap();
        assert_eq!(lines, vec!["<table>", "  120  ", "</table>"]);
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let addr = start_server("404 Not Found", "gone").await;
        let err = source(format!("http://{}/downloads/list", addr))
            .fetch_lines()
            .await
            .unwrap_err();
        match err {
            Error::HttpStatus { status, .. } => assert_eq!(status, 404),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_host() {
        // Grab a free port, then close it so nothing is listening
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = source(format!("http://{}/downloads/list", addr))
            .fetch_lines()
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Http(_)));
    }
}
