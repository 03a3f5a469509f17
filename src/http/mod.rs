use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use thiserror::Error;
use tracing::{info, warn};

use crate::form::ContactForm;

pub const DEFAULT_ENDPOINT: &str = "https://silenttrack-contact-api.onrender.com/send-message";

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Endpoint rejected the message: {0}")]
    Status(StatusCode),

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Submission was interrupted before it finished")]
    Interrupted,
}

#[async_trait]
pub trait ContactSubmitter: Send + Sync {
    async fn send(&self, form: &ContactForm) -> Result<(), SubmitError>;
}

pub struct ContactService {
    client: Client,
    endpoint: String,
}

impl ContactService {
    pub fn new(endpoint: impl Into<String>) -> color_eyre::Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl ContactSubmitter for ContactService {
    async fn send(&self, form: &ContactForm) -> Result<(), SubmitError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(header::CONTENT_TYPE, "application/json")
            .json(form)
            .send()
            .await
            .inspect_err(|e| warn!(error = %e, "contact_send_failed"))?;

        let status = response.status();
        if status.is_success() {
            info!(status = status.as_u16(), "contact_sent");
            Ok(())
        } else {
            warn!(status = status.as_u16(), "contact_rejected");
            Err(SubmitError::Status(status))
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
        task::JoinHandle,
    };

    /// Serves exactly one request with the given status line and hands back
    /// the raw request text.
    pub async fn serve_once(status: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/send-message", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&chunk[..n]);
                if request_complete(&raw) {
                    break;
                }
            }

            let response =
                format!("HTTP/1.1 {status}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&raw).into_owned()
        });

        (url, handle)
    }

    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some(split) = text.find("\r\n\r\n") else {
            return false;
        };
        let length = text[..split]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        raw.len() >= split + 4 + length
    }

    /// An address nothing listens on.
    pub async fn refused_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}/send-message")
    }
}
