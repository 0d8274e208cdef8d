use std::time::Duration;

use serde_json::Value;

use crate::request::{RequestDescriptor, Verb};
use crate::transport::Transport;
use crate::{Error, Result};

/// Real HTTP transport backed by a shared `reqwest` client.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, descriptor: &RequestDescriptor) -> Result<Value> {
        let mut request = match descriptor.verb {
            Verb::Get => self.client.get(&descriptor.url),
            Verb::Post => self.client.post(&descriptor.url),
            Verb::Put => self.client.put(&descriptor.url),
            Verb::Delete => self.client.delete(&descriptor.url),
        };

        for (name, value) in &descriptor.headers {
            request = request.header(name, value);
        }

        if !descriptor.query.is_empty() {
            request = request.query(&descriptor.query);
        }

        if let Some(ref body) = descriptor.body {
            request = request.json(body);
        }

        tracing::debug!(verb = descriptor.verb.as_str(), url = %descriptor.url, "issuing request");

        let response = request
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        let status = response.status();
        if !status.is_success() {
            let (code, message) = remote_error_parts(status, response.json().await.ok());
            tracing::warn!(status = status.as_u16(), code = %code, url = %descriptor.url, "remote call failed");
            return Err(Error::Remote {
                status: status.as_u16(),
                code,
                message,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        // DELETE responses may legitimately carry no body.
        if bytes.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&bytes).map_err(Error::Serialization)
    }
}

/// Pull an error code and message out of the remote error envelope
/// (`{"type": "...", "message": "..."}`), falling back to the HTTP reason.
fn remote_error_parts(status: reqwest::StatusCode, body: Option<Value>) -> (String, String) {
    let fallback_code = status
        .canonical_reason()
        .unwrap_or("unknown")
        .to_lowercase()
        .replace(' ', "_");

    let Some(body) = body else {
        return (fallback_code.clone(), fallback_code);
    };

    let code = body
        .get("type")
        .or_else(|| body.get("error"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or(fallback_code);

    let message = body
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| code.clone());

    (code, message)
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_parts_prefer_body_envelope() {
        let (code, message) = remote_error_parts(
            reqwest::StatusCode::NOT_FOUND,
            Some(json!({"type": "not_found", "message": "no such calendar"})),
        );
        assert_eq!(code, "not_found");
        assert_eq!(message, "no such calendar");
    }

    #[test]
    fn error_parts_fall_back_to_status_reason() {
        let (code, message) = remote_error_parts(reqwest::StatusCode::BAD_GATEWAY, None);
        assert_eq!(code, "bad_gateway");
        assert_eq!(message, "bad_gateway");
    }
}
