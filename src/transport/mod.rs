//! HTTP transport layer.
//!
//! The batch executor treats the transport as a black box: one descriptor in,
//! one parsed JSON payload (or error) out. The [`Transport`] trait is the
//! seam that lets tests substitute a scripted transport for the real one.

mod http;

pub use http::{HttpTransport, TransportError};

use crate::request::RequestDescriptor;
use crate::Result;

/// Issues a single HTTP request described by a [`RequestDescriptor`].
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, descriptor: &RequestDescriptor) -> Result<serde_json::Value>;
}
