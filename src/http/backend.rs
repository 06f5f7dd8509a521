use reqwest::Client;
use url::Url;

use crate::error::DispatchError;
use crate::model::{CreatedRequest, RequestDescriptor, ResponseDescriptor};

/// The two endpoints of the execution backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base: Url,
}

impl BackendClient {
    /// `base` must be a hierarchical http(s) URL; `AppConfig::backend_url` checks this.
    pub fn new(client: Client, base: Url) -> Self {
        Self { client, base }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// `POST /api/requests`
    pub async fn create(&self, descriptor: &RequestDescriptor) -> Result<CreatedRequest, DispatchError> {
        let url = self.endpoint(&["api", "requests"]);
        let response = self
            .client
            .post(url)
            .json(descriptor)
            .send()
            .await
            .map_err(DispatchError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(DispatchError::CreateFailed(status.as_u16()));
        }
        response.json().await.map_err(DispatchError::from_reply)
    }

    /// `POST /api/requests/{id}/execute`
    pub async fn execute(&self, id: &str) -> Result<ResponseDescriptor, DispatchError> {
        let url = self.endpoint(&["api", "requests", id, "execute"]);
        let response = self
            .client
            .post(url)
            .send()
            .await
            .map_err(DispatchError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(DispatchError::ExecuteFailed(status.as_u16()));
        }
        response.json().await.map_err(DispatchError::from_reply)
    }

    /// Append path segments to the base, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}
