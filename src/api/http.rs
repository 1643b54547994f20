use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use std::time::Duration;

use super::{ApiError, MeetupClient};
use crate::config::AppConfig;
use crate::models::meetup::{MeetupId, RawMeetup};

/// `MeetupClient` over HTTP/JSON.
#[derive(Debug, Clone)]
pub struct HttpMeetupClient {
    client: Client,
    base: Url,
    token: Option<String>,
}

impl HttpMeetupClient {
    pub fn new(base_url: &str, token: Option<String>, timeout: Duration) -> Result<Self, ApiError> {
        let base = Url::parse(base_url)
            .map_err(|e| ApiError::transport(format!("invalid API base URL '{base_url}': {e}")))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::transport(format!("API base URL '{base_url}' cannot carry a path")));
        }
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::transport(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, base, token })
    }

    pub fn from_config(cfg: &AppConfig) -> Result<Self, ApiError> {
        Self::new(&cfg.api_url, cfg.api_token.clone(), cfg.api_timeout)
    }

    /// `{base}/meetups/{id}`, with the id encoded as one path segment.
    pub fn meetup_url(&self, id: &MeetupId) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::transport("API base URL cannot carry a path"))?
            .pop_if_empty()
            .push("meetups")
            .push(id.as_str());
        Ok(url)
    }

    fn request(&self, method: Method, id: &MeetupId) -> Result<RequestBuilder, ApiError> {
        let mut req = self.client.request(method, self.meetup_url(id)?);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        Ok(req)
    }
}

/// Turn a non-2xx response into an `ApiError`, keeping the body's `error` text.
async fn status_error(resp: Response) -> ApiError {
    let status = resp.status().as_u16();
    let message = resp
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| body.get("error").and_then(|e| e.as_str()).map(String::from));
    ApiError::status(status, message)
}

#[async_trait]
impl MeetupClient for HttpMeetupClient {
    async fn fetch_meetup(&self, id: &MeetupId) -> Result<RawMeetup, ApiError> {
        let resp = self
            .request(Method::GET, id)?
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(status_error(resp).await);
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;
        serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::decode(format!("meetup {id}: {e}")))
    }

    async fn delete_meetup(&self, id: &MeetupId) -> Result<(), ApiError> {
        let resp = self
            .request(Method::DELETE, id)?
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(status_error(resp).await);
        }
        Ok(())
    }
}
