//! HTTP client for the Erudio backend.
//!
//! Each call is a stateless request/response: JSON in, JSON out, with a
//! bearer token attached when one is supplied. There is no retry and no
//! timeout tuning; a non-success status becomes [`ClientError::Status`].

pub mod auth;
pub mod chat;
pub mod study;

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ClientError, Result};

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(req: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn check(resp: Response) -> Result<Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(ClientError::Status {
            status: status.as_u16(),
            body,
        })
    }

    pub(crate) async fn get_json<R: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<R> {
        let req = Self::authorize(self.http.get(self.url(path)), token);
        let resp = Self::check(req.send().await?).await?;
        Ok(resp.json().await?)
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<R> {
        let req = Self::authorize(self.http.post(self.url(path)), token).json(body);
        let resp = Self::check(req.send().await?).await?;
        Ok(resp.json().await?)
    }

    pub(crate) async fn delete(&self, path: &str, token: Option<&str>) -> Result<()> {
        let req = Self::authorize(self.http.delete(self.url(path)), token);
        Self::check(req.send().await?).await?;
        Ok(())
    }
}
