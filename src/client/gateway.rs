//! Authorized request gateway
//!
//! All traffic to the catalog goes through [`Gateway::request`]. It builds
//! the URL from the configured API root, sends JSON, attaches the session's
//! bearer token when there is one and turns the response into either the
//! parsed body or an [`ApiError`].

use std::time::Duration;

use log::debug;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client as HttpClient, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};
use crate::session::SessionContext;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Whether a request may carry the session token
#[derive(Debug, Clone, Copy)]
enum Bearer {
    Session,
    Never,
}

pub struct Gateway {
    http: HttpClient,
    base_url: String,
    session: SessionContext,
}

impl Gateway {
    pub fn with_timeout(
        base_url: &str,
        session: SessionContext,
        timeout: Duration,
    ) -> ApiResult<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(concat!("libcat/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send `method path` with an optional JSON body
    pub async fn request<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(Bearer::Session, method, path, body).await
    }

    /// Like [`Gateway::request`], but never attaches the session token.
    ///
    /// For sign-in and account creation, which a stale token must not break.
    pub async fn request_anonymous<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(Bearer::Never, method, path, body).await
    }

    async fn send_json<T, B>(
        &self,
        bearer: Bearer,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut builder = self.prepare(bearer, method.clone(), path);
        if let Some(body) = body {
            let encoded = serde_json::to_vec(body)
                .map_err(|e| ApiError::Parse(format!("Failed to encode request body: {}", e)))?;
            builder = builder.body(encoded);
        }
        self.send(builder, &method, path).await
    }

    /// Send `method path?query` without a body
    pub async fn request_with_query<T, Q>(
        &self,
        method: Method,
        path: &str,
        query: &Q,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let builder = self.prepare(Bearer::Session, method.clone(), path).query(query);
        self.send(builder, &method, path).await
    }

    fn prepare(&self, bearer: Bearer, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self
            .http
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");

        let token = match bearer {
            Bearer::Session => self.session.get(),
            Bearer::Never => None,
        };
        match token {
            Some(token) => {
                debug!("{} {} (bearer)", method, url);
                builder.header(AUTHORIZATION, format!("Bearer {}", token))
            }
            None => {
                debug!("{} {} (anonymous)", method, url);
                builder
            }
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        method: &Method,
        path: &str,
    ) -> ApiResult<T> {
        let response = builder.send().await.map_err(ApiError::from)?;

        let status = response.status();
        debug!("{} {} -> {}", method, path, status);

        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("Unknown status")
                    .to_string(),
            });
        }

        let bytes = response.bytes().await.map_err(ApiError::from)?;
        // 204 and friends carry no body
        let body: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
            b"null"
        } else {
            &bytes
        };

        serde_json::from_slice(body).map_err(|e| {
            ApiError::Parse(format!("Failed to parse response from {}: {}", path, e))
        })
    }
}
