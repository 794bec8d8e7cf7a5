// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

//! # Transport
//!
//! The shared executor all resource models send their requests through.
//! [`Session`] is the reqwest-backed implementation; the [`RestClient`]
//! trait is the seam the models talk to, so tests can substitute a mock.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{ClientBuilder, StatusCode};
use secrecy::ExposeSecret;
use serde_json::Value;
use tracing::{debug, error};
use url::Url;

pub mod error;
#[cfg(test)]
pub(crate) mod mock;

use crate::api::RestRequest;
use crate::config::Config;

pub use error::TransportError;

/// A response as the models consume it.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    /// The response status.
    pub status: StatusCode,

    /// The json body, when the response carried one.
    pub body: Option<Value>,
}

/// Shared request executor.
#[async_trait]
pub trait RestClient: Send + Sync + std::fmt::Debug {
    /// Execute the request against the Identity service.
    ///
    /// A non-success status is reported as
    /// [`TransportError::BadResponse`].
    async fn execute(&self, request: RestRequest) -> Result<ApiResponse, TransportError>;
}

/// The reqwest-backed executor.
///
/// Joins request paths onto the configured base URL and sends the configured
/// token as the `x-auth-token` header on every request.
#[derive(Clone, Debug)]
pub struct Session {
    client: reqwest::Client,
    base_url: Url,
}

impl Session {
    /// Build a session from the client configuration.
    pub fn new(config: &Config) -> Result<Self, TransportError> {
        let mut token = HeaderValue::from_str(config.token.expose_secret())?;
        token.set_sensitive(true);
        let client = ClientBuilder::new()
            .default_headers(HeaderMap::from_iter([(
                HeaderName::from_static("x-auth-token"),
                token,
            )]))
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: config.auth_url.clone(),
        })
    }
}

#[async_trait]
impl RestClient for Session {
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(method = %request.method, path = %request.path)
    )]
    async fn execute(&self, request: RestRequest) -> Result<ApiResponse, TransportError> {
        let url = self.base_url.join(&request.path)?;
        let mut builder = self.client.request(request.method, url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(TransportError::BadResponse { status, body: text });
        }

        debug!("the identity service answered with {status}");
        let body = if text.is_empty() {
            None
        } else {
            match serde_json::from_str(&text) {
                Ok(value) => Some(value),
                Err(source) => {
                    let snippet: String = text.chars().take(256).collect();
                    error!("failed to decode the {status} response body: {source}: {snippet}");
                    return Err(source.into());
                }
            }
        };
        Ok(ApiResponse { status, body })
    }
}
