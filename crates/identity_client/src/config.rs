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

//! # Client configuration
//!
//! The client is configured with the Identity service base URL and a
//! pre-obtained token. Token negotiation is not part of this client.

use derive_builder::Builder;
use secrecy::SecretString;
use std::env;
use std::time::Duration;
use thiserror::Error;
use url::Url;

use openstack_identity_api_types::error::BuilderError;

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Builder {
        #[from]
        source: BuilderError,
    },

    /// Required environment variable is not set.
    #[error("environment variable {0} must be set")]
    MissingEnv(&'static str),

    /// Url parsing error.
    #[error(transparent)]
    UrlParse {
        #[from]
        source: url::ParseError,
    },
}

/// Identity client configuration.
#[derive(Builder, Clone, Debug)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(into))]
pub struct Config {
    /// Base URL of the Identity service, for example
    /// `https://identity.cloud/`. Versioned API paths (`v3/...`) are joined
    /// onto it.
    pub auth_url: Url,

    /// The token sent as `x-auth-token` on every request.
    pub token: SecretString,

    /// Request timeout.
    #[builder(default = "Duration::from_secs(60)")]
    pub timeout: Duration,
}

impl Config {
    /// Build the configuration from the process environment.
    ///
    /// Reads the service URL from `OS_AUTH_URL` (falling back to
    /// `KEYSTONE_URL`) and the token from `OS_AUTH_TOKEN`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let auth_url = env::var("OS_AUTH_URL")
            .or_else(|_| env::var("KEYSTONE_URL"))
            .map_err(|_| ConfigError::MissingEnv("OS_AUTH_URL"))?;
        let token =
            env::var("OS_AUTH_TOKEN").map_err(|_| ConfigError::MissingEnv("OS_AUTH_TOKEN"))?;
        Ok(ConfigBuilder::default()
            .auth_url(Url::parse(&auth_url)?)
            .token(SecretString::from(token))
            .build()?)
    }
}
