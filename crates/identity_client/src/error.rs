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

//! # Error
//!
//! Diverse errors that can occur while talking to the Identity API.

use thiserror::Error;

use openstack_identity_api_types::error::BuilderError;

use crate::api::ApiError;
use crate::config::ConfigError;
use crate::transport::TransportError;

/// Identity client error.
#[derive(Debug, Error)]
pub enum IdentityClientError {
    #[error(transparent)]
    Api {
        #[from]
        source: ApiError,
    },

    #[error(transparent)]
    Builder {
        #[from]
        source: BuilderError,
    },

    #[error(transparent)]
    Config {
        #[from]
        source: ConfigError,
    },

    /// A body was expected, but the response carried none.
    #[error("response carries no body")]
    EmptyResponse,

    /// Json serialization error.
    #[error("json serde error: {}", source)]
    Json {
        /// The source of the error.
        #[from]
        source: serde_json::Error,
    },

    /// The keyed resource is missing in the response body.
    #[error("response body carries no {key:?} key")]
    MissingResourceKey { key: &'static str },

    #[error(transparent)]
    Transport {
        #[from]
        source: TransportError,
    },

    /// Request validation error.
    #[error("request validation error: {}", source)]
    Validation {
        /// The source of the error.
        #[from]
        source: validator::ValidationErrors,
    },
}
