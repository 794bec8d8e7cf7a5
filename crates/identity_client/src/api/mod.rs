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

//! # API operation descriptors
//!
//! Every call the client makes is declared as a static [`ApiOperation`]: the
//! HTTP method, a path template with `{param}` placeholders and, where the
//! response wraps the resource, the JSON key it is wrapped under. Resource
//! models turn a descriptor into a [`RestRequest`] and hand it to the shared
//! executor.

use reqwest::Method;
use serde_json::Value;
use thiserror::Error;

pub mod v3;

/// API descriptor error.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A path parameter was supplied with an empty value.
    #[error("path parameter {0} must not be empty")]
    EmptyPathParameter(String),

    /// A placeholder of the path template was left unsubstituted.
    #[error("path parameter {0} is required")]
    MissingPathParameter(String),
}

/// A declarative descriptor of one REST API operation.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiOperation {
    /// The HTTP method.
    pub method: Method,

    /// Path template relative to the service base URL. Placeholders use the
    /// `{param}` form.
    pub path: &'static str,

    /// The JSON key the resource is wrapped under in the response body.
    pub json_key: Option<&'static str>,
}

impl ApiOperation {
    /// Build a request from the descriptor, substituting the path
    /// placeholders from `params` (`(name, value)` pairs). Values are
    /// percent-encoded, so an id cannot alter the route.
    pub fn request(&self, params: &[(&str, &str)]) -> Result<RestRequest, ApiError> {
        let mut path = self.path.to_string();
        for (name, value) in params {
            if value.is_empty() {
                return Err(ApiError::EmptyPathParameter((*name).into()));
            }
            path = path.replace(&format!("{{{name}}}"), &urlencoding::encode(value));
        }
        if let Some(start) = path.find('{') {
            let end = path[start..]
                .find('}')
                .map(|pos| start + pos)
                .unwrap_or(path.len() - 1);
            return Err(ApiError::MissingPathParameter(
                path[start + 1..end].to_string(),
            ));
        }
        Ok(RestRequest {
            method: self.method.clone(),
            path,
            query: Vec::new(),
            body: None,
        })
    }
}

/// A fully resolved request ready for the executor.
#[derive(Clone, Debug, PartialEq)]
pub struct RestRequest {
    /// The HTTP method.
    pub method: Method,

    /// Path relative to the service base URL, placeholders substituted.
    pub path: String,

    /// Query string parameters.
    pub query: Vec<(String, String)>,

    /// Json body.
    pub body: Option<Value>,
}

impl RestRequest {
    /// Attach a json body.
    pub fn with_json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Attach query string parameters.
    pub fn with_query<I, K, V>(mut self, query: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(query.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }
}
