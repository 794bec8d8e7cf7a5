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

//! # Identity v2 service catalog types
//!
//! The v2 catalog is a list of entries, each grouping the endpoints of one
//! service under a service name and type. Endpoints carry up to three URLs
//! (public, internal, admin) per region.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::BuilderError;

/// The visibility of an endpoint URL.
///
/// - public. Visible by end users on a publicly available network interface.
/// - internal. Visible by end users on an unmetered internal network
///   interface.
/// - admin. Visible by administrative users on a secure network interface.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlType {
    #[default]
    Public,
    Internal,
    Admin,
}

/// A v2 catalog endpoint: the URLs of one service in one region.
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct Endpoint {
    /// The region the endpoint serves.
    #[builder(default)]
    #[validate(length(max = 64))]
    pub region: Option<String>,

    /// The publicly visible URL.
    #[builder(default)]
    #[serde(rename = "publicURL", skip_serializing_if = "Option::is_none")]
    #[validate(url)]
    pub public_url: Option<String>,

    /// The internal network URL.
    #[builder(default)]
    #[serde(rename = "internalURL", skip_serializing_if = "Option::is_none")]
    #[validate(url)]
    pub internal_url: Option<String>,

    /// The administrative URL.
    #[builder(default)]
    #[serde(rename = "adminURL", skip_serializing_if = "Option::is_none")]
    #[validate(url)]
    pub admin_url: Option<String>,
}

impl Endpoint {
    /// The endpoint URL of the given type, when the endpoint exposes one.
    pub fn url(&self, url_type: UrlType) -> Option<&str> {
        match url_type {
            UrlType::Public => self.public_url.as_deref(),
            UrlType::Internal => self.internal_url.as_deref(),
            UrlType::Admin => self.admin_url.as_deref(),
        }
    }

    /// Whether the endpoint serves the given region.
    pub fn supports_region(&self, region: &str) -> bool {
        self.region.as_deref() == Some(region)
    }

    /// Whether the endpoint exposes a URL of the given type.
    pub fn supports_url_type(&self, url_type: UrlType) -> bool {
        self.url(url_type).is_some()
    }
}

/// A v2 catalog entry: a named, typed group of service endpoints.
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(into))]
pub struct Entry {
    /// The service name, for example `nova`.
    #[validate(length(max = 255))]
    pub name: String,

    /// The service type, for example `compute`.
    #[validate(length(max = 64))]
    pub r#type: String,

    /// Endpoints of the service, usually one per region.
    #[builder(default)]
    #[validate(nested)]
    pub endpoints: Vec<Endpoint>,
}

impl Entry {
    /// Whether this catalog entry matches the given service name and type.
    pub fn matches(&self, name: &str, r#type: &str) -> bool {
        self.name == name && self.r#type == r#type
    }

    /// The entry URL for the given region and URL type.
    ///
    /// Returns the URL of the first endpoint serving both the region and the
    /// URL type, or an empty string when no endpoint matches.
    pub fn endpoint_url(&self, region: &str, url_type: UrlType) -> String {
        for endpoint in &self.endpoints {
            if endpoint.supports_region(region) && endpoint.supports_url_type(url_type) {
                if let Some(url) = endpoint.url(url_type) {
                    return url.into();
                }
            }
        }

        String::new()
    }
}
