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

//! # Identity v2
//!
//! The v2 surface of this client is the service catalog handed out with a
//! token: catalog entries, their endpoints and URL resolution by service
//! name/type, region and URL visibility.

pub use openstack_identity_api_types::v2::catalog::{Endpoint, Entry, UrlType};

/// The service catalog of an Identity v2 token.
#[derive(Clone, Debug, Default)]
pub struct ServiceCatalog {
    entries: Vec<Entry>,
}

impl ServiceCatalog {
    /// Build the catalog from the entries of a token response.
    pub fn new<E: Into<Vec<Entry>>>(entries: E) -> Self {
        Self {
            entries: entries.into(),
        }
    }

    /// Catalog entries in the order the service listed them.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Resolve the URL of the service with the given name and type in the
    /// given region.
    ///
    /// Entries are scanned in catalog order; the first entry matching the
    /// name/type pair that carries an endpoint for the region and URL type
    /// wins. Returns an empty string when nothing matches.
    pub fn endpoint_url(&self, name: &str, r#type: &str, region: &str, url_type: UrlType) -> String {
        for entry in &self.entries {
            if entry.matches(name, r#type) {
                let url = entry.endpoint_url(region, url_type);
                if !url.is_empty() {
                    return url;
                }
            }
        }

        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openstack_identity_api_types::v2::catalog::{EndpointBuilder, EntryBuilder};

    fn catalog() -> ServiceCatalog {
        ServiceCatalog::new(vec![
            EntryBuilder::default()
                .name("nova")
                .r#type("compute")
                .endpoints(vec![
                    EndpointBuilder::default()
                        .region("RegionOne")
                        .public_url("https://compute.region-one.cloud:8774")
                        .build()
                        .unwrap(),
                ])
                .build()
                .unwrap(),
            EntryBuilder::default()
                .name("glance")
                .r#type("image")
                .endpoints(vec![
                    EndpointBuilder::default()
                        .region("RegionOne")
                        .public_url("https://image.region-one.cloud:9292")
                        .build()
                        .unwrap(),
                ])
                .build()
                .unwrap(),
        ])
    }

    #[test]
    fn endpoint_url_matches_name_and_type() {
        assert_eq!(
            catalog().endpoint_url("glance", "image", "RegionOne", UrlType::Public),
            "https://image.region-one.cloud:9292"
        );
    }

    #[test]
    fn endpoint_url_is_empty_for_unknown_service_or_region() {
        let catalog = catalog();
        assert_eq!(
            catalog.endpoint_url("glance", "compute", "RegionOne", UrlType::Public),
            ""
        );
        assert_eq!(
            catalog.endpoint_url("nova", "compute", "RegionTwo", UrlType::Public),
            ""
        );
        assert_eq!(
            catalog.endpoint_url("nova", "compute", "RegionOne", UrlType::Admin),
            ""
        );
    }
}
