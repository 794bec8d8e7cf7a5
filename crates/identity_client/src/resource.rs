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

//! Population of resource models from keyed API responses.

use serde::de::DeserializeOwned;

use crate::api::ApiOperation;
use crate::error::IdentityClientError;
use crate::transport::ApiResponse;

/// Deserialize the resource an operation returns, unwrapping the JSON key
/// the operation declares (`{"project": {…}}`, `{"roles": […]}`).
pub(crate) fn populate<T: DeserializeOwned>(
    operation: &ApiOperation,
    response: &ApiResponse,
) -> Result<T, IdentityClientError> {
    let body = response
        .body
        .as_ref()
        .ok_or(IdentityClientError::EmptyResponse)?;
    let resource = match operation.json_key {
        Some(key) => body
            .get(key)
            .ok_or(IdentityClientError::MissingResourceKey { key })?,
        None => body,
    };
    Ok(serde_json::from_value(resource.clone())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use serde_json::json;

    use openstack_identity_api_types::v3::project::Project;

    use crate::api::v3::{DELETE_PROJECT, GET_PROJECT};

    #[test]
    fn populate_unwraps_the_resource_key() {
        let response = ApiResponse {
            status: StatusCode::OK,
            body: Some(json!({"project": {
                "id": "pid", "name": "staging", "domain_id": "default"
            }})),
        };
        let project: Project = populate(&GET_PROJECT, &response).unwrap();
        assert_eq!(project.id, "pid");
    }

    #[test]
    fn populate_reports_a_missing_key() {
        let response = ApiResponse {
            status: StatusCode::OK,
            body: Some(json!({"tenant": {}})),
        };
        match populate::<Project>(&GET_PROJECT, &response) {
            Err(IdentityClientError::MissingResourceKey { key }) => assert_eq!(key, "project"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn populate_reports_an_empty_body() {
        let response = ApiResponse {
            status: StatusCode::NO_CONTENT,
            body: None,
        };
        assert!(matches!(
            populate::<Project>(&GET_PROJECT, &response),
            Err(IdentityClientError::EmptyResponse)
        ));
    }

    #[test]
    fn populate_without_key_takes_the_whole_body() {
        let response = ApiResponse {
            status: StatusCode::OK,
            body: Some(json!({"left": "over"})),
        };
        let value: serde_json::Value = populate(&DELETE_PROJECT, &response).unwrap();
        assert_eq!(value, json!({"left": "over"}));
    }
}
