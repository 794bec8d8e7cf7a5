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

//! Identity v3 API operations.

use reqwest::Method;

use super::ApiOperation;

/// Create a project.
pub const CREATE_PROJECT: ApiOperation = ApiOperation {
    method: Method::POST,
    path: "v3/projects",
    json_key: Some("project"),
};

/// List projects.
pub const LIST_PROJECTS: ApiOperation = ApiOperation {
    method: Method::GET,
    path: "v3/projects",
    json_key: Some("projects"),
};

/// Get a single project.
pub const GET_PROJECT: ApiOperation = ApiOperation {
    method: Method::GET,
    path: "v3/projects/{project_id}",
    json_key: Some("project"),
};

/// Update a project.
pub const UPDATE_PROJECT: ApiOperation = ApiOperation {
    method: Method::PATCH,
    path: "v3/projects/{project_id}",
    json_key: Some("project"),
};

/// Delete a project.
pub const DELETE_PROJECT: ApiOperation = ApiOperation {
    method: Method::DELETE,
    path: "v3/projects/{project_id}",
    json_key: None,
};

/// List role assignments of a user on a project.
pub const LIST_PROJECT_USER_ROLES: ApiOperation = ApiOperation {
    method: Method::GET,
    path: "v3/projects/{project_id}/users/{user_id}/roles",
    json_key: Some("roles"),
};

/// Grant a role to a user on a project.
pub const GRANT_PROJECT_USER_ROLE: ApiOperation = ApiOperation {
    method: Method::PUT,
    path: "v3/projects/{project_id}/users/{user_id}/roles/{role_id}",
    json_key: None,
};

/// Check whether a user has a role on a project.
pub const HEAD_PROJECT_USER_ROLE: ApiOperation = ApiOperation {
    method: Method::HEAD,
    path: "v3/projects/{project_id}/users/{user_id}/roles/{role_id}",
    json_key: None,
};

/// Revoke a role of a user on a project.
pub const REVOKE_PROJECT_USER_ROLE: ApiOperation = ApiOperation {
    method: Method::DELETE,
    path: "v3/projects/{project_id}/users/{user_id}/roles/{role_id}",
    json_key: None,
};

/// List role assignments of a group on a project.
pub const LIST_PROJECT_GROUP_ROLES: ApiOperation = ApiOperation {
    method: Method::GET,
    path: "v3/projects/{project_id}/groups/{group_id}/roles",
    json_key: Some("roles"),
};

/// Grant a role to a group on a project.
pub const GRANT_PROJECT_GROUP_ROLE: ApiOperation = ApiOperation {
    method: Method::PUT,
    path: "v3/projects/{project_id}/groups/{group_id}/roles/{role_id}",
    json_key: None,
};

/// Check whether a group has a role on a project.
pub const HEAD_PROJECT_GROUP_ROLE: ApiOperation = ApiOperation {
    method: Method::HEAD,
    path: "v3/projects/{project_id}/groups/{group_id}/roles/{role_id}",
    json_key: None,
};

/// Revoke a role of a group on a project.
pub const REVOKE_PROJECT_GROUP_ROLE: ApiOperation = ApiOperation {
    method: Method::DELETE,
    path: "v3/projects/{project_id}/groups/{group_id}/roles/{role_id}",
    json_key: None,
};
