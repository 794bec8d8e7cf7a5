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

//! Project API types.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::default_true;
use crate::error::BuilderError;

/// The project data.
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct Project {
    /// The project ID.
    #[validate(length(min = 1, max = 64))]
    pub id: String,

    /// The project name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// The description of the project.
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 255))]
    pub description: Option<String>,

    /// The ID of the domain owning the project.
    #[validate(length(min = 1, max = 64))]
    pub domain_id: String,

    /// The ID of the parent of the project.
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 64))]
    pub parent_id: Option<String>,

    /// If set to true, project is enabled. If set to false, project is
    /// disabled.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Indicates whether the project also acts as a domain. If set to true,
    /// this project acts as both a project and domain. Default is false.
    #[builder(default)]
    #[serde(default)]
    pub is_domain: bool,

    /// The link to the resource in question.
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Value>,

    /// Additional project properties.
    #[builder(default)]
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub extra: Option<Value>,
}

/// New project data.
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct ProjectCreate {
    /// The name of the project, which must be unique within the owning
    /// domain. A project can have the same name as its domain.
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// The description of the project.
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 255))]
    pub description: Option<String>,

    /// The ID of the domain for the project. Defaults to the domain of the
    /// authentication scope when omitted.
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 64))]
    pub domain_id: Option<String>,

    /// The ID of the parent of the project.
    ///
    /// If specified, this places the project within a hierarchy and
    /// implicitly defines the owning domain. `parent_id` is immutable and
    /// cannot be updated after the project is created.
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 64))]
    pub parent_id: Option<String>,

    /// If set to true, project is enabled. If set to false, project is
    /// disabled.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Indicates whether the project also acts as a domain. You cannot
    /// update this parameter after you create the project.
    #[builder(default)]
    #[serde(default)]
    pub is_domain: bool,

    /// Additional project properties.
    #[builder(default)]
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub extra: Option<Value>,
}

/// Changed project data.
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct ProjectUpdate {
    /// The new project name.
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    /// The new description of the project.
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 255))]
    pub description: Option<String>,

    /// Enable or disable the project.
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Project create request.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
pub struct ProjectCreateRequest {
    /// New project object.
    #[validate(nested)]
    pub project: ProjectCreate,
}

/// Project update request.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
pub struct ProjectUpdateRequest {
    /// Changed project object.
    #[validate(nested)]
    pub project: ProjectUpdate,
}

/// Single project response.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
pub struct ProjectResponse {
    /// Project object.
    #[validate(nested)]
    pub project: Project,
}

/// Projects.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
pub struct ProjectList {
    /// Collection of project objects.
    #[validate(nested)]
    pub projects: Vec<Project>,
}

/// Project listing parameters.
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct ProjectListParameters {
    /// Filter projects by the domain.
    #[builder(default)]
    #[validate(length(max = 64))]
    pub domain_id: Option<String>,

    /// Filter projects by the name attribute.
    #[builder(default)]
    #[validate(length(max = 255))]
    pub name: Option<String>,

    /// Filter projects by the enabled flag.
    #[builder(default)]
    pub enabled: Option<bool>,
}
