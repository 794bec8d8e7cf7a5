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

//! # Identity v3
//!
//! The entry point is [`IdentityV3`], holding the shared executor. It hands
//! out [`Project`] resource models which carry the per-resource operations.

use std::sync::Arc;
use validator::Validate;

use openstack_identity_api_types::v3::project::{
    Project as ProjectData, ProjectCreate, ProjectCreateRequest, ProjectListParameters,
};

use crate::api;
use crate::config::Config;
use crate::error::IdentityClientError;
use crate::resource::populate;
use crate::transport::{RestClient, Session};

pub mod project;

pub use project::Project;

/// The Identity v3 service client.
#[derive(Clone, Debug)]
pub struct IdentityV3 {
    session: Arc<dyn RestClient>,
}

impl IdentityV3 {
    /// Build the service client from the configuration.
    pub fn new(config: &Config) -> Result<Self, IdentityClientError> {
        Ok(Self::with_client(Arc::new(Session::new(config)?)))
    }

    /// Build the service client around an existing executor.
    pub fn with_client(session: Arc<dyn RestClient>) -> Self {
        Self { session }
    }

    /// A handle on an existing project, without fetching it. Call
    /// [`Project::retrieve`] to populate it.
    pub fn project<I: Into<String>>(&self, id: I) -> Project {
        Project::new(self.session.clone(), id)
    }

    /// Create a project.
    #[tracing::instrument(level = "info", skip(self))]
    pub async fn create_project(
        &self,
        project: ProjectCreate,
    ) -> Result<Project, IdentityClientError> {
        project.validate()?;
        let request = api::v3::CREATE_PROJECT
            .request(&[])?
            .with_json(serde_json::to_value(ProjectCreateRequest { project })?);
        let response = self.session.execute(request).await?;
        let data: ProjectData = populate(&api::v3::CREATE_PROJECT, &response)?;
        Ok(Project::from_data(self.session.clone(), data))
    }

    /// List projects matching the filter parameters. A single page is
    /// fetched.
    #[tracing::instrument(level = "info", skip(self))]
    pub async fn list_projects(
        &self,
        params: &ProjectListParameters,
    ) -> Result<Vec<Project>, IdentityClientError> {
        params.validate()?;
        let mut query: Vec<(String, String)> = Vec::new();
        if let Some(domain_id) = &params.domain_id {
            query.push(("domain_id".into(), domain_id.clone()));
        }
        if let Some(name) = &params.name {
            query.push(("name".into(), name.clone()));
        }
        if let Some(enabled) = params.enabled {
            query.push(("enabled".into(), enabled.to_string()));
        }
        let request = api::v3::LIST_PROJECTS.request(&[])?.with_query(query);
        let response = self.session.execute(request).await?;
        let projects: Vec<ProjectData> = populate(&api::v3::LIST_PROJECTS, &response)?;
        Ok(projects
            .into_iter()
            .map(|data| Project::from_data(self.session.clone(), data))
            .collect())
    }
}
