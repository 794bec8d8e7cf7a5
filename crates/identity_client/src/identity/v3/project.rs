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

//! The project resource model.

use std::sync::Arc;
use validator::Validate;

use openstack_identity_api_types::v3::project::{
    Project as ProjectData, ProjectUpdate, ProjectUpdateRequest,
};
use openstack_identity_api_types::v3::role::Role;

use crate::api::{self, ApiOperation};
use crate::error::IdentityClientError;
use crate::resource::populate;
use crate::transport::{RestClient, TransportError};

/// A project (tenant) of the Identity v3 service.
///
/// The model is a transient view of the server-side resource: its [`data`]
/// reflects the last response it was populated from.
///
/// [`data`]: Project::data
#[derive(Clone, Debug)]
pub struct Project {
    session: Arc<dyn RestClient>,

    /// The project attributes as last populated from a response.
    pub data: ProjectData,
}

impl Project {
    pub(crate) fn new<I: Into<String>>(session: Arc<dyn RestClient>, id: I) -> Self {
        Self {
            session,
            data: ProjectData {
                id: id.into(),
                ..Default::default()
            },
        }
    }

    pub(crate) fn from_data(session: Arc<dyn RestClient>, data: ProjectData) -> Self {
        Self { session, data }
    }

    /// The project ID.
    pub fn id(&self) -> &str {
        &self.data.id
    }

    /// Fetch the project and repopulate the model from the response.
    #[tracing::instrument(level = "info", skip(self), fields(project_id = %self.data.id))]
    pub async fn retrieve(&mut self) -> Result<(), IdentityClientError> {
        let request = api::v3::GET_PROJECT.request(&[("project_id", &self.data.id)])?;
        let response = self.session.execute(request).await?;
        self.data = populate(&api::v3::GET_PROJECT, &response)?;
        Ok(())
    }

    /// Apply the changes to the project and repopulate the model from the
    /// response.
    #[tracing::instrument(level = "info", skip(self), fields(project_id = %self.data.id))]
    pub async fn update(&mut self, changes: ProjectUpdate) -> Result<(), IdentityClientError> {
        changes.validate()?;
        let request = api::v3::UPDATE_PROJECT
            .request(&[("project_id", &self.data.id)])?
            .with_json(serde_json::to_value(ProjectUpdateRequest { project: changes })?);
        let response = self.session.execute(request).await?;
        self.data = populate(&api::v3::UPDATE_PROJECT, &response)?;
        Ok(())
    }

    /// Delete the project, consuming the model.
    #[tracing::instrument(level = "info", skip(self), fields(project_id = %self.data.id))]
    pub async fn delete(self) -> Result<(), IdentityClientError> {
        let request = api::v3::DELETE_PROJECT.request(&[("project_id", &self.data.id)])?;
        self.session.execute(request).await?;
        Ok(())
    }

    /// List the roles a user holds on this project.
    pub async fn list_user_roles(&self, user_id: &str) -> Result<Vec<Role>, IdentityClientError> {
        self.list_roles(
            &api::v3::LIST_PROJECT_USER_ROLES,
            &[("project_id", &self.data.id), ("user_id", user_id)],
        )
        .await
    }

    /// Grant a role to a user on this project.
    #[tracing::instrument(level = "info", skip(self), fields(project_id = %self.data.id))]
    pub async fn grant_user_role(
        &self,
        user_id: &str,
        role_id: &str,
    ) -> Result<(), IdentityClientError> {
        self.assign_role(
            &api::v3::GRANT_PROJECT_USER_ROLE,
            &[
                ("project_id", &self.data.id),
                ("user_id", user_id),
                ("role_id", role_id),
            ],
        )
        .await
    }

    /// Check whether a user holds a role on this project.
    ///
    /// A bad response from the service (such as 404 for an absent
    /// assignment) answers the question negatively instead of failing the
    /// call.
    pub async fn check_user_role(
        &self,
        user_id: &str,
        role_id: &str,
    ) -> Result<bool, IdentityClientError> {
        self.check_role(
            &api::v3::HEAD_PROJECT_USER_ROLE,
            &[
                ("project_id", &self.data.id),
                ("user_id", user_id),
                ("role_id", role_id),
            ],
        )
        .await
    }

    /// Revoke a role of a user on this project.
    #[tracing::instrument(level = "info", skip(self), fields(project_id = %self.data.id))]
    pub async fn revoke_user_role(
        &self,
        user_id: &str,
        role_id: &str,
    ) -> Result<(), IdentityClientError> {
        self.assign_role(
            &api::v3::REVOKE_PROJECT_USER_ROLE,
            &[
                ("project_id", &self.data.id),
                ("user_id", user_id),
                ("role_id", role_id),
            ],
        )
        .await
    }

    /// List the roles a group holds on this project.
    pub async fn list_group_roles(&self, group_id: &str) -> Result<Vec<Role>, IdentityClientError> {
        self.list_roles(
            &api::v3::LIST_PROJECT_GROUP_ROLES,
            &[("project_id", &self.data.id), ("group_id", group_id)],
        )
        .await
    }

    /// Grant a role to a group on this project.
    #[tracing::instrument(level = "info", skip(self), fields(project_id = %self.data.id))]
    pub async fn grant_group_role(
        &self,
        group_id: &str,
        role_id: &str,
    ) -> Result<(), IdentityClientError> {
        self.assign_role(
            &api::v3::GRANT_PROJECT_GROUP_ROLE,
            &[
                ("project_id", &self.data.id),
                ("group_id", group_id),
                ("role_id", role_id),
            ],
        )
        .await
    }

    /// Check whether a group holds a role on this project.
    ///
    /// A bad response from the service answers the question negatively
    /// instead of failing the call.
    pub async fn check_group_role(
        &self,
        group_id: &str,
        role_id: &str,
    ) -> Result<bool, IdentityClientError> {
        self.check_role(
            &api::v3::HEAD_PROJECT_GROUP_ROLE,
            &[
                ("project_id", &self.data.id),
                ("group_id", group_id),
                ("role_id", role_id),
            ],
        )
        .await
    }

    /// Revoke a role of a group on this project.
    #[tracing::instrument(level = "info", skip(self), fields(project_id = %self.data.id))]
    pub async fn revoke_group_role(
        &self,
        group_id: &str,
        role_id: &str,
    ) -> Result<(), IdentityClientError> {
        self.assign_role(
            &api::v3::REVOKE_PROJECT_GROUP_ROLE,
            &[
                ("project_id", &self.data.id),
                ("group_id", group_id),
                ("role_id", role_id),
            ],
        )
        .await
    }

    async fn list_roles(
        &self,
        operation: &ApiOperation,
        params: &[(&str, &str)],
    ) -> Result<Vec<Role>, IdentityClientError> {
        let request = operation.request(params)?;
        let response = self.session.execute(request).await?;
        populate(operation, &response)
    }

    async fn assign_role(
        &self,
        operation: &ApiOperation,
        params: &[(&str, &str)],
    ) -> Result<(), IdentityClientError> {
        let request = operation.request(params)?;
        self.session.execute(request).await?;
        Ok(())
    }

    async fn check_role(
        &self,
        operation: &ApiOperation,
        params: &[(&str, &str)],
    ) -> Result<bool, IdentityClientError> {
        let request = operation.request(params)?;
        match self.session.execute(request).await {
            Ok(_) => Ok(true),
            Err(TransportError::BadResponse { .. }) => Ok(false),
            Err(error) => Err(error.into()),
        }
    }
}
