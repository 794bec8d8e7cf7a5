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

//! # OpenStack Identity client
//!
//! A client SDK fragment for the OpenStack Identity (Keystone) API. It maps
//! REST resources to resource models: the Identity v2 service catalog
//! (catalog entries and endpoints) and the Identity v3 project with its
//! CRUD/list operations and project-scoped role assignment calls.
//!
//! Every HTTP call is described by a declarative [`api::ApiOperation`]
//! (method, path template, JSON resource key) and executed through a shared
//! [`transport::RestClient`] executor; models populate their fields from the
//! keyed JSON response.
//!
//! The client does not negotiate tokens: it is configured with a
//! pre-obtained token (see [`Config`]) and sends it as the `x-auth-token`
//! header on every request.
//!
//! ```no_run
//! use openstack_identity_client::Config;
//! use openstack_identity_client::identity::v3::IdentityV3;
//! use openstack_identity_client::types::v3::project::ProjectCreateBuilder;
//!
//! # async fn doc() -> Result<(), openstack_identity_client::IdentityClientError> {
//! let identity = IdentityV3::new(&Config::from_env()?)?;
//! let project = identity
//!     .create_project(
//!         ProjectCreateBuilder::default()
//!             .name("staging")
//!             .domain_id("default")
//!             .build()?,
//!     )
//!     .await?;
//! let granted = project.check_user_role("user-id", "role-id").await?;
//! # let _ = granted;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod identity;
mod resource;
pub mod transport;

pub use openstack_identity_api_types as types;

pub use config::Config;
pub use error::IdentityClientError;
pub use transport::Session;
