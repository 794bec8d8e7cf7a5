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
//! Functional tests of the project resource model against a stubbed
//! Identity service.

use eyre::Result;
use secrecy::SecretString;
use serde_json::json;
use tracing_test::traced_test;
use url::Url;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use openstack_identity_client::identity::v3::IdentityV3;
use openstack_identity_client::types::v3::project::{
    ProjectCreateBuilder, ProjectListParametersBuilder, ProjectUpdateBuilder,
};
use openstack_identity_client::{Config, IdentityClientError};

const TOKEN: &str = "gAAAAAB-test-token";

fn identity(server: &MockServer) -> Result<IdentityV3> {
    let config = Config {
        auth_url: Url::parse(&server.uri())?,
        token: SecretString::from(TOKEN),
        timeout: std::time::Duration::from_secs(5),
    };
    Ok(IdentityV3::new(&config)?)
}

fn staging_project(description: Option<&str>) -> serde_json::Value {
    let mut project = json!({
        "id": "1f9a6b11b0a741b5a8f7f7ae83982d0d",
        "name": "staging",
        "domain_id": "default",
        "enabled": true,
        "is_domain": false,
        "links": {"self": "https://identity.cloud/v3/projects/1f9a6b11b0a741b5a8f7f7ae83982d0d"}
    });
    if let Some(description) = description {
        project["description"] = json!(description);
    }
    json!({"project": project})
}

#[tokio::test]
#[traced_test]
async fn test_project_lifecycle() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/projects"))
        .and(header("x-auth-token", TOKEN))
        .and(body_json(json!({"project": {
            "name": "staging",
            "domain_id": "default",
            "enabled": true,
            "is_domain": false
        }})))
        .respond_with(ResponseTemplate::new(201).set_body_json(staging_project(None)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/v3/projects/1f9a6b11b0a741b5a8f7f7ae83982d0d"))
        .and(body_json(json!({"project": {"description": "Staging workloads"}})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(staging_project(Some("Staging workloads"))),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v3/projects/1f9a6b11b0a741b5a8f7f7ae83982d0d"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let identity = identity(&server)?;
    let mut project = identity
        .create_project(
            ProjectCreateBuilder::default()
                .name("staging")
                .domain_id("default")
                .build()?,
        )
        .await?;
    assert_eq!(project.id(), "1f9a6b11b0a741b5a8f7f7ae83982d0d");
    assert!(project.data.description.is_none());

    project
        .update(
            ProjectUpdateBuilder::default()
                .description("Staging workloads")
                .build()?,
        )
        .await?;
    assert_eq!(
        project.data.description.as_deref(),
        Some("Staging workloads")
    );

    project.delete().await?;
    Ok(())
}

#[tokio::test]
async fn test_retrieve_and_list() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/projects/1f9a6b11b0a741b5a8f7f7ae83982d0d"))
        .respond_with(ResponseTemplate::new(200).set_body_json(staging_project(None)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v3/projects"))
        .and(query_param("domain_id", "default"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"projects": [
            {"id": "p1", "name": "staging", "domain_id": "default"},
            {"id": "p2", "name": "production", "domain_id": "default"}
        ]})))
        .mount(&server)
        .await;

    let identity = identity(&server)?;
    let mut project = identity.project("1f9a6b11b0a741b5a8f7f7ae83982d0d");
    project.retrieve().await?;
    assert_eq!(project.data.name, "staging");

    let projects = identity
        .list_projects(
            &ProjectListParametersBuilder::default()
                .domain_id("default")
                .build()?,
        )
        .await?;
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[1].data.name, "production");
    Ok(())
}

#[tokio::test]
async fn test_role_assignment_cycle() -> Result<()> {
    let server = MockServer::start().await;
    let grant_path = "/v3/projects/pid/users/uid/roles/rid";

    Mock::given(method("PUT"))
        .and(path(grant_path))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    // First check before the grant answers 404, the second one 204.
    Mock::given(method("HEAD"))
        .and(path(grant_path))
        .respond_with(ResponseTemplate::new(404))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("HEAD"))
        .and(path(grant_path))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v3/projects/pid/users/uid/roles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"roles": [
            {"id": "rid", "name": "member"}
        ]})))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(grant_path))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let project = identity(&server)?.project("pid");
    assert!(!project.check_user_role("uid", "rid").await?);
    project.grant_user_role("uid", "rid").await?;
    assert!(project.check_user_role("uid", "rid").await?);
    let roles = project.list_user_roles("uid").await?;
    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0].name, "member");
    project.revoke_user_role("uid", "rid").await?;
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn test_undecodable_body_is_a_decode_error() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/projects/pid"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let mut project = identity(&server)?.project("pid");
    match project.retrieve().await {
        Err(IdentityClientError::Transport { source }) => {
            assert!(source.to_string().contains("decode"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(logs_contain("failed to decode the 200 OK response body"));
    Ok(())
}

#[tokio::test]
async fn test_bad_response_surfaces_status() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/projects/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {"code": 404, "title": "Not Found"}
        })))
        .mount(&server)
        .await;

    let mut project = identity(&server)?.project("missing");
    match project.retrieve().await {
        Err(IdentityClientError::Transport { source }) => {
            assert!(source.to_string().contains("404"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
    Ok(())
}
