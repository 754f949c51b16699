// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The resources and methods of the Deployment Manager API.

use crate::scopes;
use gax::descriptor::{EndpointDescriptor, HttpMethod, ParameterSpec, ParameterType};
use gax::resource::ResourceBinding;
use gax::service::ServiceRoot;

const WRITE_SCOPES: [&str; 3] = [
    scopes::APPENGINE_ADMIN,
    scopes::CLOUD_PLATFORM,
    scopes::NDEV_CLOUDMAN,
];
const READ_SCOPES: [&str; 5] = [
    scopes::APPENGINE_ADMIN,
    scopes::CLOUD_PLATFORM,
    scopes::CLOUD_PLATFORM_READ_ONLY,
    scopes::NDEV_CLOUDMAN,
    scopes::NDEV_CLOUDMAN_READONLY,
];

/// Returns the definition of the Deployment Manager API.
///
/// All the typed calls in this crate dispatch through these descriptors.
pub fn service_root() -> gax::Result<ServiceRoot> {
    ServiceRoot::builder("manager", "v1beta2")
        .with_title("Deployment Manager API")
        .with_root_url("https://www.googleapis.com/")
        .with_service_path("manager/v1beta2/projects/")
        .with_scopes([
            scopes::APPENGINE_ADMIN,
            scopes::CLOUD_PLATFORM,
            scopes::CLOUD_PLATFORM_READ_ONLY,
            scopes::COMPUTE,
            scopes::DEVSTORAGE_READ_WRITE,
            scopes::NDEV_CLOUDMAN,
            scopes::NDEV_CLOUDMAN_READONLY,
        ])
        .with_resource(deployments()?)
        .with_resource(templates()?)
        .build()
}

fn deployments() -> gax::Result<ResourceBinding> {
    let query = ParameterSpec::query;
    let delete = EndpointDescriptor::new(
        "delete",
        HttpMethod::Delete,
        "{projectId}/regions/{region}/deployments/{deploymentName}",
    )?
    .with_id("manager.deployments.delete")
    .with_parameter("projectId", ParameterSpec::path())
    .with_parameter("region", ParameterSpec::path())
    .with_parameter("deploymentName", ParameterSpec::path())
    .with_scopes(WRITE_SCOPES);
    let get = EndpointDescriptor::new(
        "get",
        HttpMethod::Get,
        "{projectId}/regions/{region}/deployments/{deploymentName}",
    )?
    .with_id("manager.deployments.get")
    .with_parameter("projectId", ParameterSpec::path())
    .with_parameter("region", ParameterSpec::path())
    .with_parameter("deploymentName", ParameterSpec::path())
    .with_response("Deployment")
    .with_scopes(READ_SCOPES);
    let insert = EndpointDescriptor::new(
        "insert",
        HttpMethod::Post,
        "{projectId}/regions/{region}/deployments",
    )?
    .with_id("manager.deployments.insert")
    .with_parameter("projectId", ParameterSpec::path())
    .with_parameter("region", ParameterSpec::path())
    .with_request("Deployment")
    .with_response("Deployment")
    .with_scopes(WRITE_SCOPES);
    let list = EndpointDescriptor::new(
        "list",
        HttpMethod::Get,
        "{projectId}/regions/{region}/deployments",
    )?
    .with_id("manager.deployments.list")
    .with_parameter("projectId", ParameterSpec::path())
    .with_parameter("region", ParameterSpec::path())
    .with_parameter("pageToken", query(ParameterType::String))
    .with_parameter("maxResults", query(ParameterType::Integer))
    .with_response("DeploymentsListResponse")
    .with_scopes(READ_SCOPES);
    Ok(ResourceBinding::new("deployments")
        .with_method(delete)
        .with_method(get)
        .with_method(insert)
        .with_method(list))
}

fn templates() -> gax::Result<ResourceBinding> {
    let query = ParameterSpec::query;
    let delete = EndpointDescriptor::new(
        "delete",
        HttpMethod::Delete,
        "{projectId}/templates/{templateName}",
    )?
    .with_id("manager.templates.delete")
    .with_parameter("projectId", ParameterSpec::path())
    .with_parameter("templateName", ParameterSpec::path())
    .with_scopes(WRITE_SCOPES);
    let get = EndpointDescriptor::new(
        "get",
        HttpMethod::Get,
        "{projectId}/templates/{templateName}",
    )?
    .with_id("manager.templates.get")
    .with_parameter("projectId", ParameterSpec::path())
    .with_parameter("templateName", ParameterSpec::path())
    .with_response("Template")
    .with_scopes(READ_SCOPES);
    let insert = EndpointDescriptor::new("insert", HttpMethod::Post, "{projectId}/templates")?
        .with_id("manager.templates.insert")
        .with_parameter("projectId", ParameterSpec::path())
        .with_request("Template")
        .with_response("Template")
        .with_scopes(WRITE_SCOPES);
    let list = EndpointDescriptor::new("list", HttpMethod::Get, "{projectId}/templates")?
        .with_id("manager.templates.list")
        .with_parameter("projectId", ParameterSpec::path())
        .with_parameter("pageToken", query(ParameterType::String))
        .with_parameter("maxResults", query(ParameterType::Integer))
        .with_response("TemplatesListResponse")
        .with_scopes(READ_SCOPES);
    Ok(ResourceBinding::new("templates")
        .with_method(delete)
        .with_method(get)
        .with_method(insert)
        .with_method(list))
}
