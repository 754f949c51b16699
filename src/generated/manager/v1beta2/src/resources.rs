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

//! Handles for each resource of the service.

use crate::client::Manager;
use crate::model;
use crate::options::{ListDeploymentsOptions, ListTemplatesOptions};
use gax::paginator::Paginator;
use gax::params::Params;

type Pages<T> = gax::Result<Paginator<T, gax::error::Error>>;

/// The `deployments` resource.
///
/// Deployments live in a region of a project.
#[derive(Clone, Copy, Debug)]
pub struct Deployments<'a> {
    client: &'a Manager,
}

impl<'a> Deployments<'a> {
    pub(crate) fn new(client: &'a Manager) -> Self {
        Self { client }
    }

    pub async fn get(
        &self,
        project_id: &str,
        region: &str,
        deployment_name: &str,
    ) -> gax::Result<model::Deployment> {
        let params = deployment_params(project_id, region).set("deploymentName", deployment_name);
        let call = self.client.call("deployments", "get", params)?;
        self.client.execute(call).await
    }

    /// Creates `deployment` in the given project and region.
    pub async fn insert(
        &self,
        project_id: &str,
        region: &str,
        deployment: &model::Deployment,
    ) -> gax::Result<model::Deployment> {
        let call = self
            .client
            .call("deployments", "insert", deployment_params(project_id, region))?
            .with_body(deployment)?;
        self.client.execute(call).await
    }

    pub async fn delete(
        &self,
        project_id: &str,
        region: &str,
        deployment_name: &str,
    ) -> gax::Result<()> {
        let params = deployment_params(project_id, region).set("deploymentName", deployment_name);
        let call = self.client.call("deployments", "delete", params)?;
        self.client.execute_void(call).await
    }

    /// Lists one page of the deployments in the given project and region.
    pub async fn list(
        &self,
        project_id: &str,
        region: &str,
        options: ListDeploymentsOptions,
    ) -> gax::Result<model::DeploymentsListResponse> {
        let params = deployment_params(project_id, region).merge(options.into());
        let call = self.client.call("deployments", "list", params)?;
        self.client.execute(call).await
    }

    /// Streams all the pages of deployments, starting at
    /// `options.page_token`.
    pub fn list_by_page(
        &self,
        project_id: &str,
        region: &str,
        options: ListDeploymentsOptions,
    ) -> Pages<model::DeploymentsListResponse> {
        let params = deployment_params(project_id, region).merge(options.into());
        let call = self.client.call("deployments", "list", params)?;
        Ok(self.client.paginate(call))
    }
}

fn deployment_params(project_id: &str, region: &str) -> Params {
    Params::new()
        .set("projectId", project_id)
        .set("region", region)
}

/// The `templates` resource.
#[derive(Clone, Copy, Debug)]
pub struct Templates<'a> {
    client: &'a Manager,
}

impl<'a> Templates<'a> {
    pub(crate) fn new(client: &'a Manager) -> Self {
        Self { client }
    }

    pub async fn get(&self, project_id: &str, template_name: &str) -> gax::Result<model::Template> {
        let params = Params::new()
            .set("projectId", project_id)
            .set("templateName", template_name);
        let call = self.client.call("templates", "get", params)?;
        self.client.execute(call).await
    }

    /// Creates `template` in the given project.
    pub async fn insert(
        &self,
        project_id: &str,
        template: &model::Template,
    ) -> gax::Result<model::Template> {
        let params = Params::new().set("projectId", project_id);
        let call = self
            .client
            .call("templates", "insert", params)?
            .with_body(template)?;
        self.client.execute(call).await
    }

    pub async fn delete(&self, project_id: &str, template_name: &str) -> gax::Result<()> {
        let params = Params::new()
            .set("projectId", project_id)
            .set("templateName", template_name);
        let call = self.client.call("templates", "delete", params)?;
        self.client.execute_void(call).await
    }

    pub async fn list(
        &self,
        project_id: &str,
        options: ListTemplatesOptions,
    ) -> gax::Result<model::TemplatesListResponse> {
        let params = Params::from(options).set("projectId", project_id);
        let call = self.client.call("templates", "list", params)?;
        self.client.execute(call).await
    }

    pub fn list_by_page(
        &self,
        project_id: &str,
        options: ListTemplatesOptions,
    ) -> Pages<model::TemplatesListResponse> {
        let params = Params::from(options).set("projectId", project_id);
        let call = self.client.call("templates", "list", params)?;
        Ok(self.client.paginate(call))
    }
}
