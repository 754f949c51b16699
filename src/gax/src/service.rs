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

//! The root of a service definition.

use crate::Result;
use crate::descriptor::EndpointDescriptor;
use crate::error::Error;
use crate::error::binding::BindingError;
use crate::error::definition::DefinitionError;
use crate::params::Params;
use crate::resource::{PendingCall, ResourceBinding};
use std::collections::BTreeSet;
use std::sync::Arc;

/// The default root URL for Google REST APIs.
pub const DEFAULT_ROOT_URL: &str = "https://www.googleapis.com/";

/// The immutable definition of a service.
///
/// A `ServiceRoot` holds the global configuration of one API (root URL,
/// service path, version, OAuth scopes) and all its resources. It is built
/// once, validated, and then shared, typically behind an [Arc].
///
/// # Example
/// ```
/// # use google_api_gax::descriptor::*;
/// # use google_api_gax::resource::ResourceBinding;
/// # use google_api_gax::service::ServiceRoot;
/// # fn sample() -> anyhow::Result<()> {
/// let service = ServiceRoot::builder("adexchangeseller", "v2.0")
///     .with_service_path("adexchangeseller/v2.0/")
///     .with_scope("https://www.googleapis.com/auth/adexchange.seller")
///     .with_resource(ResourceBinding::new("accounts").with_method(
///         EndpointDescriptor::new("get", HttpMethod::Get, "accounts/{accountId}")?
///             .with_parameter("accountId", ParameterSpec::path()),
///     ))
///     .build()?;
/// assert_eq!(service.base_url(), "https://www.googleapis.com/adexchangeseller/v2.0/");
/// # Ok(()) }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ServiceRoot {
    service_name: String,
    api_version: String,
    title: Option<String>,
    root_url: String,
    service_path: String,
    scopes: BTreeSet<String>,
    resources: Vec<ResourceBinding>,
}

impl ServiceRoot {
    pub fn builder<N, V>(service_name: N, api_version: V) -> ServiceRootBuilder
    where
        N: Into<String>,
        V: Into<String>,
    {
        ServiceRootBuilder::new(service_name, api_version)
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn root_url(&self) -> &str {
        &self.root_url
    }

    pub fn service_path(&self) -> &str {
        &self.service_path
    }

    /// The root URL followed by the service path.
    pub fn base_url(&self) -> String {
        format!("{}{}", self.root_url, self.service_path)
    }

    pub fn scopes(&self) -> &BTreeSet<String> {
        &self.scopes
    }

    pub fn resources(&self) -> impl Iterator<Item = &ResourceBinding> {
        self.resources.iter()
    }

    /// Finds a resource by its dotted path, such as `accounts.reports.saved`.
    pub fn resource(&self, path: &str) -> Option<&ResourceBinding> {
        let mut names = path.split('.');
        let first = names.next()?;
        let root = self.resources.iter().find(|r| r.name() == first)?;
        names.try_fold(root, |r, n| r.resource(n))
    }

    /// Prepares a call to `method` in the resource at `resource_path`.
    pub fn invoke(&self, resource_path: &str, method: &str, params: Params) -> Result<PendingCall> {
        let resource = self.resource(resource_path).ok_or_else(|| {
            Error::binding(BindingError::UnknownResource(resource_path.to_string()))
        })?;
        resource.invoke(method, params)
    }

    /// Every descriptor in the service, with the dotted path of its resource.
    ///
    /// Resources are visited depth first, in declaration order.
    pub fn descriptors(&self) -> Vec<(String, Arc<EndpointDescriptor>)> {
        fn visit(
            prefix: &str,
            resource: &ResourceBinding,
            out: &mut Vec<(String, Arc<EndpointDescriptor>)>,
        ) {
            let path = if prefix.is_empty() {
                resource.name().to_string()
            } else {
                format!("{prefix}.{}", resource.name())
            };
            out.extend(resource.methods().map(|d| (path.clone(), d.clone())));
            for child in resource.resources() {
                visit(&path, child, out);
            }
        }
        let mut out = Vec::new();
        for r in &self.resources {
            visit("", r, &mut out);
        }
        out
    }
}

/// Builds a [ServiceRoot].
#[derive(Clone, Debug)]
pub struct ServiceRootBuilder {
    service_name: String,
    api_version: String,
    title: Option<String>,
    root_url: String,
    service_path: String,
    scopes: BTreeSet<String>,
    resources: Vec<ResourceBinding>,
}

impl ServiceRootBuilder {
    fn new<N, V>(service_name: N, api_version: V) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        Self {
            service_name: service_name.into(),
            api_version: api_version.into(),
            title: None,
            root_url: DEFAULT_ROOT_URL.to_string(),
            service_path: String::new(),
            scopes: BTreeSet::new(),
            resources: Vec::new(),
        }
    }

    pub fn with_title<T: Into<String>>(mut self, v: T) -> Self {
        self.title = Some(v.into());
        self
    }

    /// Sets the root URL, defaults to [DEFAULT_ROOT_URL].
    pub fn with_root_url<T: Into<String>>(mut self, v: T) -> Self {
        self.root_url = v.into();
        self
    }

    pub fn with_service_path<T: Into<String>>(mut self, v: T) -> Self {
        self.service_path = v.into();
        self
    }

    pub fn with_scope<T: Into<String>>(mut self, v: T) -> Self {
        self.scopes.insert(v.into());
        self
    }

    pub fn with_scopes<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.scopes.extend(v.into_iter().map(Into::into));
        self
    }

    pub fn with_resource(mut self, v: ResourceBinding) -> Self {
        self.resources.push(v);
        self
    }

    /// Validates all the descriptors and creates the [ServiceRoot].
    pub fn build(self) -> Result<ServiceRoot> {
        self.validate().map_err(Error::definition)?;
        Ok(ServiceRoot {
            service_name: self.service_name,
            api_version: self.api_version,
            title: self.title,
            root_url: self.root_url,
            service_path: self.service_path,
            scopes: self.scopes,
            resources: self.resources,
        })
    }

    fn validate(&self) -> std::result::Result<(), DefinitionError> {
        let valid_root = (self.root_url.starts_with("https://")
            || self.root_url.starts_with("http://"))
            && self.root_url.ends_with('/');
        if !valid_root {
            return Err(DefinitionError::InvalidRootUrl(self.root_url.clone()));
        }
        for (i, r) in self.resources.iter().enumerate() {
            if self.resources[..i].iter().any(|o| o.name() == r.name()) {
                return Err(DefinitionError::Duplicate(r.name().to_string()));
            }
            r.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::descriptor::{HttpMethod, ParameterSpec, ParameterType};

    type TestResult = anyhow::Result<()>;

    static_assertions::assert_impl_all!(ServiceRoot: Clone, Send, Sync);

    fn service() -> anyhow::Result<ServiceRoot> {
        let saved = ResourceBinding::new("saved").with_method(
            EndpointDescriptor::new("list", HttpMethod::Get, "accounts/{accountId}/reports/saved")?
                .with_parameter("accountId", ParameterSpec::path())
                .with_parameter("pageToken", ParameterSpec::query(ParameterType::String)),
        );
        let reports = ResourceBinding::new("reports")
            .with_method(
                EndpointDescriptor::new("generate", HttpMethod::Get, "accounts/{accountId}/reports")?
                    .with_parameter("accountId", ParameterSpec::path()),
            )
            .with_resource(saved);
        let accounts = ResourceBinding::new("accounts")
            .with_method(
                EndpointDescriptor::new("get", HttpMethod::Get, "accounts/{accountId}")?
                    .with_parameter("accountId", ParameterSpec::path()),
            )
            .with_resource(reports);
        let service = ServiceRoot::builder("adexchangeseller", "v2.0")
            .with_title("Ad Exchange Seller API")
            .with_service_path("adexchangeseller/v2.0/")
            .with_scopes([
                "https://www.googleapis.com/auth/adexchange.seller",
                "https://www.googleapis.com/auth/adexchange.seller.readonly",
            ])
            .with_resource(accounts)
            .build()?;
        Ok(service)
    }

    #[test]
    fn accessors() -> TestResult {
        let s = service()?;
        assert_eq!(s.service_name(), "adexchangeseller");
        assert_eq!(s.api_version(), "v2.0");
        assert_eq!(s.title(), Some("Ad Exchange Seller API"));
        assert_eq!(s.root_url(), DEFAULT_ROOT_URL);
        assert_eq!(s.service_path(), "adexchangeseller/v2.0/");
        assert_eq!(
            s.base_url(),
            "https://www.googleapis.com/adexchangeseller/v2.0/"
        );
        assert_eq!(s.scopes().len(), 2);
        assert_eq!(s.resources().count(), 1);
        Ok(())
    }

    #[test]
    fn resource_paths() -> TestResult {
        let s = service()?;
        assert_eq!(s.resource("accounts").map(|r| r.name()), Some("accounts"));
        assert_eq!(
            s.resource("accounts.reports.saved").map(|r| r.name()),
            Some("saved")
        );
        assert!(s.resource("accounts.widgets").is_none());
        assert!(s.resource("").is_none());
        Ok(())
    }

    #[test]
    fn invoke() -> TestResult {
        let s = service()?;
        let call = s.invoke(
            "accounts.reports.saved",
            "list",
            Params::new().set("accountId", "12345"),
        )?;
        assert_eq!(call.descriptor().name(), "list");

        let err = s.invoke("accounts.widgets", "list", Params::new()).unwrap_err();
        assert!(
            matches!(err.binding_error(), Some(BindingError::UnknownResource(p)) if p == "accounts.widgets"),
            "{err:?}"
        );
        Ok(())
    }

    #[test]
    fn descriptors() -> TestResult {
        let s = service()?;
        let got = s
            .descriptors()
            .into_iter()
            .map(|(p, d)| format!("{p}.{}", d.name()))
            .collect::<Vec<_>>();
        assert_eq!(
            got,
            vec![
                "accounts.get",
                "accounts.reports.generate",
                "accounts.reports.saved.list"
            ]
        );
        Ok(())
    }

    #[test]
    fn build_validates_descriptors() -> TestResult {
        let bad = ResourceBinding::new("accounts").with_method(EndpointDescriptor::new(
            "get",
            HttpMethod::Get,
            "accounts/{accountId}",
        )?);
        let err = ServiceRoot::builder("test", "v1")
            .with_resource(bad)
            .build()
            .unwrap_err();
        assert!(err.is_definition(), "{err:?}");
        Ok(())
    }

    #[test]
    fn build_rejects_duplicate_resources() -> TestResult {
        let err = ServiceRoot::builder("test", "v1")
            .with_resource(ResourceBinding::new("accounts"))
            .with_resource(ResourceBinding::new("accounts"))
            .build()
            .unwrap_err();
        assert!(err.is_definition(), "{err:?}");
        Ok(())
    }

    #[test]
    fn build_rejects_bad_root() {
        let err = ServiceRoot::builder("test", "v1")
            .with_root_url("www.googleapis.com")
            .build()
            .unwrap_err();
        assert!(err.is_definition(), "{err:?}");
    }
}
