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

//! Groups of related methods.
//!
//! Google REST APIs organize their methods in resources, such as `accounts`
//! or `deployments`. Resources may contain other resources, for example
//! `accounts.reports.saved`. A [ResourceBinding] maps method names to their
//! [EndpointDescriptor], and turns a method name plus a parameter map into a
//! [PendingCall].

use crate::Result;
use crate::descriptor::EndpointDescriptor;
use crate::error::Error;
use crate::error::binding::BindingError;
use crate::error::definition::DefinitionError;
use crate::options::RequestOptions;
use crate::params::{Params, is_standard};
use std::sync::Arc;

/// A named group of methods and child resources.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceBinding {
    name: String,
    methods: Vec<Arc<EndpointDescriptor>>,
    resources: Vec<ResourceBinding>,
}

impl ResourceBinding {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Adds a method.
    pub fn with_method(mut self, descriptor: EndpointDescriptor) -> Self {
        self.methods.push(Arc::new(descriptor));
        self
    }

    /// Adds a child resource.
    pub fn with_resource(mut self, resource: ResourceBinding) -> Self {
        self.resources.push(resource);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Finds the descriptor for `name`.
    pub fn method(&self, name: &str) -> Option<&Arc<EndpointDescriptor>> {
        self.methods.iter().find(|d| d.name() == name)
    }

    pub fn methods(&self) -> impl Iterator<Item = &Arc<EndpointDescriptor>> {
        self.methods.iter()
    }

    /// Finds the child resource named `name`.
    pub fn resource(&self, name: &str) -> Option<&ResourceBinding> {
        self.resources.iter().find(|r| r.name == name)
    }

    pub fn resources(&self) -> impl Iterator<Item = &ResourceBinding> {
        self.resources.iter()
    }

    /// Validates every descriptor in this resource and its children.
    pub fn validate(&self) -> std::result::Result<(), DefinitionError> {
        for (i, d) in self.methods.iter().enumerate() {
            if self.methods[..i].iter().any(|o| o.name() == d.name()) {
                return Err(DefinitionError::Duplicate(format!(
                    "{}.{}",
                    self.name,
                    d.name()
                )));
            }
            d.validate()?;
        }
        for (i, r) in self.resources.iter().enumerate() {
            if self.resources[..i].iter().any(|o| o.name == r.name) {
                return Err(DefinitionError::Duplicate(format!(
                    "{}.{}",
                    self.name, r.name
                )));
            }
            r.validate()?;
        }
        Ok(())
    }

    /// Prepares a call to the method named `method`.
    ///
    /// Fails with [BindingError::UnknownMethod] if the resource has no such
    /// method, and with [BindingError::UnknownParameter] if `params` contains
    /// a name the method does not declare. Standard parameters, such as
    /// `fields` or `quotaUser`, are always accepted.
    ///
    /// No I/O is performed. Missing required parameters are detected when
    /// the call is dispatched.
    pub fn invoke(&self, method: &str, params: Params) -> Result<PendingCall> {
        let descriptor = self.method(method).ok_or_else(|| {
            Error::binding(BindingError::UnknownMethod {
                resource: self.name.clone(),
                method: method.to_string(),
            })
        })?;
        let unknown = params
            .iter()
            .map(|(name, _)| name)
            .find(|name| descriptor.parameter(name).is_none() && !is_standard(name));
        if let Some(name) = unknown {
            tracing::debug!(method = descriptor.id(), parameter = name, "unknown parameter");
            return Err(Error::binding(BindingError::UnknownParameter {
                method: descriptor.id().to_string(),
                name: name.to_string(),
            }));
        }
        Ok(PendingCall::new(descriptor.clone(), params))
    }
}

/// A fully shaped, not yet dispatched, call.
///
/// Holds the descriptor of the method, its parameters, and the optional
/// request body. Creating a `PendingCall` performs no I/O.
#[derive(Clone, Debug)]
pub struct PendingCall {
    descriptor: Arc<EndpointDescriptor>,
    params: Params,
    body: Option<serde_json::Value>,
    options: RequestOptions,
}

impl PendingCall {
    pub fn new(descriptor: Arc<EndpointDescriptor>, params: Params) -> Self {
        Self {
            descriptor,
            params,
            body: None,
            options: RequestOptions::default(),
        }
    }

    /// Attaches a request body, serialized as JSON.
    pub fn with_body<T: serde::Serialize>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_value(body).map_err(Error::ser)?);
        Ok(self)
    }

    /// Attaches a request body that is already in JSON form.
    pub fn with_json_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    pub fn descriptor(&self) -> &Arc<EndpointDescriptor> {
        &self.descriptor
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }

    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }

    pub fn options(&self) -> &RequestOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::descriptor::{HttpMethod, ParameterSpec, ParameterType};
    use serde_json::json;

    type TestResult = anyhow::Result<()>;

    fn accounts() -> anyhow::Result<ResourceBinding> {
        let get = EndpointDescriptor::new("get", HttpMethod::Get, "accounts/{accountId}")?
            .with_parameter("accountId", ParameterSpec::path());
        let list = EndpointDescriptor::new("list", HttpMethod::Get, "accounts")?
            .with_parameter("pageToken", ParameterSpec::query(ParameterType::String))
            .with_parameter("maxResults", ParameterSpec::query(ParameterType::Integer));
        let adclients = ResourceBinding::new("adclients").with_method(
            EndpointDescriptor::new("list", HttpMethod::Get, "accounts/{accountId}/adclients")?
                .with_parameter("accountId", ParameterSpec::path()),
        );
        Ok(ResourceBinding::new("accounts")
            .with_method(get)
            .with_method(list)
            .with_resource(adclients))
    }

    #[test]
    fn lookup() -> TestResult {
        let r = accounts()?;
        r.validate()?;
        assert_eq!(r.name(), "accounts");
        assert!(r.method("get").is_some());
        assert!(r.method("delete").is_none());
        assert_eq!(r.methods().count(), 2);
        assert!(r.resource("adclients").is_some());
        assert_eq!(r.resources().count(), 1);
        Ok(())
    }

    #[test]
    fn invoke() -> TestResult {
        let r = accounts()?;
        let call = r.invoke("get", Params::new().set("accountId", "12345"))?;
        assert_eq!(call.descriptor().name(), "get");
        assert_eq!(call.params().len(), 1);
        assert!(call.body().is_none());
        Ok(())
    }

    #[test]
    fn invoke_unknown_method() -> TestResult {
        let r = accounts()?;
        let err = r.invoke("patch", Params::new()).unwrap_err();
        assert!(err.is_unknown_method(), "{err:?}");
        Ok(())
    }

    #[test]
    fn invoke_unknown_parameter() -> TestResult {
        let r = accounts()?;
        let err = r
            .invoke("list", Params::new().set("pageSize", 10))
            .unwrap_err();
        assert!(
            matches!(err.binding_error(), Some(BindingError::UnknownParameter { name, .. }) if name == "pageSize"),
            "{err:?}"
        );
        Ok(())
    }

    #[test]
    fn invoke_standard_parameter() -> TestResult {
        let r = accounts()?;
        let call = r.invoke("list", Params::new().set("fields", "items/id"))?;
        assert!(call.params().contains("fields"));
        Ok(())
    }

    #[test]
    fn invoke_defers_missing_parameters() -> TestResult {
        let r = accounts()?;
        let call = r.invoke("get", Params::new());
        assert!(call.is_ok(), "{call:?}");
        Ok(())
    }

    #[test]
    fn body() -> TestResult {
        let r = accounts()?;
        let call = r
            .invoke("list", Params::new())?
            .with_body(&json!({"name": "test-only"}))?;
        assert_eq!(call.body(), Some(&json!({"name": "test-only"})));
        let call = call.with_json_body(json!({}));
        assert_eq!(call.body(), Some(&json!({})));
        Ok(())
    }

    #[test]
    fn duplicates() -> TestResult {
        let r = accounts()?.with_method(EndpointDescriptor::new(
            "get",
            HttpMethod::Get,
            "accounts",
        )?);
        let got = r.validate();
        assert!(
            matches!(&got, Err(DefinitionError::Duplicate(n)) if n == "accounts.get"),
            "{got:?}"
        );

        let r = accounts()?.with_resource(ResourceBinding::new("adclients"));
        let got = r.validate();
        assert!(
            matches!(&got, Err(DefinitionError::Duplicate(n)) if n == "accounts.adclients"),
            "{got:?}"
        );
        Ok(())
    }
}
