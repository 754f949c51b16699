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

use crate::document::{Document, Method, Parameter, Resource};
use crate::{Error, Result};
use gax::descriptor::{EndpointDescriptor, HttpMethod, Location, ParameterSpec, ParameterType};
use gax::resource::ResourceBinding;
use gax::service::ServiceRoot;

/// Builds the service definition described by `doc`.
///
/// Every descriptor is validated, as in [ServiceRoot::builder]. Methods
/// declared at the top-level of the document, outside any resource, are
/// ignored.
pub fn service_root(doc: &Document) -> Result<ServiceRoot> {
    let mut builder = ServiceRoot::builder(&doc.name, &doc.version)
        .with_service_path(&doc.service_path)
        .with_scopes(doc.auth.oauth2.scopes.keys());
    if let Some(title) = &doc.title {
        builder = builder.with_title(title);
    }
    if let Some(root_url) = &doc.root_url {
        builder = builder.with_root_url(root_url);
    }
    if !doc.methods.is_empty() {
        tracing::warn!(
            service = doc.name.as_str(),
            count = doc.methods.len(),
            "ignoring top-level methods"
        );
    }
    for (name, resource) in &doc.resources {
        builder = builder.with_resource(resource_binding(name, resource)?);
    }
    builder.build().map_err(Error::Definition)
}

fn resource_binding(name: &str, resource: &Resource) -> Result<ResourceBinding> {
    let binding = resource
        .methods
        .iter()
        .try_fold(ResourceBinding::new(name), |b, (name, method)| {
            descriptor(name, method).map(|d| b.with_method(d))
        })?;
    resource
        .resources
        .iter()
        .try_fold(binding, |b, (name, child)| {
            resource_binding(name, child).map(|c| b.with_resource(c))
        })
}

fn descriptor(name: &str, method: &Method) -> Result<EndpointDescriptor> {
    let id = method.id.as_deref().unwrap_or(name);
    let http_method = method
        .http_method
        .parse::<HttpMethod>()
        .map_err(|_| Error::UnsupportedHttpMethod {
            method: id.to_string(),
            value: method.http_method.clone(),
        })?;
    let mut descriptor = EndpointDescriptor::new(name, http_method, &method.path)?
        .with_id(id)
        .with_media_download(method.supports_media_download)
        .with_scopes(&method.scopes);
    for (pname, parameter) in &method.parameters {
        descriptor = descriptor.with_parameter(pname, parameter_spec(id, pname, parameter)?);
    }
    if !method.parameter_order.is_empty() {
        descriptor = descriptor.with_parameter_order(&method.parameter_order);
    }
    if let Some(request) = method.request.as_ref().and_then(|s| s.reference()) {
        descriptor = descriptor.with_request(request);
    }
    if let Some(response) = method.response.as_ref().and_then(|s| s.reference()) {
        descriptor = descriptor.with_response(response);
    }
    if let Some(description) = &method.description {
        tracing::trace!(method = id, description = description.as_str(), "loaded method");
    }
    Ok(descriptor)
}

fn parameter_spec(method: &str, name: &str, parameter: &Parameter) -> Result<ParameterSpec> {
    let kind = match parameter.schema.schema_type.as_deref() {
        None | Some("string") => ParameterType::String,
        Some("integer") => ParameterType::Integer,
        Some("number") => ParameterType::Number,
        Some("boolean") => ParameterType::Boolean,
        Some(other) => {
            return Err(Error::UnsupportedType {
                method: method.to_string(),
                parameter: name.to_string(),
                kind: other.to_string(),
            });
        }
    };
    let spec = match parameter.location.as_str() {
        "path" => ParameterSpec::path().with_kind(kind),
        "query" => ParameterSpec::query(kind),
        other => {
            return Err(Error::UnsupportedLocation {
                method: method.to_string(),
                parameter: name.to_string(),
                location: other.to_string(),
            });
        }
    };
    let spec = match (parameter.required, spec.location) {
        (true, _) => spec.required(),
        // Path parameters are always required, a document saying otherwise
        // fails validation.
        (false, Location::Path) => spec.optional(),
        (false, Location::Query) => spec,
    };
    let spec = if parameter.repeated {
        spec.repeated()
    } else {
        spec
    };
    Ok(match &parameter.schema.description {
        Some(d) => spec.with_description(d),
        None => spec,
    })
}
