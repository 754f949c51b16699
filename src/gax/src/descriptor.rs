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

//! Static descriptions of REST methods.
//!
//! An [EndpointDescriptor] captures everything needed to turn a method name
//! and a set of parameters into an HTTP request: the verb, the path template,
//! and how each parameter is sent. Descriptors are created once, when the
//! [ServiceRoot][crate::service::ServiceRoot] is built, and never change.

use crate::error::definition::DefinitionError;
use crate::path_template::PathTemplate;
use std::collections::BTreeMap;

/// The HTTP verbs used by Google REST APIs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HttpMethod {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            _ => Err(format!("unsupported HTTP method `{s}`")),
        }
    }
}

impl From<HttpMethod> for http::Method {
    fn from(value: HttpMethod) -> Self {
        match value {
            HttpMethod::Get => http::Method::GET,
            HttpMethod::Post => http::Method::POST,
            HttpMethod::Put => http::Method::PUT,
            HttpMethod::Patch => http::Method::PATCH,
            HttpMethod::Delete => http::Method::DELETE,
        }
    }
}

/// Where a parameter is sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    Path,
    Query,
}

/// The declared type of a parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParameterType {
    String,
    Integer,
    Number,
    Boolean,
}

/// How one parameter of a method is sent.
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterSpec {
    pub location: Location,
    pub kind: ParameterType,
    pub required: bool,
    pub repeated: bool,
    pub description: Option<String>,
}

impl ParameterSpec {
    /// A required string parameter in the path.
    pub fn path() -> Self {
        Self {
            location: Location::Path,
            kind: ParameterType::String,
            required: true,
            repeated: false,
            description: None,
        }
    }

    /// An optional parameter in the query string.
    pub fn query(kind: ParameterType) -> Self {
        Self {
            location: Location::Query,
            kind,
            required: false,
            repeated: false,
            description: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn repeated(mut self) -> Self {
        self.repeated = true;
        self
    }

    pub fn with_kind(mut self, kind: ParameterType) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }
}

/// The description of one REST method.
///
/// # Example
/// ```
/// # use google_api_gax::descriptor::*;
/// # fn sample() -> Result<(), google_api_gax::error::definition::DefinitionError> {
/// let get = EndpointDescriptor::new("get", HttpMethod::Get, "accounts/{accountId}")?
///     .with_id("adexchangeseller.accounts.get")
///     .with_parameter("accountId", ParameterSpec::path())
///     .with_response("Account");
/// get.validate()?;
/// # Ok(()) }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EndpointDescriptor {
    id: String,
    name: String,
    http_method: HttpMethod,
    path: PathTemplate,
    parameters: BTreeMap<String, ParameterSpec>,
    parameter_order: Vec<String>,
    request: Option<String>,
    response: Option<String>,
    supports_media_download: bool,
    scopes: Vec<String>,
}

impl EndpointDescriptor {
    /// Creates a descriptor, parsing `path`.
    pub fn new<N, P>(name: N, http_method: HttpMethod, path: P) -> Result<Self, DefinitionError>
    where
        N: Into<String>,
        P: Into<String>,
    {
        let name = name.into();
        Ok(Self {
            id: name.clone(),
            name,
            http_method,
            path: PathTemplate::parse(path)?,
            parameters: BTreeMap::new(),
            parameter_order: Vec::new(),
            request: None,
            response: None,
            supports_media_download: false,
            scopes: Vec::new(),
        })
    }

    /// Sets the fully qualified id, such as `manager.deployments.get`.
    pub fn with_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Declares a parameter.
    ///
    /// Required parameters are also appended to the
    /// [parameter order][EndpointDescriptor::parameter_order].
    pub fn with_parameter<T: Into<String>>(mut self, name: T, spec: ParameterSpec) -> Self {
        let name = name.into();
        if spec.required && !self.parameter_order.contains(&name) {
            self.parameter_order.push(name.clone());
        }
        self.parameters.insert(name, spec);
        self
    }

    /// Replaces the parameter order.
    pub fn with_parameter_order<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.parameter_order = v.into_iter().map(Into::into).collect();
        self
    }

    /// Names the schema of the request body.
    pub fn with_request<T: Into<String>>(mut self, v: T) -> Self {
        self.request = Some(v.into());
        self
    }

    /// Names the schema of the response body.
    pub fn with_response<T: Into<String>>(mut self, v: T) -> Self {
        self.response = Some(v.into());
        self
    }

    pub fn with_media_download(mut self, v: bool) -> Self {
        self.supports_media_download = v;
        self
    }

    pub fn with_scopes<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.scopes = v.into_iter().map(Into::into).collect();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn http_method(&self) -> HttpMethod {
        self.http_method
    }

    pub fn path(&self) -> &PathTemplate {
        &self.path
    }

    pub fn parameter(&self, name: &str) -> Option<&ParameterSpec> {
        self.parameters.get(name)
    }

    pub fn parameters(&self) -> impl Iterator<Item = (&str, &ParameterSpec)> {
        self.parameters.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The required parameters, in the order generated methods take them.
    pub fn parameter_order(&self) -> &[String] {
        &self.parameter_order
    }

    pub fn request(&self) -> Option<&str> {
        self.request.as_deref()
    }

    pub fn response(&self) -> Option<&str> {
        self.response.as_deref()
    }

    pub fn supports_media_download(&self) -> bool {
        self.supports_media_download
    }

    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    /// Checks the path template against the parameter table.
    ///
    /// Every template variable must be a declared path parameter, every path
    /// parameter must appear in the template, and path parameters must be
    /// required.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        for name in self.path.variables() {
            match self.parameters.get(name) {
                None => {
                    return Err(DefinitionError::UndeclaredVariable {
                        method: self.id.clone(),
                        name: name.to_string(),
                    });
                }
                Some(spec) if spec.location != Location::Path => {
                    return Err(DefinitionError::NotAPathParameter {
                        method: self.id.clone(),
                        name: name.to_string(),
                    });
                }
                Some(_) => {}
            }
        }
        for (name, spec) in &self.parameters {
            if spec.location != Location::Path {
                continue;
            }
            if !self.path.has_variable(name) {
                return Err(DefinitionError::UnusedPathParameter {
                    method: self.id.clone(),
                    name: name.clone(),
                });
            }
            if !spec.required {
                return Err(DefinitionError::OptionalPathParameter {
                    method: self.id.clone(),
                    name: name.clone(),
                });
            }
        }
        Ok(())
    }
}
