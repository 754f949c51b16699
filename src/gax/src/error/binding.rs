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

/// A failure to shape a request from a method name and its parameters.
///
/// The client library detects these problems before sending anything. None
/// of these errors are transient: repeating the call with the same
/// parameters fails in the same way.
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum BindingError {
    /// A parameter marked as required has no value.
    #[error("missing required parameter `{0}`")]
    MissingParameter(String),

    /// The resource has no method with the given name.
    #[error("unknown method `{method}` in resource `{resource}`")]
    UnknownMethod { resource: String, method: String },

    /// The service has no resource at the given path.
    #[error("unknown resource `{0}`")]
    UnknownResource(String),

    /// The method does not declare a parameter with the given name.
    #[error("`{method}` does not accept a parameter named `{name}`")]
    UnknownParameter { method: String, name: String },

    /// A list of values was supplied for a parameter that is not repeated.
    #[error("parameter `{0}` is not repeated, but received a list of values")]
    NotRepeated(String),

    /// A path parameter expanded to an empty string, or a required query
    /// parameter received an empty list.
    #[error("parameter `{0}` cannot be empty")]
    EmptyValue(String),

    /// A path parameter expanded to a `.` or `..` path segment.
    ///
    /// URL resolution removes these segments, and the request would reach
    /// a different resource.
    #[error("path parameter `{0}` cannot expand to a `.` or `..` segment")]
    InvalidValue(String),
}

impl BindingError {
    /// The name of the parameter involved in the failure, if any.
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Self::MissingParameter(n)
            | Self::NotRepeated(n)
            | Self::EmptyValue(n)
            | Self::InvalidValue(n) => Some(n),
            Self::UnknownParameter { name, .. } => Some(name),
            Self::UnknownMethod { .. } | Self::UnknownResource(_) => None,
        }
    }
}
