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

/// A service definition that violates the descriptor invariants.
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum DefinitionError {
    /// The path template could not be parsed.
    #[error("invalid path template `{template}`: {problem}")]
    InvalidTemplate { template: String, problem: String },

    /// A template variable has no parameter spec.
    #[error("`{method}` path references `{name}`, which is not a declared parameter")]
    UndeclaredVariable { method: String, name: String },

    /// A template variable is declared, but not as a path parameter.
    #[error("`{method}` path references `{name}`, which is not a path parameter")]
    NotAPathParameter { method: String, name: String },

    /// A path parameter does not appear in the path template.
    #[error("`{method}` declares path parameter `{name}`, which its path does not use")]
    UnusedPathParameter { method: String, name: String },

    /// A path parameter is optional.
    #[error("`{method}` declares path parameter `{name}` as optional")]
    OptionalPathParameter { method: String, name: String },

    /// Two methods, or two child resources, share a name.
    #[error("duplicate name `{0}`")]
    Duplicate(String),

    /// The root URL is not a valid absolute URL.
    #[error("invalid root URL `{0}`")]
    InvalidRootUrl(String),
}
