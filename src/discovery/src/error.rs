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

/// An error loading a discovery document.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("cannot parse the discovery document")]
    Parse(#[from] serde_json::Error),

    #[error("method `{method}` uses an unsupported HTTP method `{value}`")]
    UnsupportedHttpMethod { method: String, value: String },

    #[error("parameter `{parameter}` in method `{method}` has an unsupported location `{location}`")]
    UnsupportedLocation {
        method: String,
        parameter: String,
        location: String,
    },

    #[error("parameter `{parameter}` in method `{method}` has an unsupported type `{kind}`")]
    UnsupportedType {
        method: String,
        parameter: String,
        kind: String,
    },

    #[error("the discovery document describes an invalid service")]
    Definition(#[source] gax::error::Error),
}

impl From<gax::error::definition::DefinitionError> for Error {
    fn from(value: gax::error::definition::DefinitionError) -> Self {
        Self::Definition(value.into())
    }
}
