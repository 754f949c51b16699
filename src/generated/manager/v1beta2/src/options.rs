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

//! The optional parameters of each method.

use gax::params::Params;

/// The optional parameters of the `list` methods.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListOptions {
    /// The `nextPageToken` returned by a previous list request.
    pub page_token: Option<String>,

    /// The maximum number of results in each page, between 0 and 100. The
    /// service uses 50 if not set.
    pub max_results: Option<u32>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = Some(v.into());
        self
    }

    pub fn set_max_results(mut self, v: u32) -> Self {
        self.max_results = Some(v);
        self
    }
}

impl From<ListOptions> for Params {
    fn from(value: ListOptions) -> Self {
        Params::new()
            .set_opt("pageToken", value.page_token)
            .set_opt("maxResults", value.max_results)
    }
}

pub type ListDeploymentsOptions = ListOptions;
pub type ListTemplatesOptions = ListOptions;
