// Copyright 2024 Google LLC
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

//! Per request options.
//!
//! Client configuration, such as the endpoint or the credentials, applies to
//! every call made through a client. Applications sometimes need to change
//! the behavior of a single call: request a partial response, attribute the
//! call to a different quota user, or change the timeout. These settings
//! live in [RequestOptions].

use crate::params::Params;

/// Options that apply to a single call.
///
/// The `fields`, `quotaUser`, `userIp` and `prettyPrint` options are
/// [standard parameters][crate::params::STANDARD_PARAMETERS], and are sent in
/// the query string.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    user_agent: Option<String>,
    attempt_timeout: Option<std::time::Duration>,
    fields: Option<String>,
    quota_user: Option<String>,
    user_ip: Option<String>,
    pretty_print: Option<bool>,
}

impl RequestOptions {
    /// Appends a suffix to the user agent of the request.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Sets the timeout for the request.
    ///
    /// The transport enforces the timeout, this crate only carries it.
    pub fn set_attempt_timeout<T: Into<std::time::Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    pub fn attempt_timeout(&self) -> &Option<std::time::Duration> {
        &self.attempt_timeout
    }

    /// Selects the fields included in a partial response.
    pub fn set_fields<T: Into<String>>(&mut self, v: T) {
        self.fields = Some(v.into());
    }

    pub fn fields(&self) -> Option<&str> {
        self.fields.as_deref()
    }

    /// Attributes the call to a specific user for quota purposes.
    pub fn set_quota_user<T: Into<String>>(&mut self, v: T) {
        self.quota_user = Some(v.into());
    }

    pub fn quota_user(&self) -> Option<&str> {
        self.quota_user.as_deref()
    }

    pub fn set_user_ip<T: Into<String>>(&mut self, v: T) {
        self.user_ip = Some(v.into());
    }

    pub fn user_ip(&self) -> Option<&str> {
        self.user_ip.as_deref()
    }

    pub fn set_pretty_print(&mut self, v: bool) {
        self.pretty_print = Some(v);
    }

    pub fn pretty_print(&self) -> Option<bool> {
        self.pretty_print
    }

    /// The standard query parameters set by these options.
    pub fn standard_parameters(&self) -> Params {
        Params::new()
            .set_opt("fields", self.fields.clone())
            .set_opt("quotaUser", self.quota_user.clone())
            .set_opt("userIp", self.user_ip.clone())
            .set_opt("prettyPrint", self.pretty_print)
    }
}
