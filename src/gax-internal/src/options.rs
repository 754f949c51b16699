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

use gax::credentials::Credentials;
use std::time::Duration;

/// The configuration shared by [ClientBuilder][crate::client_builder::ClientBuilder]
/// and [ReqwestTransport][crate::http::ReqwestTransport].
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    /// Overrides the root URL of the service.
    pub endpoint: Option<String>,
    pub credentials: Option<Credentials>,
    /// The timeout for each request, unless overridden in the request options.
    pub timeout: Option<Duration>,
    pub tracing: bool,
    pub user_agent: Option<String>,
}

pub(crate) const LOGGING_VAR: &str = "GOOGLE_API_RUST_LOGGING";

// Returns true if the environment or client configuration enables tracing.
pub fn tracing_enabled(config: &ClientConfig) -> bool {
    if config.tracing {
        return true;
    }
    std::env::var(LOGGING_VAR)
        .map(|v| v == "true")
        .unwrap_or(false)
}
