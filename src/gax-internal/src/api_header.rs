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

//! Telemetry header helpers.

/// The name of the telemetry header.
pub const X_GOOG_API_CLIENT: &str = "x-goog-api-client";

/// The library type reported by discovery-based clients.
pub const GDCL: &str = "gdcl";

/// Generated libraries create one static instance of this struct and use it
/// to compute the `x-goog-api-client` header value.
#[derive(Debug, PartialEq)]
pub struct XGoogApiClient {
    pub name: &'static str,
    pub version: &'static str,
}

/// Used when the client library does not identify itself.
pub(crate) const DEFAULT_API_CLIENT: XGoogApiClient = XGoogApiClient {
    name: "google-api-gax-internal",
    version: build_info::PKG_VERSION,
};

mod build_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/build_env.rs"));

    pub(crate) const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
}

impl XGoogApiClient {
    /// Format the struct as needed for the `x-goog-api-client` header.
    pub fn header_value(&self) -> String {
        let gax_version = build_info::PKG_VERSION;
        format!(
            "gl-rust/{} gax/{gax_version} rest/{gax_version}-reqwest {GDCL}/{}",
            build_info::RUSTC_VERSION,
            self.version
        )
    }
}
