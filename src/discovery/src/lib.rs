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

//! Loads Google API discovery documents.
//!
//! Discovery documents are the machine-readable description of a Google
//! REST API. This crate converts them into the [ServiceRoot] used by the
//! dispatcher, which is useful to call APIs without a generated client, and
//! to verify generated clients against the published description.
//!
//! ```
//! # fn sample() -> anyhow::Result<()> {
//! let doc = r#"{
//!     "name": "adexchangeseller",
//!     "version": "v2.0",
//!     "servicePath": "adexchangeseller/v2.0/",
//!     "resources": {"accounts": {"methods": {"get": {
//!         "id": "adexchangeseller.accounts.get",
//!         "path": "accounts/{accountId}",
//!         "httpMethod": "GET",
//!         "parameters": {"accountId": {"type": "string", "required": true, "location": "path"}}
//!     }}}}
//! }"#;
//! let service = google_api_discovery::load(doc)?;
//! assert!(service.resource("accounts").and_then(|r| r.method("get")).is_some());
//! # Ok(()) }
//! ```
//!
//! [ServiceRoot]: gax::service::ServiceRoot

pub mod document;

mod convert;
pub use convert::service_root;

mod error;
pub use error::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Parses a discovery document.
pub fn from_str(json: &str) -> Result<document::Document> {
    Ok(serde_json::from_str(json)?)
}

/// Parses a discovery document.
pub fn from_slice(json: &[u8]) -> Result<document::Document> {
    Ok(serde_json::from_slice(json)?)
}

/// Parses a discovery document and builds the service it describes.
pub fn load(json: &str) -> Result<gax::service::ServiceRoot> {
    service_root(&from_str(json)?)
}
