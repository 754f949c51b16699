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

//! Google API Client Libraries for Rust - Deployment Manager API
//!
//! This crate contains types and functions to interact with the
//! [Deployment Manager API] v1beta2. The API allows users to declaratively
//! configure, deploy and run complex solutions on the Google Cloud Platform.
//!
//! ```no_run
//! # tokio_test::block_on(async {
//! use google_api_manager_v1beta2::client::Manager;
//! use google_api_manager_v1beta2::model::Deployment;
//!
//! let client = Manager::builder().build()?;
//! let deployment = Deployment::new()
//!     .set("name", "my-deployment")?
//!     .set("templateName", "my-template")?;
//! let created = client
//!     .deployments()
//!     .insert("my-project", "us-central1", &deployment)
//!     .await?;
//! println!("{created:?}");
//! # anyhow::Result::<()>::Ok(()) });
//! ```
//!
//! [Deployment Manager API]: https://cloud.google.com/deployment-manager/

pub use gax::Result;
pub use gax::error::Error;

pub mod client;
pub mod model;
pub mod options;
pub mod resources;
mod service;

pub use service::service_root;

/// OAuth 2.0 scopes used by the Deployment Manager API.
pub mod scopes {
    /// View and manage your applications deployed on Google App Engine.
    pub const APPENGINE_ADMIN: &str = "https://www.googleapis.com/auth/appengine.admin";

    /// View and manage your data across Google Cloud Platform services.
    pub const CLOUD_PLATFORM: &str = "https://www.googleapis.com/auth/cloud-platform";

    /// View your data across Google Cloud Platform services.
    pub const CLOUD_PLATFORM_READ_ONLY: &str =
        "https://www.googleapis.com/auth/cloud-platform.read-only";

    /// View and manage your Google Compute Engine resources.
    pub const COMPUTE: &str = "https://www.googleapis.com/auth/compute";

    /// Manage your data in Google Cloud Storage.
    pub const DEVSTORAGE_READ_WRITE: &str = "https://www.googleapis.com/auth/devstorage.read_write";

    /// View and manage your Google Cloud Platform management resources and
    /// deployment status information.
    pub const NDEV_CLOUDMAN: &str = "https://www.googleapis.com/auth/ndev.cloudman";

    /// View your Google Cloud Platform management resources and deployment
    /// status information.
    pub const NDEV_CLOUDMAN_READONLY: &str = "https://www.googleapis.com/auth/ndev.cloudman.readonly";
}

pub(crate) mod info {
    pub(crate) static X_GOOG_API_CLIENT: gaxi::api_header::XGoogApiClient =
        gaxi::api_header::XGoogApiClient {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        };
}
