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

//! Google API Client Libraries for Rust - Ad Exchange Seller API
//!
//! This crate contains types and functions to interact with the
//! [Ad Exchange Seller API] v2.0. The API gives Ad Exchange sellers access to
//! their inventory and the ability to generate reports.
//!
//! ```no_run
//! # tokio_test::block_on(async {
//! use google_api_adexchangeseller_v2::client::AdExchangeSeller;
//! use google_api_adexchangeseller_v2::options::GenerateReportOptions;
//!
//! let client = AdExchangeSeller::builder().build()?;
//! let options = GenerateReportOptions::new()
//!     .set_metric(["EARNINGS", "CLICKS"])
//!     .set_dimension(["DATE"]);
//! let report = client
//!     .accounts()
//!     .reports()
//!     .generate("12345", "2024-01-01", "2024-01-31", options)
//!     .await?;
//! println!("{report:?}");
//! # anyhow::Result::<()>::Ok(()) });
//! ```
//!
//! [Ad Exchange Seller API]: https://developers.google.com/ad-exchange/seller-rest/

pub use gax::Result;
pub use gax::error::Error;

pub mod client;
pub mod model;
pub mod options;
pub mod resources;
mod service;

pub use service::service_root;

/// OAuth 2.0 scopes used by the Ad Exchange Seller API.
pub mod scopes {
    /// View and manage your Ad Exchange data.
    pub const ADEXCHANGE_SELLER: &str = "https://www.googleapis.com/auth/adexchange.seller";

    /// View your Ad Exchange data.
    pub const ADEXCHANGE_SELLER_READONLY: &str =
        "https://www.googleapis.com/auth/adexchange.seller.readonly";
}

pub(crate) mod info {
    pub(crate) static X_GOOG_API_CLIENT: gaxi::api_header::XGoogApiClient =
        gaxi::api_header::XGoogApiClient {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        };
}
