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

//! Implementation details for Google REST API clients.
//!
//! The types in this crate are used by the generated client libraries. They
//! are not intended for direct use by applications, and are subject to
//! change without notice.

/// Helpers for the `x-goog-api-client` header.
pub mod api_header;

/// Client construction.
pub mod client_builder;

/// Sends calls and decodes their responses.
pub mod dispatcher;

/// The default HTTP transport, based on reqwest.
pub mod http;

/// Tracing spans for each call.
pub mod observability;

/// The client configuration.
pub mod options;
