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

//! Google REST API helpers.
//!
//! This crate contains the types shared by all the Google REST API client
//! libraries in this workspace: the static description of a service
//! (descriptors, resources, and the service root), the parameter and model
//! types, and the error taxonomy. It contains no network code, the
//! dispatcher and the default HTTP transport live in
//! `google-api-gax-internal`.
//!
//! Services are described by data. An [EndpointDescriptor] says how one
//! method maps to an HTTP request, a [ResourceBinding] groups the methods of
//! a resource, and a [ServiceRoot] holds the resources plus the global
//! configuration of the API.
//!
//! [EndpointDescriptor]: crate::descriptor::EndpointDescriptor
//! [ResourceBinding]: crate::resource::ResourceBinding
//! [ServiceRoot]: crate::service::ServiceRoot

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions that send requests.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by the client libraries.
pub mod error;

/// Describes the methods of a service and their parameters.
pub mod descriptor;

/// Parses and expands method path templates.
pub mod path_template;

/// The parameter values of a single call.
pub mod params;

/// Groups of methods, and calls prepared from them.
pub mod resource;

/// The immutable root of a service definition.
pub mod service;

/// Schema-driven models for request and response bodies.
pub mod model;

/// Per request options.
pub mod options;

/// Authentication headers.
pub mod credentials;

/// The seam between the dispatcher and the HTTP client.
pub mod transport;

/// Defines types to iterate over the pages of list methods as a Stream.
pub mod paginator;
