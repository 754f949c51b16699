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

mod core_error;
pub use core_error::*;
mod api_error;
pub use api_error::{ApiError, ErrorDetail};
mod credentials;
pub use credentials::CredentialsError;

/// Errors detected while shaping a request, before any I/O.
///
/// These errors occur when the application calls a method that does not
/// exist, omits a required parameter, or passes a parameter the method does
/// not declare. The client fails these requests locally because it does not
/// know how to send them.
pub mod binding;

/// Errors in the static definition of a service.
///
/// A descriptor whose path template and parameter table disagree cannot be
/// used to send any request. These errors are reported when the
/// [ServiceRoot][crate::service::ServiceRoot] is built.
pub mod definition;
