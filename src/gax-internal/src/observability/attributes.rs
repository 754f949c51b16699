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

// OpenTelemetry Semantic Convention Keys
// See https://opentelemetry.io/docs/specs/semconv/http/http-spans/

pub mod keys {
    /// Span Kind for OpenTelemetry interop.
    ///
    /// Always "Client" for a span representing an outbound HTTP request.
    pub const OTEL_KIND: &str = "otel.kind";
    /// Span Name for OpenTelemetry interop.
    ///
    /// Uses "{http.request.method} {url.template}".
    pub const OTEL_NAME: &str = "otel.name";
    /// Span Status Code for OpenTelemetry interop.
    ///
    /// Must be one of "UNSET", "OK", or "ERROR".
    pub const OTEL_STATUS_CODE: &str = "otel.status_code";
    pub const OTEL_STATUS_DESCRIPTION: &str = "otel.status_description";

    /// The name of the API.
    ///
    /// Examples: adexchangeseller, manager
    pub const GCP_CLIENT_SERVICE: &str = "gcp.client.service";
    /// The API version.
    ///
    /// Examples: v2.0, v1beta2
    pub const GCP_CLIENT_API_VERSION: &str = "gcp.client.api_version";
    /// Always "rust".
    pub const GCP_CLIENT_LANGUAGE: &str = "gcp.client.language";
}

/// Value for [keys::OTEL_KIND].
pub const OTEL_KIND_CLIENT: &str = "Client";
/// Value for `rpc.system`.
pub const RPC_SYSTEM_HTTP: &str = "http";
/// Value for [keys::GCP_CLIENT_LANGUAGE].
pub const GCP_CLIENT_LANGUAGE_RUST: &str = "rust";

/// Values for the OpenTelemetry `error.type` attribute.
/// See [https://opentelemetry.io/docs/specs/semconv/attributes-registry/error/]
pub mod error_type_values {
    /// A client-configured timeout was reached.
    pub const CLIENT_TIMEOUT: &str = "CLIENT_TIMEOUT";
    /// Failure to send the request or receive the response.
    pub const CLIENT_CONNECTION_ERROR: &str = "CLIENT_CONNECTION_ERROR";
    /// The call was rejected before sending a request.
    pub const CLIENT_REQUEST_ERROR: &str = "CLIENT_REQUEST_ERROR";
    /// Client-side error decoding the response body.
    pub const CLIENT_RESPONSE_DECODE_ERROR: &str = "CLIENT_RESPONSE_DECODE_ERROR";
    /// Error during credential acquisition or application.
    pub const CLIENT_AUTHENTICATION_ERROR: &str = "CLIENT_AUTHENTICATION_ERROR";
    /// Unknown error type.
    pub const UNKNOWN: &str = "UNKNOWN";
}

/// Values for the OpenTelemetry `otel.status_code` attribute.
pub mod otel_status_codes {
    pub const OK: &str = "OK";
    pub const ERROR: &str = "ERROR";
    /// The default status.
    pub const UNSET: &str = "UNSET";
}
