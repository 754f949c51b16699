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

//! Tracing spans for each call.
//!
//! When tracing is enabled the dispatcher wraps each request in a span named
//! `http_request`, using the OpenTelemetry semantic conventions for the
//! attribute names.

pub mod attributes;

use attributes::keys::*;
use attributes::*;
use gax::descriptor::EndpointDescriptor;
use gax::error::Error;
use gax::service::ServiceRoot;
use gax::transport::{HttpRequest, HttpResponse};
use opentelemetry_semantic_conventions::{attribute as otel_attr, trace as otel_trace};
use tracing::{Span, field};

/// Creates the span for one call.
///
/// The status code and error attributes are recorded later, by
/// [record_call_result].
pub(crate) fn create_call_span(
    service: &ServiceRoot,
    descriptor: &EndpointDescriptor,
    request: &HttpRequest,
) -> Span {
    let url = url::Url::parse(&request.url).ok();
    let url_template = format!("{}{}", service.service_path(), descriptor.path());
    let otel_name = format!("{} {}", request.method, url_template);
    tracing::info_span!(
        "http_request",
        { OTEL_NAME } = otel_name,
        { OTEL_KIND } = OTEL_KIND_CLIENT,
        { otel_trace::RPC_SYSTEM } = RPC_SYSTEM_HTTP,
        { otel_trace::RPC_SERVICE } = service.service_name(),
        { otel_trace::RPC_METHOD } = descriptor.id(),
        { otel_trace::HTTP_REQUEST_METHOD } = request.method.as_str(),
        { otel_trace::SERVER_ADDRESS } = url.as_ref().and_then(|u| u.host_str()).unwrap_or(""),
        { otel_trace::SERVER_PORT } = url
            .as_ref()
            .and_then(|u| u.port_or_known_default())
            .map(|p| p as i64)
            .unwrap_or(0),
        { otel_trace::URL_FULL } = request.url.as_str(),
        { otel_attr::URL_TEMPLATE } = url_template,
        { GCP_CLIENT_SERVICE } = service.service_name(),
        { GCP_CLIENT_API_VERSION } = service.api_version(),
        { GCP_CLIENT_LANGUAGE } = GCP_CLIENT_LANGUAGE_RUST,
        // Fields to be recorded later
        { OTEL_STATUS_CODE } = otel_status_codes::UNSET,
        { OTEL_STATUS_DESCRIPTION } = field::Empty,
        { otel_trace::HTTP_RESPONSE_STATUS_CODE } = field::Empty,
        { otel_trace::HTTP_RESPONSE_BODY_SIZE } = field::Empty,
        { otel_trace::ERROR_TYPE } = field::Empty,
    )
}

/// Records the outcome of the call in `span`.
pub(crate) fn record_call_result(span: &Span, result: Result<&HttpResponse, &Error>) {
    if span.is_disabled() {
        return;
    }
    match result {
        Ok(response) => {
            span.record(OTEL_STATUS_CODE, otel_status_codes::OK);
            span.record(
                otel_trace::HTTP_RESPONSE_STATUS_CODE,
                response.status.as_u16() as i64,
            );
            span.record(
                otel_trace::HTTP_RESPONSE_BODY_SIZE,
                response.body.len() as i64,
            );
        }
        Err(err) => {
            span.record(OTEL_STATUS_CODE, otel_status_codes::ERROR);
            if let Some(status) = err.http_status_code() {
                span.record(otel_trace::HTTP_RESPONSE_STATUS_CODE, status as i64);
            }
            span.record(
                otel_trace::ERROR_TYPE,
                ErrorType::from_gax_error(err).as_str(),
            );
            span.record(OTEL_STATUS_DESCRIPTION, err.to_string());
        }
    }
}

/// The classification of errors for the `error.type` attribute.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ErrorType {
    HttpError { code: u16, reason: Option<String> },
    ClientTimeout,
    ClientConnectionError,
    ClientRequestError,
    ClientResponseDecodeError,
    ClientAuthenticationError,
    Unknown,
}

impl ErrorType {
    pub(crate) fn from_gax_error(err: &Error) -> Self {
        if let Some(api) = err.api_error() {
            let reason = api.details.iter().find_map(|d| d.reason.clone());
            return Self::HttpError {
                code: api.status_code,
                reason,
            };
        }
        match err {
            e if e.is_timeout() => Self::ClientTimeout,
            e if e.is_io() || e.is_transport() => Self::ClientConnectionError,
            e if e.is_binding() || e.is_serialization() => Self::ClientRequestError,
            e if e.is_deserialization() => Self::ClientResponseDecodeError,
            e if e.is_authentication() => Self::ClientAuthenticationError,
            _ => Self::Unknown,
        }
    }

    pub(crate) fn as_str(&self) -> String {
        use error_type_values::*;
        match self {
            Self::HttpError {
                reason: Some(r), ..
            } => r.clone(),
            Self::HttpError { code, .. } => code.to_string(),
            Self::ClientTimeout => CLIENT_TIMEOUT.to_string(),
            Self::ClientConnectionError => CLIENT_CONNECTION_ERROR.to_string(),
            Self::ClientRequestError => CLIENT_REQUEST_ERROR.to_string(),
            Self::ClientResponseDecodeError => CLIENT_RESPONSE_DECODE_ERROR.to_string(),
            Self::ClientAuthenticationError => CLIENT_AUTHENTICATION_ERROR.to_string(),
            Self::Unknown => UNKNOWN.to_string(),
        }
    }
}
