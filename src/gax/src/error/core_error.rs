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

use super::ApiError;
use super::CredentialsError;
use super::binding::BindingError;
use super::definition::DefinitionError;
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all client libraries built on this crate.
///
/// The client libraries report errors from multiple sources. The request may
/// be rejected locally because a required parameter is missing, the service
/// may return a non-2xx response, the response may not match the expected
/// model, or the transport may fail to deliver the request at all.
///
/// Applications can use the `is_*` predicates to classify the error, and the
/// accessors to examine the details.
///
/// # Example
/// ```
/// use google_api_gax::error::Error;
/// match example_function() {
///     Err(e) if e.is_missing_parameter() => {
///         println!("fix the request: {e}");
///     }
///     Err(e) => {
///         if let Some(api) = e.api_error() {
///             println!("the service rejected the call with {}", api.status_code);
///         }
///     }
///     Ok(_) => { println!("success, how boring"); }
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # use google_api_gax::error::ApiError;
///     # Err(Error::api(ApiError::new(404, "NOT FOUND"), http::HeaderMap::new(), bytes::Bytes::new()))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error reported by the service in a non-2xx response.
    pub fn api(error: ApiError, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let details = ApiDetails {
            error,
            headers,
            payload,
        };
        Self {
            kind: ErrorKind::Api(Box::new(details)),
            source: None,
        }
    }

    /// The service returned a non-2xx response.
    pub fn is_api(&self) -> bool {
        matches!(self.kind, ErrorKind::Api(_))
    }

    /// The error reported by the service, if any.
    pub fn api_error(&self) -> Option<&ApiError> {
        match &self.kind {
            ErrorKind::Api(d) => Some(&d.error),
            _ => None,
        }
    }

    /// The HTTP status code, if the service returned a response.
    pub fn http_status_code(&self) -> Option<u16> {
        self.api_error().map(|e| e.status_code)
    }

    /// The HTTP headers, if the service returned a response.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        match &self.kind {
            ErrorKind::Api(d) => Some(&d.headers),
            ErrorKind::Transport(Some(h)) => Some(h),
            _ => None,
        }
    }

    /// The raw response body, if the service returned a response.
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        match &self.kind {
            ErrorKind::Api(d) => Some(&d.payload),
            _ => None,
        }
    }

    /// Creates an error for a request that could not be shaped.
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Binding,
            source: Some(source.into()),
        }
    }

    /// The request was rejected locally, no I/O was attempted.
    pub fn is_binding(&self) -> bool {
        matches!(self.kind, ErrorKind::Binding)
    }

    /// The details of a [binding][Error::is_binding] error.
    pub fn binding_error(&self) -> Option<&BindingError> {
        if !self.is_binding() {
            return None;
        }
        self.source
            .as_ref()
            .and_then(|e| e.downcast_ref::<BindingError>())
    }

    /// A required parameter was missing.
    pub fn is_missing_parameter(&self) -> bool {
        matches!(
            self.binding_error(),
            Some(BindingError::MissingParameter(_))
        )
    }

    /// The method name is not known to the resource.
    pub fn is_unknown_method(&self) -> bool {
        matches!(
            self.binding_error(),
            Some(BindingError::UnknownMethod { .. })
        )
    }

    /// Creates an error for an invalid service definition.
    pub fn definition(source: DefinitionError) -> Self {
        Self {
            kind: ErrorKind::Definition,
            source: Some(source.into()),
        }
    }

    /// The service definition is invalid.
    pub fn is_definition(&self) -> bool {
        matches!(self.kind, ErrorKind::Definition)
    }

    /// Creates an error for a response that does not match its model.
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The response could not be deserialized.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Creates an error for a request body that could not be encoded.
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request could not be serialized.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Creates an error for a failure to create the auth headers.
    pub fn authentication(source: CredentialsError) -> Self {
        Self {
            kind: ErrorKind::Authentication,
            source: Some(source.into()),
        }
    }

    /// The request could not be authenticated.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    /// Creates an error for a request that exceeded its deadline.
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            source: Some(source.into()),
        }
    }

    /// The request exceeded its deadline.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Creates an error for a request that could not be delivered.
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Transport(None),
            source: Some(source.into()),
        }
    }

    /// Creates a transport error that carries response headers.
    pub fn transport<T: Into<BoxError>>(headers: HeaderMap, source: T) -> Self {
        Self {
            kind: ErrorKind::Transport(Some(headers)),
            source: Some(source.into()),
        }
    }

    /// The transport failed to send the request or receive the response.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, ErrorKind::Transport(_))
    }

    /// A transport failure without any response metadata.
    pub fn is_io(&self) -> bool {
        matches!(self.kind, ErrorKind::Transport(None))
    }

    #[doc(hidden)]
    pub fn other<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Other,
            source: Some(source.into()),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Binding, Some(e)) => {
                write!(f, "cannot build the request, {e}")
            }
            (ErrorKind::Definition, Some(e)) => {
                write!(f, "invalid service definition, {e}")
            }
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::Authentication, Some(e)) => {
                write!(f, "cannot create the authentication headers {e}")
            }
            (ErrorKind::Timeout, Some(e)) => {
                write!(f, "the request exceeded the request deadline {e}")
            }
            (ErrorKind::Transport(_), Some(e)) => {
                write!(f, "the transport reports an error: {e}")
            }
            (ErrorKind::Api(d), _) => {
                write!(
                    f,
                    "the service reports an error with code {} described as: {}",
                    d.error.status_code, d.error.message
                )
            }
            (ErrorKind::Other, Some(e)) => {
                write!(f, "an unclassified problem making a request: {e}")
            }
            (_, None) => write!(f, "an unclassified problem making a request"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error))
    }
}

impl From<BindingError> for Error {
    fn from(value: BindingError) -> Self {
        Self::binding(value)
    }
}

impl From<DefinitionError> for Error {
    fn from(value: DefinitionError) -> Self {
        Self::definition(value)
    }
}

#[derive(Debug)]
enum ErrorKind {
    Binding,
    Definition,
    Serialization,
    Deserialization,
    Authentication,
    Timeout,
    Transport(Option<HeaderMap>),
    Api(Box<ApiDetails>),
    Other,
}

#[derive(Debug)]
struct ApiDetails {
    error: ApiError,
    headers: HeaderMap,
    payload: bytes::Bytes,
}
