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

//! The seam between the dispatcher and the HTTP client.
//!
//! The dispatcher builds an [HttpRequest] and hands it to a [Transport]. The
//! transport is responsible for authentication, TLS, connection management,
//! and timeouts. It returns the response for any HTTP status, the dispatcher
//! decides which statuses are errors.

use crate::Result;
use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use std::future::Future;
use std::sync::Arc;

/// A fully shaped HTTP request.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    /// The absolute URL, including the query string.
    pub url: String,
    pub headers: HeaderMap,
    /// The JSON-encoded body, if any.
    pub body: Option<Bytes>,
    /// The OAuth2 scopes declared by the service.
    pub scopes: Vec<String>,
    /// The timeout for this request, overriding any transport default.
    pub timeout: Option<std::time::Duration>,
}

impl HttpRequest {
    pub fn new<T: Into<String>>(method: Method, url: T) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
            body: None,
            scopes: Vec::new(),
            timeout: None,
        }
    }
}

/// The response returned by a [Transport].
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new<T: Into<Bytes>>(status: StatusCode, body: T) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// A `200 OK` response with a JSON body.
    pub fn json(body: &serde_json::Value) -> Self {
        let mut response = Self::new(StatusCode::OK, body.to_string());
        response.headers.insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        );
        response
    }
}

/// Sends HTTP requests.
///
/// Implementations return `Ok` for any HTTP status. Errors are reserved for
/// failures to send the request or receive the response, and should use
/// [Error::io][crate::error::Error::io], [Error::timeout][crate::error::Error::timeout]
/// or [Error::authentication][crate::error::Error::authentication].
pub trait HttpTransport: std::fmt::Debug {
    fn execute(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse>> + Send;
}

/// The dyn-compatible version of [HttpTransport].
pub mod dynamic {
    use super::{HttpRequest, HttpResponse};
    use crate::Result;

    #[async_trait::async_trait]
    pub trait HttpTransport: Send + Sync + std::fmt::Debug {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
    }

    #[async_trait::async_trait]
    impl<T> HttpTransport for T
    where
        T: super::HttpTransport + Send + Sync,
    {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
            T::execute(self, request).await
        }
    }
}

/// A cloneable handle to an [HttpTransport].
#[derive(Clone, Debug)]
pub struct Transport {
    inner: Arc<dyn dynamic::HttpTransport>,
}

impl<T> std::convert::From<T> for Transport
where
    T: HttpTransport + Send + Sync + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Transport {
    pub async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.inner.execute(request).await
    }
}
