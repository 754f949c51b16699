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

//! The default [HttpTransport], based on [reqwest].

use crate::client_builder::Error as BuilderError;
use crate::options::ClientConfig;
use gax::Result;
use gax::credentials::Credentials;
use gax::error::Error;
use gax::transport::{HttpRequest, HttpResponse, HttpTransport};
use std::future::Future;

/// Sends requests using a [reqwest::Client].
///
/// Authentication headers are requested from the credentials for each
/// request, using the scopes in the request.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    inner: reqwest::Client,
    cred: Credentials,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> crate::client_builder::Result<Self> {
        let builder = config
            .timeout
            .into_iter()
            .fold(reqwest::Client::builder(), |b, t| b.timeout(t));
        let inner = builder.build().map_err(BuilderError::transport)?;
        let cred = config.credentials.clone().unwrap_or_default();
        Ok(Self { inner, cred })
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
            scopes,
            timeout,
        } = request;
        let auth_headers = self
            .cred
            .headers(&scopes)
            .await
            .map_err(Error::authentication)?;
        let mut builder = self
            .inner
            .request(method, url)
            .headers(headers)
            .headers(auth_headers);
        builder = timeout.into_iter().fold(builder, |b, t| b.timeout(t));
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(Self::map_send_error)?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(Self::map_send_error)?;
        tracing::trace!(status = status.as_u16(), size = body.len(), "response received");
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }
}

impl HttpTransport for ReqwestTransport {
    fn execute(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse>> + Send {
        self.send(request)
    }
}
