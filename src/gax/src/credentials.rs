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

//! Authentication headers for outgoing requests.
//!
//! The dispatcher does not implement any OAuth2 flows. It asks a
//! [Credentials] object for the headers to attach to each request, passing
//! the scopes declared by the service. Applications can use one of the
//! simple providers in this module, or implement [CredentialsProvider] to
//! plug in a token source of their choice.

use crate::error::CredentialsError;
use http::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use std::future::Future;
use std::sync::Arc;

pub type Result<T> = std::result::Result<T, CredentialsError>;

/// A cloneable handle to a [CredentialsProvider].
#[derive(Clone, Debug)]
pub struct Credentials {
    // Clients that hold credentials derive `Clone`, a `Box` will not do.
    inner: Arc<dyn dynamic::CredentialsProvider>,
}

impl<T> std::convert::From<T> for Credentials
where
    T: CredentialsProvider + Send + Sync + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Returns the headers to authenticate a request with `scopes`.
    pub async fn headers(&self, scopes: &[String]) -> Result<HeaderMap> {
        self.inner.headers(scopes).await
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::from(AnonymousCredentials)
    }
}

/// Creates authentication headers.
///
/// Implementations may return different headers for different scopes, for
/// example, by requesting a token with exactly those scopes.
pub trait CredentialsProvider: std::fmt::Debug {
    fn headers(&self, scopes: &[String]) -> impl Future<Output = Result<HeaderMap>> + Send;
}

/// The dyn-compatible version of [CredentialsProvider].
pub mod dynamic {
    use super::{HeaderMap, Result};

    #[async_trait::async_trait]
    pub trait CredentialsProvider: Send + Sync + std::fmt::Debug {
        async fn headers(&self, scopes: &[String]) -> Result<HeaderMap>;
    }

    #[async_trait::async_trait]
    impl<T> CredentialsProvider for T
    where
        T: super::CredentialsProvider + Send + Sync,
    {
        async fn headers(&self, scopes: &[String]) -> Result<HeaderMap> {
            T::headers(self, scopes).await
        }
    }
}

/// Sends requests without authentication.
///
/// Useful for public data and for tests against local emulators.
#[derive(Clone, Debug, Default)]
pub struct AnonymousCredentials;

impl CredentialsProvider for AnonymousCredentials {
    async fn headers(&self, _scopes: &[String]) -> Result<HeaderMap> {
        Ok(HeaderMap::new())
    }
}

/// Sends a pre-acquired OAuth2 access token.
///
/// The token must already be valid for the scopes of the service, the
/// requested scopes are not checked.
#[derive(Clone)]
pub struct AccessTokenCredentials {
    token: String,
}

impl AccessTokenCredentials {
    pub fn new<T: Into<String>>(token: T) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl std::fmt::Debug for AccessTokenCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessTokenCredentials")
            .field("token", &"[censored]")
            .finish()
    }
}

impl CredentialsProvider for AccessTokenCredentials {
    async fn headers(&self, _scopes: &[String]) -> Result<HeaderMap> {
        let value = sensitive_value(&format!("Bearer {}", self.token))?;
        Ok(HeaderMap::from_iter([(AUTHORIZATION, value)]))
    }
}

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Sends an API key, also known as a developer key.
///
/// API keys identify the calling project, they do not carry any user
/// identity. Only some methods accept them.
#[derive(Clone)]
pub struct ApiKeyCredentials {
    key: String,
}

impl ApiKeyCredentials {
    pub fn new<T: Into<String>>(key: T) -> Self {
        Self { key: key.into() }
    }
}

impl std::fmt::Debug for ApiKeyCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyCredentials")
            .field("key", &"[censored]")
            .finish()
    }
}

impl CredentialsProvider for ApiKeyCredentials {
    async fn headers(&self, _scopes: &[String]) -> Result<HeaderMap> {
        let value = sensitive_value(&self.key)?;
        Ok(HeaderMap::from_iter([(
            HeaderName::from_static(API_KEY_HEADER),
            value,
        )]))
    }
}

fn sensitive_value(v: &str) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(v).map_err(|e| CredentialsError::new(false, e))?;
    value.set_sensitive(true);
    Ok(value)
}
