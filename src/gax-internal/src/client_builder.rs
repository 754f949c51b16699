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

//! Client construction.
//!
//! Generated clients wrap a [CallDispatcher]. Each generated client type
//! defines a `builder()` function returning a [ClientBuilder] with the
//! right [ClientFactory]. Applications can override the endpoint, the
//! credentials, the default timeout, or the transport itself.
//!
//! ```no_run
//! # use google_api_gax_internal::client_builder::ClientBuilder;
//! # use gax::service::ServiceRoot;
//! # use std::sync::Arc;
//! # fn sample(service: Arc<ServiceRoot>) -> anyhow::Result<()> {
//! let dispatcher = ClientBuilder::new(service)
//!     .with_endpoint("https://private.googleapis.com/")
//!     .with_timeout(std::time::Duration::from_secs(30))
//!     .build()?;
//! # Ok(()) }
//! ```

use crate::api_header::XGoogApiClient;
use crate::dispatcher::CallDispatcher;
use crate::http::ReqwestTransport;
use crate::options::{ClientConfig, tracing_enabled};
use gax::credentials::Credentials;
use gax::service::ServiceRoot;
use gax::transport::Transport;
use std::sync::Arc;
use std::time::Duration;

pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while creating a client.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    pub fn is_endpoint(&self) -> bool {
        matches!(&self.0, ErrorKind::Endpoint(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    pub fn is_definition(&self) -> bool {
        matches!(&self.0, ErrorKind::Definition(_))
    }

    pub fn endpoint<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Endpoint(source.into()))
    }

    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }

    pub fn definition(source: gax::error::Error) -> Self {
        Self(ErrorKind::Definition(source))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("invalid endpoint")]
    Endpoint(#[source] BoxError),
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
    #[error("invalid service definition")]
    Definition(#[source] gax::error::Error),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Creates the client once the configuration is complete.
///
/// Generated libraries implement this trait to wrap the [CallDispatcher] in
/// their typed client.
pub trait ClientFactory {
    type Client;

    /// The definition of the service called by the client.
    fn service(&self) -> gax::Result<Arc<ServiceRoot>>;

    fn create(self, dispatcher: CallDispatcher) -> Self::Client;
}

/// Creates a bare [CallDispatcher] for an existing service definition.
#[derive(Clone, Debug)]
pub struct DispatcherFactory(Arc<ServiceRoot>);

impl ClientFactory for DispatcherFactory {
    type Client = CallDispatcher;

    fn service(&self) -> gax::Result<Arc<ServiceRoot>> {
        Ok(self.0.clone())
    }

    fn create(self, dispatcher: CallDispatcher) -> Self::Client {
        dispatcher
    }
}

/// Configures and creates a client.
#[derive(Clone, Debug)]
pub struct ClientBuilder<F> {
    config: ClientConfig,
    transport: Option<Transport>,
    api_client: Option<&'static XGoogApiClient>,
    factory: F,
}

impl ClientBuilder<DispatcherFactory> {
    /// A builder for a [CallDispatcher] calling `service`.
    pub fn new(service: Arc<ServiceRoot>) -> Self {
        new_builder(DispatcherFactory(service))
    }
}

/// A builder using `factory` to create the client.
pub fn new_builder<F: ClientFactory>(factory: F) -> ClientBuilder<F> {
    ClientBuilder {
        config: ClientConfig::default(),
        transport: None,
        api_client: None,
        factory,
    }
}

impl<F: ClientFactory> ClientBuilder<F> {
    /// Replaces the root URL of the service, e.g. to use a private endpoint.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    pub fn with_credentials<T: Into<Credentials>>(mut self, v: T) -> Self {
        self.config.credentials = Some(v.into());
        self
    }

    /// Sets the default timeout for each request.
    pub fn with_timeout(mut self, v: Duration) -> Self {
        self.config.timeout = Some(v);
        self
    }

    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    pub fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.config.user_agent = Some(v.into());
        self
    }

    /// Uses `v` instead of the default [ReqwestTransport].
    ///
    /// The credentials and timeout in this builder are ignored, they only
    /// configure the default transport.
    pub fn with_transport<T: Into<Transport>>(mut self, v: T) -> Self {
        self.transport = Some(v.into());
        self
    }

    /// Identifies the client library in the `x-goog-api-client` header.
    pub fn with_api_client(mut self, v: &'static XGoogApiClient) -> Self {
        self.api_client = Some(v);
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn build(self) -> Result<F::Client> {
        let service = self.factory.service().map_err(Error::definition)?;
        let transport = match self.transport {
            Some(t) => t,
            None => Transport::from(ReqwestTransport::new(&self.config)?),
        };
        let mut dispatcher =
            CallDispatcher::new(service, transport).with_tracing(tracing_enabled(&self.config));
        if let Some(endpoint) = &self.config.endpoint {
            let url = url::Url::parse(endpoint).map_err(Error::endpoint)?;
            if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
                return Err(Error::endpoint(format!(
                    "expected an http(s) URL, got `{endpoint}`"
                )));
            }
            dispatcher = dispatcher.with_endpoint(endpoint);
        }
        if let Some(user_agent) = self.config.user_agent {
            dispatcher = dispatcher.with_user_agent(user_agent);
        }
        if let Some(api_client) = self.api_client {
            dispatcher = dispatcher.with_api_client(api_client);
        }
        Ok(self.factory.create(dispatcher))
    }
}
