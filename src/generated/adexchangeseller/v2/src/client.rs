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

use crate::resources::Accounts;
use gax::model::Message;
use gax::paginator::Paginator;
use gax::params::Params;
use gaxi::dispatcher::CallDispatcher;

/// Implements a client for the Ad Exchange Seller API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use google_api_adexchangeseller_v2::client::AdExchangeSeller;
/// let client = AdExchangeSeller::builder().build()?;
/// let account = client.accounts().get("12345").await?;
/// println!("{:?}", account.get_str("name"));
/// # anyhow::Result::<()>::Ok(()) });
/// ```
///
/// # Configuration
///
/// To configure `AdExchangeSeller` use the `with_*` methods in the type
/// returned by [builder()][AdExchangeSeller::builder]. The default
/// configuration should work for most applications. Common configuration
/// changes include
///
/// * [with_endpoint()]: by default this client uses the global default
///   endpoint (`https://www.googleapis.com/`). Applications running in
///   restricted networks may want to override this default.
/// * [with_credentials()]: by default this client sends anonymous requests.
///   Most methods in this service require OAuth 2.0 credentials with one of
///   the [scopes][crate::scopes].
///
/// # Pooling and Cloning
///
/// `AdExchangeSeller` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `AdExchangeSeller`
/// in an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
///
/// [with_endpoint()]: ClientBuilder::with_endpoint
/// [with_credentials()]: ClientBuilder::with_credentials
#[derive(Clone, Debug)]
pub struct AdExchangeSeller {
    inner: CallDispatcher,
}

impl AdExchangeSeller {
    /// Returns a builder for [AdExchangeSeller].
    ///
    /// ```no_run
    /// # use google_api_adexchangeseller_v2::client::AdExchangeSeller;
    /// let client = AdExchangeSeller::builder().build()?;
    /// # anyhow::Result::<()>::Ok(())
    /// ```
    pub fn builder() -> ClientBuilder {
        gaxi::client_builder::new_builder(client_builder::Factory)
            .with_api_client(&crate::info::X_GOOG_API_CLIENT)
    }

    /// Creates a client from an existing dispatcher.
    ///
    /// The dispatcher must use the definition returned by
    /// [service_root()][crate::service_root].
    pub fn from_dispatcher(inner: CallDispatcher) -> Self {
        Self { inner }
    }

    /// The dispatcher used by this client.
    ///
    /// Applications can use it to make calls not covered by the typed
    /// methods, for example to set per-call [RequestOptions].
    ///
    /// [RequestOptions]: gax::options::RequestOptions
    pub fn dispatcher(&self) -> &CallDispatcher {
        &self.inner
    }

    /// The `accounts` resource and its children.
    pub fn accounts(&self) -> Accounts<'_> {
        Accounts::new(self)
    }

    pub(crate) async fn execute<T: Message>(
        &self,
        resource: &str,
        method: &str,
        params: Params,
    ) -> gax::Result<T> {
        let call = self.inner.service().invoke(resource, method, params)?;
        self.inner.execute(call).await
    }

    pub(crate) async fn execute_raw(
        &self,
        resource: &str,
        method: &str,
        params: Params,
    ) -> gax::Result<bytes::Bytes> {
        let call = self.inner.service().invoke(resource, method, params)?;
        self.inner.execute_raw(call).await
    }

    pub(crate) fn paginate<T: Message>(
        &self,
        resource: &str,
        method: &str,
        params: Params,
    ) -> gax::Result<Paginator<T, gax::error::Error>> {
        let call = self.inner.service().invoke(resource, method, params)?;
        Ok(self.inner.paginate(call))
    }
}

/// A builder for [AdExchangeSeller].
///
/// ```no_run
/// # use google_api_adexchangeseller_v2::client::{AdExchangeSeller, ClientBuilder};
/// let builder: ClientBuilder = AdExchangeSeller::builder();
/// let client = builder
///     .with_endpoint("https://private.googleapis.com/")
///     .build()?;
/// # anyhow::Result::<()>::Ok(())
/// ```
pub type ClientBuilder = gaxi::client_builder::ClientBuilder<client_builder::Factory>;

pub(crate) mod client_builder {
    use super::AdExchangeSeller;
    use gax::service::ServiceRoot;
    use gaxi::dispatcher::CallDispatcher;
    use std::sync::Arc;

    #[derive(Clone, Debug)]
    pub struct Factory;

    impl gaxi::client_builder::ClientFactory for Factory {
        type Client = AdExchangeSeller;

        fn service(&self) -> gax::Result<Arc<ServiceRoot>> {
            crate::service_root().map(Arc::new)
        }

        fn create(self, dispatcher: CallDispatcher) -> Self::Client {
            AdExchangeSeller::from_dispatcher(dispatcher)
        }
    }
}
