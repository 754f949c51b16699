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

use crate::resources::{Deployments, Templates};
use gax::model::Message;
use gax::paginator::Paginator;
use gax::params::Params;
use gax::resource::PendingCall;
use gaxi::dispatcher::CallDispatcher;

/// Implements a client for the Deployment Manager API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use google_api_manager_v1beta2::client::Manager;
/// # use google_api_manager_v1beta2::options::ListDeploymentsOptions;
/// use futures::TryStreamExt;
/// let client = Manager::builder().build()?;
/// let mut pages = client
///     .deployments()
///     .list_by_page("my-project", "us-central1", ListDeploymentsOptions::new())?;
/// while let Some(page) = pages.try_next().await? {
///     println!("{page:?}");
/// }
/// # anyhow::Result::<()>::Ok(()) });
/// ```
///
/// # Configuration
///
/// To configure `Manager` use the `with_*` methods in the type returned by
/// [builder()][Manager::builder]. The default configuration should work for
/// most applications.
///
/// # Pooling and Cloning
///
/// `Manager` holds a connection pool internally, it is advised to create one
/// and then reuse it. You do not need to wrap `Manager` in an
/// [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct Manager {
    inner: CallDispatcher,
}

impl Manager {
    /// Returns a builder for [Manager].
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

    pub fn dispatcher(&self) -> &CallDispatcher {
        &self.inner
    }

    /// The `deployments` resource.
    pub fn deployments(&self) -> Deployments<'_> {
        Deployments::new(self)
    }

    /// The `templates` resource.
    pub fn templates(&self) -> Templates<'_> {
        Templates::new(self)
    }

    pub(crate) fn call(
        &self,
        resource: &str,
        method: &str,
        params: Params,
    ) -> gax::Result<PendingCall> {
        self.inner.service().invoke(resource, method, params)
    }

    pub(crate) async fn execute<T: Message>(&self, call: PendingCall) -> gax::Result<T> {
        self.inner.execute(call).await
    }

    pub(crate) async fn execute_void(&self, call: PendingCall) -> gax::Result<()> {
        self.inner.execute_void(call).await
    }

    pub(crate) fn paginate<T: Message>(
        &self,
        call: PendingCall,
    ) -> Paginator<T, gax::error::Error> {
        self.inner.paginate(call)
    }
}

/// A builder for [Manager].
pub type ClientBuilder = gaxi::client_builder::ClientBuilder<client_builder::Factory>;

pub(crate) mod client_builder {
    use super::Manager;
    use gax::service::ServiceRoot;
    use gaxi::dispatcher::CallDispatcher;
    use std::sync::Arc;

    #[derive(Clone, Debug)]
    pub struct Factory;

    impl gaxi::client_builder::ClientFactory for Factory {
        type Client = Manager;

        fn service(&self) -> gax::Result<Arc<ServiceRoot>> {
            crate::service_root().map(Arc::new)
        }

        fn create(self, dispatcher: CallDispatcher) -> Self::Client {
            Manager::from_dispatcher(dispatcher)
        }
    }
}
