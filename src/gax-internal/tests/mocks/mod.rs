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

//! Shared fixtures for the integration tests.

use gax::declare_message;
use gax::descriptor::{EndpointDescriptor, HttpMethod, ParameterSpec, ParameterType};
use gax::model::{Field, FieldType, Schema};
use gax::resource::ResourceBinding;
use gax::service::ServiceRoot;
use gax::transport::{HttpRequest, HttpResponse, HttpTransport};
use std::sync::Arc;

mockall::mock! {
    #[derive(Debug)]
    pub HttpTransport {}

    impl HttpTransport for HttpTransport {
        async fn execute(&self, request: HttpRequest) -> gax::Result<HttpResponse>;
    }
}

pub static ACCOUNT: Schema = Schema::new(
    "Account",
    &[Field::string("id"), Field::string("kind"), Field::string("name")],
);

pub static ACCOUNTS: Schema = Schema::new(
    "Accounts",
    &[
        Field::string("etag"),
        Field::array("items", FieldType::Object(&ACCOUNT)),
        Field::string("kind"),
        Field::string("nextPageToken"),
    ],
)
.with_collection_key("items");

pub static REPORT: Schema = Schema::new(
    "Report",
    &[
        Field::string("kind"),
        Field::array("rows", FieldType::Any),
        Field::string("totalMatchedRows"),
    ],
);

declare_message! {
    pub struct Account => ACCOUNT;
}

declare_message! {
    pub struct Accounts => ACCOUNTS;
}

declare_message! {
    pub struct Report => REPORT;
}

pub fn service() -> anyhow::Result<Arc<ServiceRoot>> {
    let query = ParameterSpec::query;
    let get = EndpointDescriptor::new("get", HttpMethod::Get, "accounts/{accountId}")?
        .with_id("adexchangeseller.accounts.get")
        .with_parameter("accountId", ParameterSpec::path())
        .with_response("Account");
    let list = EndpointDescriptor::new("list", HttpMethod::Get, "accounts")?
        .with_id("adexchangeseller.accounts.list")
        .with_parameter("maxResults", query(ParameterType::Integer))
        .with_parameter("pageToken", query(ParameterType::String))
        .with_response("Accounts");
    let generate =
        EndpointDescriptor::new("generate", HttpMethod::Get, "accounts/{accountId}/reports")?
            .with_id("adexchangeseller.accounts.reports.generate")
            .with_parameter("accountId", ParameterSpec::path())
            .with_parameter("startDate", query(ParameterType::String).required())
            .with_parameter("endDate", query(ParameterType::String).required())
            .with_parameter("metric", query(ParameterType::String).repeated())
            .with_parameter("dimension", query(ParameterType::String).repeated())
            .with_response("Report");
    let download = EndpointDescriptor::new(
        "download",
        HttpMethod::Get,
        "accounts/{accountId}/reports/download",
    )?
    .with_id("adexchangeseller.accounts.reports.download")
    .with_parameter("accountId", ParameterSpec::path())
    .with_media_download(true);
    let service = ServiceRoot::builder("adexchangeseller", "v2.0")
        .with_service_path("adexchangeseller/v2.0/")
        .with_scope("https://www.googleapis.com/auth/adexchange.seller")
        .with_resource(
            ResourceBinding::new("accounts")
                .with_method(get)
                .with_method(list)
                .with_resource(
                    ResourceBinding::new("reports")
                        .with_method(generate)
                        .with_method(download),
                ),
        )
        .build()?;
    Ok(Arc::new(service))
}
