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

//! The resources and methods of the Ad Exchange Seller API.

use crate::scopes;
use gax::descriptor::{EndpointDescriptor, HttpMethod, ParameterSpec, ParameterType};
use gax::resource::ResourceBinding;
use gax::service::ServiceRoot;

const SCOPES: [&str; 2] = [
    scopes::ADEXCHANGE_SELLER,
    scopes::ADEXCHANGE_SELLER_READONLY,
];

/// Returns the definition of the Ad Exchange Seller API.
///
/// All the typed calls in this crate dispatch through these descriptors.
pub fn service_root() -> gax::Result<ServiceRoot> {
    ServiceRoot::builder("adexchangeseller", "v2.0")
        .with_title("Ad Exchange Seller API")
        .with_root_url("https://www.googleapis.com/")
        .with_service_path("adexchangeseller/v2.0/")
        .with_scopes([
            scopes::ADEXCHANGE_SELLER,
            scopes::ADEXCHANGE_SELLER_READONLY,
        ])
        .with_resource(accounts()?)
        .build()
}

fn accounts() -> gax::Result<ResourceBinding> {
    let query = ParameterSpec::query;
    let get = EndpointDescriptor::new("get", HttpMethod::Get, "accounts/{accountId}")?
        .with_id("adexchangeseller.accounts.get")
        .with_parameter("accountId", ParameterSpec::path())
        .with_response("Account")
        .with_scopes(SCOPES);
    let list = EndpointDescriptor::new("list", HttpMethod::Get, "accounts")?
        .with_id("adexchangeseller.accounts.list")
        .with_parameter("pageToken", query(ParameterType::String))
        .with_parameter("maxResults", query(ParameterType::Integer))
        .with_response("Accounts")
        .with_scopes(SCOPES);
    Ok(ResourceBinding::new("accounts")
        .with_method(get)
        .with_method(list)
        .with_resource(accounts_adclients()?)
        .with_resource(accounts_alerts()?)
        .with_resource(accounts_customchannels()?)
        .with_resource(accounts_metadata()?)
        .with_resource(accounts_preferreddeals()?)
        .with_resource(accounts_reports()?)
        .with_resource(accounts_urlchannels()?))
}

fn accounts_adclients() -> gax::Result<ResourceBinding> {
    let query = ParameterSpec::query;
    let list = EndpointDescriptor::new("list", HttpMethod::Get, "accounts/{accountId}/adclients")?
        .with_id("adexchangeseller.accounts.adclients.list")
        .with_parameter("accountId", ParameterSpec::path())
        .with_parameter("pageToken", query(ParameterType::String))
        .with_parameter("maxResults", query(ParameterType::Integer))
        .with_response("AdClients")
        .with_scopes(SCOPES);
    Ok(ResourceBinding::new("adclients").with_method(list))
}

fn accounts_alerts() -> gax::Result<ResourceBinding> {
    let query = ParameterSpec::query;
    let list = EndpointDescriptor::new("list", HttpMethod::Get, "accounts/{accountId}/alerts")?
        .with_id("adexchangeseller.accounts.alerts.list")
        .with_parameter("accountId", ParameterSpec::path())
        .with_parameter("locale", query(ParameterType::String))
        .with_response("Alerts")
        .with_scopes(SCOPES);
    Ok(ResourceBinding::new("alerts").with_method(list))
}

fn accounts_customchannels() -> gax::Result<ResourceBinding> {
    let query = ParameterSpec::query;
    let get = EndpointDescriptor::new(
        "get",
        HttpMethod::Get,
        "accounts/{accountId}/adclients/{adClientId}/customchannels/{customChannelId}",
    )?
    .with_id("adexchangeseller.accounts.customchannels.get")
    .with_parameter("accountId", ParameterSpec::path())
    .with_parameter("adClientId", ParameterSpec::path())
    .with_parameter("customChannelId", ParameterSpec::path())
    .with_response("CustomChannel")
    .with_scopes(SCOPES);
    let list = EndpointDescriptor::new(
        "list",
        HttpMethod::Get,
        "accounts/{accountId}/adclients/{adClientId}/customchannels",
    )?
    .with_id("adexchangeseller.accounts.customchannels.list")
    .with_parameter("accountId", ParameterSpec::path())
    .with_parameter("adClientId", ParameterSpec::path())
    .with_parameter("pageToken", query(ParameterType::String))
    .with_parameter("maxResults", query(ParameterType::Integer))
    .with_response("CustomChannels")
    .with_scopes(SCOPES);
    Ok(ResourceBinding::new("customchannels")
        .with_method(get)
        .with_method(list))
}

fn accounts_metadata() -> gax::Result<ResourceBinding> {
    Ok(ResourceBinding::new("metadata")
        .with_resource(accounts_metadata_dimensions()?)
        .with_resource(accounts_metadata_metrics()?))
}

fn accounts_metadata_dimensions() -> gax::Result<ResourceBinding> {
    let list = EndpointDescriptor::new(
        "list",
        HttpMethod::Get,
        "accounts/{accountId}/metadata/dimensions",
    )?
    .with_id("adexchangeseller.accounts.metadata.dimensions.list")
    .with_parameter("accountId", ParameterSpec::path())
    .with_response("Metadata")
    .with_scopes(SCOPES);
    Ok(ResourceBinding::new("dimensions").with_method(list))
}

fn accounts_metadata_metrics() -> gax::Result<ResourceBinding> {
    let list = EndpointDescriptor::new(
        "list",
        HttpMethod::Get,
        "accounts/{accountId}/metadata/metrics",
    )?
    .with_id("adexchangeseller.accounts.metadata.metrics.list")
    .with_parameter("accountId", ParameterSpec::path())
    .with_response("Metadata")
    .with_scopes(SCOPES);
    Ok(ResourceBinding::new("metrics").with_method(list))
}

fn accounts_preferreddeals() -> gax::Result<ResourceBinding> {
    let get = EndpointDescriptor::new(
        "get",
        HttpMethod::Get,
        "accounts/{accountId}/preferreddeals/{dealId}",
    )?
    .with_id("adexchangeseller.accounts.preferreddeals.get")
    .with_parameter("accountId", ParameterSpec::path())
    .with_parameter("dealId", ParameterSpec::path())
    .with_response("PreferredDeal")
    .with_scopes(SCOPES);
    let list = EndpointDescriptor::new(
        "list",
        HttpMethod::Get,
        "accounts/{accountId}/preferreddeals",
    )?
    .with_id("adexchangeseller.accounts.preferreddeals.list")
    .with_parameter("accountId", ParameterSpec::path())
    .with_response("PreferredDeals")
    .with_scopes(SCOPES);
    Ok(ResourceBinding::new("preferreddeals")
        .with_method(get)
        .with_method(list))
}

fn accounts_reports() -> gax::Result<ResourceBinding> {
    let query = ParameterSpec::query;
    let generate = EndpointDescriptor::new(
        "generate",
        HttpMethod::Get,
        "accounts/{accountId}/reports",
    )?
    .with_id("adexchangeseller.accounts.reports.generate")
    .with_parameter("accountId", ParameterSpec::path())
    .with_parameter("startDate", query(ParameterType::String).required())
    .with_parameter("endDate", query(ParameterType::String).required())
    .with_parameter("sort", query(ParameterType::String).repeated())
    .with_parameter("locale", query(ParameterType::String))
    .with_parameter("metric", query(ParameterType::String).repeated())
    .with_parameter("maxResults", query(ParameterType::Integer))
    .with_parameter("filter", query(ParameterType::String).repeated())
    .with_parameter("startIndex", query(ParameterType::Integer))
    .with_parameter("dimension", query(ParameterType::String).repeated())
    .with_response("Report")
    .with_media_download(true)
    .with_scopes(SCOPES);
    Ok(ResourceBinding::new("reports")
        .with_method(generate)
        .with_resource(accounts_reports_saved()?))
}

fn accounts_reports_saved() -> gax::Result<ResourceBinding> {
    let query = ParameterSpec::query;
    let generate = EndpointDescriptor::new(
        "generate",
        HttpMethod::Get,
        "accounts/{accountId}/reports/{savedReportId}",
    )?
    .with_id("adexchangeseller.accounts.reports.saved.generate")
    .with_parameter("accountId", ParameterSpec::path())
    .with_parameter("savedReportId", ParameterSpec::path())
    .with_parameter("locale", query(ParameterType::String))
    .with_parameter("startIndex", query(ParameterType::Integer))
    .with_parameter("maxResults", query(ParameterType::Integer))
    .with_response("Report")
    .with_scopes(SCOPES);
    let list = EndpointDescriptor::new(
        "list",
        HttpMethod::Get,
        "accounts/{accountId}/reports/saved",
    )?
    .with_id("adexchangeseller.accounts.reports.saved.list")
    .with_parameter("accountId", ParameterSpec::path())
    .with_parameter("pageToken", query(ParameterType::String))
    .with_parameter("maxResults", query(ParameterType::Integer))
    .with_response("SavedReports")
    .with_scopes(SCOPES);
    Ok(ResourceBinding::new("saved")
        .with_method(generate)
        .with_method(list))
}

fn accounts_urlchannels() -> gax::Result<ResourceBinding> {
    let query = ParameterSpec::query;
    let list = EndpointDescriptor::new(
        "list",
        HttpMethod::Get,
        "accounts/{accountId}/adclients/{adClientId}/urlchannels",
    )?
    .with_id("adexchangeseller.accounts.urlchannels.list")
    .with_parameter("accountId", ParameterSpec::path())
    .with_parameter("adClientId", ParameterSpec::path())
    .with_parameter("pageToken", query(ParameterType::String))
    .with_parameter("maxResults", query(ParameterType::Integer))
    .with_response("UrlChannels")
    .with_scopes(SCOPES);
    Ok(ResourceBinding::new("urlchannels").with_method(list))
}
