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

//! Handles for each resource of the service.
//!
//! A handle borrows the client and exposes the methods of one resource,
//! plus accessors for its child resources.

use crate::client::AdExchangeSeller;
use crate::model;
use crate::options::*;
use bytes::Bytes;
use gax::paginator::Paginator;
use gax::params::Params;

type Pages<T> = gax::Result<Paginator<T, gax::error::Error>>;

/// The `accounts` resource.
#[derive(Clone, Copy, Debug)]
pub struct Accounts<'a> {
    client: &'a AdExchangeSeller,
}

impl<'a> Accounts<'a> {
    pub(crate) fn new(client: &'a AdExchangeSeller) -> Self {
        Self { client }
    }

    /// Gets information about the selected Ad Exchange account.
    pub async fn get(&self, account_id: &str) -> gax::Result<model::Account> {
        let params = Params::new().set("accountId", account_id);
        self.client.execute("accounts", "get", params).await
    }

    /// Lists one page of the accounts available to this user.
    pub async fn list(&self, options: ListAccountsOptions) -> gax::Result<model::Accounts> {
        self.client.execute("accounts", "list", options.into()).await
    }

    /// Streams all the pages of accounts, starting at `options.page_token`.
    pub fn list_by_page(&self, options: ListAccountsOptions) -> Pages<model::Accounts> {
        self.client.paginate("accounts", "list", options.into())
    }

    pub fn adclients(&self) -> AdClients<'a> {
        AdClients {
            client: self.client,
        }
    }

    pub fn alerts(&self) -> Alerts<'a> {
        Alerts {
            client: self.client,
        }
    }

    pub fn customchannels(&self) -> CustomChannels<'a> {
        CustomChannels {
            client: self.client,
        }
    }

    pub fn metadata(&self) -> Metadata<'a> {
        Metadata {
            client: self.client,
        }
    }

    pub fn preferreddeals(&self) -> PreferredDeals<'a> {
        PreferredDeals {
            client: self.client,
        }
    }

    pub fn reports(&self) -> Reports<'a> {
        Reports {
            client: self.client,
        }
    }

    pub fn urlchannels(&self) -> UrlChannels<'a> {
        UrlChannels {
            client: self.client,
        }
    }
}

/// The `accounts.adclients` resource.
#[derive(Clone, Copy, Debug)]
pub struct AdClients<'a> {
    client: &'a AdExchangeSeller,
}

impl AdClients<'_> {
    /// Lists one page of the ad clients in the account.
    pub async fn list(
        &self,
        account_id: &str,
        options: ListAdClientsOptions,
    ) -> gax::Result<model::AdClients> {
        let params = Params::from(options).set("accountId", account_id);
        self.client.execute("accounts.adclients", "list", params).await
    }

    pub fn list_by_page(
        &self,
        account_id: &str,
        options: ListAdClientsOptions,
    ) -> Pages<model::AdClients> {
        let params = Params::from(options).set("accountId", account_id);
        self.client.paginate("accounts.adclients", "list", params)
    }
}

/// The `accounts.alerts` resource.
#[derive(Clone, Copy, Debug)]
pub struct Alerts<'a> {
    client: &'a AdExchangeSeller,
}

impl Alerts<'_> {
    /// Lists the alerts for the account.
    pub async fn list(
        &self,
        account_id: &str,
        options: ListAlertsOptions,
    ) -> gax::Result<model::Alerts> {
        let params = Params::from(options).set("accountId", account_id);
        self.client.execute("accounts.alerts", "list", params).await
    }
}

/// The `accounts.customchannels` resource.
#[derive(Clone, Copy, Debug)]
pub struct CustomChannels<'a> {
    client: &'a AdExchangeSeller,
}

impl CustomChannels<'_> {
    /// Gets the custom channel `custom_channel_id` in the ad client.
    pub async fn get(
        &self,
        account_id: &str,
        ad_client_id: &str,
        custom_channel_id: &str,
    ) -> gax::Result<model::CustomChannel> {
        let params = Params::new()
            .set("accountId", account_id)
            .set("adClientId", ad_client_id)
            .set("customChannelId", custom_channel_id);
        self.client
            .execute("accounts.customchannels", "get", params)
            .await
    }

    /// Lists one page of the custom channels in the ad client.
    pub async fn list(
        &self,
        account_id: &str,
        ad_client_id: &str,
        options: ListCustomChannelsOptions,
    ) -> gax::Result<model::CustomChannels> {
        let params = Params::from(options)
            .set("accountId", account_id)
            .set("adClientId", ad_client_id);
        self.client
            .execute("accounts.customchannels", "list", params)
            .await
    }

    pub fn list_by_page(
        &self,
        account_id: &str,
        ad_client_id: &str,
        options: ListCustomChannelsOptions,
    ) -> Pages<model::CustomChannels> {
        let params = Params::from(options)
            .set("accountId", account_id)
            .set("adClientId", ad_client_id);
        self.client
            .paginate("accounts.customchannels", "list", params)
    }
}

/// The `accounts.metadata` resource.
///
/// It has no methods, only the [dimensions][Metadata::dimensions] and
/// [metrics][Metadata::metrics] children.
#[derive(Clone, Copy, Debug)]
pub struct Metadata<'a> {
    client: &'a AdExchangeSeller,
}

impl<'a> Metadata<'a> {
    pub fn dimensions(&self) -> Dimensions<'a> {
        Dimensions {
            client: self.client,
        }
    }

    pub fn metrics(&self) -> Metrics<'a> {
        Metrics {
            client: self.client,
        }
    }
}

/// The `accounts.metadata.dimensions` resource.
#[derive(Clone, Copy, Debug)]
pub struct Dimensions<'a> {
    client: &'a AdExchangeSeller,
}

impl Dimensions<'_> {
    /// Lists the report dimensions available to the account.
    pub async fn list(&self, account_id: &str) -> gax::Result<model::Metadata> {
        let params = Params::new().set("accountId", account_id);
        self.client
            .execute("accounts.metadata.dimensions", "list", params)
            .await
    }
}

/// The `accounts.metadata.metrics` resource.
#[derive(Clone, Copy, Debug)]
pub struct Metrics<'a> {
    client: &'a AdExchangeSeller,
}

impl Metrics<'_> {
    /// Lists the report metrics available to the account.
    pub async fn list(&self, account_id: &str) -> gax::Result<model::Metadata> {
        let params = Params::new().set("accountId", account_id);
        self.client
            .execute("accounts.metadata.metrics", "list", params)
            .await
    }
}

/// The `accounts.preferreddeals` resource.
#[derive(Clone, Copy, Debug)]
pub struct PreferredDeals<'a> {
    client: &'a AdExchangeSeller,
}

impl PreferredDeals<'_> {
    pub async fn get(&self, account_id: &str, deal_id: &str) -> gax::Result<model::PreferredDeal> {
        let params = Params::new()
            .set("accountId", account_id)
            .set("dealId", deal_id);
        self.client
            .execute("accounts.preferreddeals", "get", params)
            .await
    }

    pub async fn list(&self, account_id: &str) -> gax::Result<model::PreferredDeals> {
        let params = Params::new().set("accountId", account_id);
        self.client
            .execute("accounts.preferreddeals", "list", params)
            .await
    }
}

/// The `accounts.reports` resource.
#[derive(Clone, Copy, Debug)]
pub struct Reports<'a> {
    client: &'a AdExchangeSeller,
}

impl<'a> Reports<'a> {
    /// Generates a report for the date range `[start_date, end_date]`.
    ///
    /// Dates use the `YYYY-MM-DD` format. Both ends of the range are
    /// inclusive.
    pub async fn generate(
        &self,
        account_id: &str,
        start_date: &str,
        end_date: &str,
        options: GenerateReportOptions,
    ) -> gax::Result<model::Report> {
        let params = report_params(account_id, start_date, end_date, options);
        self.client
            .execute("accounts.reports", "generate", params)
            .await
    }

    /// Generates the same report as [generate()][Reports::generate], in CSV
    /// format.
    pub async fn generate_csv(
        &self,
        account_id: &str,
        start_date: &str,
        end_date: &str,
        options: GenerateReportOptions,
    ) -> gax::Result<Bytes> {
        let params =
            report_params(account_id, start_date, end_date, options).set("alt", "csv");
        self.client
            .execute_raw("accounts.reports", "generate", params)
            .await
    }

    pub fn saved(&self) -> SavedReports<'a> {
        SavedReports {
            client: self.client,
        }
    }
}

fn report_params(
    account_id: &str,
    start_date: &str,
    end_date: &str,
    options: GenerateReportOptions,
) -> Params {
    Params::from(options)
        .set("accountId", account_id)
        .set("startDate", start_date)
        .set("endDate", end_date)
}

/// The `accounts.reports.saved` resource.
#[derive(Clone, Copy, Debug)]
pub struct SavedReports<'a> {
    client: &'a AdExchangeSeller,
}

impl SavedReports<'_> {
    /// Generates the saved report `saved_report_id`.
    pub async fn generate(
        &self,
        account_id: &str,
        saved_report_id: &str,
        options: GenerateSavedReportOptions,
    ) -> gax::Result<model::Report> {
        let params = Params::from(options)
            .set("accountId", account_id)
            .set("savedReportId", saved_report_id);
        self.client
            .execute("accounts.reports.saved", "generate", params)
            .await
    }

    /// Lists one page of the saved reports in the account.
    pub async fn list(
        &self,
        account_id: &str,
        options: ListSavedReportsOptions,
    ) -> gax::Result<model::SavedReports> {
        let params = Params::from(options).set("accountId", account_id);
        self.client
            .execute("accounts.reports.saved", "list", params)
            .await
    }

    pub fn list_by_page(
        &self,
        account_id: &str,
        options: ListSavedReportsOptions,
    ) -> Pages<model::SavedReports> {
        let params = Params::from(options).set("accountId", account_id);
        self.client.paginate("accounts.reports.saved", "list", params)
    }
}

/// The `accounts.urlchannels` resource.
#[derive(Clone, Copy, Debug)]
pub struct UrlChannels<'a> {
    client: &'a AdExchangeSeller,
}

impl UrlChannels<'_> {
    /// Lists one page of the URL channels in the ad client.
    pub async fn list(
        &self,
        account_id: &str,
        ad_client_id: &str,
        options: ListUrlChannelsOptions,
    ) -> gax::Result<model::UrlChannels> {
        let params = Params::from(options)
            .set("accountId", account_id)
            .set("adClientId", ad_client_id);
        self.client
            .execute("accounts.urlchannels", "list", params)
            .await
    }

    pub fn list_by_page(
        &self,
        account_id: &str,
        ad_client_id: &str,
        options: ListUrlChannelsOptions,
    ) -> Pages<model::UrlChannels> {
        let params = Params::from(options)
            .set("accountId", account_id)
            .set("adClientId", ad_client_id);
        self.client.paginate("accounts.urlchannels", "list", params)
    }
}
