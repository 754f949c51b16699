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

//! The messages used by the Ad Exchange Seller API.

use gax::declare_message;
use gax::model::{Field, FieldType, Schema};

static ACCOUNT: Schema = Schema::new(
    "Account",
    &[
        Field::string("id"),
        Field::string("kind"),
        Field::string("name"),
    ],
);

declare_message! {
    /// An Ad Exchange seller account.
    pub struct Account => ACCOUNT;
}

static ACCOUNTS: Schema = Schema::new(
    "Accounts",
    &[
        Field::string("etag"),
        Field::array("items", FieldType::Object(&ACCOUNT)),
        Field::string("kind"),
        Field::string("nextPageToken"),
    ],
)
.with_collection_key("items");

declare_message! {
    /// A page of [Account] values.
    pub struct Accounts => ACCOUNTS;
}

static AD_CLIENT: Schema = Schema::new(
    "AdClient",
    &[
        Field::boolean("arcOptIn"),
        Field::string("id"),
        Field::string("kind"),
        Field::string("productCode"),
        Field::boolean("supportsReporting"),
    ],
);

declare_message! {
    /// An ad client, identifying the product an account uses to serve ads.
    pub struct AdClient => AD_CLIENT;
}

static AD_CLIENTS: Schema = Schema::new(
    "AdClients",
    &[
        Field::string("etag"),
        Field::array("items", FieldType::Object(&AD_CLIENT)),
        Field::string("kind"),
        Field::string("nextPageToken"),
    ],
)
.with_collection_key("items");

declare_message! {
    /// A page of [AdClient] values.
    pub struct AdClients => AD_CLIENTS;
}

static ALERT: Schema = Schema::new(
    "Alert",
    &[
        Field::string("id"),
        Field::string("kind"),
        Field::string("message"),
        Field::string("severity"),
        Field::string("type"),
    ],
);

declare_message! {
    /// A message about the account, such as a policy notification.
    pub struct Alert => ALERT;
}

static ALERTS: Schema = Schema::new(
    "Alerts",
    &[
        Field::array("items", FieldType::Object(&ALERT)),
        Field::string("kind"),
    ],
)
.with_collection_key("items");

declare_message! {
    /// The alerts for an account.
    pub struct Alerts => ALERTS;
}

static CUSTOM_CHANNEL: Schema = Schema::new(
    "CustomChannel",
    &[
        Field::string("code"),
        Field::string("id"),
        Field::string("kind"),
        Field::string("name"),
        Field::object("targetingInfo", &CUSTOM_CHANNEL_TARGETING_INFO),
    ],
);

declare_message! {
    /// A custom channel, used to group ad units for reporting.
    pub struct CustomChannel => CUSTOM_CHANNEL;
}

static CUSTOM_CHANNEL_TARGETING_INFO: Schema = Schema::new(
    "CustomChannelTargetingInfo",
    &[
        Field::string("adsAppearOn"),
        Field::string("description"),
        Field::string("location"),
        Field::string("siteLanguage"),
    ],
);

declare_message! {
    /// The targeting information of a [CustomChannel].
    pub struct CustomChannelTargetingInfo => CUSTOM_CHANNEL_TARGETING_INFO;
}

static CUSTOM_CHANNELS: Schema = Schema::new(
    "CustomChannels",
    &[
        Field::string("etag"),
        Field::array("items", FieldType::Object(&CUSTOM_CHANNEL)),
        Field::string("kind"),
        Field::string("nextPageToken"),
    ],
)
.with_collection_key("items");

declare_message! {
    /// A page of [CustomChannel] values.
    pub struct CustomChannels => CUSTOM_CHANNELS;
}

static METADATA: Schema = Schema::new(
    "Metadata",
    &[
        Field::array("items", FieldType::Object(&REPORTING_METADATA_ENTRY)),
        Field::string("kind"),
    ],
)
.with_collection_key("items");

declare_message! {
    /// The dimensions or metrics available in reports.
    pub struct Metadata => METADATA;
}

static PREFERRED_DEAL: Schema = Schema::new(
    "PreferredDeal",
    &[
        Field::string("advertiserName"),
        Field::string("buyerNetworkName"),
        Field::string("currencyCode"),
        Field::string("endTime"),
        Field::string("fixedCpm"),
        Field::string("id"),
        Field::string("kind"),
        Field::string("startTime"),
    ],
);

declare_message! {
    /// A preferred deal between the seller and a buyer.
    pub struct PreferredDeal => PREFERRED_DEAL;
}

static PREFERRED_DEALS: Schema = Schema::new(
    "PreferredDeals",
    &[
        Field::array("items", FieldType::Object(&PREFERRED_DEAL)),
        Field::string("kind"),
    ],
)
.with_collection_key("items");

declare_message! {
    /// The preferred deals of an account.
    pub struct PreferredDeals => PREFERRED_DEALS;
}

static REPORT: Schema = Schema::new(
    "Report",
    &[
        Field::array("averages", FieldType::String),
        Field::array("headers", FieldType::Object(&REPORT_HEADERS)),
        Field::string("kind"),
        Field::array("rows", FieldType::Any),
        Field::string("totalMatchedRows"),
        Field::array("totals", FieldType::String),
        Field::array("warnings", FieldType::String),
    ],
)
.with_collection_key("warnings");

declare_message! {
    /// The result of a report request.
    ///
    /// Each element in `rows` is an array of strings, one per column in
    /// `headers`.
    pub struct Report => REPORT;
}

static REPORT_HEADERS: Schema = Schema::new(
    "ReportHeaders",
    &[
        Field::string("currency"),
        Field::string("name"),
        Field::string("type"),
    ],
);

declare_message! {
    /// Describes one column of a [Report].
    pub struct ReportHeaders => REPORT_HEADERS;
}

static REPORTING_METADATA_ENTRY: Schema = Schema::new(
    "ReportingMetadataEntry",
    &[
        Field::array("compatibleDimensions", FieldType::String),
        Field::array("compatibleMetrics", FieldType::String),
        Field::string("id"),
        Field::string("kind"),
        Field::array("requiredDimensions", FieldType::String),
        Field::array("requiredMetrics", FieldType::String),
        Field::array("supportedProducts", FieldType::String),
    ],
)
.with_collection_key("supportedProducts");

declare_message! {
    /// Describes a dimension or metric and its compatibility rules.
    pub struct ReportingMetadataEntry => REPORTING_METADATA_ENTRY;
}

static SAVED_REPORT: Schema = Schema::new(
    "SavedReport",
    &[
        Field::string("id"),
        Field::string("kind"),
        Field::string("name"),
    ],
);

declare_message! {
    /// A report definition saved in the Ad Exchange UI.
    pub struct SavedReport => SAVED_REPORT;
}

static SAVED_REPORTS: Schema = Schema::new(
    "SavedReports",
    &[
        Field::string("etag"),
        Field::array("items", FieldType::Object(&SAVED_REPORT)),
        Field::string("kind"),
        Field::string("nextPageToken"),
    ],
)
.with_collection_key("items");

declare_message! {
    /// A page of [SavedReport] values.
    pub struct SavedReports => SAVED_REPORTS;
}

static URL_CHANNEL: Schema = Schema::new(
    "UrlChannel",
    &[
        Field::string("id"),
        Field::string("kind"),
        Field::string("urlPattern"),
    ],
);

declare_message! {
    /// A URL channel, used to track ads served on a URL pattern.
    pub struct UrlChannel => URL_CHANNEL;
}

static URL_CHANNELS: Schema = Schema::new(
    "UrlChannels",
    &[
        Field::string("etag"),
        Field::array("items", FieldType::Object(&URL_CHANNEL)),
        Field::string("kind"),
        Field::string("nextPageToken"),
    ],
)
.with_collection_key("items");

declare_message! {
    /// A page of [UrlChannel] values.
    pub struct UrlChannels => URL_CHANNELS;
}
