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

//! The optional parameters of each method.
//!
//! Methods take their required parameters as arguments and the optional ones
//! in one of these types. Unset fields are not sent.

use gax::params::Params;

/// The optional parameters of the `list` methods returning pages.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListOptions {
    /// A continuation token, the `nextPageToken` of a previous response.
    pub page_token: Option<String>,

    /// The maximum number of results in each page.
    pub max_results: Option<u32>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = Some(v.into());
        self
    }

    pub fn set_max_results(mut self, v: u32) -> Self {
        self.max_results = Some(v);
        self
    }
}

impl From<ListOptions> for Params {
    fn from(value: ListOptions) -> Self {
        Params::new()
            .set_opt("pageToken", value.page_token)
            .set_opt("maxResults", value.max_results)
    }
}

pub type ListAccountsOptions = ListOptions;
pub type ListAdClientsOptions = ListOptions;
pub type ListCustomChannelsOptions = ListOptions;
pub type ListSavedReportsOptions = ListOptions;
pub type ListUrlChannelsOptions = ListOptions;

/// The optional parameters of `accounts().alerts().list()`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListAlertsOptions {
    /// The locale used to translate alert messages, `en_US` if not set.
    pub locale: Option<String>,
}

impl ListAlertsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_locale<T: Into<String>>(mut self, v: T) -> Self {
        self.locale = Some(v.into());
        self
    }
}

impl From<ListAlertsOptions> for Params {
    fn from(value: ListAlertsOptions) -> Self {
        Params::new().set_opt("locale", value.locale)
    }
}

/// The optional parameters of `accounts().reports().generate()`.
///
/// The repeated fields are sent as one query parameter per value.
///
/// # Example
/// ```
/// # use google_api_adexchangeseller_v2::options::GenerateReportOptions;
/// let options = GenerateReportOptions::new()
///     .set_metric(["EARNINGS", "CLICKS"])
///     .set_dimension(["DATE"])
///     .set_sort(["-EARNINGS"])
///     .set_max_results(100);
/// assert_eq!(options.metric.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GenerateReportOptions {
    /// Dimensions or metrics to sort on. Prefix a name with `+` to sort in
    /// ascending order, or with `-` to sort in descending order.
    pub sort: Vec<String>,

    /// Numeric columns to include in the report.
    pub metric: Vec<String>,

    /// Filters applied to the report, such as `DATE==2024-01-01`.
    pub filter: Vec<String>,

    /// Dimensions to base the report on.
    pub dimension: Vec<String>,

    /// The locale used to translate report output, `en_US` if not set.
    pub locale: Option<String>,

    /// The maximum number of rows of report data to return.
    pub max_results: Option<u32>,

    /// The index of the first row of report data to return.
    pub start_index: Option<u32>,
}

impl GenerateReportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_sort<I, V>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.sort = v.into_iter().map(Into::into).collect();
        self
    }

    pub fn set_metric<I, V>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.metric = v.into_iter().map(Into::into).collect();
        self
    }

    pub fn set_filter<I, V>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.filter = v.into_iter().map(Into::into).collect();
        self
    }

    pub fn set_dimension<I, V>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.dimension = v.into_iter().map(Into::into).collect();
        self
    }

    pub fn set_locale<T: Into<String>>(mut self, v: T) -> Self {
        self.locale = Some(v.into());
        self
    }

    pub fn set_max_results(mut self, v: u32) -> Self {
        self.max_results = Some(v);
        self
    }

    pub fn set_start_index(mut self, v: u32) -> Self {
        self.start_index = Some(v);
        self
    }
}

impl From<GenerateReportOptions> for Params {
    fn from(value: GenerateReportOptions) -> Self {
        Params::new()
            .set_list("sort", value.sort)
            .set_list("metric", value.metric)
            .set_list("filter", value.filter)
            .set_list("dimension", value.dimension)
            .set_opt("locale", value.locale)
            .set_opt("maxResults", value.max_results)
            .set_opt("startIndex", value.start_index)
    }
}

/// The optional parameters of `accounts().reports().saved().generate()`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GenerateSavedReportOptions {
    pub locale: Option<String>,
    pub max_results: Option<u32>,
    pub start_index: Option<u32>,
}

impl GenerateSavedReportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_locale<T: Into<String>>(mut self, v: T) -> Self {
        self.locale = Some(v.into());
        self
    }

    pub fn set_max_results(mut self, v: u32) -> Self {
        self.max_results = Some(v);
        self
    }

    pub fn set_start_index(mut self, v: u32) -> Self {
        self.start_index = Some(v);
        self
    }
}

impl From<GenerateSavedReportOptions> for Params {
    fn from(value: GenerateSavedReportOptions) -> Self {
        Params::new()
            .set_opt("locale", value.locale)
            .set_opt("maxResults", value.max_results)
            .set_opt("startIndex", value.start_index)
    }
}
