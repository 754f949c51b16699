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

//! Parameter values for a single call.
//!
//! Generated clients convert their typed arguments into a [Params] map. The
//! map is validated against the method's [ParameterSpec] table when the call
//! is dispatched.
//!
//! [ParameterSpec]: crate::descriptor::ParameterSpec

use std::collections::BTreeMap;

/// Parameters accepted by every method, without being declared.
///
/// These are all sent in the query string.
pub const STANDARD_PARAMETERS: &[&str] = &[
    "alt",
    "fields",
    "key",
    "oauth_token",
    "prettyPrint",
    "quotaUser",
    "trace",
    "userIp",
];

/// Returns true if `name` is a [standard parameter][STANDARD_PARAMETERS].
pub fn is_standard(name: &str) -> bool {
    STANDARD_PARAMETERS.contains(&name)
}

/// The value of one parameter.
#[derive(Clone, Debug, PartialEq)]
pub enum ParameterValue {
    String(String),
    Integer(i64),
    Number(f64),
    Boolean(bool),
    /// The values of a repeated parameter.
    List(Vec<ParameterValue>),
}

impl ParameterValue {
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// The values as they appear on the wire.
    ///
    /// Scalars produce a single string, lists produce one string per
    /// element, flattening any nested lists.
    pub fn wire_values(&self) -> Vec<String> {
        match self {
            Self::List(items) => items.iter().flat_map(|v| v.wire_values()).collect(),
            scalar => vec![scalar.to_string()],
        }
    }
}

impl std::fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::List(items) => {
                let parts = items.iter().map(|v| v.to_string()).collect::<Vec<_>>();
                write!(f, "{}", parts.join(","))
            }
        }
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for ParameterValue {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<i32> for ParameterValue {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<u32> for ParameterValue {
    fn from(value: u32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<i64> for ParameterValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for ParameterValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for ParameterValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl<T: Into<ParameterValue>> From<Vec<T>> for ParameterValue {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ParameterValue>, const N: usize> From<[T; N]> for ParameterValue {
    fn from(value: [T; N]) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

/// The parameters of a single call, keyed by their wire name.
///
/// Inserting a name twice keeps the last value.
///
/// # Example
/// ```
/// # use google_api_gax::params::Params;
/// let params = Params::new()
///     .set("accountId", "12345")
///     .set("maxResults", 50)
///     .set("metric", ["EARNINGS", "AD_IMPRESSIONS"]);
/// assert_eq!(params.len(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params {
    values: BTreeMap<String, ParameterValue>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of a parameter, replacing any previous value.
    pub fn set<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<ParameterValue>,
    {
        self.insert(name, value);
        self
    }

    /// Sets the value of a parameter if `value` contains something.
    ///
    /// Absent optional parameters are never sent, this function makes the
    /// common case of copying optional fields easier to write.
    pub fn set_opt<K, V>(self, name: K, value: Option<V>) -> Self
    where
        K: Into<String>,
        V: Into<ParameterValue>,
    {
        match value {
            Some(v) => self.set(name, v),
            None => self,
        }
    }

    /// Sets a repeated parameter, skipping it if `values` is empty.
    pub fn set_list<K, I, V>(self, name: K, values: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<ParameterValue>,
    {
        let values = values.into_iter().map(Into::into).collect::<Vec<_>>();
        if values.is_empty() {
            return self;
        }
        self.set(name, ParameterValue::List(values))
    }

    pub fn insert<K, V>(&mut self, name: K, value: V) -> Option<ParameterValue>
    where
        K: Into<String>,
        V: Into<ParameterValue>,
    {
        self.values.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&ParameterValue> {
        self.values.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<ParameterValue> {
        self.values.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Merges `other` into these parameters.
    ///
    /// On collisions the value from `other` wins. Generated methods call
    /// this with the required parameters first and the optional parameters
    /// second, matching the historical behavior of Google API clients.
    pub fn merge(mut self, other: Params) -> Self {
        self.values.extend(other.values);
        self
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParameterValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let values = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { values }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Params
where
    K: Into<String>,
    V: Into<ParameterValue>,
{
    fn from(value: [(K, V); N]) -> Self {
        value.into_iter().collect()
    }
}

impl IntoIterator for Params {
    type Item = (String, ParameterValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, ParameterValue>;
    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
