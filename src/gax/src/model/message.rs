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

use super::{Model, ModelError, Schema};

/// A model type with a static schema.
///
/// Generated libraries declare one newtype over [Model] per schema, using
/// [declare_message][crate::declare_message]. The dispatcher uses this trait
/// to decode responses into the right type.
pub trait Message: Clone + std::fmt::Debug + Send + Sync + Sized + 'static {
    /// The schema of this type.
    fn schema() -> &'static Schema;

    /// Wraps `model`, which must use [Self::schema].
    fn from_model(model: Model) -> Self;

    fn as_model(&self) -> &Model;

    fn into_model(self) -> Model;

    /// Parses `json` into this type.
    fn from_json(json: &serde_json::Value) -> Result<Self, ModelError> {
        Model::from_json(Self::schema(), json).map(Self::from_model)
    }

    /// An empty instance.
    fn empty() -> Self {
        Self::from_model(Model::new(Self::schema()))
    }
}

/// Declares a newtype over [Model] implementing [Message].
///
/// The newtype dereferences to [Model] for read access, offers a
/// type-checked builder-style `set()`, and implements the serde traits
/// using the schema.
///
/// ```
/// # use google_api_gax::model::*;
/// # use google_api_gax::declare_message;
/// static PARAM_OVERRIDE: Schema = Schema::new(
///     "ParamOverride",
///     &[Field::string("path"), Field::string("value")],
/// );
/// declare_message! {
///     /// A parameter override.
///     pub struct ParamOverride => PARAM_OVERRIDE;
/// }
///
/// let o = ParamOverride::new().set("path", "modules.web.numReplicas")?.set("value", "3")?;
/// assert_eq!(o.get_str("value"), Some("3"));
/// # Ok::<(), google_api_gax::error::Error>(())
/// ```
#[macro_export]
macro_rules! declare_message {
    ($(#[$attr:meta])* $vis:vis struct $name:ident => $schema:path;) => {
        $(#[$attr])*
        #[derive(Clone, Debug, PartialEq)]
        $vis struct $name($crate::model::Model);

        impl $name {
            /// Creates an empty value.
            pub fn new() -> Self {
                Self($crate::model::Model::new(&$schema))
            }

            /// Sets a field, checking the value against the schema.
            pub fn set<V: Into<$crate::model::Value>>(
                self,
                field: &str,
                value: V,
            ) -> $crate::Result<Self> {
                self.0.set(field, value).map(Self)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::model::Message for $name {
            fn schema() -> &'static $crate::model::Schema {
                &$schema
            }
            fn from_model(model: $crate::model::Model) -> Self {
                Self(model)
            }
            fn as_model(&self) -> &$crate::model::Model {
                &self.0
            }
            fn into_model(self) -> $crate::model::Model {
                self.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = $crate::model::Model;
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl From<$name> for $crate::model::Value {
            fn from(value: $name) -> Self {
                $crate::model::Value::Object(value.0)
            }
        }

        impl $crate::model::__serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: $crate::model::__serde::Serializer,
            {
                $crate::model::__serde::Serialize::serialize(&self.0, serializer)
            }
        }

        impl<'de> $crate::model::__serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: $crate::model::__serde::Deserializer<'de>,
            {
                use $crate::model::__serde::de::Error as _;
                let json = <$crate::model::__serde_json::Value as $crate::model::__serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::model::Message>::from_json(&json).map_err(D::Error::custom)
            }
        }
    };
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::{Field, FieldType, Value};
    use serde_json::json;

    type TestResult = anyhow::Result<()>;

    static METADATA_ITEM: Schema =
        Schema::new("MetadataItem", &[Field::string("key"), Field::string("value")]);
    static METADATA: Schema = Schema::new(
        "Metadata",
        &[
            Field::string("fingerPrint"),
            Field::array("items", FieldType::Object(&METADATA_ITEM)),
        ],
    )
    .with_collection_key("items");

    crate::declare_message! {
        /// A key/value pair.
        pub struct MetadataItem => METADATA_ITEM;
    }
    crate::declare_message! {
        pub struct Metadata => METADATA;
    }

    #[test]
    fn serde() -> TestResult {
        let input = json!({
            "fingerPrint": "abc",
            "items": [{"key": "startup-script", "value": "echo hi"}],
            "ignored": 42,
        });
        let got = serde_json::from_value::<Metadata>(input)?;
        assert_eq!(got.get_str("fingerPrint"), Some("abc"));
        let items = got.items_as::<MetadataItem>().collect::<Vec<_>>();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].get_str("key"), Some("startup-script"));
        assert_eq!(
            serde_json::to_value(&got)?,
            json!({"fingerPrint": "abc", "items": [{"key": "startup-script", "value": "echo hi"}]})
        );
        Ok(())
    }

    #[test]
    fn deserialize_error() {
        let got = serde_json::from_value::<Metadata>(json!({"items": "not-a-list"}));
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn builders() -> TestResult {
        let item = MetadataItem::new().set("key", "k")?.set("value", "v")?;
        let metadata = Metadata::default().set("items", vec![item.clone()])?;
        assert_eq!(metadata.len(), 1);
        assert_eq!(metadata.get_message::<MetadataItem>("items"), None);
        assert_eq!(Value::from(item.clone()), Value::Object(item.into_model()));
        assert!(Metadata::empty().is_empty());
        assert!(std::ptr::eq(Metadata::schema(), &METADATA));
        Ok(())
    }
}
