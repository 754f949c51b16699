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

use super::schema::{Field, FieldType, Schema, Shape};
use super::Message;
use crate::Result;
use crate::error::Error;
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use std::collections::BTreeMap;

/// A failure converting between JSON and a [Model].
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum ModelError {
    /// The JSON value at `path` does not have the declared type.
    #[error("expected {expected} at `{path}`, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    /// The schema has no field with this name.
    #[error("`{field}` is not a field of `{schema}`")]
    UnknownField { schema: &'static str, field: String },
}

/// The value of one field in a [Model].
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// An explicit JSON `null`.
    Null,
    Bool(bool),
    Integer(i64),
    Number(serde_json::Number),
    String(String),
    Any(serde_json::Value),
    Object(Model),
    Array(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            Self::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Model> {
        match self {
            Self::Object(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Converts to JSON.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value as Json;
        match self {
            Self::Null => Json::Null,
            Self::Bool(b) => Json::Bool(*b),
            Self::Integer(i) => Json::from(*i),
            Self::Number(n) => Json::Number(n.clone()),
            Self::String(s) => Json::String(s.clone()),
            Self::Any(v) => v.clone(),
            Self::Object(m) => m.to_json(),
            Self::Array(a) => Json::Array(a.iter().map(Value::to_json).collect()),
            Self::Map(m) => Json::Object(m.iter().map(|(k, v)| (k.clone(), v.to_json())).collect()),
        }
    }

    fn conforms(&self, ty: FieldType, shape: Shape) -> bool {
        match (shape, self) {
            (_, Self::Null) => true,
            (Shape::Single, v) => v.conforms_scalar(ty),
            (Shape::Array, Self::Array(a)) => a.iter().all(|v| v.conforms_scalar(ty)),
            (Shape::Map, Self::Map(m)) => m.values().all(|v| v.conforms_scalar(ty)),
            _ => false,
        }
    }

    fn conforms_scalar(&self, ty: FieldType) -> bool {
        match (ty, self) {
            (_, Self::Null) => true,
            (FieldType::Any, _) => true,
            (FieldType::String, Self::String(_)) => true,
            (FieldType::Integer, Self::Integer(_)) => true,
            (FieldType::Number, Self::Number(_) | Self::Integer(_)) => true,
            (FieldType::Boolean, Self::Bool(_)) => true,
            (FieldType::Object(s), Self::Object(m)) => std::ptr::eq(s, m.schema),
            _ => false,
        }
    }
}

impl serde::Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Integer(i) => serializer.serialize_i64(*i),
            Self::Number(n) => n.serialize(serializer),
            Self::String(s) => serializer.serialize_str(s),
            Self::Any(v) => v.serialize(serializer),
            Self::Object(m) => m.serialize(serializer),
            Self::Array(a) => serializer.collect_seq(a),
            Self::Map(m) => serializer.collect_map(m),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    /// Non-finite values have no JSON representation and become [Value::Null].
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value)
            .map(Self::Number)
            .unwrap_or(Self::Null)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Model> for Value {
    fn from(value: Model) -> Self {
        Self::Object(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::Array(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<BTreeMap<String, T>> for Value {
    fn from(value: BTreeMap<String, T>) -> Self {
        Self::Map(value.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

/// A deserialized request or response body.
///
/// A `Model` holds the fields of one JSON object, typed according to its
/// [Schema]. Only declared fields are kept: unknown keys in the input are
/// dropped, so re-serializing a model reproduces the declared fields only.
/// Fields absent from the input are absent from the model, and are not
/// serialized.
#[derive(Clone)]
pub struct Model {
    schema: &'static Schema,
    fields: BTreeMap<&'static str, Value>,
}

impl Model {
    /// Creates an empty model.
    pub fn new(schema: &'static Schema) -> Self {
        Self {
            schema,
            fields: BTreeMap::new(),
        }
    }

    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    /// Parses `json` according to `schema`.
    pub fn from_json(
        schema: &'static Schema,
        json: &serde_json::Value,
    ) -> std::result::Result<Self, ModelError> {
        Self::decode(schema, json, "")
    }

    fn decode(
        schema: &'static Schema,
        json: &serde_json::Value,
        path: &str,
    ) -> std::result::Result<Self, ModelError> {
        let object = json
            .as_object()
            .ok_or_else(|| mismatch(path, "object", json))?;
        let mut fields = BTreeMap::new();
        for field in schema.fields {
            let wire = schema.wire_name(field.name);
            let Some(value) = object.get(wire) else {
                continue;
            };
            let path = join(path, wire);
            fields.insert(field.name, decode_field(field, value, &path)?);
        }
        if tracing::enabled!(tracing::Level::TRACE) {
            for key in object.keys() {
                let known = schema
                    .fields
                    .iter()
                    .any(|f| schema.wire_name(f.name) == key.as_str());
                if !known {
                    tracing::trace!(schema = schema.name, key = key.as_str(), "ignoring unknown field");
                }
            }
        }
        Ok(Self { schema, fields })
    }

    /// Converts to JSON, using the wire names.
    pub fn to_json(&self) -> serde_json::Value {
        let object = self
            .fields
            .iter()
            .map(|(name, v)| (self.schema.wire_name(*name).to_string(), v.to_json()))
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(object)
    }

    /// The value of `field`, if set.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    pub fn get_i64(&self, field: &str) -> Option<i64> {
        self.get(field).and_then(Value::as_i64)
    }

    pub fn get_f64(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(Value::as_f64)
    }

    pub fn get_bool(&self, field: &str) -> Option<bool> {
        self.get(field).and_then(Value::as_bool)
    }

    pub fn get_object(&self, field: &str) -> Option<&Model> {
        self.get(field).and_then(Value::as_object)
    }

    pub fn get_array(&self, field: &str) -> Option<&[Value]> {
        self.get(field).and_then(Value::as_array)
    }

    pub fn get_map(&self, field: &str) -> Option<&BTreeMap<String, Value>> {
        self.get(field).and_then(Value::as_map)
    }

    /// The value of `field` as a typed message.
    pub fn get_message<T: Message>(&self, field: &str) -> Option<T> {
        self.get_object(field).and_then(as_message)
    }

    /// Sets `field`, checking the value against the schema.
    pub fn set<V: Into<Value>>(mut self, field: &str, value: V) -> Result<Self> {
        self.insert(field, value)?;
        Ok(self)
    }

    /// Sets `field`, returning the previous value.
    pub fn insert<V: Into<Value>>(&mut self, field: &str, value: V) -> Result<Option<Value>> {
        let decl = self.declared(field)?;
        let value = value.into();
        if !value.conforms(decl.ty, decl.shape) {
            return Err(Error::ser(ModelError::TypeMismatch {
                path: field.to_string(),
                expected: expected_name(decl),
                found: value_name(&value),
            }));
        }
        Ok(self.fields.insert(decl.name, value))
    }

    /// Removes `field`, returning its value.
    pub fn clear(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    /// Returns true if no fields are set.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The fields that are set, in name order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.fields.iter().map(|(k, v)| (*k, v))
    }

    /// The elements of the collection field.
    ///
    /// Empty if the schema has no collection key, or the field is not set.
    pub fn items(&self) -> &[Value] {
        self.schema
            .collection_key
            .and_then(|k| self.get_array(k))
            .unwrap_or(&[])
    }

    /// The elements of the collection field, as typed messages.
    ///
    /// Elements of a different schema, or `null` elements, are skipped.
    pub fn items_as<T: Message>(&self) -> impl Iterator<Item = T> + '_ {
        self.items()
            .iter()
            .filter_map(|v| v.as_object().and_then(as_message))
    }

    /// The number of elements in the collection field.
    pub fn len(&self) -> usize {
        self.items().len()
    }

    /// The `nextPageToken` of a list response, if set and not empty.
    pub fn next_page_token(&self) -> Option<&str> {
        self.get_str("nextPageToken").filter(|t| !t.is_empty())
    }

    fn declared(&self, field: &str) -> Result<&'static Field> {
        self.schema.field(field).ok_or_else(|| {
            Error::ser(ModelError::UnknownField {
                schema: self.schema.name,
                field: field.to_string(),
            })
        })
    }
}

impl PartialEq for Model {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.schema, other.schema) && self.fields == other.fields
    }
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("schema", &self.schema.name)
            .field("fields", &self.fields)
            .finish()
    }
}

impl serde::Serialize for Model {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(self.schema.wire_name(*name), value)?;
        }
        map.end()
    }
}

fn as_message<T: Message>(model: &Model) -> Option<T> {
    std::ptr::eq(model.schema, T::schema()).then(|| T::from_model(model.clone()))
}

fn decode_field(
    field: &Field,
    json: &serde_json::Value,
    path: &str,
) -> std::result::Result<Value, ModelError> {
    match (field.shape, json) {
        (_, serde_json::Value::Null) => Ok(Value::Null),
        (Shape::Single, v) => decode_scalar(field.ty, v, path),
        (Shape::Array, serde_json::Value::Array(a)) => a
            .iter()
            .enumerate()
            .map(|(i, v)| decode_scalar(field.ty, v, &format!("{path}[{i}]")))
            .collect::<std::result::Result<Vec<_>, ModelError>>()
            .map(Value::Array),
        (Shape::Map, serde_json::Value::Object(o)) => o
            .iter()
            .map(|(k, v)| Ok((k.clone(), decode_scalar(field.ty, v, &join(path, k))?)))
            .collect::<std::result::Result<BTreeMap<_, _>, ModelError>>()
            .map(Value::Map),
        (Shape::Array, v) => Err(mismatch(path, "array", v)),
        (Shape::Map, v) => Err(mismatch(path, "object", v)),
    }
}

fn decode_scalar(
    ty: FieldType,
    json: &serde_json::Value,
    path: &str,
) -> std::result::Result<Value, ModelError> {
    use serde_json::Value as Json;
    match (ty, json) {
        (_, Json::Null) => Ok(Value::Null),
        (FieldType::Any, v) => Ok(Value::Any(v.clone())),
        (FieldType::String, Json::String(s)) => Ok(Value::String(s.clone())),
        (FieldType::Integer, Json::Number(n)) => n
            .as_i64()
            .map(Value::Integer)
            .ok_or_else(|| mismatch(path, "integer", json)),
        (FieldType::Number, Json::Number(n)) => Ok(Value::Number(n.clone())),
        (FieldType::Boolean, Json::Bool(b)) => Ok(Value::Bool(*b)),
        (FieldType::Object(schema), v) => Model::decode(schema, v, path).map(Value::Object),
        (ty, v) => Err(mismatch(path, ty.name(), v)),
    }
}

fn mismatch(path: &str, expected: &'static str, found: &serde_json::Value) -> ModelError {
    let found = match found {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    };
    let path = if path.is_empty() { "." } else { path };
    ModelError::TypeMismatch {
        path: path.to_string(),
        expected,
        found,
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

fn expected_name(field: &Field) -> &'static str {
    match field.shape {
        Shape::Single => field.ty.name(),
        Shape::Array => "array",
        Shape::Map => "map",
    }
}

fn value_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Integer(_) => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Any(_) => "any",
        Value::Object(m) => m.schema.name,
        Value::Array(_) => "array",
        Value::Map(_) => "map",
    }
}
