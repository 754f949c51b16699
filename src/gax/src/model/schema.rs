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

/// The static description of a model type.
///
/// Schemas are declared as `static` items. Fields that hold other models
/// refer to their schema by reference, which allows recursive types.
#[derive(Debug)]
pub struct Schema {
    /// The schema name, as used in the discovery document.
    pub name: &'static str,
    /// The fields, in declaration order.
    pub fields: &'static [Field],
    /// For list-like models, the field holding the list.
    pub collection_key: Option<&'static str>,
    /// Fields whose wire name differs from their field name.
    ///
    /// Each entry maps a field name to its wire name, for example
    /// `("iPProtocol", "IPProtocol")`.
    pub wire_names: &'static [(&'static str, &'static str)],
}

impl Schema {
    pub const fn new(name: &'static str, fields: &'static [Field]) -> Self {
        Self {
            name,
            fields,
            collection_key: None,
            wire_names: &[],
        }
    }

    pub const fn with_collection_key(self, key: &'static str) -> Self {
        Self {
            collection_key: Some(key),
            ..self
        }
    }

    pub const fn with_wire_names(self, names: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            wire_names: names,
            ..self
        }
    }

    /// Finds a field by its name.
    pub fn field(&self, name: &str) -> Option<&'static Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// The name used on the wire for `field`.
    pub fn wire_name(&self, field: &'static str) -> &'static str {
        self.wire_names
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, w)| *w)
            .unwrap_or(field)
    }
}

/// One field in a [Schema].
#[derive(Clone, Copy, Debug)]
pub struct Field {
    pub name: &'static str,
    pub ty: FieldType,
    pub shape: Shape,
}

impl Field {
    pub const fn new(name: &'static str, ty: FieldType, shape: Shape) -> Self {
        Self { name, ty, shape }
    }

    pub const fn string(name: &'static str) -> Self {
        Self::new(name, FieldType::String, Shape::Single)
    }

    pub const fn integer(name: &'static str) -> Self {
        Self::new(name, FieldType::Integer, Shape::Single)
    }

    pub const fn number(name: &'static str) -> Self {
        Self::new(name, FieldType::Number, Shape::Single)
    }

    pub const fn boolean(name: &'static str) -> Self {
        Self::new(name, FieldType::Boolean, Shape::Single)
    }

    pub const fn any(name: &'static str) -> Self {
        Self::new(name, FieldType::Any, Shape::Single)
    }

    pub const fn object(name: &'static str, schema: &'static Schema) -> Self {
        Self::new(name, FieldType::Object(schema), Shape::Single)
    }

    /// A JSON array whose elements are all of type `ty`.
    pub const fn array(name: &'static str, ty: FieldType) -> Self {
        Self::new(name, ty, Shape::Array)
    }

    /// A JSON object with arbitrary keys, whose values are all of type `ty`.
    pub const fn map(name: &'static str, ty: FieldType) -> Self {
        Self::new(name, ty, Shape::Map)
    }
}

/// The type of a field, or of the elements of an array or map field.
#[derive(Clone, Copy)]
pub enum FieldType {
    String,
    /// A JSON integer that fits in an `i64`.
    ///
    /// Google APIs send 64-bit integers as strings, such fields are declared
    /// as [FieldType::String].
    Integer,
    /// Any JSON number, kept with its original representation.
    Number,
    Boolean,
    /// Any JSON value, kept verbatim.
    Any,
    Object(&'static Schema),
}

impl FieldType {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Any => "any",
            Self::Object(_) => "object",
        }
    }
}

impl std::fmt::Debug for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Object(s) => write!(f, "Object({})", s.name),
            t => write!(f, "{}", t.name()),
        }
    }
}

/// How many values of the [FieldType] a field holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Single,
    Array,
    Map,
}
