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

//! Models for request and response bodies.
//!
//! Each model type is described by a static [Schema]: the list of its fields,
//! their types, and any irregular wire names. A single generic
//! implementation converts between JSON and [Model] values using these
//! tables, so generated code only declares data.
//!
//! ```
//! # use google_api_gax::model::*;
//! static ACCOUNT: Schema = Schema::new(
//!     "Account",
//!     &[Field::string("id"), Field::string("kind"), Field::string("name")],
//! );
//! static ACCOUNTS: Schema = Schema::new(
//!     "Accounts",
//!     &[
//!         Field::string("etag"),
//!         Field::array("items", FieldType::Object(&ACCOUNT)),
//!         Field::string("kind"),
//!         Field::string("nextPageToken"),
//!     ],
//! )
//! .with_collection_key("items");
//!
//! let json = serde_json::json!({
//!     "kind": "adexchangeseller#accounts",
//!     "items": [{"id": "pub-123", "name": "Example"}],
//!     "unknownField": true,
//! });
//! let model = Model::from_json(&ACCOUNTS, &json)?;
//! assert_eq!(model.len(), 1);
//! assert_eq!(model.items()[0].as_object().and_then(|a| a.get_str("id")), Some("pub-123"));
//! # Ok::<(), ModelError>(())
//! ```

mod message;
mod schema;
mod value;

pub use message::Message;
pub use schema::{Field, FieldType, Schema, Shape};
pub use value::{Model, ModelError, Value};

#[doc(hidden)]
pub use serde as __serde;
#[doc(hidden)]
pub use serde_json as __serde_json;
