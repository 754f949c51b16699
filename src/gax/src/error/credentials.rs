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

use std::error::Error;
use std::fmt::{Debug, Display, Formatter, Result};
use std::sync::Arc;

/// Represents an error creating authentication headers.
///
/// Transient errors, such as a token endpoint being temporarily unreachable,
/// may succeed if the call is attempted again.
#[derive(Clone, Debug)]
pub struct CredentialsError {
    transient: bool,
    source: Source,
}

#[derive(Clone, Debug)]
enum Source {
    Message(String),
    Error(Arc<dyn Error + Send + Sync>),
}

impl CredentialsError {
    pub fn new<T: Error + Send + Sync + 'static>(transient: bool, source: T) -> Self {
        Self {
            transient,
            source: Source::Error(Arc::new(source)),
        }
    }

    pub fn from_msg<T: Into<String>>(transient: bool, message: T) -> Self {
        Self {
            transient,
            source: Source::Message(message.into()),
        }
    }

    /// If true, a later attempt to create the headers may succeed.
    pub fn is_transient(&self) -> bool {
        self.transient
    }
}

impl Error for CredentialsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.source {
            Source::Message(_) => None,
            Source::Error(e) => Some(e.as_ref()),
        }
    }
}

impl Display for CredentialsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let retry = if self.transient {
            "but future attempts may succeed"
        } else {
            "and future attempts will not succeed"
        };
        match &self.source {
            Source::Message(m) => write!(f, "cannot create auth headers, {retry}: {m}"),
            Source::Error(e) => write!(f, "cannot create auth headers, {retry}: {e}"),
        }
    }
}
