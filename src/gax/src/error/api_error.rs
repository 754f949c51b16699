// Copyright 2024 Google LLC
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

/// The error reported by a service in a non-2xx response.
///
/// Google REST APIs wrap errors in a JSON envelope:
///
/// ```norust
/// {
///   "error": {
///     "code": 404,
///     "message": "Account not found: 12345",
///     "errors": [{"domain": "global", "reason": "notFound", "message": "..."}]
///   }
/// }
/// ```
///
/// When the body is not such an envelope the message contains the body text,
/// and `details` is empty.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ApiError {
    /// The HTTP status code of the response.
    #[serde(rename = "code")]
    pub status_code: u16,

    /// A developer-facing message describing the error.
    pub message: String,

    /// Additional information about the error, one entry per problem found.
    #[serde(rename = "errors", default)]
    pub details: Vec<ErrorDetail>,
}

impl ApiError {
    pub fn new<T: Into<String>>(status_code: u16, message: T) -> Self {
        Self {
            status_code,
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// Sets the value of [details][ApiError::details].
    pub fn set_details<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ErrorDetail>,
    {
        self.details = v.into_iter().map(|d| d.into()).collect();
        self
    }

    /// Parses the response body, falling back to the body text.
    ///
    /// The status code of the response always wins over any `code` found in
    /// the payload.
    pub fn from_response(status_code: u16, body: &[u8]) -> Self {
        #[derive(serde::Deserialize)]
        struct Envelope {
            error: ApiError,
        }
        match serde_json::from_slice::<Envelope>(body) {
            Ok(envelope) => Self {
                status_code,
                ..envelope.error
            },
            Err(_) => Self::new(status_code, String::from_utf8_lossy(body)),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}) {}", self.status_code, self.message)
    }
}

/// One entry in the `errors` list of an [ApiError].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ErrorDetail {
    pub domain: Option<String>,
    pub reason: Option<String>,
    pub message: Option<String>,
    pub location: Option<String>,
    pub location_type: Option<String>,
    pub extended_help: Option<String>,
}

impl ErrorDetail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_domain<V: Into<String>>(mut self, v: V) -> Self {
        self.domain = Some(v.into());
        self
    }

    pub fn set_reason<V: Into<String>>(mut self, v: V) -> Self {
        self.reason = Some(v.into());
        self
    }

    pub fn set_message<V: Into<String>>(mut self, v: V) -> Self {
        self.message = Some(v.into());
        self
    }

    pub fn set_location<V: Into<String>>(mut self, v: V) -> Self {
        self.location = Some(v.into());
        self
    }

    pub fn set_location_type<V: Into<String>>(mut self, v: V) -> Self {
        self.location_type = Some(v.into());
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn from_envelope() {
        let body = json!({"error": {
            "code": 400,
            "message": "Invalid value for startDate",
            "errors": [{
                "domain": "global",
                "reason": "invalid",
                "message": "Invalid value for startDate",
                "location": "startDate",
                "locationType": "parameter",
            }]
        }});
        let got = ApiError::from_response(400, body.to_string().as_bytes());
        let want = ApiError::new(400, "Invalid value for startDate").set_details([
            ErrorDetail::new()
                .set_domain("global")
                .set_reason("invalid")
                .set_message("Invalid value for startDate")
                .set_location("startDate")
                .set_location_type("parameter"),
        ]);
        assert_eq!(got, want);
    }

    #[test]
    fn envelope_without_details() {
        let body = json!({"error": {"code": 503, "message": "try again"}});
        let got = ApiError::from_response(503, body.to_string().as_bytes());
        assert_eq!(got, ApiError::new(503, "try again"));
    }

    #[test]
    fn status_code_wins() {
        let body = json!({"error": {"code": 400, "message": "mismatched"}});
        let got = ApiError::from_response(404, body.to_string().as_bytes());
        assert_eq!(got.status_code, 404);
    }

    #[test]
    fn raw_body() {
        let got = ApiError::from_response(502, b"<html>Bad Gateway</html>");
        assert_eq!(got, ApiError::new(502, "<html>Bad Gateway</html>"));
        assert_eq!(got.to_string(), "(502) <html>Bad Gateway</html>");
    }
}
