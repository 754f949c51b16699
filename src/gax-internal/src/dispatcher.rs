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

//! Turns a [PendingCall] into exactly one HTTP request, and the response into
//! a model.

use crate::api_header::{DEFAULT_API_CLIENT, X_GOOG_API_CLIENT, XGoogApiClient};
use crate::observability::{create_call_span, record_call_result};
use bytes::Bytes;
use gax::Result;
use gax::descriptor::Location;
use gax::error::binding::BindingError;
use gax::error::{ApiError, Error};
use gax::model::Message;
use gax::paginator::Paginator;
use gax::params::is_standard;
use gax::resource::PendingCall;
use gax::service::ServiceRoot;
use gax::transport::{HttpRequest, HttpResponse, Transport};
use http::header::{CONTENT_TYPE, HeaderValue, USER_AGENT};
use http::{Method, StatusCode};
use std::sync::Arc;
use tracing::{Instrument, Span};

const PAGE_TOKEN: &str = "pageToken";

/// Sends the calls of one service.
///
/// The dispatcher holds no mutable state, clones are cheap and share the
/// service definition and the transport.
#[derive(Clone, Debug)]
pub struct CallDispatcher {
    service: Arc<ServiceRoot>,
    transport: Transport,
    base_url: String,
    tracing: bool,
    user_agent: Option<String>,
    api_client: String,
}

impl CallDispatcher {
    pub fn new(service: Arc<ServiceRoot>, transport: Transport) -> Self {
        let base_url = service.base_url();
        Self {
            service,
            transport,
            base_url,
            tracing: false,
            user_agent: None,
            api_client: DEFAULT_API_CLIENT.header_value(),
        }
    }

    /// Replaces the root URL of the service.
    pub fn with_endpoint<T: AsRef<str>>(mut self, root_url: T) -> Self {
        let root_url = root_url.as_ref();
        let separator = if root_url.ends_with('/') { "" } else { "/" };
        self.base_url = format!("{root_url}{separator}{}", self.service.service_path());
        self
    }

    pub fn with_tracing(mut self, v: bool) -> Self {
        self.tracing = v;
        self
    }

    /// The default `user-agent` header, requests can override it with
    /// [RequestOptions::set_user_agent][gax::options::RequestOptions::set_user_agent].
    pub fn with_user_agent<T: Into<String>>(mut self, v: T) -> Self {
        self.user_agent = Some(v.into());
        self
    }

    pub fn with_api_client(mut self, v: &XGoogApiClient) -> Self {
        self.api_client = v.header_value();
        self
    }

    pub fn service(&self) -> &Arc<ServiceRoot> {
        &self.service
    }

    /// The prefix of all request URLs: the root URL plus the service path.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Validates the call and computes the HTTP request, without sending it.
    pub fn prepare(&self, call: &PendingCall) -> Result<HttpRequest> {
        let descriptor = call.descriptor();
        let params = call.params();

        for (name, _) in descriptor.parameters().filter(|(_, spec)| spec.required) {
            match params.get(name) {
                None => return Err(BindingError::MissingParameter(name.to_string()).into()),
                // An empty list would send no key at all.
                Some(value) if value.wire_values().is_empty() => {
                    return Err(BindingError::EmptyValue(name.to_string()).into());
                }
                Some(_) => {}
            }
        }
        for (name, value) in params.iter() {
            match descriptor.parameter(name) {
                Some(spec) if value.is_list() && !spec.repeated => {
                    return Err(BindingError::NotRepeated(name.to_string()).into());
                }
                Some(_) => {}
                None if is_standard(name) => {}
                None => {
                    return Err(BindingError::UnknownParameter {
                        method: descriptor.id().to_string(),
                        name: name.to_string(),
                    }
                    .into());
                }
            }
        }

        let path = descriptor.path().expand(|name| params.get(name))?;
        let mut url = url::Url::parse(&format!("{}{path}", self.base_url)).map_err(Error::other)?;

        let standard = call.options().standard_parameters();
        let query = params
            .iter()
            .filter(|(name, _)| {
                descriptor
                    .parameter(name)
                    .is_none_or(|spec| spec.location == Location::Query)
            })
            .chain(standard.iter().filter(|(name, _)| !params.contains(name)))
            .flat_map(|(name, value)| {
                value
                    .wire_values()
                    .into_iter()
                    .map(move |v| (name.to_string(), v))
            })
            .collect::<Vec<_>>();
        // An empty `query_pairs_mut()` would leave a trailing `?`.
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        let mut request = HttpRequest::new(Method::from(descriptor.http_method()), url.as_str());
        request.headers.insert(
            X_GOOG_API_CLIENT,
            HeaderValue::from_str(&self.api_client).map_err(Error::ser)?,
        );
        if let Some(user_agent) = call.options().user_agent().as_ref().or(self.user_agent.as_ref()) {
            request.headers.insert(
                USER_AGENT,
                HeaderValue::from_str(user_agent).map_err(Error::ser)?,
            );
        }
        if let Some(body) = call.body() {
            let body = serde_json::to_vec(body).map_err(Error::ser)?;
            request.body = Some(Bytes::from(body));
            request
                .headers
                .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        request.scopes = if descriptor.scopes().is_empty() {
            self.service.scopes().iter().cloned().collect()
        } else {
            descriptor.scopes().to_vec()
        };
        request.timeout = *call.options().attempt_timeout();
        Ok(request)
    }

    /// Sends the call and decodes the response as `T`.
    ///
    /// A `204 No Content` response yields an empty `T`. Any other response
    /// must contain a JSON object matching the schema of `T`.
    pub async fn execute<T: Message>(&self, call: PendingCall) -> Result<T> {
        let response = self.send(&call).await?;
        if response.status == StatusCode::NO_CONTENT {
            return Ok(T::empty());
        }
        let json = serde_json::from_slice::<serde_json::Value>(&response.body)
            .map_err(Error::deser)?;
        T::from_json(&json).map_err(Error::deser)
    }

    /// Sends the call, discarding any response body.
    pub async fn execute_void(&self, call: PendingCall) -> Result<()> {
        self.send(&call).await.map(|_| ())
    }

    /// Sends the call and returns the response body as-is.
    ///
    /// Methods supporting media download receive `alt=media`, unless the call
    /// sets `alt` already.
    pub async fn execute_raw(&self, mut call: PendingCall) -> Result<Bytes> {
        if call.descriptor().supports_media_download() && !call.params().contains("alt") {
            call.params_mut().insert("alt", "media");
        }
        self.send(&call).await.map(|r| r.body)
    }

    /// Streams all the pages of a list method.
    ///
    /// Each page re-issues `call` with `pageToken` set to the
    /// `nextPageToken` of the previous page. The stream ends after the first
    /// page without a token, or after the first error.
    pub fn paginate<T: Message>(&self, call: PendingCall) -> Paginator<T, Error> {
        let seed = call.params().get(PAGE_TOKEN).map(|v| v.to_string());
        let dispatcher = self.clone();
        let execute = move |token: Option<String>| {
            let dispatcher = dispatcher.clone();
            let mut call = call.clone();
            async move {
                if call.descriptor().parameter(PAGE_TOKEN).is_none() {
                    return Err(Error::from(BindingError::UnknownParameter {
                        method: call.descriptor().id().to_string(),
                        name: PAGE_TOKEN.to_string(),
                    }));
                }
                match token {
                    Some(t) => call.params_mut().insert(PAGE_TOKEN, t),
                    None => call.params_mut().remove(PAGE_TOKEN),
                };
                dispatcher.execute::<T>(call).await
            }
        };
        Paginator::new(seed, execute)
    }

    async fn send(&self, call: &PendingCall) -> Result<HttpResponse> {
        let request = self.prepare(call).inspect_err(|e| {
            tracing::debug!(method = call.descriptor().id(), "rejected call: {e}");
        })?;
        let span = if self.tracing {
            create_call_span(&self.service, call.descriptor(), &request)
        } else {
            Span::none()
        };
        let result = self
            .transport
            .execute(request)
            .instrument(span.clone())
            .await
            .and_then(check_status);
        record_call_result(&span, result.as_ref());
        result
    }
}

fn check_status(response: HttpResponse) -> Result<HttpResponse> {
    if response.status.is_success() {
        return Ok(response);
    }
    let error = ApiError::from_response(response.status.as_u16(), &response.body);
    Err(Error::api(error, response.headers, response.body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::descriptor::{EndpointDescriptor, HttpMethod, ParameterSpec, ParameterType};
    use gax::options::RequestOptions;
    use gax::params::Params;
    use gax::resource::ResourceBinding;
    use http::HeaderMap;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    type TestResult = anyhow::Result<()>;

    #[derive(Debug)]
    struct Unreachable;

    impl gax::transport::HttpTransport for Unreachable {
        async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse> {
            Err(Error::other("prepare() never sends requests"))
        }
    }

    fn service() -> anyhow::Result<Arc<ServiceRoot>> {
        let get = EndpointDescriptor::new("get", HttpMethod::Get, "accounts/{accountId}")?
            .with_id("adexchangeseller.accounts.get")
            .with_parameter("accountId", ParameterSpec::path());
        let list = EndpointDescriptor::new("list", HttpMethod::Get, "accounts")?
            .with_id("adexchangeseller.accounts.list")
            .with_parameter("maxResults", ParameterSpec::query(ParameterType::Integer))
            .with_parameter("pageToken", ParameterSpec::query(ParameterType::String));
        let generate = EndpointDescriptor::new("generate", HttpMethod::Get, "accounts/{accountId}/reports")?
            .with_id("adexchangeseller.accounts.reports.generate")
            .with_parameter("accountId", ParameterSpec::path())
            .with_parameter("startDate", ParameterSpec::query(ParameterType::String).required())
            .with_parameter("endDate", ParameterSpec::query(ParameterType::String).required())
            .with_parameter("metric", ParameterSpec::query(ParameterType::String).repeated())
            .with_parameter("locale", ParameterSpec::query(ParameterType::String))
            .with_parameter("useTimezoneReporting", ParameterSpec::query(ParameterType::Boolean));
        let insert = EndpointDescriptor::new("insert", HttpMethod::Post, "{projectId}/templates")?
            .with_id("manager.templates.insert")
            .with_parameter("projectId", ParameterSpec::path())
            .with_request("Template")
            .with_scopes(["https://www.googleapis.com/auth/ndev.cloudman"]);
        let service = ServiceRoot::builder("adexchangeseller", "v2.0")
            .with_service_path("adexchangeseller/v2.0/")
            .with_scope("https://www.googleapis.com/auth/adexchange.seller")
            .with_resource(
                ResourceBinding::new("accounts")
                    .with_method(get)
                    .with_method(list)
                    .with_method(insert)
                    .with_resource(ResourceBinding::new("reports").with_method(generate)),
            )
            .build()?;
        Ok(Arc::new(service))
    }

    fn dispatcher() -> anyhow::Result<CallDispatcher> {
        Ok(CallDispatcher::new(service()?, Transport::from(Unreachable)))
    }

    #[test]
    fn path_only() -> TestResult {
        let dispatcher = dispatcher()?;
        let call = dispatcher
            .service()
            .invoke("accounts", "get", [("accountId", "12345")].into())?;
        let request = dispatcher.prepare(&call)?;
        assert_eq!(request.method, Method::GET);
        assert_eq!(
            request.url,
            "https://www.googleapis.com/adexchangeseller/v2.0/accounts/12345"
        );
        assert!(request.body.is_none(), "{request:?}");
        assert_eq!(
            request.scopes,
            vec!["https://www.googleapis.com/auth/adexchange.seller".to_string()]
        );
        assert!(request.headers.contains_key(X_GOOG_API_CLIENT), "{request:?}");
        assert!(!request.headers.contains_key(USER_AGENT), "{request:?}");
        Ok(())
    }

    #[test]
    fn path_is_encoded() -> TestResult {
        let dispatcher = dispatcher()?;
        let call = dispatcher
            .service()
            .invoke("accounts", "get", [("accountId", "a/b c")].into())?;
        let request = dispatcher.prepare(&call)?;
        assert_eq!(
            request.url,
            "https://www.googleapis.com/adexchangeseller/v2.0/accounts/a%2Fb%20c"
        );
        Ok(())
    }

    #[test]
    fn absent_optional_parameters_are_omitted() -> TestResult {
        let dispatcher = dispatcher()?;
        let call = dispatcher
            .service()
            .invoke("accounts", "list", [("pageToken", "abc")].into())?;
        let request = dispatcher.prepare(&call)?;
        let url = url::Url::parse(&request.url)?;
        assert_eq!(url.query(), Some("pageToken=abc"));
        Ok(())
    }

    #[test]
    fn repeated_keys() -> TestResult {
        let dispatcher = dispatcher()?;
        let params = Params::new()
            .set("accountId", "12345")
            .set("startDate", "2024-01-01")
            .set("endDate", "2024-01-31")
            .set("metric", ["EARNINGS", "CLICKS", "PAGE_VIEWS"])
            .set("useTimezoneReporting", true);
        let call = dispatcher
            .service()
            .invoke("accounts.reports", "generate", params)?;
        let request = dispatcher.prepare(&call)?;
        let url = url::Url::parse(&request.url)?;
        assert_eq!(url.path(), "/adexchangeseller/v2.0/accounts/12345/reports");
        let pairs = url.query_pairs().into_owned().collect::<Vec<_>>();
        let metrics = pairs
            .iter()
            .filter(|(k, _)| k == "metric")
            .map(|(_, v)| v.as_str())
            .collect::<Vec<_>>();
        assert_eq!(metrics, vec!["EARNINGS", "CLICKS", "PAGE_VIEWS"]);
        assert!(
            pairs.contains(&("useTimezoneReporting".into(), "true".into())),
            "{pairs:?}"
        );
        assert!(!pairs.iter().any(|(k, _)| k == "accountId"), "{pairs:?}");
        Ok(())
    }

    #[test_case("startDate")]
    #[test_case("endDate")]
    #[test_case("accountId")]
    fn missing_required(missing: &str) -> TestResult {
        let dispatcher = dispatcher()?;
        let mut params = Params::new()
            .set("accountId", "12345")
            .set("startDate", "2024-01-01")
            .set("endDate", "2024-01-31");
        params.remove(missing);
        let call = dispatcher
            .service()
            .invoke("accounts.reports", "generate", params)?;
        let err = dispatcher.prepare(&call).unwrap_err();
        assert!(err.is_missing_parameter(), "{err:?}");
        assert_eq!(
            err.binding_error().and_then(BindingError::parameter),
            Some(missing)
        );
        Ok(())
    }

    #[test]
    fn not_repeated() -> TestResult {
        let dispatcher = dispatcher()?;
        let params = Params::new()
            .set("accountId", "12345")
            .set("startDate", "2024-01-01")
            .set("endDate", "2024-01-31")
            .set("locale", ["en", "fr"]);
        let call = dispatcher
            .service()
            .invoke("accounts.reports", "generate", params)?;
        let err = dispatcher.prepare(&call).unwrap_err();
        assert!(
            matches!(err.binding_error(), Some(BindingError::NotRepeated(n)) if n == "locale"),
            "{err:?}"
        );
        Ok(())
    }

    #[test]
    fn unknown_parameter_added_after_invoke() -> TestResult {
        let dispatcher = dispatcher()?;
        let mut call = dispatcher
            .service()
            .invoke("accounts", "get", [("accountId", "12345")].into())?;
        call.params_mut().insert("colour", "blue");
        let err = dispatcher.prepare(&call).unwrap_err();
        assert!(
            matches!(err.binding_error(), Some(BindingError::UnknownParameter { name, .. }) if name == "colour"),
            "{err:?}"
        );
        Ok(())
    }

    #[test]
    fn empty_path_value() -> TestResult {
        let dispatcher = dispatcher()?;
        let call = dispatcher
            .service()
            .invoke("accounts", "get", [("accountId", "")].into())?;
        let err = dispatcher.prepare(&call).unwrap_err();
        assert!(
            matches!(err.binding_error(), Some(BindingError::EmptyValue(n)) if n == "accountId"),
            "{err:?}"
        );
        Ok(())
    }

    #[test_case(".")]
    #[test_case("..")]
    fn dot_segment_path_value(value: &str) -> TestResult {
        let dispatcher = dispatcher()?;
        let call = dispatcher.service().invoke(
            "accounts.reports",
            "generate",
            Params::new()
                .set("accountId", value)
                .set("startDate", "2024-01-01")
                .set("endDate", "2024-01-31"),
        )?;
        let err = dispatcher.prepare(&call).unwrap_err();
        assert!(
            matches!(err.binding_error(), Some(BindingError::InvalidValue(n)) if n == "accountId"),
            "{err:?}"
        );
        Ok(())
    }

    #[test]
    fn required_empty_list() -> TestResult {
        let dispatcher = dispatcher()?;
        let call = dispatcher.service().invoke(
            "accounts.reports",
            "generate",
            Params::new()
                .set("accountId", "12345")
                .set("startDate", Vec::<&str>::new())
                .set("endDate", "2024-01-31"),
        )?;
        let err = dispatcher.prepare(&call).unwrap_err();
        assert!(
            matches!(err.binding_error(), Some(BindingError::EmptyValue(n)) if n == "startDate"),
            "{err:?}"
        );
        Ok(())
    }

    #[test]
    fn standard_parameters_and_options() -> TestResult {
        let dispatcher = dispatcher()?.with_user_agent("default-agent/1.0");
        let mut options = RequestOptions::default();
        options.set_fields("items(id,name)");
        options.set_quota_user("user-a");
        options.set_user_agent("my-agent/2.0");
        options.set_attempt_timeout(std::time::Duration::from_secs(5));
        let params = Params::new().set("quotaUser", "user-b");
        let call = dispatcher
            .service()
            .invoke("accounts", "list", params)?
            .with_options(options);
        let request = dispatcher.prepare(&call)?;
        let url = url::Url::parse(&request.url)?;
        let pairs = url.query_pairs().into_owned().collect::<Vec<_>>();
        assert_eq!(
            pairs,
            vec![
                ("quotaUser".to_string(), "user-b".to_string()),
                ("fields".to_string(), "items(id,name)".to_string()),
            ]
        );
        assert_eq!(
            request.headers.get(USER_AGENT),
            Some(&HeaderValue::from_static("my-agent/2.0"))
        );
        assert_eq!(request.timeout, Some(std::time::Duration::from_secs(5)));
        Ok(())
    }

    #[test]
    fn default_user_agent() -> TestResult {
        let dispatcher = dispatcher()?.with_user_agent("default-agent/1.0");
        let call = dispatcher.service().invoke("accounts", "list", Params::new())?;
        let request = dispatcher.prepare(&call)?;
        assert_eq!(
            request.headers.get(USER_AGENT),
            Some(&HeaderValue::from_static("default-agent/1.0"))
        );
        Ok(())
    }

    #[test]
    fn body_and_method_scopes() -> TestResult {
        let dispatcher = dispatcher()?;
        let call = dispatcher
            .service()
            .invoke("accounts", "insert", [("projectId", "my-project")].into())?
            .with_json_body(serde_json::json!({"name": "web"}));
        let request = dispatcher.prepare(&call)?;
        assert_eq!(request.method, Method::POST);
        assert_eq!(
            request.url,
            "https://www.googleapis.com/adexchangeseller/v2.0/my-project/templates"
        );
        assert_eq!(
            request.headers.get(CONTENT_TYPE),
            Some(&HeaderValue::from_static("application/json"))
        );
        let body = request.body.as_deref().unwrap_or_default();
        assert_eq!(
            serde_json::from_slice::<serde_json::Value>(body)?,
            serde_json::json!({"name": "web"})
        );
        assert_eq!(
            request.scopes,
            vec!["https://www.googleapis.com/auth/ndev.cloudman".to_string()]
        );
        Ok(())
    }

    #[test_case("http://localhost:8080")]
    #[test_case("http://localhost:8080/")]
    fn with_endpoint(root: &str) -> TestResult {
        let dispatcher = dispatcher()?.with_endpoint(root);
        let call = dispatcher
            .service()
            .invoke("accounts", "get", [("accountId", "1")].into())?;
        let request = dispatcher.prepare(&call)?;
        assert_eq!(
            request.url,
            "http://localhost:8080/adexchangeseller/v2.0/accounts/1"
        );
        Ok(())
    }

    #[test]
    fn api_client_header() -> TestResult {
        static CLIENT: XGoogApiClient = XGoogApiClient {
            name: "google-api-adexchangeseller-v2",
            version: "9.8.7",
        };
        let dispatcher = dispatcher()?.with_api_client(&CLIENT);
        let call = dispatcher.service().invoke("accounts", "list", Params::new())?;
        let request = dispatcher.prepare(&call)?;
        let value = request
            .headers
            .get(X_GOOG_API_CLIENT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(value.ends_with("gdcl/9.8.7"), "{value}");
        Ok(())
    }

    #[test]
    fn status_mapping() {
        let ok = check_status(HttpResponse::new(StatusCode::OK, "{}"));
        assert!(ok.is_ok(), "{ok:?}");

        let mut headers = HeaderMap::new();
        headers.insert("x-test", HeaderValue::from_static("a"));
        let response = HttpResponse {
            status: StatusCode::FORBIDDEN,
            headers: headers.clone(),
            body: Bytes::from_static(
                br#"{"error": {"code": 403, "message": "denied", "errors": [{"reason": "forbidden"}]}}"#,
            ),
        };
        let err = check_status(response).unwrap_err();
        assert_eq!(err.http_status_code(), Some(403));
        assert_eq!(err.http_headers(), Some(&headers));
        let api = err.api_error().cloned().unwrap_or_else(|| ApiError::new(0, ""));
        assert_eq!(api.message, "denied");
        assert_eq!(api.details.len(), 1);
    }
}
