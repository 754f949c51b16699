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

mod mocks;

#[cfg(test)]
mod tests {
    use super::mocks::*;
    use futures::TryStreamExt;
    use gax::descriptor::{EndpointDescriptor, HttpMethod, ParameterSpec, ParameterType};
    use gax::error::binding::BindingError;
    use gax::params::Params;
    use gax::resource::ResourceBinding;
    use gax::service::ServiceRoot;
    use gax::transport::{HttpRequest, HttpResponse};
    use google_api_gax_internal::dispatcher::CallDispatcher;
    use http::StatusCode;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    type TestResult = anyhow::Result<()>;

    fn query_pairs(request: &HttpRequest) -> Vec<(String, String)> {
        url::Url::parse(&request.url)
            .map(|u| u.query_pairs().into_owned().collect())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn missing_required_parameter_never_sends() -> TestResult {
        let mut mock = MockHttpTransport::new();
        mock.expect_execute().times(0);
        let dispatcher = CallDispatcher::new(service()?, mock.into());

        let params = Params::new()
            .set("accountId", "12345")
            .set("endDate", "2024-01-31");
        let call = dispatcher
            .service()
            .invoke("accounts.reports", "generate", params)?;
        let err = dispatcher.execute::<Report>(call).await.unwrap_err();
        assert!(err.is_missing_parameter(), "{err:?}");
        assert_eq!(
            err.binding_error().and_then(BindingError::parameter),
            Some("startDate")
        );
        Ok(())
    }

    #[tokio::test]
    async fn get_account() -> TestResult {
        let mut mock = MockHttpTransport::new();
        mock.expect_execute()
            .withf(|r| {
                r.method == http::Method::GET
                    && r.url == "https://www.googleapis.com/adexchangeseller/v2.0/accounts/12345"
            })
            .times(1)
            .returning(|_| {
                Ok(HttpResponse::json(&json!({
                    "id": "12345",
                    "kind": "adexchangeseller#account",
                    "name": "Test Account",
                    "unknownField": 42,
                })))
            });
        let dispatcher = CallDispatcher::new(service()?, mock.into());

        let call = dispatcher
            .service()
            .invoke("accounts", "get", [("accountId", "12345")].into())?;
        let account = dispatcher.execute::<Account>(call).await?;
        assert_eq!(account.get_str("id"), Some("12345"));
        assert_eq!(account.get_str("name"), Some("Test Account"));
        assert_eq!(
            account.to_json(),
            json!({"id": "12345", "kind": "adexchangeseller#account", "name": "Test Account"})
        );
        Ok(())
    }

    #[tokio::test]
    async fn repeated_parameter_keys() -> TestResult {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let mut mock = MockHttpTransport::new();
        let save = captured.clone();
        mock.expect_execute().times(1).returning(move |r| {
            save.lock().expect("lock").push(r);
            Ok(HttpResponse::json(&json!({"kind": "adexchangeseller#report"})))
        });
        let dispatcher = CallDispatcher::new(service()?, mock.into());

        let params = Params::new()
            .set("accountId", "12345")
            .set("startDate", "2024-01-01")
            .set("endDate", "2024-01-31")
            .set("metric", ["EARNINGS", "CLICKS", "PAGE_VIEWS"]);
        let call = dispatcher
            .service()
            .invoke("accounts.reports", "generate", params)?;
        let report = dispatcher.execute::<Report>(call).await?;
        assert!(report.get_array("rows").is_none(), "{report:?}");

        let requests = captured.lock().expect("lock");
        assert_eq!(requests.len(), 1);
        let pairs = query_pairs(&requests[0]);
        assert_eq!(pairs.iter().filter(|(k, _)| k == "metric").count(), 3);
        assert!(!requests[0].url.contains("EARNINGS%2CCLICKS"), "{}", requests[0].url);
        Ok(())
    }

    #[tokio::test]
    async fn no_content() -> TestResult {
        let mut mock = MockHttpTransport::new();
        mock.expect_execute()
            .times(1)
            .returning(|_| Ok(HttpResponse::new(StatusCode::NO_CONTENT, "")));
        let dispatcher = CallDispatcher::new(service()?, mock.into());

        let call = dispatcher
            .service()
            .invoke("accounts", "get", [("accountId", "12345")].into())?;
        let account = dispatcher.execute::<Account>(call).await?;
        assert!(account.is_empty(), "{account:?}");
        Ok(())
    }

    #[tokio::test]
    async fn empty_body_is_an_error() -> TestResult {
        let mut mock = MockHttpTransport::new();
        mock.expect_execute()
            .times(1)
            .returning(|_| Ok(HttpResponse::new(StatusCode::OK, "")));
        let dispatcher = CallDispatcher::new(service()?, mock.into());

        let call = dispatcher
            .service()
            .invoke("accounts", "get", [("accountId", "12345")].into())?;
        let err = dispatcher.execute::<Account>(call).await.unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn shape_mismatch() -> TestResult {
        let mut mock = MockHttpTransport::new();
        mock.expect_execute()
            .times(1)
            .returning(|_| Ok(HttpResponse::json(&json!({"id": ["not", "a", "string"]}))));
        let dispatcher = CallDispatcher::new(service()?, mock.into());

        let call = dispatcher
            .service()
            .invoke("accounts", "get", [("accountId", "12345")].into())?;
        let err = dispatcher.execute::<Account>(call).await.unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn api_error() -> TestResult {
        let mut mock = MockHttpTransport::new();
        mock.expect_execute().times(1).returning(|_| {
            let body = json!({"error": {
                "code": 404,
                "message": "Account 12345 not found",
                "errors": [{
                    "domain": "global",
                    "reason": "notFound",
                    "message": "Account 12345 not found",
                }],
            }});
            Ok(HttpResponse::new(StatusCode::NOT_FOUND, body.to_string()))
        });
        let dispatcher = CallDispatcher::new(service()?, mock.into());

        let call = dispatcher
            .service()
            .invoke("accounts", "get", [("accountId", "12345")].into())?;
        let err = dispatcher.execute_void(call).await.unwrap_err();
        assert!(err.is_api(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(404));
        let api = err.api_error().expect("api error details");
        assert_eq!(api.message, "Account 12345 not found");
        assert_eq!(api.details.len(), 1);
        assert_eq!(api.details[0].reason.as_deref(), Some("notFound"));
        Ok(())
    }

    #[tokio::test]
    async fn transport_error_passes_through() -> TestResult {
        let mut mock = MockHttpTransport::new();
        mock.expect_execute()
            .times(1)
            .returning(|_| Err(gax::error::Error::timeout("deadline exceeded")));
        let dispatcher = CallDispatcher::new(service()?, mock.into());

        let call = dispatcher
            .service()
            .invoke("accounts", "get", [("accountId", "12345")].into())?;
        let err = dispatcher.execute::<Account>(call).await.unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn raw_media_download() -> TestResult {
        let mut mock = MockHttpTransport::new();
        mock.expect_execute()
            .withf(|r| r.url.ends_with("?alt=media"))
            .times(1)
            .returning(|_| Ok(HttpResponse::new(StatusCode::OK, "a,b,c\n1,2,3\n")));
        let dispatcher = CallDispatcher::new(service()?, mock.into());

        let call = dispatcher
            .service()
            .invoke("accounts.reports", "download", [("accountId", "12345")].into())?;
        let body = dispatcher.execute_raw(call).await?;
        assert_eq!(body, bytes::Bytes::from_static(b"a,b,c\n1,2,3\n"));
        Ok(())
    }

    #[tokio::test]
    async fn paginate() -> TestResult {
        let mut mock = MockHttpTransport::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_execute()
            .withf(|r| !r.url.contains("pageToken"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Ok(HttpResponse::json(&json!({
                    "items": [{"id": "a"}, {"id": "b"}],
                    "nextPageToken": "page-2",
                })))
            });
        mock.expect_execute()
            .withf(|r| r.url.contains("pageToken=page-2"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Ok(HttpResponse::json(&json!({
                    "items": [{"id": "c"}],
                    "nextPageToken": "",
                })))
            });
        let dispatcher = CallDispatcher::new(service()?, mock.into());

        let call = dispatcher
            .service()
            .invoke("accounts", "list", [("maxResults", 2)].into())?;
        let pages = dispatcher
            .paginate::<Accounts>(call)
            .try_collect::<Vec<_>>()
            .await?;
        let ids = pages
            .iter()
            .flat_map(|p| p.items_as::<Account>())
            .filter_map(|a| a.get_str("id").map(str::to_string))
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["a", "b", "c"]);
        Ok(())
    }

    #[tokio::test]
    async fn paginate_stops_on_error() -> TestResult {
        let mut mock = MockHttpTransport::new();
        mock.expect_execute().times(1).returning(|_| {
            Ok(HttpResponse::new(
                StatusCode::SERVICE_UNAVAILABLE,
                "try again later",
            ))
        });
        let dispatcher = CallDispatcher::new(service()?, mock.into());

        let call = dispatcher
            .service()
            .invoke("accounts", "list", Params::new())?;
        let mut pages = dispatcher.paginate::<Accounts>(call);
        let err = pages.next().await.expect("one item").unwrap_err();
        assert_eq!(err.http_status_code(), Some(503));
        assert_eq!(
            err.api_error().map(|e| e.message.as_str()),
            Some("try again later")
        );
        assert!(pages.next().await.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn paginate_requires_page_token() -> TestResult {
        let mut mock = MockHttpTransport::new();
        mock.expect_execute().times(0);
        let dispatcher = CallDispatcher::new(service()?, mock.into());

        let call = dispatcher
            .service()
            .invoke("accounts", "get", [("accountId", "12345")].into())?;
        let mut pages = dispatcher.paginate::<Accounts>(call);
        let err = pages.next().await.expect("one item").unwrap_err();
        assert!(
            matches!(err.binding_error(), Some(BindingError::UnknownParameter { name, .. }) if name == "pageToken"),
            "{err:?}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn dot_segment_never_sends() -> TestResult {
        for value in [".", ".."] {
            let mut mock = MockHttpTransport::new();
            mock.expect_execute().times(0);
            let dispatcher = CallDispatcher::new(service()?, mock.into());

            let params = Params::new()
                .set("accountId", value)
                .set("startDate", "2024-01-01")
                .set("endDate", "2024-01-31");
            let call = dispatcher
                .service()
                .invoke("accounts.reports", "generate", params)?;
            let err = dispatcher.execute::<Report>(call).await.unwrap_err();
            assert!(
                matches!(err.binding_error(), Some(BindingError::InvalidValue(n)) if n == "accountId"),
                "{value}: {err:?}"
            );
        }
        Ok(())
    }

    #[tokio::test]
    async fn required_empty_list_never_sends() -> TestResult {
        let generate =
            EndpointDescriptor::new("generate", HttpMethod::Get, "accounts/{accountId}/reports")?
                .with_id("adexchangeseller.accounts.reports.generate")
                .with_parameter("accountId", ParameterSpec::path())
                .with_parameter(
                    "metric",
                    ParameterSpec::query(ParameterType::String)
                        .required()
                        .repeated(),
                )
                .with_response("Report");
        let service = ServiceRoot::builder("adexchangeseller", "v2.0")
            .with_service_path("adexchangeseller/v2.0/")
            .with_resource(ResourceBinding::new("reports").with_method(generate))
            .build()?;
        let mut mock = MockHttpTransport::new();
        mock.expect_execute().times(0);
        let dispatcher = CallDispatcher::new(Arc::new(service), mock.into());

        let params = Params::new()
            .set("accountId", "12345")
            .set("metric", Vec::<&str>::new());
        let call = dispatcher.service().invoke("reports", "generate", params)?;
        let err = dispatcher.execute::<Report>(call).await.unwrap_err();
        assert!(
            matches!(err.binding_error(), Some(BindingError::EmptyValue(n)) if n == "metric"),
            "{err:?}"
        );
        Ok(())
    }
}
