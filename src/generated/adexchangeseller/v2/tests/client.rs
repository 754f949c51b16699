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

#[cfg(test)]
mod tests {
    use futures::TryStreamExt;
    use gax::params::Params;
    use gax::transport::{HttpRequest, HttpResponse, HttpTransport};
    use google_api_adexchangeseller_v2::client::AdExchangeSeller;
    use google_api_adexchangeseller_v2::model;
    use google_api_adexchangeseller_v2::options::*;
    use http::StatusCode;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    type TestResult = anyhow::Result<()>;

    mockall::mock! {
        #[derive(Debug)]
        Transport {}

        impl HttpTransport for Transport {
            async fn execute(&self, request: HttpRequest) -> gax::Result<HttpResponse>;
        }
    }

    type Captured = Arc<Mutex<Vec<HttpRequest>>>;

    /// A transport recording every request and replying with `body`.
    fn recording(body: serde_json::Value) -> (MockTransport, Captured) {
        let captured = Captured::default();
        let save = captured.clone();
        let mut mock = MockTransport::new();
        mock.expect_execute().returning(move |r| {
            save.lock().expect("lock is never poisoned").push(r);
            Ok(HttpResponse::json(&body))
        });
        (mock, captured)
    }

    fn client(mock: MockTransport) -> anyhow::Result<AdExchangeSeller> {
        Ok(AdExchangeSeller::builder().with_transport(mock).build()?)
    }

    fn query_pairs(request: &HttpRequest) -> Vec<(String, String)> {
        url::Url::parse(&request.url)
            .map(|u| u.query_pairs().into_owned().collect())
            .unwrap_or_default()
    }

    fn path(request: &HttpRequest) -> String {
        url::Url::parse(&request.url)
            .map(|u| u.path().to_string())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn every_method_expands() -> TestResult {
        let mut mock = MockTransport::new();
        mock.expect_execute().times(0);
        let client = client(mock)?;
        let service = client.dispatcher().service();
        let descriptors = service.descriptors();
        assert_eq!(descriptors.len(), 14);
        for (resource, descriptor) in descriptors {
            let params = descriptor
                .parameters()
                .filter(|(_, spec)| spec.required)
                .map(|(name, _)| (name.to_string(), "value"))
                .collect::<Params>();
            let call = service.invoke(&resource, descriptor.name(), params)?;
            let request = client.dispatcher().prepare(&call)?;
            assert!(
                !request.url.contains('{') && !request.url.contains('}'),
                "{}: {}",
                descriptor.id(),
                request.url
            );
            assert!(
                request
                    .url
                    .starts_with("https://www.googleapis.com/adexchangeseller/v2.0/accounts"),
                "{}",
                request.url
            );
        }
        Ok(())
    }

    #[tokio::test]
    async fn get_account() -> TestResult {
        let (mock, captured) = recording(json!({
            "id": "12345",
            "kind": "adexchangeseller#account",
            "name": "Test Account",
        }));
        let client = client(mock)?;
        let account = client.accounts().get("12345").await?;
        assert_eq!(account.get_str("name"), Some("Test Account"));

        let requests = captured.lock().expect("lock is never poisoned");
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, http::Method::GET);
        assert_eq!(
            requests[0].url,
            "https://www.googleapis.com/adexchangeseller/v2.0/accounts/12345"
        );
        let api_client = requests[0]
            .headers
            .get("x-goog-api-client")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(
            api_client.ends_with(&format!("gdcl/{}", env!("CARGO_PKG_VERSION"))),
            "{api_client}"
        );
        assert_eq!(
            requests[0].scopes,
            vec![
                google_api_adexchangeseller_v2::scopes::ADEXCHANGE_SELLER.to_string(),
                google_api_adexchangeseller_v2::scopes::ADEXCHANGE_SELLER_READONLY.to_string(),
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn list_accounts() -> TestResult {
        let (mock, captured) = recording(json!({
            "kind": "adexchangeseller#accounts",
            "items": [
                {"id": "1", "name": "first"},
                {"id": "2", "name": "second"},
            ],
        }));
        let client = client(mock)?;
        let accounts = client
            .accounts()
            .list(ListAccountsOptions::new().set_max_results(2))
            .await?;
        let names = accounts
            .items_as::<model::Account>()
            .filter_map(|a| a.get_str("name").map(str::to_string))
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(accounts.next_page_token(), None);

        let requests = captured.lock().expect("lock is never poisoned");
        assert_eq!(
            query_pairs(&requests[0]),
            vec![("maxResults".to_string(), "2".to_string())]
        );
        Ok(())
    }

    #[tokio::test]
    async fn generate_report() -> TestResult {
        let (mock, captured) = recording(json!({
            "kind": "adexchangeseller#report",
            "totalMatchedRows": "1",
            "headers": [
                {"name": "DATE", "type": "DIMENSION"},
                {"name": "EARNINGS", "type": "METRIC_CURRENCY", "currency": "USD"},
            ],
            "rows": [["2024-01-01", "12.34"]],
        }));
        let client = client(mock)?;
        let options = GenerateReportOptions::new()
            .set_metric(["EARNINGS", "CLICKS"])
            .set_dimension(["DATE"])
            .set_sort(["+DATE"]);
        let report = client
            .accounts()
            .reports()
            .generate("12345", "2024-01-01", "2024-01-31", options)
            .await?;
        assert_eq!(report.get_str("totalMatchedRows"), Some("1"));
        let headers = report
            .get_array("headers")
            .map(|h| h.len())
            .unwrap_or_default();
        assert_eq!(headers, 2);

        let requests = captured.lock().expect("lock is never poisoned");
        assert_eq!(path(&requests[0]), "/adexchangeseller/v2.0/accounts/12345/reports");
        let pairs = query_pairs(&requests[0]);
        let values = |key: &str| {
            pairs
                .iter()
                .filter(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
                .collect::<Vec<_>>()
        };
        assert_eq!(values("metric"), vec!["EARNINGS", "CLICKS"]);
        assert_eq!(values("dimension"), vec!["DATE"]);
        assert_eq!(values("sort"), vec!["+DATE"]);
        assert_eq!(values("startDate"), vec!["2024-01-01"]);
        assert_eq!(values("endDate"), vec!["2024-01-31"]);
        assert!(values("alt").is_empty(), "{pairs:?}");
        Ok(())
    }

    #[tokio::test]
    async fn generate_report_csv() -> TestResult {
        let mut mock = MockTransport::new();
        mock.expect_execute()
            .withf(|r| r.url.contains("alt=csv") && !r.url.contains("alt=media"))
            .times(1)
            .returning(|_| Ok(HttpResponse::new(StatusCode::OK, "DATE,EARNINGS\n2024-01-01,12.34\n")));
        let client = client(mock)?;
        let csv = client
            .accounts()
            .reports()
            .generate_csv("12345", "2024-01-01", "2024-01-31", GenerateReportOptions::new())
            .await?;
        assert_eq!(csv.as_ref(), b"DATE,EARNINGS\n2024-01-01,12.34\n");
        Ok(())
    }

    #[tokio::test]
    async fn saved_reports() -> TestResult {
        let (mock, captured) = recording(json!({"kind": "adexchangeseller#report"}));
        let client = client(mock)?;
        let _ = client
            .accounts()
            .reports()
            .saved()
            .generate(
                "12345",
                "report-1",
                GenerateSavedReportOptions::new().set_locale("fr_FR"),
            )
            .await?;
        let _ = client
            .accounts()
            .reports()
            .saved()
            .list("12345", ListSavedReportsOptions::new())
            .await?;

        let requests = captured.lock().expect("lock is never poisoned");
        let got = requests.iter().map(path).collect::<Vec<_>>();
        assert_eq!(
            got,
            vec![
                "/adexchangeseller/v2.0/accounts/12345/reports/report-1",
                "/adexchangeseller/v2.0/accounts/12345/reports/saved",
            ]
        );
        assert_eq!(
            query_pairs(&requests[0]),
            vec![("locale".to_string(), "fr_FR".to_string())]
        );
        Ok(())
    }

    #[tokio::test]
    async fn nested_resources() -> TestResult {
        let (mock, captured) = recording(json!({}));
        let client = client(mock)?;
        let accounts = client.accounts();
        let _ = accounts.adclients().list("1", ListAdClientsOptions::new()).await?;
        let _ = accounts.alerts().list("1", ListAlertsOptions::new()).await?;
        let _ = accounts.customchannels().get("1", "ca-pub-2", "3").await?;
        let _ = accounts
            .customchannels()
            .list("1", "ca-pub-2", ListCustomChannelsOptions::new())
            .await?;
        let _ = accounts.metadata().dimensions().list("1").await?;
        let _ = accounts.metadata().metrics().list("1").await?;
        let _ = accounts.preferreddeals().get("1", "42").await?;
        let _ = accounts.preferreddeals().list("1").await?;
        let _ = accounts
            .urlchannels()
            .list("1", "ca-pub-2", ListUrlChannelsOptions::new())
            .await?;

        let requests = captured.lock().expect("lock is never poisoned");
        let got = requests.iter().map(path).collect::<Vec<_>>();
        let prefix = "/adexchangeseller/v2.0/accounts/1";
        let want = [
            "/adclients",
            "/alerts",
            "/adclients/ca-pub-2/customchannels/3",
            "/adclients/ca-pub-2/customchannels",
            "/metadata/dimensions",
            "/metadata/metrics",
            "/preferreddeals/42",
            "/preferreddeals",
            "/adclients/ca-pub-2/urlchannels",
        ]
        .map(|suffix| format!("{prefix}{suffix}"));
        assert_eq!(got, want.to_vec());
        Ok(())
    }

    #[tokio::test]
    async fn path_values_are_encoded() -> TestResult {
        let (mock, captured) = recording(json!({}));
        let client = client(mock)?;
        let _ = client.accounts().get("a/b c").await?;
        let requests = captured.lock().expect("lock is never poisoned");
        assert_eq!(
            requests[0].url,
            "https://www.googleapis.com/adexchangeseller/v2.0/accounts/a%2Fb%20c"
        );
        Ok(())
    }

    #[tokio::test]
    async fn list_by_page() -> TestResult {
        let mut mock = MockTransport::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_execute()
            .withf(|r| !r.url.contains("pageToken"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Ok(HttpResponse::json(&json!({
                    "items": [{"id": "1"}],
                    "nextPageToken": "page-2",
                })))
            });
        mock.expect_execute()
            .withf(|r| r.url.contains("pageToken=page-2"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(HttpResponse::json(&json!({"items": [{"id": "2"}]}))));
        let client = client(mock)?;

        let pages = client
            .accounts()
            .list_by_page(ListAccountsOptions::new())?
            .try_collect::<Vec<_>>()
            .await?;
        let ids = pages
            .iter()
            .flat_map(|p| p.items_as::<model::Account>())
            .filter_map(|a| a.get_str("id").map(str::to_string))
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["1", "2"]);
        Ok(())
    }

    #[tokio::test]
    async fn not_found() -> TestResult {
        let mut mock = MockTransport::new();
        mock.expect_execute().times(1).returning(|_| {
            let body = json!({"error": {
                "code": 404,
                "message": "Saved report not found",
                "errors": [{"domain": "global", "reason": "notFound", "message": "Saved report not found"}],
            }});
            Ok(HttpResponse::new(StatusCode::NOT_FOUND, body.to_string()))
        });
        let client = client(mock)?;
        let err = client
            .accounts()
            .reports()
            .saved()
            .generate("1", "missing", GenerateSavedReportOptions::new())
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(404));
        assert_eq!(
            err.api_error().map(|e| e.message.as_str()),
            Some("Saved report not found")
        );
        Ok(())
    }
}
