use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use vtex_filter_interfaces::api::{
    error::ServerError,
    filter::{
        interface::{Filter, FilterClientInterface},
        types::{FilterId, FILTER_PATH},
    },
};

use super::utils::query::{get_request, put_request};

pub const ACCOUNT_PLACEHOLDER: &str = "{account}";
pub const DEFAULT_URL_TEMPLATE: &str = "https://{account}.myvtex.com";

const READ_ACCEPTED: &[StatusCode] = &[StatusCode::OK];
const WRITE_ACCEPTED: &[StatusCode] = &[StatusCode::OK, StatusCode::NO_CONTENT];

/// Filter API of the platform, addressed per tenant through a url template
/// such as `https://{account}.myvtex.com`.
#[derive(Debug, Clone)]
pub struct FilterApiClient {
    client: reqwest::Client,
    url_template: String,
    timeout: Option<Duration>,
}

impl FilterApiClient {
    pub fn new(url_template: &str) -> Self {
        FilterApiClient {
            client: reqwest::Client::new(),
            url_template: url_template.to_string(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    fn filter_url(&self, account: &str, filter_id: Option<&FilterId>) -> Result<Url, ServerError> {
        validate_account(account)?;
        let base = self.url_template.replace(ACCOUNT_PLACEHOLDER, account);
        let mut url =
            Url::parse(&base).map_err(|e| ServerError::MalformedUrl(format!("{}: {}", base, e)))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ServerError::MalformedUrl(format!("{}: cannot be a base", base)))?;
            segments.pop_if_empty().extend(FILTER_PATH);
            match filter_id {
                Some(filter_id) => segments.push(&filter_id.to_string()),
                // trailing slash
                None => segments.push(""),
            };
        }
        Ok(url)
    }
}

/// Account names end up in the host part of the url, so only ASCII
/// alphanumerics, `-` and `_` are allowed.
pub fn is_valid_account(account: &str) -> bool {
    !account.is_empty()
        && account
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn validate_account(account: &str) -> Result<(), ServerError> {
    if is_valid_account(account) {
        Ok(())
    } else {
        Err(ServerError::MalformedUrl(format!(
            "invalid account name '{}'",
            account
        )))
    }
}

#[async_trait]
impl FilterClientInterface for FilterApiClient {
    async fn get_filter(&self, account: &str, filter_id: &FilterId) -> Result<Filter, ServerError> {
        let url = self.filter_url(account, Some(filter_id))?;
        log::debug!("GET {}", url);
        get_request(&self.client, url, READ_ACCEPTED, self.timeout).await
    }

    async fn put_filter(&self, account: &str, filter: &Filter) -> Result<(), ServerError> {
        let url = self.filter_url(account, None)?;
        log::debug!("PUT {}", url);
        put_request(
            &self.client,
            url,
            &filter.payload(),
            WRITE_ACCEPTED,
            self.timeout,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use mockito::{Matcher, Server};
    use serde_json::json;

    use super::*;

    fn client_for(server: &Server) -> FilterApiClient {
        FilterApiClient::new(&format!("{}/{}", server.url(), ACCOUNT_PLACEHOLDER))
    }

    fn filter(value: serde_json::Value) -> Filter {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_filter_url_default_template() {
        let client = FilterApiClient::new(DEFAULT_URL_TEMPLATE);
        let url = client
            .filter_url("acme", Some(&FilterId::from("abc")))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://acme.myvtex.com/_v/filters-plp/filter/abc"
        );
        let url = client.filter_url("acme-stage", None).unwrap();
        assert_eq!(
            url.as_str(),
            "https://acme-stage.myvtex.com/_v/filters-plp/filter/"
        );
    }

    #[test]
    fn test_filter_url_encodes_id() {
        let client = FilterApiClient::new(DEFAULT_URL_TEMPLATE);
        let url = client
            .filter_url("acme", Some(&FilterId::from("a b/c")))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://acme.myvtex.com/_v/filters-plp/filter/a%20b%2Fc"
        );
    }

    #[test]
    fn test_filter_url_rejects_bad_account() {
        let client = FilterApiClient::new(DEFAULT_URL_TEMPLATE);
        for account in ["", "evil.com/x", "acme stage"] {
            let result = client.filter_url(account, None);
            assert!(matches!(result, Err(ServerError::MalformedUrl(_))));
        }
    }

    #[test]
    fn test_is_valid_account() {
        for account in ["acme", "acme-stage", "acme_2"] {
            assert!(is_valid_account(account), "{}", account);
        }
        for account in ["", "acme.com", "acme stage", "acmé"] {
            assert!(!is_valid_account(account), "{}", account);
        }
    }

    #[tokio::test]
    async fn test_get_filter() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/acme/_v/filters-plp/filter/abc")
            .match_header("accept", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"abc","name":"Color","type":"specification"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let result = client.get_filter("acme", &FilterId::from("abc")).await;

        let f = result.unwrap();
        assert_eq!(f.name().as_deref(), Some("Color"));
        assert_eq!(f.id(), Some(&json!("abc")));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_filter_not_found() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/acme/_v/filters-plp/filter/404")
            .with_status(404)
            .with_body("filter not found")
            .create_async()
            .await;

        let client = client_for(&server);
        let result = client.get_filter("acme", &FilterId::from(404u64)).await;

        match result {
            Err(ServerError::ServerError(status, body, url, _)) => {
                assert_eq!(status, 404);
                assert_eq!(body, "filter not found");
                assert!(url.ends_with("/acme/_v/filters-plp/filter/404"));
            }
            other => panic!("Expected ServerError::ServerError, got {:?}", other),
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_filter_only_accepts_200() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/acme/_v/filters-plp/filter/abc")
            .with_status(204)
            .create_async()
            .await;

        let client = client_for(&server);
        let result = client.get_filter("acme", &FilterId::from("abc")).await;

        assert!(matches!(
            result,
            Err(ServerError::ServerError(204, _, _, _))
        ));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_filter_invalid_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/acme/_v/filters-plp/filter/abc")
            .with_status(200)
            .with_body("[1, 2]")
            .create_async()
            .await;

        let client = client_for(&server);
        let result = client.get_filter("acme", &FilterId::from("abc")).await;

        assert!(matches!(result, Err(ServerError::DeserializationError(_))));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_put_filter_strips_id() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("PUT", "/acme-stage/_v/filters-plp/filter/")
            .match_header("content-type", "application/json")
            .match_header("accept", "application/json")
            .match_body(Matcher::Json(json!({
                "name": "Color",
                "values": ["red", "blue"],
            })))
            .with_status(204)
            .create_async()
            .await;

        let client = client_for(&server);
        let f = filter(json!({"id": "abc", "name": "Color", "values": ["red", "blue"]}));
        client.put_filter("acme-stage", &f).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_put_filter_without_id() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("PUT", "/acme-stage/_v/filters-plp/filter/")
            .match_body(Matcher::Json(json!({"name": "Marca"})))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let client = client_for(&server);
        client
            .put_filter("acme-stage", &filter(json!({"name": "Marca"})))
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_put_filter_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("PUT", "/acme-stage/_v/filters-plp/filter/")
            .with_status(500)
            .with_body("conflict")
            .create_async()
            .await;

        let client = client_for(&server);
        let result = client
            .put_filter("acme-stage", &filter(json!({"id": "def"})))
            .await;

        match result {
            Err(ServerError::ServerError(status, body, _, request)) => {
                assert_eq!(status, 500);
                assert_eq!(body, "conflict");
                assert_eq!(request, "{}");
            }
            other => panic!("Expected ServerError::ServerError, got {:?}", other),
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_network_error() {
        // nothing listens on port 9 of localhost
        let client = FilterApiClient::new("http://127.0.0.1:9/{account}")
            .with_timeout(Some(Duration::from_secs(5)));
        let result = client.get_filter("acme", &FilterId::from("abc")).await;
        assert!(matches!(result, Err(ServerError::NetworkError(_))));
    }
}
