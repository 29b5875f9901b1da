//! Stateless HTTP request builder and response parser for the Sitoo API.
//!
//! # Design
//! `SitooClient` holds only its `ClientConfig` and carries no mutable state
//! between calls. `build_*` methods produce an `HttpRequest` and
//! `parse_response` consumes an `HttpResponse`. The network round-trip
//! happens elsewhere, through a `Transport`.

use crate::account::AccountId;
use crate::auth::Credentials;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Synchronous, stateless request builder for the Sitoo accounts API.
#[derive(Debug, Clone, Default)]
pub struct SitooClient {
    config: ClientConfig,
}

impl SitooClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `https://api{suffix}.{domain}/{version}/accounts/{number}`
    pub fn base_url(&self, account: &AccountId) -> String {
        format!(
            "https://api{}.{}/{}/accounts/{}",
            account.host_suffix(),
            self.config.domain,
            self.config.api_version,
            account.number()
        )
    }

    /// Build a request for `endpoint`, appended verbatim to the account's base
    /// URL. `body` is dropped for methods that do not send one.
    pub fn build_request(
        &self,
        method: HttpMethod,
        endpoint: &str,
        credentials: &Credentials,
        body: Option<&[u8]>,
    ) -> HttpRequest {
        let body = if method.has_body() {
            Some(body.unwrap_or_default().to_vec())
        } else {
            None
        };
        HttpRequest {
            method,
            url: format!("{}{endpoint}", self.base_url(credentials.account())),
            headers: vec![
                ("content-type".to_string(), "application/json".to_string()),
                ("Authorization".to_string(), credentials.authorization()),
            ],
            body,
        }
    }

    pub fn build_get(&self, endpoint: &str, credentials: &Credentials) -> HttpRequest {
        self.build_request(HttpMethod::Get, endpoint, credentials, None)
    }

    pub fn build_post(&self, endpoint: &str, credentials: &Credentials, body: &[u8]) -> HttpRequest {
        self.build_request(HttpMethod::Post, endpoint, credentials, Some(body))
    }

    pub fn build_put(&self, endpoint: &str, credentials: &Credentials, body: &[u8]) -> HttpRequest {
        self.build_request(HttpMethod::Put, endpoint, credentials, Some(body))
    }

    pub fn build_delete(&self, endpoint: &str, credentials: &Credentials) -> HttpRequest {
        self.build_request(HttpMethod::Delete, endpoint, credentials, None)
    }

    /// Accept a 200 response as-is; anything else becomes `ApiError::Status`.
    pub fn parse_response(&self, response: HttpResponse) -> Result<HttpResponse, ApiError> {
        if response.status == 200 {
            return Ok(response);
        }
        Err(ApiError::Status {
            status: response.status,
            body: response.body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SitooClient {
        SitooClient::default()
    }

    fn creds(account: &str) -> Credentials {
        Credentials::new(account, "secret").unwrap()
    }

    #[test]
    fn build_get_produces_sandbox_request() {
        let req = client().build_get("/products", &creds("9001234-x"));
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "https://api-sandbox.mysitoo.com/v2/accounts/9001234/products");
        assert_eq!(
            req.headers,
            vec![
                ("content-type".to_string(), "application/json".to_string()),
                (
                    "Authorization".to_string(),
                    "Basic OTAwMTIzNC14OnNlY3JldA==".to_string()
                ),
            ]
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn url_uses_regional_and_production_hosts() {
        let req = client().build_get("/orders.json", &creds("1305551-y"));
        assert_eq!(req.url, "https://api130.mysitoo.com/v2/accounts/1305551/orders.json");

        let req = client().build_get("/orders.json", &creds("1005551-y"));
        assert_eq!(req.url, "https://api.mysitoo.com/v2/accounts/1005551/orders.json");
    }

    #[test]
    fn endpoint_is_appended_verbatim() {
        let req = client().build_get("?x=1//y", &creds("2025551-y"));
        assert_eq!(req.url, "https://api202.mysitoo.com/v2/accounts/2025551?x=1//y");
    }

    #[test]
    fn custom_domain_and_version_are_used() {
        let client = SitooClient::new(ClientConfig {
            domain: "sitoo.test".to_string(),
            api_version: "v3".to_string(),
        });
        let req = client.build_delete("/products/1", &creds("2015551-y"));
        assert_eq!(req.url, "https://api201.sitoo.test/v3/accounts/2015551/products/1");
    }

    #[test]
    fn build_post_carries_body_unmodified() {
        let body = br#"{"sku":"A-1","price":"10.00"}"#;
        let req = client().build_post("/products.json", &creds("9001234-x"), body);
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.body.as_deref(), Some(&body[..]));
        assert_eq!(req.header("content-type"), Some("application/json"));
    }

    #[test]
    fn build_put_carries_body_unmodified() {
        let body = [0u8, 159, 146, 150];
        let req = client().build_put("/products/1.json", &creds("9001234-x"), &body);
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.body, Some(body.to_vec()));
    }

    #[test]
    fn build_delete_has_no_body() {
        let req = client().build_delete("/products/1.json", &creds("9001234-x"));
        assert_eq!(req.method, HttpMethod::Delete);
        assert!(req.body.is_none());
    }

    #[test]
    fn generic_builder_drops_body_for_get() {
        let req = client().build_request(HttpMethod::Get, "/x", &creds("9001234-x"), Some(&b"ignored"[..]));
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_response_success_returns_body_unmodified() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: br#"{"totalcount":0,"items":[]}"#.to_vec(),
        };
        let parsed = client().parse_response(response.clone()).unwrap();
        assert_eq!(parsed, response);
    }

    #[test]
    fn parse_response_non_200_is_status_error() {
        for status in [201, 401, 404, 500] {
            let response = HttpResponse {
                status,
                headers: Vec::new(),
                body: b"nope".to_vec(),
            };
            let err = client().parse_response(response).unwrap_err();
            assert_eq!(
                err,
                ApiError::Status {
                    status,
                    body: b"nope".to_vec()
                }
            );
        }
    }
}
