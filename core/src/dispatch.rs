//! Authenticated request dispatch with structured logging.
//!
//! # Design
//! Every verb goes through `Dispatcher::send`: build, log, execute, branch on
//! status. Failures come back as `ApiError`; nothing here exits the process.
//! Log messages and field names (`requesttype`, `account`, `endpoint`,
//! `body`, `statuscode`, `response`) are stable so existing log-based
//! monitoring keeps working.

use tracing::{error, info};

use crate::auth::Credentials;
use crate::client::SitooClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpResponse};
use crate::transport::{Transport, UreqTransport};

/// Sends one request per call through an injected `Transport`.
#[derive(Debug, Clone)]
pub struct Dispatcher<T> {
    client: SitooClient,
    transport: T,
}

impl Default for Dispatcher<UreqTransport> {
    fn default() -> Self {
        Self::new(SitooClient::default(), UreqTransport::default())
    }
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(client: SitooClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &SitooClient {
        &self.client
    }

    /// Send `method` to `endpoint` and return the 200 response.
    pub fn send(
        &self,
        method: HttpMethod,
        endpoint: &str,
        credentials: &Credentials,
        body: Option<&[u8]>,
    ) -> Result<HttpResponse, ApiError> {
        let request = self.client.build_request(method, endpoint, credentials, body);
        let account = credentials.account().as_str();

        let body_text = request.body.as_deref().map(String::from_utf8_lossy);
        info!(
            requesttype = method.as_str(),
            account,
            endpoint,
            body = body_text.as_deref(),
            "Request sent"
        );

        let response = match self.transport.execute(&request) {
            Ok(response) => response,
            Err(err) => {
                error!(
                    requesttype = %format!("{method}/Error"),
                    account,
                    endpoint,
                    body = body_text.as_deref(),
                    response = %err,
                    "ERROR"
                );
                return Err(err);
            }
        };

        let status = response.status;
        let text = response.text().into_owned();
        match self.client.parse_response(response) {
            Ok(response) => {
                info!(
                    requesttype = %format!("{method}/Response"),
                    account,
                    endpoint,
                    statuscode = status,
                    response = text.as_str(),
                    "OK"
                );
                Ok(response)
            }
            Err(err) => {
                error!(
                    requesttype = %format!("{method}/Response"),
                    account,
                    endpoint,
                    statuscode = status,
                    response = text.as_str(),
                    "ERROR"
                );
                Err(err)
            }
        }
    }

    /// GET `endpoint`; the response carries both status code and body.
    pub fn get(&self, endpoint: &str, credentials: &Credentials) -> Result<HttpResponse, ApiError> {
        self.send(HttpMethod::Get, endpoint, credentials, None)
    }

    pub fn post(&self, endpoint: &str, credentials: &Credentials, body: &[u8]) -> Result<Vec<u8>, ApiError> {
        self.send(HttpMethod::Post, endpoint, credentials, Some(body))
            .map(|response| response.body)
    }

    pub fn put(&self, endpoint: &str, credentials: &Credentials, body: &[u8]) -> Result<Vec<u8>, ApiError> {
        self.send(HttpMethod::Put, endpoint, credentials, Some(body))
            .map(|response| response.body)
    }

    pub fn delete(&self, endpoint: &str, credentials: &Credentials) -> Result<Vec<u8>, ApiError> {
        self.send(HttpMethod::Delete, endpoint, credentials, None)
            .map(|response| response.body)
    }
}
