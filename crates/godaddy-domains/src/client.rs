//! Asynchronous Domains API client implementation.

use crate::models::{
    AvailabilityQuery, DomainAvailable, DomainDetail, DomainListQuery, DomainRecord, DomainSummary,
};
use crate::Result;
use godaddy_core::client::HttpSettings;
use godaddy_core::config::GodaddyConfig;
use godaddy_core::error::ApiErrorBody;
use godaddy_core::types::{ApiEnvironment, RecordType};
use godaddy_core::Error;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, ClientBuilder, Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::net::Ipv4Addr;
use tracing::debug;
use url::Url;

const USER_AGENT: &str = concat!("godaddy-domains/", env!("CARGO_PKG_VERSION"));

/// Header carrying the shopper ID for reseller accounts.
const SHOPPER_ID_HEADER: &str = "X-Shopper-Id";

/// Builder for [`DomainsClient`].
#[derive(Debug, Clone)]
pub struct DomainsClientBuilder {
    environment: ApiEnvironment,
    base_url: Option<Url>,
    http: HttpSettings,
    api_key: String,
    api_secret: SecretString,
    shopper_id: Option<String>,
}

impl DomainsClientBuilder {
    /// Create a builder for the production environment with the given
    /// API key/secret pair.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            environment: ApiEnvironment::Production,
            base_url: None,
            http: HttpSettings::new(),
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
            shopper_id: None,
        }
    }

    /// Create a builder from a [`GodaddyConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured API URL cannot be parsed.
    pub fn from_config(config: &GodaddyConfig) -> Result<Self> {
        let base_url = config.parse_api_url()?;

        Ok(Self {
            environment: ApiEnvironment::Production,
            base_url: Some(base_url),
            http: HttpSettings::new().with_timeout(config.timeout()),
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
            shopper_id: config.shopper_id.clone(),
        })
    }

    /// Target a named API environment (production or OTE).
    #[must_use]
    pub fn with_environment(mut self, environment: ApiEnvironment) -> Self {
        self.environment = environment;
        self.base_url = None;
        self
    }

    /// Override the base URL entirely (mainly for tests and proxies).
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Result<Self> {
        let url = Url::parse(base_url.as_ref()).map_err(|err| {
            Error::ConfigError(format!(
                "Invalid base URL `{}`: {err}",
                base_url.as_ref()
            ))
        })?;
        self.base_url = Some(url);
        Ok(self)
    }

    /// Override the HTTP transport settings.
    #[must_use]
    pub fn with_http_settings(mut self, settings: HttpSettings) -> Self {
        self.http = settings;
        self
    }

    /// Send the given shopper ID with every request.
    #[must_use]
    pub fn with_shopper_id(mut self, shopper_id: impl Into<String>) -> Self {
        self.shopper_id = Some(shopper_id.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<DomainsClient> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(self.environment.base_url()).map_err(|err| {
                Error::ConfigError(format!(
                    "Invalid base URL for environment `{}`: {err}",
                    self.environment
                ))
            })?,
        };

        let mut builder = ClientBuilder::new()
            .timeout(self.http.timeout)
            .connect_timeout(self.http.connect_timeout)
            .user_agent(USER_AGENT);

        if !self.http.enable_compression {
            builder = builder.no_gzip();
        }

        let http = builder.build().map_err(|err| {
            Error::ConfigError(format!("Failed to build domains HTTP client: {err}"))
        })?;

        let authorization = SecretString::from(format!(
            "sso-key {}:{}",
            self.api_key,
            self.api_secret.expose_secret()
        ));

        Ok(DomainsClient {
            http,
            base_url,
            authorization,
            shopper_id: self.shopper_id,
            log_requests: self.http.enable_logging,
        })
    }
}

/// Asynchronous Domains API client.
///
/// Every method issues exactly one HTTP request and maps the JSON answer
/// into the plain record types from [`crate::models`]. There is no retrying,
/// caching, or page-following; failures surface as [`enum@Error`] values.
#[derive(Clone)]
pub struct DomainsClient {
    http: Client,
    base_url: Url,
    authorization: SecretString,
    shopper_id: Option<String>,
    log_requests: bool,
}

impl DomainsClient {
    /// Construct a production client directly from an API key/secret pair.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Result<Self> {
        DomainsClientBuilder::new(api_key, api_secret).build()
    }

    /// Return the base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Check whether a domain is available to be purchased.
    pub async fn check_availability(&self, domain: &str) -> Result<DomainAvailable> {
        self.check_availability_with(domain, &AvailabilityQuery::default())
            .await
    }

    /// Check availability with explicit query options.
    pub async fn check_availability_with(
        &self,
        domain: &str,
        query: &AvailabilityQuery,
    ) -> Result<DomainAvailable> {
        self.get_json("v1/domains/available", &query.to_pairs(domain))
            .await
    }

    /// List domains owned by the authenticated shopper.
    pub async fn list_domains(&self, query: &DomainListQuery) -> Result<Vec<DomainSummary>> {
        self.get_json("v1/domains", &query.to_pairs()).await
    }

    /// Fetch the detail record for a single owned domain.
    pub async fn get_domain(&self, domain: &str) -> Result<DomainDetail> {
        let path = format!("v1/domains/{domain}");
        self.get_json(&path, &[]).await
    }

    /// List the existing DNS records for a domain.
    pub async fn list_records(&self, domain: &str) -> Result<Vec<DomainRecord>> {
        let path = format!("v1/domains/{domain}/records");
        self.get_json(&path, &[]).await
    }

    /// List the existing DNS records of one type for a domain.
    pub async fn list_records_by_type(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<DomainRecord>> {
        let path = format!("v1/domains/{domain}/records/{record_type}");
        self.get_json(&path, &[]).await
    }

    /// Add records to a domain.
    ///
    /// The API answers `422` when an identical record already exists, which
    /// surfaces as [`Error::Conflict`].
    pub async fn add_records(&self, domain: &str, records: &[DomainRecord]) -> Result<()> {
        let path = format!("v1/domains/{domain}/records");
        self.send_no_content(Method::PATCH, &path, Some(records))
            .await
    }

    /// Delete the record of the given type and name.
    ///
    /// The API answers `204` on success and `404` when the record did not
    /// exist, which surfaces as [`Error::NotFound`].
    pub async fn delete_record(
        &self,
        domain: &str,
        record_type: RecordType,
        name: &str,
    ) -> Result<()> {
        let path = format!("v1/domains/{domain}/records/{record_type}/{name}");
        self.send_no_content::<()>(Method::DELETE, &path, None)
            .await
    }

    /// Add an `A` record pointing `name` at `address`.
    ///
    /// Use `@` as the name for the domain apex and a bare label (e.g. `one`)
    /// for a subdomain.
    pub async fn add_address_record(
        &self,
        domain: &str,
        name: &str,
        address: Ipv4Addr,
    ) -> Result<()> {
        self.add_records(domain, &[DomainRecord::address(name, address)])
            .await
    }

    /// Delete the `A` record with the given name.
    pub async fn remove_address_record(&self, domain: &str, name: &str) -> Result<()> {
        self.delete_record(domain, RecordType::A, name).await
    }

    /// Point an existing name at a new address by removing the `A` record
    /// and adding it again.
    ///
    /// A record that did not exist yet is not an error; any other removal
    /// failure propagates. Two requests are issued in sequence.
    pub async fn replace_address_record(
        &self,
        domain: &str,
        name: &str,
        address: Ipv4Addr,
    ) -> Result<()> {
        match self.remove_address_record(domain, name).await {
            Ok(()) => {}
            Err(err) if err.is_not_found() => {}
            Err(err) => return Err(err),
        }

        self.add_address_record(domain, name, address).await
    }

    fn build_url(&self, path: &str) -> Result<Url> {
        let normalized = path.strip_prefix('/').unwrap_or(path);

        self.base_url.join(normalized).map_err(|err| {
            Error::InvalidEndpoint(format!("Invalid domains API path `{path}`: {err}"))
        })
    }

    async fn get_json<T>(&self, path: &str, params: &[(&'static str, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self
            .execute(Method::GET, path, Option::<&()>::None, params)
            .await?;

        response.json::<T>().await.map_err(|err| {
            Error::ParseError(format!(
                "Failed to decode domains API response for `{path}`: {err}"
            ))
        })
    }

    async fn send_no_content<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.execute(method, path, body, &[]).await?;
        Ok(())
    }

    async fn execute<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        params: &[(&'static str, String)],
    ) -> Result<reqwest::Response>
    where
        B: Serialize + ?Sized,
    {
        let url = self.build_url(path)?;
        let mut request = self
            .http
            .request(method.clone(), url)
            .query(params)
            .header(AUTHORIZATION, self.authorization.expose_secret())
            .header(ACCEPT, "application/json");

        if let Some(shopper_id) = &self.shopper_id {
            request = request.header(SHOPPER_ID_HEADER, shopper_id);
        }
        if let Some(payload) = body {
            request = request.json(payload);
        }

        if self.log_requests {
            debug!(%method, path, "domains API request");
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        Err(map_status_to_error(status, &text))
    }
}

fn map_status_to_error(status: StatusCode, body: &str) -> Error {
    let detail = error_detail(body);

    match status {
        StatusCode::NOT_FOUND => Error::NotFound(detail),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::AuthenticationFailed(detail),
        StatusCode::UNPROCESSABLE_ENTITY => Error::Conflict(detail),
        StatusCode::TOO_MANY_REQUESTS => Error::RateLimited(detail),
        StatusCode::BAD_REQUEST => Error::InvalidRequest(detail),
        status if status.is_server_error() => {
            Error::ServiceUnavailable(format!("domains API server error {status}: {detail}"))
        }
        _ => Error::HttpError(format!("domains API error {status}: {detail}")),
    }
}

fn error_detail(body: &str) -> String {
    ApiErrorBody::parse(body).map_or_else(|| body.to_string(), |parsed| parsed.describe())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> DomainsClient {
        DomainsClientBuilder::new("test-key", "test-secret")
            .with_base_url(server.uri())
            .unwrap()
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn check_availability_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/domains/available"))
            .and(query_param("domain", "example.com"))
            .and(header("Authorization", "sso-key test-key:test-secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "available": true,
                "currency": "USD",
                "definitive": true,
                "domain": "example.com",
                "period": 1,
                "price": 10_690_000
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let answer = client.check_availability("example.com").await.unwrap();
        assert!(answer.available);
        assert_eq!(answer.currency.as_deref(), Some("USD"));
        assert_eq!(answer.price, Some(10_690_000));
    }

    #[tokio::test]
    async fn check_availability_with_passes_options() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/domains/available"))
            .and(query_param("domain", "example.org"))
            .and(query_param("checkType", "FULL"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "available": false,
                "definitive": true,
                "domain": "example.org"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let query = AvailabilityQuery {
            check_type: Some(crate::models::CheckType::Full),
            for_transfer: None,
        };
        let answer = client
            .check_availability_with("example.org", &query)
            .await
            .unwrap();
        assert!(!answer.available);
        assert!(answer.price.is_none());
    }

    #[tokio::test]
    async fn list_domains_passes_filters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/domains"))
            .and(query_param("statuses", "ACTIVE"))
            .and(query_param("limit", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "domain": "example.com",
                    "domainId": 1,
                    "status": "ACTIVE",
                    "renewAuto": true
                },
                {
                    "domain": "example.net",
                    "domainId": 2,
                    "status": "ACTIVE",
                    "renewAuto": false
                }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let query = DomainListQuery {
            statuses: Some(vec!["ACTIVE".into()]),
            limit: Some(2),
            ..DomainListQuery::default()
        };
        let domains = client.list_domains(&query).await.unwrap();
        assert_eq!(domains.len(), 2);
        assert_eq!(domains[0].domain, "example.com");
        assert_eq!(domains[1].renew_auto, Some(false));
    }

    #[tokio::test]
    async fn get_domain_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/domains/missing.com"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "code": "NOT_FOUND",
                "message": "Domain not found"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client.get_domain("missing.com").await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert!(err.to_string().contains("NOT_FOUND: Domain not found"));
    }

    #[tokio::test]
    async fn list_records_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/domains/example.com/records"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"data": "123.123.123.123", "name": "@", "ttl": 600, "type": "A"},
                {"data": "example.com", "name": "www", "ttl": 3600, "type": "CNAME"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let records = client.list_records("example.com").await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].record_type, RecordType::A);
        assert_eq!(records[1].name, "www");
        assert!(records[0].priority.is_none());
    }

    #[tokio::test]
    async fn list_records_by_type_scopes_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/domains/example.com/records/A"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"data": "123.123.123.123", "name": "one", "ttl": 600, "type": "A"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let records = client
            .list_records_by_type("example.com", RecordType::A)
            .await
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "one");
    }

    #[tokio::test]
    async fn add_records_sends_exact_payload() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/v1/domains/example.com/records"))
            .and(body_json(json!([
                {"data": "123.123.123.123", "name": "one", "ttl": 600, "type": "A"}
            ])))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        client
            .add_address_record("example.com", "one", Ipv4Addr::new(123, 123, 123, 123))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn add_records_conflict_when_record_exists() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/v1/domains/example.com/records"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "code": "DUPLICATE_RECORD",
                "message": "Another record with the same attributes already exists"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let records = [DomainRecord::address("@", Ipv4Addr::new(10, 0, 0, 1))];
        let err = client
            .add_records("example.com", &records)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
        assert!(err.to_string().contains("DUPLICATE_RECORD"));
    }

    #[tokio::test]
    async fn delete_record_handles_no_content() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/v1/domains/example.com/records/A/www"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        client
            .delete_record("example.com", RecordType::A, "www")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn delete_record_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/v1/domains/example.com/records/A/ghost"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "code": "NOT_FOUND"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .remove_address_record("example.com", "ghost")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn replace_address_record_tolerates_missing_record() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/v1/domains/example.com/records/A/one"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "code": "NOT_FOUND"
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/v1/domains/example.com/records"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        client
            .replace_address_record("example.com", "one", Ipv4Addr::new(10, 0, 0, 2))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn unauthorized_maps_to_authentication_failed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/domains"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "code": "UNABLE_TO_AUTHENTICATE",
                "message": "malformed sso-key"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .list_domains(&DomainListQuery::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::AuthenticationFailed(_)));
    }

    #[tokio::test]
    async fn rate_limited_maps_to_rate_limited() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/domains"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "code": "TOO_MANY_REQUESTS",
                "message": "request limit exceeded"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .list_domains(&DomainListQuery::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::RateLimited(_)));
    }

    #[tokio::test]
    async fn server_error_maps_to_service_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/domains"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .list_domains(&DomainListQuery::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ServiceUnavailable(_)));
        assert!(err.to_string().contains("boom"));
    }

    #[tokio::test]
    async fn shopper_id_header_is_forwarded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/domains"))
            .and(header(SHOPPER_ID_HEADER, "1234567"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = DomainsClientBuilder::new("test-key", "test-secret")
            .with_base_url(server.uri())
            .unwrap()
            .with_shopper_id("1234567")
            .build()
            .unwrap();

        let domains = client.list_domains(&DomainListQuery::default()).await.unwrap();
        assert!(domains.is_empty());
    }
}
