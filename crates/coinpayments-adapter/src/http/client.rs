/*
[INPUT]:  Credentials, IPN URL, endpoint/timeout configuration, optional log dispatcher
[OUTPUT]: Configured blocking client and the signed request dispatcher
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing dispatch behavior
*/

use crate::http::{CoinPaymentsError, RequestSigner, Result, SignedRequest};
use crate::types::{ApiCommand, ApiResponse, CommonParams, RequestMethod, RequestParams};
use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::Url;
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

/// Public CoinPayments API endpoint
pub const API_URL: &str = "https://www.coinpayments.net/api.php";

const API_VERSION: i64 = 1;
const API_FORMAT: &str = "json";
const HMAC_HEADER: &str = "hmac";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Log handle used for the client's events.
///
/// Without one, events go to the host's global subscriber.
pub type Logger = tracing::Dispatch;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: API_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Merchant API key pair
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Sent as the `key` parameter
    pub public_key: String,
    /// HMAC secret; never transmitted
    pub private_key: String,
}

impl Credentials {
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: private_key.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// Blocking client for the CoinPayments merchant API
#[derive(Debug)]
pub struct CoinPaymentsClient {
    http_client: Client,
    endpoint: Url,
    credentials: Credentials,
    ipn_url: String,
    logger: Option<Logger>,
}

impl CoinPaymentsClient {
    /// Create a new client with default configuration
    pub fn new(credentials: Credentials, ipn_url: impl Into<String>) -> Result<Self> {
        Self::with_config(credentials, ipn_url, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(
        credentials: Credentials,
        ipn_url: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| CoinPaymentsError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            endpoint: Url::parse(&config.endpoint)?,
            credentials,
            ipn_url: ipn_url.into(),
            logger: None,
        })
    }

    /// Route this client's log events through `logger`
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Stored IPN callback URL; no command sends it
    pub fn ipn_url(&self) -> &str {
        &self.ipn_url
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Wire parameters `command` would send from this client
    pub fn params_for(&self, command: &ApiCommand) -> RequestParams {
        command.to_params(CommonParams {
            key: &self.credentials.public_key,
            version: API_VERSION,
            format: API_FORMAT,
        })
    }

    /// Encode `params` and sign them with the private key
    pub fn create_hmac(&self, params: &RequestParams) -> Result<SignedRequest> {
        RequestSigner::new(&self.credentials.private_key).sign(params)
    }

    /// Dispatch `command` as a POST
    pub fn execute(&self, command: &ApiCommand) -> Result<ApiResponse> {
        self.execute_with(RequestMethod::Post, command)
    }

    /// Dispatch `command` with an explicit request method.
    ///
    /// GET sends only the `hmac` header: the encoded parameters are signed
    /// but never attached to the request, so the gateway will not see them.
    pub fn execute_with(&self, method: RequestMethod, command: &ApiCommand) -> Result<ApiResponse> {
        let params = self.params_for(command);
        self.request(method, &params)
    }

    /// Sign `params` and send them.
    ///
    /// Non-2xx statuses are logged and returned as [`ApiResponse::HttpError`].
    pub(crate) fn request(&self, method: RequestMethod, params: &RequestParams) -> Result<ApiResponse> {
        match &self.logger {
            Some(logger) => tracing::dispatcher::with_default(logger, || self.dispatch(method, params)),
            None => self.dispatch(method, params),
        }
    }

    fn dispatch(&self, method: RequestMethod, params: &RequestParams) -> Result<ApiResponse> {
        let cmd = params.command().unwrap_or_default();
        let signed = self.create_hmac(params)?;
        let signature = HeaderValue::from_str(signed.signature())?;

        debug!(
            cmd = %cmd,
            method = %method,
            body_len = signed.body().len(),
            "dispatching CoinPayments command"
        );

        let builder = self.http_client.request(method.into(), self.endpoint.clone());
        let builder = match method {
            RequestMethod::Get => {
                debug!(cmd = %cmd, "GET request carries no parameters; only the hmac header is sent");
                builder
            }
            RequestMethod::Post => builder
                .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(signed.into_body()),
        };

        let response = builder.header(HMAC_HEADER, signature).send()?;
        let status = response.status();
        let body = response.bytes()?;

        if !status.is_success() {
            warn!(
                status = status.as_u16(),
                cmd = %cmd,
                detail = %String::from_utf8_lossy(&body),
                "Transaction parsing problem: HTTP error {}",
                status
            );
            return Ok(ApiResponse::HttpError {
                status,
                body: body.to_vec(),
            });
        }

        let value = serde_json::from_slice(&body)?;
        Ok(ApiResponse::Json(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ParamValue;

    fn test_credentials() -> Credentials {
        Credentials::new("public", "secret")
    }

    #[test]
    fn test_client_defaults() {
        let client = CoinPaymentsClient::new(test_credentials(), "https://shop.example.com/ipn")
            .expect("client init");
        assert_eq!(client.endpoint().as_str(), API_URL);
        assert_eq!(client.ipn_url(), "https://shop.example.com/ipn");
        assert_eq!(client.credentials().public_key, "public");
    }

    #[test]
    fn test_client_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CoinPaymentsClient>();
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let config = ClientConfig {
            endpoint: "not a url".to_string(),
            ..ClientConfig::default()
        };
        let err = CoinPaymentsClient::with_config(test_credentials(), "", config).unwrap_err();
        assert!(matches!(err, CoinPaymentsError::UrlParse(_)));
    }

    #[test]
    fn test_debug_redacts_private_key() {
        let rendered = format!("{:?}", test_credentials());
        assert!(rendered.contains("public"));
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("secret"));
    }

    #[test]
    fn test_params_for_uses_client_settings() {
        let client = CoinPaymentsClient::new(test_credentials(), "").expect("client init");
        let params = client.params_for(&ApiCommand::Balances { limit: 10 });
        assert_eq!(params.get("key"), Some(&ParamValue::from("public")));
        assert_eq!(params.get("version"), Some(&ParamValue::Integer(1)));
        assert_eq!(params.get("format"), Some(&ParamValue::from("json")));
        assert!(params.iter().all(|(_, value)| value.to_string() != "secret"));
    }
}
