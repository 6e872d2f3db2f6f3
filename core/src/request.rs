//! The request engine every service call goes through.
//!
//! # Design
//! A `Request` is built fresh for one call and dropped afterwards. Building is
//! pure preparation: the URL is resolved, the body serialized and the fixed
//! headers attached, but nothing touches the network until `send`. A bad
//! endpoint does not fail construction; the error is stored and `send`
//! returns it without calling the transport.
//!
//! `send` makes exactly one attempt. Non-2xx responses are classified by
//! `check_status`; 2xx bodies are written into the optional `ResponseTarget`.

use std::fmt;
use std::time::SystemTime;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::{form_urlencoded, Url};
use uuid::Uuid;

use crate::config::Config;
use crate::error::{ApiError, FailureResponse};
use crate::http::{HttpRequest, HttpResponse};
use crate::operation::Operation;

/// Header PingAccess requires on API calls to tell them apart from
/// browser-originated cross-site requests.
pub const XSRF_HEADER: &str = "X-Xsrf-Header";
pub const XSRF_VALUE: &str = "PingAccess";

pub const SDK_NAME: &str = "pingaccess-sdk-rust";
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

const MASKED: &str = "********";

/// Where a successful response body is written.
///
/// `Option<T>` decodes JSON, `String` and `Vec<u8>` take the body verbatim
/// (certificate, CSR and keypair exports are not JSON).
pub trait ResponseTarget {
    fn fill(&mut self, body: &[u8]) -> Result<(), ApiError>;

    /// Reset to the empty state after a failed call.
    fn clear(&mut self);
}

impl<T: DeserializeOwned> ResponseTarget for Option<T> {
    fn fill(&mut self, body: &[u8]) -> Result<(), ApiError> {
        *self = None;
        // Empty 200/204 bodies are common on update and delete endpoints.
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(());
        }
        // A literal `null` decodes to `None` and is not an error.
        *self = serde_json::from_slice::<Option<T>>(body)
            .map_err(|e| ApiError::Deserialization(e.to_string()))?;
        Ok(())
    }

    fn clear(&mut self) {
        *self = None;
    }
}

impl ResponseTarget for String {
    fn fill(&mut self, body: &[u8]) -> Result<(), ApiError> {
        self.clear();
        let text = std::str::from_utf8(body).map_err(|e| {
            ApiError::Deserialization(format!("response body is not UTF-8 text: {e}"))
        })?;
        self.push_str(text);
        Ok(())
    }

    fn clear(&mut self) {
        String::clear(self);
    }
}

impl ResponseTarget for Vec<u8> {
    fn fill(&mut self, body: &[u8]) -> Result<(), ApiError> {
        self.clear();
        self.extend_from_slice(body);
        Ok(())
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }
}

/// One call against the admin API.
pub struct Request<'a> {
    config: &'a Config,
    operation: Operation,
    http: HttpRequest,
    target: Option<&'a mut dyn ResponseTarget>,
    id: Uuid,
    issued_at: SystemTime,
    attempted_at: Option<SystemTime>,
    resolve_error: Option<ApiError>,
    last_error: Option<ApiError>,
    response: Option<HttpResponse>,
}

/// Build a request in one step.
///
/// The body is serialized before anything else; a serialization failure is
/// returned here and no request exists to send.
pub fn build_request<'a, B>(
    config: &'a Config,
    operation: Operation,
    body: Option<&B>,
    target: Option<&'a mut dyn ResponseTarget>,
) -> Result<Request<'a>, ApiError>
where
    B: Serialize + ?Sized,
{
    let body = body.map(encode_body).transpose()?;
    let mut request = Request::new(config, operation);
    if let Some(bytes) = body {
        request.set_json_body(bytes);
    }
    request.target = target;
    Ok(request)
}

impl<'a> Request<'a> {
    pub fn new(config: &'a Config, operation: Operation) -> Self {
        let (url, resolve_error) = match resolve_url(config.endpoint(), &operation) {
            Ok(url) => (url, None),
            Err(err) => (String::new(), Some(err)),
        };

        let headers = vec![
            (
                "Authorization".to_string(),
                basic_auth(&config.username, &config.password),
            ),
            (XSRF_HEADER.to_string(), XSRF_VALUE.to_string()),
            ("User-Agent".to_string(), user_agent()),
        ];

        Self {
            config,
            http: HttpRequest {
                method: operation.method,
                url,
                headers,
                body: None,
            },
            operation,
            target: None,
            id: Uuid::new_v4(),
            issued_at: SystemTime::now(),
            attempted_at: None,
            resolve_error,
            last_error: None,
            response: None,
        }
    }

    /// Serialize `body` as the JSON payload and set `Content-Type`.
    pub fn with_body<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        let bytes = encode_body(body)?;
        self.set_json_body(bytes);
        Ok(self)
    }

    pub fn with_target(mut self, target: &'a mut dyn ResponseTarget) -> Self {
        self.target = Some(target);
        self
    }

    fn set_json_body(&mut self, bytes: Vec<u8>) {
        self.http
            .headers
            .retain(|(name, _)| !name.eq_ignore_ascii_case("content-type"));
        self.http
            .headers
            .push(("Content-Type".to_string(), "application/json".to_string()));
        self.http.body = Some(bytes);
    }

    /// Perform the round trip once.
    pub fn send(&mut self) -> Result<(), ApiError> {
        let span = tracing::debug_span!(
            "pingaccess_request",
            id = %self.id,
            operation = %self.operation.name
        );
        let _enter = span.enter();

        self.attempted_at = Some(SystemTime::now());

        if let Some(err) = self.resolve_error.clone() {
            return Err(self.record(err));
        }

        if self.config.debug {
            tracing::debug!(
                "outgoing request:\n{}",
                dump_request(&self.http, self.config.mask_authorization)
            );
        }

        let response = match self.config.transport.execute(&self.http) {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(error = %err, url = %self.http.url, "request failed");
                return Err(self.record(err));
            }
        };

        if self.config.debug {
            tracing::debug!("response:\n{}", dump_response(&response));
        }

        let result = match check_status(&response) {
            Err(err) => {
                if let Some(target) = self.target.as_deref_mut() {
                    target.clear();
                }
                Err(err)
            }
            Ok(()) => match self.target.as_deref_mut() {
                Some(target) => target.fill(&response.body),
                None => Ok(()),
            },
        };
        tracing::debug!(status = response.status, ok = result.is_ok(), "request complete");
        self.response = Some(response);

        match result {
            Ok(()) => {
                self.last_error = None;
                Ok(())
            }
            Err(err) => Err(self.record(err)),
        }
    }

    fn record(&mut self, err: ApiError) -> ApiError {
        self.last_error = Some(err.clone());
        err
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    pub fn http_request(&self) -> &HttpRequest {
        &self.http
    }

    pub fn issued_at(&self) -> SystemTime {
        self.issued_at
    }

    pub fn attempted_at(&self) -> Option<SystemTime> {
        self.attempted_at
    }

    /// Error from the last `send`, or the stored URL error before any send.
    pub fn error(&self) -> Option<&ApiError> {
        self.last_error.as_ref().or(self.resolve_error.as_ref())
    }

    pub fn response(&self) -> Option<&HttpResponse> {
        self.response.as_ref()
    }

    /// Consume the request, releasing the borrow on the target.
    pub fn into_response(self) -> Option<HttpResponse> {
        self.response
    }
}

impl fmt::Debug for Request<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("id", &self.id)
            .field("operation", &self.operation.name)
            .field("method", &self.http.method)
            .field("url", &self.http.url)
            .field("has_target", &self.target.is_some())
            .finish_non_exhaustive()
    }
}

fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<Vec<u8>, ApiError> {
    serde_json::to_vec(body).map_err(|e| ApiError::Serialization(e.to_string()))
}

/// The path is appended to the endpoint as-is: `Url` is only used to check
/// that the result parses, since its normalization would drop `..` segments
/// from substituted values.
fn resolve_url(endpoint: &str, operation: &Operation) -> Result<String, ApiError> {
    let mut raw = format!("{endpoint}{}", operation.path);
    Url::parse(&raw).map_err(|e| ApiError::InvalidUrl {
        url: raw.clone(),
        reason: e.to_string(),
    })?;

    let mut params = operation.effective_query().peekable();
    if params.peek().is_some() {
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params)
            .finish();
        raw.push('?');
        raw.push_str(&query);
    }
    Ok(raw)
}

fn basic_auth(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}

fn user_agent() -> String {
    format!(
        "{SDK_NAME}/{SDK_VERSION} (rust; {}; {})",
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

/// Map the status code to success or the matching `ApiError`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    match response.status {
        200..=299 => Ok(()),
        401 => Err(ApiError::Unauthorized),
        403 => Err(ApiError::Forbidden),
        status => match serde_json::from_slice::<FailureResponse>(&response.body) {
            Ok(failure) => Err(ApiError::Api { status, failure }),
            Err(_) => Err(ApiError::UnparsableResponse {
                status,
                body: response.text(),
            }),
        },
    }
}

fn dump_request(http: &HttpRequest, mask_authorization: bool) -> String {
    let mut out = format!("{} {}\n", http.method, http.url);
    for (name, value) in &http.headers {
        let value = if mask_authorization && name.eq_ignore_ascii_case("authorization") {
            MASKED
        } else {
            value.as_str()
        };
        out.push_str(&format!("{name}: {value}\n"));
    }
    if let Some(body) = &http.body {
        out.push('\n');
        out.push_str(&String::from_utf8_lossy(body));
    }
    out
}

fn dump_response(response: &HttpResponse) -> String {
    let mut out = format!("HTTP {}\n", response.status);
    for (name, value) in &response.headers {
        out.push_str(&format!("{name}: {value}\n"));
    }
    if !response.body.is_empty() {
        out.push('\n');
        out.push_str(&response.text());
    }
    out
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde::{Deserialize, Serializer};

    use super::*;
    use crate::http::HttpMethod;
    use crate::operation::PathTemplate;
    use crate::testing::{CapturedLog, RecordingTransport};

    const ENDPOINT: &str = "https://pa.local:9000/pa-admin-api/v3";

    fn config(transport: &Arc<RecordingTransport>) -> Config {
        Config::new(ENDPOINT)
            .with_credentials("Administrator", "2Access")
            .with_transport(transport.clone())
    }

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Agent {
        id: i64,
        name: String,
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("value refers to itself"))
        }
    }

    #[test]
    fn empty_query_values_never_reach_the_url() {
        let transport = RecordingTransport::new();
        let config = config(&transport);
        let op = Operation::new("getAgents", HttpMethod::Get, "/agents")
            .query("page", "2")
            .query("numberPerPage", "")
            .query("filter", "")
            .query("name", "edge agent");
        let req = Request::new(&config, op);
        assert_eq!(
            req.http_request().url,
            "https://pa.local:9000/pa-admin-api/v3/agents?name=edge+agent&page=2"
        );
    }

    #[test]
    fn all_empty_query_leaves_no_question_mark() {
        let transport = RecordingTransport::new();
        let config = config(&transport);
        let op = Operation::new("getAgents", HttpMethod::Get, "/agents").query("page", "");
        let req = Request::new(&config, op);
        assert_eq!(req.http_request().url, format!("{ENDPOINT}/agents"));
    }

    #[test]
    fn content_type_only_with_body() {
        let transport = RecordingTransport::new();
        let config = config(&transport);

        let get = Request::new(&config, Operation::new("getAgent", HttpMethod::Get, "/agents/1"));
        assert!(get.http_request().header("content-type").is_none());
        assert!(get.http_request().body.is_none());

        let agent = Agent {
            id: 0,
            name: "edge".to_string(),
        };
        let post = Request::new(&config, Operation::new("addAgent", HttpMethod::Post, "/agents"))
            .with_body(&agent)
            .unwrap();
        assert_eq!(
            post.http_request().header("Content-Type"),
            Some("application/json")
        );
        let body: serde_json::Value =
            serde_json::from_slice(post.http_request().body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "edge");
    }

    #[test]
    fn auth_and_xsrf_headers_on_every_request() {
        let transport = RecordingTransport::new();
        let config = config(&transport);
        for method in [
            HttpMethod::Get,
            HttpMethod::Post,
            HttpMethod::Put,
            HttpMethod::Patch,
            HttpMethod::Delete,
        ] {
            let req = Request::new(&config, Operation::new("op", method, "/agents"));
            assert_eq!(
                req.http_request().header("authorization"),
                Some("Basic QWRtaW5pc3RyYXRvcjoyQWNjZXNz")
            );
            assert_eq!(req.http_request().header("x-xsrf-header"), Some("PingAccess"));
            let agent = req.http_request().header("user-agent").unwrap();
            assert!(agent.starts_with("pingaccess-sdk-rust/"));
        }
    }

    #[test]
    fn unauthorized_ignores_body_and_clears_target() {
        let transport = RecordingTransport::new();
        transport.push(401, r#"{"flash":["bad credentials"]}"#);
        let config = config(&transport);

        let mut output = Some(Agent::default());
        let mut req = Request::new(&config, Operation::new("getAgent", HttpMethod::Get, "/agents/1"))
            .with_target(&mut output);
        let err = req.send().unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized));
        assert!(matches!(req.error(), Some(ApiError::Unauthorized)));
        assert_eq!(req.response().map(|r| r.status), Some(401));
        drop(req);
        assert!(output.is_none());
    }

    #[test]
    fn forbidden_is_fixed() {
        let transport = RecordingTransport::new();
        transport.push(403, "<html>nope</html>");
        let config = config(&transport);

        let mut output: Option<Agent> = None;
        let mut req = Request::new(&config, Operation::new("getAgent", HttpMethod::Get, "/agents/1"))
            .with_target(&mut output);
        assert!(matches!(req.send(), Err(ApiError::Forbidden)));
        drop(req);
        assert!(output.is_none());
    }

    #[test]
    fn empty_success_body_leaves_target_unset() {
        let transport = RecordingTransport::new();
        transport.push(200, "");
        let config = config(&transport);

        let mut output: Option<Agent> = None;
        let mut req = Request::new(&config, Operation::new("updateAgent", HttpMethod::Put, "/agents/1"))
            .with_target(&mut output);
        req.send().unwrap();
        drop(req);
        assert!(output.is_none());
    }

    #[test]
    fn null_success_body_leaves_target_unset() {
        let transport = RecordingTransport::new();
        transport.push(200, "null");
        let config = config(&transport);

        let mut output = Some(Agent::default());
        let mut req = Request::new(&config, Operation::new("getAgent", HttpMethod::Get, "/agents/1"))
            .with_target(&mut output);
        req.send().unwrap();
        drop(req);
        assert!(output.is_none());
    }

    #[test]
    fn substituted_dot_segments_reach_the_wire_unchanged() {
        let transport = RecordingTransport::new();
        let config = config(&transport);

        for (id, expected) in [("..", "/agents/.."), ("a/../b", "/agents/a/../b"), (".", "/agents/.")] {
            let path = PathTemplate::new("/agents/{id}").param("id", id).render();
            let mut req = Request::new(&config, Operation::new("getAgent", HttpMethod::Get, path));
            assert_eq!(req.http_request().url, format!("{ENDPOINT}{expected}"));
            req.send().unwrap();
        }
        let calls = transport.calls();
        assert_eq!(calls[0].url, format!("{ENDPOINT}/agents/.."));
        assert_eq!(calls[1].url, format!("{ENDPOINT}/agents/a/../b"));
    }

    #[test]
    fn dot_segments_keep_query_string() {
        let transport = RecordingTransport::new();
        let config = config(&transport);
        let op = Operation::new("getAgentFile", HttpMethod::Get, "/agents/../config/1")
            .query("order", "DESC");
        let req = Request::new(&config, op);
        assert_eq!(
            req.http_request().url,
            format!("{ENDPOINT}/agents/../config/1?order=DESC")
        );
    }

    #[test]
    fn wire_dump_only_when_debug_is_enabled() {
        let send_with = |debug: bool| {
            let transport = RecordingTransport::new();
            transport.push(200, r#"{"id":7,"name":"edge"}"#);
            let config = config(&transport).with_debug(debug);
            let log = CapturedLog::default();
            let subscriber = tracing_subscriber::fmt()
                .with_writer(log.clone())
                .with_max_level(tracing::Level::DEBUG)
                .with_ansi(false)
                .finish();
            tracing::subscriber::with_default(subscriber, || {
                let mut req =
                    Request::new(&config, Operation::new("getAgent", HttpMethod::Get, "/agents/7"));
                req.send().unwrap();
            });
            log.contents()
        };

        let verbose = send_with(true);
        assert!(verbose.contains("outgoing request"));
        assert!(verbose.contains("Authorization: ********"));
        assert!(!verbose.contains("QWRtaW5pc3RyYXRvcjoyQWNjZXNz"));
        assert!(verbose.contains(r#"{"id":7,"name":"edge"}"#));

        let quiet = send_with(false);
        assert!(quiet.contains("request complete"));
        assert!(!quiet.contains("outgoing request"));
        assert!(!quiet.contains(r#"{"id":7,"name":"edge"}"#));
    }

    #[test]
    fn json_body_is_decoded_into_target() {
        let transport = RecordingTransport::new();
        transport.push(200, r#"{"id":7,"name":"edge"}"#);
        let config = config(&transport);

        let mut output: Option<Agent> = None;
        let mut req = Request::new(&config, Operation::new("getAgent", HttpMethod::Get, "/agents/7"))
            .with_target(&mut output);
        req.send().unwrap();
        assert!(req.error().is_none());
        drop(req);
        assert_eq!(
            output,
            Some(Agent {
                id: 7,
                name: "edge".to_string()
            })
        );
    }

    #[test]
    fn string_target_receives_body_verbatim() {
        let pem = "-----BEGIN CERTIFICATE-----\nMIIB{not json}\n-----END CERTIFICATE-----\n";
        let transport = RecordingTransport::new();
        transport.push(200, pem);
        let config = config(&transport);

        let mut output = String::from("stale");
        let mut req = Request::new(
            &config,
            Operation::new("exportCertificateFile", HttpMethod::Get, "/certificates/3/file"),
        )
        .with_target(&mut output);
        req.send().unwrap();
        drop(req);
        assert_eq!(output, pem);
    }

    #[test]
    fn byte_target_receives_binary_body() {
        let transport = RecordingTransport::new();
        transport.push_bytes(200, vec![0x30, 0x82, 0xff, 0x00]);
        let config = config(&transport);

        let mut output = Vec::new();
        let mut req = Request::new(
            &config,
            Operation::new("exportKeyPair", HttpMethod::Post, "/keyPairs/1/pkcs12"),
        )
        .with_target(&mut output);
        req.send().unwrap();
        drop(req);
        assert_eq!(output, vec![0x30, 0x82, 0xff, 0x00]);
    }

    #[test]
    fn structured_error_is_rendered() {
        let transport = RecordingTransport::new();
        transport.push(
            422,
            r#"{"form":{"name":["must not be blank"]},"flash":["validation failed"]}"#,
        );
        let config = config(&transport);

        let mut req = Request::new(&config, Operation::new("addAgent", HttpMethod::Post, "/agents"))
            .with_body(&Agent::default())
            .unwrap();
        let err = req.send().unwrap_err();
        assert_eq!(err.status(), Some(422));
        let message = err.to_string();
        assert!(message.contains("validation failed"));
        let field = message.find("name contains 1 validation failures").unwrap();
        let detail = message.find("must not be blank").unwrap();
        assert!(field < detail);
    }

    #[test]
    fn html_error_body_is_kept_as_text() {
        let page = "<html><body>Internal Server Error</body></html>";
        let transport = RecordingTransport::new();
        transport.push(500, page);
        let config = config(&transport);

        let mut req = Request::new(&config, Operation::new("getVersion", HttpMethod::Get, "/version"));
        let err = req.send().unwrap_err();
        assert!(matches!(err, ApiError::UnparsableResponse { status: 500, .. }));
        assert!(err.to_string().contains(page));
    }

    #[test]
    fn bad_success_body_is_a_decode_error() {
        let transport = RecordingTransport::new();
        transport.push(200, r#"{"id":"not a number"}"#);
        let config = config(&transport);

        let mut output: Option<Agent> = None;
        let mut req = Request::new(&config, Operation::new("getAgent", HttpMethod::Get, "/agents/1"))
            .with_target(&mut output);
        assert!(matches!(req.send(), Err(ApiError::Deserialization(_))));
        drop(req);
        assert!(output.is_none());
    }

    #[test]
    fn serialization_failure_never_reaches_transport() {
        let transport = RecordingTransport::new();
        let config = config(&transport);

        let err = build_request(
            &config,
            Operation::new("addAgent", HttpMethod::Post, "/agents"),
            Some(&Unserializable),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::Serialization(_)));

        let err = Request::new(&config, Operation::new("addAgent", HttpMethod::Post, "/agents"))
            .with_body(&Unserializable)
            .unwrap_err();
        assert!(err.to_string().contains("value refers to itself"));
        assert_eq!(transport.call_count(), 0);
    }

    #[test]
    fn invalid_endpoint_is_reported_on_send_without_io() {
        let transport = RecordingTransport::new();
        let config = Config::new("not a url").with_transport(transport.clone());

        let mut req = Request::new(&config, Operation::new("getVersion", HttpMethod::Get, "/version"));
        assert!(matches!(req.error(), Some(ApiError::InvalidUrl { .. })));
        assert!(matches!(req.send(), Err(ApiError::InvalidUrl { .. })));
        assert_eq!(transport.call_count(), 0);
        assert!(req.response().is_none());
    }

    #[test]
    fn transport_failure_is_returned_unclassified() {
        let transport = RecordingTransport::new();
        transport.push_error(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        ));
        let config = config(&transport);

        let mut req = Request::new(&config, Operation::new("getVersion", HttpMethod::Get, "/version"));
        let err = req.send().unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert!(err.to_string().contains("connection refused"));
        assert!(req.response().is_none());
        assert!(req.attempted_at().is_some());
    }

    #[test]
    fn build_request_sends_body_and_fills_target() {
        let transport = RecordingTransport::new();
        transport.push(200, r#"{"id":9,"name":"edge"}"#);
        let config = config(&transport);

        let input = Agent {
            id: 0,
            name: "edge".to_string(),
        };
        let mut output: Option<Agent> = None;
        let mut req = build_request(
            &config,
            Operation::new("addAgent", HttpMethod::Post, "/agents"),
            Some(&input),
            Some(&mut output),
        )
        .unwrap();
        req.send().unwrap();
        drop(req);

        assert_eq!(output.map(|a| a.id), Some(9));
        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, HttpMethod::Post);
        assert_eq!(calls[0].header("content-type"), Some("application/json"));
    }

    #[test]
    fn each_request_gets_a_fresh_id() {
        let transport = RecordingTransport::new();
        let config = config(&transport);
        let a = Request::new(&config, Operation::new("getVersion", HttpMethod::Get, "/version"));
        let b = Request::new(&config, Operation::new("getVersion", HttpMethod::Get, "/version"));
        assert_ne!(a.id(), b.id());
        assert!(a.attempted_at().is_none());
    }

    #[test]
    fn debug_dump_masks_authorization() {
        let transport = RecordingTransport::new();
        let config = config(&transport);
        let req = Request::new(&config, Operation::new("getVersion", HttpMethod::Get, "/version"));

        let masked = dump_request(req.http_request(), true);
        assert!(masked.contains("Authorization: ********"));
        assert!(!masked.contains("QWRtaW5pc3RyYXRvcjoyQWNjZXNz"));

        let plain = dump_request(req.http_request(), false);
        assert!(plain.contains("Basic QWRtaW5pc3RyYXRvcjoyQWNjZXNz"));
    }
}
