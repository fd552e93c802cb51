use async_trait::async_trait;
use bytes::Bytes;
use http::{Method, Request, Response};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::header::default_headers;
use crate::utils::RedactHeaders;
use crate::{Context, Credential, Error, Requester, Result};

/// HttpRequester is the [`Requester`] backed by the [`HttpSend`](crate::HttpSend)
/// configured in [`Context`].
///
/// Requests go to `endpoint + path` with json bodies and the default headers built by
/// [`default_headers`]. Responses are classified by status:
///
/// - `2xx`: the body is decoded as json into the expected type.
/// - anything else, informational `1xx` included: [`ErrorKind::ApiError`](crate::ErrorKind::ApiError)
///   carrying the status and the raw body.
///
/// HttpRequester holds no mutable state and can be shared between tasks.
#[derive(Debug, Clone)]
pub struct HttpRequester {
    endpoint: String,
    credential: Credential,
    ctx: Context,
}

impl HttpRequester {
    /// Create a new requester for `endpoint`.
    pub fn new(endpoint: impl Into<String>, credential: Credential, ctx: Context) -> Self {
        Self {
            endpoint: endpoint.into(),
            credential,
            ctx,
        }
    }

    /// The base endpoint every path is appended to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_request(&self, method: Method, path: &str, body: Bytes) -> Result<Request<Bytes>> {
        let mut req = Request::builder()
            .method(method)
            .uri(format!("{}{}", self.endpoint, path))
            .body(body)?;
        // Headers are built per request so that every call gets its own idempotency key.
        *req.headers_mut() = default_headers(&self.credential)?;

        Ok(req)
    }

    async fn execute<R: DeserializeOwned>(&self, req: Request<Bytes>) -> Result<R> {
        debug!(
            "sending request: {} {}, headers: {:?}",
            req.method(),
            req.uri(),
            RedactHeaders(req.headers())
        );

        let resp = self.ctx.http_send(req).await?;
        debug!("got response status: {}", resp.status());

        parse_response(resp)
    }
}

#[async_trait]
impl Requester for HttpRequester {
    async fn get_async<R>(&self, path: &str) -> Result<R>
    where
        R: DeserializeOwned + Send + 'static,
    {
        let req = self.build_request(Method::GET, path, Bytes::new())?;
        self.execute(req).await
    }

    async fn post_async<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned + Send + 'static,
    {
        let body = serde_json::to_vec(body).map_err(|e| {
            Error::execution_failure("Failed to serialize request body").with_source(e)
        })?;

        let req = self.build_request(Method::POST, path, Bytes::from(body))?;
        self.execute(req).await
    }
}

/// Classify the response and decode its body.
fn parse_response<R: DeserializeOwned>(resp: Response<Bytes>) -> Result<R> {
    let status = resp.status();
    if !status.is_success() {
        let body = String::from_utf8_lossy(resp.body()).into_owned();
        debug!("request failed with status {status}: {body}");
        return Err(Error::api_error(status).with_response_body(body));
    }

    serde_json::from_slice(resp.body())
        .map_err(|e| Error::execution_failure("Failed to parse response body").with_source(e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::IDEMPOTENCY_KEY;
    use crate::{ErrorKind, HttpSend};
    use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
    use http::{HeaderMap, StatusCode};
    use pretty_assertions::assert_eq;
    use serde::Deserialize;
    use std::error::Error as _;
    use std::sync::{Arc, Mutex};
    use test_case::test_case;

    const TEST_ENDPOINT: &str = "https://api.tosspayments.com/v1/inform";
    const TEST_PATH: &str = "/api/test";
    const TEST_BODY: &str = r#"{"message":"Hello, World!"}"#;

    #[derive(Debug, Clone)]
    struct RecordedRequest {
        method: Method,
        uri: String,
        headers: HeaderMap,
        body: Bytes,
    }

    /// Replies with a canned response and records every request it receives.
    #[derive(Debug, Clone)]
    struct StubHttpSend {
        status: StatusCode,
        body: &'static str,
        requests: Arc<Mutex<Vec<RecordedRequest>>>,
    }

    impl StubHttpSend {
        fn new(status: StatusCode, body: &'static str) -> Self {
            Self {
                status,
                body,
                requests: Arc::default(),
            }
        }

        fn requests(&self) -> Vec<RecordedRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpSend for StubHttpSend {
        async fn http_send(&self, req: Request<Bytes>) -> Result<Response<Bytes>> {
            let (parts, body) = req.into_parts();
            self.requests.lock().unwrap().push(RecordedRequest {
                method: parts.method,
                uri: parts.uri.to_string(),
                headers: parts.headers,
                body,
            });
            Ok(Response::builder()
                .status(self.status)
                .body(Bytes::from_static(self.body.as_bytes()))?)
        }
    }

    /// Fails every request the way a refused connection does.
    #[derive(Debug)]
    struct RefusingHttpSend;

    #[async_trait]
    impl HttpSend for RefusingHttpSend {
        async fn http_send(&self, _: Request<Bytes>) -> Result<Response<Bytes>> {
            Err(Error::execution_failure("failed to send request").with_source(
                std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused"),
            ))
        }
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Message {
        message: String,
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> std::result::Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("custom exception message"))
        }
    }

    fn new_requester(http: impl HttpSend) -> HttpRequester {
        let cred = Credential::new("test_sk").expect("credential must be valid");
        HttpRequester::new(TEST_ENDPOINT, cred, Context::new().with_http_send(http))
    }

    #[tokio::test]
    async fn test_get_async_success() -> anyhow::Result<()> {
        let http = StubHttpSend::new(StatusCode::OK, TEST_BODY);
        let requester = new_requester(http.clone());

        let resp: Message = requester.get_async(TEST_PATH).await?;
        assert_eq!(resp.message, "Hello, World!");

        let reqs = http.requests();
        assert_eq!(reqs.len(), 1);
        assert_eq!(reqs[0].method, Method::GET);
        assert_eq!(reqs[0].uri, "https://api.tosspayments.com/v1/inform/api/test");
        assert!(reqs[0].body.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_request_carries_default_headers() -> anyhow::Result<()> {
        let http = StubHttpSend::new(StatusCode::OK, TEST_BODY);
        let requester = new_requester(http.clone());

        let _: serde_json::Value = requester.get_async(TEST_PATH).await?;
        let _: serde_json::Value = requester.post_async(TEST_PATH, &()).await?;

        let reqs = http.requests();
        for req in &reqs {
            assert_eq!(req.headers[CONTENT_TYPE], "application/json");
            assert_eq!(req.headers[ACCEPT], "application/json");
            assert_eq!(req.headers[AUTHORIZATION], "Basic dGVzdF9zazo=");
        }
        assert_ne!(
            reqs[0].headers[IDEMPOTENCY_KEY],
            reqs[1].headers[IDEMPOTENCY_KEY]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_post_async_serializes_body() -> anyhow::Result<()> {
        let http = StubHttpSend::new(StatusCode::OK, TEST_BODY);
        let requester = new_requester(http.clone());

        let body = serde_json::json!({ "orderId": "order-1", "amount": 1000 });
        let resp: Message = requester.post_async(TEST_PATH, &body).await?;
        assert_eq!(resp.message, "Hello, World!");

        let reqs = http.requests();
        assert_eq!(reqs[0].method, Method::POST);
        let sent: serde_json::Value = serde_json::from_slice(&reqs[0].body)?;
        assert_eq!(sent, body);

        Ok(())
    }

    #[test_case(StatusCode::CONTINUE ; "continue")]
    #[test_case(StatusCode::PROCESSING ; "processing")]
    #[test_case(StatusCode::MULTIPLE_CHOICES ; "multiple choices")]
    #[test_case(StatusCode::BAD_REQUEST ; "bad request")]
    #[test_case(StatusCode::UNAUTHORIZED ; "unauthorized")]
    #[test_case(StatusCode::NOT_FOUND ; "not found")]
    #[test_case(StatusCode::INTERNAL_SERVER_ERROR ; "internal server error")]
    #[tokio::test]
    async fn test_get_async_non_success_status(status: StatusCode) {
        let requester = new_requester(StubHttpSend::new(status, TEST_BODY));

        let err = requester
            .get_async::<serde_json::Value>(TEST_PATH)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ApiError);
        assert_eq!(err.status_code(), Some(status));
        assert_eq!(err.response_body(), Some(TEST_BODY));
    }

    #[test_case(StatusCode::OK ; "ok")]
    #[test_case(StatusCode::CREATED ; "created")]
    #[test_case(StatusCode::ACCEPTED ; "accepted")]
    #[tokio::test]
    async fn test_get_async_success_status(status: StatusCode) {
        let requester = new_requester(StubHttpSend::new(status, TEST_BODY));

        let resp: Message = requester.get_async(TEST_PATH).await.unwrap();
        assert_eq!(resp.message, "Hello, World!");
    }

    #[tokio::test]
    async fn test_post_async_bad_request() {
        let requester = new_requester(StubHttpSend::new(StatusCode::BAD_REQUEST, TEST_BODY));

        let err = requester
            .post_async::<_, serde_json::Value>(TEST_PATH, &serde_json::json!({}))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ApiError);
        assert_eq!(err.status_code(), Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_transport_failure_is_execution_failure() {
        let requester = new_requester(RefusingHttpSend);

        let err = requester
            .get_async::<serde_json::Value>(TEST_PATH)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ExecutionFailure);
        assert!(err.source().is_some());
    }

    #[tokio::test]
    async fn test_undecodable_body_is_execution_failure() {
        let requester = new_requester(StubHttpSend::new(StatusCode::OK, TEST_BODY));

        let err = requester.get_async::<Vec<u64>>(TEST_PATH).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ExecutionFailure);
        assert!(err.to_string().contains("Failed to parse response body"));
        assert!(err.source().is_some());
    }

    #[tokio::test]
    async fn test_unserializable_body_fails_before_sending() {
        let http = StubHttpSend::new(StatusCode::OK, TEST_BODY);
        let requester = new_requester(http.clone());

        let err = requester
            .post_async::<_, serde_json::Value>(TEST_PATH, &Unserializable)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ExecutionFailure);
        assert!(err.source().is_some());
        assert!(http.requests().is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_blocking_and_async_agree() -> anyhow::Result<()> {
        let requester = new_requester(StubHttpSend::new(StatusCode::OK, TEST_BODY));

        let blocking: serde_json::Value = requester.get(TEST_PATH)?;
        let non_blocking: serde_json::Value = requester.get_async(TEST_PATH).await?;
        assert_eq!(blocking, non_blocking);

        let err = new_requester(StubHttpSend::new(StatusCode::BAD_REQUEST, TEST_BODY))
            .post::<_, serde_json::Value>(TEST_PATH, &serde_json::json!({}))
            .unwrap_err();
        assert_eq!(err.status_code(), Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
