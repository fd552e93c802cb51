use async_trait::async_trait;
use bytes::Bytes;
use http::StatusCode;
use tosspayments_core::header::default_headers;
use tosspayments_core::{Context, Credential, HttpRequester, HttpSend, Requester, Result};

// A transport that never leaves the process: it answers every request with the
// headers it received, so we can see what the requester sends.
#[derive(Debug)]
struct EchoHttpSend;

#[async_trait]
impl HttpSend for EchoHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let headers: serde_json::Map<String, serde_json::Value> = req
            .headers()
            .iter()
            .map(|(k, v)| {
                (
                    k.to_string(),
                    serde_json::Value::String(v.to_str().unwrap_or_default().to_string()),
                )
            })
            .collect();
        let body = serde_json::json!({
            "method": req.method().as_str(),
            "uri": req.uri().to_string(),
            "headers": headers,
        });

        Ok(http::Response::builder()
            .status(StatusCode::OK)
            .body(Bytes::from(serde_json::to_vec(&body)?))?)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cred = Credential::new("test_sk_zXLkKEypNArWmo50nX3lmeaxYG5R")?;

    // Every call builds the same header set with its own idempotency key.
    println!("default headers: {:?}", default_headers(&cred)?.keys().collect::<Vec<_>>());

    let ctx = Context::new().with_http_send(EchoHttpSend);
    let requester = HttpRequester::new("https://api.tosspayments.com/v1/inform", cred, ctx);

    let resp: serde_json::Value = requester.get_async("/api/test").await?;
    println!("{resp:#}");

    Ok(())
}
