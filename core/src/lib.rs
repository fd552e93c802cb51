//! Core components for calling the Toss Payments API.
//!
//! This crate provides the request executor used by the `tosspayments` crate:
//! authenticated, idempotency-tagged json requests over a pluggable transport.
//!
//! ## Overview
//!
//! The crate is built around several key concepts:
//!
//! - **Credential**: the validated secret key issued by Toss Payments
//! - **Headers**: the default header set derived from a credential for every request
//! - **Requester**: the capability to send GET/POST requests, both async and blocking
//! - **Context**: a container holding the [`HttpSend`] transport and [`Env`] implementations
//!
//! ## Example
//!
//! ```no_run
//! use async_trait::async_trait;
//! use bytes::Bytes;
//! use tosspayments_core::{Context, Credential, HttpRequester, HttpSend, Requester, Result};
//!
//! // Bring your own transport.
//! #[derive(Debug)]
//! struct MyHttpSend;
//!
//! #[async_trait]
//! impl HttpSend for MyHttpSend {
//!     async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
//!         todo!()
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new().with_http_send(MyHttpSend);
//! let cred = Credential::new("test_sk_zXLkKEypNArWmo50nX3lmeaxYG5R")?;
//! let requester = HttpRequester::new("https://api.tosspayments.com/v1/inform", cred, ctx);
//!
//! let resp: serde_json::Value = requester.get_async("/api/test").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Every operation returns [`Error`], classified by [`ErrorKind`]:
//!
//! - [`ErrorKind::CredentialInvalid`]: the secret key is missing or empty
//! - [`ErrorKind::ApiError`]: Toss Payments answered with a non-success status
//! - [`ErrorKind::ExecutionFailure`]: the request could not be sent or its body could not be (de)serialized

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod constants;
pub mod header;
pub mod utils;

mod context;
pub use context::{Context, Env, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv};
mod credential;
pub use credential::Credential;
mod error;
pub use error::{Error, ErrorKind, Result};
mod requester;
pub use requester::Requester;
mod http_requester;
pub use http_requester::HttpRequester;
