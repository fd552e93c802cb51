//! Default headers attached to every Toss Payments request.

use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use http::header::{HeaderName, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderMap, HeaderValue};

use crate::constants::*;
use crate::{Credential, Result};

/// Build the default header set for one request.
///
/// The returned map contains:
///
/// - `Content-Type: application/json`
/// - `Accept: application/json`
/// - `Authorization: Basic base64(secret_key + ":")`, marked as sensitive
/// - `Idempotency-Key`: a freshly generated token, never reused
///
/// Call it once per outgoing request: two calls never share an idempotency key.
pub fn default_headers(credential: &Credential) -> Result<HeaderMap> {
    let mut headers = HeaderMap::with_capacity(4);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
    headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
    headers.insert(AUTHORIZATION, {
        let mut value: HeaderValue = basic_authorization(credential.secret_key()).parse()?;
        value.set_sensitive(true);

        value
    });
    headers.insert(
        HeaderName::from_static(IDEMPOTENCY_KEY),
        idempotency_key().parse()?,
    );

    Ok(headers)
}

/// Basic authorization value using the secret key as username and an empty password.
pub fn basic_authorization(secret_key: &str) -> String {
    format!(
        "{BASIC_TOKEN_PREFIX}{}",
        BASE64_STANDARD.encode(format!("{secret_key}:"))
    )
}

/// Generate a random 128-bit idempotency token formatted as a UUID v4.
pub fn idempotency_key() -> String {
    let mut bytes: [u8; 16] = rand::random();
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    let hex = hex::encode(bytes);
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}
