use std::time::Duration;

use tosspayments_core::{Context, OsEnv, Result};
use tosspayments_http_send_reqwest::ReqwestHttpSend;

/// Create a context sending requests with reqwest and reading the OS environment.
///
/// `connect_timeout` bounds connection establishment only.
pub fn default_context(connect_timeout: Duration) -> Result<Context> {
    Ok(Context::new()
        .with_http_send(ReqwestHttpSend::with_connect_timeout(connect_timeout)?)
        .with_env(OsEnv))
}
