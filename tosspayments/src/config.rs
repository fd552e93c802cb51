use std::fmt::{Debug, Formatter};
use std::time::Duration;

use log::warn;
use tosspayments_core::utils::Redact;
use tosspayments_core::{Context, Credential, Result};

use crate::constants::*;

/// Config carries all the configuration for Toss Payments.
#[derive(Clone, Default)]
pub struct Config {
    /// `secret_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`TOSS_PAYMENTS_SECRET_KEY`]
    pub secret_key: Option<String>,
    /// `endpoint` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`TOSS_PAYMENTS_ENDPOINT`]
    /// - default to [`ENDPOINT`]
    pub endpoint: Option<String>,
    /// `connect_timeout` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`TOSS_PAYMENTS_CONNECT_TIMEOUT`], in seconds
    /// - default to 10 seconds
    pub connect_timeout: Option<Duration>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set secret_key
    pub fn with_secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = Some(secret_key.into());
        self
    }

    /// Set endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set connect_timeout
    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = Some(connect_timeout);
        self
    }

    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(TOSS_PAYMENTS_SECRET_KEY) {
            self.secret_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(TOSS_PAYMENTS_ENDPOINT) {
            self.endpoint.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(TOSS_PAYMENTS_CONNECT_TIMEOUT) {
            match v.parse::<u64>() {
                Ok(secs) => {
                    self.connect_timeout
                        .get_or_insert(Duration::from_secs(secs));
                }
                Err(e) => warn!("ignoring invalid {TOSS_PAYMENTS_CONNECT_TIMEOUT} {v:?}: {e}"),
            }
        }

        self
    }

    /// Build the credential from the configured secret key.
    pub fn credential(&self) -> Result<Credential> {
        Credential::from_optional(self.secret_key.clone())
    }

    /// The configured endpoint, or [`ENDPOINT`].
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(ENDPOINT)
    }

    /// The configured connect timeout, or 10 seconds.
    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT)
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("secret_key", &self.secret_key.as_ref().map(Redact::from))
            .field("endpoint", &self.endpoint)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}
