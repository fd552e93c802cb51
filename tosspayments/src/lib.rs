#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use tosspayments_core::*;

pub mod constants;
pub use constants::{
    ENDPOINT, TOSS_PAYMENTS_CONNECT_TIMEOUT, TOSS_PAYMENTS_ENDPOINT, TOSS_PAYMENTS_SECRET_KEY,
};

mod config;
pub use config::Config;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::default_context;

use log::debug;

/// Root object of the Toss Payments SDK.
///
/// Owns one [`Requester`], the reqwest backed [`HttpRequester`] unless a custom one is
/// supplied. The secret key is always validated at construction.
#[derive(Debug, Clone)]
pub struct TossPayments<Q: Requester = HttpRequester> {
    requester: Q,
}

#[cfg(feature = "default-context")]
impl TossPayments {
    /// Create a new instance talking to [`ENDPOINT`] with the given secret key.
    pub fn new(secret_key: impl Into<String>) -> Result<Self> {
        Self::from_config(Config::new().with_secret_key(secret_key))
    }

    /// Create a new instance configured by `TOSS_PAYMENTS_*` environment variables.
    pub fn from_env() -> Result<Self> {
        let ctx = Context::new().with_env(OsEnv);
        Self::from_config(Config::new().from_env(&ctx))
    }

    /// Create a new instance from config, sending requests with reqwest.
    pub fn from_config(config: Config) -> Result<Self> {
        let credential = config.credential()?;
        let ctx = default_context(config.connect_timeout())?;

        Ok(Self::from_parts(&config, credential, ctx))
    }
}

impl TossPayments {
    /// Create a new instance from config, sending requests through the transport of `ctx`.
    ///
    /// `config.connect_timeout` is not applied: the transport in `ctx` owns its timeouts.
    pub fn from_context(config: Config, ctx: Context) -> Result<Self> {
        let credential = config.credential()?;

        Ok(Self::from_parts(&config, credential, ctx))
    }

    fn from_parts(config: &Config, credential: Credential, ctx: Context) -> Self {
        debug!(
            "building toss payments requester for {} with {:?}",
            config.endpoint(),
            credential
        );

        Self {
            requester: HttpRequester::new(config.endpoint(), credential, ctx),
        }
    }
}

impl<Q: Requester> TossPayments<Q> {
    /// Create a new instance using a custom requester.
    ///
    /// The secret key is validated even though `requester` carries its own authentication.
    pub fn with_requester(secret_key: impl Into<String>, requester: Q) -> Result<Self> {
        Credential::new(secret_key)?;

        Ok(Self { requester })
    }

    /// The requester used by this instance.
    pub fn requester(&self) -> &Q {
        &self.requester
    }
}
