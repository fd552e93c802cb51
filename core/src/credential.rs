// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.


use std::fmt::{Debug, Formatter};

use crate::utils::Redact;
use crate::{Error, Result};

/// Credential for Toss Payments.
///
/// Holds the secret key issued by Toss Payments. The key is validated when the
/// credential is built, so a `Credential` value is always usable for signing.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    secret_key: String,
}

impl Credential {
    /// Create a new credential.
    ///
    /// Returns [`ErrorKind::CredentialInvalid`](crate::ErrorKind::CredentialInvalid)
    /// if `secret_key` is empty.
    pub fn new(secret_key: impl Into<String>) -> Result<Self> {
        let secret_key = secret_key.into();
        if secret_key.is_empty() {
            return Err(Error::credential_invalid(
                "Secret key must not be null or empty",
            ));
        }

        Ok(Self { secret_key })
    }

    /// Create a credential from a key that may not be configured at all.
    pub fn from_optional(secret_key: Option<String>) -> Result<Self> {
        match secret_key {
            Some(secret_key) => Self::new(secret_key),
            None => Err(Error::credential_invalid(
                "Secret key must not be null or empty",
            )),
        }
    }

    pub(crate) fn secret_key(&self) -> &str {
        &self.secret_key
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("secret_key", &Redact::from(&self.secret_key))
            .finish()
    }
}
