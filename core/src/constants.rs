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


//! Constants shared by requests and transports.

use std::time::Duration;

/// Name of the header carrying the per-request idempotency token.
pub const IDEMPOTENCY_KEY: &str = "idempotency-key";

/// Media type of every request and response body.
pub const APPLICATION_JSON: &str = "application/json";

/// Scheme prefix of the `Authorization` header value.
pub const BASIC_TOKEN_PREFIX: &str = "Basic ";

/// Connect timeout applied by the default transport when none is configured.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
