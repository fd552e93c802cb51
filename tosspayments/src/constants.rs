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

//! Constants used by Toss Payments, including the ones of `tosspayments-core`.

pub use tosspayments_core::constants::*;

/// Base URL of every Toss Payments API request.
pub const ENDPOINT: &str = "https://api.tosspayments.com/v1/inform";

// Env values used by `Config::from_env`.
pub const TOSS_PAYMENTS_SECRET_KEY: &str = "TOSS_PAYMENTS_SECRET_KEY";
pub const TOSS_PAYMENTS_ENDPOINT: &str = "TOSS_PAYMENTS_ENDPOINT";
pub const TOSS_PAYMENTS_CONNECT_TIMEOUT: &str = "TOSS_PAYMENTS_CONNECT_TIMEOUT";
