// SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Expectations for the IAM mock.

use serde_json::from_str;
use serde_json::Value as JsonValue;
use std::fmt::Display;

/// A service error to inject, shaped like the wire error: a code the
/// handler classifies on plus a human message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceFailure {
    pub code: String,
    pub message: String,
}

impl ServiceFailure {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

pub type Response = Result<JsonValue, ServiceFailure>;

/// Request expected by the mock.
#[derive(Debug)]
pub enum ExpectedRequest {
    /// Expected get-account-password-policy.
    GetPolicy,
    /// Expected update-account-password-policy with exactly these
    /// parameters.
    UpdatePolicy { params: JsonValue },
    /// Expected delete-account-password-policy.
    DeletePolicy,
}

/// Expectation for the tests.
#[derive(Debug)]
pub struct Expect {
    pub request: ExpectedRequest,
    pub response: Response,
}

impl Expect {
    /// Expect a get, answering with the given policy fields.
    pub fn get(policy: impl Display) -> Self {
        Expect {
            request: ExpectedRequest::GetPolicy,
            response: Ok(from_str(&policy.to_string()).expect("invalid json")),
        }
    }

    /// Expect a get, answering with a service error.
    pub fn get_err(code: impl Into<String>, message: impl Into<String>) -> Self {
        Expect {
            request: ExpectedRequest::GetPolicy,
            response: Err(ServiceFailure::new(code, message)),
        }
    }

    /// Expect an update with exactly these parameters.
    pub fn update(params: impl Display) -> Self {
        Expect {
            request: ExpectedRequest::UpdatePolicy {
                params: from_str(&params.to_string()).expect("invalid json"),
            },
            response: Ok(JsonValue::Null),
        }
    }

    /// Expect an update, answering with a service error.
    pub fn update_err(
        params: impl Display,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Expect {
            request: ExpectedRequest::UpdatePolicy {
                params: from_str(&params.to_string()).expect("invalid json"),
            },
            response: Err(ServiceFailure::new(code, message)),
        }
    }

    /// Expect a delete.
    pub fn delete() -> Self {
        Expect {
            request: ExpectedRequest::DeletePolicy,
            response: Ok(JsonValue::Null),
        }
    }

    /// Expect a delete, answering with a service error.
    pub fn delete_err(code: impl Into<String>, message: impl Into<String>) -> Self {
        Expect {
            request: ExpectedRequest::DeletePolicy,
            response: Err(ServiceFailure::new(code, message)),
        }
    }
}
