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

//! Shared fixtures for the handler integration tests.

pub use oc_password_policy_iam_mock::Expect;
pub use oc_password_policy_iam_mock::Iam;

use oc_password_policy::handlers::Request;
use serde_json::Value as JsonValue;

/// Logical identifier the host assigns to the declaration in the tests.
pub const LOGICAL_ID: &str = "AccountPasswordPolicy";

/// Build a lifecycle request with the given desired state.
pub fn request(desired_state: JsonValue) -> Request {
    Request {
        desired_resource_state: Some(desired_state),
        previous_resource_state: None,
        logical_resource_identifier: Some(LOGICAL_ID.to_string()),
    }
}
