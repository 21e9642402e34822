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

//! Incoming request shape supplied by the host dispatcher.

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map as JsonMap;
use serde_json::Value as JsonValue;

/// Opaque host-managed state carried between re-invocations of the same
/// operation. This resource never writes to it.
pub type CallbackContext = JsonMap<String, JsonValue>;

/// One lifecycle request as handed over by the host.
///
/// `T` is the resource model type. Desired state arrives loosely typed
/// (the host does not enforce the schema's value types), which is why
/// handlers rebuild their model coercively instead of deserializing it
/// directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceHandlerRequest<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_resource_state: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_resource_state: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logical_resource_identifier: Option<String>,
}

impl<T> ResourceHandlerRequest<T> {
    /// The logical identifier, if the host supplied one.
    #[must_use]
    pub fn logical_id(&self) -> Option<&str> {
        self.logical_resource_identifier.as_deref()
    }
}
