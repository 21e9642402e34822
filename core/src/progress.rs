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

//! Lifecycle actions and the progress envelope.
//!
//! These types mirror the host dispatcher's wire contract: an incoming
//! request names one of five fixed actions, and every handler returns a
//! [`ProgressEvent`] with a status, the resource model (or models, for
//! List), and an error code when FAILED.

use serde::Deserialize;
use serde::Serialize;

/// Lifecycle action requested by the host.
///
/// The set is fixed by the host plugin contract; there is nothing to
/// generalize beyond these five.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Create,
    Update,
    Delete,
    Read,
    List,
}

/// Progress status of a single handler invocation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationStatus {
    InProgress,
    Success,
    Failed,
}

/// Error codes the host understands in a FAILED envelope.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HandlerErrorCode {
    AlreadyExists,
    NotFound,
    InvalidRequest,
    GeneralServiceException,
    InternalFailure,
}

/// Standard return shape of every lifecycle handler.
///
/// `resource_model` is set for single-resource actions, and
/// `resource_models` only for List. Unset fields are omitted on the
/// wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEvent<T> {
    pub status: OperationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_model: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_models: Option<Vec<T>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<HandlerErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ProgressEvent<T> {
    /// Envelope signalling the host to re-invoke once credentials are
    /// available. Carries the desired-state model unchanged.
    #[must_use]
    pub fn in_progress(model: T) -> Self {
        Self {
            status: OperationStatus::InProgress,
            resource_model: Some(model),
            resource_models: None,
            error_code: None,
            message: None,
        }
    }

    /// Terminal success with the resulting model.
    #[must_use]
    pub fn success(model: T) -> Self {
        Self {
            status: OperationStatus::Success,
            resource_model: Some(model),
            resource_models: None,
            error_code: None,
            message: None,
        }
    }

    /// Terminal success of a List invocation.
    #[must_use]
    pub fn success_list(models: Vec<T>) -> Self {
        Self {
            status: OperationStatus::Success,
            resource_model: None,
            resource_models: Some(models),
            error_code: None,
            message: None,
        }
    }

    /// Terminal failure with a host error code.
    #[must_use]
    pub fn failed(error_code: HandlerErrorCode, message: impl Into<String>) -> Self {
        Self {
            status: OperationStatus::Failed,
            resource_model: None,
            resource_models: None,
            error_code: Some(error_code),
            message: Some(message.into()),
        }
    }
}
