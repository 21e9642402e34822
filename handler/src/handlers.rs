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

//! The five lifecycle handlers.
//!
//! Each handler takes the optional authenticated session, the incoming
//! request, and the opaque callback context, and returns a progress
//! envelope or a [`HandlerError`]. Handlers never format errors for the
//! host; that happens once, in [`crate::resource::handle`].
//!
//! A missing session means credentials are not yet available: every
//! handler defers with IN_PROGRESS so the host re-invokes later. Each
//! invocation builds a fresh model from the request's desired state;
//! nothing is persisted across invocations — the service is the only
//! durable store.

use crate::model::ResourceModel;
use crate::policy::retrieve_password_policy;
use crate::policy::upsert_password_policy;
use crate::TYPE_NAME;
use oc_password_policy_core::CallbackContext;
use oc_password_policy_core::ConversionError;
use oc_password_policy_core::HandlerError;
use oc_password_policy_core::Iam;
use oc_password_policy_core::OperationStatus;
use oc_password_policy_core::ProgressEvent;
use oc_password_policy_core::ResourceHandlerRequest;
use serde_json::Value as JsonValue;
use tracing::info;

/// Request shape this resource receives: desired state arrives loosely
/// typed and is rebuilt coercively.
pub type Request = ResourceHandlerRequest<JsonValue>;

fn desired_model(request: &Request) -> Result<ResourceModel, ConversionError> {
    match &request.desired_resource_state {
        Some(state) => ResourceModel::from_value(state),
        None => Ok(ResourceModel::default()),
    }
}

/// Create the password policy.
///
/// The service upserts this singleton, so Create pushes the desired
/// state without an existence pre-check.
pub async fn create<C: Iam>(
    session: Option<&C>,
    request: &Request,
    _callback_context: &mut CallbackContext,
) -> Result<ProgressEvent<ResourceModel>, HandlerError<C::Error>> {
    let model = desired_model(request)?;
    match session {
        Some(client) => {
            let model = upsert_password_policy(client, model, request.logical_id()).await?;
            Ok(ProgressEvent::success(model))
        }
        None => Ok(ProgressEvent::in_progress(model)),
    }
}

/// Update the password policy.
///
/// Retrieval runs first purely as an existence probe: its result is
/// discarded, but a vanished policy surfaces as `NotFound` here rather
/// than being silently recreated.
pub async fn update<C: Iam>(
    session: Option<&C>,
    request: &Request,
    _callback_context: &mut CallbackContext,
) -> Result<ProgressEvent<ResourceModel>, HandlerError<C::Error>> {
    let model = desired_model(request)?;
    match session {
        Some(client) => {
            let _ = retrieve_password_policy(client, &model, request.logical_id()).await?;
            let correlation_id = model
                .resource_id
                .clone()
                .or_else(|| request.logical_id().map(str::to_owned));
            let model = upsert_password_policy(client, model, correlation_id.as_deref()).await?;
            Ok(ProgressEvent::success(model))
        }
        None => Ok(ProgressEvent::in_progress(model)),
    }
}

/// Delete the password policy.
///
/// Delegates to [`read`] first so the deleted state is on record, then
/// issues the unconditional delete.
pub async fn delete<C: Iam>(
    session: Option<&C>,
    request: &Request,
    callback_context: &mut CallbackContext,
) -> Result<ProgressEvent<ResourceModel>, HandlerError<C::Error>> {
    let progress = read(session, request, callback_context).await?;
    if let Some(client) = session {
        client
            .delete_account_password_policy()
            .await
            .map_err(HandlerError::Service)?;
        info!(
            "{} [{}] [{}] successfully deleted.",
            TYPE_NAME,
            progress
                .resource_model
                .as_ref()
                .and_then(|m| m.resource_id.as_deref())
                .unwrap_or(""),
            request.logical_id().unwrap_or("")
        );
    }
    Ok(progress)
}

/// Read the current password policy.
pub async fn read<C: Iam>(
    session: Option<&C>,
    request: &Request,
    _callback_context: &mut CallbackContext,
) -> Result<ProgressEvent<ResourceModel>, HandlerError<C::Error>> {
    let model = desired_model(request)?;
    match session {
        Some(client) => {
            let model = retrieve_password_policy(client, &model, request.logical_id()).await?;
            Ok(ProgressEvent::success(model))
        }
        None => Ok(ProgressEvent::in_progress(model)),
    }
}

/// List password policies.
///
/// The resource is a singleton, so the listing is the retrieved policy
/// or nothing; a missing policy surfaces as `NotFound` from retrieval.
pub async fn list<C: Iam>(
    session: Option<&C>,
    request: &Request,
    _callback_context: &mut CallbackContext,
) -> Result<ProgressEvent<ResourceModel>, HandlerError<C::Error>> {
    let model = desired_model(request)?;
    match session {
        Some(client) => {
            let model = retrieve_password_policy(client, &model, request.logical_id()).await?;
            Ok(ProgressEvent::success_list(vec![model]))
        }
        None => Ok(ProgressEvent {
            status: OperationStatus::InProgress,
            resource_model: None,
            resource_models: Some(Vec::new()),
            error_code: None,
            message: None,
        }),
    }
}
