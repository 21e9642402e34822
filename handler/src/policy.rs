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

//! Retrieval and upsert adapters around the service calls.
//!
//! These are the only places that talk to the [`Iam`] client and the
//! only places that translate service conditions into typed failures.
//! Everything not translated here propagates unchanged; the host's
//! retry envelope owns resilience.

use crate::model::ResourceModel;
use crate::TYPE_NAME;
use oc_password_policy_core::HandlerError;
use oc_password_policy_core::Iam;
use oc_password_policy_core::IamError;
use tracing::info;
use uuid::Uuid;

/// Fetch the current policy and merge it over `model`.
///
/// Service values win on overlap; fields absent from the response keep
/// the input model's value. When the merged model still has no
/// `ResourceId`, the caller-supplied logical identifier is assigned as
/// the correlation key.
///
/// # Errors
///
/// `NotFound` when the service reports no policy for the account,
/// carrying the best-available identifier (model's id, else logical
/// id). Any other service failure propagates untranslated.
pub(crate) async fn retrieve_password_policy<C: Iam>(
    client: &C,
    model: &ResourceModel,
    logical_id: Option<&str>,
) -> Result<ResourceModel, HandlerError<C::Error>> {
    match client.get_account_password_policy().await {
        Ok(fields) => {
            let mut merged = model.clone();
            for (name, value) in fields {
                merged.set(&name, value)?;
            }
            if merged.resource_id.is_none() {
                merged.resource_id = logical_id.map(str::to_owned);
            }
            info!(
                "{} [{}] [{}] successfully retrieved.",
                TYPE_NAME,
                merged.resource_id.as_deref().unwrap_or(""),
                logical_id.unwrap_or("")
            );
            Ok(merged)
        }
        Err(err) if err.is_no_such_entity() => Err(HandlerError::NotFound {
            type_name: TYPE_NAME,
            identifier: model
                .resource_id
                .clone()
                .or_else(|| logical_id.map(str::to_owned))
                .unwrap_or_default(),
        }),
        Err(err) => Err(HandlerError::Service(err)),
    }
}

/// Push `model` to the service, assigning a fresh synthetic identifier
/// first when it has none.
///
/// The identifier is a random UUID used purely for correlation across
/// subsequent Read/Update invocations; it never reaches the service
/// (see [`ResourceModel::api_params`]).
///
/// # Errors
///
/// `InternalFailure` when the binding rejects a parameter's type. Any
/// other service failure propagates untranslated.
pub(crate) async fn upsert_password_policy<C: Iam>(
    client: &C,
    mut model: ResourceModel,
    logical_id: Option<&str>,
) -> Result<ResourceModel, HandlerError<C::Error>> {
    if model.resource_id.is_none() {
        model.resource_id = Some(Uuid::new_v4().to_string());
    }
    match client.update_account_password_policy(&model.api_params()).await {
        Ok(()) => {
            info!(
                "{} [{}] [{}] successfully upserted.",
                TYPE_NAME,
                model.resource_id.as_deref().unwrap_or(""),
                logical_id.unwrap_or("")
            );
            Ok(model)
        }
        Err(err) if err.is_invalid_parameter_type() => Err(HandlerError::InternalFailure(
            format!("was not expecting type: {}", err),
        )),
        Err(err) => Err(HandlerError::Service(err)),
    }
}
