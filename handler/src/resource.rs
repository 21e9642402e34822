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

//! Dispatch entry for the host runtime.
//!
//! Routes a tagged [`Action`] to its handler and converts a
//! [`HandlerError`] into the FAILED envelope the host expects. This is
//! the single place failures are formatted; handlers and adapters only
//! ever raise.

use crate::handlers;
use crate::handlers::Request;
use crate::model::ResourceModel;
use oc_password_policy_core::Action;
use oc_password_policy_core::CallbackContext;
use oc_password_policy_core::Iam;
use oc_password_policy_core::ProgressEvent;

/// Handle one lifecycle request.
///
/// Never fails: any handler error becomes a FAILED envelope carrying
/// the corresponding host error code and the error's display message.
pub async fn handle<C: Iam>(
    action: Action,
    session: Option<&C>,
    request: &Request,
    callback_context: &mut CallbackContext,
) -> ProgressEvent<ResourceModel> {
    let result = match action {
        Action::Create => handlers::create(session, request, callback_context).await,
        Action::Update => handlers::update(session, request, callback_context).await,
        Action::Delete => handlers::delete(session, request, callback_context).await,
        Action::Read => handlers::read(session, request, callback_context).await,
        Action::List => handlers::list(session, request, callback_context).await,
    };
    match result {
        Ok(progress) => progress,
        Err(err) => ProgressEvent::failed(err.error_code(), err.to_string()),
    }
}
