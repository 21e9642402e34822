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

//! Error translation and the dispatch entry's FAILED envelope.

use oc_password_policy::handle;
use oc_password_policy::handlers;
use oc_password_policy_core::Action;
use oc_password_policy_core::CallbackContext;
use oc_password_policy_core::HandlerError;
use oc_password_policy_core::HandlerErrorCode;
use oc_password_policy_core::OperationStatus;
use oc_password_policy_tests::request;
use oc_password_policy_tests::Expect;
use oc_password_policy_tests::Iam;
use serde_json::json;
use std::error::Error as StdError;
use tokio::test;

#[test]
async fn parameter_type_rejection_is_internal_failure() -> Result<(), Box<dyn StdError>> {
    let iam = Iam::default();
    iam.expect(Expect::update_err(
        json!({"MinimumPasswordLength": 12}),
        "InvalidParameterType",
        "MinimumPasswordLength must be an integer",
    ));
    let req = request(json!({"MinimumPasswordLength": 12}));
    let mut ctx = CallbackContext::new();

    let err = handlers::create(Some(&iam), &req, &mut ctx)
        .await
        .unwrap_err();
    match err {
        HandlerError::InternalFailure(message) => {
            assert!(message.contains("was not expecting type"));
        }
        other => panic!("expected InternalFailure, got {:?}", other),
    }
    Ok(())
}

#[test]
async fn other_service_errors_propagate_untranslated() -> Result<(), Box<dyn StdError>> {
    let iam = Iam::default();
    iam.expect(Expect::get_err("AccessDenied", "not authorized"));
    let req = request(json!({}));
    let mut ctx = CallbackContext::new();

    let err = handlers::read(Some(&iam), &req, &mut ctx).await.unwrap_err();
    match err {
        HandlerError::Service(inner) => {
            assert!(inner.to_string().contains("AccessDenied"));
        }
        other => panic!("expected Service, got {:?}", other),
    }
    Ok(())
}

#[test]
async fn delete_failure_propagates_untranslated() -> Result<(), Box<dyn StdError>> {
    let iam = Iam::default();
    iam.expect(Expect::get(json!({"MinimumPasswordLength": 12})));
    iam.expect(Expect::delete_err("Throttling", "rate exceeded"));
    let req = request(json!({}));
    let mut ctx = CallbackContext::new();

    let err = handlers::delete(Some(&iam), &req, &mut ctx)
        .await
        .unwrap_err();
    assert!(matches!(err, HandlerError::Service(_)));
    Ok(())
}

#[test]
async fn dispatch_formats_not_found_envelope() {
    let iam = Iam::default();
    iam.expect(Expect::get_err("NoSuchEntity", "no policy for account"));
    let req = request(json!({}));
    let mut ctx = CallbackContext::new();

    let progress = handle(Action::Read, Some(&iam), &req, &mut ctx).await;
    assert_eq!(progress.status, OperationStatus::Failed);
    assert_eq!(progress.error_code, Some(HandlerErrorCode::NotFound));
    assert!(progress.message.unwrap().contains("not found"));
}

#[test]
async fn dispatch_formats_conversion_failure_envelope() {
    let iam = Iam::default();
    let req = request(json!({"MinimumPasswordLength": "a dozen"}));
    let mut ctx = CallbackContext::new();

    let progress = handle(Action::Create, Some(&iam), &req, &mut ctx).await;
    assert_eq!(progress.status, OperationStatus::Failed);
    assert_eq!(progress.error_code, Some(HandlerErrorCode::InvalidRequest));
    assert!(progress.message.unwrap().contains("MinimumPasswordLength"));
}

#[test]
async fn dispatch_formats_service_failure_envelope() {
    let iam = Iam::default();
    iam.expect(Expect::get_err("AccessDenied", "not authorized"));
    let req = request(json!({}));
    let mut ctx = CallbackContext::new();

    let progress = handle(Action::List, Some(&iam), &req, &mut ctx).await;
    assert_eq!(progress.status, OperationStatus::Failed);
    assert_eq!(
        progress.error_code,
        Some(HandlerErrorCode::GeneralServiceException)
    );
}

#[test]
async fn dispatch_returns_success_envelope_untouched() {
    let iam = Iam::default();
    iam.expect(Expect::get(json!({"MinimumPasswordLength": 12})));
    let req = request(json!({}));
    let mut ctx = CallbackContext::new();

    let progress = handle(Action::Read, Some(&iam), &req, &mut ctx).await;
    assert_eq!(progress.status, OperationStatus::Success);
    assert_eq!(progress.error_code, None);
}
