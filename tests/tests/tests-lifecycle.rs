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

//! Integration tests of the five lifecycle handlers against the IAM
//! mock.

use oc_password_policy::handlers;
use oc_password_policy_core::CallbackContext;
use oc_password_policy_core::HandlerError;
use oc_password_policy_core::OperationStatus;
use oc_password_policy_tests::request;
use oc_password_policy_tests::Expect;
use oc_password_policy_tests::Iam;
use oc_password_policy_tests::LOGICAL_ID;
use serde_json::json;
use std::error::Error as StdError;
use tokio::test;

#[test]
async fn create_with_session_upserts_and_succeeds() -> Result<(), Box<dyn StdError>> {
    let iam = Iam::default();
    // ResourceId is freshly generated but must not reach the wire.
    iam.expect(Expect::update(json!({
        "MinimumPasswordLength": 12,
        "RequireSymbols": true,
    })));
    let req = request(json!({"MinimumPasswordLength": 12, "RequireSymbols": true}));
    let mut ctx = CallbackContext::new();

    let progress = handlers::create(Some(&iam), &req, &mut ctx).await?;
    assert_eq!(progress.status, OperationStatus::Success);
    let model = progress.resource_model.unwrap();
    assert_eq!(model.minimum_password_length, Some(12));
    assert_eq!(model.require_symbols, Some(true));
    assert!(model.resource_id.is_some());
    Ok(())
}

#[test]
async fn create_without_session_defers() -> Result<(), Box<dyn StdError>> {
    let session: Option<&Iam> = None;
    let req = request(json!({"MinimumPasswordLength": 12, "RequireSymbols": true}));
    let mut ctx = CallbackContext::new();

    let progress = handlers::create(session, &req, &mut ctx).await?;
    assert_eq!(progress.status, OperationStatus::InProgress);
    let model = progress.resource_model.unwrap();
    assert_eq!(model.minimum_password_length, Some(12));
    assert_eq!(model.require_symbols, Some(true));
    // No call happened, so no identifier was assigned either.
    assert_eq!(model.resource_id, None);
    Ok(())
}

#[test]
async fn create_assigns_unique_identifiers() -> Result<(), Box<dyn StdError>> {
    let iam = Iam::default();
    iam.expect(Expect::update(json!({"MinimumPasswordLength": 12})));
    iam.expect(Expect::update(json!({"MinimumPasswordLength": 12})));
    let req = request(json!({"MinimumPasswordLength": 12}));
    let mut ctx = CallbackContext::new();

    let first = handlers::create(Some(&iam), &req, &mut ctx).await?;
    let second = handlers::create(Some(&iam), &req, &mut ctx).await?;
    let first_id = first.resource_model.unwrap().resource_id.unwrap();
    let second_id = second.resource_model.unwrap().resource_id.unwrap();
    assert_ne!(first_id, second_id);
    Ok(())
}

#[test]
async fn update_probes_existence_then_pushes_desired_state() -> Result<(), Box<dyn StdError>> {
    let iam = Iam::default();
    // The probe's result is discarded: the pushed payload is the desired
    // state, not the service's current value.
    iam.expect(Expect::get(json!({
        "MinimumPasswordLength": 14,
        "RequireNumbers": true,
    })));
    iam.expect(Expect::update(json!({"MinimumPasswordLength": 8})));
    let req = request(json!({"MinimumPasswordLength": 8}));
    let mut ctx = CallbackContext::new();

    let progress = handlers::update(Some(&iam), &req, &mut ctx).await?;
    assert_eq!(progress.status, OperationStatus::Success);
    let model = progress.resource_model.unwrap();
    assert_eq!(model.minimum_password_length, Some(8));
    Ok(())
}

#[test]
async fn update_surfaces_vanished_policy() -> Result<(), Box<dyn StdError>> {
    let iam = Iam::default();
    iam.expect(Expect::get_err("NoSuchEntity", "no policy for account"));
    let req = request(json!({"MinimumPasswordLength": 8}));
    let mut ctx = CallbackContext::new();

    let err = handlers::update(Some(&iam), &req, &mut ctx)
        .await
        .unwrap_err();
    match err {
        HandlerError::NotFound {
            type_name,
            identifier,
        } => {
            assert_eq!(type_name, "OC::Organizations::PasswordPolicy");
            assert_eq!(identifier, LOGICAL_ID);
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
    Ok(())
}

#[test]
async fn update_without_session_defers() -> Result<(), Box<dyn StdError>> {
    let session: Option<&Iam> = None;
    let req = request(json!({"MinimumPasswordLength": 8}));
    let mut ctx = CallbackContext::new();

    let progress = handlers::update(session, &req, &mut ctx).await?;
    assert_eq!(progress.status, OperationStatus::InProgress);
    Ok(())
}

#[test]
async fn read_returns_merged_policy() -> Result<(), Box<dyn StdError>> {
    let iam = Iam::default();
    // Service values win on overlap; input-only fields survive the merge.
    iam.expect(Expect::get(json!({
        "MinimumPasswordLength": 12,
        "ExpirePasswords": true,
    })));
    let req = request(json!({"MinimumPasswordLength": 8, "RequireNumbers": true}));
    let mut ctx = CallbackContext::new();

    let progress = handlers::read(Some(&iam), &req, &mut ctx).await?;
    assert_eq!(progress.status, OperationStatus::Success);
    let model = progress.resource_model.unwrap();
    assert_eq!(model.minimum_password_length, Some(12));
    assert_eq!(model.require_numbers, Some(true));
    assert_eq!(model.expire_passwords, Some(true));
    assert_eq!(model.resource_id.as_deref(), Some(LOGICAL_ID));
    Ok(())
}

#[test]
async fn read_keeps_existing_resource_id() -> Result<(), Box<dyn StdError>> {
    let iam = Iam::default();
    iam.expect(Expect::get(json!({"MinimumPasswordLength": 12})));
    let req = request(json!({"ResourceId": "pp-1"}));
    let mut ctx = CallbackContext::new();

    let progress = handlers::read(Some(&iam), &req, &mut ctx).await?;
    let model = progress.resource_model.unwrap();
    assert_eq!(model.resource_id.as_deref(), Some("pp-1"));
    Ok(())
}

#[test]
async fn read_missing_policy_is_not_found() -> Result<(), Box<dyn StdError>> {
    let iam = Iam::default();
    iam.expect(Expect::get_err("NoSuchEntity", "no policy for account"));
    let req = request(json!({}));
    let mut ctx = CallbackContext::new();

    let err = handlers::read(Some(&iam), &req, &mut ctx).await.unwrap_err();
    match err {
        HandlerError::NotFound {
            type_name,
            identifier,
        } => {
            assert_eq!(type_name, "OC::Organizations::PasswordPolicy");
            assert_eq!(identifier, LOGICAL_ID);
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
    Ok(())
}

#[test]
async fn not_found_prefers_model_identifier() -> Result<(), Box<dyn StdError>> {
    let iam = Iam::default();
    iam.expect(Expect::get_err("NoSuchEntity", "no policy for account"));
    let req = request(json!({"ResourceId": "pp-1"}));
    let mut ctx = CallbackContext::new();

    let err = handlers::read(Some(&iam), &req, &mut ctx).await.unwrap_err();
    match err {
        HandlerError::NotFound { identifier, .. } => assert_eq!(identifier, "pp-1"),
        other => panic!("expected NotFound, got {:?}", other),
    }
    Ok(())
}

#[test]
async fn list_yields_singleton_collection() -> Result<(), Box<dyn StdError>> {
    let iam = Iam::default();
    iam.expect(Expect::get(json!({"MinimumPasswordLength": 12})));
    let req = request(json!({}));
    let mut ctx = CallbackContext::new();

    let progress = handlers::list(Some(&iam), &req, &mut ctx).await?;
    assert_eq!(progress.status, OperationStatus::Success);
    assert_eq!(progress.resource_model, None);
    let models = progress.resource_models.unwrap();
    assert_eq!(models.len(), 1);
    assert_eq!(models[0].minimum_password_length, Some(12));
    Ok(())
}

#[test]
async fn delete_reads_then_deletes() -> Result<(), Box<dyn StdError>> {
    let iam = Iam::default();
    iam.expect(Expect::get(json!({"MinimumPasswordLength": 12})));
    iam.expect(Expect::delete());
    let req = request(json!({}));
    let mut ctx = CallbackContext::new();

    let progress = handlers::delete(Some(&iam), &req, &mut ctx).await?;
    assert_eq!(progress.status, OperationStatus::Success);
    // The envelope carries the pre-delete state obtained by Read.
    let model = progress.resource_model.unwrap();
    assert_eq!(model.minimum_password_length, Some(12));
    Ok(())
}
