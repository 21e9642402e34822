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

//! Identity service client abstraction.
//!
//! [`Iam`] is the minimal interface the handler needs from the identity
//! service: the three account-password-policy operations. The host's
//! session layer decides how the trait is implemented (signed HTTP,
//! SDK binding, mock); the handler only ever sees the trait.
//!
//! Payloads are loosely-typed field maps (`serde_json::Map`) because the
//! wire protocol is name/value pairs and the set of accepted parameters
//! is owned by the service, not by this crate.
//!
//! Notes for implementors:
//! - The trait is `Send + Sync` and returns `Send` futures to support
//!   use in async runtimes and multithreaded contexts.
//! - The associated error must implement [`IamError`] so the handler can
//!   recognize the two service conditions it translates; every other
//!   failure is passed through untouched.

use serde_json::Map as JsonMap;
use serde_json::Value as JsonValue;
use std::error::Error as StdError;
use std::future::Future;

/// Field name/value pairs as sent to and received from the service.
pub type FieldMap = JsonMap<String, JsonValue>;

/// Client for the account password policy operations of the identity
/// service.
pub trait Iam: Send + Sync {
    /// Client error.
    type Error: IamError + StdError + Send + Sync + 'static;

    /// Fetch the current account password policy.
    ///
    /// Returns the policy's fields as reported by the service. Fails
    /// with an error classified as "no such entity" when the account
    /// has no policy.
    fn get_account_password_policy(
        &self,
    ) -> impl Future<Output = Result<FieldMap, Self::Error>> + Send;

    /// Create or replace the account password policy.
    ///
    /// The service upserts: there is no separate create operation for
    /// this singleton. `params` carries only the fields to set; absent
    /// fields are left to service defaults.
    fn update_account_password_policy(
        &self,
        params: &FieldMap,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Delete the account password policy.
    fn delete_account_password_policy(
        &self,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

/// Classification of client errors into the conditions the handler
/// translates.
///
/// Implementations map their own error representation (service error
/// codes, binding failures) onto these two predicates. Both returning
/// `false` means the error is propagated untranslated.
pub trait IamError {
    /// The service reported that no password policy exists for the
    /// account.
    fn is_no_such_entity(&self) -> bool;

    /// The binding rejected a parameter because of its type.
    fn is_invalid_parameter_type(&self) -> bool;
}
