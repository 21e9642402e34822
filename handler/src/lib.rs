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

//! Resource handler for `OC::Organizations::PasswordPolicy`.
//!
//! The account password policy is a singleton: the identity service
//! keeps exactly one per account and has no native identifier for it.
//! This crate bridges the orchestration host's lifecycle requests onto
//! the service's three policy operations:
//! - [`model`]: the coercively-typed resource model and its filtered
//!   serialization;
//! - `policy`: the retrieval and upsert adapters around the service
//!   calls;
//! - [`handlers`]: the five lifecycle handlers;
//! - [`resource`]: the dispatch entry that routes an [`Action`] and
//!   formats failures into the host envelope.
//!
//! [`Action`]: oc_password_policy_core::Action

pub mod handlers;
pub mod model;
pub mod resource;

pub(crate) mod policy;

#[doc(inline)]
pub use model::ResourceModel;
#[doc(inline)]
pub use resource::handle;

/// Resource type name as registered with the orchestration host.
pub const TYPE_NAME: &str = "OC::Organizations::PasswordPolicy";
