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

//! Host plugin contract for the password policy resource handler.
//!
//! This crate defines the boundary between the handler core and its two
//! external collaborators:
//! - the orchestration host, which routes lifecycle actions and consumes
//!   [`ProgressEvent`] envelopes ([`Action`], [`OperationStatus`],
//!   [`HandlerErrorCode`], [`ResourceHandlerRequest`]);
//! - the identity service, reached through the transport-agnostic
//!   [`Iam`] client trait. The host supplies an authenticated client per
//!   invocation; this crate never constructs one.
//!
//! Error translation lives in [`HandlerError`]: the two conditions the
//! handler recognizes ("no such policy" and "parameter type rejected")
//! become typed failures, everything else propagates untranslated for
//! the host's own retry envelope to deal with.

pub mod error;
pub mod iam;
pub mod progress;
pub mod request;

#[doc(inline)]
pub use error::ConversionError;
#[doc(inline)]
pub use error::HandlerError;
#[doc(inline)]
pub use iam::FieldMap;
#[doc(inline)]
pub use iam::Iam;
#[doc(inline)]
pub use iam::IamError;
#[doc(inline)]
pub use progress::Action;
#[doc(inline)]
pub use progress::HandlerErrorCode;
#[doc(inline)]
pub use progress::OperationStatus;
#[doc(inline)]
pub use progress::ProgressEvent;
#[doc(inline)]
pub use request::CallbackContext;
#[doc(inline)]
pub use request::ResourceHandlerRequest;
