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

//! Error taxonomy the host understands.
//!
//! Handlers fail with [`HandlerError`]; only the dispatch entry formats
//! it into a FAILED envelope. The generic parameter is the client's
//! error type, so untranslated service failures keep their original
//! representation all the way to the host boundary.

use crate::progress::HandlerErrorCode;
use std::error::Error as StdError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

/// A value could not be converted to its declared field type.
///
/// Raised during coercive assignment; this is the only validation the
/// model performs. No range or semantic checks happen at assignment
/// time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionError {
    /// Field the value was assigned to.
    pub field: String,
    /// Why the conversion failed.
    pub reason: String,
}

impl ConversionError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl Display for ConversionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "cannot convert value for {}: {}", self.field, self.reason)
    }
}

impl StdError for ConversionError {}

/// Failure of a lifecycle handler.
///
/// `E` is the client error type of the [`crate::Iam`] implementation in
/// use. The `Service` variant carries failures the handler does not
/// translate (permission denied, throttling, transient network errors);
/// the host's own retry envelope is the sole resilience mechanism for
/// those.
#[derive(Debug)]
pub enum HandlerError<E> {
    /// The resource does not exist on the service.
    NotFound {
        type_name: &'static str,
        identifier: String,
    },
    /// The resource already exists. Declared for contract completeness;
    /// no live handler path constructs it.
    AlreadyExists {
        type_name: &'static str,
        identifier: String,
    },
    /// The service binding rejected the request in a way that indicates
    /// a bug on our side.
    InternalFailure(String),
    /// A desired-state value could not be coerced to its declared type.
    TypeConversion(ConversionError),
    /// Untranslated client failure.
    Service(E),
}

impl<E> HandlerError<E> {
    /// Error code for the FAILED progress envelope.
    #[must_use]
    pub fn error_code(&self) -> HandlerErrorCode {
        match self {
            Self::NotFound { .. } => HandlerErrorCode::NotFound,
            Self::AlreadyExists { .. } => HandlerErrorCode::AlreadyExists,
            Self::InternalFailure(_) => HandlerErrorCode::InternalFailure,
            Self::TypeConversion(_) => HandlerErrorCode::InvalidRequest,
            Self::Service(_) => HandlerErrorCode::GeneralServiceException,
        }
    }
}

impl<E> From<ConversionError> for HandlerError<E> {
    fn from(err: ConversionError) -> Self {
        Self::TypeConversion(err)
    }
}

impl<E: Display> Display for HandlerError<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::NotFound {
                type_name,
                identifier,
            } => write!(f, "{} [{}] not found", type_name, identifier),
            Self::AlreadyExists {
                type_name,
                identifier,
            } => write!(f, "{} [{}] already exists", type_name, identifier),
            Self::InternalFailure(msg) => write!(f, "internal failure: {}", msg),
            Self::TypeConversion(err) => err.fmt(f),
            Self::Service(err) => write!(f, "service error: {}", err),
        }
    }
}

impl<E: StdError + 'static> StdError for HandlerError<E> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::TypeConversion(err) => Some(err),
            Self::Service(err) => Some(err),
            _ => None,
        }
    }
}
