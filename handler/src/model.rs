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

//! Coercively-typed resource model.
//!
//! Desired state arrives loosely typed: upstream tooling is known to
//! encode booleans as `0`/`"false"` and integers as strings. Instead of
//! rejecting such payloads, every assignment goes through a declared
//! field schema ([`FieldKind`] per wire name) and a single coercion
//! function. Once assignment succeeds, the stored value's runtime type
//! matches its declared kind; the only assignment-time validation is
//! convertibility.
//!
//! Two fields never reach the service:
//! - `ResourceId` is a synthetic correlation key assigned by this
//!   handler (the service has no identifier for the singleton policy);
//! - `ExpirePasswords` is derived by the service and read-only.
//!
//! [`ResourceModel::api_params`] therefore excludes both
//! unconditionally, and omits unset fields rather than sending nulls —
//! the service rejects unrecognized and null parameters.

use oc_password_policy_core::ConversionError;
use oc_password_policy_core::FieldMap;
use serde::Deserialize;
use serde::Serialize;
use serde_json::to_value;
use serde_json::Value as JsonValue;

/// Declared type of a model field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Str,
    Int,
    Bool,
}

/// Wire name and declared kind of every model field.
const FIELDS: &[(&str, FieldKind)] = &[
    ("ResourceId", FieldKind::Str),
    ("MinimumPasswordLength", FieldKind::Int),
    ("RequireSymbols", FieldKind::Bool),
    ("RequireNumbers", FieldKind::Bool),
    ("RequireUppercaseCharacters", FieldKind::Bool),
    ("RequireLowercaseCharacters", FieldKind::Bool),
    ("AllowUsersToChangePassword", FieldKind::Bool),
    ("ExpirePasswords", FieldKind::Bool),
    ("MaxPasswordAge", FieldKind::Int),
    ("PasswordReusePrevention", FieldKind::Int),
    ("HardExpiry", FieldKind::Bool),
];

fn field_kind(name: &str) -> Option<FieldKind> {
    FIELDS
        .iter()
        .find(|(field, _)| *field == name)
        .map(|(_, kind)| *kind)
}

/// One account password policy.
///
/// All fields are optional: unset means "unspecified", which is
/// distinct from `false`/zero and is never sent to the service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResourceModel {
    /// Synthetic identifier assigned by this handler, not the service.
    #[serde(rename = "ResourceId", skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(
        rename = "MinimumPasswordLength",
        skip_serializing_if = "Option::is_none"
    )]
    pub minimum_password_length: Option<i64>,
    #[serde(rename = "RequireSymbols", skip_serializing_if = "Option::is_none")]
    pub require_symbols: Option<bool>,
    #[serde(rename = "RequireNumbers", skip_serializing_if = "Option::is_none")]
    pub require_numbers: Option<bool>,
    #[serde(
        rename = "RequireUppercaseCharacters",
        skip_serializing_if = "Option::is_none"
    )]
    pub require_uppercase_characters: Option<bool>,
    #[serde(
        rename = "RequireLowercaseCharacters",
        skip_serializing_if = "Option::is_none"
    )]
    pub require_lowercase_characters: Option<bool>,
    #[serde(
        rename = "AllowUsersToChangePassword",
        skip_serializing_if = "Option::is_none"
    )]
    pub allow_users_to_change_password: Option<bool>,
    /// Derived by the service; read-only, never sent back.
    #[serde(rename = "ExpirePasswords", skip_serializing_if = "Option::is_none")]
    pub expire_passwords: Option<bool>,
    #[serde(rename = "MaxPasswordAge", skip_serializing_if = "Option::is_none")]
    pub max_password_age: Option<i64>,
    #[serde(
        rename = "PasswordReusePrevention",
        skip_serializing_if = "Option::is_none"
    )]
    pub password_reuse_prevention: Option<i64>,
    #[serde(rename = "HardExpiry", skip_serializing_if = "Option::is_none")]
    pub hard_expiry: Option<bool>,
}

impl ResourceModel {
    /// Build a model from a loosely-typed desired-state payload.
    ///
    /// `Null` yields an empty model; every present field is coerced to
    /// its declared kind.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError`] for an unknown field, a
    /// non-convertible value, or a payload that is not an object.
    pub fn from_value(state: &JsonValue) -> Result<Self, ConversionError> {
        let mut model = Self::default();
        match state {
            JsonValue::Null => Ok(model),
            JsonValue::Object(fields) => {
                for (name, value) in fields {
                    model.set(name, value.clone())?;
                }
                Ok(model)
            }
            other => Err(ConversionError::new(
                "desiredResourceState",
                format!("expected an object, got {}", other),
            )),
        }
    }

    /// Coercively assign one field by wire name.
    ///
    /// `Null` bypasses coercion and stores "unspecified".
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError`] when the field is unknown or the
    /// value cannot be converted to the declared kind.
    pub fn set(&mut self, name: &str, value: JsonValue) -> Result<(), ConversionError> {
        let kind =
            field_kind(name).ok_or_else(|| ConversionError::new(name, "unknown field"))?;
        let value = coerce(name, kind, value)?;
        match name {
            "ResourceId" => self.resource_id = into_string(value),
            "MinimumPasswordLength" => self.minimum_password_length = into_int(value),
            "RequireSymbols" => self.require_symbols = into_bool(value),
            "RequireNumbers" => self.require_numbers = into_bool(value),
            "RequireUppercaseCharacters" => self.require_uppercase_characters = into_bool(value),
            "RequireLowercaseCharacters" => self.require_lowercase_characters = into_bool(value),
            "AllowUsersToChangePassword" => self.allow_users_to_change_password = into_bool(value),
            "ExpirePasswords" => self.expire_passwords = into_bool(value),
            "MaxPasswordAge" => self.max_password_age = into_int(value),
            "PasswordReusePrevention" => self.password_reuse_prevention = into_int(value),
            "HardExpiry" => self.hard_expiry = into_bool(value),
            // field_kind already rejected anything else
            _ => {}
        }
        Ok(())
    }

    /// Serialize for the service's update operation.
    ///
    /// Every set field under its wire name; `ResourceId` and
    /// `ExpirePasswords` are excluded unconditionally and unset fields
    /// are omitted entirely.
    #[must_use]
    pub fn api_params(&self) -> FieldMap {
        let mut params = match to_value(self) {
            Ok(JsonValue::Object(fields)) => fields,
            _ => FieldMap::new(),
        };
        params.remove("ResourceId");
        params.remove("ExpirePasswords");
        params
    }
}

/// Convert `value` to the declared `kind`.
///
/// `Null` passes through untouched. A value already of the declared
/// kind is stored as-is; anything else is converted in the declared
/// type's manner, failing with [`ConversionError`] when it cannot be.
fn coerce(name: &str, kind: FieldKind, value: JsonValue) -> Result<JsonValue, ConversionError> {
    if value.is_null() {
        return Ok(value);
    }
    // Loosely-typed upstreams encode false as 0 or "false".
    if kind == FieldKind::Bool && is_false_encoding(&value) {
        return Ok(JsonValue::Bool(false));
    }
    match (kind, value) {
        (FieldKind::Str, JsonValue::String(s)) => Ok(JsonValue::String(s)),
        (FieldKind::Str, JsonValue::Number(n)) => Ok(JsonValue::String(n.to_string())),
        (FieldKind::Str, JsonValue::Bool(b)) => Ok(JsonValue::String(b.to_string())),
        (FieldKind::Int, JsonValue::Number(n)) => {
            if let Some(i) = n.as_i64() {
                Ok(JsonValue::from(i))
            } else if let Some(f) = n.as_f64() {
                // Fractional input truncates toward zero.
                Ok(JsonValue::from(f as i64))
            } else {
                Err(ConversionError::new(name, format!("{} out of range", n)))
            }
        }
        (FieldKind::Int, JsonValue::Bool(b)) => Ok(JsonValue::from(b as i64)),
        (FieldKind::Int, JsonValue::String(s)) => s
            .trim()
            .parse::<i64>()
            .map(JsonValue::from)
            .map_err(|_| ConversionError::new(name, format!("{:?} is not an integer", s))),
        (FieldKind::Bool, JsonValue::Bool(b)) => Ok(JsonValue::Bool(b)),
        (FieldKind::Bool, JsonValue::Number(n)) => {
            Ok(JsonValue::Bool(n.as_f64().map_or(true, |f| f != 0.0)))
        }
        // Non-empty string truthiness; the "false" literal was handled
        // above.
        (FieldKind::Bool, JsonValue::String(s)) => Ok(JsonValue::Bool(!s.is_empty())),
        (_, other) => Err(ConversionError::new(
            name,
            format!("cannot convert {} to {:?}", type_of(&other), kind),
        )),
    }
}

fn is_false_encoding(value: &JsonValue) -> bool {
    match value {
        JsonValue::Number(n) => n.as_f64() == Some(0.0),
        JsonValue::String(s) => s == "false",
        _ => false,
    }
}

fn type_of(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

fn into_string(value: JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) => Some(s),
        _ => None,
    }
}

fn into_int(value: JsonValue) -> Option<i64> {
    value.as_i64()
}

fn into_bool(value: JsonValue) -> Option<bool> {
    value.as_bool()
}
