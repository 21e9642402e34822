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

pub mod expect;

#[doc(inline)]
pub use expect::Expect;
pub use expect::ExpectedRequest;
pub use expect::ServiceFailure;

use oc_password_policy_core::FieldMap;
use oc_password_policy_core::Iam as IamClient;
use oc_password_policy_core::IamError;
use serde_json::from_value;
use serde_json::to_value;
use serde_json::Error as JsonError;
use std::collections::VecDeque;
use std::error::Error as StdError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::sync::Mutex;
use std::sync::PoisonError;

#[derive(Debug)]
pub enum Error {
    /// Injected service error, as the wire would report it.
    Service { code: String, message: String },
    MutexLock(String),
    NothingIsExpected,
    BadResponseJson(JsonError),
    UnexpectedGet(ExpectedRequest),
    UnexpectedUpdate(String, ExpectedRequest),
    UnexpectedDelete(ExpectedRequest),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Service { code, message } => write!(f, "{}: {}", code, message),
            Self::MutexLock(err) => write!(f, "lock error: {}", err),
            Self::NothingIsExpected => {
                write!(f, "nothing is expected to happen but something happened")
            }
            Self::BadResponseJson(err) => write!(f, "bad json response: {}", err),
            Self::UnexpectedGet(expected) => {
                write!(f, "unexpected get; expected: {:?}", expected)
            }
            Self::UnexpectedUpdate(params, expected) => {
                write!(
                    f,
                    "unexpected update: {}; expected: {:?}",
                    params, expected
                )
            }
            Self::UnexpectedDelete(expected) => {
                write!(f, "unexpected delete; expected: {:?}", expected)
            }
        }
    }
}

impl StdError for Error {}

impl Error {
    pub fn mutex_lock<T>(err: PoisonError<T>) -> Self {
        Self::MutexLock(err.to_string())
    }

    fn service(failure: ServiceFailure) -> Self {
        Self::Service {
            code: failure.code,
            message: failure.message,
        }
    }
}

impl IamError for Error {
    fn is_no_such_entity(&self) -> bool {
        matches!(self, Self::Service { code, .. } if code == "NoSuchEntity")
    }

    fn is_invalid_parameter_type(&self) -> bool {
        matches!(self, Self::Service { code, .. } if code == "InvalidParameterType")
    }
}

/// Mock IAM client driven by a FIFO expectation queue.
///
/// Unlike a single-slot mock, expectations queue up in order: a Delete
/// flow consumes a get expectation and then a delete expectation.
#[derive(Default)]
pub struct Iam {
    expect: Mutex<VecDeque<Expect>>,
}

impl Iam {
    /// Append an expectation to the queue.
    pub fn expect(&self, exp: Expect) {
        let expect: &mut VecDeque<Expect> = &mut self.expect.lock().expect("not poisoned");
        expect.push_back(exp);
    }

    /// Drop all queued expectations.
    pub fn clear(&self) {
        self.expect.lock().expect("not poisoned").clear();
    }

    pub fn debug_expect(&self) {
        let expect: &VecDeque<Expect> = &self.expect.lock().expect("not poisoned");
        println!("Expectations (total: {})", expect.len());
        for v in expect.iter() {
            println!("{:#?}", v.request);
        }
    }

    fn next_expect(&self) -> Result<Expect, Error> {
        self.expect
            .lock()
            .map_err(Error::mutex_lock)?
            .pop_front()
            .ok_or(Error::NothingIsExpected)
    }
}

impl IamClient for Iam {
    type Error = Error;

    async fn get_account_password_policy(&self) -> Result<FieldMap, Error> {
        let expect = self.next_expect()?;
        match expect {
            Expect {
                request: ExpectedRequest::GetPolicy,
                response,
            } => {
                let response = response.map_err(Error::service)?;
                from_value(response).map_err(Error::BadResponseJson)
            }
            _ => Err(Error::UnexpectedGet(expect.request)),
        }
    }

    async fn update_account_password_policy(&self, params: &FieldMap) -> Result<(), Error> {
        let expect = self.next_expect()?;
        let in_params = to_value(params).expect("json serializable");
        match expect {
            Expect {
                request: ExpectedRequest::UpdatePolicy { params },
                response,
            } if params == in_params => {
                response.map_err(Error::service)?;
                Ok(())
            }
            _ => Err(Error::UnexpectedUpdate(
                in_params.to_string(),
                expect.request,
            )),
        }
    }

    async fn delete_account_password_policy(&self) -> Result<(), Error> {
        let expect = self.next_expect()?;
        match expect {
            Expect {
                request: ExpectedRequest::DeletePolicy,
                response,
            } => {
                response.map_err(Error::service)?;
                Ok(())
            }
            _ => Err(Error::UnexpectedDelete(expect.request)),
        }
    }
}
