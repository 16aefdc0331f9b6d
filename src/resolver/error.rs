// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::{ProtoError, ProtoErrorKind};
use hickory_resolver::{ResolveError, ResolveErrorKind};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum Error {
    #[error("no records found")]
    NoRecordsFound,
    #[error("domain does not exist")]
    NxDomain,
    #[error("request timed out")]
    Timeout,
    #[error("query refused by server")]
    QueryRefused,
    #[error("server failed to answer query")]
    ServerFailure,
    #[error("unknown record type '{record_type}'")]
    UnknownRecordType { record_type: String },
    #[error("invalid domain name '{name}': {reason}")]
    InvalidName { name: String, reason: String },
    #[error("resolver error: {reason}")]
    ResolveError { reason: String },
    #[error("protocol error: {reason}")]
    ProtoError { reason: String },
}

impl From<ResolveError> for Error {
    fn from(error: ResolveError) -> Self {
        match error.kind() {
            ResolveErrorKind::Proto(proto_error) => Self::from(proto_error.clone()),
            _ => Error::ResolveError {
                reason: error.to_string(),
            },
        }
    }
}

impl From<ProtoError> for Error {
    fn from(error: ProtoError) -> Self {
        match error.kind() {
            // Negative responses of every response code end up here; only NOERROR means the name exists without
            // records of the queried type.
            ProtoErrorKind::NoRecordsFound { response_code, .. } => match response_code {
                ResponseCode::NoError => Error::NoRecordsFound,
                ResponseCode::NXDomain => Error::NxDomain,
                ResponseCode::ServFail => Error::ServerFailure,
                ResponseCode::Refused => Error::QueryRefused,
                other => Error::ProtoError {
                    reason: format!("server responded with {}", other),
                },
            },
            ProtoErrorKind::Timeout => Error::Timeout,
            _ => Error::ProtoError {
                reason: error.to_string(),
            },
        }
    }
}
