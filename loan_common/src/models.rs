//! Loan record and the response envelope

use crate::constants::{SUCCESS_CODE, SUCCESS_MESSAGE};
use crate::errors::LoanError;
use serde::{Deserialize, Serialize};

/// **Loan information**
///
/// Built fresh for every successful lookup.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct LoanInfo {
    pub id: i64,
    pub status: String,
    pub account_payable: String,
    pub account_receivable: String,
    pub principal_amount: f64,
}

/// The status block of every response
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct StatusModel {
    pub code: String,
    pub message: String,
}

impl StatusModel {
    pub fn new(code: &str, message: &str) -> Self {
        StatusModel {
            code: code.to_string(),
            message: message.to_string(),
        }
    }
}

/// **The uniform response envelope**
///
/// `data` is present only on success; on failure the key is left out of the JSON entirely.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ResponseModel<T> {
    pub status: StatusModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ResponseModel<T> {
    pub fn success(data: T) -> Self {
        ResponseModel {
            status: StatusModel::new(SUCCESS_CODE, SUCCESS_MESSAGE),
            data: Some(data),
        }
    }

    pub fn failure(error: &LoanError) -> Self {
        ResponseModel {
            status: StatusModel::new(error.code(), error.message()),
            data: None,
        }
    }
}
