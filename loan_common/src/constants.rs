/// Response status

pub const SUCCESS_CODE: &str = "0";
pub const SUCCESS_MESSAGE: &str = "success";

/// Loan data served for the one known loan

pub const KNOWN_LOAN_ID: i64 = 1;
pub const MISSING_LOAN_ID: i64 = 2;
pub const LOAN_STATUS_OK: &str = "OK";
pub const ACCOUNT_PAYABLE: &str = "102-444-6666";
pub const ACCOUNT_RECEIVABLE: &str = "102-333-6666";
pub const PRINCIPAL_AMOUNT: f64 = 2000.00;

/// Internal message of the generic lookup failure; never sent to clients.
pub const GENERIC_ERROR_MSG: &str = "Error Exception";
