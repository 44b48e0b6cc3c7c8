use thiserror::Error;

/// HTTP status code for a client-side (bad request) failure.
pub const BAD_REQUEST: u16 = 400;

/// HTTP status code for an internal (server-side) failure.
pub const INTERNAL_SERVER_ERROR: u16 = 500;

/// **Known loan errors with their stable public code and message**
///
/// The code and the message are a part of the wire contract,
/// so they are reproduced exactly, spelling included.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoanError {
    /// `LOAN4001`: the generic, public-facing failure.
    GetLoanInfoException,

    /// `LOAN4002`: the requested loan doesn't exist.
    GetLoanNotFound,
}

impl LoanError {
    pub fn code(&self) -> &'static str {
        match self {
            LoanError::GetLoanInfoException => "LOAN4001",
            LoanError::GetLoanNotFound => "LOAN4002",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            LoanError::GetLoanInfoException => "Cannot get loan infomation",
            LoanError::GetLoanNotFound => "Loan infomation not found",
        }
    }
}

/// **A classified loan failure**
///
/// Pairs a [`LoanError`] with the HTTP status it should be reported with.
/// The status is a plain `u16` so that this crate stays independent of any web framework.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{} ({}): {}", .error.code(), .http_status, .error.message())]
pub struct LoanException {
    pub error: LoanError,
    pub http_status: u16,
}

impl LoanException {
    pub fn new(error: LoanError, http_status: u16) -> Self {
        LoanException { error, http_status }
    }
}

/// **The outcome of a failed loan lookup**
///
/// Exactly two kinds of failure exist:
/// - `Loan`, a classified [`LoanException`] that is safe to show to clients;
/// - `Generic`, an internal failure whose message must never reach a client.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum LookupError {
    #[error(transparent)]
    Loan(#[from] LoanException),

    #[error("{0}")]
    Generic(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loan_error_codes() {
        assert_eq!(LoanError::GetLoanInfoException.code(), "LOAN4001");
        assert_eq!(LoanError::GetLoanNotFound.code(), "LOAN4002");
    }

    #[test]
    fn test_loan_error_messages() {
        assert_eq!(
            LoanError::GetLoanInfoException.message(),
            "Cannot get loan infomation"
        );
        assert_eq!(
            LoanError::GetLoanNotFound.message(),
            "Loan infomation not found"
        );
    }

    #[test]
    fn test_loan_exception_display() {
        let exc = LoanException::new(LoanError::GetLoanNotFound, BAD_REQUEST);
        assert_eq!(
            exc.to_string(),
            "LOAN4002 (400): Loan infomation not found"
        );
    }

    #[test]
    fn test_lookup_error_from_loan_exception() {
        let exc = LoanException::new(LoanError::GetLoanNotFound, BAD_REQUEST);
        let err: LookupError = exc.clone().into();
        assert_eq!(err, LookupError::Loan(exc));
    }

    #[test]
    fn test_generic_error_display() {
        let err = LookupError::Generic("Error Exception".to_string());
        assert_eq!(err.to_string(), "Error Exception");
    }
}
