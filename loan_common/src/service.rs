use crate::constants::*;
use crate::errors::{LoanError, LoanException, LookupError, BAD_REQUEST};
use crate::models::LoanInfo;

/// **Looks up loan information.**
///
/// Holds no state, so a single instance can be shared freely between requests.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoanService;

impl LoanService {
    /// **Creates a new instance.**
    pub fn new() -> Self {
        LoanService
    }

    /// **Fetches loan information by the loan's `id`**
    ///
    /// - `1` yields the one known loan;
    /// - `2` fails with [`LoanError::GetLoanNotFound`], classified as a bad request;
    /// - every other `id` fails with a generic, unclassified error.
    ///
    /// No range validation is performed, so zero and negative ids
    /// take the generic branch like any other unknown id.
    ///
    /// # Errors
    /// - `LookupError::Loan`, for the missing loan;
    /// - `LookupError::Generic`, for everything else.
    pub fn get_loan_info_by_id(&self, id: i64) -> Result<LoanInfo, LookupError> {
        log::info!("GET loan info by id {}", id);

        match id {
            KNOWN_LOAN_ID => Ok(LoanInfo {
                id,
                status: LOAN_STATUS_OK.to_string(),
                account_payable: ACCOUNT_PAYABLE.to_string(),
                account_receivable: ACCOUNT_RECEIVABLE.to_string(),
                principal_amount: PRINCIPAL_AMOUNT,
            }),
            MISSING_LOAN_ID => {
                log::info!("Test Error 400 id {}", id);
                Err(LoanException::new(LoanError::GetLoanNotFound, BAD_REQUEST).into())
            }
            _ => {
                log::info!("Test Error 500 id {}", id);
                Err(LookupError::Generic(GENERIC_ERROR_MSG.to_string()))
            }
        }
    }
}
