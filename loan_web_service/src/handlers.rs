//! Handler functions

use crate::errors::{WebServiceGenericError, WebServiceLoanError};
use loan_common::errors::LookupError;
use loan_common::{LoanService, ResponseModel};
use std::sync::Arc;
use warp::{Rejection, Reply};

/// The `loan_info` handler
///
/// Responds with the loan's information wrapped in a success envelope.
///
/// Failed lookups are rejected, and [`crate::errors::handle_rejection`]
/// turns them into the matching error response.
///
/// GET /loan/info/{id}
pub async fn loan_info(id: i64, loan_service: Arc<LoanService>) -> Result<impl Reply, Rejection> {
    log::debug!("loan_info; id = {}", id);

    match loan_service.get_loan_info_by_id(id) {
        Ok(info) => Ok(warp::reply::json(&ResponseModel::success(info))),
        Err(LookupError::Loan(exc)) => Err(warp::reject::custom(WebServiceLoanError(exc))),
        Err(LookupError::Generic(msg)) => Err(warp::reject::custom(WebServiceGenericError(msg))),
    }
}

#[cfg(test)]
mod tests {
    use super::loan_info;
    use crate::errors::{WebServiceGenericError, WebServiceLoanError};
    use loan_common::errors::LoanError;
    use loan_common::LoanService;
    use std::sync::Arc;
    use warp::http::StatusCode;
    use warp::Reply;

    #[tokio::test]
    async fn test_known_loan_is_ok() {
        let reply = loan_info(1, Arc::new(LoanService::new())).await.unwrap();
        assert_eq!(reply.into_response().status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_loan_is_rejected_as_loan_error() {
        let rejection = match loan_info(2, Arc::new(LoanService::new())).await {
            Ok(_) => panic!("expected a rejection"),
            Err(rejection) => rejection,
        };

        let WebServiceLoanError(exc) = rejection.find::<WebServiceLoanError>().unwrap();
        assert_eq!(exc.error, LoanError::GetLoanNotFound);
        assert_eq!(exc.http_status, 400);
    }

    #[tokio::test]
    async fn test_other_loan_is_rejected_as_generic_error() {
        let rejection = match loan_info(3, Arc::new(LoanService::new())).await {
            Ok(_) => panic!("expected a rejection"),
            Err(rejection) => rejection,
        };

        assert!(rejection.find::<WebServiceGenericError>().is_some());
        assert!(rejection.find::<WebServiceLoanError>().is_none());
    }
}
