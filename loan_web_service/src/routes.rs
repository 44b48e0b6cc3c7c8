//! Route assembly

use crate::{errors, handlers};
use loan_common::LoanService;
use std::convert::Infallible;
use std::sync::Arc;
use warp::{Filter, Reply};

/// **Builds the complete filter chain of the service.**
///
/// Every rejection is recovered into a response, so the resulting filter never fails.
pub fn routes(
    loan_service: Arc<LoanService>,
) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    let log = warp::log("loan");

    let loan_service_state = warp::any().map(move || loan_service.clone());

    let loan_info = warp::path!("loan" / "info" / i64)
        .and(warp::get())
        .and(loan_service_state)
        .and_then(handlers::loan_info);

    loan_info.recover(errors::handle_rejection).with(log)
}
