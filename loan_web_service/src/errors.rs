//! Rejection types and their translation into HTTP responses

use loan_common::errors::{LoanError, LoanException};
use loan_common::{LoanInfo, ResponseModel};
use std::convert::Infallible;
use warp::http::StatusCode;
use warp::reject::{MethodNotAllowed, Reject};
use warp::reply::Response;
use warp::{Rejection, Reply};

/// A classified loan failure; its code and message are shown to the client.
#[derive(Debug)]
pub struct WebServiceLoanError(pub LoanException);

impl Reject for WebServiceLoanError {}

/// An unclassified failure; its message is only logged.
#[derive(Debug)]
pub struct WebServiceGenericError(pub String);

impl Reject for WebServiceGenericError {}

fn envelope_reply(error: &LoanError, status: StatusCode) -> Response {
    let body = ResponseModel::<LoanInfo>::failure(error);
    warp::reply::with_status(warp::reply::json(&body), status).into_response()
}

fn generic_failure() -> Response {
    envelope_reply(
        &LoanError::GetLoanInfoException,
        StatusCode::INTERNAL_SERVER_ERROR,
    )
}

/// **Turns a rejection into a response**
///
/// This is the only place where failures are given their HTTP status and envelope:
/// - [`WebServiceLoanError`] keeps its own status, code and message;
/// - [`WebServiceGenericError`] becomes `500` with `LOAN4001`, and its message is not leaked;
/// - a non-matching path or id answers `404`, a wrong method `405`, both without a body;
/// - anything else is treated as a generic failure.
pub async fn handle_rejection(err: Rejection) -> Result<Response, Infallible> {
    if let Some(WebServiceLoanError(exc)) = err.find::<WebServiceLoanError>() {
        log::warn!("{}", exc);
        let status =
            StatusCode::from_u16(exc.http_status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return Ok(envelope_reply(&exc.error, status));
    }

    if let Some(WebServiceGenericError(msg)) = err.find::<WebServiceGenericError>() {
        log::error!("{}", msg);
        return Ok(generic_failure());
    }

    if err.is_not_found() {
        return Ok(StatusCode::NOT_FOUND.into_response());
    }

    if err.find::<MethodNotAllowed>().is_some() {
        return Ok(StatusCode::METHOD_NOT_ALLOWED.into_response());
    }

    log::error!("unhandled rejection: {:?}", err);
    Ok(generic_failure())
}
