//! The "Loan Web Service's" entry point.

use loan_common::LoanService;
use loan_web_service::config::{get_bind_addr, DEFAULT_LOG_FILTER};
use loan_web_service::routes;
use std::env;
use std::sync::Arc;

/// The "Loan Web Service's" entry point.
///
/// Optionally takes the bind address, `host:port`, as the first argument.
#[tokio::main]
async fn main() {
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", DEFAULT_LOG_FILTER);
    }
    pretty_env_logger::init();

    let addr = get_bind_addr(env::args().nth(1));

    let loan_service = Arc::new(LoanService::new());

    log::info!("Loan web service listening on {}", addr);

    // Start up the server
    warp::serve(routes(loan_service)).run(addr).await;
}
