pub mod constants;
pub mod errors;
pub mod models;
pub mod service;

pub use models::*;
pub use service::LoanService;
