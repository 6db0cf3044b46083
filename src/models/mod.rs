mod request;
mod user;

pub use request::{RequestOutcome, RequestRecord};
pub use user::{Address, Company, User};
