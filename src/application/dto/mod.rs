/// Data Transfer Objects for the application layer
mod action;
mod patrol_request;
mod patrol_response;

pub use action::Action;
pub use patrol_request::{PatrolFlags, PatrolRequest};
pub use patrol_response::{ActionOutcome, PatrolResponse};
