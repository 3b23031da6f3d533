mod contact;
mod health;

pub use contact::{CreateContactResponse, ErrorResponse, MessageResponse};
pub use health::HealthResponse;
