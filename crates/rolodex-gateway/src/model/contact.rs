use serde::Serialize;

// Request bodies and list items use `rolodex_core::Contact` and
// `ContactRecord` directly; these are the acknowledgement bodies.

#[derive(Debug, Serialize)]
pub struct CreateContactResponse {
    pub id: String,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}
