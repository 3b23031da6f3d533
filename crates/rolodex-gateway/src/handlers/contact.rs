use crate::error::{AppError, Operation, Result};
use crate::model::{CreateContactResponse, MessageResponse};
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use rolodex_core::{Contact, ContactId, ContactRecord};
use tracing::warn;

pub const CREATED_MESSAGE: &str = "Contact created successfully";
pub const UPDATED_MESSAGE: &str = "Contact updated successfully";
pub const DELETED_MESSAGE: &str = "Contact deleted successfully";

/// Unwraps the JSON body, turning any extractor rejection into a
/// validation error before the service is touched.
fn validate(payload: std::result::Result<Json<Contact>, JsonRejection>) -> Result<Contact> {
    match payload {
        Ok(Json(contact)) => Ok(contact),
        Err(rejection) => {
            let reason = rejection.body_text();
            warn!(%reason, "rejected contact payload");
            Err(AppError::Validation(reason))
        }
    }
}

/// An id that cannot even be decoded from the path is treated like any
/// other malformed id: a storage failure for the given operation.
fn contact_id(
    path: std::result::Result<Path<String>, PathRejection>,
    operation: Operation,
) -> Result<ContactId> {
    match path {
        Ok(Path(raw)) => Ok(ContactId::new(raw)),
        Err(rejection) => {
            warn!(reason = %rejection.body_text(), ?operation, "undecodable contact id");
            Err(AppError::Storage(operation))
        }
    }
}

pub async fn create_contact_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Contact>, JsonRejection>,
) -> Result<Json<CreateContactResponse>> {
    let contact = validate(payload)?;

    let id = state
        .contacts()
        .create(contact)
        .await
        .map_err(|e| AppError::from_contact_error(e, Operation::Create))?;

    Ok(Json(CreateContactResponse {
        id: id.into_inner(),
        message: CREATED_MESSAGE,
    }))
}

pub async fn list_contacts_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactRecord>>> {
    let records = state
        .contacts()
        .list()
        .await
        .map_err(|e| AppError::from_contact_error(e, Operation::List))?;

    Ok(Json(records))
}

pub async fn update_contact_handler(
    path: std::result::Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
    payload: std::result::Result<Json<Contact>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let id = contact_id(path, Operation::Update)?;
    let contact = validate(payload)?;

    state
        .contacts()
        .update(&id, contact)
        .await
        .map_err(|e| AppError::from_contact_error(e, Operation::Update))?;

    Ok(Json(MessageResponse {
        message: UPDATED_MESSAGE,
    }))
}

pub async fn delete_contact_handler(
    path: std::result::Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>> {
    let id = contact_id(path, Operation::Delete)?;

    state
        .contacts()
        .delete(&id)
        .await
        .map_err(|e| AppError::from_contact_error(e, Operation::Delete))?;

    Ok(Json(MessageResponse {
        message: DELETED_MESSAGE,
    }))
}
