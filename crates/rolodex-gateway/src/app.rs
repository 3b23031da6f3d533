use axum::routing::{get, post, put};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_contact_handler, delete_contact_handler, health_handler, list_contacts_handler,
    update_contact_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        let collection = post(create_contact_handler).get(list_contacts_handler);

        Router::new()
            .route("/health", get(health_handler))
            .route("/contacts", collection.clone())
            .route("/contacts/", collection)
            .route(
                "/contacts/{contact_id}",
                put(update_contact_handler).delete(delete_contact_handler),
            )
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
