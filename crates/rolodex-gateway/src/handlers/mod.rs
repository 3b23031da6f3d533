mod contact;
mod health;

pub use contact::{
    create_contact_handler, delete_contact_handler, list_contacts_handler,
    update_contact_handler,
};
pub use health::health_handler;
