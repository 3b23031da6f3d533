use std::sync::Arc;

use rolodex_core::ContactService;

#[derive(Clone)]
pub struct AppState {
    contacts: Arc<dyn ContactService>,
}

impl AppState {
    pub fn new(contacts: Arc<dyn ContactService>) -> Self {
        Self { contacts }
    }

    pub fn contacts(&self) -> &dyn ContactService {
        self.contacts.as_ref()
    }
}
