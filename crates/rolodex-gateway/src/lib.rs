//! HTTP gateway for the Rolodex contact service.
//!
//! Exposes create, list, update and delete over `/contacts/` and
//! delegates every request to a [`ContactService`](rolodex_core::ContactService).

pub mod app;
pub mod cli;
pub mod error;
pub mod handlers;
pub mod model;
pub mod shutdown;
pub mod state;
pub mod telemetry;

pub use app::App;
pub use state::AppState;
