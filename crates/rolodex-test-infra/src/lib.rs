pub mod error;
pub mod mongo;

pub use error::{Result, TestInfraError};
