mod dto;
mod error;
mod handlers;
pub mod middleware;
mod routes;

pub use error::{AppError, AppErrorWithContext};
pub use middleware::CorrelationId;
pub use routes::{create_router, AppState};
