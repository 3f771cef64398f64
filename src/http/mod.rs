pub mod error;
pub mod gateway;
pub mod handlers;
pub mod routes;
pub mod server;

pub use error::{ApiError, ApiResult};
pub use routes::{api_routes, app};
pub use server::serve;
