pub mod error;
pub mod fallback;
pub mod health;
pub mod products;

pub use error::ApiError;
