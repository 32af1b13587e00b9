mod error;
mod gateway;
mod traits;

pub use error::{RepositoryError, Result};
pub use gateway::ProductStore;
pub use traits::ProductRepository;
