pub mod error;
pub mod notes;

pub use error::AppError;
