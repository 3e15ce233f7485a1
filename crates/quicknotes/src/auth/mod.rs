//! Bearer-token authentication.
//!
//! Requests carry an HS256 JWT in `Authorization: Bearer <token>`. The token
//! claims identify the [`User`](quicknotes_core::note::User) that owns the
//! notes touched by the request. There is no login flow. Tokens are minted by
//! the `quicknotes token` subcommand.

mod error;
mod extractors;
mod token;

pub use error::AuthError;
pub use extractors::CurrentUser;
pub use token::{Claims, TokenAuth};
