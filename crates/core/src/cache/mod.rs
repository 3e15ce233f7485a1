mod error;
mod keys;
mod patterns;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{
    extract_owner_id_from_key, extract_owner_id_from_pattern, is_owner_notes_key, notes_key,
    owner_notes_pattern, owner_tracking_key,
};
pub use patterns::pattern_matches;
pub use serialization::{deserialize_notes, serialize_notes, SerializationError};
pub use traits::Cache;
