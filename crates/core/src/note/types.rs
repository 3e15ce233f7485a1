use chrono::{DateTime, SubsecRound, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Returns the current UTC time truncated to microseconds.
///
/// Storage backends persist timestamps with microsecond precision, so every
/// timestamp the domain produces is truncated up front. A note read back from
/// storage then compares equal to the one that was written.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// A note owned by a single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Uuid,
    /// The user that owns this note. Only the owner can see or change it.
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    /// Free-form labels. Order is preserved and duplicates are allowed.
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Creates a new note for `user_id` with a fresh ID and timestamps.
    pub fn new(user_id: Uuid, title: impl Into<String>, content: impl Into<String>) -> Self {
        let timestamp = now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            title: title.into(),
            content: content.into(),
            tags: Vec::new(),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Sets the tags for this note.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets a specific ID for this note (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Sets both timestamps (useful for testing ordering).
    pub fn with_timestamps(mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self.updated_at = updated_at;
        self
    }

    /// Marks the note as modified.
    ///
    /// The new `updated_at` is always strictly later than the previous one,
    /// even when the clock has not advanced a full microsecond.
    pub fn touch(&mut self) {
        let floor = self.updated_at + TimeDelta::microseconds(1);
        self.updated_at = now().max(floor);
    }

    /// Returns true if the note is owned by `user_id`.
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}

/// An authenticated user, as carried by the bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl User {
    /// Creates a new user with a random ID.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            name: None,
        }
    }

    /// Sets the display name for this user.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets a specific ID for this user (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Returns the name if set, otherwise the email.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}
