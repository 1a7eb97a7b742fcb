//! User directory records and the form draft edited in the modal.
//!
//! A [`User`] is one entry of the directory as returned by the remote source.
//! Records are only ever changed locally; nothing here knows about the network.

use serde::Deserialize;
use std::collections::BTreeSet;

use super::error::{Result, RolodexError};

/// One entry of the user directory.
///
/// Deserialized from the remote JSON array. Fields other than `id`, `name` and
/// `email` (address, phone, company, ...) are ignored.
///
/// `id` is the display key. It is only unique on a best-effort basis: see
/// [`IdStrategy::Length`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl User {
    /// Creates a user record.
    ///
    /// # Examples
    ///
    /// ```
    /// use rolodex::User;
    ///
    /// let user = User::new(1, "Leanne Graham", "Sincere@april.biz");
    /// assert_eq!(user.id, 1);
    /// assert_eq!(user.name, "Leanne Graham");
    /// ```
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Transient values edited in the modal before they are committed.
///
/// `target` is the id of the user being edited, or `None` when the modal was
/// opened to create a new entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub target: Option<i64>,
    pub name: String,
    pub email: String,
}

impl UserDraft {
    /// Draft pre-filled from an existing user (edit mode).
    #[must_use]
    pub fn for_user(user: &User) -> Self {
        Self {
            target: Some(user.id),
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }

    /// Empty draft with no target (create mode).
    #[must_use]
    pub fn blank() -> Self {
        Self::default()
    }

    /// Whether the draft edits an existing record.
    #[must_use]
    pub const fn is_edit(&self) -> bool {
        self.target.is_some()
    }

    /// Both fields are non-empty. Whitespace is not trimmed, so `"  "` counts.
    ///
    /// # Examples
    ///
    /// ```
    /// use rolodex::UserDraft;
    ///
    /// let mut draft = UserDraft::blank();
    /// draft.name = " ".to_string();
    /// assert!(!draft.is_complete());
    /// draft.email = " ".to_string();
    /// assert!(draft.is_complete());
    /// ```
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty()
    }
}

/// How ids are assigned to users created in the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    /// `count + 1`.
    ///
    /// Collides with a surviving id once an entry other than the last one has
    /// been deleted: deleting id 1 from `[1, 2]` and then adding assigns 2 again.
    #[default]
    Length,

    /// `max(id) + 1`, never reuses an id that is still present.
    MaxPlusOne,
}

impl IdStrategy {
    /// Parses the `id_strategy` configuration value.
    ///
    /// Accepts `length` and `max` (case-insensitive).
    ///
    /// # Errors
    ///
    /// [`RolodexError::Config`] for any other value.
    pub fn from_config(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "length" | "len" => Ok(Self::Length),
            "max" | "max-plus-one" => Ok(Self::MaxPlusOne),
            other => Err(RolodexError::Config(format!(
                "unknown id_strategy {other:?}, expected \"length\" or \"max\""
            ))),
        }
    }

    /// Id for a user appended to `users`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rolodex::{IdStrategy, User};
    ///
    /// let users = vec![User::new(2, "B", "b@x.com")];
    /// assert_eq!(IdStrategy::Length.next_id(&users), 2);
    /// assert_eq!(IdStrategy::MaxPlusOne.next_id(&users), 3);
    /// ```
    #[must_use]
    pub fn next_id(self, users: &[User]) -> i64 {
        match self {
            Self::Length => i64::try_from(users.len()).unwrap_or(i64::MAX - 1) + 1,
            Self::MaxPlusOne => {
                let max = users.iter().map(|u| u.id).max().unwrap_or(0);
                max.checked_add(1).unwrap_or_else(|| {
                    let fallback = smallest_unused_id(users);
                    tracing::warn!(max_id = max, fallback, "no id above the maximum, reusing a free one");
                    fallback
                })
            }
        }
    }
}

/// Lowest positive id not held by any user.
fn smallest_unused_id(users: &[User]) -> i64 {
    let taken: BTreeSet<i64> = users.iter().map(|u| u.id).collect();
    (1..=i64::MAX).find(|id| !taken.contains(id)).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_extra_fields_when_deserializing() {
        let json = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": { "city": "Gwenborough" }
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user, User::new(1, "Leanne Graham", "Sincere@april.biz"));
    }

    #[test]
    fn draft_for_user_targets_its_id() {
        let draft = UserDraft::for_user(&User::new(7, "Kurtis", "kurtis@x.com"));
        assert!(draft.is_edit());
        assert_eq!(draft.target, Some(7));
        assert_eq!(draft.name, "Kurtis");
        assert_eq!(draft.email, "kurtis@x.com");
    }

    #[test]
    fn blank_draft_is_incomplete() {
        let draft = UserDraft::blank();
        assert!(!draft.is_edit());
        assert!(!draft.is_complete());
    }

    #[test]
    fn length_strategy_can_collide_after_delete() {
        let users = vec![User::new(2, "B", "b@x.com")];
        let id = IdStrategy::Length.next_id(&users);
        assert!(users.iter().any(|u| u.id == id));
    }

    #[test]
    fn max_strategy_starts_at_one() {
        assert_eq!(IdStrategy::MaxPlusOne.next_id(&[]), 1);
        assert_eq!(IdStrategy::Length.next_id(&[]), 1);
    }

    #[test]
    fn max_strategy_reuses_free_id_when_maximum_is_taken() {
        let users: Vec<User> = serde_json::from_str(
            r#"[{"id":9223372036854775807,"name":"A","email":"a@x"},{"id":1,"name":"B","email":"b@x"}]"#,
        )
        .unwrap();
        assert_eq!(IdStrategy::MaxPlusOne.next_id(&users), 2);
    }

    #[test]
    fn parses_strategy_names() {
        assert_eq!(IdStrategy::from_config("length").unwrap(), IdStrategy::Length);
        assert_eq!(IdStrategy::from_config(" MAX ").unwrap(), IdStrategy::MaxPlusOne);
        assert!(matches!(
            IdStrategy::from_config("uuid"),
            Err(RolodexError::Config(_))
        ));
    }
}
