//! # Domain models for the user directory
//!
//! [`UserRecord`] is the read-only record supplied by the directory source and
//! rendered as one card. [`SortKey`] names the field the list is ordered by and
//! maps to the option values used by the sort control.
//!
//! ## Identity
//!
//! Records carry a stable [`UserRecord::id`] that is independent of display
//! order. Sources that expose their own identifier pass it through; otherwise
//! [`UserRecord::derive_id`] hashes the name and phone with SHA-1. The hash
//! alone collides for people with identical name and phone, so a source that
//! falls back to it must make the id unique within its batch.

use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};

/// A single person in the directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Stable identifier used as the rendering key.
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Free-form, not constrained to any fixed set.
    pub gender: String,
    /// Free-form formatting: "(272) 790-0888", "07-8012-9466", ...
    pub phone: String,
    /// URL of the profile picture.
    pub picture: String,
}

impl UserRecord {
    /// Build a record whose id is derived from its name and phone.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        gender: impl Into<String>,
        phone: impl Into<String>,
        picture: impl Into<String>,
    ) -> Self {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let phone = phone.into();
        Self {
            id: Self::derive_id(&first_name, &last_name, &phone),
            first_name,
            last_name,
            gender: gender.into(),
            phone,
            picture: picture.into(),
        }
    }

    /// Replace the derived id with one supplied by the source.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// SHA-1 hex digest of `first|last|phone`.
    pub fn derive_id(first_name: &str, last_name: &str, phone: &str) -> String {
        let mut hasher = Sha1::new();
        hasher.update(first_name.as_bytes());
        hasher.update(b"|");
        hasher.update(last_name.as_bytes());
        hasher.update(b"|");
        hasher.update(phone.as_bytes());
        hasher
            .finalize()
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect()
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Field the directory is ordered by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    /// Keep the order the records arrived in.
    #[default]
    None,
    FirstName,
    LastName,
    Gender,
    Phone,
}

impl SortKey {
    /// Every key, in the order the sort control lists them.
    pub const ALL: [SortKey; 5] = [
        SortKey::None,
        SortKey::FirstName,
        SortKey::LastName,
        SortKey::Gender,
        SortKey::Phone,
    ];

    /// Option value used by the sort control.
    pub fn as_value(&self) -> &'static str {
        match self {
            SortKey::None => "",
            SortKey::FirstName => "firstName",
            SortKey::LastName => "lastName",
            SortKey::Gender => "gender",
            SortKey::Phone => "phone",
        }
    }

    /// Parse an option value. Unknown values mean no sorting.
    pub fn from_value(value: &str) -> Self {
        match value {
            "firstName" => SortKey::FirstName,
            "lastName" => SortKey::LastName,
            "gender" => SortKey::Gender,
            "phone" => SortKey::Phone,
            _ => SortKey::None,
        }
    }

    /// Label shown in the sort control.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::None => "Sort by",
            SortKey::FirstName => "First Name",
            SortKey::LastName => "Last Name",
            SortKey::Gender => "Gender",
            SortKey::Phone => "Phone Number",
        }
    }

    /// The field this key orders by, or `None` when no ordering applies.
    pub fn field<'a>(&self, user: &'a UserRecord) -> Option<&'a str> {
        match self {
            SortKey::None => None,
            SortKey::FirstName => Some(&user.first_name),
            SortKey::LastName => Some(&user.last_name),
            SortKey::Gender => Some(&user.gender),
            SortKey::Phone => Some(&user.phone),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_id_is_stable() {
        let a = UserRecord::new("Amy", "Zimmer", "female", "111", "a.jpg");
        let b = UserRecord::new("Amy", "Zimmer", "female", "111", "other.jpg");
        assert_eq!(a.id, b.id);
        assert_eq!(a.id.len(), 40);

        let c = UserRecord::new("Amy", "Zimmer", "female", "112", "a.jpg");
        assert_ne!(a.id, c.id);
    }

    #[test]
    fn test_derived_id_separates_fields() {
        let a = UserRecord::derive_id("ab", "c", "1");
        let b = UserRecord::derive_id("a", "bc", "1");
        assert_ne!(a, b);
    }

    #[test]
    fn test_with_id_overrides() {
        let user = UserRecord::new("Bob", "Adams", "male", "222", "b.jpg").with_id("uuid-1");
        assert_eq!(user.id, "uuid-1");
        assert_eq!(user.full_name(), "Bob Adams");
    }

    #[test]
    fn test_sort_key_values() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::from_value(key.as_value()), key);
        }
        assert_eq!(SortKey::from_value("age"), SortKey::None);
        assert_eq!(SortKey::default(), SortKey::None);
    }
}
