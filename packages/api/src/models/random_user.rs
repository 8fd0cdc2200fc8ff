//! # randomuser.me wire format
//!
//! The endpoint answers `GET /api/?results=N` with a JSON object whose
//! `results` array holds one object per generated person. Only the fields the
//! directory renders are decoded; everything else (location, dob, nat, ...) is
//! ignored.
//!
//! ```json
//! {
//!   "results": [{
//!     "gender": "female",
//!     "name": { "title": "Ms", "first": "Amy", "last": "Zimmer" },
//!     "phone": "(272) 790-0888",
//!     "login": { "uuid": "7a0eed16-9430-4d68-901f-c0d4c1c3bf22" },
//!     "picture": { "large": "...", "medium": "...", "thumbnail": "..." }
//!   }],
//!   "info": { "seed": "56d27f4a53bd5441", "results": 1, "page": 1, "version": "1.4" }
//! }
//! ```
//!
//! [`RandomUser::into_record`] projects a decoded person into a
//! [`store::UserRecord`], using `login.uuid` as the record id when present.
//! Without a uuid the id is the derived hash suffixed with the person's index
//! in `results`, so two identical people in one batch still get distinct keys.

use serde::Deserialize;
use store::UserRecord;

/// Top-level response body.
#[derive(Debug, Deserialize)]
pub struct RandomUserResponse {
    pub results: Vec<RandomUser>,
}

/// One generated person.
#[derive(Debug, Deserialize)]
pub struct RandomUser {
    #[serde(default)]
    pub gender: String,
    pub name: Name,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub login: Option<Login>,
    #[serde(default)]
    pub picture: Picture,
}

#[derive(Debug, Deserialize)]
pub struct Name {
    pub first: String,
    pub last: String,
}

#[derive(Debug, Deserialize)]
pub struct Login {
    pub uuid: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Picture {
    #[serde(default)]
    pub large: String,
}

impl RandomUser {
    /// Convert to the record rendered by the directory. `index` is the
    /// position in the response and only feeds the fallback id.
    pub fn into_record(self, index: usize) -> UserRecord {
        let uuid = self.login.and_then(|login| login.uuid);
        let record = UserRecord::new(
            self.name.first,
            self.name.last,
            self.gender,
            self.phone,
            self.picture.large,
        );
        match uuid {
            Some(uuid) if !uuid.is_empty() => record.with_id(uuid),
            _ => {
                let id = format!("{}-{index}", record.id);
                record.with_id(id)
            }
        }
    }
}

impl RandomUserResponse {
    pub fn into_records(self) -> Vec<UserRecord> {
        self.results
            .into_iter()
            .enumerate()
            .map(|(index, user)| user.into_record(index))
            .collect()
    }
}
