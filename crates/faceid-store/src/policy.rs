//! Update policy for in-memory repositories.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// How `update` treats an identifier that is not currently stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdatePolicy {
    /// Absent ids are inserted. `read` and `delete` still reject absent ids,
    /// so update and delete disagree on absent ids.
    ///
    /// An upsert does not advance the sequence counter: writing an id above
    /// the current sequence reserves nothing, and a later `create` reaching
    /// that id replaces the upserted entity.
    #[default]
    Upsert,
    /// Absent ids are rejected with `DomainError::NotFound`.
    RequireExisting,
}

impl UpdatePolicy {
    /// Name accepted by [`UpdatePolicy::from_str`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Upsert => "upsert",
            Self::RequireExisting => "require-existing",
        }
    }
}

impl fmt::Display for UpdatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when an update policy name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown update policy `{0}`; expected `upsert` or `require-existing`")]
pub struct ParseUpdatePolicyError(pub String);

impl FromStr for UpdatePolicy {
    type Err = ParseUpdatePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upsert" => Ok(Self::Upsert),
            "require-existing" => Ok(Self::RequireExisting),
            other => Err(ParseUpdatePolicyError(other.to_owned())),
        }
    }
}
