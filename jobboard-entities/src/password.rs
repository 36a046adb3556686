use std::str::FromStr;

use pwhash::bcrypt;
use thiserror::Error;

const MIN_LEN: usize = 6;

/// A bcrypt-hashed password.
///
/// Parsing a plain-text password hashes it; the plain text is
/// never stored.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Password(String);

#[derive(Debug, Error)]
#[error("Invalid password")]
pub struct ParseError;

impl Password {
    /// Wrap an already-hashed password loaded from storage.
    pub const fn from_hash(hash: String) -> Self {
        Self(hash)
    }

    pub fn verify(&self, password: &str) -> bool {
        bcrypt::verify(password, &self.0)
    }
}

impl FromStr for Password {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Password, Self::Err> {
        if s.trim().len() < MIN_LEN {
            return Err(ParseError);
        }
        let hash = bcrypt::hash(s).map_err(|_| ParseError)?;
        Ok(Self(hash))
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
