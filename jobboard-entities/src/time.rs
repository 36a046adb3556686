use std::fmt;

use time::{format_description::well_known::Rfc3339, OffsetDateTime};

/// UTC timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(OffsetDateTime);

impl Timestamp {
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc())
    }

    pub const fn to_inner(self) -> OffsetDateTime {
        self.0
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self(from)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.format(&Rfc3339) {
            Ok(formatted) => f.write_str(&formatted),
            Err(_) => write!(f, "{:?}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering() {
        let earlier = Timestamp::now();
        let later = Timestamp::from(earlier.to_inner() + time::Duration::seconds(1));
        assert!(earlier < later);
        assert_eq!(earlier, Timestamp::from(earlier.to_inner()));
    }
}
