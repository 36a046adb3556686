use std::{fmt, str::FromStr};
use thiserror::Error;

/// A parsed e-mail address.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub const fn new_unchecked(address: String) -> Self {
        Self(address)
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[derive(Debug, Error)]
#[error("Invalid e-mail address")]
pub struct EmailAddressParseError;

impl FromStr for EmailAddress {
    type Err = EmailAddressParseError;
    fn from_str(s: &str) -> Result<EmailAddress, Self::Err> {
        let info = mailparse::addrparse(s)
            .ok()
            .and_then(|list| list.extract_single_info())
            .ok_or(EmailAddressParseError)?;
        Ok(Self(info.addr))
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_address() {
        assert!("worker@example.com".parse::<EmailAddress>().is_ok());
        assert!("".parse::<EmailAddress>().is_err());
        assert!("worker@".parse::<EmailAddress>().is_err());
        assert_eq!(
            "worker@example.com",
            "Worker <worker@example.com>"
                .parse::<EmailAddress>()
                .unwrap()
                .as_str()
        );
    }

    #[test]
    fn rehydrate_without_parsing() {
        // Addresses loaded from storage were validated on entry.
        let stored = EmailAddress::new_unchecked("worker@example.com".into());
        assert_eq!("worker@example.com", stored.as_str());
        assert_eq!("worker@example.com", stored.into_string());
    }
}
