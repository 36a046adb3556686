use crate::{gateways::geocode::GeocodeError, repositories};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The address is incomplete")]
    IncompleteAddress,
    // User-facing message is identical for both geocode failure
    // modes; the source keeps them apart for logging.
    #[error("Could not verify the address")]
    UnverifiedAddress(#[from] GeocodeError),
    #[error("The location is outside the service area")]
    OutsideServiceArea,
    #[error("Invalid e-mail address")]
    EmailAddress,
    #[error("Invalid password")]
    Password,
    #[error("Invalid full name")]
    FullName,
    #[error("The title is invalid")]
    Title,
    #[error("Invalid salary range")]
    SalaryRange,
    #[error("Invalid file name")]
    FileName,
    #[error("The user already exists")]
    UserExists,
    #[error("Invalid credentials")]
    Credentials,
    #[error("This is not allowed")]
    Forbidden,
    #[error("The job posting is not active")]
    JobNotActive,
    #[error("The job has already been applied to")]
    AlreadyApplied,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<jobboard_entities::password::ParseError> for Error {
    fn from(_: jobboard_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<jobboard_entities::email::EmailAddressParseError> for Error {
    fn from(_: jobboard_entities::email::EmailAddressParseError) -> Self {
        Self::EmailAddress
    }
}
