use crate::{
    email::EmailAddress, id::Id, location::Location, password::Password, time::Timestamp,
};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id         : Id,
    pub email      : EmailAddress,
    pub password   : Password,
    pub role       : Role,
    pub full_name  : String,
    pub phone      : Option<String>,
    /// Postal address and the coordinate resolved from it.
    /// Replaced as a whole whenever the address changes.
    pub location   : Option<Location>,
    /// Only meaningful for employers.
    pub company    : Option<CompanyProfile>,
    pub created_at : Timestamp,
    pub last_login : Option<Timestamp>,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    #[default]
    Seeker,
    Employer,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompanyProfile {
    pub name: String,
    pub description: Option<String>,
}
