use crate::{id::Id, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    pub id           : Id,
    pub job          : Id,
    pub applicant    : Id,
    pub resume       : Option<Id>,
    pub cover_letter : Option<String>,
    pub status       : ApplicationStatus,
    pub submitted_at : Timestamp,
    pub updated_at   : Timestamp,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    Applied,
    Reviewed,
    Accepted,
    Rejected,
}
