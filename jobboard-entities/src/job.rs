use crate::{id::Id, location::Location, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct JobPosting {
    pub id              : Id,
    pub employer        : Id,
    pub title           : String,
    pub description     : String,
    pub category        : String,
    pub employment_type : Option<String>,
    pub salary_min      : Option<f64>,
    pub salary_max      : Option<f64>,
    /// The work site. Mandatory: every posting has been geocoded
    /// and validated against the service area before it is stored.
    pub location        : Location,
    pub status          : JobStatus,
    pub created_at      : Timestamp,
    pub updated_at      : Timestamp,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum JobStatus {
    #[default]
    Active,
    Closed,
}
