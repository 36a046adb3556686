use crate::{id::Id, time::Timestamp};

/// A job bookmarked by a seeker.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedJob {
    pub user     : Id,
    pub job      : Id,
    pub saved_at : Timestamp,
}
