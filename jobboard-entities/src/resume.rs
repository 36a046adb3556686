use crate::{id::Id, time::Timestamp};

/// Metadata of an uploaded resume file. The file contents live in
/// an external blob store and are not part of the domain model.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resume {
    pub id                : Id,
    pub owner             : Id,
    pub filename          : String,
    pub original_filename : String,
    pub uploaded_at       : Timestamp,
}
