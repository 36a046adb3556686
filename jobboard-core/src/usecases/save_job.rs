use super::prelude::*;
use crate::repositories::Error as RepoError;

/// Bookmark a job posting for later.
pub fn save_job<R>(repo: &R, user: &User, job_id: &Id) -> Result<()>
where
    R: SavedJobRepo + JobPostingRepo,
{
    // The posting must exist, closed ones may still be bookmarked.
    repo.get_job_posting(job_id.as_str())?;
    let saved = SavedJob {
        user: user.id.clone(),
        job: job_id.clone(),
        saved_at: Timestamp::now(),
    };
    repo.create_saved_job(&saved)?;
    Ok(())
}

/// Remove a bookmark. Removing a bookmark that does not exist is
/// not an error.
pub fn unsave_job<R: SavedJobRepo>(repo: &R, user: &User, job_id: &Id) -> Result<()> {
    match repo.delete_saved_job(user.id.as_str(), job_id.as_str()) {
        Ok(()) | Err(RepoError::NotFound) => Ok(()),
        Err(err) => Err(err.into()),
    }
}
