// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.
//
// The only transactional requirement the core places on an
// implementation: a single create or update call commits all
// fields of the entity atomically. In particular an entity's
// address and coordinate are always written together.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn update_user(&self, user: &User) -> Result<()>;

    fn count_users(&self) -> Result<usize>;

    fn get_user(&self, id: &str) -> Result<User>;
    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User>;
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>>;
}

pub trait JobPostingRepo {
    fn create_job_posting(&self, job: &JobPosting) -> Result<()>;
    fn update_job_posting(&self, job: &JobPosting) -> Result<()>;

    fn get_job_posting(&self, id: &str) -> Result<JobPosting>;
    fn all_job_postings(&self) -> Result<Vec<JobPosting>>;
    fn count_job_postings(&self) -> Result<usize>;
}

pub trait ApplicationRepo {
    fn create_application(&self, application: &Application) -> Result<()>;

    fn get_application(&self, id: &str) -> Result<Application>;
    fn applications_of_job(&self, job_id: &str) -> Result<Vec<Application>>;
    fn applications_of_user(&self, applicant_id: &str) -> Result<Vec<Application>>;
}

pub trait ResumeRepo {
    fn create_resume(&self, resume: &Resume) -> Result<()>;

    fn get_resume(&self, id: &str) -> Result<Resume>;
    fn resumes_of_user(&self, user_id: &str) -> Result<Vec<Resume>>;
}

pub trait SavedJobRepo {
    fn create_saved_job(&self, saved: &SavedJob) -> Result<()>;
    fn delete_saved_job(&self, user_id: &str, job_id: &str) -> Result<()>;
    fn saved_jobs_of_user(&self, user_id: &str) -> Result<Vec<SavedJob>>;
}
