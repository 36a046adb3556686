use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewApplication {
    pub job: Id,
    pub resume: Option<Id>,
    pub cover_letter: Option<String>,
}

/// Apply to an active job posting.
///
/// One application per seeker and posting. An attached resume must
/// belong to the applicant.
pub fn apply_to_job<R>(repo: &R, applicant: &User, new: NewApplication) -> Result<Id>
where
    R: ApplicationRepo + JobPostingRepo + ResumeRepo,
{
    if applicant.role != Role::Seeker {
        return Err(Error::Forbidden);
    }
    let NewApplication {
        job,
        resume,
        cover_letter,
    } = new;
    let posting = repo.get_job_posting(job.as_str())?;
    if posting.status != JobStatus::Active {
        return Err(Error::JobNotActive);
    }
    if repo
        .applications_of_user(applicant.id.as_str())?
        .iter()
        .any(|a| a.job == job)
    {
        return Err(Error::AlreadyApplied);
    }
    if let Some(resume_id) = &resume {
        let resume = repo.get_resume(resume_id.as_str())?;
        if resume.owner != applicant.id {
            return Err(Error::Forbidden);
        }
    }
    let now = Timestamp::now();
    let application = Application {
        id: Id::new(),
        job,
        applicant: applicant.id.clone(),
        resume,
        cover_letter,
        status: ApplicationStatus::Applied,
        submitted_at: now,
        updated_at: now,
    };
    log::debug!(
        "User {} applies to job {}",
        application.applicant,
        application.job
    );
    let id = application.id.clone();
    repo.create_application(&application)?;
    Ok(id)
}
