use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewResume {
    pub filename: String,
    pub original_filename: String,
}

/// Register an uploaded resume file for a seeker.
///
/// The file itself is stored elsewhere, only its metadata is
/// recorded here.
pub fn register_resume<R: ResumeRepo>(repo: &R, owner: &User, new: NewResume) -> Result<Id> {
    if owner.role != Role::Seeker {
        return Err(Error::Forbidden);
    }
    let NewResume {
        filename,
        original_filename,
    } = new;
    if filename.trim().is_empty() || original_filename.trim().is_empty() {
        return Err(Error::FileName);
    }
    let resume = Resume {
        id: Id::new(),
        owner: owner.id.clone(),
        filename,
        original_filename,
        uploaded_at: Timestamp::now(),
    };
    log::debug!("Registering resume for user {}", resume.owner);
    let id = resume.id.clone();
    repo.create_resume(&resume)?;
    Ok(id)
}
