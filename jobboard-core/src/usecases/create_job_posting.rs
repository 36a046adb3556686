use super::{prelude::*, resolve_location::resolve_location};

#[derive(Debug, Clone)]
pub struct NewJobPosting {
    pub title: String,
    pub description: String,
    pub category: String,
    pub employment_type: Option<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub address: Address,
}

/// Publish a new job posting.
///
/// The work-site address is mandatory: it is geocoded and the
/// resulting coordinate must lie within the configured service
/// area, otherwise nothing is persisted.
pub fn create_job_posting<R, G>(
    repo: &R,
    geo: &G,
    area: &ServiceArea,
    employer: &User,
    new: NewJobPosting,
) -> Result<Id>
where
    R: JobPostingRepo,
    G: GeocodingGateway + ?Sized,
{
    if employer.role != Role::Employer {
        return Err(Error::Forbidden);
    }
    let NewJobPosting {
        title,
        description,
        category,
        employment_type,
        salary_min,
        salary_max,
        address,
    } = new;
    if title.trim().is_empty() {
        return Err(Error::Title);
    }
    if let (Some(min), Some(max)) = (salary_min, salary_max) {
        if min > max || min < 0.0 {
            return Err(Error::SalaryRange);
        }
    }
    let location = resolve_location(geo, &address)?;
    if !area.contains(location.pos) {
        return Err(Error::OutsideServiceArea);
    }
    let now = Timestamp::now();
    let job = JobPosting {
        id: Id::new(),
        employer: employer.id.clone(),
        title,
        description,
        category,
        employment_type,
        salary_min,
        salary_max,
        location,
        status: JobStatus::Active,
        created_at: now,
        updated_at: now,
    };
    log::debug!("Creating job posting '{}' by {}", job.title, job.employer);
    let id = job.id.clone();
    repo.create_job_posting(&job)?;
    Ok(id)
}
