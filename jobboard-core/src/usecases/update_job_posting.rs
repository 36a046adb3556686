use super::{prelude::*, resolve_location::resolve_location};

/// Posting changes bundled into a single request.
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateJobPosting {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub employment_type: Option<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub status: Option<JobStatus>,
    pub address: Option<Address>,
}

/// A fully validated posting update, ready to be committed with a
/// single repository call.
#[derive(Debug)]
pub struct Storable(JobPosting);

/// Validate a posting update and re-geocode the work-site address
/// if it changed.
///
/// Only the employer who created the posting may update it. An
/// unchanged address never triggers a lookup; a changed one must
/// resolve to a coordinate inside the service area or the whole
/// update fails, including any unrelated field changes bundled
/// with it.
pub fn prepare_updated_job_posting<R, G>(
    repo: &R,
    geo: &G,
    area: &ServiceArea,
    employer: &User,
    job_id: &Id,
    update: UpdateJobPosting,
) -> Result<Storable>
where
    R: JobPostingRepo,
    G: GeocodingGateway + ?Sized,
{
    let mut job = repo.get_job_posting(job_id.as_str())?;
    if job.employer != employer.id {
        return Err(Error::Forbidden);
    }
    let UpdateJobPosting {
        title,
        description,
        category,
        employment_type,
        salary_min,
        salary_max,
        status,
        address,
    } = update;
    if let Some(title) = title {
        if title.trim().is_empty() {
            return Err(Error::Title);
        }
        job.title = title;
    }
    if let Some(description) = description {
        job.description = description;
    }
    if let Some(category) = category {
        job.category = category;
    }
    if let Some(employment_type) = employment_type {
        job.employment_type = Some(employment_type);
    }
    if let Some(salary_min) = salary_min {
        job.salary_min = Some(salary_min);
    }
    if let Some(salary_max) = salary_max {
        job.salary_max = Some(salary_max);
    }
    if let (Some(min), Some(max)) = (job.salary_min, job.salary_max) {
        if min > max || min < 0.0 {
            return Err(Error::SalaryRange);
        }
    }
    if let Some(status) = status {
        job.status = status;
    }
    if let Some(address) = address {
        if job.location.address != address {
            let location = resolve_location(geo, &address)?;
            if !area.contains(location.pos) {
                return Err(Error::OutsideServiceArea);
            }
            job.location = location;
        }
    }
    job.updated_at = Timestamp::now();
    Ok(Storable(job))
}

pub fn store_updated_job_posting<R: JobPostingRepo>(repo: &R, s: Storable) -> Result<JobPosting> {
    let Storable(job) = s;
    log::debug!("Storing updated job posting: {}", job.id);
    repo.update_job_posting(&job)?;
    Ok(job)
}

/// Convenience wrapper combining both phases.
pub fn update_job_posting<R, G>(
    repo: &R,
    geo: &G,
    area: &ServiceArea,
    employer: &User,
    job_id: &Id,
    update: UpdateJobPosting,
) -> Result<JobPosting>
where
    R: JobPostingRepo,
    G: GeocodingGateway + ?Sized,
{
    let storable = prepare_updated_job_posting(repo, geo, area, employer, job_id, update)?;
    store_updated_job_posting(repo, storable)
}

#[cfg(test)]
mod tests {

    use super::{
        super::{tests::*, *},
        *,
    };
    use jobboard_entities::builders::Builder as _;

    fn lagos_area() -> ServiceArea {
        ServiceArea::new(point(6.5244, 3.3792), Distance::from_kilometers(50.0))
    }

    fn employer() -> User {
        User::build()
            .id("employer-1")
            .email("hr@acme.example")
            .role(Role::Employer)
            .company("ACME")
            .finish()
    }

    fn stored_job(employer: &User) -> JobPosting {
        JobPosting::build()
            .id("job-1")
            .employer(employer.id.as_str())
            .title("Forklift driver")
            .finish()
    }

    #[test]
    fn unchanged_address_skips_geocoding() {
        let db = MockDb::default();
        let employer = employer();
        let job = stored_job(&employer);
        let stored_pos = job.location.pos;
        let same_addr = job.location.address.clone();
        db.job_postings.borrow_mut().push(job.clone());

        let geo = MockGeoGateway::resolving_to(point(50.0, 8.0));
        let update = UpdateJobPosting {
            description: Some("Move pallets, night shift.".into()),
            address: Some(same_addr),
            ..Default::default()
        };
        let updated = update_job_posting(&db, &geo, &lagos_area(), &employer, &job.id, update)
            .unwrap();
        assert_eq!(0, geo.calls());
        assert_eq!(stored_pos, updated.location.pos);
        assert_eq!("Move pallets, night shift.", updated.description);
    }

    #[test]
    fn changed_address_is_regeocoded_and_checked_against_the_service_area() {
        let db = MockDb::default();
        let employer = employer();
        let job = stored_job(&employer);
        db.job_postings.borrow_mut().push(job.clone());

        let new_pos = point(6.4550, 3.3941);
        let geo = MockGeoGateway::resolving_to(new_pos);
        let new_addr = addr("1 Ozumba Mbadiwe Ave", "Lagos", "106104");
        let update = UpdateJobPosting {
            address: Some(new_addr.clone()),
            ..Default::default()
        };
        let updated = update_job_posting(&db, &geo, &lagos_area(), &employer, &job.id, update)
            .unwrap();
        assert_eq!(1, geo.calls());
        assert_eq!(new_addr, updated.location.address);
        assert_eq!(new_pos, updated.location.pos);
    }

    #[test]
    fn relocation_out_of_the_service_area_is_rejected() {
        let db = MockDb::default();
        let employer = employer();
        let job = stored_job(&employer);
        db.job_postings.borrow_mut().push(job.clone());

        // Abuja is about 500 km from Lagos.
        let geo = MockGeoGateway::resolving_to(point(9.0765, 7.3986));
        let update = UpdateJobPosting {
            title: Some("Forklift driver (Abuja)".into()),
            address: Some(addr("1 Airport Rd", "Abuja", "900211")),
            ..Default::default()
        };
        let result = update_job_posting(&db, &geo, &lagos_area(), &employer, &job.id, update);
        assert!(matches!(result, Err(Error::OutsideServiceArea)));

        // The bundled title change was not committed either.
        let stored = db.get_job_posting(job.id.as_str()).unwrap();
        assert_eq!(job, stored);
    }

    #[test]
    fn only_the_owning_employer_may_update() {
        let db = MockDb::default();
        let owner = employer();
        let job = stored_job(&owner);
        db.job_postings.borrow_mut().push(job.clone());

        let other = User::build()
            .id("employer-2")
            .email("hr@globex.example")
            .role(Role::Employer)
            .company("Globex")
            .finish();
        let geo = MockGeoGateway::unresolved();
        let update = UpdateJobPosting {
            status: Some(JobStatus::Closed),
            ..Default::default()
        };
        let result = update_job_posting(&db, &geo, &lagos_area(), &other, &job.id, update);
        assert!(matches!(result, Err(Error::Forbidden)));
        assert_eq!(
            JobStatus::Active,
            db.get_job_posting(job.id.as_str()).unwrap().status
        );
    }

    #[test]
    fn closing_a_posting() {
        let db = MockDb::default();
        let employer = employer();
        let job = stored_job(&employer);
        db.job_postings.borrow_mut().push(job.clone());

        let geo = MockGeoGateway::unresolved();
        let update = UpdateJobPosting {
            status: Some(JobStatus::Closed),
            ..Default::default()
        };
        let updated = update_job_posting(&db, &geo, &lagos_area(), &employer, &job.id, update)
            .unwrap();
        assert_eq!(JobStatus::Closed, updated.status);
        assert_eq!(0, geo.calls());
    }

    #[test]
    fn merged_salary_range_is_validated() {
        let db = MockDb::default();
        let employer = employer();
        let mut job = stored_job(&employer);
        job.salary_min = Some(900.0);
        job.salary_max = Some(1200.0);
        db.job_postings.borrow_mut().push(job.clone());

        let geo = MockGeoGateway::unresolved();
        // Raising only the minimum above the stored maximum.
        let update = UpdateJobPosting {
            salary_min: Some(1500.0),
            ..Default::default()
        };
        let result = update_job_posting(&db, &geo, &lagos_area(), &employer, &job.id, update);
        assert!(matches!(result, Err(Error::SalaryRange)));
    }
}
