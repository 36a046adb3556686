use super::prelude::*;

/// Find active job postings within the given great-circle distance
/// of an origin, closest first.
pub fn find_nearby_jobs<R: JobPostingRepo>(
    repo: &R,
    origin: MapPoint,
    max_distance: Distance,
) -> Result<Vec<(JobPosting, Distance)>> {
    let mut jobs: Vec<_> = repo
        .all_job_postings()?
        .into_iter()
        .filter(|job| job.status == JobStatus::Active)
        .map(|job| {
            let distance = MapPoint::distance(origin, job.location.pos);
            (job, distance)
        })
        .filter(|(_, distance)| *distance <= max_distance)
        .collect();
    jobs.sort_by(|(_, d1), (_, d2)| d1.partial_cmp(d2).unwrap_or(std::cmp::Ordering::Equal));
    Ok(jobs)
}
