pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{job_posting_builder::*, user_builder::*};

pub mod user_builder {

    use super::*;
    use crate::{
        address::Address, geo::MapPoint, location::Location, time::Timestamp,
        user::*,
    };

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = email.parse().unwrap();
            self
        }
        pub fn role(mut self, role: Role) -> Self {
            self.user.role = role;
            self
        }
        pub fn full_name(mut self, full_name: &str) -> Self {
            self.user.full_name = full_name.into();
            self
        }
        pub fn location(mut self, address: Address, lat: f64, lng: f64) -> Self {
            self.user.location = Some(Location {
                pos: MapPoint::try_from_lat_lng_deg(lat, lng).unwrap(),
                address,
            });
            self
        }
        pub fn company(mut self, name: &str) -> Self {
            self.user.company = Some(CompanyProfile {
                name: name.into(),
                description: None,
            });
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> Self::Build {
            UserBuild {
                user: User {
                    id: crate::id::Id::new(),
                    email: "user@example.com".parse().unwrap(),
                    password: "secret".parse().unwrap(),
                    role: Role::default(),
                    full_name: "A. Nonymous".into(),
                    phone: None,
                    location: None,
                    company: None,
                    created_at: Timestamp::now(),
                    last_login: None,
                },
            }
        }
    }
}

pub mod job_posting_builder {

    use super::*;
    use crate::{
        address::Address, geo::MapPoint, id::Id, job::*, location::Location, time::Timestamp,
    };

    #[derive(Debug)]
    pub struct JobPostingBuild {
        job: JobPosting,
    }

    impl JobPostingBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.job.id = id.into();
            self
        }
        pub fn employer(mut self, employer: &str) -> Self {
            self.job.employer = employer.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.job.title = title.into();
            self
        }
        pub fn category(mut self, category: &str) -> Self {
            self.job.category = category.into();
            self
        }
        pub fn location(mut self, address: Address, lat: f64, lng: f64) -> Self {
            self.job.location = Location {
                pos: MapPoint::try_from_lat_lng_deg(lat, lng).unwrap(),
                address,
            };
            self
        }
        pub fn status(mut self, status: JobStatus) -> Self {
            self.job.status = status;
            self
        }
        pub fn finish(self) -> JobPosting {
            self.job
        }
    }

    impl Builder for JobPosting {
        type Build = JobPostingBuild;
        fn build() -> Self::Build {
            let now = Timestamp::now();
            JobPostingBuild {
                job: JobPosting {
                    id: Id::new(),
                    employer: Id::new(),
                    title: "Warehouse operative".into(),
                    description: "Help run the warehouse.".into(),
                    category: "logistics".into(),
                    employment_type: None,
                    salary_min: None,
                    salary_max: None,
                    location: Location {
                        pos: MapPoint::try_from_lat_lng_deg(6.5244, 3.3792).unwrap(),
                        address: Address {
                            street: "12 Marina Rd".into(),
                            city: "Lagos".into(),
                            zip: "101233".into(),
                        },
                    },
                    status: JobStatus::default(),
                    created_at: now,
                    updated_at: now,
                },
            }
        }
    }
}
