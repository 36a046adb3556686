mod apply_to_job;
mod create_job_posting;
mod create_new_user;
mod error;
mod find_nearby_jobs;
mod login;
mod register_resume;
mod resolve_location;
mod save_job;
mod update_job_posting;
mod update_user_profile;


pub use self::{
    apply_to_job::*, create_job_posting::*, create_new_user::*, error::Error, find_nearby_jobs::*,
    login::*, register_resume::*, resolve_location::*, save_job::*, update_job_posting::*,
    update_user_profile::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, gateways::geocode::*, repositories::*};
}
