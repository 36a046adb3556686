use super::{prelude::*, resolve_location::resolve_location};

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: EmailAddress,
    pub password: String,
    pub role: Role,
    pub full_name: String,
    pub phone: Option<String>,
    pub address: Option<Address>,
    pub company: Option<CompanyProfile>,
}

/// Register a new account.
///
/// If an address is supplied it is geocoded first; a failed lookup
/// rejects the whole registration and nothing is persisted.
pub fn create_new_user<R, G>(repo: &R, geo: &G, u: NewUser) -> Result<Id>
where
    R: UserRepo,
    G: GeocodingGateway + ?Sized,
{
    let NewUser {
        email,
        password,
        role,
        full_name,
        phone,
        address,
        company,
    } = u;
    let password = password.parse::<Password>()?;
    if full_name.trim().is_empty() {
        return Err(Error::FullName);
    }
    if repo.try_get_user_by_email(&email)?.is_some() {
        return Err(Error::UserExists);
    }
    let location = address
        .map(|addr| resolve_location(geo, &addr))
        .transpose()?;
    let new_user = User {
        id: Id::new(),
        email,
        password,
        role,
        full_name,
        phone,
        location,
        company,
        created_at: Timestamp::now(),
        last_login: None,
    };
    log::debug!("Creating new user: email = {}", new_user.email);
    let id = new_user.id.clone();
    repo.create_user(&new_user)?;
    Ok(id)
}
