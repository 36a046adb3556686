use super::{prelude::*, resolve_location::resolve_location};

/// Profile changes bundled into a single request.
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserProfile {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub company: Option<CompanyProfile>,
    pub address: Option<Address>,
}

/// A fully validated profile update, ready to be committed with a
/// single repository call.
#[derive(Debug)]
pub struct Storable(User);

/// Validate a profile update and re-geocode the address if it
/// changed.
///
/// The stored street/city/zip are compared field by field against
/// the submitted ones. An unchanged address never triggers a
/// lookup and leaves the stored coordinate untouched. A changed
/// address that cannot be resolved fails the whole update,
/// including any unrelated field changes bundled with it.
pub fn prepare_updated_user<R, G>(
    repo: &R,
    geo: &G,
    user_id: &Id,
    update: UpdateUserProfile,
) -> Result<Storable>
where
    R: UserRepo,
    G: GeocodingGateway + ?Sized,
{
    let mut user = repo.get_user(user_id.as_str())?;
    let UpdateUserProfile {
        full_name,
        phone,
        company,
        address,
    } = update;
    if let Some(full_name) = full_name {
        if full_name.trim().is_empty() {
            return Err(Error::FullName);
        }
        user.full_name = full_name;
    }
    if let Some(phone) = phone {
        user.phone = Some(phone);
    }
    if let Some(company) = company {
        user.company = Some(company);
    }
    if let Some(address) = address {
        if !address_unchanged(user.location.as_ref(), &address) {
            user.location = Some(resolve_location(geo, &address)?);
        }
    }
    Ok(Storable(user))
}

pub fn store_updated_user<R: UserRepo>(repo: &R, s: Storable) -> Result<User> {
    let Storable(user) = s;
    log::debug!("Storing updated user profile: {}", user.id);
    repo.update_user(&user)?;
    Ok(user)
}

/// Convenience wrapper combining both phases.
pub fn update_user_profile<R, G>(
    repo: &R,
    geo: &G,
    user_id: &Id,
    update: UpdateUserProfile,
) -> Result<User>
where
    R: UserRepo,
    G: GeocodingGateway + ?Sized,
{
    let storable = prepare_updated_user(repo, geo, user_id, update)?;
    store_updated_user(repo, storable)
}

fn address_unchanged(stored: Option<&Location>, incoming: &Address) -> bool {
    stored.map(|loc| &loc.address == incoming).unwrap_or(false)
}

#[cfg(test)]
mod tests {

    use super::{
        super::{tests::*, *},
        *,
    };
    use crate::repositories::Error as RepoError;
    use jobboard_entities::builders::Builder as _;

    fn seeker_with_address() -> User {
        User::build()
            .email("ada@example.com")
            .location(addr("12 Marina Rd", "Lagos", "101233"), 6.5244, 3.3792)
            .finish()
    }

    #[test]
    fn unchanged_address_skips_geocoding_and_keeps_coordinate() {
        let db = MockDb::default();
        let user = seeker_with_address();
        let stored_pos = user.location.as_ref().unwrap().pos;
        db.users.borrow_mut().push(user.clone());

        // Same address text, different canned geocoder position:
        // the lookup must not even happen.
        let geo = MockGeoGateway::resolving_to(point(50.0, 8.0));
        let update = UpdateUserProfile {
            phone: Some("+234 1 280 0000".into()),
            address: Some(addr("12 Marina Rd", "Lagos", "101233")),
            ..Default::default()
        };
        let updated = update_user_profile(&db, &geo, &user.id, update).unwrap();
        assert_eq!(0, geo.calls());
        assert_eq!(stored_pos, updated.location.as_ref().unwrap().pos);
        assert_eq!(Some("+234 1 280 0000".into()), updated.phone);
    }

    #[test]
    fn changed_address_is_regeocoded_and_replaced_as_a_whole() {
        let db = MockDb::default();
        let user = seeker_with_address();
        db.users.borrow_mut().push(user.clone());

        let new_pos = point(6.4550, 3.3941);
        let geo = MockGeoGateway::resolving_to(new_pos);
        let new_addr = addr("1 Ozumba Mbadiwe Ave", "Lagos", "106104");
        let update = UpdateUserProfile {
            address: Some(new_addr.clone()),
            ..Default::default()
        };
        let updated = update_user_profile(&db, &geo, &user.id, update).unwrap();
        assert_eq!(1, geo.calls());
        let location = updated.location.unwrap();
        assert_eq!(new_addr, location.address);
        assert_eq!(new_pos, location.pos);
    }

    #[test]
    fn single_changed_field_triggers_geocoding() {
        let db = MockDb::default();
        let user = seeker_with_address();
        db.users.borrow_mut().push(user.clone());

        let geo = MockGeoGateway::resolving_to(point(6.6018, 3.3515));
        // Only the zip differs.
        let update = UpdateUserProfile {
            address: Some(addr("12 Marina Rd", "Lagos", "100001")),
            ..Default::default()
        };
        assert!(update_user_profile(&db, &geo, &user.id, update).is_ok());
        assert_eq!(1, geo.calls());
    }

    #[test]
    fn rejected_update_leaves_stored_state_untouched() {
        let db = MockDb::default();
        let user = seeker_with_address();
        db.users.borrow_mut().push(user.clone());

        let geo = MockGeoGateway::unresolved();
        let update = UpdateUserProfile {
            // Unrelated change bundled with the address change:
            // must not be committed either.
            full_name: Some("Ada L.".into()),
            address: Some(addr("1 Nowhere", "Atlantis", "00000")),
            ..Default::default()
        };
        let result = update_user_profile(&db, &geo, &user.id, update);
        assert!(matches!(result, Err(Error::UnverifiedAddress(_))));

        let stored = db.get_user(user.id.as_str()).unwrap();
        assert_eq!(user, stored);
    }

    #[test]
    fn update_of_unknown_user_fails() {
        let db = MockDb::default();
        let geo = MockGeoGateway::unresolved();
        let result = update_user_profile(&db, &geo, &Id::new(), UpdateUserProfile::default());
        assert!(matches!(result, Err(Error::Repo(RepoError::NotFound))));
    }
}
