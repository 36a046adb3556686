use super::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct Credentials<'a> {
    pub email: &'a EmailAddress,
    pub password: &'a str,
}

/// Authenticate a user by email and password.
///
/// Unknown accounts and wrong passwords are indistinguishable from
/// the outside. A successful login records the login time.
pub fn login_with_email<R: UserRepo>(repo: &R, credentials: &Credentials) -> Result<User> {
    let mut user = repo
        .try_get_user_by_email(credentials.email)?
        .ok_or(Error::Credentials)?;
    if !user.password.verify(credentials.password) {
        return Err(Error::Credentials);
    }
    user.last_login = Some(Timestamp::now());
    repo.update_user(&user)?;
    Ok(user)
}

#[cfg(test)]
mod tests {

    use super::{
        super::{tests::*, *},
        *,
    };
    use jobboard_entities::builders::Builder as _;

    fn ada() -> User {
        // Builder default password is "secret".
        User::build().email("ada@example.com").finish()
    }

    #[test]
    fn login_with_valid_credentials() {
        let db = MockDb::default();
        db.users.borrow_mut().push(ada());
        let email = "ada@example.com".parse().unwrap();
        let user = login_with_email(
            &db,
            &Credentials {
                email: &email,
                password: "secret",
            },
        )
        .unwrap();
        assert!(user.last_login.is_some());
        // The login time was persisted.
        let stored = db.get_user_by_email(&email).unwrap();
        assert_eq!(user.last_login, stored.last_login);
    }

    #[test]
    fn login_with_wrong_password() {
        let db = MockDb::default();
        db.users.borrow_mut().push(ada());
        let email = "ada@example.com".parse().unwrap();
        let result = login_with_email(
            &db,
            &Credentials {
                email: &email,
                password: "wrong",
            },
        );
        assert!(matches!(result, Err(Error::Credentials)));
        assert!(db.get_user_by_email(&email).unwrap().last_login.is_none());
    }

    #[test]
    fn login_with_unknown_email_fails_like_a_wrong_password() {
        let db = MockDb::default();
        let email = "nobody@example.com".parse().unwrap();
        let result = login_with_email(
            &db,
            &Credentials {
                email: &email,
                password: "secret",
            },
        );
        assert!(matches!(result, Err(Error::Credentials)));
    }
}
