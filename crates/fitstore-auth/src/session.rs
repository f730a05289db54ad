//! Session container.

use crate::token::AuthToken;
use crate::user::{ProfileUpdate, User};
use crate::AuthError;
use fitstore_cache::{keys, Cache};
use fitstore_commerce::address::AddressDraft;
use fitstore_commerce::ids::AddressId;
use tracing::{debug, info};

/// The current user and token, persisted under `user` and `token`.
#[derive(Debug, Clone)]
pub struct SessionStore {
    session: Option<(User, AuthToken)>,
    cache: Cache,
}

impl SessionStore {
    /// Read the persisted snapshot. Both keys must be present; anything
    /// less is an anonymous session.
    pub fn restore(cache: Cache) -> Result<Self, AuthError> {
        let user = cache.get::<User>(keys::USER)?;
        let token = cache.get::<AuthToken>(keys::TOKEN)?;
        let session = match (user, token) {
            (Some(user), Some(token)) => {
                debug!(user_id = %user.id, "session restored");
                Some((user, token))
            }
            _ => None,
        };
        Ok(Self { session, cache })
    }

    /// Replace the current session.
    pub fn login(&mut self, user: User, token: AuthToken) -> Result<&User, AuthError> {
        self.cache.set(keys::USER, &user)?;
        self.cache.set(keys::TOKEN, &token)?;
        info!(user_id = %user.id, role = %user.role, "logged in");
        let (user, _) = self.session.insert((user, token));
        Ok(user)
    }

    /// Clear the session and its snapshot.
    pub fn logout(&mut self) -> Result<(), AuthError> {
        self.cache.delete(keys::USER)?;
        self.cache.delete(keys::TOKEN)?;
        if let Some((user, _)) = self.session.take() {
            info!(user_id = %user.id, "logged out");
        }
        Ok(())
    }

    pub fn current(&self) -> Option<&User> {
        self.session.as_ref().map(|(user, _)| user)
    }

    pub fn token(&self) -> Option<&AuthToken> {
        self.session.as_ref().map(|(_, token)| token)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_seller(&self) -> bool {
        self.current().is_some_and(User::is_seller)
    }

    /// Current user, or `NotAuthenticated`.
    pub fn require(&self) -> Result<&User, AuthError> {
        self.current().ok_or(AuthError::NotAuthenticated)
    }

    /// Shallow-merge profile fields and persist.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> Result<&User, AuthError> {
        self.modify(|user| {
            update.apply(user);
            Ok(())
        })?;
        self.require()
    }

    pub fn add_address(&mut self, draft: AddressDraft) -> Result<AddressId, AuthError> {
        self.modify(|user| Ok(user.addresses.add(draft)?))
    }

    pub fn update_address(&mut self, id: &AddressId, draft: AddressDraft) -> Result<(), AuthError> {
        self.modify(|user| Ok(user.addresses.update(id, draft)?))
    }

    pub fn remove_address(&mut self, id: &AddressId) -> Result<(), AuthError> {
        self.modify(|user| {
            user.addresses.remove(id)?;
            Ok(())
        })
    }

    pub fn set_primary_address(&mut self, id: &AddressId) -> Result<(), AuthError> {
        self.modify(|user| Ok(user.addresses.set_primary(id)?))
    }

    /// Apply `f` to a copy of the user; on success store and persist it.
    fn modify<T>(&mut self, f: impl FnOnce(&mut User) -> Result<T, AuthError>) -> Result<T, AuthError> {
        let (user, _) = self.session.as_mut().ok_or(AuthError::NotAuthenticated)?;
        let mut updated = user.clone();
        let out = f(&mut updated)?;
        self.cache.set(keys::USER, &updated)?;
        *user = updated;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::Role;
    use fitstore_commerce::ids::UserId;

    fn user() -> User {
        User::new(UserId::new("u1"), "Rahul", "rahul@example.com", Role::Buyer)
    }

    fn draft(pincode: &str) -> AddressDraft {
        AddressDraft {
            street: "221 MG Road".to_string(),
            city: "Mumbai".to_string(),
            state: "Maharashtra".to_string(),
            pincode: pincode.to_string(),
            is_primary: false,
        }
    }

    #[test]
    fn test_empty_cache_is_anonymous() {
        let session = SessionStore::restore(Cache::in_memory()).unwrap();
        assert!(!session.is_authenticated());
        assert!(!session.is_seller());
    }

    #[test]
    fn test_login_persists_and_restores() {
        let cache = Cache::in_memory();
        let mut session = SessionStore::restore(cache.clone()).unwrap();
        session.login(user(), AuthToken::issue()).unwrap();

        let restored = SessionStore::restore(cache).unwrap();
        assert_eq!(restored.current(), Some(&user()));
        assert_eq!(restored.token(), session.token());
    }

    #[test]
    fn test_half_snapshot_is_anonymous() {
        let cache = Cache::in_memory();
        cache.set(keys::USER, &user()).unwrap();
        assert!(!SessionStore::restore(cache).unwrap().is_authenticated());
    }

    #[test]
    fn test_logout_clears_snapshot() {
        let cache = Cache::in_memory();
        let mut session = SessionStore::restore(cache.clone()).unwrap();
        session.login(user(), AuthToken::issue()).unwrap();
        session.logout().unwrap();

        assert!(!session.is_authenticated());
        assert!(!cache.exists(keys::USER).unwrap());
        assert!(!cache.exists(keys::TOKEN).unwrap());
    }

    #[test]
    fn test_update_profile_requires_login() {
        let mut session = SessionStore::restore(Cache::in_memory()).unwrap();
        let err = session.update_profile(ProfileUpdate::default()).unwrap_err();
        assert!(matches!(err, AuthError::NotAuthenticated));
    }

    #[test]
    fn test_update_profile_persists() {
        let cache = Cache::in_memory();
        let mut session = SessionStore::restore(cache.clone()).unwrap();
        session.login(user(), AuthToken::issue()).unwrap();
        session
            .update_profile(ProfileUpdate {
                phone: Some("9999999999".to_string()),
                ..ProfileUpdate::default()
            })
            .unwrap();

        let restored = SessionStore::restore(cache).unwrap();
        let current = restored.current().unwrap();
        assert_eq!(current.phone, "9999999999");
        assert_eq!(current.name, "Rahul");
    }

    #[test]
    fn test_invalid_address_leaves_user_untouched() {
        let cache = Cache::in_memory();
        let mut session = SessionStore::restore(cache.clone()).unwrap();
        session.login(user(), AuthToken::issue()).unwrap();

        assert!(session.add_address(draft("123")).is_err());
        assert!(session.current().unwrap().addresses.is_empty());

        let id = session.add_address(draft("400001")).unwrap();
        let restored = SessionStore::restore(cache).unwrap();
        assert_eq!(restored.current().unwrap().addresses.primary().unwrap().id, id);
    }
}
