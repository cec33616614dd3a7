//! Admin console gate: one shared username/password pair behind a verifier trait.

use crate::config;
use crate::config::keys;
use crate::error::AuthError;
use crate::storage::{BrowserStorage, KeyValueStore};
use log::info;

pub trait CredentialVerifier {
    fn verify(&self, username: &str, secret: &str) -> bool;
}

/// The single credential pair the agency shares. Compared verbatim.
#[derive(Clone, Debug)]
pub struct SharedCredential {
    username: String,
    password: String,
}

impl SharedCredential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for SharedCredential {
    fn default() -> Self {
        Self::new(config::ADMIN_USERNAME, config::ADMIN_PASSWORD)
    }
}

impl CredentialVerifier for SharedCredential {
    fn verify(&self, username: &str, secret: &str) -> bool {
        username == self.username && secret == self.password
    }
}

const FLAG_ON: &str = "true";

/// Holds the admin flags: one in session storage, and an optional
/// remember-me flag in local storage that survives browser restarts.
pub struct SessionGate<V, S, P> {
    verifier: V,
    session: S,
    persistent: P,
}

impl<V, S, P> SessionGate<V, S, P>
where
    V: CredentialVerifier,
    S: KeyValueStore,
    P: KeyValueStore,
{
    pub fn new(verifier: V, session: S, persistent: P) -> Self {
        Self {
            verifier,
            session,
            persistent,
        }
    }

    pub fn login(&self, username: &str, secret: &str, remember: bool) -> Result<(), AuthError> {
        if !self.verifier.verify(username, secret) {
            info!("Rejected admin login attempt");
            return Err(AuthError::InvalidCredentials);
        }
        self.session.set(keys::ADMIN_SESSION, FLAG_ON)?;
        if remember {
            self.persistent.set(keys::AUTH, FLAG_ON)?;
        }
        info!("Admin session opened");
        Ok(())
    }

    pub fn is_admin(&self) -> bool {
        self.session.get(keys::ADMIN_SESSION).as_deref() == Some(FLAG_ON)
            || self.persistent.get(keys::AUTH).as_deref() == Some(FLAG_ON)
    }

    pub fn logout(&self) {
        self.session.remove(keys::ADMIN_SESSION);
        self.persistent.remove(keys::AUTH);
        info!("Admin session closed");
    }
}

pub type BrowserGate = SessionGate<SharedCredential, BrowserStorage, BrowserStorage>;

impl BrowserGate {
    pub fn browser() -> Self {
        SessionGate::new(SharedCredential::default(), BrowserStorage::session(), BrowserStorage::local())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::testing::MemoryStore;

    fn gate() -> (SessionGate<SharedCredential, MemoryStore, MemoryStore>, MemoryStore, MemoryStore) {
        let session = MemoryStore::new();
        let persistent = MemoryStore::new();
        let gate = SessionGate::new(SharedCredential::default(), session.clone(), persistent.clone());
        (gate, session, persistent)
    }

    #[test]
    fn test_fixture_credentials_open_session() {
        let (gate, session, persistent) = gate();
        assert!(!gate.is_admin());
        gate.login("entervibecre", "PLMokn12#$", false).unwrap();
        assert!(gate.is_admin());
        assert_eq!(session.get(keys::ADMIN_SESSION).as_deref(), Some("true"));
        assert!(persistent.get(keys::AUTH).is_none());
    }

    #[test]
    fn test_wrong_pairs_leave_flags_untouched() {
        let (gate, session, persistent) = gate();
        for (user, pw) in [
            ("entervibecre", "plmokn12#$"),
            ("Entervibecre", "PLMokn12#$"),
            ("entervibecre ", "PLMokn12#$"),
            ("", ""),
            ("admin", "PLMokn12#$"),
        ] {
            assert_eq!(gate.login(user, pw, true), Err(AuthError::InvalidCredentials));
        }
        assert!(!gate.is_admin());
        assert!(session.is_empty());
        assert!(persistent.is_empty());
    }

    #[test]
    fn test_remember_me_survives_session_end() {
        let (gate, session, _persistent) = gate();
        gate.login("entervibecre", "PLMokn12#$", true).unwrap();
        session.remove(keys::ADMIN_SESSION);
        assert!(gate.is_admin());

        gate.logout();
        assert!(!gate.is_admin());
    }

    struct AllowList(Vec<(&'static str, &'static str)>);

    impl CredentialVerifier for AllowList {
        fn verify(&self, username: &str, secret: &str) -> bool {
            self.0.iter().any(|(u, s)| *u == username && *s == secret)
        }
    }

    #[test]
    fn test_custom_verifier_plugs_in() {
        let gate = SessionGate::new(
            AllowList(vec![("editor", "hunter2")]),
            MemoryStore::new(),
            MemoryStore::new(),
        );
        assert!(gate.login("entervibecre", "PLMokn12#$", false).is_err());
        assert!(gate.login("editor", "hunter2", false).is_ok());
    }
}
