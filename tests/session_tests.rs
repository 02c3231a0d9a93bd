#[cfg(test)]
pub mod session_tests {
    use chrono::{Duration, Utc};

    use forgeline::services::SessionStore;

    #[test]
    fn test_login_then_logout_round_trip() {
        let store = SessionStore::new(3600);

        // LoggedOut: nothing validates.
        assert!(!store.validate("anything"));

        // Login success mints a token that validates.
        let token = store.issue();
        assert!(store.validate(&token));

        // Manual logout returns to LoggedOut.
        store.revoke(&token);
        assert!(!store.validate(&token));
    }

    #[test]
    fn test_expiry_invalidates_without_logout() {
        let store = SessionStore::new(120);
        let token = store.issue();

        let just_before = Utc::now() + Duration::seconds(119);
        let just_after = Utc::now() + Duration::seconds(121);

        assert!(store.validate_at(&token, just_before));
        assert!(!store.validate_at(&token, just_after));
        // And the expired entry is gone for good, not resurrectable.
        assert!(!store.validate_at(&token, Utc::now()));
    }

    #[test]
    fn test_revoking_unknown_token_is_harmless() {
        let store = SessionStore::new(3600);
        store.revoke("never-issued");
        let token = store.issue();
        assert!(store.validate(&token));
    }

    #[test]
    fn test_expired_sessions_are_pruned() {
        let store = SessionStore::new(60);
        let token = store.issue();
        assert_eq!(store.active_count(), 1);

        let later = Utc::now() + Duration::seconds(90);
        assert!(!store.validate_at(&token, later));
        assert_eq!(store.active_count(), 0);
    }

    #[test]
    fn test_each_login_gets_a_fresh_token() {
        let store = SessionStore::new(3600);
        let a = store.issue();
        let b = store.issue();
        assert_ne!(a, b);
    }
}
