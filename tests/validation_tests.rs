mod common;

#[cfg(test)]
pub mod validation_tests {
    use super::common::*;

    use forgeline::models::*;

    #[test]
    fn test_complete_contact_passes() {
        assert!(get_seed_contact().validate().is_ok());
    }

    #[test]
    fn test_every_missing_required_combination_fails() {
        // All 7 non-empty subsets of {name, email, message} being blank.
        for mask in 1u8..8 {
            let mut data = get_seed_contact();
            if mask & 1 != 0 {
                data.name = String::new();
            }
            if mask & 2 != 0 {
                data.email = String::new();
            }
            if mask & 4 != 0 {
                data.message = String::new();
            }
            assert!(
                data.validate().is_err(),
                "mask {mask:03b} should fail validation"
            );
        }
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let mut data = get_seed_contact();
        data.message = "   \n\t".to_string();
        assert!(data.validate().is_err());
    }

    #[test]
    fn test_optional_fields_may_be_absent() {
        let mut data = get_seed_contact();
        data.phone = None;
        data.service = None;
        assert!(data.validate().is_ok());
    }

    #[test]
    fn test_contact_rejects_malformed_email() {
        let mut data = get_seed_contact();
        for bad in ["plain", "a@b", "@example.com", "x@", "a@b@c.io"] {
            data.email = bad.to_string();
            assert!(data.validate().is_err(), "'{bad}' should be rejected");
        }
    }

    #[test]
    fn test_newsletter_requires_well_formed_email() {
        let empty = NewsletterCreate { email: String::new() };
        let bad = NewsletterCreate { email: "oops".to_string() };
        let good = NewsletterCreate { email: "reader@example.com".to_string() };

        assert!(empty.validate().is_err());
        assert!(bad.validate().is_err());
        assert!(good.validate().is_ok());
    }

    #[test]
    fn test_login_requires_both_credentials() {
        let cases = [
            ("", "", false),
            ("admin", "", false),
            ("", "hunter2", false),
            ("admin", "hunter2", true),
        ];
        for (username, password, ok) in cases {
            let req = LoginRequest {
                username: username.to_string(),
                password: password.to_string(),
            };
            assert_eq!(req.validate().is_ok(), ok, "({username:?}, {password:?})");
        }
    }
}
