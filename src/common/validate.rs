/// Lightweight email shape check. The intent is to reject obvious garbage
/// before it hits the database, not to implement RFC 5322.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();

    if email.is_empty() || email.len() > 254 {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.len() > 64 || domain.is_empty() {
        return false;
    }

    if domain.contains('@') {
        return false;
    }

    domain.contains('.')
}

/// True when the string carries something other than whitespace.
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("hello@forgeline.dev"));
        assert!(is_valid_email("first.last@sub.example.co"));
    }

    #[test]
    fn rejects_missing_parts() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn rejects_oversized_local_part() {
        let local = "a".repeat(65);
        assert!(!is_valid_email(&format!("{local}@example.com")));
    }

    #[test]
    fn is_present_ignores_whitespace() {
        assert!(is_present(" x "));
        assert!(!is_present(""));
        assert!(!is_present("   \t"));
    }
}
