use serde::Deserialize;

use forgeline::models::ContactCreate;

/// The contact form posts every field as a string; empty optional fields
/// become `None` on the way into the model.
#[derive(Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub service: String,
    pub message: String,
}

impl ContactForm {
    pub fn into_create(self) -> ContactCreate {
        let optional = |s: String| {
            let s = s.trim().to_string();
            (!s.is_empty()).then_some(s)
        };
        ContactCreate {
            name: self.name,
            email: self.email,
            phone: optional(self.phone),
            service: optional(self.service),
            message: self.message,
        }
    }
}

#[derive(Deserialize)]
pub struct NewsletterForm {
    pub email: String,
}

#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct AuthQuery {
    pub error: Option<String>,
}

#[derive(Deserialize)]
pub struct IndexQuery {
    pub category: Option<String>,
    pub sent: Option<String>,
    pub subscribed: Option<String>,
    pub contact_error: Option<String>,
    pub newsletter_error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_optionals_become_none() {
        let form = ContactForm {
            name: "A".into(),
            email: "a@b.co".into(),
            phone: "  ".into(),
            service: String::new(),
            message: "hello".into(),
        };
        let data = form.into_create();
        assert_eq!(data.phone, None);
        assert_eq!(data.service, None);
    }

    #[test]
    fn filled_optionals_are_kept_trimmed() {
        let form = ContactForm {
            name: "A".into(),
            email: "a@b.co".into(),
            phone: " +1 555 0100 ".into(),
            service: "web-development".into(),
            message: "hello".into(),
        };
        let data = form.into_create();
        assert_eq!(data.phone.as_deref(), Some("+1 555 0100"));
        assert_eq!(data.service.as_deref(), Some("web-development"));
    }
}
