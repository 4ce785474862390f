//! Contact-form decisions: required-field validation and mailto construction.
//! Sending is delegated to whatever mail client the OS has registered for
//! `mailto:` links; nothing here observes delivery.

use urlencoding::encode;

use crate::config;

/// The four contact fields, read once at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// All four fields carry non-blank text. Email format is deliberately not
    /// checked beyond presence; the mail client is the authority on that.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    /// `mailto:` URI addressed to the portfolio owner, with percent-encoded
    /// subject and body.
    pub fn mailto_uri(&self) -> String {
        let body = format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        );
        format!(
            "mailto:{}?subject={}&body={}",
            config::CONTACT_EMAIL,
            encode(&self.subject),
            encode(&body)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use urlencoding::decode;

    fn filled() -> ContactMessage {
        ContactMessage {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn complete_when_all_fields_filled() {
        assert!(filled().is_complete());
    }

    #[test]
    fn incomplete_when_any_field_blank() {
        for field in 0..4 {
            let mut msg = filled();
            match field {
                0 => msg.name = String::new(),
                1 => msg.email = "   ".to_string(),
                2 => msg.subject = String::new(),
                _ => msg.message = String::new(),
            }
            assert!(!msg.is_complete(), "field {field} should fail validation");
        }
    }

    #[test]
    fn mailto_addresses_the_fixed_recipient() {
        let uri = filled().mailto_uri();
        assert!(uri.starts_with(&format!("mailto:{}?", config::CONTACT_EMAIL)));
    }

    #[test]
    fn mailto_carries_encoded_subject_and_body() {
        let uri = filled().mailto_uri();
        assert!(uri.contains("subject=Hi"));

        let body_param = uri
            .split("&body=")
            .nth(1)
            .expect("body parameter present");
        let body = decode(body_param).expect("valid percent-encoding");
        assert!(body.contains("Name: A"));
        assert!(body.contains("Email: a@b.com"));
        assert!(body.contains("Hello"));
    }

    #[test]
    fn mailto_encodes_reserved_characters() {
        let mut msg = filled();
        msg.subject = "Q&A session?".to_string();
        let uri = msg.mailto_uri();
        // A raw '&' in the subject would split the query parameters.
        assert!(uri.contains("subject=Q%26A%20session%3F"));
    }
}
