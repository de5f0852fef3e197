//! Records submitted by site visitors.

use serde::{Deserialize, Serialize};

use crate::types::Email;

/// A newsletter signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterSubscriber {
    pub email: Email,
}

/// A message sent through the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: Email,
    pub phone: Option<String>,
    pub message: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_contact_message_optional_phone() {
        let msg: ContactMessage = serde_json::from_value(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Hello"
        }))
        .unwrap();
        assert_eq!(msg.phone, None);
        assert_eq!(msg.email.as_str(), "ada@example.com");
    }

    #[test]
    fn test_contact_message_missing_field_is_named() {
        let err = serde_json::from_value::<ContactMessage>(json!({
            "name": "Ada",
            "email": "ada@example.com"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("message"));
    }

    #[test]
    fn test_contact_message_rejects_bad_email() {
        let err = serde_json::from_value::<ContactMessage>(json!({
            "name": "Ada",
            "email": "ada-at-example.com",
            "message": "Hello"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("@ symbol"));
    }

    #[test]
    fn test_newsletter_subscriber_serializes_email_as_string() {
        let sub: NewsletterSubscriber =
            serde_json::from_value(json!({"email": "news@example.com"})).unwrap();
        assert_eq!(
            serde_json::to_value(&sub).unwrap(),
            json!({"email": "news@example.com"})
        );
    }

    #[test]
    fn test_contact_message_serializes_absent_phone_as_null() {
        let msg = ContactMessage {
            name: "Ada".to_string(),
            email: Email::parse("ada@example.com").unwrap(),
            phone: None,
            message: "Hi".to_string(),
        };
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["phone"], serde_json::Value::Null);
    }
}
