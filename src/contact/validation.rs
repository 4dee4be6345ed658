//! Client-side validation for the contact form.
//!
//! Everything here is pure so the rules can be unit tested off the DOM. The
//! component in `contact::form` owns the touched flags and error map and
//! calls into these functions on change, blur and submit.

use std::collections::HashMap;

/// The four fields the form submits. `as_str` gives the wire name used both
/// for the form-encoded payload and the input `name` attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Project,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Project, Field::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Project => "project",
            Field::Message => "message",
        }
    }
}

/// Raw values of all four fields. The empty string doubles as the
/// "unselected" sentinel for the project dropdown.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub project: String,
    pub message: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Project => &self.project,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Project => self.project = value,
            Field::Message => self.message = value,
        }
    }
}

/// Errors for the fields that currently fail their rule. A field absent from
/// the map is valid.
pub type FieldErrors = HashMap<Field, &'static str>;

/// Validates a single field. Returns `None` when the value satisfies the
/// field's rule.
pub fn validate(field: Field, value: &str) -> Option<&'static str> {
    match field {
        Field::Name => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                Some("Please enter your name")
            } else if trimmed.chars().count() < 2 {
                Some("Name must be at least 2 characters")
            } else {
                None
            }
        }
        Field::Email => {
            if value.trim().is_empty() {
                Some("Please enter your email")
            } else if !is_valid_email(value) {
                Some("Please enter a valid email address")
            } else {
                None
            }
        }
        Field::Project => {
            if value.is_empty() {
                Some("Please select a project type")
            } else {
                None
            }
        }
        Field::Message => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                Some("Please enter a message")
            } else if trimmed.chars().count() < 10 {
                Some("Message must be at least 10 characters")
            } else {
                None
            }
        }
    }
}

/// Re-checks every field in one pass. The form is submittable iff the
/// returned map is empty.
pub fn validate_all(values: &FormValues) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in Field::ALL {
        if let Some(message) = validate(field, values.get(field)) {
            errors.insert(field, message);
        }
    }
    errors
}

// local@domain.tld: no whitespace, exactly one non-empty local part, and a
// dot in the domain with non-empty segments on both sides.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_rules() {
        assert_eq!(validate(Field::Name, ""), Some("Please enter your name"));
        assert_eq!(validate(Field::Name, "   "), Some("Please enter your name"));
        assert_eq!(
            validate(Field::Name, "A"),
            Some("Name must be at least 2 characters")
        );
        // Surrounding whitespace does not count towards the length
        assert_eq!(
            validate(Field::Name, " A "),
            Some("Name must be at least 2 characters")
        );
        assert_eq!(validate(Field::Name, "Jo"), None);
        assert_eq!(validate(Field::Name, "Jane Doe"), None);
    }

    #[test]
    fn email_rules() {
        assert_eq!(validate(Field::Email, ""), Some("Please enter your email"));
        for bad in [
            "x",
            "x@",
            "@example.com",
            "x@example",
            "x@.com",
            "jane doe@example.com",
            "jane@exam ple.com",
            "jane@@example.com",
        ] {
            assert_eq!(
                validate(Field::Email, bad),
                Some("Please enter a valid email address"),
                "expected {bad:?} to be rejected"
            );
        }
        assert_eq!(validate(Field::Email, "jane@example.com"), None);
        assert_eq!(validate(Field::Email, "jane.doe@mail.example.co"), None);
    }

    #[test]
    fn project_rules() {
        assert_eq!(
            validate(Field::Project, ""),
            Some("Please select a project type")
        );
        assert_eq!(validate(Field::Project, "residential"), None);
    }

    #[test]
    fn message_rules() {
        assert_eq!(validate(Field::Message, ""), Some("Please enter a message"));
        assert_eq!(
            validate(Field::Message, "short"),
            Some("Message must be at least 10 characters")
        );
        assert_eq!(validate(Field::Message, "long enough message"), None);
    }

    #[test]
    fn validate_is_deterministic() {
        for field in Field::ALL {
            for value in ["", "a", "jane@example.com", "a perfectly fine message"] {
                assert_eq!(validate(field, value), validate(field, value));
            }
        }
    }

    #[test]
    fn validate_all_flags_every_invalid_field() {
        let values = FormValues {
            name: "A".into(),
            email: "x".into(),
            project: "".into(),
            message: "short".into(),
        };
        let errors = validate_all(&values);
        assert_eq!(
            errors.get(&Field::Name),
            Some(&"Name must be at least 2 characters")
        );
        assert_eq!(
            errors.get(&Field::Email),
            Some(&"Please enter a valid email address")
        );
        assert_eq!(
            errors.get(&Field::Project),
            Some(&"Please select a project type")
        );
        assert_eq!(
            errors.get(&Field::Message),
            Some(&"Message must be at least 10 characters")
        );
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn validate_all_passes_a_complete_form() {
        let values = FormValues {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            project: "residential".into(),
            message: "I would like a full home renovation consultation.".into(),
        };
        assert!(validate_all(&values).is_empty());
    }

    #[test]
    fn validate_all_matches_per_field_results() {
        let values = FormValues {
            name: "Jane Doe".into(),
            email: "not-an-email".into(),
            project: "commercial".into(),
            message: "tell me more about pricing".into(),
        };
        let errors = validate_all(&values);
        for field in Field::ALL {
            assert_eq!(
                errors.get(&field).copied(),
                validate(field, values.get(field))
            );
        }
    }
}
