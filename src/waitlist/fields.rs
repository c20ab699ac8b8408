//! Field-level validation for the waitlist form.
//!
//! Pure functions only; nothing here touches the DOM or the network, so
//! the rules can be unit tested on the host target.

/// Which HTML input a field renders as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
}

impl InputKind {
    pub fn html_type(self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Email => "email",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub required: bool,
    pub input_kind: InputKind,
}

/// The form fields, in render and validation order.
pub const FIELDS: [FieldDescriptor; 4] = [
    FieldDescriptor {
        name: "fullName",
        required: true,
        input_kind: InputKind::Text,
    },
    FieldDescriptor {
        name: "email",
        required: true,
        input_kind: InputKind::Email,
    },
    FieldDescriptor {
        name: "phoneNumber",
        required: false,
        input_kind: InputKind::Text,
    },
    FieldDescriptor {
        name: "country",
        required: true,
        input_kind: InputKind::Text,
    },
];

/// Turns a field identifier into its label: a space goes in front of
/// every capital, so "fullName" becomes "full Name".
pub fn humanize(name: &str) -> String {
    let mut label = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            label.push(' ');
        }
        label.push(c);
    }
    label
}

// Accepts `local@domain.tld`: no whitespace, exactly one '@', a non-empty
// local part, and a '.' in the domain with at least one character on each
// side.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = match parts.next() {
        Some(domain) => domain,
        None => return false,
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Validates a single field. Returns the user-facing error message, or
/// an empty string when the value is acceptable.
///
/// phoneNumber is optional and never produces an error. For email, the
/// format rule takes precedence over the presence rule whenever the raw
/// value is non-empty.
pub fn validate(name: &str, value: &str) -> String {
    let mut error = String::new();

    if name != "phoneNumber" && value.trim().is_empty() {
        error = format!("{} is required", humanize(name));
    }

    if name == "email" && !value.is_empty() && !is_valid_email(value) {
        error = "Please enter a valid email address".to_string();
    }

    error
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humanize_splits_camel_case() {
        assert_eq!(humanize("fullName"), "full Name");
        assert_eq!(humanize("phoneNumber"), "phone Number");
        assert_eq!(humanize("email"), "email");
        assert_eq!(humanize("country"), "country");
    }

    #[test]
    fn required_fields_reject_empty_and_whitespace() {
        assert_eq!(validate("fullName", ""), "full Name is required");
        assert_eq!(validate("fullName", "   "), "full Name is required");
        assert_eq!(validate("country", "\t"), "country is required");
        assert_eq!(validate("email", ""), "email is required");
    }

    #[test]
    fn required_fields_accept_any_text() {
        assert_eq!(validate("fullName", "Ada Lovelace"), "");
        assert_eq!(validate("country", "UK"), "");
    }

    #[test]
    fn phone_number_is_never_validated() {
        assert_eq!(validate("phoneNumber", ""), "");
        assert_eq!(validate("phoneNumber", "   "), "");
        assert_eq!(validate("phoneNumber", "not a number"), "");
    }

    #[test]
    fn email_format_rule() {
        assert_eq!(validate("email", "user@example.com"), "");
        assert_eq!(validate("email", "user@mail.example.org"), "");
        assert_eq!(
            validate("email", "user@"),
            "Please enter a valid email address"
        );
        assert_eq!(
            validate("email", "userexample.com"),
            "Please enter a valid email address"
        );
        assert_eq!(
            validate("email", "user@.com"),
            "Please enter a valid email address"
        );
        assert_eq!(
            validate("email", "user name@example.com"),
            "Please enter a valid email address"
        );
        assert_eq!(
            validate("email", "user@@example.com"),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn whitespace_only_email_fails_the_format_rule() {
        // The raw value is non-empty, so the format rule wins over the
        // presence rule.
        assert_eq!(
            validate("email", "   "),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn descriptor_table_order_and_flags() {
        let names: Vec<&str> = FIELDS.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["fullName", "email", "phoneNumber", "country"]);
        assert!(FIELDS.iter().all(|f| f.required || f.name == "phoneNumber"));
        assert_eq!(
            FIELDS.iter().find(|f| f.name == "email").unwrap().input_kind,
            InputKind::Email
        );
    }
}
