use validator::Validate;

use crate::login::form::LoginField;

/// User-entered login form values.
///
/// The `validate` attributes are the form's validation schema; the controller
/// derives per-field error messages from it on every read, so validation
/// state never goes stale.
#[derive(Validate, Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Account email address.
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Invalid email")
    )]
    pub email: String,
    /// Account password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl Credentials {
    /// First schema error for `field`, if any.
    ///
    /// An empty value trips both the `length` and format rules; the `length`
    /// message wins so the displayed text is deterministic.
    pub(crate) fn first_error(&self, field: LoginField) -> Option<String> {
        let errors = match self.validate() {
            Ok(()) => return None,
            Err(errors) => errors,
        };
        let by_field = errors.field_errors();
        let field_errors = by_field.get(field.as_str())?;
        let error = field_errors
            .iter()
            .find(|error| error.code == "length")
            .or_else(|| field_errors.first())?;
        error.message.as_ref().map(|message| message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn empty_email_reports_required() {
        let error = credentials("", "x").first_error(LoginField::Email);
        assert_eq!(error.as_deref(), Some("Email is required"));
    }

    #[test]
    fn malformed_email_reports_invalid() {
        let error = credentials("bad", "x").first_error(LoginField::Email);
        assert_eq!(error.as_deref(), Some("Invalid email"));
    }

    #[test]
    fn empty_password_reports_required() {
        let error = credentials("a@b.com", "").first_error(LoginField::Password);
        assert_eq!(error.as_deref(), Some("Password is required"));
    }

    #[test]
    fn valid_credentials_report_nothing() {
        let credentials = credentials("a@b.com", "x");
        assert_eq!(credentials.first_error(LoginField::Email), None);
        assert_eq!(credentials.first_error(LoginField::Password), None);
    }

    #[test]
    fn errors_are_scoped_to_their_field() {
        let credentials = credentials("bad", "x");
        assert!(credentials.first_error(LoginField::Email).is_some());
        assert_eq!(credentials.first_error(LoginField::Password), None);
    }
}
