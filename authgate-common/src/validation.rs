//! Local checks run before a registration request is sent

use crate::auth::RegisterForm;
use crate::error::ValidationError;

/// Minimum password length accepted by the registration form
pub const MIN_PASSWORD_LEN: usize = 6;

/// Check a registration form. The first failing rule wins, in this order:
/// required fields, password confirmation, password length.
///
/// Username and email are trimmed before the emptiness check; passwords are
/// compared and measured as typed. Length counts UTF-16 code units, so a
/// character outside the Basic Multilingual Plane counts twice.
pub fn validate_registration(form: &RegisterForm, min_password_len: usize) -> Result<(), ValidationError> {
    let missing = form.username.trim().is_empty()
        || form.email.trim().is_empty()
        || form.password.is_empty()
        || form.confirm_password.is_empty();
    if missing {
        return Err(ValidationError::MissingFields);
    }

    if form.password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }

    if form.password.encode_utf16().count() < min_password_len {
        return Err(ValidationError::PasswordTooShort { min: min_password_len });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(username: &str, email: &str, password: &str, confirm: &str) -> RegisterForm {
        RegisterForm {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert_eq!(
            validate_registration(&form("alice", "a@example.com", "secret", "secret"), MIN_PASSWORD_LEN),
            Ok(())
        );
    }

    #[test]
    fn test_whitespace_only_identity_is_missing() {
        let result = validate_registration(&form("   ", "a@example.com", "secret", "secret"), MIN_PASSWORD_LEN);
        assert_eq!(result, Err(ValidationError::MissingFields));

        let result = validate_registration(&form("alice", "\t", "secret", "secret"), MIN_PASSWORD_LEN);
        assert_eq!(result, Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_empty_fields_checked_before_mismatch() {
        let result = validate_registration(&form("alice", "a@example.com", "secret", ""), MIN_PASSWORD_LEN);
        assert_eq!(result, Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_mismatch_checked_before_length() {
        let result = validate_registration(&form("alice", "a@example.com", "abc", "abd"), MIN_PASSWORD_LEN);
        assert_eq!(result, Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn test_short_password() {
        let result = validate_registration(&form("alice", "a@example.com", "12345", "12345"), MIN_PASSWORD_LEN);
        assert_eq!(result, Err(ValidationError::PasswordTooShort { min: 6 }));
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // six units, eighteen bytes
        let password = "密码密码密码";
        assert_eq!(
            validate_registration(&form("alice", "a@example.com", password, password), MIN_PASSWORD_LEN),
            Ok(())
        );

        let password = "密码密码密";
        assert!(validate_registration(&form("alice", "a@example.com", password, password), MIN_PASSWORD_LEN).is_err());

        // three characters, six units
        let password = "😀😀😀";
        assert_eq!(
            validate_registration(&form("alice", "a@example.com", password, password), MIN_PASSWORD_LEN),
            Ok(())
        );

        let password = "😀😀";
        assert_eq!(
            validate_registration(&form("alice", "a@example.com", password, password), MIN_PASSWORD_LEN),
            Err(ValidationError::PasswordTooShort { min: MIN_PASSWORD_LEN })
        );
    }

    #[test]
    fn test_whitespace_password_is_not_trimmed() {
        let result = validate_registration(&form("alice", "a@example.com", "      ", "      "), MIN_PASSWORD_LEN);
        assert_eq!(result, Ok(()));
    }
}
