use crate::utils::validation;
use validator::ValidationError;

pub const MAX_NAME_LENGTH: usize = 100;
/// bcrypt only reads the first 72 bytes.
pub const MAX_PASSWORD_LENGTH: usize = 72;

pub fn validate_first_name(name: &str) -> Result<(), ValidationError> {
    validation::max_chars(
        name,
        MAX_NAME_LENGTH,
        "First name cannot exceed 100 characters",
    )
}

pub fn validate_last_name(name: &str) -> Result<(), ValidationError> {
    validation::max_chars(
        name,
        MAX_NAME_LENGTH,
        "Last name cannot exceed 100 characters",
    )
}

pub fn validate_password_length(password: &str) -> Result<(), ValidationError> {
    validation::max_chars(
        password,
        MAX_PASSWORD_LENGTH,
        "Password cannot exceed 72 characters",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_fit_their_columns() {
        assert!(validate_first_name(&"a".repeat(100)).is_ok());
        assert!(validate_first_name(&"a".repeat(101)).is_err());
        assert!(validate_last_name(&"a".repeat(101)).is_err());
    }

    #[test]
    fn password_over_the_hash_limit_has_its_own_message() {
        let err = validate_password_length(&"Aa1!".repeat(19)).unwrap_err();
        assert_eq!(
            err.message.unwrap(),
            "Password cannot exceed 72 characters"
        );
    }
}
