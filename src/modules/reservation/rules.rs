use crate::utils::validation;
use validator::ValidationError;

pub const MAX_CONTACT_LENGTH: usize = 255;

pub fn validate_contact_name(name: &str) -> Result<(), ValidationError> {
    validation::max_chars(
        name,
        MAX_CONTACT_LENGTH,
        "Contact name cannot exceed 255 characters",
    )
}
