use crate::utils::validation;
use validator::ValidationError;

pub const MAX_TITLE_LENGTH: usize = 255;

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    validation::max_chars(title, MAX_TITLE_LENGTH, "Title cannot exceed 255 characters")
}
