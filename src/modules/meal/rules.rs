use crate::utils::validation;
use sqlx::types::BigDecimal;
use validator::ValidationError;

pub const MAX_PRICE: i32 = 200;
pub const MAX_TEXT_LENGTH: usize = 255;

pub fn validate_price(price: &BigDecimal) -> Result<(), ValidationError> {
    if *price <= BigDecimal::from(0) {
        return Err(validation::error(
            "PRICE_NOT_POSITIVE",
            "Price must be greater than 0",
        ));
    }
    if *price > BigDecimal::from(MAX_PRICE) {
        return Err(validation::error("PRICE_TOO_HIGH", "Price cannot exceed 200"));
    }

    Ok(())
}

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    validation::max_chars(title, MAX_TEXT_LENGTH, "Title cannot exceed 255 characters")
}

pub fn validate_location(location: &str) -> Result<(), ValidationError> {
    validation::max_chars(
        location,
        MAX_TEXT_LENGTH,
        "Location cannot exceed 255 characters",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn accepts_prices_within_bounds() {
        assert!(validate_price(&BigDecimal::from(10)).is_ok());
        assert!(validate_price(&BigDecimal::from_str("0.50").unwrap()).is_ok());
        assert!(validate_price(&BigDecimal::from(200)).is_ok());
    }

    #[test]
    fn rejects_non_positive_prices() {
        assert_eq!(
            validate_price(&BigDecimal::from(0)).unwrap_err().code,
            "PRICE_NOT_POSITIVE"
        );
        assert_eq!(
            validate_price(&BigDecimal::from(-5)).unwrap_err().code,
            "PRICE_NOT_POSITIVE"
        );
    }

    #[test]
    fn rejects_prices_over_the_ceiling() {
        assert_eq!(
            validate_price(&BigDecimal::from_str("200.01").unwrap())
                .unwrap_err()
                .code,
            "PRICE_TOO_HIGH"
        );
    }

    #[test]
    fn text_fields_fit_their_columns() {
        assert!(validate_title(&"t".repeat(255)).is_ok());
        assert_eq!(
            validate_title(&"t".repeat(256)).unwrap_err().code,
            "TOO_LONG"
        );
        assert!(validate_location(&"l".repeat(256)).is_err());
    }
}
