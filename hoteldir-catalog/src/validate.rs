//! Field validation for write values and filter criteria.

use thiserror::Error;

use crate::types::{HotelFilter, NewCategory, NewCity, NewHotel, NewUser, UserUpdate};

pub const MAX_PLACE_NAME: usize = 100;
pub const MAX_HOTEL_NAME: usize = 200;
pub const MAX_ADDRESS: usize = 300;
pub const MAX_IMAGE_URL: usize = 500;
pub const USERNAME_LEN: std::ops::RangeInclusive<usize> = 4..=20;
pub const MIN_PASSWORD_LEN: usize = 6;
pub const MAX_RATING: f64 = 5.0;

/// A rejected field value.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl NewCity {
    pub fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name, MAX_PLACE_NAME)?;
        required("country", &self.country, MAX_PLACE_NAME)
    }
}

impl NewCategory {
    pub fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name, MAX_PLACE_NAME)
    }
}

impl NewHotel {
    pub fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name, MAX_HOTEL_NAME)?;
        optional("address", self.address.as_deref(), MAX_ADDRESS)?;
        optional("image_url", self.image_url.as_deref(), MAX_IMAGE_URL)?;
        rating("rating", self.rating)?;
        price("price_per_night", self.price_per_night)
    }
}

impl NewUser {
    pub fn validate(&self) -> Result<(), ValidationError> {
        username(&self.username)?;
        email(&self.email)?;
        password(&self.password)
    }
}

impl UserUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        username(&self.username)?;
        email(&self.email)?;
        match &self.password {
            Some(p) => password(p),
            None => Ok(()),
        }
    }
}

impl HotelFilter {
    /// Reject bounds no hotel could ever be compared against.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(p) = self.min_price {
            price("min_price", p)?;
        }
        if let Some(p) = self.max_price {
            price("max_price", p)?;
        }
        if let Some(r) = self.min_rating {
            rating("min_rating", r)?;
        }
        Ok(())
    }
}

fn required(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "This field is required."));
    }
    optional(field, Some(value), max)
}

fn optional(field: &'static str, value: Option<&str>, max: usize) -> Result<(), ValidationError> {
    match value {
        Some(v) if v.chars().count() > max => Err(ValidationError::new(
            field,
            format!("Field cannot be longer than {max} characters."),
        )),
        _ => Ok(()),
    }
}

fn rating(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && (0.0..=MAX_RATING).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new(
            field,
            format!("Number must be between 0 and {MAX_RATING}."),
        ))
    }
}

fn price(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new(field, "Number must be at least 0."))
    }
}

fn username(value: &str) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if USERNAME_LEN.contains(&len) {
        Ok(())
    } else {
        Err(ValidationError::new(
            "username",
            format!(
                "Field must be between {} and {} characters long.",
                USERNAME_LEN.start(),
                USERNAME_LEN.end()
            ),
        ))
    }
}

fn password(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() >= MIN_PASSWORD_LEN {
        Ok(())
    } else {
        Err(ValidationError::new(
            "password",
            format!("Field must be at least {MIN_PASSWORD_LEN} characters long."),
        ))
    }
}

fn email(value: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::new("email", "Invalid email address.");

    if value.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = value.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let dotted = domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.');
    if !dotted || domain.contains("..") {
        return Err(invalid());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(email("admin@hotel.com").is_ok());
        assert!(email("a.b+c@mail.example.ma").is_ok());
        assert!(email("admin").is_err());
        assert!(email("@hotel.com").is_err());
        assert!(email("admin@hotel").is_err());
        assert!(email("admin@.com").is_err());
        assert!(email("admin@hotel.com.").is_err());
        assert!(email("a@b@hotel.com").is_err());
        assert!(email("ad min@hotel.com").is_err());
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        assert!(rating("rating", 0.0).is_ok());
        assert!(rating("rating", 5.0).is_ok());
        assert!(rating("rating", 5.01).is_err());
        assert!(rating("rating", -0.1).is_err());
        assert!(rating("rating", f64::NAN).is_err());
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        // 100 two-byte characters is still within the limit.
        let name = "é".repeat(MAX_PLACE_NAME);
        assert!(required("name", &name, MAX_PLACE_NAME).is_ok());
        let name = "é".repeat(MAX_PLACE_NAME + 1);
        assert!(required("name", &name, MAX_PLACE_NAME).is_err());
    }

    #[test]
    fn blank_is_missing() {
        let err = required("name", "   ", MAX_PLACE_NAME).unwrap_err();
        assert_eq!(err.field, "name");
    }
}
