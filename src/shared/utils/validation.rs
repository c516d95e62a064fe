use crate::shared::errors::{AppError, AppResult, FieldError};

/// Earliest year a motion picture can have been released
pub const MIN_RELEASE_YEAR: i32 = 1888;
pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;
pub const MAX_PAGE_SIZE: i64 = 100;

pub type FieldResult = Result<(), FieldError>;

pub struct Validator;

impl Validator {
    pub fn validate_required_text(field: &str, value: &str, max_len: usize) -> FieldResult {
        if value.trim().is_empty() {
            return Err(FieldError::new(field, format!("{} cannot be blank", field)));
        }
        if value.chars().count() > max_len {
            return Err(FieldError::new(
                field,
                format!("{} too long (max {} characters)", field, max_len),
            ));
        }
        Ok(())
    }

    pub fn validate_release_year(field: &str, year: i32) -> FieldResult {
        if year < MIN_RELEASE_YEAR {
            return Err(FieldError::new(
                field,
                format!("Release year must not be earlier than {}", MIN_RELEASE_YEAR),
            ));
        }
        Ok(())
    }

    pub fn validate_rating(field: &str, rating: i32) -> FieldResult {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(FieldError::new(
                field,
                format!("Rating must be between {} and {}", MIN_RATING, MAX_RATING),
            ));
        }
        Ok(())
    }

    pub fn validate_id(field: &str, id: i64) -> FieldResult {
        if id <= 0 {
            return Err(FieldError::new(field, "ID must be positive"));
        }
        Ok(())
    }

    pub fn validate_pagination(page: i64, size: i64) -> AppResult<()> {
        let mut errors = Vec::new();
        if page < 0 {
            errors.push(FieldError::new("page", "Page cannot be negative"));
        }
        if size <= 0 {
            errors.push(FieldError::new("size", "Size must be positive"));
        } else if size > MAX_PAGE_SIZE {
            errors.push(FieldError::new(
                "size",
                format!("Size cannot exceed {}", MAX_PAGE_SIZE),
            ));
        }
        Self::collect(errors)
    }

    /// Fold individual field checks into a single error listing every failure
    pub fn collect(errors: Vec<FieldError>) -> AppResult<()> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::ValidationError(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_rejected() {
        let err = Validator::validate_required_text("title", "   ", 255).unwrap_err();
        assert_eq!(err.field, "title");
    }

    #[test]
    fn overlong_text_is_rejected() {
        let long = "x".repeat(101);
        assert!(Validator::validate_required_text("genre", &long, 100).is_err());
        assert!(Validator::validate_required_text("genre", "Sci-Fi", 100).is_ok());
    }

    #[test]
    fn release_year_lower_bound_is_inclusive() {
        assert!(Validator::validate_release_year("releaseYear", 1887).is_err());
        assert!(Validator::validate_release_year("releaseYear", 1888).is_ok());
    }

    #[test]
    fn rating_must_be_within_one_to_five() {
        assert!(Validator::validate_rating("rating", 0).is_err());
        assert!(Validator::validate_rating("rating", 1).is_ok());
        assert!(Validator::validate_rating("rating", 5).is_ok());
        assert!(Validator::validate_rating("rating", 6).is_err());
    }

    #[test]
    fn pagination_reports_every_bad_parameter() {
        match Validator::validate_pagination(-1, 0) {
            Err(AppError::ValidationError(fields)) => {
                let names: Vec<_> = fields.iter().map(|f| f.field.as_str()).collect();
                assert_eq!(names, vec!["page", "size"]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        assert!(Validator::validate_pagination(0, MAX_PAGE_SIZE).is_ok());
        assert!(Validator::validate_pagination(0, MAX_PAGE_SIZE + 1).is_err());
    }
}
