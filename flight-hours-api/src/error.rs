use thiserror::Error;

/// Raised where a date string enters the system and does not parse as `YYYY-MM-DD`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid date '{value}': expected YYYY-MM-DD")]
pub struct InvalidDateError {
    pub value: String,
}

impl InvalidDateError {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    InvalidDate(#[from] InvalidDateError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::ValidationError(errors.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_converts_into_api_error() {
        let err: ApiError = InvalidDateError::new("2024-13-01").into();
        assert!(matches!(err, ApiError::InvalidDate(_)));
        assert_eq!(err.to_string(), "Invalid date '2024-13-01': expected YYYY-MM-DD");
    }

    #[test]
    fn test_validation_errors_convert_into_api_error() {
        let mut errors = validator::ValidationErrors::new();
        errors.add("name", validator::ValidationError::new("length"));
        let err: ApiError = errors.into();
        assert!(matches!(err, ApiError::ValidationError(message) if message.contains("name")));
    }

    #[test]
    fn test_serde_error_converts_into_api_error() {
        let parse = serde_json::from_str::<u32>("not a number");
        let err: ApiError = parse.unwrap_err().into();
        assert!(matches!(err, ApiError::Serialization(_)));
    }
}
