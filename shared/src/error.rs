use serde_json::Error as JsonError;
use thiserror::Error;
use validator::ValidationErrors;

/// Failures of the data-access layer.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Failed to encode request: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}

impl From<JsonError> for ApiError {
    fn from(error: JsonError) -> Self {
        Self::Decode(error.to_string())
    }
}

/// Client-side form validation failures. The `Display` text is what the user sees.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Full Name is required")]
    MissingName,

    #[error("Email is required")]
    MissingEmail,

    #[error("Phone number is required")]
    MissingPhone,

    #[error("Please enter a valid phone number")]
    InvalidPhone,

    #[error("You must agree to the data privacy declaration.")]
    ConsentRequired,

    #[error("Please enter a valid date and time")]
    InvalidDate,

    #[error("Please select or enter a category")]
    MissingCategory,

    #[error("Please select an image file")]
    MissingImage,

    #[error("{0}")]
    Invalid(String),
}

impl From<ValidationErrors> for FormError {
    fn from(errors: ValidationErrors) -> Self {
        // Prefer the first human-readable message over the field dump.
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| errors.to_string());
        Self::Invalid(message)
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_form_error_messages() {
        assert_eq!(FormError::MissingName.to_string(), "Full Name is required");
        assert_eq!(
            FormError::ConsentRequired.to_string(),
            "You must agree to the data privacy declaration."
        );
    }

    #[test]
    fn test_api_error_status() {
        let err = ApiError::Status {
            status: 409,
            message: "Duplicate details found".to_string(),
        };
        assert_eq!(err.status(), Some(409));
        assert!(!err.is_network());
        assert_eq!(ApiError::Network("offline".into()).status(), None);
    }

    #[test]
    fn test_json_error_becomes_decode() {
        let err: ApiError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
