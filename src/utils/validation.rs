use crate::domain::model::BookingRequest;
use crate::utils::error::{Result, SiteError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SiteError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// Empty means "feature off" for the relay endpoint and the booking URL, so
/// only validate what is actually set.
pub fn validate_optional_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.trim().is_empty() {
        return Ok(());
    }
    validate_url(field_name, url_str)
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SiteError::ValidationError {
            field: field_name.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Required-field gate for the booking form. Runs before any
/// `SubmissionStrategy` is invoked; on error no network call is attempted.
/// Email syntax beyond a plausibility check is left to the form surface.
pub fn validate_booking_request(request: &BookingRequest) -> Result<()> {
    validate_non_empty_string("name", &request.name)?;
    validate_non_empty_string("email", &request.email)?;

    if !request.email.contains('@') {
        return Err(SiteError::ValidationError {
            field: "email".to_string(),
            reason: "Not a plausible email address".to_string(),
        });
    }

    if !request.consent {
        return Err(SiteError::ValidationError {
            field: "consent".to_string(),
            reason: "Consent to data processing is required".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> BookingRequest {
        BookingRequest {
            name: "Jonas".to_string(),
            email: "jonas@example.com".to_string(),
            consent: true,
            ..BookingRequest::default()
        }
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("content_base_url", "https://example.com").is_ok());
        assert!(validate_url("content_base_url", "http://example.com").is_ok());
        assert!(validate_url("content_base_url", "").is_err());
        assert!(validate_url("content_base_url", "invalid-url").is_err());
        assert!(validate_url("content_base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_optional_url() {
        assert!(validate_optional_url("relay_endpoint", "").is_ok());
        assert!(validate_optional_url("relay_endpoint", "   ").is_ok());
        assert!(validate_optional_url("relay_endpoint", "https://relay.example.com/f/1").is_ok());
        assert!(validate_optional_url("relay_endpoint", "not-a-url").is_err());
    }

    #[test]
    fn test_validate_booking_request_accepts_minimal_valid() {
        assert!(validate_booking_request(&valid_request()).is_ok());
    }

    #[test]
    fn test_validate_booking_request_rejects_missing_required() {
        let mut no_name = valid_request();
        no_name.name = "  ".to_string();
        assert!(validate_booking_request(&no_name).is_err());

        let mut no_email = valid_request();
        no_email.email = String::new();
        assert!(validate_booking_request(&no_email).is_err());

        let mut bad_email = valid_request();
        bad_email.email = "jonas.example.com".to_string();
        assert!(validate_booking_request(&bad_email).is_err());

        let mut no_consent = valid_request();
        no_consent.consent = false;
        assert!(validate_booking_request(&no_consent).is_err());
    }
}
