//! Unit tests for credential validation

use crate::domain::entities::credentials::{LoginRequest, SignupRequest};
use crate::errors::ValidationError;

#[test]
fn test_valid_signup_passes() {
    let request = SignupRequest::new("user@example.com", "password123", "Alice");
    assert!(request.check().is_ok());
}

#[test]
fn test_signup_rejects_malformed_email() {
    let request = SignupRequest::new("not-an-email", "password123", "Alice");
    assert_eq!(request.check(), Err(ValidationError::InvalidEmail));
}

#[test]
fn test_signup_password_boundary() {
    let seven = SignupRequest::new("user@example.com", "1234567", "Alice");
    assert_eq!(
        seven.check(),
        Err(ValidationError::TooShort {
            field: "password".to_string(),
            min: 8,
            actual: 7,
        })
    );

    let eight = SignupRequest::new("user@example.com", "12345678", "Alice");
    assert!(eight.check().is_ok());
}

#[test]
fn test_signup_name_counts_characters_not_bytes() {
    let one = SignupRequest::new("user@example.com", "password123", "A");
    assert!(matches!(
        one.check(),
        Err(ValidationError::TooShort { ref field, min: 2, actual: 1 }) if field == "name"
    ));

    let korean = SignupRequest::new("user@example.com", "password123", "홍길");
    assert!(korean.check().is_ok());
}

#[test]
fn test_signup_reports_first_field_in_form_order() {
    let request = SignupRequest::new("bad", "short", "A");
    assert_eq!(request.check(), Err(ValidationError::InvalidEmail));
}

#[test]
fn test_login_requires_password() {
    let request = LoginRequest::new("user@example.com", "");
    assert_eq!(
        request.check(),
        Err(ValidationError::RequiredField {
            field: "password".to_string()
        })
    );
    assert!(LoginRequest::new("user@example.com", "x").check().is_ok());
}

#[test]
fn test_debug_output_redacts_password() {
    let signup = SignupRequest::new("user@example.com", "password123", "Alice");
    let login = LoginRequest::new("user@example.com", "hunter22");
    assert!(!format!("{:?}", signup).contains("password123"));
    assert!(!format!("{:?}", login).contains("hunter22"));
    assert!(format!("{:?}", login).contains("user@example.com"));
}

#[test]
fn test_signup_serializes_expected_fields() {
    let request = SignupRequest::new("user@example.com", "password123", "Alice");
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "email": "user@example.com",
            "password": "password123",
            "name": "Alice"
        })
    );
}
