use std::error::Error;
use booking_core::errors::{BookingError, BookingResult};

#[test]
fn test_booking_error_display() {
    let not_found = BookingError::NotFound("Booking 4".to_string());
    let validation = BookingError::Validation("Invalid input".to_string());
    let api = BookingError::Api {
        status: 409,
        message: Some("Time slot already booked".to_string()),
    };
    let api_without_message = BookingError::Api {
        status: 500,
        message: None,
    };
    let transport = BookingError::Transport(eyre::eyre!("connection refused"));

    assert_eq!(not_found.to_string(), "Resource not found: Booking 4");
    assert_eq!(validation.to_string(), "Validation error: Invalid input");
    assert_eq!(api.to_string(), "Backend returned 409: Time slot already booked");
    assert_eq!(api_without_message.to_string(), "Backend returned 500: no message");
    assert!(transport.to_string().contains("connection refused"));
}

#[test]
fn test_backend_message() {
    let api = BookingError::Api {
        status: 400,
        message: Some("Resource is not available".to_string()),
    };
    let other = BookingError::NotFound("Booking 1".to_string());

    assert_eq!(api.backend_message(), Some("Resource is not available"));
    assert_eq!(other.backend_message(), None);
}

#[test]
fn test_decode_error_conversion() {
    let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: BookingError = parse_error.into();

    assert!(err.to_string().starts_with("Decode error:"));
    assert!(err.source().is_some());
}

#[test]
fn test_box_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let boxed_error: Box<dyn Error + Send + Sync> = Box::new(io_error);
    let err = BookingError::Internal(boxed_error);

    assert!(err.to_string().contains("IO error"));
}

#[test]
fn test_booking_result() {
    let result: BookingResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: BookingResult<i32> = Err(BookingError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}
