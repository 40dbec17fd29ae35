use std::error::Error;
use gobarber_core::errors::{BookError, BookResult};
use rstest::rstest;

#[test]
fn test_book_error_display() {
    let not_found = BookError::NotFound("Provider not found".to_string());
    let validation = BookError::Validation("Choose an hour".to_string());
    let authentication = BookError::Authentication("Token expired".to_string());
    let api = BookError::Api {
        status: 400,
        message: "This appointment is already booked".to_string(),
    };
    let transport = BookError::Transport(eyre::eyre!("Connection refused"));
    let internal = BookError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    assert_eq!(
        not_found.to_string(),
        "Resource not found: Provider not found"
    );
    assert_eq!(validation.to_string(), "Validation error: Choose an hour");
    assert_eq!(
        authentication.to_string(),
        "Authentication error: Token expired"
    );
    assert_eq!(
        api.to_string(),
        "API error (400): This appointment is already booked"
    );
    assert!(transport.to_string().contains("Transport error:"));
    assert!(internal.to_string().contains("Internal error:"));
}

#[rstest]
#[case(401, "Authentication error: JWT token is missing")]
#[case(404, "Resource not found: JWT token is missing")]
#[case(500, "API error (500): JWT token is missing")]
fn test_from_status(#[case] status: u16, #[case] expected: &str) {
    let error = BookError::from_status(status, "JWT token is missing");
    assert_eq!(error.to_string(), expected);
}

#[test]
fn test_internal_keeps_source() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let book_error = BookError::Internal(Box::new(io_error));

    assert!(book_error.source().is_some());
}

#[test]
fn test_book_result() {
    let result: BookResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: BookResult<i32> = Err(BookError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_from_eyre_report() {
    let book_error: BookError = eyre::eyre!("timed out").into();

    assert!(matches!(book_error, BookError::Transport(_)));
    assert!(book_error.to_string().contains("timed out"));
}
