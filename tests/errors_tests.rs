use std::error::Error;
use enhance_text::errors::{CompletionError, ConfigError, error_chain_message};

#[test]
fn test_errors_implement_error_trait() {
    fn assert_error<T: Error + Send + Sync + 'static>(_: &T) {}

    assert_error(&ConfigError::Missing(vec!["OPENAI_KEY"]));
    assert_error(&CompletionError::Http("test error".to_string()));
}

#[test]
fn test_config_error_display() {
    let error = ConfigError::Missing(vec!["OPENAI_KEY", "OPENAI_ENDPOINT"]);
    assert_eq!(
        format!("{error}"),
        "Missing environment variables: OPENAI_KEY, OPENAI_ENDPOINT"
    );
}

#[test]
fn test_completion_error_display_is_bare_message() {
    let error = CompletionError::Http("timeout".to_string());
    assert_eq!(format!("{error}"), "timeout");

    let error = CompletionError::Decode("expected value at line 1 column 1".to_string());
    assert_eq!(format!("{error}"), "expected value at line 1 column 1");

    let error = CompletionError::Api {
        status: 404,
        message: "The API deployment for this resource does not exist.".to_string(),
    };
    assert_eq!(
        format!("{error}"),
        "Status code 404, The API deployment for this resource does not exist."
    );
}

#[test]
fn test_completion_error_from_conversions() {
    let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let completion_err: CompletionError = err.into();
    assert!(matches!(completion_err, CompletionError::Decode(_)));

    #[allow(unused)]
    #[allow(clippy::items_after_statements)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> CompletionError {
        CompletionError::from(err)
    }
}

#[derive(Debug)]
struct SendFailed(std::io::Error);

impl std::fmt::Display for SendFailed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "error sending request")
    }
}

impl Error for SendFailed {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

#[test]
fn test_error_chain_message_keeps_causes() {
    let err = SendFailed(std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "Connection refused",
    ));
    assert_eq!(
        error_chain_message(&err, false),
        "error sending request: Connection refused"
    );
}

#[test]
fn test_error_chain_message_marks_timeouts() {
    let err = SendFailed(std::io::Error::other("deadline elapsed"));
    assert_eq!(
        error_chain_message(&err, true),
        "error sending request: deadline elapsed: operation timed out"
    );

    let err = SendFailed(std::io::Error::other("operation timed out"));
    assert_eq!(
        error_chain_message(&err, true),
        "error sending request: operation timed out"
    );
}
