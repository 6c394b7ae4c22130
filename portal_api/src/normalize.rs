//! Reduces any [`Error`] to one user-facing sentence.

use crate::Error;

pub const SERVER_UNREACHABLE: &str = "Server is down or unreachable. Please try again later.";
pub const SERVER_ERROR: &str = "Server returned an error.";
pub const CHECK_CONNECTIVITY: &str = "Network issue. Please check your internet.";
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Returns the message to show a user for `err`.
///
/// First match wins:
/// 1. unreachable server, or a message mentioning `Failed to fetch`
/// 2. a non-empty GraphQL error list (its first message, or a fallback when empty)
/// 3. a network failure, or a message mentioning `NetworkError` / `network`
/// 4. anything else
///
/// Never panics; the only side effect is a debug event.
pub fn user_message(err: &Error) -> String {
    let rendered = err.to_string();
    tracing::debug!("Normalizing API error: {}", rendered);

    if matches!(err, Error::Unreachable(_)) || rendered.contains("Failed to fetch") {
        return SERVER_UNREACHABLE.to_string();
    }

    if let Error::GraphQl(errors) = err {
        if let Some(first) = errors.first() {
            return if first.message.is_empty() {
                SERVER_ERROR.to_string()
            } else {
                first.message.clone()
            };
        }
    }

    if matches!(err, Error::Network(_))
        || rendered.contains("NetworkError")
        || rendered.contains("network")
    {
        return CHECK_CONNECTIVITY.to_string();
    }

    GENERIC_FAILURE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GraphQlError;

    #[test]
    fn failed_fetch_is_unreachable() {
        let err = Error::Unreachable("Failed to fetch".to_string());
        assert_eq!(user_message(&err), SERVER_UNREACHABLE);
        assert_eq!(
            user_message(&err),
            "Server is down or unreachable. Please try again later."
        );
    }

    #[test]
    fn failed_fetch_in_any_message_wins() {
        let err = Error::HttpStatus {
            status: 502,
            message: "Failed to fetch upstream".to_string(),
        };
        assert_eq!(user_message(&err), SERVER_UNREACHABLE);

        // a GraphQL message saying so also matches the first rule
        let err = Error::GraphQl(vec![GraphQlError::new("Failed to fetch user")]);
        assert_eq!(user_message(&err), SERVER_UNREACHABLE);
    }

    #[test]
    fn failed_fetch_beats_network_in_same_message() {
        let err = Error::Network("Failed to fetch: network down".to_string());
        assert_eq!(user_message(&err), SERVER_UNREACHABLE);

        let err = Error::HttpStatus {
            status: 502,
            message: "Failed to fetch (network)".to_string(),
        };
        assert_eq!(user_message(&err), SERVER_UNREACHABLE);
    }

    #[test]
    fn unreachable_tag_wins_without_message() {
        let err = Error::Unreachable(String::new());
        assert_eq!(user_message(&err), SERVER_UNREACHABLE);
    }

    #[test]
    fn graphql_first_message_verbatim() {
        let err = Error::GraphQl(vec![
            GraphQlError::new("Invalid token"),
            GraphQlError::new("ignored"),
        ]);
        assert_eq!(user_message(&err), "Invalid token");
    }

    #[test]
    fn graphql_empty_message_falls_back() {
        let err = Error::GraphQl(vec![GraphQlError::new("")]);
        assert_eq!(user_message(&err), "Server returned an error.");
    }

    #[test]
    fn graphql_empty_list_is_generic() {
        let err = Error::GraphQl(vec![]);
        assert_eq!(user_message(&err), GENERIC_FAILURE);
    }

    #[test]
    fn graphql_message_mentioning_network_is_returned_verbatim() {
        let err = Error::GraphQl(vec![GraphQlError::new("network policy denied")]);
        assert_eq!(user_message(&err), "network policy denied");
    }

    #[test]
    fn network_messages_ask_to_check_connectivity() {
        let err = Error::HttpStatus {
            status: 503,
            message: "some network issue".to_string(),
        };
        assert_eq!(
            user_message(&err),
            "Network issue. Please check your internet."
        );

        let err = Error::Network("operation timed out".to_string());
        assert_eq!(user_message(&err), CHECK_CONNECTIVITY);

        let err = Error::Parse("NetworkError when attempting to fetch resource".to_string());
        assert_eq!(user_message(&err), CHECK_CONNECTIVITY);
    }

    #[test]
    fn unclassified_errors_are_generic() {
        assert_eq!(
            user_message(&Error::Cancelled),
            "Something went wrong. Please try again."
        );
        let err = Error::HttpStatus {
            status: 500,
            message: String::new(),
        };
        assert_eq!(user_message(&err), GENERIC_FAILURE);
        assert_eq!(
            user_message(&Error::Serialize("key must be a string".to_string())),
            GENERIC_FAILURE
        );
    }

    #[test]
    fn same_error_same_message() {
        let err = Error::Network("reset".to_string());
        assert_eq!(user_message(&err), user_message(&err));
    }
}
