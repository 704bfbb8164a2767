///! Error kinds for the polling pipeline
///!
///! One enumeration covers everything a cycle can raise: connectivity,
///! API-answer, validation, domain, and notification failures. The loop
///! controller converts any of the first four kinds into a diagnostic
///! chat message; `Notify` is logged at the send site and goes no further.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    /// The transport could not complete the request at all.
    #[error("failed to reach {endpoint}: {source}")]
    Connectivity {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered, but with a status other than 200.
    #[error("API answered with HTTP {0}")]
    ApiAnswer(u16),

    /// The API answered 200 but the body was not readable JSON.
    #[error("API response could not be decoded: {0}")]
    Decode(String),

    /// A required key is absent (or empty) in the API response.
    #[error("key \"{0}\" is missing from the API response")]
    MissingKey(&'static str),

    /// A response value has the wrong JSON type.
    #[error("unexpected type in API response: expected {expected}, got {found}")]
    WrongType {
        expected: &'static str,
        found: &'static str,
    },

    /// The homework status is outside the known verdict set.
    #[error("unknown homework status \"{0}\"")]
    UnknownStatus(String),

    /// The notification transport failed. Callers never see this one;
    /// the notifier logs it and carries on.
    #[error("failed to send telegram message: {0}")]
    Notify(String),
}
