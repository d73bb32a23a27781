use thiserror::Error;

/// Error outputs from `TokenKit`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenKitError {
    /// The encoded client-info blob could not be decoded into a `{uid, utid}` pair.
    ///
    /// Unrecoverable for the current token response; account construction
    /// for that response must be aborted.
    #[error("malformed_client_info: {reason}")]
    MalformedClientInfo {
        /// Why decoding or parsing failed.
        reason: String,
    },
    /// A required input for account construction was absent or unusable.
    #[error("incomplete_account_data: {field}")]
    IncompleteAccountData {
        /// The absent or unusable input.
        field: &'static str,
    },
    /// A required credential field was absent or empty at construction time.
    ///
    /// This is a contract violation by the caller, not a runtime condition;
    /// retrying with the same inputs cannot change the outcome.
    #[error("incomplete_credential_data: {field}")]
    IncompleteCredentialData {
        /// The absent or empty field.
        field: &'static str,
    },
    /// Unexpected error serializing an entity to the shared schema.
    #[error("serialization_error: {error}")]
    SerializationError {
        /// Details from the serializer.
        error: String,
    },
}
