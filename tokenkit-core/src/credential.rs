//! Base shape shared by every cached credential record.

use serde::{Deserialize, Serialize};

use crate::credential_type::CredentialType;
use crate::error::TokenKitError;

/// Fields common to all credential records in the shared cache schema.
///
/// Not itself key-bearing as a record: each credential kind embeds this
/// shape and owns its key derivation. All fields except `secret`
/// participate in key derivation, verbatim or lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    /// Identifies the signed-in identity across environments.
    pub home_account_id: String,
    /// Host and port of the authority that issued the credential.
    pub environment: String,
    /// Which kind of credential this record holds.
    pub credential_type: CredentialType,
    /// Identifier of the application the credential was issued to.
    pub client_id: String,
    /// The credential material itself, opaque to the cache layer.
    pub secret: String,
}

impl Credential {
    /// Creates the base credential shape.
    ///
    /// All inputs are required; a credential with an unset key-bearing
    /// field is unrepresentable by construction.
    ///
    /// # Errors
    ///
    /// Returns [`TokenKitError::IncompleteCredentialData`] if any field is
    /// empty.
    pub fn new(
        home_account_id: &str,
        environment: &str,
        credential_type: CredentialType,
        client_id: &str,
        secret: &str,
    ) -> Result<Self, TokenKitError> {
        require("home_account_id", home_account_id)?;
        require("environment", environment)?;
        require("client_id", client_id)?;
        require("secret", secret)?;
        Ok(Self {
            home_account_id: home_account_id.to_owned(),
            environment: environment.to_owned(),
            credential_type,
            client_id: client_id.to_owned(),
            secret: secret.to_owned(),
        })
    }
}

/// Checks that a required credential field is non-empty.
pub(crate) fn require(field: &'static str, value: &str) -> Result<(), TokenKitError> {
    if value.is_empty() {
        return Err(TokenKitError::IncompleteCredentialData { field });
    }
    Ok(())
}
