//! Decoding of the authority-issued client-info blob.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::TokenKitError;
use crate::keys::CLIENT_INFO_SEPARATOR;

/// The decoded `{uid, utid}` pair carried by an authority's client-info blob.
///
/// Client info is transient: it is decoded on demand at account-build time
/// and never persisted on its own. Only the original encoded string is
/// retained (on the account entity) for later re-derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInfo {
    /// Stable per-identity identifier within a directory.
    pub uid: String,
    /// Stable per-directory (tenant) identifier.
    pub utid: String,
}

impl ClientInfo {
    /// Decodes a raw base64url-encoded client-info blob.
    ///
    /// # Errors
    ///
    /// Returns [`TokenKitError::MalformedClientInfo`] if the blob is not
    /// valid base64url, does not contain a JSON object, or carries an
    /// absent or empty `uid`/`utid`.
    pub fn decode(raw: &str) -> Result<Self, TokenKitError> {
        let bytes = URL_SAFE_NO_PAD.decode(raw).map_err(|e| {
            TokenKitError::MalformedClientInfo {
                reason: format!("invalid base64url: {e}"),
            }
        })?;
        let info: Self = serde_json::from_slice(&bytes).map_err(|e| {
            TokenKitError::MalformedClientInfo {
                reason: format!("invalid JSON payload: {e}"),
            }
        })?;
        if info.uid.is_empty() || info.utid.is_empty() {
            return Err(TokenKitError::MalformedClientInfo {
                reason: "uid or utid is empty".to_string(),
            });
        }
        Ok(info)
    }

    /// Encodes the pair back into the wire form accepted by [`Self::decode`].
    ///
    /// # Errors
    ///
    /// Returns [`TokenKitError::SerializationError`] if JSON serialization fails.
    pub fn encode(&self) -> Result<String, TokenKitError> {
        let bytes =
            serde_json::to_vec(self).map_err(|e| TokenKitError::SerializationError {
                error: format!("failed to serialize client info: {e}"),
            })?;
        Ok(URL_SAFE_NO_PAD.encode(bytes))
    }

    /// Builds the home account id composite: `uid`, client-info separator, `utid`.
    #[must_use]
    pub fn to_home_account_id(&self) -> String {
        format!("{}{CLIENT_INFO_SEPARATOR}{}", self.uid, self.utid)
    }
}
