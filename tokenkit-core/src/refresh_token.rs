//! The cached refresh-token credential.

use serde::{Deserialize, Serialize};

use crate::credential::Credential;
use crate::credential_type::CredentialType;
use crate::error::TokenKitError;
use crate::keys;

/// A cached refresh token.
///
/// Refresh tokens are not realm- or target-scoped; both segments are
/// empty in their key. A family refresh token (shared across a family of
/// applications) is keyed by its `family_id` in place of the client id,
/// so every family member addresses the same record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenEntity {
    /// Fields shared with every credential record.
    #[serde(flatten)]
    pub credential: Credential,
    /// Family the token belongs to, when issued as a family refresh token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_id: Option<String>,
}

impl RefreshTokenEntity {
    /// Builds a refresh-token record from its required inputs.
    ///
    /// # Errors
    ///
    /// Returns [`TokenKitError::IncompleteCredentialData`] if any required
    /// field is empty.
    pub fn new(
        home_account_id: &str,
        environment: &str,
        client_id: &str,
        secret: &str,
        family_id: Option<&str>,
    ) -> Result<Self, TokenKitError> {
        let credential = Credential::new(
            home_account_id,
            environment,
            CredentialType::RefreshToken,
            client_id,
            secret,
        )?;
        Ok(Self {
            credential,
            family_id: family_id.filter(|f| !f.is_empty()).map(str::to_owned),
        })
    }

    /// Derives the cache key for this record.
    #[must_use]
    pub fn cache_key(&self) -> String {
        let client_segment = self
            .family_id
            .as_deref()
            .unwrap_or(&self.credential.client_id);
        keys::credential_cache_key(
            &self.credential.home_account_id,
            &self.credential.environment,
            self.credential.credential_type,
            client_segment,
            "",
            "",
        )
    }
}
