//! Identity-token claims and the cached identity-token credential.

use serde::{Deserialize, Serialize};

use crate::credential::Credential;
use crate::credential_type::CredentialType;
use crate::error::TokenKitError;
use crate::keys;

/// Claims extracted from a decoded identity token.
///
/// Produced by the identity-token collaborator (JWT decoding is out of
/// scope here). Every claim is optional; which ones must be present
/// depends on the account construction path consuming them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdTokenClaims {
    /// Object id of the user within the directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oid: Option<String>,
    /// Session id, used as a fallback local account id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
    /// Subject claim; the account identity for federated authorities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// User principal name, used by federated authorities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upn: Option<String>,
    /// Preferred username for display and matching.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_username: Option<String>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Given name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    /// Family name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    /// Middle name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
}

/// A cached identity token.
///
/// Keyed like any credential; the `target` segment is always empty for
/// identity tokens, the realm still scopes the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdTokenEntity {
    /// Fields shared with every credential record.
    #[serde(flatten)]
    pub credential: Credential,
    /// Tenant the identity token was issued for.
    pub realm: String,
}

impl IdTokenEntity {
    /// Builds an identity-token record from its required inputs.
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
        realm: &str,
    ) -> Result<Self, TokenKitError> {
        let credential = Credential::new(
            home_account_id,
            environment,
            CredentialType::IdToken,
            client_id,
            secret,
        )?;
        Ok(Self {
            credential,
            realm: realm.to_owned(),
        })
    }

    /// Derives the cache key for this record.
    #[must_use]
    pub fn cache_key(&self) -> String {
        keys::credential_cache_key(
            &self.credential.home_account_id,
            &self.credential.environment,
            self.credential.credential_type,
            &self.credential.client_id,
            &self.realm,
            "",
        )
    }
}
