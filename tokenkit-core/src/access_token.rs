//! The cached access-token credential and its key derivation.

use serde::{Deserialize, Serialize};

use crate::credential::{require, Credential};
use crate::credential_type::CredentialType;
use crate::error::TokenKitError;
use crate::keys;

/// A cached access token.
///
/// Extends the base credential shape with realm, target (the normalized
/// scope string), lifetime timestamps and optional proof-of-possession
/// metadata. Two records with identical values in the six key-bearing
/// fields derive the same key and therefore overwrite each other rather
/// than duplicating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenEntity {
    /// Fields shared with every credential record.
    #[serde(flatten)]
    pub credential: Credential,
    /// Tenant the token is scoped to; empty for multi-tenant applications.
    pub realm: String,
    /// Scope string the token was issued for. Must already be canonical
    /// (sorted, consistently delimited); it is joined into the key as
    /// given, never re-normalized here.
    pub target: String,
    /// Epoch seconds, as a string, at which the token was cached.
    pub cached_at: String,
    /// Epoch seconds, as a string, at which the token expires.
    pub expires_on: String,
    /// Epoch seconds after which the token should be proactively renewed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_on: Option<String>,
    /// Thumbprint of the proof-of-possession key the token is bound to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,
    /// Token type, e.g. `Bearer` or `pop`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

impl AccessTokenEntity {
    /// Builds an access-token record from its required inputs.
    ///
    /// `realm` may be empty (multi-tenant applications); every other input
    /// is required. The record is fully populated on return, so key
    /// derivation never observes an unset field.
    ///
    /// # Errors
    ///
    /// Returns [`TokenKitError::IncompleteCredentialData`] if any required
    /// field is empty.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        home_account_id: &str,
        environment: &str,
        client_id: &str,
        secret: &str,
        realm: &str,
        target: &str,
        cached_at: &str,
        expires_on: &str,
    ) -> Result<Self, TokenKitError> {
        let credential = Credential::new(
            home_account_id,
            environment,
            CredentialType::AccessToken,
            client_id,
            secret,
        )?;
        require("target", target)?;
        require("cached_at", cached_at)?;
        require("expires_on", expires_on)?;
        Ok(Self {
            credential,
            realm: realm.to_owned(),
            target: target.to_owned(),
            cached_at: cached_at.to_owned(),
            expires_on: expires_on.to_owned(),
            refresh_on: None,
            key_id: None,
            token_type: None,
        })
    }

    /// Sets the proactive-refresh timestamp.
    #[must_use]
    pub fn with_refresh_on(mut self, refresh_on: &str) -> Self {
        self.refresh_on = Some(refresh_on.to_owned());
        self
    }

    /// Sets the proof-of-possession key thumbprint.
    #[must_use]
    pub fn with_key_id(mut self, key_id: &str) -> Self {
        self.key_id = Some(key_id.to_owned());
        self
    }

    /// Sets the token type.
    #[must_use]
    pub fn with_token_type(mut self, token_type: &str) -> Self {
        self.token_type = Some(token_type.to_owned());
        self
    }

    /// Derives the cache key for this record.
    ///
    /// A pure function of the six key-bearing fields; deriving twice from
    /// the same record yields identical strings.
    #[must_use]
    pub fn cache_key(&self) -> String {
        keys::credential_cache_key(
            &self.credential.home_account_id,
            &self.credential.environment,
            self.credential.credential_type,
            &self.credential.client_id,
            &self.realm,
            &self.target,
        )
    }

    /// Checks whether the token is expired at `now` (epoch seconds).
    ///
    /// A record whose `expires_on` does not parse as epoch seconds is
    /// treated as expired.
    #[must_use]
    pub fn is_expired(&self, now: u64) -> bool {
        self.expires_on
            .parse::<u64>()
            .map_or(true, |expires_on| expires_on <= now)
    }

    /// Serializes the record to its shared-schema JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`TokenKitError::SerializationError`] if serialization fails.
    pub fn to_json(&self) -> Result<String, TokenKitError> {
        serde_json::to_string(self).map_err(|e| TokenKitError::SerializationError {
            error: format!("failed to serialize access token: {e}"),
        })
    }

    /// Deserializes a record from its shared-schema JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`TokenKitError::SerializationError`] if the JSON does not
    /// match the schema.
    pub fn from_json(raw: &str) -> Result<Self, TokenKitError> {
        serde_json::from_str(raw).map_err(|e| TokenKitError::SerializationError {
            error: format!("failed to deserialize access token: {e}"),
        })
    }
}
