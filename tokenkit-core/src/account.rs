//! The account entity, its construction paths and key derivation.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::authority::{AuthorityDescriptor, AuthorityKind};
use crate::client_info::ClientInfo;
use crate::error::TokenKitError;
use crate::id_token::IdTokenClaims;
use crate::keys::{self, CACHE_KEY_SEPARATOR};

/// Authority type recorded on a cached account, per the shared schema.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, Serialize, Deserialize,
)]
pub enum AuthorityType {
    /// Account from a standard work/school directory.
    #[strum(serialize = "MSSTS")]
    #[serde(rename = "MSSTS")]
    Standard,
    /// Account from a federated-services authority.
    #[strum(serialize = "ADFS")]
    #[serde(rename = "ADFS")]
    Federated,
}

/// An account record in the shared cache schema.
///
/// Accounts are identity records, not credentials: they are addressed by
/// their own three-segment key, parallel to (not nesting) the credential
/// key space. Many credential records may reference the same
/// `homeAccountId`/`environment`/`realm` triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountEntity {
    /// Canonical cross-environment identifier for the signed-in identity.
    pub home_account_id: String,
    /// Host and port of the authority the account was established against.
    pub environment: String,
    /// Tenant the account record is scoped to.
    pub realm: String,
    /// Identifier of the account within its directory. Unset when no
    /// identity claims were available (e.g. client-credentials flows).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_account_id: Option<String>,
    /// Username for display and account matching. Unset when no identity
    /// claims were available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Which authority variant produced this account.
    pub authority_type: AuthorityType,
    /// Alternate identifier for the account, when the directory issues one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_account_id: Option<String>,
    /// Given name claim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    /// Family name claim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    /// Middle name claim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    /// Display name claim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Avatar URL, when the directory issues one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// The original encoded client-info blob, retained for re-derivation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_info: Option<String>,
    /// Epoch seconds of the last modification to this record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modification_time: Option<String>,
    /// Application that last modified this record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modification_app: Option<String>,
}

impl AccountEntity {
    /// Builds an account entity, dispatching on the authority kind.
    ///
    /// The returned value is fully populated; key derivation is a separate
    /// pure function of the result, never a constructor side effect.
    ///
    /// # Errors
    ///
    /// Returns [`TokenKitError::IncompleteAccountData`] when the inputs the
    /// selected path requires are absent or unusable.
    pub fn build(
        client_info: Option<&str>,
        authority: &AuthorityDescriptor,
        claims: Option<&IdTokenClaims>,
        policy: Option<&str>,
    ) -> Result<Self, TokenKitError> {
        match authority.kind {
            AuthorityKind::Standard => {
                Self::build_standard(client_info, authority, claims, policy)
            }
            AuthorityKind::Federated => Self::build_federated(authority, claims),
        }
    }

    /// Builds an account for a standard directory authority.
    ///
    /// The home account id is derived from the decoded client info
    /// (`uid.utid`), suffixed with the policy identifier when one is in
    /// use. Identity fields come from the token claims when a token is
    /// present; absent claims leave them unset, never defaulted to empty
    /// strings.
    ///
    /// # Errors
    ///
    /// Returns [`TokenKitError::IncompleteAccountData`] when `client_info`
    /// is absent, empty, or undecodable.
    pub fn build_standard(
        client_info: Option<&str>,
        authority: &AuthorityDescriptor,
        claims: Option<&IdTokenClaims>,
        policy: Option<&str>,
    ) -> Result<Self, TokenKitError> {
        let raw = client_info
            .filter(|raw| !raw.is_empty())
            .ok_or(TokenKitError::IncompleteAccountData {
                field: "client_info",
            })?;
        let decoded = ClientInfo::decode(raw).map_err(|e| {
            warn!("client info rejected during account build: {e}");
            TokenKitError::IncompleteAccountData {
                field: "client_info",
            }
        })?;

        let mut home_account_id = decoded.to_home_account_id();
        if let Some(policy) = policy.filter(|p| !p.is_empty()) {
            home_account_id.push_str(CACHE_KEY_SEPARATOR);
            home_account_id.push_str(policy);
        }
        debug!("building standard account for environment {}", authority.host_name_and_port);

        let local_account_id = claims.and_then(|c| {
            c.oid
                .clone()
                .filter(|oid| !oid.is_empty())
                .or_else(|| c.sid.clone())
        });

        Ok(Self {
            home_account_id,
            environment: authority.host_name_and_port.clone(),
            realm: authority.tenant.clone(),
            local_account_id,
            username: claims.and_then(|c| c.preferred_username.clone()),
            authority_type: AuthorityType::Standard,
            alternative_account_id: None,
            given_name: claims.and_then(|c| c.given_name.clone()),
            family_name: claims.and_then(|c| c.family_name.clone()),
            middle_name: claims.and_then(|c| c.middle_name.clone()),
            name: claims.and_then(|c| c.name.clone()),
            avatar_url: None,
            client_info: Some(raw.to_owned()),
            last_modification_time: None,
            last_modification_app: None,
        })
    }

    /// Builds an account for a federated-services authority.
    ///
    /// The account identity comes directly from the identity token: the
    /// `sub` claim becomes the home account id and `upn` supplies both the
    /// local account id and the username. Client info plays no part here.
    ///
    /// # Errors
    ///
    /// Returns [`TokenKitError::IncompleteAccountData`] when the identity
    /// token or its `sub` claim is missing.
    pub fn build_federated(
        authority: &AuthorityDescriptor,
        claims: Option<&IdTokenClaims>,
    ) -> Result<Self, TokenKitError> {
        let claims = claims.ok_or(TokenKitError::IncompleteAccountData {
            field: "id_token",
        })?;
        let sub = claims
            .sub
            .as_deref()
            .filter(|sub| !sub.is_empty())
            .ok_or(TokenKitError::IncompleteAccountData { field: "sub" })?;
        debug!("building federated account for environment {}", authority.host_name_and_port);

        Ok(Self {
            home_account_id: sub.to_owned(),
            environment: authority.host_name_and_port.clone(),
            realm: authority.tenant.clone(),
            local_account_id: claims.upn.clone(),
            username: claims.upn.clone(),
            authority_type: AuthorityType::Federated,
            alternative_account_id: None,
            given_name: None,
            family_name: None,
            middle_name: None,
            name: claims.name.clone(),
            avatar_url: None,
            client_info: None,
            last_modification_time: None,
            last_modification_app: None,
        })
    }

    /// Derives the cache key for this account.
    ///
    /// A pure function of `home_account_id`, `environment` and `realm`;
    /// re-deriving after a profile refresh yields the same key as long as
    /// those three fields are unchanged.
    #[must_use]
    pub fn cache_key(&self) -> String {
        keys::account_cache_key(&self.home_account_id, &self.environment, &self.realm)
    }
}
