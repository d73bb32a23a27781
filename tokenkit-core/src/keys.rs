//! Deterministic cache-key derivation.
//!
//! Cache keys are a cross-SDK contract: every implementation of the shared
//! cache schema must produce byte-identical keys for the same logical
//! entity, on every platform. The functions here are pure string joins
//! over fully-populated entity fields:
//!
//! - Account key: `homeAccountId-environment-realm`
//! - Credential key: `homeAccountId-environment-credentialType-clientId-realm-target`
//!
//! Both joins are lower-cased so that authorities varying letter case in
//! host names still address the same record. The separator characters must
//! never change; doing so silently breaks interoperability with every
//! other SDK reading the same store.

use crate::credential_type::CredentialType;

/// Separator between the segments of a cache key.
pub const CACHE_KEY_SEPARATOR: &str = "-";

/// Separator between `uid` and `utid` inside a home account id.
pub const CLIENT_INFO_SEPARATOR: &str = ".";

/// Derives the cache key for an account entity.
///
/// Schema: `<home_account_id>-<environment>-<realm>`, lower-cased.
#[must_use]
pub fn account_cache_key(home_account_id: &str, environment: &str, realm: &str) -> String {
    [home_account_id, environment, realm]
        .join(CACHE_KEY_SEPARATOR)
        .to_lowercase()
}

/// Derives the cache key for a credential entity.
///
/// Schema: `<home_account_id>-<environment>-<credential_type>-<client_id>-<realm>-<target>`,
/// lower-cased. `realm` and `target` may legitimately be empty (multi-tenant
/// applications, refresh tokens); their segment is still present so the key
/// always has six positions.
#[must_use]
pub fn credential_cache_key(
    home_account_id: &str,
    environment: &str,
    credential_type: CredentialType,
    client_id: &str,
    realm: &str,
    target: &str,
) -> String {
    let credential_type = credential_type.to_string();
    [
        home_account_id,
        environment,
        credential_type.as_str(),
        client_id,
        realm,
        target,
    ]
    .join(CACHE_KEY_SEPARATOR)
    .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_key_schema() {
        let key = account_cache_key("uid.utid", "login.contoso.com", "tenant-a");
        assert_eq!(key, "uid.utid-login.contoso.com-tenant-a");
    }

    #[test]
    fn test_account_key_is_deterministic_and_case_folded() {
        let a = account_cache_key("uid.utid", "LOGIN.Contoso.COM", "Tenant");
        let b = account_cache_key("uid.utid", "login.contoso.com", "tenant");
        assert_eq!(a, b);
        assert_eq!(a, account_cache_key("uid.utid", "LOGIN.Contoso.COM", "Tenant"));
    }

    #[test]
    fn test_credential_key_schema() {
        let key = credential_cache_key(
            "uid.utid",
            "login.contoso.com",
            CredentialType::AccessToken,
            "Client-1",
            "tenant",
            "user.read openid",
        );
        assert_eq!(
            key,
            "uid.utid-login.contoso.com-accesstoken-client-1-tenant-user.read openid"
        );
    }

    #[test]
    fn test_credential_key_keeps_empty_segments() {
        let key = credential_cache_key(
            "uid.utid",
            "login.contoso.com",
            CredentialType::RefreshToken,
            "client-1",
            "",
            "",
        );
        assert_eq!(key, "uid.utid-login.contoso.com-refreshtoken-client-1--");
    }

    #[test]
    fn test_credential_key_collision_freedom_per_field() {
        let base = || {
            credential_cache_key(
                "uid.utid",
                "login.contoso.com",
                CredentialType::AccessToken,
                "client-1",
                "tenant",
                "user.read",
            )
        };
        let mutations = [
            credential_cache_key(
                "uid2.utid",
                "login.contoso.com",
                CredentialType::AccessToken,
                "client-1",
                "tenant",
                "user.read",
            ),
            credential_cache_key(
                "uid.utid",
                "login.fabrikam.com",
                CredentialType::AccessToken,
                "client-1",
                "tenant",
                "user.read",
            ),
            credential_cache_key(
                "uid.utid",
                "login.contoso.com",
                CredentialType::IdToken,
                "client-1",
                "tenant",
                "user.read",
            ),
            credential_cache_key(
                "uid.utid",
                "login.contoso.com",
                CredentialType::AccessToken,
                "client-2",
                "tenant",
                "user.read",
            ),
            credential_cache_key(
                "uid.utid",
                "login.contoso.com",
                CredentialType::AccessToken,
                "client-1",
                "tenant-b",
                "user.read",
            ),
            credential_cache_key(
                "uid.utid",
                "login.contoso.com",
                CredentialType::AccessToken,
                "client-1",
                "tenant",
                "user.write",
            ),
        ];
        for mutated in mutations {
            assert_ne!(base(), mutated);
        }
    }
}
