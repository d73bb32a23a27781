use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A `CredentialType` distinguishes the kinds of credential record stored
/// under the shared cache schema.
///
/// The serialized values are schema literals common to all SDKs; the key
/// derivation in [`crate::keys`] lower-cases them, so `AccessToken`
/// appears as `accesstoken` inside a cache key.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumString,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
pub enum CredentialType {
    /// An identity token carrying the user's claims.
    IdToken,
    /// An access token scoped to a realm and a target.
    AccessToken,
    /// A refresh token used to renew access tokens.
    RefreshToken,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_type_serialization() {
        let serialized = serde_json::to_string(&CredentialType::AccessToken).unwrap();
        assert_eq!(serialized, "\"AccessToken\"");

        let serialized = serde_json::to_string(&CredentialType::RefreshToken).unwrap();
        assert_eq!(serialized, "\"RefreshToken\"");
    }

    #[test]
    fn test_credential_type_deserialization() {
        let deserialized: CredentialType = serde_json::from_str("\"IdToken\"").unwrap();
        assert_eq!(deserialized, CredentialType::IdToken);

        // Test invalid credential type
        let result: Result<CredentialType, _> = serde_json::from_str("\"Bearer\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_credential_type_display_matches_schema() {
        assert_eq!(CredentialType::IdToken.to_string(), "IdToken");
        assert_eq!(CredentialType::AccessToken.to_string(), "AccessToken");
        assert_eq!(CredentialType::RefreshToken.to_string(), "RefreshToken");
    }
}
