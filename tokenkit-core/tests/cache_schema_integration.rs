//! End-to-end checks of the shared cache schema: raw protocol artifacts in,
//! canonical entities and keys out.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use tokenkit_core::telemetry;
use tokenkit_core::{
    AccessTokenEntity, AccountEntity, AuthorityDescriptor, CacheStore, ClientInfo,
    IdTokenClaims, IdTokenEntity, InMemoryCacheStore, RefreshTokenEntity,
};

fn client_info_blob(uid: &str, utid: &str) -> String {
    URL_SAFE_NO_PAD.encode(format!(r#"{{"uid":"{uid}","utid":"{utid}"}}"#))
}

#[test]
fn token_response_produces_parallel_account_and_credential_records() {
    let blob = client_info_blob("abc", "def");
    let authority = AuthorityDescriptor::standard("Login.Contoso.COM", "tenant");
    let claims = IdTokenClaims {
        oid: Some("oid-1".to_owned()),
        preferred_username: Some("user@contoso.com".to_owned()),
        ..IdTokenClaims::default()
    };

    let account =
        AccountEntity::build(Some(&blob), &authority, Some(&claims), None).unwrap();
    let home_account_id = account.home_account_id.clone();

    let access_token = AccessTokenEntity::new(
        &home_account_id,
        &authority.host_name_and_port,
        "client-1",
        "at-secret",
        &authority.tenant,
        "openid profile user.read",
        "1700000000",
        "1700003600",
    )
    .unwrap();

    // Account and credential keys live in parallel spaces: same identity
    // triple, different schemas, no nesting.
    assert_eq!(account.cache_key(), "abc.def-login.contoso.com-tenant");
    assert_eq!(
        access_token.cache_key(),
        "abc.def-login.contoso.com-accesstoken-client-1-tenant-openid profile user.read"
    );
    // Both records land in the store under their derived keys and a second
    // response for the same identity overwrites rather than duplicates.
    let store = InMemoryCacheStore::new();
    store.set(&account.cache_key(), serde_json::to_string(&account).unwrap());
    store.set(&access_token.cache_key(), access_token.to_json().unwrap());

    let renewed = AccessTokenEntity::new(
        &home_account_id,
        "login.contoso.com",
        "CLIENT-1",
        "newer-secret",
        "tenant",
        "openid profile user.read",
        "1700004000",
        "1700007600",
    )
    .unwrap();
    assert_eq!(renewed.cache_key(), access_token.cache_key());
    store.set(&renewed.cache_key(), renewed.to_json().unwrap());

    let stored =
        AccessTokenEntity::from_json(&store.get(&renewed.cache_key()).unwrap()).unwrap();
    assert_eq!(stored.credential.secret, "newer-secret");
}

#[test]
fn home_account_id_is_stable_across_sessions() {
    let info = ClientInfo::decode(&client_info_blob("abc", "def")).unwrap();
    assert_eq!(info.to_home_account_id(), "abc.def");

    // Retained blob re-derives the same identity in a later session.
    let reencoded = info.encode().unwrap();
    let rederived = ClientInfo::decode(&reencoded).unwrap();
    assert_eq!(rederived.to_home_account_id(), "abc.def");
}

#[test]
fn credential_kinds_share_the_six_segment_schema() {
    let id_token = IdTokenEntity::new(
        "abc.def",
        "login.contoso.com",
        "client-1",
        "header.payload.sig",
        "tenant",
    )
    .unwrap();
    let refresh_token = RefreshTokenEntity::new(
        "abc.def",
        "login.contoso.com",
        "client-1",
        "rt-secret",
        None,
    )
    .unwrap();

    assert_eq!(
        id_token.cache_key(),
        "abc.def-login.contoso.com-idtoken-client-1-tenant-"
    );
    assert_eq!(
        refresh_token.cache_key(),
        "abc.def-login.contoso.com-refreshtoken-client-1--"
    );
    assert_ne!(id_token.cache_key(), refresh_token.cache_key());
}

#[test]
fn network_round_trip_resets_the_hit_counter() {
    let store = InMemoryCacheStore::new();

    // Simulate a run of cache hits counted by the request pipeline.
    store.set(telemetry::CACHE_HITS_KEY, "3".to_owned());
    let header = telemetry::current_request_header(telemetry::SCHEMA_VERSION, 861, false);
    assert_eq!(header, "2|861|false");

    assert_eq!(telemetry::reset_cache_hits(&store), 0);
    assert_eq!(store.get(telemetry::CACHE_HITS_KEY).as_deref(), Some("0"));
}
