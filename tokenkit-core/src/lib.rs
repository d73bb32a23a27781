#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
//! Entity model and deterministic cache-key derivation for the unified,
//! cross-SDK token cache schema.
//!
//! Given raw protocol artifacts (identity-token claims, an encoded
//! client-info blob, an authority descriptor, credential metadata) this
//! crate constructs canonical cache entities and derives the opaque string
//! keys under which every SDK implementing the shared schema stores them.
//! All derivation is pure and synchronous; the only shared mutable state
//! is the [`CacheStore`] handle passed explicitly where needed.

mod access_token;
pub use access_token::*;

mod account;
pub use account::*;

mod authority;
pub use authority::*;

mod client_info;
pub use client_info::*;

mod credential;
pub use credential::*;

mod credential_type;
pub use credential_type::*;

mod error;
pub use error::*;

mod id_token;
pub use id_token::*;

pub mod keys;

mod refresh_token;
pub use refresh_token::*;

mod store;
pub use store::*;

pub mod telemetry;
