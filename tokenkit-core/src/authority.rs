//! Authority metadata consumed at the interface boundary.

/// Which construction path an authority selects for account entities.
///
/// The two paths are mutually exclusive variants of the same entity shape,
/// selected explicitly rather than through inheritance or runtime type
/// checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthorityKind {
    /// A standard work/school directory authority. Account identity is
    /// derived from the client-info blob.
    Standard,
    /// A federated-services authority. Account identity is taken directly
    /// from identity-token claims; client info is bypassed entirely.
    Federated,
}

/// Resolved authority metadata.
///
/// Produced by the authority-resolution collaborator and treated as
/// trusted input here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorityDescriptor {
    /// Canonical host name and port of the authority.
    pub host_name_and_port: String,
    /// Tenant the authority is scoped to.
    pub tenant: String,
    /// Construction path this authority selects.
    pub kind: AuthorityKind,
}

impl AuthorityDescriptor {
    /// Creates a descriptor for a standard directory authority.
    #[must_use]
    pub fn standard(host_name_and_port: &str, tenant: &str) -> Self {
        Self {
            host_name_and_port: host_name_and_port.to_owned(),
            tenant: tenant.to_owned(),
            kind: AuthorityKind::Standard,
        }
    }

    /// Creates a descriptor for a federated-services authority.
    #[must_use]
    pub fn federated(host_name_and_port: &str, tenant: &str) -> Self {
        Self {
            host_name_and_port: host_name_and_port.to_owned(),
            tenant: tenant.to_owned(),
            kind: AuthorityKind::Federated,
        }
    }
}
