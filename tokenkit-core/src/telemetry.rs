//! Per-request telemetry header formatting and the cache-hit counter reset.

use crate::store::CacheStore;

/// Delimiter between values inside a telemetry header.
pub const RESOURCE_DELIMITER: &str = "|";

/// Telemetry header schema version spoken by this implementation.
pub const SCHEMA_VERSION: u32 = 2;

/// Well-known store key under which the cache-hit counter lives.
pub const CACHE_HITS_KEY: &str = "cacheHits";

/// Formats the current-request telemetry header.
///
/// Joins the schema version, API id and force-refresh flag with the
/// resource delimiter; booleans format as `true`/`false`.
#[must_use]
pub fn current_request_header(schema_version: u32, api_id: u32, force_refresh: bool) -> String {
    format!(
        "{schema_version}{RESOURCE_DELIMITER}{api_id}{RESOURCE_DELIMITER}{force_refresh}"
    )
}

/// Returns the header describing the last failed request.
///
/// Failure history is not tracked; this always reports no prior failure.
#[must_use]
pub const fn last_failed_request_header() -> Option<String> {
    None
}

/// Resets the cache-hit counter in `store` and returns the new value.
///
/// Mutates shared cache state under [`CACHE_HITS_KEY`]. The telemetry
/// contract requires exactly one reset per network round-trip that follows
/// one or more cache hits; deciding when belongs to the request pipeline.
#[must_use = "the returned value replaces the caller's local counter"]
pub fn reset_cache_hits(store: &dyn CacheStore) -> u64 {
    store.set(CACHE_HITS_KEY, 0.to_string());
    0
}
