//! Canonical JSON and content hashing for run reports.
//!
//! Exactly one place produces canonical JSON bytes ([`canon`]) and exactly
//! one place hashes them ([`hash`]). Reproducibility checks compare the
//! digests these produce.

pub mod canon;
pub mod hash;

pub use canon::{canonical_json_bytes, CanonError};
pub use hash::{canonical_hash, ContentHash, DOMAIN_RUN_REPORT, DOMAIN_SEARCH_PLAN};
