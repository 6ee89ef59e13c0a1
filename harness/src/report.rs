//! Run reports: a canonical JSON record of one search run, with its digest.
//!
//! Metrics are carried as strings, so two runs with the same world,
//! strategy and seed produce byte-identical reports. Reports stay in
//! memory; callers that ship them elsewhere check them on arrival with
//! [`verify_report`].
//!
//! # Fail-closed semantics
//!
//! - Bytes that are not JSON → error
//! - JSON that is not in canonical form → error
//! - Stored digest differs from the recomputed one → error

use aima_kernel::digest::{
    canonical_hash, canonical_json_bytes, ContentHash, DOMAIN_RUN_REPORT, DOMAIN_SEARCH_PLAN,
};
use aima_kernel::Metrics;
use aima_search::SearchOutcome;
use serde_json::{json, Value};

use crate::contract::ReportError;

const SCHEMA_VERSION: &str = "run_report.v1";

/// Everything needed to reproduce and compare one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub world_id: String,
    pub strategy: String,
    /// Strategy configuration echo.
    pub config: Value,
    pub initial_state: Value,
    pub outcome: Value,
    pub metrics: Value,
    /// Digest of the plan alone; `None` unless the outcome is a solution.
    pub plan_digest: Option<ContentHash>,
}

impl RunReport {
    /// Assemble a report from a finished run.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Canon`] if the plan cannot be canonicalized.
    pub fn new<A: std::fmt::Debug>(
        world_id: &str,
        strategy: &str,
        config: Value,
        initial_state: Value,
        outcome: &SearchOutcome<A>,
        metrics: &Metrics,
    ) -> Result<Self, ReportError> {
        let plan_digest = outcome.actions().map(plan_digest).transpose()?;
        Ok(Self {
            world_id: world_id.to_string(),
            strategy: strategy.to_string(),
            config,
            initial_state,
            outcome: outcome.to_json(),
            metrics: metrics.to_json(),
            plan_digest,
        })
    }

    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "config": self.config,
            "initial_state": self.initial_state,
            "metrics": self.metrics,
            "outcome": self.outcome,
            "plan_digest": self.plan_digest.as_ref().map(ContentHash::as_str),
            "schema_version": SCHEMA_VERSION,
            "strategy": self.strategy,
            "world_id": self.world_id,
        })
    }

    /// # Errors
    ///
    /// Returns [`ReportError::Canon`] if a world rendered a state with
    /// floats.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, ReportError> {
        Ok(canonical_json_bytes(&self.to_json())?)
    }

    /// Domain-separated hash of [`Self::canonical_bytes`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::canonical_bytes`].
    pub fn digest(&self) -> Result<ContentHash, ReportError> {
        Ok(canonical_hash(DOMAIN_RUN_REPORT, &self.canonical_bytes()?))
    }
}

/// Digest of a plan, rendered as the JSON array of each action's `Debug`
/// form.
///
/// # Errors
///
/// Returns [`ReportError::Canon`] if canonicalization fails.
pub fn plan_digest<A: std::fmt::Debug>(actions: &[A]) -> Result<ContentHash, ReportError> {
    let rendered: Vec<String> = actions.iter().map(|a| format!("{a:?}")).collect();
    let bytes = canonical_json_bytes(&json!(rendered))?;
    Ok(canonical_hash(DOMAIN_SEARCH_PLAN, &bytes))
}

/// Check report bytes received from elsewhere against their digest.
///
/// `bytes` must be canonical JSON and `stored` must equal the digest
/// recomputed from them. Returns the digest.
///
/// # Errors
///
/// Returns [`ReportError`] describing the first problem found.
pub fn verify_report(bytes: &[u8], stored: &str) -> Result<ContentHash, ReportError> {
    let value: Value = serde_json::from_slice(bytes).map_err(|e| ReportError::Parse {
        detail: e.to_string(),
    })?;
    if canonical_json_bytes(&value)? != bytes {
        return Err(ReportError::NotCanonical);
    }

    let recomputed = canonical_hash(DOMAIN_RUN_REPORT, bytes);
    if stored.trim() != recomputed.as_str() {
        return Err(ReportError::DigestMismatch {
            stored: stored.trim().to_string(),
            recomputed: recomputed.as_str().to_string(),
        });
    }
    Ok(recomputed)
}
