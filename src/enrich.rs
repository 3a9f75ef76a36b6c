//! Optional enrichment seam: free-text elaboration of check findings.
//!
//! The engine never talks to a generative-text service itself; callers may
//! inject an [`Elaborator`] and the run loop offers each (check,
//! observation) pair to it. Failure is fire-and-forget: the check's fixed
//! issue/recommendation texts stand alone and no elaboration is attached.

use async_trait::async_trait;

use crate::error::EnrichmentError;
use crate::report::{Check, Observation};

/// Capability interface for external free-text elaboration of a check's
/// finding.
///
/// Implementations typically wrap a hosted language-model API; the engine
/// only depends on this one narrow contract.
#[async_trait]
pub trait Elaborator: Send + Sync {
    /// Produces an elaboration (issue/suggestion/benefit prose) for one
    /// check's observation.
    async fn elaborate(
        &self,
        check: Check,
        observation: &Observation,
    ) -> Result<String, EnrichmentError>;
}
