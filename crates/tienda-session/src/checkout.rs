//! # Checkout Submission Sequencing
//!
//! Drives the per-line order submission at checkout time.
//!
//! ## Submission Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Complete Sale clicked                                                  │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  session.submissions() ──► [line 1, line 2, ..., line N]                │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  submit_cart(): for each line, in cart order                            │
//! │        │                                                                │
//! │        ├── submitter.submit(line 1) ── Ok(sale id) ──► completed        │
//! │        ├── submitter.submit(line 2) ── Err(...) ─────► failed, STOP     │
//! │        └── line 3..N ────────────────────────────────► unattempted      │
//! │                                                                         │
//! │  Each line is an INDEPENDENT unit of work: there is no batching, no     │
//! │  transaction across the set, and no rollback of completed lines. The    │
//! │  outcome simply reports how far the sequence got.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Retrying a long-running or failed submission is the caller's decision;
//! this layer sequences, it does not retry.

use thiserror::Error;
use tracing::{info, warn};

use tienda_core::types::SaleSubmission;

// =============================================================================
// Submitter Seam
// =============================================================================

/// Error from the external order-submission collaborator.
#[derive(Debug, Clone, Error)]
pub enum SubmitError {
    /// The server rejected the sale (insufficient stock, unknown product...).
    #[error("Sale rejected: {0}")]
    Rejected(String),

    /// The collaborator could not be reached.
    #[error("Submission service unavailable: {0}")]
    Unavailable(String),
}

/// The seam to the external order-submission collaborator.
///
/// The surrounding application implements this over its HTTP client; tests
/// implement it in memory.
pub trait SaleSubmitter {
    /// Submits one sale line. Returns the recorded sale id.
    fn submit(&mut self, submission: &SaleSubmission) -> Result<String, SubmitError>;
}

// =============================================================================
// Checkout Outcome
// =============================================================================

/// One successfully recorded line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedSubmission {
    pub submission: SaleSubmission,
    pub sale_id: String,
}

/// The line that stopped the sequence.
#[derive(Debug, Clone)]
pub struct FailedSubmission {
    pub submission: SaleSubmission,
    pub error: SubmitError,
}

/// How far a checkout sequence got.
///
/// Completed lines are already recorded server-side even when a later line
/// fails; the caller decides what to tell the cashier about the remainder.
#[derive(Debug, Clone, Default)]
pub struct CheckoutOutcome {
    /// Lines recorded, in cart order.
    pub completed: Vec<CompletedSubmission>,
    /// The first failure, if any. Everything after it was not attempted.
    pub failed: Option<FailedSubmission>,
    /// Lines never attempted because an earlier one failed.
    pub unattempted: Vec<SaleSubmission>,
}

impl CheckoutOutcome {
    /// True when every line was recorded.
    pub fn is_success(&self) -> bool {
        self.failed.is_none()
    }
}

// =============================================================================
// Sequencing
// =============================================================================

/// Submits the cart's lines one at a time, in cart order, stopping at the
/// first failure.
pub fn submit_cart(
    submissions: Vec<SaleSubmission>,
    submitter: &mut dyn SaleSubmitter,
) -> CheckoutOutcome {
    let total = submissions.len();
    let mut outcome = CheckoutOutcome::default();
    let mut pending = submissions.into_iter();

    for submission in pending.by_ref() {
        match submitter.submit(&submission) {
            Ok(sale_id) => {
                info!(
                    product_id = %submission.product_id,
                    quantity = submission.quantity,
                    sale_id = %sale_id,
                    "checkout: line recorded"
                );
                outcome.completed.push(CompletedSubmission {
                    submission,
                    sale_id,
                });
            }
            Err(error) => {
                warn!(
                    product_id = %submission.product_id,
                    completed = outcome.completed.len(),
                    total,
                    %error,
                    "checkout: line failed, stopping sequence"
                );
                outcome.failed = Some(FailedSubmission { submission, error });
                break;
            }
        }
    }

    outcome.unattempted = pending.collect();
    outcome
}

// =============================================================================
// Unit Tests
// =============================================================================
