//! Per-user admission control
//!
//! Each user owns a gatekeeper bounding the number of operations in flight
//! for that user. The bound is a non-blocking token bucket of fixed
//! capacity with no queue: when the bucket is empty an arriving request is
//! refused immediately rather than parked, so callers observe a fast
//! `too_many_requests` instead of a latency spike. This must not be relaxed
//! to a blocking semaphore.
//!
//! Admission and release are atomic. The permit is held for the whole life
//! of the admitted operation and released on drop, so the slot frees even
//! when the operation errors or panics.

use std::future::Future;
use thiserror::Error;
use tokio::sync::{Semaphore, SemaphorePermit, TryAcquireError};

/// Default per-user bound on concurrently in-flight operations.
pub const DEFAULT_MAX_IN_FLIGHT: usize = 10;

/// The gatekeeper was at capacity; the operation was not started.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("admission refused")]
pub struct AdmissionRefused;

/// Proof of admission for one in-flight operation.
///
/// Dropping the permit releases the slot, including during unwinding.
#[derive(Debug)]
pub struct AdmissionPermit<'a> {
    _permit: SemaphorePermit<'a>,
}

/// Admission controller for a single user.
#[derive(Debug)]
pub struct Gatekeeper {
    permits: Semaphore,
    capacity: usize,
}

impl Gatekeeper {
    pub fn new(capacity: usize) -> Self {
        Self {
            permits: Semaphore::new(capacity),
            capacity,
        }
    }

    /// The indivisible admission decision.
    ///
    /// Two simultaneous calls with one slot left cannot both succeed, and a
    /// full gatekeeper refuses without blocking.
    pub fn try_admit(&self) -> Result<AdmissionPermit<'_>, AdmissionRefused> {
        match self.permits.try_acquire() {
            Ok(permit) => Ok(AdmissionPermit { _permit: permit }),
            // The semaphore is never closed
            Err(TryAcquireError::NoPermits | TryAcquireError::Closed) => Err(AdmissionRefused),
        }
    }

    /// Admit `op`, run it concurrently with other admitted operations, and
    /// release the slot when it completes. A refused `op` is never started.
    pub async fn run<F>(&self, op: F) -> Result<F::Output, AdmissionRefused>
    where
        F: Future,
    {
        let _permit = self.try_admit()?;
        Ok(op.await)
    }

    /// Operations currently admitted and not yet completed.
    pub fn in_flight(&self) -> usize {
        self.capacity - self.permits.available_permits()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
