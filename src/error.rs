//! Domain-specific errors for the storage bookkeeping system.
//!
//! Contains error variants for the two failure cases:
//! - Rejected arguments (negative amounts, invalid capacity configuration)
//! - Capacity exhaustion when a deposit would need a new container
//!
//! These errors represent business logic failures; no operation that returns
//! one leaves the storage partially mutated.

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A capacity or amount argument was outside its allowed range.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// No capacity slot remains for a new container.
    #[error("storage is full, a new container can't be added")]
    CapacityExceeded,
}
