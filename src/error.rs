//! Error types for driving generators.

use thiserror::Error;

use crate::state::State;

/// A broken usage contract. These are programming errors, not runtime
/// conditions a caller is expected to recover from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MisuseError {
    /// `current()` was called while no value was cached.
    #[error("no current value: generator is {0}")]
    NoValue(State),

    /// `advance()` was called after a terminal state had been observed.
    #[error("generator resumed after it was {0}")]
    Terminated(State),

    /// The body awaited a future that was not a yield.
    #[error("producer suspended on something other than a yield")]
    ForeignAwait,

    /// The body parked a yielded value and then moved on without suspending,
    /// so the value never reached the consumer.
    #[error("producer left a yielded value unclaimed")]
    UnclaimedYield,

    /// A previous resumption panicked and left the frame half-run.
    #[error("generator poisoned by a panic in its producer")]
    Poisoned,
}

/// Everything `advance()` can fail with.
#[derive(Debug, Error)]
pub enum GeneratorError<E> {
    /// The producer body raised `E` during this resumption.
    #[error("producer failed: {0}")]
    Producer(E),

    /// See [`MisuseError`].
    #[error(transparent)]
    Misuse(#[from] MisuseError),
}

impl<E> GeneratorError<E> {
    /// Returns the producer's error, if this is one.
    pub fn into_producer(self) -> Option<E> {
        match self {
            GeneratorError::Producer(e) => Some(e),
            GeneratorError::Misuse(_) => None,
        }
    }

    /// Returns `true` for a usage-contract violation.
    pub fn is_misuse(&self) -> bool {
        matches!(self, GeneratorError::Misuse(_))
    }
}

/// Result type for generator operations.
pub type GeneratorResult<T, E> = Result<T, GeneratorError<E>>;
