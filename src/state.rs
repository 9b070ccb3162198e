use std::fmt;

/// Where a [`Generator`](crate::Generator)'s frame currently is in its life cycle.
///
/// ```text
/// Created ──advance──▶ Running ──yield──▶ Suspended ──advance──▶ Running ...
///                         │
///                         ├──return──▶ Completed
///                         └──error───▶ Faulted
/// ```
///
/// `Disposed` is reachable from every state through
/// [`dispose`](crate::Generator::dispose). `Poisoned` is only observed when a
/// panic unwound out of the body while it was `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// Frame built, body not started.
    Created,
    /// Body paused right after yielding; a value is cached.
    Suspended,
    /// Body is executing. Transient.
    Running,
    /// Body returned normally.
    Completed,
    /// Body failed; the failure has been handed to the caller.
    Faulted,
    /// Frame released by the owner before the body finished.
    Disposed,
    /// A panic escaped the body mid-resumption.
    Poisoned,
}

impl State {
    /// Returns `true` if the body can be resumed from this state.
    #[inline]
    pub const fn is_resumable(self) -> bool {
        matches!(self, State::Created | State::Suspended)
    }

    /// Returns `true` if no further value can ever be produced.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            State::Completed | State::Faulted | State::Disposed | State::Poisoned
        )
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            State::Created => "created",
            State::Suspended => "suspended",
            State::Running => "running",
            State::Completed => "completed",
            State::Faulted => "faulted",
            State::Disposed => "disposed",
            State::Poisoned => "poisoned",
        };
        f.write_str(name)
    }
}
