/// Outcome of resuming a producer once: either it handed out another value or
/// it finished with its return value.
///
/// `Step` is what [`Generator::advance`](crate::Generator::advance) reports and
/// what a [`Producer`](crate::Producer) returns from each `step`.
///
/// ```rust
/// use lazy_gen::Step;
///
/// let yielded: Step<i32, &str> = Step::Yielded(7);
/// assert_eq!(yielded.map_yielded(|v| v * 2), Step::Yielded(14));
///
/// let done: Step<i32, &str> = Step::Complete("done");
/// assert!(done.is_complete());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step<Y, R> {
    /// The producer yielded a value and is suspended after it.
    Yielded(Y),
    /// The producer ran to the end of its body.
    Complete(R),
}

impl<Y, R> Step<Y, R> {
    /// Returns `true` if the step is `Yielded`.
    #[inline]
    pub const fn is_yielded(&self) -> bool {
        matches!(self, Step::Yielded(_))
    }

    /// Returns `true` if the step is `Complete`.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Step::Complete(_))
    }

    /// Converts into `Option<Y>`, discarding a return value.
    #[inline]
    pub fn yielded_value(self) -> Option<Y> {
        match self {
            Step::Yielded(y) => Some(y),
            Step::Complete(_) => None,
        }
    }

    /// Converts into `Option<R>`, discarding a yielded value.
    #[inline]
    pub fn complete_value(self) -> Option<R> {
        match self {
            Step::Yielded(_) => None,
            Step::Complete(r) => Some(r),
        }
    }

    /// Maps the yielded value, leaving `Complete` untouched.
    #[inline]
    pub fn map_yielded<Y2, F>(self, f: F) -> Step<Y2, R>
    where
        F: FnOnce(Y) -> Y2,
    {
        match self {
            Step::Yielded(y) => Step::Yielded(f(y)),
            Step::Complete(r) => Step::Complete(r),
        }
    }

    /// Maps the return value, leaving `Yielded` untouched.
    #[inline]
    pub fn map_complete<R2, F>(self, f: F) -> Step<Y, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Step::Yielded(y) => Step::Yielded(y),
            Step::Complete(r) => Step::Complete(f(r)),
        }
    }

    /// Converts from `&Step<Y, R>` to `Step<&Y, &R>`.
    #[inline]
    pub const fn as_ref(&self) -> Step<&Y, &R> {
        match self {
            Step::Yielded(y) => Step::Yielded(y),
            Step::Complete(r) => Step::Complete(r),
        }
    }

    /// Returns the yielded value.
    ///
    /// # Panics
    ///
    /// Panics if the step is `Complete`.
    #[inline]
    pub fn unwrap_yielded(self) -> Y {
        match self {
            Step::Yielded(y) => y,
            Step::Complete(_) => panic!("called `Step::unwrap_yielded()` on a `Complete` value"),
        }
    }

    /// Returns the return value.
    ///
    /// # Panics
    ///
    /// Panics if the step is `Yielded`.
    #[inline]
    pub fn unwrap_complete(self) -> R {
        match self {
            Step::Yielded(_) => panic!("called `Step::unwrap_complete()` on a `Yielded` value"),
            Step::Complete(r) => r,
        }
    }
}

impl<Y: Clone, R: Clone> Step<&Y, &R> {
    /// Clones the borrowed contents into an owned `Step`.
    ///
    /// Handy for holding on to what [`advance`](crate::Generator::advance)
    /// returned past the next mutable use of the generator.
    #[inline]
    pub fn cloned(self) -> Step<Y, R> {
        match self {
            Step::Yielded(y) => Step::Yielded(y.clone()),
            Step::Complete(r) => Step::Complete(r.clone()),
        }
    }
}
