//! The owning generator handle and its state machine.
//!
//! A [`Generator`] owns a suspended computation, its *frame*. The frame is a
//! pinned, boxed future built from the producer body; it is polled once per
//! [`advance`](Generator::advance) with a waker that does nothing, so the body
//! runs exactly to its next yield, its end or its failure. There is no
//! executor behind it: the consumer's own control flow drives everything.
//!
//! ```rust
//! use lazy_gen::{Generator, Step};
//!
//! let mut evens = Generator::new(|co| async move {
//!     for i in 0..3 {
//!         co.yield_(i * 2).await;
//!     }
//!     "done"
//! });
//!
//! assert_eq!(evens.advance().unwrap(), Step::Yielded(&0));
//! assert_eq!(evens.current(), Ok(&0));
//! assert_eq!(evens.advance().unwrap(), Step::Yielded(&2));
//! assert_eq!(evens.advance().unwrap(), Step::Yielded(&4));
//! assert_eq!(evens.advance().unwrap(), Step::Complete(&"done"));
//! assert_eq!(evens.into_return(), Some("done"));
//! ```

use std::{
    convert::Infallible,
    fmt,
    future::Future,
    pin::Pin,
    rc::Rc,
    sync::Arc,
    task::{Context, Poll, Wake, Waker},
};

use tracing::{debug, trace};

use crate::{
    co::{Co, Slot},
    cursor::Cursor,
    error::{GeneratorError, GeneratorResult, MisuseError},
    options::{GeneratorOptions, TerminalPolicy},
    producer::Producer,
    state::State,
    step::Step,
};

type Frame<'a, R, E> = Pin<Box<dyn Future<Output = Result<R, E>> + 'a>>;

struct NoopWake;

impl Wake for NoopWake {
    fn wake(self: Arc<Self>) {}
}

/// A lazy, single-owner sequence of `T` values ending in an `R` or failing
/// with an `E`.
///
/// Values are produced only when [`advance`](Self::advance) is called and each
/// one exactly once. The most recent value stays readable through
/// [`current`](Self::current) until the next `advance`.
///
/// A generator is neither `Clone` nor `Send`: the frame has exactly one owner
/// and is driven from one thread.
pub struct Generator<'a, T, R = (), E = Infallible> {
    frame: Option<Frame<'a, R, E>>,
    slot: Rc<Slot<T>>,
    current: Option<T>,
    ret: Option<R>,
    state: State,
    options: GeneratorOptions,
    waker: Waker,
}

impl<'a, T: 'a, R: 'a> Generator<'a, T, R, Infallible> {
    /// Build a generator from an infallible producer body.
    ///
    /// `body` receives the generator's [`Co`] handle and is not called, nor is
    /// any of its future polled, before the first `advance()`.
    pub fn new<F, Fut>(body: F) -> Self
    where
        F: FnOnce(Co<T>) -> Fut + 'a,
        Fut: Future<Output = R> + 'a,
    {
        Self::with_options(GeneratorOptions::default(), body)
    }

    /// Like [`new`](Self::new), with explicit [`GeneratorOptions`].
    pub fn with_options<F, Fut>(options: GeneratorOptions, body: F) -> Self
    where
        F: FnOnce(Co<T>) -> Fut + 'a,
        Fut: Future<Output = R> + 'a,
    {
        Self::fallible_with_options(options, move |co| async move {
            Ok::<R, Infallible>(body(co).await)
        })
    }
}

impl<'a, T: 'a, R: 'a, E: 'a> Generator<'a, T, R, E> {
    /// Build a generator from a body that can fail.
    ///
    /// An `Err` returned by the body is handed to the caller of the `advance()`
    /// that reached it, after which the generator is [`State::Faulted`].
    pub fn fallible<F, Fut>(body: F) -> Self
    where
        F: FnOnce(Co<T>) -> Fut + 'a,
        Fut: Future<Output = Result<R, E>> + 'a,
    {
        Self::fallible_with_options(GeneratorOptions::default(), body)
    }

    /// Like [`fallible`](Self::fallible), with explicit [`GeneratorOptions`].
    pub fn fallible_with_options<F, Fut>(options: GeneratorOptions, body: F) -> Self
    where
        F: FnOnce(Co<T>) -> Fut + 'a,
        Fut: Future<Output = Result<R, E>> + 'a,
    {
        let slot = Slot::new();
        let co = Co::new(Rc::clone(&slot));
        let frame: Frame<'a, R, E> = Box::pin(async move { body(co).await });

        let generator = Self {
            frame: Some(frame),
            slot,
            current: None,
            ret: None,
            state: State::Created,
            options,
            waker: Waker::from(Arc::new(NoopWake)),
        };
        trace!(generator = %generator.label(), "frame created");
        generator
    }

    /// Drive a step-function [`Producer`] through the generator protocol.
    pub fn from_producer<P>(producer: P) -> Self
    where
        P: Producer<T, Return = R, Error = E> + 'a,
    {
        Self::fallible(move |co| async move {
            let mut producer = producer;
            loop {
                match producer.step() {
                    Ok(Step::Yielded(value)) => co.yield_(value).await,
                    Ok(Step::Complete(ret)) => return Ok(ret),
                    Err(e) => return Err(e),
                }
            }
        })
    }
}

impl<'a, T, R, E> Generator<'a, T, R, E> {
    /// Resume the body until it yields, returns or fails.
    ///
    /// - `Ok(Step::Yielded(&value))`: a new value is cached and readable via
    ///   [`current`](Self::current).
    /// - `Ok(Step::Complete(&ret))`: the body finished; the frame is released.
    /// - `Err(GeneratorError::Producer(e))`: the body failed during this very
    ///   resumption; the frame is released and no value will ever follow.
    ///
    /// Resuming after the end has been observed is misuse and is reported
    /// according to the generator's [`TerminalPolicy`].
    pub fn advance(&mut self) -> GeneratorResult<Step<&T, &R>, E> {
        match self.state {
            State::Created | State::Suspended => {}
            State::Running => {
                // only reachable when a panic unwound out of the last poll,
                // which already dropped the frame
                self.transition(State::Poisoned);
                return Err(MisuseError::Poisoned.into());
            }
            State::Poisoned => return Err(MisuseError::Poisoned.into()),
            terminal => return self.advance_terminated(terminal),
        }

        let Some(mut frame) = self.frame.take() else {
            return Err(MisuseError::Terminated(self.state).into());
        };
        self.current = None;
        self.transition(State::Running);

        let mut cx = Context::from_waker(&self.waker);
        let polled = frame.as_mut().poll(&mut cx);
        match polled {
            Poll::Pending => match self.slot.take() {
                Ok(Some(value)) => {
                    self.frame = Some(frame);
                    self.transition(State::Suspended);
                    let value: &T = self.current.insert(value);
                    Ok(Step::Yielded(value))
                }
                Ok(None) => {
                    self.retire(frame, State::Faulted);
                    debug!(generator = %self.label(), "producer awaited a foreign future");
                    Err(MisuseError::ForeignAwait.into())
                }
                Err(misuse) => self.fault(frame, misuse),
            },
            Poll::Ready(outcome) => {
                // a finished body must not leave a value behind
                match self.slot.take() {
                    Ok(None) => {}
                    Ok(Some(_)) => return self.fault(frame, MisuseError::UnclaimedYield),
                    Err(misuse) => return self.fault(frame, misuse),
                }
                match outcome {
                    Ok(ret) => {
                        self.retire(frame, State::Completed);
                        let ret: &R = self.ret.insert(ret);
                        Ok(Step::Complete(ret))
                    }
                    Err(e) => {
                        self.retire(frame, State::Faulted);
                        debug!(generator = %self.label(), "producer failed");
                        Err(GeneratorError::Producer(e))
                    }
                }
            }
        }
    }

    /// The value produced by the last successful `advance()`.
    ///
    /// Reading it does not resume the body. Only available while
    /// [`State::Suspended`].
    pub fn current(&self) -> Result<&T, MisuseError> {
        match (&self.current, self.state) {
            (Some(value), State::Suspended) => Ok(value),
            _ => Err(MisuseError::NoValue(self.state)),
        }
    }

    /// Release the frame without running any more of the body.
    ///
    /// Valid in every state. Locals of a suspended body are dropped in place.
    /// Calling it again, or on a generator that already ended, does nothing.
    pub fn dispose(&mut self) {
        self.current = None;
        if self.state.is_terminal() {
            return;
        }
        self.release();
        if self.state != State::Disposed {
            self.transition(State::Disposed);
        }
    }

    /// Where the generator is in its lifecycle.
    pub fn state(&self) -> State {
        self.state
    }

    /// Returns `true` once no further value can be produced.
    pub fn is_done(&self) -> bool {
        self.state.is_terminal()
    }

    /// The body's return value, once it has completed.
    pub fn return_value(&self) -> Option<&R> {
        self.ret.as_ref()
    }

    /// Consume the generator, keeping only the body's return value.
    ///
    /// Returns `None` if the body has not completed.
    pub fn into_return(mut self) -> Option<R> {
        self.ret.take()
    }

    /// The options the generator was built with.
    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// The label used in log events, `"anonymous"` if none was set.
    pub fn label(&self) -> &str {
        self.options.label.as_deref().unwrap_or("anonymous")
    }

    /// A forward-only cursor over this generator.
    pub fn cursor(&mut self) -> Cursor<'_, 'a, T, R, E> {
        Cursor::new(self)
    }

    /// Iterate over clones of the remaining values.
    ///
    /// Same handle as [`cursor`](Self::cursor), named for use in iterator
    /// chains.
    ///
    /// ```rust
    /// use lazy_gen::range;
    ///
    /// let mut digits = range(0u8, 5);
    /// let odd: Vec<u8> = digits.iter().map(Result::unwrap).filter(|d| d % 2 == 1).collect();
    /// assert_eq!(odd, [1, 3]);
    /// ```
    pub fn iter(&mut self) -> Cursor<'_, 'a, T, R, E>
    where
        T: Clone,
    {
        Cursor::new(self)
    }

    fn advance_terminated(&mut self, state: State) -> GeneratorResult<Step<&T, &R>, E> {
        if let (TerminalPolicy::Exhausted, State::Completed) = (self.options.terminal, state) {
            if let Some(ret) = self.ret.as_ref() {
                return Ok(Step::Complete(ret));
            }
        }
        debug!(generator = %self.label(), %state, "advance after end of sequence");
        Err(MisuseError::Terminated(state).into())
    }

    fn fault<S>(&mut self, frame: Frame<'a, R, E>, misuse: MisuseError) -> GeneratorResult<S, E> {
        self.retire(frame, State::Faulted);
        debug!(generator = %self.label(), %misuse, "producer broke the yield protocol");
        Err(misuse.into())
    }

    fn release(&mut self) {
        if let Some(frame) = self.frame.take() {
            self.retire(frame, State::Disposed);
        }
    }

    fn retire(&mut self, frame: Frame<'a, R, E>, next: State) {
        drop(frame);
        trace!(generator = %self.label(), state = %self.state, "frame released");
        self.transition(next);
    }

    fn transition(&mut self, next: State) {
        trace!(generator = %self.label(), from = %self.state, to = %next, "state transition");
        self.state = next;
    }
}

impl<T, R, E> Drop for Generator<'_, T, R, E> {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl<T, R, E> fmt::Debug for Generator<'_, T, R, E>
where
    T: fmt::Debug,
    R: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("label", &self.label())
            .field("state", &self.state)
            .field("current", &self.current)
            .field("return", &self.ret)
            .finish_non_exhaustive()
    }
}

impl<'g, 'a, T, R, E> IntoIterator for &'g mut Generator<'a, T, R, E>
where
    T: Clone,
{
    type Item = GeneratorResult<T, E>;
    type IntoIter = Cursor<'g, 'a, T, R, E>;

    fn into_iter(self) -> Self::IntoIter {
        Cursor::new(self)
    }
}
