//! The yield handle passed into producer bodies.
//!
//! A body receives a [`Co<T>`] and hands values out with
//! `co.yield_(value).await`. Awaiting the returned [`Yield`] suspends the body
//! until the owning [`Generator`](crate::Generator) is advanced again.

use std::{
    cell::Cell,
    future::Future,
    pin::Pin,
    rc::Rc,
    task::{Context, Poll},
};

use crate::error::MisuseError;

/// Single-slot mailbox shared between a body's [`Co`] and its generator.
///
/// Holds at most one unclaimed value. Parking a second one before the
/// generator collects the first is recorded and reported on the next `take`.
pub(crate) struct Slot<T> {
    value: Cell<Option<T>>,
    overwritten: Cell<bool>,
}

impl<T> Slot<T> {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self {
            value: Cell::new(None),
            overwritten: Cell::new(false),
        })
    }

    fn park(&self, value: T) {
        if self.value.replace(Some(value)).is_some() {
            self.overwritten.set(true);
        }
    }

    /// Collect the parked value, if any.
    pub(crate) fn take(&self) -> Result<Option<T>, MisuseError> {
        let value = self.value.take();
        if self.overwritten.replace(false) {
            return Err(MisuseError::UnclaimedYield);
        }
        Ok(value)
    }
}

/// Yield handle for a producer body.
///
/// There is exactly one `Co` per generator and it cannot be cloned, so only
/// the body that received it can yield into the generator.
pub struct Co<T> {
    slot: Rc<Slot<T>>,
}

impl<T> Co<T> {
    pub(crate) fn new(slot: Rc<Slot<T>>) -> Self {
        Self { slot }
    }

    /// Hand `value` to the consumer and suspend until the next `advance()`.
    ///
    /// Nothing happens until the returned future is awaited.
    pub fn yield_(&self, value: T) -> Yield<'_, T> {
        Yield {
            slot: &*self.slot,
            value: Some(value),
        }
    }
}

impl<T> std::fmt::Debug for Co<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Co").finish_non_exhaustive()
    }
}

/// Future returned by [`Co::yield_`].
///
/// The first poll parks the value in the slot and reports `Pending`; the
/// generator picks the value up. The next poll, made by the following
/// `advance()`, completes the await and lets the body continue.
#[must_use = "a yield does nothing unless awaited"]
pub struct Yield<'co, T> {
    slot: &'co Slot<T>,
    value: Option<T>,
}

// `value` is never pinned.
impl<T> Unpin for Yield<'_, T> {}

impl<T> Future for Yield<'_, T> {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<()> {
        match self.value.take() {
            Some(value) => {
                self.slot.park(value);
                Poll::Pending
            }
            None => Poll::Ready(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::task::{Wake, Waker};

    struct Noop;

    impl Wake for Noop {
        fn wake(self: Arc<Self>) {}
    }

    #[test]
    fn test_yield_parks_value_then_completes() {
        let slot = Slot::<u8>::new();
        let co = Co::new(Rc::clone(&slot));
        let waker = Waker::from(Arc::new(Noop));
        let mut cx = Context::from_waker(&waker);

        let mut fut = co.yield_(9);
        assert_eq!(Pin::new(&mut fut).poll(&mut cx), Poll::Pending);
        assert_eq!(slot.take(), Ok(Some(9)));
        assert_eq!(Pin::new(&mut fut).poll(&mut cx), Poll::Ready(()));
        assert_eq!(slot.take(), Ok(None));
    }

    #[test]
    fn test_unawaited_yield_leaves_slot_empty() {
        let slot = Slot::<u8>::new();
        let co = Co::new(Rc::clone(&slot));
        drop(co.yield_(1));
        assert_eq!(slot.take(), Ok(None));
    }

    #[test]
    fn test_second_park_before_take_is_reported() {
        let slot = Slot::<u8>::new();
        let co = Co::new(Rc::clone(&slot));
        let waker = Waker::from(Arc::new(Noop));
        let mut cx = Context::from_waker(&waker);

        let (mut first, mut second) = (co.yield_(1), co.yield_(2));
        assert_eq!(Pin::new(&mut first).poll(&mut cx), Poll::Pending);
        assert_eq!(Pin::new(&mut second).poll(&mut cx), Poll::Pending);
        assert_eq!(slot.take(), Err(MisuseError::UnclaimedYield));
        assert_eq!(slot.take(), Ok(None));
    }
}
