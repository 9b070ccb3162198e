//! Step-function producers.
//!
//! A [`Producer`] is a hand-written state machine: every call to
//! [`step`](Producer::step) runs it to its next yield or to its end. Wrap one
//! with [`Generator::from_producer`](crate::Generator::from_producer) to get the
//! same laziness and failure capture as an `async` body.
//!
//! ```rust
//! use lazy_gen::{Generator, Step, from_fn};
//!
//! let mut n = 0;
//! let counter = from_fn(move || -> Result<_, ()> {
//!     n += 1;
//!     Ok(if n <= 3 { Step::Yielded(n) } else { Step::Complete(n) })
//! });
//! let mut counting = Generator::from_producer(counter);
//! assert_eq!(counting.advance().unwrap().cloned(), Step::Yielded(1));
//! ```

use std::convert::Infallible;

use either::Either;

use crate::step::Step;

/// A resumable computation driven one step at a time.
pub trait Producer<T> {
    /// Value the producer finishes with.
    type Return;
    /// Failure the producer can raise.
    type Error;

    /// Run until the next value or the end.
    fn step(&mut self) -> Result<Step<T, Self::Return>, Self::Error>;

    /// Erase the producer's type behind a `Box`.
    ///
    /// ```rust
    /// use lazy_gen::{Producer, Step, once};
    ///
    /// let mut erased = once(|| 3).boxed();
    /// assert_eq!(erased.step(), Ok(Step::Yielded(3)));
    /// ```
    fn boxed<'a>(self) -> Box<dyn Producer<T, Return = Self::Return, Error = Self::Error> + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

/// Producer built from a closure. See [`from_fn`].
pub struct FromFn<F>(F);

impl<T, R, E, F> Producer<T> for FromFn<F>
where
    F: FnMut() -> Result<Step<T, R>, E>,
{
    type Return = R;
    type Error = E;

    fn step(&mut self) -> Result<Step<T, R>, E> {
        (self.0)()
    }
}

/// Create a producer from a closure returning one [`Step`] per call.
pub fn from_fn<F>(f: F) -> FromFn<F> {
    FromFn(f)
}

/// Yields a single value, then completes. See [`once`].
pub struct Once<F>(Option<F>);

impl<T, F> Producer<T> for Once<F>
where
    F: FnOnce() -> T,
{
    type Return = ();
    type Error = Infallible;

    fn step(&mut self) -> Result<Step<T, ()>, Infallible> {
        Ok(match self.0.take() {
            Some(f) => Step::Yielded(f()),
            None => Step::Complete(()),
        })
    }
}

/// Create a producer that calls `f` on the first step and completes on the
/// second.
///
/// ```rust
/// use lazy_gen::{Generator, once};
///
/// let mut single = Generator::from_producer(once(|| "only"));
/// assert_eq!(*single.advance().unwrap().unwrap_yielded(), "only");
/// assert!(single.advance().unwrap().is_complete());
/// ```
pub fn once<F>(f: F) -> Once<F> {
    Once(Some(f))
}

/// Yields the result of `f` forever. See [`repeat`].
pub struct Repeat<F>(F);

impl<T, F> Producer<T> for Repeat<F>
where
    F: FnMut() -> T,
{
    type Return = Infallible;
    type Error = Infallible;

    fn step(&mut self) -> Result<Step<T, Infallible>, Infallible> {
        Ok(Step::Yielded((self.0)()))
    }
}

/// Create an infinite producer.
pub fn repeat<F>(f: F) -> Repeat<F> {
    Repeat(f)
}

impl<T, L, R> Producer<T> for Either<L, R>
where
    L: Producer<T>,
    R: Producer<T, Return = L::Return, Error = L::Error>,
{
    type Return = L::Return;
    type Error = L::Error;

    fn step(&mut self) -> Result<Step<T, Self::Return>, Self::Error> {
        match self {
            Either::Left(l) => l.step(),
            Either::Right(r) => r.step(),
        }
    }
}

impl<T, P> Producer<T> for Box<P>
where
    P: Producer<T> + ?Sized,
{
    type Return = P::Return;
    type Error = P::Error;

    fn step(&mut self) -> Result<Step<T, Self::Return>, Self::Error> {
        (**self).step()
    }
}

impl<T, P> Producer<T> for &'_ mut P
where
    P: Producer<T> + ?Sized,
{
    type Return = P::Return;
    type Error = P::Error;

    fn step(&mut self) -> Result<Step<T, Self::Return>, Self::Error> {
        (**self).step()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_once_yields_then_completes() {
        let mut p = once(|| 5);
        assert_eq!(p.step(), Ok(Step::Yielded(5)));
        assert_eq!(p.step(), Ok(Step::Complete(())));
        assert_eq!(p.step(), Ok(Step::Complete(())));
    }

    #[test]
    fn test_repeat_never_completes() {
        let mut n = 0;
        let mut p = repeat(move || {
            n += 2;
            n
        });
        for expected in [2, 4, 6, 8] {
            assert_eq!(p.step().map(Step::unwrap_yielded), Ok(expected));
        }
    }

    #[test]
    fn test_from_fn_surfaces_error() {
        let mut calls = 0;
        let mut p = from_fn(move || {
            calls += 1;
            if calls == 1 {
                Ok(Step::<i32, ()>::Yielded(calls))
            } else {
                Err("second step failed")
            }
        });
        assert_eq!(p.step(), Ok(Step::Yielded(1)));
        assert_eq!(p.step(), Err("second step failed"));
    }

    #[test]
    fn test_either_dispatches_to_selected_side() {
        fn pick(left: bool) -> Either<Once<fn() -> u8>, Once<fn() -> u8>> {
            if left {
                Either::Left(once((|| 1) as fn() -> u8))
            } else {
                Either::Right(once((|| 2) as fn() -> u8))
            }
        }

        assert_eq!(pick(true).step(), Ok(Step::Yielded(1)));
        assert_eq!(pick(false).step(), Ok(Step::Yielded(2)));
    }

    #[test]
    fn test_boxed_and_borrowed_producers_delegate() {
        let mut boxed = once(|| 'x').boxed();
        assert_eq!(boxed.step(), Ok(Step::Yielded('x')));

        fn first_step<P: Producer<char>>(mut p: P) -> Result<Step<char, P::Return>, P::Error> {
            p.step()
        }

        let mut inner = once(|| 'y');
        assert_eq!(first_step(&mut inner), Ok(Step::Yielded('y')));
        assert_eq!(inner.step(), Ok(Step::Complete(())));
    }
}
