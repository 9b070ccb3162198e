//! Functions for running a generator to its end.
//!
//! Both the synchronous and the asynchronous driver resume the generator
//! from the caller's own control flow; the async variant only lets the
//! consumer await between values.

use std::future::Future;

use crate::{
    error::{GeneratorResult, MisuseError},
    generator::Generator,
    step::Step,
};

/// Run `generator` to completion, handing each value to `consumer`.
///
/// Returns the body's return value, or the first failure.
///
/// Visiting starts with the next `advance()`. If `generator` is already
/// suspended, its current value was handed out before and is not repeated.
///
/// ```rust
/// use lazy_gen::{Generator, for_each};
///
/// let words = Generator::new(|co| async move {
///     co.yield_("lazy").await;
///     co.yield_("values").await;
///     2usize
/// });
/// let mut seen = Vec::new();
/// let count = for_each(words, |w| seen.push(*w)).unwrap();
/// assert_eq!((count, seen), (2, vec!["lazy", "values"]));
/// ```
pub fn for_each<T, R, E, F>(mut generator: Generator<'_, T, R, E>, mut consumer: F) -> GeneratorResult<R, E>
where
    F: FnMut(&T),
{
    loop {
        match generator.advance()? {
            Step::Yielded(value) => consumer(value),
            Step::Complete(_) => break,
        }
    }
    finish(generator)
}

/// Run `generator` to completion, discarding its values.
pub fn drain<T, R, E>(generator: Generator<'_, T, R, E>) -> GeneratorResult<R, E> {
    for_each(generator, |_| {})
}

/// Run `generator` to completion, keeping every value.
pub fn collect<T, R, E>(generator: Generator<'_, T, R, E>) -> GeneratorResult<(Vec<T>, R), E>
where
    T: Clone,
{
    let mut values = Vec::new();
    let ret = for_each(generator, |value| values.push(value.clone()))?;
    Ok((values, ret))
}

/// Async version of [`for_each`].
///
/// The consumer returns a future that is awaited before the generator is
/// resumed again.
pub async fn for_each_async<T, R, E, F, Fut>(
    mut generator: Generator<'_, T, R, E>,
    mut consumer: F,
) -> GeneratorResult<R, E>
where
    T: Clone,
    F: FnMut(T) -> Fut,
    Fut: Future<Output = ()>,
{
    loop {
        let value = match generator.advance()? {
            Step::Yielded(value) => value.clone(),
            Step::Complete(_) => break,
        };
        consumer(value).await;
    }
    finish(generator)
}

fn finish<T, R, E>(generator: Generator<'_, T, R, E>) -> GeneratorResult<R, E> {
    let state = generator.state();
    generator
        .into_return()
        .ok_or_else(|| MisuseError::Terminated(state).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GeneratorError, range};
    use std::cell::RefCell;
    use std::future::{Future, ready};
    use std::rc::Rc;
    use std::sync::Arc;
    use std::task::{Context, Poll, Wake, Waker};

    fn block_on<F: Future>(future: F) -> F::Output {
        struct Noop;
        impl Wake for Noop {
            fn wake(self: Arc<Self>) {}
        }

        let waker = Waker::from(Arc::new(Noop));
        let mut context = Context::from_waker(&waker);
        let mut future = Box::pin(future);

        loop {
            match Future::poll(future.as_mut(), &mut context) {
                Poll::Ready(value) => return value,
                Poll::Pending => std::thread::yield_now(),
            }
        }
    }

    #[test]
    fn test_for_each_visits_in_order() {
        let mut seen = Vec::new();
        for_each(range(2, 5), |v| seen.push(*v)).unwrap();
        assert_eq!(seen, [2, 3, 4]);
    }

    #[test]
    fn test_for_each_resumes_after_current_value() {
        let mut numbers = range(0u8, 4);
        assert_eq!(numbers.advance().unwrap(), Step::Yielded(&0));

        let mut rest = Vec::new();
        for_each(numbers, |v| rest.push(*v)).unwrap();
        assert_eq!(rest, [1, 2, 3]);
    }

    #[test]
    fn test_drain_returns_body_result() {
        let summing = Generator::new(|co| async move {
            let mut total = 0;
            for i in 1..=4 {
                total += i;
                co.yield_(total).await;
            }
            total
        });
        assert_eq!(drain(summing).unwrap(), 10);
    }

    #[test]
    fn test_collect_stops_at_failure() {
        let failing: Generator<'_, u8, (), &str> = Generator::fallible(|co| async move {
            co.yield_(1).await;
            Err::<(), _>("bad frame")
        });
        match collect(failing) {
            Err(GeneratorError::Producer(e)) => assert_eq!(e, "bad frame"),
            other => panic!("expected producer failure, got {other:?}"),
        }
    }

    #[test]
    fn test_collect_keeps_values_and_return() {
        let pair = Generator::new(|co| async move {
            co.yield_('x').await;
            co.yield_('y').await;
            "end"
        });
        assert_eq!(collect(pair).unwrap(), (vec!['x', 'y'], "end"));
    }

    #[test]
    fn test_for_each_async_interleaves_with_consumer() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let body_log = Rc::clone(&log);
        let numbers = Generator::new(move |co| async move {
            for i in 0..2 {
                body_log.borrow_mut().push(format!("produce {i}"));
                co.yield_(i).await;
            }
        });

        let consumer_log = Rc::clone(&log);
        block_on(for_each_async(numbers, move |value| {
            consumer_log.borrow_mut().push(format!("consume {value}"));
            ready(())
        }))
        .unwrap();

        assert_eq!(
            &*log.borrow(),
            &["produce 0", "consume 0", "produce 1", "consume 1"]
        );
    }
}
