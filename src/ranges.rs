use crate::{generator::Generator, options::GeneratorOptions};

mod sealed {
    pub trait Sealed {}
}

/// Primitive integers that [`range`] can count over.
///
/// Sealed: stepping must be exact, which rules out floating point.
pub trait RangeInt: Copy + Ord + sealed::Sealed {
    /// The next integer, or `None` at the type's maximum.
    fn successor(self) -> Option<Self>;
}

macro_rules! impl_range_int {
    ($($int:ty),*) => {$(
        impl sealed::Sealed for $int {}

        impl RangeInt for $int {
            fn successor(self) -> Option<Self> {
                self.checked_add(1)
            }
        }
    )*};
}

impl_range_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Lazily count from `from` up to, but not including, `to`.
///
/// An empty range (`from >= to`) completes on the first `advance()`.
///
/// ```rust
/// use lazy_gen::range;
///
/// let collected: Vec<i32> = range(2, 5).cursor().map(Result::unwrap).collect();
/// assert_eq!(collected, [2, 3, 4]);
/// ```
pub fn range<'a, N>(from: N, to: N) -> Generator<'a, N>
where
    N: RangeInt + 'a,
{
    let options = GeneratorOptions::new().with_label("range");
    Generator::with_options(options, move |co| async move {
        let mut i = from;
        while i < to {
            co.yield_(i).await;
            match i.successor() {
                Some(next) => i = next,
                None => break,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GeneratorError, MisuseError, State, Step};
    use proptest::prelude::*;

    #[test]
    fn test_range_yields_in_order_then_exhausts() {
        let mut numbers = range(2, 5);

        assert_eq!(numbers.advance().unwrap(), Step::Yielded(&2));
        assert_eq!(numbers.advance().unwrap(), Step::Yielded(&3));
        assert_eq!(numbers.advance().unwrap(), Step::Yielded(&4));
        assert!(numbers.advance().unwrap().is_complete());
        assert_eq!(numbers.label(), "range");
    }

    #[test]
    fn test_empty_range_exhausts_immediately() {
        let mut numbers = range(5, 2);
        assert!(numbers.advance().unwrap().is_complete());
        assert_eq!(numbers.state(), State::Completed);
    }

    #[test]
    fn test_range_cannot_be_restarted() {
        let mut numbers = range(0u64, 2);
        while numbers.advance().unwrap().is_yielded() {}

        for _ in 0..3 {
            assert!(matches!(
                numbers.advance(),
                Err(GeneratorError::Misuse(MisuseError::Terminated(State::Completed)))
            ));
        }
    }

    #[test]
    fn test_range_near_type_maximum_is_finite() {
        let top: Vec<u8> = range(250u8, 255).cursor().map(Result::unwrap).collect();
        assert_eq!(top, [250, 251, 252, 253, 254]);

        let last: Vec<i8> = range(i8::MAX - 1, i8::MAX).cursor().map(Result::unwrap).collect();
        assert_eq!(last, [i8::MAX - 1]);
    }

    proptest! {
        #[test]
        fn prop_range_matches_eager_range(from in -50i64..50, to in -50i64..50) {
            let lazy: Vec<i64> = range(from, to).cursor().map(Result::unwrap).collect();
            let eager: Vec<i64> = (from..to).collect();
            prop_assert_eq!(lazy, eager);
        }

        #[test]
        fn prop_partial_consumption_sees_prefix(len in 0u32..40, take in 0usize..50) {
            let mut numbers = range(0u32, len);
            let prefix: Vec<u32> = numbers.cursor().take(take).map(Result::unwrap).collect();
            let expected: Vec<u32> = (0..len).take(take).collect();
            prop_assert_eq!(prefix, expected);
        }
    }
}
