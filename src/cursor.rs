//! Forward-only iteration over a [`Generator`].
//!
//! A [`Cursor`] mutably borrows its generator, so it can neither outlive it nor
//! coexist with a second cursor on the same generator. Loops test
//! [`is_exhausted`](Cursor::is_exhausted) rather than comparing cursors: two
//! cursors carry no identity worth comparing, so `Cursor` has no `PartialEq`.
//!
//! ```rust
//! use lazy_gen::range;
//!
//! let mut digits = range(0u8, 3);
//! let mut cursor = digits.cursor();
//! let mut seen = Vec::new();
//! while cursor.advance().unwrap() {
//!     seen.push(*cursor.current().unwrap());
//! }
//! assert!(cursor.is_exhausted());
//! assert_eq!(seen, [0, 1, 2]);
//! ```

use std::convert::Infallible;

use crate::{
    error::{GeneratorError, GeneratorResult, MisuseError},
    generator::Generator,
};

/// Non-owning iteration handle over one generator.
pub struct Cursor<'g, 'a, T, R = (), E = Infallible> {
    generator: &'g mut Generator<'a, T, R, E>,
    exhausted: bool,
}

impl<'g, 'a, T, R, E> Cursor<'g, 'a, T, R, E> {
    /// Borrow `generator` for iteration. A generator that already ended gives
    /// a cursor that starts exhausted.
    pub fn new(generator: &'g mut Generator<'a, T, R, E>) -> Self {
        let exhausted = generator.is_done();
        Self {
            generator,
            exhausted,
        }
    }

    /// Advance the generator. Returns `true` when a new value is current.
    ///
    /// A producer failure is returned unchanged and leaves the cursor
    /// exhausted.
    pub fn advance(&mut self) -> GeneratorResult<bool, E> {
        match self.generator.advance() {
            Ok(step) => {
                self.exhausted = step.is_complete();
                Ok(!self.exhausted)
            }
            Err(e) => {
                self.exhausted = true;
                Err(e)
            }
        }
    }

    /// The generator's current value.
    pub fn current(&self) -> Result<&T, MisuseError> {
        self.generator.current()
    }

    /// Returns `true` once the generator can produce nothing more.
    ///
    /// Never resumes the generator.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Negation of [`is_exhausted`](Self::is_exhausted).
    pub fn has_next(&self) -> bool {
        !self.exhausted
    }

    /// Read access to the underlying generator.
    pub fn generator(&self) -> &Generator<'a, T, R, E> {
        &*self.generator
    }
}

/// Yields clones of each value. A producer failure comes out once as `Err`,
/// after which the iterator is fused.
impl<T, R, E> Iterator for Cursor<'_, '_, T, R, E>
where
    T: Clone,
{
    type Item = Result<T, GeneratorError<E>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        match self.advance() {
            Ok(true) => self.current().ok().cloned().map(Ok),
            Ok(false) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

impl<T, R, E> std::iter::FusedIterator for Cursor<'_, '_, T, R, E> where T: Clone {}
