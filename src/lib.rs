//! # lazy-gen: Lazy Single-Owner Generators
//!
//! Produce a sequence of values on demand. Each value is computed only when
//! asked for, computed once, and the producing code can pause mid-computation
//! and pick up exactly where it left off.
//!
//! ## Core Types
//!
//! - **[`Generator`]**: owns the suspended computation and drives it one step per
//!   [`advance`](Generator::advance)
//! - **[`Cursor`]**: borrowing iteration handle with an explicit exhaustion check
//! - **[`Co`]**: yield handle given to producer bodies
//! - **[`Producer`]**: hand-written step functions usable as generator bodies
//!
//! ## Example
//!
//! ```
//! use lazy_gen::*;
//!
//! let mut fib = Generator::new(|co| async move {
//!     let (mut a, mut b) = (0u64, 1u64);
//!     loop {
//!         co.yield_(a).await;
//!         (a, b) = (b, a + b);
//!     }
//! });
//!
//! let first: Vec<u64> = fib.cursor().take(6).map(Result::unwrap).collect();
//! assert_eq!(first, [0, 1, 1, 2, 3, 5]);
//! ```
//!
//! Failures raised by a body come back from the `advance()` that reached them:
//!
//! ```
//! use lazy_gen::*;
//!
//! let mut parsed: Generator<'_, u8, (), String> = Generator::fallible(|co| async move {
//!     for token in ["1", "2", "x"] {
//!         let n: u8 = match token.parse() {
//!             Ok(n) => n,
//!             Err(_) => return Err(format!("bad token {token}")),
//!         };
//!         co.yield_(n).await;
//!     }
//!     Ok(())
//! });
//!
//! assert_eq!(parsed.advance().unwrap(), Step::Yielded(&1));
//! assert_eq!(parsed.advance().unwrap(), Step::Yielded(&2));
//! let err = parsed.advance().unwrap_err();
//! assert_eq!(err.into_producer().as_deref(), Some("bad token x"));
//! ```
//!
//! ## Common Functions
//!
//! **Building generators:**
//! - [`Generator::new(body)`](Generator::new) - infallible `async` body
//! - [`Generator::fallible(body)`](Generator::fallible) - body returning `Result`
//! - [`Generator::from_producer(p)`](Generator::from_producer) - drive a [`Producer`]
//! - [`range(from, to)`] - count lazily through a half-open range
//!
//! **Execution:**
//! - [`for_each(generator, f)`] - run to completion, visiting each value
//! - [`drain(generator)`] / [`collect(generator)`] - run to completion
//! - [`for_each_async(generator, f)`] - same, awaiting the consumer between values

mod co;
mod cursor;
mod drive;
mod error;
mod generator;
mod options;
mod producer;
mod ranges;
mod state;
mod step;

pub mod prelude;

pub use co::*;
pub use cursor::*;
pub use drive::*;
pub use error::*;
pub use generator::*;
pub use options::*;
pub use producer::*;
pub use ranges::*;
pub use state::*;
pub use step::*;
