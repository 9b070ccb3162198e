//! Commonly used imports
//!
//! Use `use lazy_gen::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Co, Cursor, Generator, State, Step};

// Errors
pub use crate::{GeneratorError, MisuseError};

// Step-function producers
pub use crate::{Producer, from_fn, once, repeat};

// Built-in generators
pub use crate::range;

// Execution
pub use crate::{collect, drain, for_each};
