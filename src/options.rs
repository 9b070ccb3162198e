use std::borrow::Cow;

/// What [`advance`](crate::Generator::advance) does once the generator has
/// already reported its end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TerminalPolicy {
    /// Report [`MisuseError::Terminated`](crate::MisuseError::Terminated).
    #[default]
    Error,
    /// Quietly report `Step::Complete` again for a generator that completed
    /// normally. Faulted, disposed and poisoned generators have no return
    /// value to repeat and still report misuse.
    Exhausted,
}

/// Per-generator settings.
///
/// ```rust
/// use lazy_gen::{Generator, GeneratorOptions, TerminalPolicy};
///
/// let options = GeneratorOptions::new()
///     .with_label("squares")
///     .with_terminal(TerminalPolicy::Exhausted);
/// let mut squares = Generator::with_options(options, |co| async move {
///     for i in 1..=2u32 {
///         co.yield_(i * i).await;
///     }
/// });
/// assert_eq!(squares.label(), "squares");
/// while squares.advance().unwrap().is_yielded() {}
/// assert!(squares.advance().unwrap().is_complete());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Name attached to this generator's trace events.
    pub label: Option<Cow<'static, str>>,
    /// Behaviour of `advance()` after the end has been observed.
    pub terminal: TerminalPolicy,
}

impl GeneratorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_terminal(mut self, terminal: TerminalPolicy) -> Self {
        self.terminal = terminal;
        self
    }
}
