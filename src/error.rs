//! Error types raised by the validation algebra itself.
//!
//! Validation errors are data and live inside `Failure`. The types here cover
//! the few places where the API has to report a misuse instead.

use std::fmt;

/// Returned by [`Validation::get`](crate::Validation::get) on a `Success`.
///
/// # Examples
///
/// ```rust
/// use accrue::{NoSuchElement, Validation};
///
/// let v = Validation::<String>::success();
/// assert_eq!(v.get(), Err(NoSuchElement));
/// assert_eq!(NoSuchElement.to_string(), "validation has no errors");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NoSuchElement;

impl fmt::Display for NoSuchElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("validation has no errors")
    }
}

impl std::error::Error for NoSuchElement {}

/// Raised when a task submitted through an [`Executor`](crate::executor::Executor)
/// could not deliver its result.
///
/// Carries the panic payload so the caller can re-raise it with
/// [`std::panic::resume_unwind`].
pub struct TaskFailed {
    payload: Box<dyn std::any::Any + Send + 'static>,
}

impl TaskFailed {
    /// Wrap a panic payload.
    pub fn new(payload: Box<dyn std::any::Any + Send + 'static>) -> Self {
        Self { payload }
    }

    /// Wrap a plain message, used when the task never ran to completion.
    pub fn message(msg: &'static str) -> Self {
        Self::new(Box::new(msg))
    }

    /// The panic message, when the payload is a string.
    pub fn reason(&self) -> Option<&str> {
        self.payload
            .downcast_ref::<&'static str>()
            .copied()
            .or_else(|| self.payload.downcast_ref::<String>().map(String::as_str))
    }

    /// Consume and return the raw payload.
    pub fn into_payload(self) -> Box<dyn std::any::Any + Send + 'static> {
        self.payload
    }
}

impl fmt::Debug for TaskFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskFailed")
            .field("reason", &self.reason())
            .finish()
    }
}

impl fmt::Display for TaskFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason() {
            Some(reason) => write!(f, "validation task failed: {}", reason),
            None => f.write_str("validation task failed"),
        }
    }
}

impl std::error::Error for TaskFailed {}
