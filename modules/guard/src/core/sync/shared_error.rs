use core::fmt;

/// Errors that occur while accessing shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharedError {
  /// Blocking is not permitted in the current execution context.
  InterruptContext,
}

impl fmt::Display for SharedError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::InterruptContext => write!(f, "blocking is not permitted in the current execution context"),
    }
  }
}

impl core::error::Error for SharedError {}
