#[cfg(not(feature = "force-portable-arc"))]
use alloc::sync::Arc;
use core::{fmt, ops::Deref};

#[cfg(feature = "force-portable-arc")]
use portable_atomic_util::Arc;


/// Shared handle backed by [`alloc::sync::Arc`] by default.
///
/// When the `force-portable-arc` feature is enabled it switches to
/// [`portable_atomic_util::Arc`] so that targets without native atomic pointer
/// support can still share guarded state across threads.
#[repr(transparent)]
pub struct ArcShared<T: ?Sized>(Arc<T>);

impl<T: ?Sized> ArcShared<T> {
  /// Creates a new `ArcShared` by wrapping the provided value.
  pub fn new(value: T) -> Self
  where
    T: Sized, {
    Self(Arc::new(value))
  }

  /// Returns whether two handles point at the same allocation.
  #[must_use]
  pub fn ptr_eq(this: &Self, other: &Self) -> bool {
    Arc::ptr_eq(&this.0, &other.0)
  }
}

impl<T: ?Sized> Clone for ArcShared<T> {
  fn clone(&self) -> Self {
    Self(Arc::clone(&self.0))
  }
}

impl<T: ?Sized> Deref for ArcShared<T> {
  type Target = T;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for ArcShared<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}
