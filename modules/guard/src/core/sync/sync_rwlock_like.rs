use core::ops::{Deref, DerefMut};

mod spin_sync_rwlock;

pub use spin_sync_rwlock::*;

/// Generic reader-writer lock abstraction for runtime-agnostic code.
///
/// Implementations must serialize writers against everything: at most one
/// write guard exists at a time, and no read guard coexists with it. Read
/// guards may coexist with each other. Fairness between waiting readers and
/// writers is implementation-defined and documented on each implementation.
pub trait SyncRwLockLike<T> {
  /// Shared guard type returned by [`SyncRwLockLike::read`].
  type ReadGuard<'a>: Deref<Target = T>
  where
    Self: 'a,
    T: 'a;
  /// Exclusive guard type returned by [`SyncRwLockLike::write`].
  type WriteGuard<'a>: Deref<Target = T> + DerefMut
  where
    Self: 'a,
    T: 'a;

  /// Creates a new lock instance wrapping the provided value.
  fn new(value: T) -> Self;

  /// Consumes the lock and returns the inner value.
  fn into_inner(self) -> T;

  /// Blocks until shared access is available and returns a read guard.
  fn read(&self) -> Self::ReadGuard<'_>;

  /// Blocks until exclusive access is available and returns a write guard.
  fn write(&self) -> Self::WriteGuard<'_>;
}

/// Convenience alias for read guards produced by [`SyncRwLockLike`].
pub type SyncRwLockLikeReadGuard<'a, L, T> = <L as SyncRwLockLike<T>>::ReadGuard<'a>;

/// Convenience alias for write guards produced by [`SyncRwLockLike`].
pub type SyncRwLockLikeWriteGuard<'a, L, T> = <L as SyncRwLockLike<T>>::WriteGuard<'a>;
