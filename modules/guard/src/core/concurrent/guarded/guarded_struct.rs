use core::marker::PhantomData;

use super::guard_handle::GuardHandle;
use crate::core::sync::{
  SharedError,
  interrupt::{InterruptContextPolicy, NeverInterruptPolicy},
  sync_rwlock_like::{SpinSyncRwLock, SyncRwLockLike},
};


/// Mutable state guarded behind explicit read/write access callbacks.
///
/// A `Guarded` owns its value and a reader-writer lock 1:1; the value is
/// reachable only through the access operations. [`Guarded::read_access`]
/// runs a callback under the shared lock, [`Guarded::write_access`] and
/// [`Guarded::read_write_access`] run it under the exclusive lock. The lock
/// is released on every exit path: a panicking callback unwinds with the
/// lock released and the panic reaches the caller unchanged.
///
/// Reader/writer fairness is a property of the lock backend; see the backend
/// types for the policy each one provides.
///
/// Calling an access operation on an instance from within one of its own
/// callbacks is not supported: it deadlocks or spins forever, depending on
/// the backend.
#[derive(Debug)]
pub struct Guarded<L, T, P = NeverInterruptPolicy>
where
  L: SyncRwLockLike<T>,
  P: InterruptContextPolicy, {
  lock:    L,
  _marker: PhantomData<(T, P)>,
}

impl<L, T, P> Guarded<L, T, P>
where
  L: SyncRwLockLike<T>,
  P: InterruptContextPolicy,
{
  /// Creates a new `Guarded` wrapping the specified value.
  #[must_use]
  pub fn new(value: T) -> Self {
    Self { lock: L::new(value), _marker: PhantomData }
  }

  /// Creates a `Guarded` from an existing lock.
  #[must_use]
  pub const fn from_lock(lock: L) -> Self {
    Self { lock, _marker: PhantomData }
  }

  /// Returns a reference to the underlying lock.
  #[must_use]
  pub const fn as_lock(&self) -> &L {
    &self.lock
  }

  /// Consumes the wrapper and returns the guarded value.
  pub fn into_inner(self) -> T {
    self.lock.into_inner()
  }

  /// Acquires the shared lock and executes `f` with read access to the value.
  ///
  /// Readers may run concurrently with each other, never with a writer.
  pub fn read_access<R>(&self, f: impl FnOnce(&T) -> R) -> R {
    match self.acquire_read() {
      | Ok(guard) => f(&guard),
      | Err(_) => panic!("Guarded::read_access requires blocking to be allowed"),
    }
  }

  /// Acquires the exclusive lock and executes `f` with write access to the value.
  ///
  /// No other reader or writer runs while `f` does.
  pub fn write_access<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
    match self.acquire_write() {
      | Ok(mut guard) => f(&mut guard),
      | Err(_) => panic!("Guarded::write_access requires blocking to be allowed"),
    }
  }

  /// Acquires the exclusive lock and executes `f` with read and write access to the value.
  ///
  /// Identical to [`Guarded::write_access`]; the separate name lets callers
  /// signal read-modify-write intent.
  pub fn read_write_access<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
    self.write_access(f)
  }

  /// Acquires the shared lock and returns a handle holding it.
  ///
  /// Prefer [`Guarded::read_access`]; a retained handle keeps every writer
  /// blocked until it is dropped.
  pub fn read_lock(&self) -> GuardHandle<L::ReadGuard<'_>> {
    match self.acquire_read() {
      | Ok(guard) => GuardHandle::new(guard),
      | Err(_) => panic!("Guarded::read_lock requires blocking to be allowed"),
    }
  }

  /// Acquires the exclusive lock and returns a handle holding it.
  pub fn write_lock(&self) -> GuardHandle<L::WriteGuard<'_>> {
    match self.acquire_write() {
      | Ok(guard) => GuardHandle::new(guard),
      | Err(_) => panic!("Guarded::write_lock requires blocking to be allowed"),
    }
  }

  fn acquire_read(&self) -> Result<L::ReadGuard<'_>, SharedError> {
    P::check_blocking_allowed()?;
    Ok(self.lock.read())
  }

  fn acquire_write(&self) -> Result<L::WriteGuard<'_>, SharedError> {
    P::check_blocking_allowed()?;
    Ok(self.lock.write())
  }
}

impl<L, T, P> Default for Guarded<L, T, P>
where
  T: Default,
  L: SyncRwLockLike<T>,
  P: InterruptContextPolicy,
{
  fn default() -> Self {
    Self::new(T::default())
  }
}

impl<L, T, P> From<T> for Guarded<L, T, P>
where
  L: SyncRwLockLike<T>,
  P: InterruptContextPolicy,
{
  fn from(value: T) -> Self {
    Self::new(value)
  }
}

/// Guarded object backed by [`SpinSyncRwLock`] for `no_std` targets.
pub type SpinGuarded<T> = Guarded<SpinSyncRwLock<T>, T>;
