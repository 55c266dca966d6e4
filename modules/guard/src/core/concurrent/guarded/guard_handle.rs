use core::ops::{Deref, DerefMut};


/// Handle that keeps a lock guard alive and exposes the guarded value.
///
/// The underlying lock is held for as long as the handle lives and released
/// when it is dropped.
#[derive(Debug)]
pub struct GuardHandle<G> {
  guard: G,
}

impl<G> GuardHandle<G> {
  /// Wraps an acquired guard.
  #[must_use]
  pub const fn new(guard: G) -> Self {
    Self { guard }
  }

  /// Extracts the underlying guard.
  pub fn into_inner(self) -> G {
    self.guard
  }
}

impl<G> Deref for GuardHandle<G>
where
  G: Deref,
{
  type Target = G::Target;

  fn deref(&self) -> &Self::Target {
    &self.guard
  }
}

impl<G> DerefMut for GuardHandle<G>
where
  G: DerefMut,
{
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.guard
  }
}
