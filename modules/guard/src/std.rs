/// Reader-writer lock backend built on [`std::sync::RwLock`].
mod sync_rwlock;
/// Guard returned by [`StdSyncRwLock::read`](crate::std::sync_rwlock::StdSyncRwLock::read).
mod sync_rwlock_read_guard;
/// Guard returned by [`StdSyncRwLock::write`](crate::std::sync_rwlock::StdSyncRwLock::write).
mod sync_rwlock_write_guard;

pub use sync_rwlock::StdSyncRwLock;
pub use sync_rwlock_read_guard::StdSyncRwLockReadGuard;
pub use sync_rwlock_write_guard::StdSyncRwLockWriteGuard;

use crate::core::concurrent::guarded::Guarded;

/// Guarded object backed by [`StdSyncRwLock`].
pub type StdGuarded<T> = Guarded<StdSyncRwLock<T>, T>;
