use std::panic::{AssertUnwindSafe, catch_unwind};

use super::StdSyncRwLock;
use crate::core::sync::sync_rwlock_like::SyncRwLockLike;

#[test]
fn read_write_cycle() {
  let lock = StdSyncRwLock::new(11_u32);
  assert_eq!(*lock.read(), 11);
  {
    let mut guard = lock.write();
    *guard = 13;
  }
  assert_eq!(*lock.read(), 13);
}

#[test]
fn poisoning_is_absorbed() {
  let lock = StdSyncRwLock::new(5_u32);
  let result = catch_unwind(AssertUnwindSafe(|| {
    let _guard = lock.write();
    panic!("holder failure");
  }));
  assert!(result.is_err());
  assert_eq!(*lock.read(), 5);
  {
    let mut guard = lock.write();
    *guard = 6;
  }
  assert_eq!(*lock.read(), 6);
}

#[test]
fn into_inner_recovers_after_poisoning() {
  let lock = StdSyncRwLock::new(3_u32);
  let result = catch_unwind(AssertUnwindSafe(|| {
    let _guard = lock.write();
    panic!("holder failure");
  }));
  assert!(result.is_err());
  assert_eq!(StdSyncRwLock::into_inner(lock), 3);
}
