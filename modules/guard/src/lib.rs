//! Guarded read/write access primitives for mutable state.
//!
//! Mutable state that must be shared between threads is wrapped in a
//! [`Guarded`](crate::core::concurrent::guarded::Guarded) object and reached
//! only through scoped access callbacks: shared for readers, exclusive for
//! writers. Lock backends are pluggable through
//! [`SyncRwLockLike`](crate::core::sync::sync_rwlock_like::SyncRwLockLike); a
//! spin-based backend serves `no_std` targets and a `std::sync::RwLock`
//! backend serves hosted ones.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod core;
#[cfg(feature = "std")]
pub mod std;
