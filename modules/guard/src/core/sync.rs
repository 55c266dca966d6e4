#[cfg(feature = "alloc")]
mod arc_shared;
/// Policies for detecting interrupt contexts prior to blocking operations.
pub mod interrupt;
mod shared_error;
/// Synchronous reader-writer lock abstractions shared across runtimes.
pub mod sync_rwlock_like;

#[cfg(feature = "alloc")]
pub use arc_shared::ArcShared;
pub use shared_error::SharedError;
