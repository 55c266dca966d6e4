/// Guarded access primitives.
pub mod concurrent;
/// Synchronization primitives and shared ownership abstractions.
pub mod sync;
