//! Workspace root crate for the cordon project.
//!
//! The functionality lives in the workspace member crates; this package only
//! reserves the crate name.

#[cfg(test)]
mod tests;

/// Returns the version recorded in the package metadata.
#[must_use]
pub fn crate_version() -> &'static str {
  env!("CARGO_PKG_VERSION")
}

/// Returns the message shown to users who depend on the root crate directly.
#[must_use]
pub fn readiness_message() -> &'static str {
  "cordon-rs reserves this crate name; depend on the workspace member crates instead"
}
