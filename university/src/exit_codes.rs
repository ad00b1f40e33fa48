//! Stable exit codes for the workspace binaries.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed: unreadable config or roster, closed input, or an output error.
pub const INVALID: i32 = 1;
