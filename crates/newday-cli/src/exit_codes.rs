//! Exit codes for `newday`.
//! These codes are part of the public contract.

use newday_core::ScaffoldError;

pub const SUCCESS: i32 = 0;
pub const FILESYSTEM_ERROR: i32 = 1; // Directory, template or destination I/O failed
pub const INVALID_ARGUMENT: i32 = 2; // Day not parseable; clap usage errors share this code

/// Map a command failure to its exit code. Errors that did not come from
/// the scaffolder are reported as generic failures.
pub fn for_error(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<ScaffoldError>())
        .map_or(FILESYSTEM_ERROR, ScaffoldError::exit_code)
}
