//! Error handling and exit codes.

use trigsum_core::calculator::SeriesError;
use trigsum_core::constants::exit_codes;

/// Map a series error to its process exit code.
#[must_use]
pub fn handle_error(err: &SeriesError) -> i32 {
    match err {
        SeriesError::InvalidInput(_) | SeriesError::Worker(_) => exit_codes::ERROR_GENERIC,
        SeriesError::Config(_) => exit_codes::ERROR_CONFIG,
        SeriesError::Mismatch(_) => exit_codes::ERROR_MISMATCH,
        SeriesError::Domain { .. } => exit_codes::ERROR_DOMAIN,
    }
}

/// Exit code for an application error: the first [`SeriesError`] in the
/// cause chain decides, anything else is a generic failure.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<SeriesError>())
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
