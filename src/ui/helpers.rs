use anyhow::Error;

/// Extract the most relevant error message from a chained error. Context
/// layers describe where a failure happened; the root cause is what the user
/// can actually act on, so that is what the shell prints.
pub(crate) fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}
