use thiserror::Error;

/// Failures reported by the datastore itself.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The write violated a uniqueness constraint.
    ///
    /// Raised when a volante with the same identity already exists; the submission
    /// service reports it to the client as a duplicate submission.
    #[error("Unique constraint violated")]
    Conflict,

    /// The hosted datastore answered with a non-success status.
    #[error("Datastore returned {status} for {operation}: {body}")]
    UnexpectedStatus {
        /// Operation being performed, e.g. `"fetch volantes"`
        operation: &'static str,
        /// HTTP status code
        status: u16,
        /// Response body for diagnostics
        body: String,
    },

    /// An insert returned no representation of the created row.
    #[error("Datastore returned no row for {0}")]
    MissingRow(&'static str),
}
