use thiserror::Error;

/// Failures inside the persistence adapter.
///
/// These never cross the [`crate::save::TeamStore`] boundary: the adapter
/// logs them and degrades to an empty collection (load) or a dropped write
/// (save).
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed team collection: {0}")]
    Malformed(#[from] serde_json::Error),
}
