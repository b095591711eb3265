use thiserror::Error;

/// Inline message shown when a download is attempted before any generation.
pub const NO_DATA_MESSAGE: &str = "No portfolio data available to download.";

/// Inline message shown for any unexpected serialization or save failure.
pub const DOWNLOAD_FAILED_MESSAGE: &str = "Failed to download portfolio. Please try again.";

/// Application-level error type.
///
/// Only the download path can fail: the builder is total, theme selection is
/// a closed enum, and form edits cannot fail. Errors are recorded in the
/// session's single inline error slot, never propagated past it.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("no portfolio data available")]
    NoData,

    #[error("download failed: {0}")]
    Download(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Maps the error to the fixed message shown in the inline error slot.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::NoData => NO_DATA_MESSAGE,
            AppError::Download(_) | AppError::Io(_) => DOWNLOAD_FAILED_MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_data_maps_to_fixed_message() {
        assert_eq!(
            AppError::NoData.user_message(),
            "No portfolio data available to download."
        );
    }

    #[test]
    fn test_failure_variants_map_to_download_message() {
        let io = AppError::Io(std::io::Error::other("disk on fire"));
        let dl = AppError::Download("handle lost".to_string());

        for err in [io, dl] {
            assert_eq!(
                err.user_message(),
                "Failed to download portfolio. Please try again."
            );
        }
    }
}
