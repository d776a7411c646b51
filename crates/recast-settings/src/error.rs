//! Settings error type.

use recast_core::ConvertError;
use recast_formats::FormatError;

/// Error raised while assembling layered settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// A file operation outside the load path failed (saving, mainly);
    /// broken files during loading are skipped with a warning instead.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The merged mapping could not materialize into the target record.
    #[error(transparent)]
    Convert(#[from] ConvertError),
}
