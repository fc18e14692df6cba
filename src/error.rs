//! Error taxonomy for a docable run.
//!
//! Two soft kinds that a run can recover from by skipping the file
//! (`MissingNamespaceMarker`, `NoDocBlocks`) and one fatal kind from the
//! file provider (`FileRead`). Whether a soft failure halts the run or
//! skips the file is decided by the caller's [`crate::run::ErrorPolicy`].

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// No `// docable-member-namespace:` line anywhere in the file.
    #[error("file \"{file}\" is missing the \"// docable-member-namespace:\" comment")]
    MissingNamespaceMarker { file: String },

    /// Namespace found, but no text matched the doc block pattern.
    #[error("file \"{file}\" does not have any doc blocks")]
    NoDocBlocks { file: String },

    /// The file provider could not produce the file's contents.
    #[error("failed to read \"{file}\": {source}")]
    FileRead {
        file: String,
        #[source]
        source: io::Error,
    },
}

impl ExtractError {
    /// Soft errors skip or halt depending on policy; hard errors abort the run.
    pub fn is_soft(&self) -> bool {
        !matches!(self, ExtractError::FileRead { .. })
    }
}
