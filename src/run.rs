//! Sequential per-file orchestration.
//!
//! Files are processed one at a time in the order given, folding entries into
//! a single accumulating document. File contents come from an injected
//! [`FileProvider`], so the pipeline itself never touches the filesystem.

use crate::error::ExtractError;
use crate::extract;
use crate::model::{OutputDocument, OutputEntry};
use std::fs;

/// Supplies file contents to a run. Selected once at startup.
pub trait FileProvider {
    fn read(&self, filepath: &str) -> Result<String, ExtractError>;
}

/// Reads files from the local filesystem.
pub struct FsProvider;

impl FileProvider for FsProvider {
    fn read(&self, filepath: &str) -> Result<String, ExtractError> {
        fs::read_to_string(filepath).map_err(|source| ExtractError::FileRead {
            file: filepath.to_string(),
            source,
        })
    }
}

/// What to do with the rest of the run when a file fails extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop processing remaining files at the first failure.
    Halt,
    /// Skip the failing file and keep going.
    Continue,
}

/// Result of a run: the accumulated document plus any per-file failures.
/// Under [`ErrorPolicy::Halt`] there is at most one diagnostic.
#[derive(Debug)]
pub struct RunOutcome {
    pub document: OutputDocument,
    pub diagnostics: Vec<ExtractError>,
}

/// Process `filepaths` in order, accumulating one entry per file that has
/// both a namespace and at least one documentation block.
///
/// Soft failures (missing marker, zero blocks) become diagnostics and either
/// halt or skip per `policy`; unreadable files abort the run.
pub fn run(
    provider: &dyn FileProvider,
    filepaths: &[String],
    policy: ErrorPolicy,
) -> Result<RunOutcome, ExtractError> {
    let mut document = OutputDocument::new();
    let mut diagnostics = Vec::new();

    for filepath in filepaths {
        let result = provider
            .read(filepath)
            .and_then(|contents| extract_entry(filepath, &contents));

        match result {
            Ok((namespace, entry)) => document.insert(namespace, entry),
            Err(err) if err.is_soft() => {
                diagnostics.push(err);
                if policy == ErrorPolicy::Halt {
                    break;
                }
            }
            Err(err) => return Err(err),
        }
    }

    Ok(RunOutcome {
        document,
        diagnostics,
    })
}

/// Extract a single file's namespace and normalized documentation blocks.
pub fn extract_entry(
    filepath: &str,
    contents: &str,
) -> Result<(String, OutputEntry), ExtractError> {
    let namespace = extract::namespace(contents).ok_or_else(|| {
        ExtractError::MissingNamespaceMarker {
            file: filepath.to_string(),
        }
    })?;

    let blocks = extract::doc_blocks(contents);
    if blocks.is_empty() {
        return Err(ExtractError::NoDocBlocks {
            file: filepath.to_string(),
        });
    }

    let members = blocks.iter().map(|block| extract::normalize(block)).collect();
    Ok((
        namespace.to_string(),
        OutputEntry {
            file: filepath.to_string(),
            members,
        },
    ))
}
