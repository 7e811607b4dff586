//! Dump errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DumpError {
    /// An item kind that cannot appear inside an `impl` block.
    #[error("unexpected item type in impl block - {kind} `{name}`")]
    UnexpectedImplItem { kind: &'static str, name: String },

    #[error("failed to write dump to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write dump: {0}")]
    Sink(#[from] io::Error),
}

pub type DumpResult<T> = Result<T, DumpError>;
