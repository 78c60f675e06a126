use std::path::PathBuf;
use thiserror::Error;

// Line parser errors, each one a kind of malformed entry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Line has fewer than two headword tokens")]
    MissingHeadword,
    #[error("Headword token is empty")]
    EmptyHeadword,
    #[error("No [pinyin] bracket pair")]
    MissingPinyin,
    #[error("No /definitions/ after the pinyin")]
    MissingDefinitions,
}

// Loader errors
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Dictionary not found at {}", .0.display())]
    MissingResource(PathBuf),
    #[error("Malformed entry on line {line_number}: {source}")]
    MalformedEntry {
        line_number: usize,
        #[source]
        source: ParseError,
    },
    #[error("I/O error while reading dictionary: {0}")]
    Io(#[from] std::io::Error),
}

// Maintenance fetcher errors
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Transfer failure for {url}: {reason}")]
    TransferFailure { url: String, reason: String },
    #[error("Unpack failure for {}: {reason}", .archive.display())]
    UnpackFailure { archive: PathBuf, reason: String },
}

#[derive(Error, Debug)]
pub enum DictError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
}
