use std::path::PathBuf;

use thiserror::Error;

use crate::domain::TabId;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("tab {0:?} is listed more than once")]
    DuplicateTab(TabId),
    #[error("tab {0:?} is missing from the tab list")]
    MissingTab(TabId),
    #[error("failed to read content file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed content document: {0}")]
    Parse(#[from] toml::de::Error),
}
