use crate::dataset::error::DatasetError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HeatMapError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error("Failed to write page to '{0}'")]
    PageWrite(PathBuf, #[source] std::io::Error),
}
