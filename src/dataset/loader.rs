use crate::dataset::error::DatasetError;
use crate::types::dataset::Dataset;
use log::{debug, info, warn};
use reqwest::Client;
use std::path::Path;
use tokio::fs;

/// Location of the published global land-surface temperature dataset.
pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

pub struct DatasetLoader {
    download_client: Client,
}

impl DatasetLoader {
    pub fn new() -> DatasetLoader {
        Self::with_client(Client::new())
    }

    pub fn with_client(download_client: Client) -> DatasetLoader {
        DatasetLoader { download_client }
    }

    /// Downloads and decodes the dataset at `url`. One attempt, no retries.
    pub async fn fetch(&self, url: &str) -> Result<Dataset, DatasetError> {
        info!("Downloading dataset from {}", url);

        let response = self
            .download_client
            .get(url)
            .send()
            .await
            .map_err(|e| DatasetError::NetworkRequest(url.to_string(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    DatasetError::HttpStatus {
                        url: url.to_string(),
                        status,
                        source: e,
                    }
                } else {
                    DatasetError::NetworkRequest(url.to_string(), e)
                });
            }
        };

        let body = response
            .bytes()
            .await
            .map_err(|e| DatasetError::NetworkRequest(url.to_string(), e))?;
        debug!("Received {} bytes from {}", body.len(), url);

        let dataset = Dataset::from_slice(&body)?;
        info!(
            "Loaded {} monthly records (base temperature {})",
            dataset.len(),
            dataset.base_temperature
        );
        Ok(dataset)
    }

    /// Reads a dataset that was saved to disk.
    pub async fn load_file(&self, path: &Path) -> Result<Dataset, DatasetError> {
        let bytes = fs::read(path)
            .await
            .map_err(|e| DatasetError::FileRead(path.to_path_buf(), e))?;
        let dataset = Dataset::from_slice(&bytes)?;
        info!(
            "Loaded {} monthly records from {}",
            dataset.len(),
            path.display()
        );
        Ok(dataset)
    }
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self::new()
    }
}
