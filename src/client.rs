//! Main entry point: fetch the temperature dataset and hand it to a [`Chart`].

use crate::chart::layout::ChartLayout;
use crate::chart::Chart;
use crate::dataset::loader::{DatasetLoader, DEFAULT_DATA_URL};
use crate::error::HeatMapError;
use crate::types::dataset::Dataset;
use bon::bon;
use std::path::Path;

/// Fetches the global land-surface temperature dataset.
///
/// The client keeps no state besides its HTTP connection pool; every call to
/// [`HeatMapClient::fetch`] downloads the document again.
///
/// # Examples
///
/// ```no_run
/// # use temperature_heatmap::{Chart, ChartLayout, HeatMapClient, HeatMapError};
/// # use std::path::Path;
/// # #[tokio::main]
/// # async fn main() -> Result<(), HeatMapError> {
/// let client = HeatMapClient::new();
/// let dataset = client.fetch().call().await?;
/// Chart::builder()
///     .dataset(&dataset)
///     .layout(ChartLayout::standard())
///     .build()
///     .write_page(Path::new("heat-map.html"))
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct HeatMapClient {
    loader: DatasetLoader,
}

#[bon]
impl HeatMapClient {
    pub fn new() -> Self {
        Self {
            loader: DatasetLoader::new(),
        }
    }

    /// Uses a preconfigured HTTP client (proxy, TLS, timeouts).
    pub fn with_http_client(client: reqwest::Client) -> Self {
        Self {
            loader: DatasetLoader::with_client(client),
        }
    }

    /// Downloads the dataset.
    ///
    /// * `.url(&str)`: Optional. Where to fetch from. Defaults to
    ///   [`DEFAULT_DATA_URL`].
    ///
    /// # Errors
    ///
    /// [`HeatMapError::Dataset`] if the request fails, the server answers with
    /// an error status, or the body is not a dataset document.
    #[builder]
    pub async fn fetch(&self, url: Option<&str>) -> Result<Dataset, HeatMapError> {
        let url = url.unwrap_or(DEFAULT_DATA_URL);
        Ok(self.loader.fetch(url).await?)
    }

    /// Reads a dataset previously saved as JSON.
    pub async fn load_file(&self, path: &Path) -> Result<Dataset, HeatMapError> {
        Ok(self.loader.load_file(path).await?)
    }

    /// Fetches the dataset and renders the full page with `layout`.
    #[builder]
    pub async fn render_page(
        &self,
        url: Option<&str>,
        layout: Option<ChartLayout>,
    ) -> Result<String, HeatMapError> {
        let dataset = self.fetch().maybe_url(url).call().await?;
        Ok(Chart::builder()
            .dataset(&dataset)
            .layout(layout.unwrap_or_default())
            .build()
            .render_page())
    }
}

impl Default for HeatMapClient {
    fn default() -> Self {
        Self::new()
    }
}
