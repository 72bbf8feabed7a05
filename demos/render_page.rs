//! demos/render_page.rs
//!
//! Fetches the temperature dataset and writes both chart presets to disk.
//!
//! To run this example:
//! RUST_LOG=info cargo run --example render_page -- [output-dir]

use std::error::Error;
use std::path::PathBuf;

use temperature_heatmap::{Chart, ChartLayout, HeatMapClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let client = HeatMapClient::new();
    let dataset = client.fetch().call().await?;
    println!(
        "Fetched {} monthly records, base temperature {}",
        dataset.len(),
        dataset.base_temperature
    );

    for (name, layout) in [
        ("heat-map.html", ChartLayout::standard()),
        ("heat-map-compact.html", ChartLayout::compact()),
    ] {
        let path = out_dir.join(name);
        Chart::builder()
            .dataset(&dataset)
            .layout(layout)
            .build()
            .write_page(&path)
            .await?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}
