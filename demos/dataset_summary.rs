//! demos/dataset_summary.rs
//!
//! Prints the year span, temperature extremes and how many months fall into
//! each color bucket.

use std::error::Error;

use temperature_heatmap::{bucket_color, HeatMapClient, COLOR_BUCKETS, FALLBACK_COLOR};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let dataset = HeatMapClient::new().fetch().call().await?;

    if let Some((first, last)) = dataset.year_extent() {
        println!("Years: {} - {}", first, last);
    }
    if let Some((coldest, warmest)) = dataset.temperature_extent() {
        println!("Temperature: {:.2}°C - {:.2}°C", coldest, warmest);
    }

    let colors: Vec<_> = dataset.records().map(|r| bucket_color(r.temp)).collect();
    for bucket in &COLOR_BUCKETS {
        let count = colors.iter().filter(|c| **c == bucket.color).count();
        println!(
            ">= {:>4}°C  {:<20} {}",
            bucket.lower_bound,
            bucket.color.to_string(),
            count
        );
    }
    let below = colors.iter().filter(|c| **c == FALLBACK_COLOR).count();
    println!(" < {:>4}°C  {:<20} {}", 2.8, FALLBACK_COLOR.to_string(), below);

    Ok(())
}
