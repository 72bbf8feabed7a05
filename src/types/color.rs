//! Fixed color buckets used to classify absolute temperatures.

use std::fmt;

/// Simple RGB color, displayed as CSS `rgb(r, g, b)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.0, self.1, self.2)
    }
}

/// A color paired with the lowest temperature (°C) it covers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorBucket {
    pub color: Rgb,
    pub lower_bound: f64,
}

const fn bucket(color: Rgb, lower_bound: f64) -> ColorBucket {
    ColorBucket { color, lower_bound }
}

/// Buckets in descending-bound order. Lookup scans top-down.
pub const COLOR_BUCKETS: [ColorBucket; 9] = [
    bucket(Rgb(163, 26, 1), 11.7),
    bucket(Rgb(224, 92, 40), 10.6),
    bucket(Rgb(255, 190, 68), 9.5),
    bucket(Rgb(255, 219, 118), 8.3),
    bucket(Rgb(255, 241, 160), 7.2),
    bucket(Rgb(153, 218, 255), 6.1),
    bucket(Rgb(96, 182, 231), 5.0),
    bucket(Rgb(32, 152, 221), 3.9),
    bucket(Rgb(0, 140, 220), 2.8),
];

/// Color for anything colder than the last bucket.
pub const FALLBACK_COLOR: Rgb = Rgb(0, 115, 182);

/// Upper edge of the warmest bucket, used only as the first legend label.
pub const LEGEND_CEILING: f64 = 12.8;

/// Returns the color of the first bucket whose bound is `<= temp`, or
/// [`FALLBACK_COLOR`] when none is. NaN never matches a bucket.
pub fn bucket_color(temp: f64) -> Rgb {
    COLOR_BUCKETS
        .iter()
        .find(|bucket| temp >= bucket.lower_bound)
        .map(|bucket| bucket.color)
        .unwrap_or(FALLBACK_COLOR)
}

/// Labels along the legend axis: the ceiling followed by every bucket bound.
pub fn legend_bounds() -> Vec<f64> {
    std::iter::once(LEGEND_CEILING)
        .chain(COLOR_BUCKETS.iter().map(|bucket| bucket.lower_bound))
        .collect()
}
