//! Chart geometry presets.
//!
//! The heat map ships in two flavours that differ only cosmetically: the
//! standard chart is wider, shows the title block and a detailed tooltip; the
//! compact chart is narrower, packs the legend swatches tighter and only
//! shows the temperature on hover.

/// What the tooltip shows when a cell is hovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TooltipFormat {
    /// Month, year, truncated temperature and variance.
    Detailed,
    /// Temperature only.
    Brief,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    /// Width of the plotting area in pixels.
    pub width: f64,
    /// Height of the plotting area in pixels.
    pub height: f64,
    pub padding: f64,
    pub cell_width: f64,
    pub cell_height: f64,
    pub legend_width: f64,
    /// Added to `padding` when dividing `width` into legend swatch slots.
    pub legend_spacing: f64,
    pub legend_swatch_size: f64,
    /// Number of ticks requested from the year axis.
    pub year_ticks: usize,
    pub show_titles: bool,
    pub tooltip: TooltipFormat,
}

impl ChartLayout {
    pub fn standard() -> Self {
        Self {
            width: 1300.0,
            height: 600.0,
            padding: 35.0,
            cell_width: 8.0,
            cell_height: 49.0,
            legend_width: 250.0,
            legend_spacing: 16.0,
            legend_swatch_size: 25.0,
            year_ticks: 10,
            show_titles: true,
            tooltip: TooltipFormat::Detailed,
        }
    }

    pub fn compact() -> Self {
        Self {
            width: 1100.0,
            legend_spacing: 8.0,
            show_titles: false,
            tooltip: TooltipFormat::Brief,
            ..Self::standard()
        }
    }

    /// Outer SVG width: room for the y axis labels on the left and the
    /// cells overhanging the last year on the right.
    pub fn svg_width(&self) -> f64 {
        self.width + self.padding * 4.0
    }

    /// Outer SVG height: room for the x axis and the legend underneath.
    pub fn svg_height(&self) -> f64 {
        self.height + self.padding * 2.0
    }

    /// Horizontal distance between consecutive legend swatches.
    pub fn legend_slot(&self) -> f64 {
        self.width / (self.padding + self.legend_spacing)
    }
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_dimensions() {
        let layout = ChartLayout::standard();
        assert_eq!(layout.svg_width(), 1440.0);
        assert_eq!(layout.svg_height(), 670.0);
        assert!((layout.legend_slot() - 1300.0 / 51.0).abs() < 1e-12);
        assert_eq!(ChartLayout::default(), layout);
    }

    #[test]
    fn compact_differs_only_cosmetically() {
        let standard = ChartLayout::standard();
        let compact = ChartLayout::compact();
        assert_eq!(compact.width, 1100.0);
        assert_eq!(compact.height, standard.height);
        assert_eq!(compact.cell_width, standard.cell_width);
        assert_eq!(compact.legend_slot(), 1100.0 / 43.0);
        assert!(!compact.show_titles);
        assert_eq!(compact.tooltip, TooltipFormat::Brief);
    }
}
