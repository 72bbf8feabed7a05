use crate::chart::layout::ChartLayout;
use crate::chart::scale::{BandScale, LinearScale};
use crate::chart::svg::{html_escape, num, translate};
use crate::chart::tooltip::tooltip_text;
use crate::types::calendar::Month;
use crate::types::color::{bucket_color, Rgb};
use crate::types::dataset::{Dataset, TemperatureRecord};

/// One colored rectangle of the heat map.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub record: TemperatureRecord,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Rgb,
    /// Pre-rendered tooltip markup shown on hover.
    pub tooltip: String,
}

impl Cell {
    pub fn to_svg(&self, padding: f64) -> String {
        format!(
            r#"<rect class="cell" data-month="{month}" data-year="{year}" data-temp="{temp}" data-tooltip="{tooltip}" fill="{fill}" width="{w}" height="{h}" x="{x}" y="{y}" transform="{transform}"></rect>"#,
            month = self.record.month.index(),
            year = self.record.year,
            temp = self.record.temp,
            tooltip = html_escape(&self.tooltip),
            fill = self.fill,
            w = num(self.width),
            h = num(self.height),
            x = num(self.x),
            y = num(self.y),
            transform = translate(padding, 0.0),
        )
    }
}

/// Lays out one cell per record, in record order.
///
/// Months outside the band scale have no row; they collapse onto the top one.
pub fn build_cells(
    dataset: &Dataset,
    layout: &ChartLayout,
    x_scale: &LinearScale,
    y_scale: &BandScale<Month>,
) -> Vec<Cell> {
    dataset
        .records()
        .map(|record| Cell {
            x: x_scale.map(f64::from(record.year.get())),
            y: y_scale.position(&record.month).unwrap_or_default(),
            width: layout.cell_width,
            height: layout.cell_height,
            fill: bucket_color(record.temp),
            tooltip: tooltip_text(&record, layout.tooltip),
            record,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Chart;
    use crate::types::calendar::Year;
    use crate::types::color::FALLBACK_COLOR;
    use crate::types::dataset::MonthlyVariance;

    fn dataset(entries: &[(i32, u32, f64)]) -> Dataset {
        Dataset {
            base_temperature: 8.66,
            monthly_variance: entries
                .iter()
                .map(|&(year, month, variance)| MonthlyVariance {
                    year,
                    month,
                    variance,
                })
                .collect(),
        }
    }

    #[test]
    fn cold_record_gets_fallback_color() {
        let data = dataset(&[(1753, 1, -6.1), (1760, 7, 1.0)]);
        let chart = Chart::builder().dataset(&data).build();
        let cells = chart.cells();
        assert_eq!(cells.len(), 2);
        let cold = &cells[0];
        assert_eq!(cold.record.temp, 8.66 + -6.1);
        assert!(cold.record.temp < 2.8);
        assert_eq!(cold.fill, FALLBACK_COLOR);
        assert_eq!(cold.record.year, Year(1753));
        assert_eq!(cold.record.month, Month(0));
    }

    #[test]
    fn cells_are_positioned_by_both_scales() {
        let data = dataset(&[(1753, 1, 0.0), (2015, 12, 0.0), (1884, 6, 0.0)]);
        let chart = Chart::builder().dataset(&data).build();
        let cells = chart.cells();
        assert_eq!(cells[0].x, 35.0);
        assert_eq!(cells[0].y, 0.0);
        assert_eq!(cells[1].x, 1300.0);
        assert_eq!(cells[1].y, 550.0);
        assert_eq!(cells[2].y, 250.0);
        assert!(cells.iter().all(|c| c.width == 8.0 && c.height == 49.0));
    }

    #[test]
    fn out_of_range_month_lands_on_top_row() {
        let data = dataset(&[(1900, 13, 0.0)]);
        let chart = Chart::builder().dataset(&data).build();
        assert_eq!(chart.cells()[0].y, 0.0);
    }

    #[test]
    fn svg_carries_data_attributes() {
        let data = dataset(&[(1753, 1, -6.1)]);
        let chart = Chart::builder().dataset(&data).build();
        let svg = chart.cells()[0].to_svg(35.0);
        assert!(svg.starts_with(r#"<rect class="cell" data-month="0" data-year="1753""#));
        assert!(svg.contains(&format!(r#"data-temp="{}""#, 8.66 + -6.1)));
        assert!(svg.contains(r#"fill="rgb(0, 115, 182)""#));
        assert!(svg.contains(r#"transform="translate(35, 0)""#));
        assert!(svg.contains("data-tooltip=\"January - 1753&lt;br&gt;"));
    }
}
