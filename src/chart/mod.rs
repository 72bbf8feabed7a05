//! Turns a [`Dataset`] into heat map markup.
//!
//! A [`Chart`] borrows the dataset and pairs it with a [`ChartLayout`]. Nothing
//! is cached: scales, cells and derived temperatures are recomputed on every
//! render call.

pub mod axis;
pub mod cells;
pub mod layout;
pub mod legend;
pub mod page;
pub mod scale;
pub mod svg;
pub mod tooltip;

use crate::chart::axis::Axis;
use crate::chart::cells::{build_cells, Cell};
use crate::chart::layout::ChartLayout;
use crate::chart::legend::render_legend;
use crate::chart::scale::{BandScale, LinearScale};
use crate::chart::svg::num;
use crate::types::calendar::Month;
use crate::types::dataset::Dataset;
use bon::Builder;
use log::debug;

/// A heat map over one dataset.
///
/// # Examples
///
/// ```no_run
/// use temperature_heatmap::{Chart, ChartLayout, Dataset};
///
/// # fn run(dataset: &Dataset) {
/// let chart = Chart::builder()
///     .dataset(dataset)
///     .layout(ChartLayout::compact())
///     .build();
/// let svg = chart.render_svg();
/// # }
/// ```
#[derive(Debug, Clone, Builder)]
pub struct Chart<'a> {
    dataset: &'a Dataset,
    /// Defaults to [`ChartLayout::standard`].
    #[builder(default)]
    layout: ChartLayout,
}

impl<'a> Chart<'a> {
    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    /// Years onto `[padding, width]`. An empty dataset gets a zero-width domain.
    pub fn x_scale(&self) -> LinearScale {
        let (min, max) = self
            .dataset
            .year_extent()
            .map(|(min, max)| (f64::from(min.get()), f64::from(max.get())))
            .unwrap_or((0.0, 0.0));
        LinearScale::new((min, max), (self.layout.padding, self.layout.width))
    }

    /// The twelve months onto `[0, height]`, January on top.
    pub fn y_scale(&self) -> BandScale<Month> {
        BandScale::new(Month::all().collect(), (0.0, self.layout.height))
    }

    pub fn cells(&self) -> Vec<Cell> {
        build_cells(self.dataset, &self.layout, &self.x_scale(), &self.y_scale())
    }

    fn x_axis(&self) -> Axis {
        let mut axis = Axis::years(&self.x_scale(), self.layout.year_ticks);
        if self.dataset.is_empty() {
            axis.ticks.clear();
        }
        axis
    }

    /// The `<svg>` element: axes, one cell per record, legend.
    pub fn render_svg(&self) -> String {
        let layout = &self.layout;
        let cells = self.cells();
        debug!(
            "Rendering {} cells on a {}x{} chart",
            cells.len(),
            layout.width,
            layout.height
        );

        let mut out = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" height="{}" width="{}">"#,
            num(layout.svg_height()),
            num(layout.svg_width())
        );
        out.push_str(
            &self
                .x_axis()
                .render(Some("x-axis"), (layout.padding, layout.height)),
        );
        out.push_str(
            &Axis::months(&self.y_scale(), (0.0, layout.height))
                .render(Some("y-axis"), (layout.padding * 2.0, 0.0)),
        );
        for cell in &cells {
            out.push_str(&cell.to_svg(layout.padding));
        }
        out.push_str(&render_legend(layout));
        out.push_str("</svg>");
        out
    }
}
