//! Hover tooltip: its text, where it goes, and whether it is showing.

use crate::chart::cells::Cell;
use crate::chart::layout::TooltipFormat;
use crate::chart::svg::html_escape;
use crate::types::calendar::Year;
use crate::types::dataset::TemperatureRecord;

/// Horizontal shift from the pointer to the tooltip's left edge.
pub const OFFSET_X: f64 = 50.0;
/// Distance above the pointer the tooltip normally sits.
pub const OFFSET_ABOVE: f64 = 92.0;
/// Distance below the pointer when there is no room above.
pub const OFFSET_BELOW: f64 = 18.0;

/// Keeps at most one digit after the decimal point, without rounding.
///
/// Works on the shortest decimal form of the value, so `2.5600000000000005`
/// becomes `2.5` and `-0.57` becomes `-0.5`. Whole numbers are untouched.
pub fn truncate_temperature(temp: f64) -> String {
    let text = temp.to_string();
    match text.find('.') {
        Some(dot) => text[..(dot + 2).min(text.len())].to_string(),
        None => text,
    }
}

/// Tooltip markup for a record. May contain `<br>` line breaks.
pub fn tooltip_text(record: &TemperatureRecord, format: TooltipFormat) -> String {
    match format {
        TooltipFormat::Detailed => format!(
            "{} - {}<br>{}º Celsius<br>Variance: {}",
            record.month.name(),
            record.year,
            truncate_temperature(record.temp),
            record.variance
        ),
        TooltipFormat::Brief => format!("{}º Celsius", record.temp),
    }
}

/// Pointer location in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub page_x: f64,
    pub page_y: f64,
}

/// Tooltip box placement in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipPosition {
    pub left: f64,
    pub top: f64,
}

impl TooltipPosition {
    /// Places the tooltip above and left of the pointer, flipping below it
    /// when it would end up above the top of the page.
    pub fn from_pointer(pointer: Pointer) -> Self {
        let above = pointer.page_y - OFFSET_ABOVE;
        let top = if above < 1.0 {
            pointer.page_y + OFFSET_BELOW
        } else {
            above
        };
        Self {
            left: pointer.page_x - OFFSET_X,
            top,
        }
    }
}

/// The single tooltip overlay of a chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tooltip {
    visible: bool,
    html: String,
    year: Option<Year>,
    position: Option<TooltipPosition>,
}

impl Tooltip {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer entered `cell`.
    pub fn show(&mut self, cell: &Cell, pointer: Pointer) {
        self.visible = true;
        self.html = cell.tooltip.clone();
        self.year = Some(cell.record.year);
        self.position = Some(TooltipPosition::from_pointer(pointer));
    }

    /// Pointer left the cell. Content and position are kept.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn year(&self) -> Option<Year> {
        self.year
    }

    pub fn position(&self) -> Option<TooltipPosition> {
        self.position
    }

    /// The overlay element in its current state.
    pub fn render(&self) -> String {
        let visibility = if self.visible { "visible" } else { "hidden" };
        let mut style = format!("visibility: {visibility};");
        if let Some(pos) = self.position {
            style.push_str(&format!(" left: {}px; top: {}px;", pos.left, pos.top));
        }
        let year = self
            .year
            .map(|y| format!(r#" data-year="{}""#, y))
            .unwrap_or_default();
        // Content is our own markup (line breaks), so it is not escaped here.
        format!(
            r#"<div id="tooltip" class="d3-tip"{year} style="{style}">{html}</div>"#,
            year = year,
            style = html_escape(&style),
            html = self.html,
        )
    }
}
