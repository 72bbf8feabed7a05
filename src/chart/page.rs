//! Self-contained HTML page around the chart.
//!
//! The page embeds its CSS and a short script that drives the tooltip, so it
//! works from disk with no external assets.

use crate::chart::svg::html_escape;
use crate::chart::tooltip::{Tooltip, OFFSET_ABOVE, OFFSET_BELOW, OFFSET_X};
use crate::chart::Chart;
use crate::error::HeatMapError;
use log::info;
use std::path::Path;
use tokio::fs;

pub const TITLE: &str = "Monthly Global Land-Surface Temperature";

impl Chart<'_> {
    /// Full HTML document: optional title block, the SVG and the tooltip.
    pub fn render_page(&self) -> String {
        let titles = if self.layout().show_titles {
            render_titles(self.dataset().base_temperature)
        } else {
            String::new()
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    {titles}
    <div id="heat-map">{svg}{tooltip}</div>
    <script>{js}</script>
</body>
</html>
"#,
            title = html_escape(TITLE),
            css = inline_css(),
            titles = titles,
            svg = self.render_svg(),
            tooltip = Tooltip::new().render(),
            js = inline_javascript(),
        )
    }

    /// Renders the page and writes it to `path`.
    pub async fn write_page(&self, path: &Path) -> Result<(), HeatMapError> {
        let page = self.render_page();
        fs::write(path, page.as_bytes())
            .await
            .map_err(|e| HeatMapError::PageWrite(path.to_path_buf(), e))?;
        info!("Wrote {} bytes to {}", page.len(), path.display());
        Ok(())
    }
}

fn render_titles(base_temperature: f64) -> String {
    format!(
        r#"<h1 id="title"><text>{}</text></h1>
    <h3 id="description"><text>Base Temperature: {}</text></h3>"#,
        html_escape(TITLE),
        base_temperature
    )
}

fn inline_css() -> &'static str {
    r#"
body {
    font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
    text-align: center;
    color: #111827;
}

#heat-map {
    display: inline-block;
}

.cell:hover {
    stroke: #111827;
    stroke-width: 1;
}

#tooltip {
    position: absolute;
    padding: 0.5rem 0.75rem;
    background: rgba(17, 24, 39, 0.85);
    color: #ffffff;
    font-size: 0.875rem;
    line-height: 1.4;
    border-radius: 4px;
    pointer-events: none;
}
"#
}

fn inline_javascript() -> String {
    format!(
        r#"
(function () {{
    var tooltip = document.getElementById('tooltip');
    document.querySelectorAll('#heat-map rect.cell').forEach(function (cell) {{
        cell.addEventListener('mouseover', function (e) {{
            tooltip.innerHTML = cell.dataset.tooltip;
            tooltip.setAttribute('data-year', cell.dataset.year);
            tooltip.style.visibility = 'visible';
            tooltip.style.left = (e.pageX - {x}) + 'px';
            var above = e.pageY - {above};
            tooltip.style.top = (above < 1 ? e.pageY + {below} : above) + 'px';
        }});
        cell.addEventListener('mouseout', function () {{
            tooltip.style.visibility = 'hidden';
        }});
    }});
}})();
"#,
        x = OFFSET_X,
        above = OFFSET_ABOVE,
        below = OFFSET_BELOW,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::layout::ChartLayout;
    use crate::types::dataset::{Dataset, MonthlyVariance};

    fn dataset() -> Dataset {
        Dataset {
            base_temperature: 8.66,
            monthly_variance: vec![
                MonthlyVariance {
                    year: 1753,
                    month: 1,
                    variance: -6.1,
                },
                MonthlyVariance {
                    year: 1753,
                    month: 2,
                    variance: 2.3,
                },
            ],
        }
    }

    #[test]
    fn standard_page_has_titles_and_single_tooltip() {
        let data = dataset();
        let page = Chart::builder().dataset(&data).build().render_page();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains(r#"<h1 id="title"><text>Monthly Global Land-Surface Temperature</text></h1>"#));
        assert!(page.contains("Base Temperature: 8.66"));
        assert_eq!(page.matches(r#"id="tooltip""#).count(), 1);
        assert!(page.contains("visibility: hidden;"));
        assert_eq!(page.matches(r#"class="cell""#).count(), 2);
    }

    #[test]
    fn compact_page_omits_titles() {
        let data = dataset();
        let page = Chart::builder()
            .dataset(&data)
            .layout(ChartLayout::compact())
            .build()
            .render_page();
        assert!(!page.contains(r#"id="title""#));
        assert!(!page.contains(r#"id="description""#));
        assert!(page.contains(r#"id="heat-map""#));
    }

    #[test]
    fn script_uses_tooltip_offsets() {
        let js = inline_javascript();
        assert!(js.contains("e.pageX - 50"));
        assert!(js.contains("e.pageY - 92"));
        assert!(js.contains("e.pageY + 18"));
    }

    #[tokio::test]
    async fn writes_page_to_disk() -> Result<(), HeatMapError> {
        let data = dataset();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("heat-map.html");
        let chart = Chart::builder().dataset(&data).build();
        chart.write_page(&path).await?;
        let written = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(written, chart.render_page());
        Ok(())
    }

    #[tokio::test]
    async fn write_failure_names_the_path() {
        let data = dataset();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("heat-map.html");
        let err = Chart::builder()
            .dataset(&data)
            .build()
            .write_page(&path)
            .await
            .unwrap_err();
        match err {
            HeatMapError::PageWrite(p, _) => assert_eq!(p, path),
            other => panic!("Expected PageWrite, got {other:?}"),
        }
    }
}
