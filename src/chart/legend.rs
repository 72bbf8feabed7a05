use crate::chart::axis::{Axis, Orient};
use crate::chart::layout::ChartLayout;
use crate::chart::scale::BandScale;
use crate::chart::svg::{num, translate};
use crate::types::color::{legend_bounds, COLOR_BUCKETS};

/// Swatch strip plus the axis labelling the bucket boundaries.
pub fn render_legend(layout: &ChartLayout) -> String {
    let mut out = format!(r#"<g width="{}" id="legend">"#, num(layout.legend_width));

    let swatch_x = layout.padding * 1.35;
    let swatch_y = layout.height + 25.0;
    for (i, bucket) in COLOR_BUCKETS.iter().enumerate() {
        out.push_str(&format!(
            r#"<g transform="{}"><rect x="{}" y="{}" width="{}" height="{}" fill="{}"></rect></g>"#,
            translate(layout.legend_slot() * i as f64, 0.0),
            num(swatch_x),
            num(swatch_y),
            num(layout.legend_swatch_size),
            num(layout.legend_swatch_size),
            bucket.color
        ));
    }

    let range = (0.0, layout.legend_width + 5.0);
    let scale = BandScale::new(legend_bounds(), range);
    let axis = Axis::bands(&scale, range, Orient::Bottom, |bound| format!("{}", bound));
    out.push_str(&axis.render(
        None,
        (layout.padding, layout.height + layout.padding + 15.0),
    ));

    out.push_str("</g>");
    out
}
