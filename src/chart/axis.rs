//! Axis markup: a domain line plus one labelled tick per value.

use crate::chart::scale::{BandScale, LinearScale};
use crate::chart::svg::{html_escape, num, translate};
use crate::types::calendar::Month;

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub offset: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub orient: Orient,
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
}

impl Axis {
    /// Horizontal year axis with integer labels.
    pub fn years(scale: &LinearScale, count: usize) -> Self {
        let ticks = scale
            .ticks(count)
            .into_iter()
            .map(|value| Tick {
                offset: scale.map(value),
                label: format!("{}", value.round() as i64),
            })
            .collect();
        Self {
            orient: Orient::Bottom,
            range: scale.range(),
            ticks,
        }
    }

    /// Vertical month axis, one tick per band, full month names.
    pub fn months(scale: &BandScale<Month>, range: (f64, f64)) -> Self {
        Self::bands(scale, range, Orient::Left, |month| month.name())
    }

    /// Any band scale, ticks centered on each band.
    pub fn bands<K: PartialEq>(
        scale: &BandScale<K>,
        range: (f64, f64),
        orient: Orient,
        label: impl Fn(&K) -> String,
    ) -> Self {
        let ticks = scale
            .domain()
            .iter()
            .filter_map(|key| {
                scale.center(key).map(|offset| Tick {
                    offset,
                    label: label(key),
                })
            })
            .collect();
        Self {
            orient,
            range,
            ticks,
        }
    }

    /// Renders the axis as a `<g>` element.
    pub fn render(&self, id: Option<&str>, offset: (f64, f64)) -> String {
        let (r0, r1) = self.range;
        let (anchor, domain) = match self.orient {
            Orient::Bottom => (
                "middle",
                format!("M{},{}V0H{}V{}", num(r0), TICK_SIZE, num(r1), TICK_SIZE),
            ),
            Orient::Left => (
                "end",
                format!("M-{},{}H0V{}H-{}", TICK_SIZE, num(r0), num(r1), TICK_SIZE),
            ),
        };
        let id_attr = id
            .map(|id| format!(r#" id="{}""#, html_escape(id)))
            .unwrap_or_default();

        let mut out = format!(
            r#"<g transform="{}" fill="none" font-size="10" font-family="sans-serif" text-anchor="{}"{}>"#,
            translate(offset.0, offset.1),
            anchor,
            id_attr
        );
        out.push_str(&format!(
            r#"<path class="domain" stroke="currentColor" d="{}"></path>"#,
            domain
        ));
        for tick in &self.ticks {
            out.push_str(&self.render_tick(tick));
        }
        out.push_str("</g>");
        out
    }

    fn render_tick(&self, tick: &Tick) -> String {
        let label = html_escape(&tick.label);
        match self.orient {
            Orient::Bottom => format!(
                r#"<g class="tick" opacity="1" transform="{}"><line stroke="currentColor" y2="{}"></line><text fill="currentColor" y="{}" dy="0.71em">{}</text></g>"#,
                translate(tick.offset, 0.0),
                TICK_SIZE,
                TICK_SIZE + TICK_PADDING,
                label
            ),
            Orient::Left => format!(
                r#"<g class="tick" opacity="1" transform="{}"><line stroke="currentColor" x2="-{}"></line><text fill="currentColor" x="-{}" dy="0.32em">{}</text></g>"#,
                translate(0.0, tick.offset),
                TICK_SIZE,
                TICK_SIZE + TICK_PADDING,
                label
            ),
        }
    }
}
