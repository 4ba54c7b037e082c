//! Skills radar chart rendered as SVG from a precomputed [`RadarDrawing`].
//!
//! ARCHITECTURE
//! ============
//! Geometry lives in `util::radar`; this component only maps the drawing to
//! markup. Colors come from CSS custom properties, so a theme switch only
//! needs a re-render to pick up the new values.

#[cfg(test)]
#[path = "radar_chart_test.rs"]
mod radar_chart_test;

use leptos::prelude::*;

use crate::util::radar::{RadarDrawing, fmt_coord};

pub const SVG_CLASS: &str = "radar-svg";
const GRID_STROKE: &str = "var(--border-color)";
const AREA_COLOR: &str = "var(--primary-color)";
const MARKER_RADIUS: &str = "4";

/// SVG for a radar chart.
#[component]
pub fn RadarChart(drawing: RadarDrawing) -> impl IntoView {
    let view_box = view_box(&drawing);
    let cx = fmt_coord(drawing.center.x);
    let cy = fmt_coord(drawing.center.y);

    let rings = drawing
        .rings
        .iter()
        .map(|r| {
            view! {
                <circle
                    cx=cx.clone()
                    cy=cy.clone()
                    r=fmt_coord(*r)
                    fill="none"
                    stroke=GRID_STROKE
                    stroke-width="1"
                    opacity="0.3"
                />
            }
        })
        .collect_view();

    let spokes = drawing
        .spokes
        .iter()
        .map(|p| {
            view! {
                <line
                    x1=cx.clone()
                    y1=cy.clone()
                    x2=fmt_coord(p.x)
                    y2=fmt_coord(p.y)
                    stroke=GRID_STROKE
                    stroke-width="1"
                    opacity="0.3"
                />
            }
        })
        .collect_view();

    let markers = drawing
        .markers
        .iter()
        .map(|p| {
            view! {
                <circle
                    cx=fmt_coord(p.x)
                    cy=fmt_coord(p.y)
                    r=MARKER_RADIUS
                    fill=AREA_COLOR
                    stroke="white"
                    stroke-width="2"
                />
            }
        })
        .collect_view();

    view! {
        <svg class=SVG_CLASS viewBox=view_box role="img" aria-label="Skill proficiency radar chart">
            {rings}
            {spokes}
            <path
                d=drawing.outline.clone()
                fill=AREA_COLOR
                fill-opacity="0.2"
                stroke=AREA_COLOR
                stroke-width="2"
            />
            {markers}
        </svg>
    }
}

/// `viewBox` covering a square chart around `drawing.center`.
pub fn view_box(drawing: &RadarDrawing) -> String {
    let size = fmt_coord(drawing.center.x * 2.0);
    let height = fmt_coord(drawing.center.y * 2.0);
    format!("0 0 {size} {height}")
}

/// Holds the chart currently on the page.
///
/// Theme changes redraw only a chart that is already mounted; the first draw
/// belongs to the entrance trigger.
#[derive(Debug)]
pub struct ChartSlot<M> {
    mounted: Option<M>,
}

impl<M> Default for ChartSlot<M> {
    fn default() -> Self {
        Self { mounted: None }
    }
}

impl<M> ChartSlot<M> {
    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Drop the current chart, then store whatever `mount` produces.
    pub fn replace(&mut self, mount: impl FnOnce() -> Option<M>) {
        self.mounted.take();
        self.mounted = mount();
    }

    pub fn clear(&mut self) {
        self.mounted.take();
    }
}

/// Mounted chart; unmounts when dropped.
#[cfg(feature = "csr")]
pub struct MountedChart {
    _handle: Box<dyn std::any::Any>,
}

/// Render `drawing` into `container`, replacing any previously drawn chart.
#[cfg(feature = "csr")]
pub fn mount(container: &web_sys::Element, drawing: RadarDrawing) -> Option<MountedChart> {
    use wasm_bindgen::JsCast;

    let existing = container.query_selector_all(&format!(".{SVG_CLASS}")).ok()?;
    for idx in 0..existing.length() {
        if let Some(node) = existing.item(idx).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
            node.remove();
        }
    }
    let parent = container.clone().dyn_into::<web_sys::HtmlElement>().ok()?;
    let handle = leptos::mount::mount_to(parent, move || view! { <RadarChart drawing=drawing /> });
    Some(MountedChart {
        _handle: Box::new(handle),
    })
}
