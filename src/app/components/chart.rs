//! SVG line chart for a sensor's recent readings.

use dioxus::prelude::*;

use crate::views::dashboard::ChartPoint;

const WIDTH: f64 = 720.0;
const HEIGHT: f64 = 260.0;
const PAD_LEFT: f64 = 48.0;
const PAD_RIGHT: f64 = 12.0;
const PAD_Y: f64 = 20.0;
/// Axis labels shown at most
const MAX_LABELS: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub x: f64,
    pub text: String,
}

/// Chart shape in viewBox coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    /// `points` attribute of the polyline
    pub polyline: String,
    pub min: f64,
    pub max: f64,
    pub labels: Vec<AxisLabel>,
}

/// Scale points into the plot area. A flat series is drawn mid-height.
pub fn geometry(points: &[ChartPoint]) -> Option<ChartGeometry> {
    if points.is_empty() {
        return None;
    }

    let min = points.iter().map(|p| p.value).fold(f64::INFINITY, f64::min);
    let max = points.iter().map(|p| p.value).fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    let plot_w = WIDTH - PAD_LEFT - PAD_RIGHT;
    let plot_h = HEIGHT - 2.0 * PAD_Y;
    let step = if points.len() > 1 {
        plot_w / (points.len() - 1) as f64
    } else {
        0.0
    };

    let x_at = |i: usize| {
        if points.len() == 1 {
            PAD_LEFT + plot_w / 2.0
        } else {
            PAD_LEFT + step * i as f64
        }
    };
    let y_at = |v: f64| {
        if span == 0.0 {
            PAD_Y + plot_h / 2.0
        } else {
            PAD_Y + plot_h * (1.0 - (v - min) / span)
        }
    };

    let polyline = points
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{:.1},{:.1}", x_at(i), y_at(p.value)))
        .collect::<Vec<_>>()
        .join(" ");

    let every = points.len().div_ceil(MAX_LABELS).max(1);
    let labels = points
        .iter()
        .enumerate()
        .filter(|(i, _)| i % every == 0)
        .map(|(i, p)| AxisLabel {
            x: x_at(i),
            text: p.label.clone(),
        })
        .collect();

    Some(ChartGeometry {
        polyline,
        min,
        max,
        labels,
    })
}

#[component]
pub fn LineChart(points: Vec<ChartPoint>, unit: String) -> Element {
    let Some(geo) = geometry(&points) else {
        return rsx! {
            p { class: "empty", "No readings for this sensor yet" }
        };
    };

    let view_box = format!("0 0 {} {}", WIDTH, HEIGHT);
    let baseline = HEIGHT - PAD_Y;
    let right = WIDTH - PAD_RIGHT;
    let max_y = PAD_Y + 4.0;
    let label_y = HEIGHT - 4.0;
    let max_label = format!("{:.1}", geo.max);
    let min_label = format!("{:.1}", geo.min);

    rsx! {
        svg {
            class: "chart",
            view_box: "{view_box}",
            preserve_aspect_ratio: "none",
            role: "img",
            "aria-label": "Reading history ({unit})",
            line { class: "axis", x1: "{PAD_LEFT}", y1: "{PAD_Y}", x2: "{PAD_LEFT}", y2: "{baseline}" }
            line { class: "axis", x1: "{PAD_LEFT}", y1: "{baseline}", x2: "{right}", y2: "{baseline}" }
            text { class: "tick", x: "4", y: "{max_y}", "{max_label}" }
            text { class: "tick", x: "4", y: "{baseline}", "{min_label}" }
            polyline { class: "series", fill: "none", points: "{geo.polyline}" }
            for label in geo.labels.iter() {
                text {
                    key: "{label.x}",
                    class: "tick",
                    x: "{label.x}",
                    y: "{label_y}",
                    text_anchor: "middle",
                    "{label.text}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(label: &str, value: f64) -> ChartPoint {
        ChartPoint {
            label: label.to_string(),
            value,
            timestamp: String::new(),
        }
    }

    #[test]
    fn test_empty_has_no_geometry() {
        assert_eq!(geometry(&[]), None);
    }

    #[test]
    fn test_extremes_touch_plot_edges() {
        let geo = geometry(&[point("10:00", 10.0), point("10:10", 20.0)]).unwrap();
        assert_eq!(geo.polyline, "48.0,240.0 708.0,20.0");
        assert_eq!((geo.min, geo.max), (10.0, 20.0));
    }

    #[test]
    fn test_flat_series_is_centered() {
        let geo = geometry(&[point("a", 5.0), point("b", 5.0), point("c", 5.0)]).unwrap();
        assert!(geo.polyline.split(' ').all(|p| p.ends_with(",130.0")));
    }

    #[test]
    fn test_labels_are_thinned() {
        let points: Vec<_> = (0..50).map(|i| point(&format!("{i}"), i as f64)).collect();
        let geo = geometry(&points).unwrap();
        assert!(geo.labels.len() <= MAX_LABELS);
        assert_eq!(geo.labels[0].text, "0");
    }
}
