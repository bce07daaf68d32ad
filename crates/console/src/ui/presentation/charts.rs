//! SVG chart geometry for the statistics view.
//!
//! Pure coordinate math; the views feed the results into `polyline`,
//! `path` and `rect` elements.

use std::f64::consts::TAU;

/// Colors used across the three charts, matching the decision chips
pub const COLOR_APPROVED: &str = "#2e7d32";
pub const COLOR_REJECTED: &str = "#c62828";
pub const COLOR_CHANGES: &str = "#f9a825";

/// Points attribute for a `polyline`, values scaled to `max_value`.
///
/// The first value sits at x = 0, the last at x = width; y grows downward
/// in SVG, so larger values map to smaller y.
pub fn polyline_points(values: &[u64], max_value: u64, width: f64, height: f64) -> String {
    if values.is_empty() {
        return String::new();
    }
    let max = max_value.max(1) as f64;
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = i as f64 * step;
            let y = height - (*v as f64 / max) * height;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One pie slice as an SVG path with its share of the total
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub path: String,
    pub fraction: f64,
}

/// Slice the pie in the order the values are given, starting at 12 o'clock.
///
/// Zero values produce no slice. A single non-zero value covers the whole
/// circle.
pub fn pie_slices(values: &[u64], radius: f64) -> Vec<PieSlice> {
    let total: u64 = values.iter().sum();
    if total == 0 {
        return Vec::new();
    }
    let (cx, cy) = (radius, radius);
    let point = |angle: f64| {
        (
            cx + radius * angle.cos(),
            cy + radius * angle.sin(),
        )
    };

    let mut slices = Vec::new();
    let mut start = -TAU / 4.0;
    for value in values {
        if *value == 0 {
            continue;
        }
        let fraction = *value as f64 / total as f64;
        if (fraction - 1.0).abs() < f64::EPSILON {
            // Full circle; a single arc of 360 degrees collapses, so draw
            // two half circles.
            let (x0, y0) = point(start);
            let (x1, y1) = point(start + TAU / 2.0);
            let path = format!(
                "M {x0:.2} {y0:.2} \
                 A {radius:.2} {radius:.2} 0 1 1 {x1:.2} {y1:.2} \
                 A {radius:.2} {radius:.2} 0 1 1 {x0:.2} {y0:.2} Z"
            );
            slices.push(PieSlice { path, fraction });
            break;
        }
        let end = start + fraction * TAU;
        let (x0, y0) = point(start);
        let (x1, y1) = point(end);
        let large_arc = i32::from(fraction > 0.5);
        let path = format!(
            "M {cx:.2} {cy:.2} L {x0:.2} {y0:.2} \
             A {radius:.2} {radius:.2} 0 {large_arc} 1 {x1:.2} {y1:.2} Z"
        );
        slices.push(PieSlice { path, fraction });
        start = end;
    }
    slices
}

/// Rounded percentage label for a chart legend
pub fn percent(value: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    ((value as f64 / total as f64) * 100.0).round() as u32
}

/// One bar of the category chart
#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Evenly slotted bars scaled to the tallest value.
pub fn bar_rects(values: &[u64], width: f64, height: f64) -> Vec<BarRect> {
    if values.is_empty() {
        return Vec::new();
    }
    let max = values.iter().copied().max().unwrap_or(0).max(1) as f64;
    let slot = width / values.len() as f64;
    let bar_width = slot * 0.6;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let bar_height = (*v as f64 / max) * height;
            BarRect {
                x: i as f64 * slot + slot * 0.2,
                y: height - bar_height,
                width: bar_width,
                height: bar_height,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polyline_spans_the_full_width() {
        let points = polyline_points(&[0, 5, 10], 10, 100.0, 50.0);
        assert_eq!(points, "0.0,50.0 50.0,25.0 100.0,0.0");
    }

    #[test]
    fn polyline_handles_empty_and_flat_series() {
        assert_eq!(polyline_points(&[], 10, 100.0, 50.0), "");
        // All-zero series with zero max must not divide by zero.
        assert_eq!(polyline_points(&[0], 0, 100.0, 50.0), "0.0,50.0");
    }

    #[test]
    fn pie_fractions_sum_to_one_and_skip_zeros() {
        let slices = pie_slices(&[70, 30, 0], 50.0);
        assert_eq!(slices.len(), 2);
        let total: f64 = slices.iter().map(|s| s.fraction).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!(slices[0].fraction > slices[1].fraction);
    }

    #[test]
    fn single_value_pie_covers_the_circle() {
        let slices = pie_slices(&[0, 12, 0], 50.0);
        assert_eq!(slices.len(), 1);
        assert!((slices[0].fraction - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn percent_rounds_and_survives_zero_total() {
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(5, 0), 0);
    }

    #[test]
    fn bars_scale_to_the_tallest_value() {
        let bars = bar_rects(&[5, 10], 100.0, 80.0);
        assert_eq!(bars.len(), 2);
        assert!((bars[0].height - 40.0).abs() < 1e-9);
        assert!((bars[1].height - 80.0).abs() < 1e-9);
        assert!((bars[1].y - 0.0).abs() < 1e-9);
    }
}
