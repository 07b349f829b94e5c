//! Sparkline - Plain-Text Chart Rendering
//!
//! Renders the adapter's visible range as a single line of block glyphs.
//! Stands in for the spark-line widget in the terminal dashboard.

use crate::chart::adapter::SparkAdapter;

const TICKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Render the adapter's visible range, downsampled to at most `max_width`
/// glyphs. Empty input renders an empty string.
pub fn render(adapter: &SparkAdapter, max_width: usize) -> String {
    let start = adapter.left_bound().unwrap_or(0);
    let values: Vec<f32> = (start..adapter.count())
        .filter_map(|index| adapter.y(index))
        .collect();
    render_values(&values, max_width)
}

fn render_values(values: &[f32], max_width: usize) -> String {
    if values.is_empty() || max_width == 0 {
        return String::new();
    }

    let stride = values.len().div_ceil(max_width).max(1);
    let sampled: Vec<f32> = values.iter().copied().step_by(stride).collect();

    let max = sampled.iter().copied().fold(f32::MIN, f32::max);
    let min = sampled.iter().copied().fold(f32::MAX, f32::min);
    let span = (max - min).max(f32::EPSILON);

    sampled
        .iter()
        .map(|value| {
            let norm = (value - min) / span;
            let index = ((norm * (TICKS.len() - 1) as f32).round() as usize).min(TICKS.len() - 1);
            TICKS[index]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_values_spans_glyph_range() {
        let line = render_values(&[0.0, 7.0], 80);
        assert_eq!(line.chars().count(), 2);
        assert_eq!(line.chars().next(), Some('▁'));
        assert_eq!(line.chars().last(), Some('█'));
    }

    #[test]
    fn test_render_values_flat_series() {
        let line = render_values(&[5.0, 5.0, 5.0], 80);
        assert_eq!(line.chars().count(), 3);
    }

    #[test]
    fn test_render_downsamples_to_width() {
        let values: Vec<f32> = (0..200).map(|v| v as f32).collect();
        let line = render_values(&values, 80);
        assert!(line.chars().count() <= 80);
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_values(&[], 80), "");
    }
}
