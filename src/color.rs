use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::filter::Metric;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.5);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: metric → Color32
// ---------------------------------------------------------------------------

/// A fixed colour per metric so the chart keeps a stable identity when the
/// user toggles between series.
#[derive(Debug, Clone)]
pub struct MetricColors {
    mapping: Vec<(Metric, Color32)>,
    default_color: Color32,
}

impl Default for MetricColors {
    fn default() -> Self {
        let palette = generate_palette(Metric::ALL.len());
        MetricColors {
            mapping: Metric::ALL.into_iter().zip(palette).collect(),
            default_color: Color32::LIGHT_BLUE,
        }
    }
}

impl MetricColors {
    /// Look up the colour for a given metric.
    pub fn color_for(&self, metric: Metric) -> Color32 {
        self.mapping
            .iter()
            .find(|&&(m, _)| m == metric)
            .map(|&(_, c)| c)
            .unwrap_or(self.default_color)
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_produces_distinct_colours() {
        let palette = generate_palette(Metric::ALL.len());
        assert_eq!(palette.len(), 2);
        assert_ne!(palette[0], palette[1]);
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn every_metric_has_a_colour() {
        let colors = MetricColors::default();
        assert_ne!(
            colors.color_for(Metric::ByYear),
            colors.color_for(Metric::Cumulative)
        );
    }
}
