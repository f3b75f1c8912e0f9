use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use nmr_helper::ReferenceEntry;

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
            let hsl = Hsl::new(hue, 0.75, 0.55);
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
// Color mapping: reference label → Color32
// ---------------------------------------------------------------------------

/// Assigns each reference entry of one modality a distinct colour, so the
/// plot bars and the result list agree.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
}

impl ColorMap {
    pub fn new(entries: &[ReferenceEntry]) -> Self {
        let palette = generate_palette(entries.len());
        let mapping = entries
            .iter()
            .zip(palette)
            .map(|(e, c)| (e.label.clone(), c))
            .collect();
        ColorMap { mapping }
    }

    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping.get(label).copied().unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        let colors = generate_palette(7);
        assert_eq!(colors.len(), 7);
        assert_ne!(colors[0], colors[3]);
    }

    #[test]
    fn unknown_label_is_gray() {
        let entries = vec![
            ReferenceEntry::point("TMS", 0.0),
            ReferenceEntry::range("Aromatic (Ar-H)", 6.5, 8.5),
        ];
        let map = ColorMap::new(&entries);
        assert_ne!(map.color_for("TMS"), Color32::GRAY);
        assert_eq!(map.color_for("Nope"), Color32::GRAY);
    }
}
