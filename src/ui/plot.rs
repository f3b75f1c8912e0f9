use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points, VLine};

use nmr_helper::MatchRule;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Reference chart (central panel)
// ---------------------------------------------------------------------------

/// One row per reference entry (bar for a range, marker for a point) with
/// the analysed shifts drawn as vertical lines across all rows.
pub fn reference_plot(ui: &mut Ui, state: &AppState) {
    let entries = state.entries();

    Plot::new("reference_plot")
        .legend(Legend::default())
        .x_axis_label("Chemical shift (ppm)")
        .y_axis_label("Reference entry")
        .show_y(false)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (row, entry) in entries.iter().enumerate() {
                let y = row as f64;
                let color = state.color_map.color_for(&entry.label);

                match entry.rule {
                    MatchRule::Range { low, high } => {
                        let points: PlotPoints = vec![[low, y], [high, y]].into();
                        plot_ui.line(
                            Line::new(points)
                                .name(&entry.label)
                                .color(color)
                                .width(6.0),
                        );
                    }
                    MatchRule::Point { center } => {
                        plot_ui.points(
                            Points::new(vec![[center, y]])
                                .name(&entry.label)
                                .color(color)
                                .radius(5.0),
                        );
                    }
                }
            }

            if let Some(result) = &state.result {
                for shift in result.shifts() {
                    plot_ui.vline(
                        VLine::new(shift)
                            .color(Color32::WHITE)
                            .width(1.5)
                            .name(format!("{shift} ppm")),
                    );
                }
            }
        });
}
