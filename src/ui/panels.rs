use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use nmr_helper::render_text;

use crate::state::AppState;

const INPUT_HINT: &str = "Enter NMR shifts (comma or line delimited, e.g. '0.9, 3.8' or '0.9\\n3.8')";

// ---------------------------------------------------------------------------
// Left side panel – input and results
// ---------------------------------------------------------------------------

/// Render the input box, modality selector, Analyze button and result text.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Shifts");
    ui.separator();

    ui.add(
        egui::TextEdit::multiline(&mut state.input)
            .hint_text(INPUT_HINT)
            .desired_rows(5)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(4.0);

    ui.strong("Reference table");
    let mut selected = state.modality;
    for modality in state.modalities() {
        ui.radio_value(&mut selected, modality, modality.name());
    }
    state.set_modality(selected);

    egui::CollapsingHeader::new(format!("{} entries", state.entries().len()))
        .id_salt("reference_entries")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            for entry in state.entries() {
                let c = state.color_map.color_for(&entry.label);
                ui.label(RichText::new(format!("{}  {}", entry.label, entry.rule)).color(c));
            }
        });

    ui.add_space(4.0);
    if ui.button("Analyze").clicked() {
        state.run_analysis();
    }
    ui.separator();

    let Some(result) = &state.result else {
        ui.label("No analysis yet.");
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for line in render_text(result).lines() {
                match line.strip_prefix("> ") {
                    Some(label) => {
                        let c = state.color_map.color_for(label);
                        ui.label(RichText::new(line).monospace().color(c));
                    }
                    None => {
                        ui.label(RichText::new(line).monospace());
                    }
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open shifts…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(state.result.is_some(), egui::Button::new("Save results…"))
                .clicked()
            {
                save_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(result) = &state.result {
            ui.label(format!(
                "{} shifts analyzed, {} with assignments ({})",
                result.len(),
                result.matched_count(),
                state.modality
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open shift list")
        .add_filter("Shift lists", &["txt", "csv"])
        .pick_file();

    if let Some(path) = file {
        state.load_input(&path);
    }
}

pub fn save_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Save analysis")
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .add_filter("Text", &["txt"])
        .set_file_name("analysis.json")
        .save_file();

    if let Some(path) = file {
        state.save_result(&path);
    }
}
