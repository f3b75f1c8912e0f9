use std::path::Path;

use nmr_helper::data::export;
use nmr_helper::{AnalysisEngine, AnalysisResult, Modality, ReferenceEntry};

use crate::color::ColorMap;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Raw text in the shift input box.
    pub input: String,

    /// Selected reference table.
    pub modality: Modality,

    /// Result of the last Analyze click (None until the first one).
    pub result: Option<AnalysisResult>,

    /// Colours for the selected modality's reference entries.
    pub color_map: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    engine: AnalysisEngine<'static>,
}

impl Default for AppState {
    fn default() -> Self {
        let mut state = Self {
            input: String::new(),
            modality: Modality::default(),
            result: None,
            color_map: ColorMap::default(),
            status_message: None,
            engine: AnalysisEngine::default(),
        };
        state.rebuild_color_map();
        state
    }
}

impl AppState {
    /// Modalities offered by the selector.
    pub fn modalities(&self) -> Vec<Modality> {
        self.engine.table().modalities().collect()
    }

    /// Reference entries of the selected modality (empty if unknown to the table).
    pub fn entries(&self) -> &'static [ReferenceEntry] {
        self.engine.table().lookup(self.modality).unwrap_or(&[])
    }

    /// Switch modality; a previous result is re-run against the new table.
    pub fn set_modality(&mut self, modality: Modality) {
        if self.modality == modality {
            return;
        }
        self.modality = modality;
        self.rebuild_color_map();
        if self.result.is_some() {
            self.run_analysis();
        }
    }

    pub fn rebuild_color_map(&mut self) {
        self.color_map = ColorMap::new(self.entries());
    }

    /// Classify the current input against the selected modality.
    pub fn run_analysis(&mut self) {
        match self.engine.analyze(self.input.trim(), self.modality) {
            Ok(result) => {
                log::info!(
                    "Analyzed {} shifts ({} matched) with {}",
                    result.len(),
                    result.matched_count(),
                    self.modality
                );
                self.result = Some(result);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Analysis failed: {e}");
                self.result = None;
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Replace the input with the contents of a shift-list file.
    pub fn load_input(&mut self, path: &Path) {
        match export::load_shift_text(path) {
            Ok(text) => {
                log::info!("Loaded shift list from {}", path.display());
                self.input = text;
                self.result = None;
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Export the current result.
    pub fn save_result(&mut self, path: &Path) {
        let Some(result) = &self.result else {
            self.status_message = Some("Nothing to save – run Analyze first".to_string());
            return;
        };
        match export::save_result(path, result) {
            Ok(()) => {
                log::info!("Saved result to {}", path.display());
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to save result: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
