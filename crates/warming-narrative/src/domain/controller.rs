//! The narrative controller: the only stateful component.

use tracing::{info, warn};
use warming_chart::chart::{ChartRequest, build_chart};
use warming_chart::surface::DisplaySurface;
use warming_core::record::TemperatureRecord;
use warming_data::dataset::Dataset;

use super::scenes::{SCENE_COUNT, SceneConfig, default_scenes};

/// Owns the dataset, the scene catalog, the current scene index, and the
/// display surface. Every navigation command re-renders.
///
/// The controller is not synchronised; callers serialise access to it.
#[derive(Debug)]
pub struct NarrativeController<S: DisplaySurface> {
    dataset: Dataset,
    scenes: [SceneConfig; SCENE_COUNT],
    scene_index: usize,
    notice: Option<String>,
    surface: S,
}

impl<S: DisplaySurface> NarrativeController<S> {
    /// Builds the GISTEMP dataset from `raw`, starts at the first scene, and
    /// renders it. No GISTEMP rows yields an empty chart, not an error.
    pub fn initialize(raw: Vec<TemperatureRecord>, surface: S) -> Self {
        let raw_count = raw.len();
        let dataset = Dataset::from_records(raw);
        if dataset.is_empty() {
            warn!(raw_count, "no GISTEMP records in loaded data");
        }
        info!(raw_count, records = dataset.len(), "narrative dataset ready");

        Self::start(dataset, None, surface)
    }

    /// Starts the narrative without data after a failed load. Every scene
    /// renders an empty chart carrying `reason` as a visible notice.
    pub fn unavailable(reason: impl Into<String>, surface: S) -> Self {
        let notice = format!("Data unavailable: {}", reason.into());
        warn!(%notice, "narrative starting without data");

        Self::start(Dataset::empty(), Some(notice), surface)
    }

    fn start(dataset: Dataset, notice: Option<String>, surface: S) -> Self {
        let mut controller = Self {
            dataset,
            scenes: default_scenes(),
            scene_index: 0,
            notice,
            surface,
        };
        controller.render();
        controller
    }

    /// Moves to the next scene, saturating at the last, and re-renders.
    /// Returns the new scene index.
    pub fn advance(&mut self) -> usize {
        self.scene_index = (self.scene_index + 1).min(SCENE_COUNT - 1);
        self.render();
        self.scene_index
    }

    /// Moves to the previous scene, saturating at the first, and re-renders.
    /// Returns the new scene index.
    pub fn retreat(&mut self) -> usize {
        self.scene_index = self.scene_index.saturating_sub(1);
        self.render();
        self.scene_index
    }

    /// Clears the surface and draws the current scene's data window.
    pub fn render(&mut self) {
        self.surface.clear();

        let scene = &self.scenes[self.scene_index];
        let window = self.dataset.window(&scene.window);
        if window.is_empty() && !self.dataset.is_empty() {
            warn!(scene_index = self.scene_index, window = ?scene.window, "scene window is empty");
        }

        let request = ChartRequest::new(&window, &scene.title, &scene.subtitle)
            .fallback(self.dataset.records())
            .annotations(&scene.annotations)
            .tooltip(scene.tooltip_enabled)
            .notice(self.notice.as_deref());
        let chart = build_chart(&request);

        self.surface.present(&chart);
        info!(
            scene_index = self.scene_index,
            records = window.len(),
            "rendered scene"
        );
    }

    /// Zero-based index of the current scene.
    #[must_use]
    pub fn scene_index(&self) -> usize {
        self.scene_index
    }

    /// Number of scenes.
    #[must_use]
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// Configuration of the current scene.
    #[must_use]
    pub fn current_scene(&self) -> &SceneConfig {
        &self.scenes[self.scene_index]
    }

    /// The full scene catalog.
    #[must_use]
    pub fn scenes(&self) -> &[SceneConfig] {
        &self.scenes
    }

    /// Records shown by the current scene.
    #[must_use]
    pub fn current_window(&self) -> Vec<TemperatureRecord> {
        self.dataset.window(&self.current_scene().window)
    }

    /// The GISTEMP dataset.
    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Load-failure notice, if the narrative started without data.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// The display surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }
}
