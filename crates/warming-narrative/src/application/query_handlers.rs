//! Query handlers for the scene navigation context.
//!
//! Read-only view DTOs over the controller state.

use serde::Serialize;
use warming_chart::chart::Annotation;
use warming_chart::surface::DisplaySurface;
use warming_data::window::DataWindow;

use crate::domain::controller::NarrativeController;

/// Read-only view of the narrative's current position.
#[derive(Debug, Serialize)]
pub struct NarrativeView {
    /// Zero-based index of the current scene.
    pub scene_index: usize,
    /// Number of scenes.
    pub scene_count: usize,
    /// Current scene title.
    pub title: String,
    /// Current scene subtitle.
    pub subtitle: String,
    /// Current data window.
    pub window: DataWindow,
    /// Records shown by the current scene.
    pub record_count: usize,
    /// Records in the full dataset.
    pub dataset_size: usize,
    /// Whether data points show hover tooltips.
    pub tooltip_enabled: bool,
    /// Current scene callouts.
    pub annotations: Vec<Annotation>,
    /// False at the last scene.
    pub can_advance: bool,
    /// False at the first scene.
    pub can_retreat: bool,
    /// Load-failure notice, if any.
    pub notice: Option<String>,
}

/// Summary of one scene in the catalog.
#[derive(Debug, Serialize)]
pub struct SceneSummary {
    /// Zero-based scene index.
    pub index: usize,
    /// Scene title.
    pub title: String,
    /// Scene subtitle.
    pub subtitle: String,
    /// Scene data window.
    pub window: DataWindow,
    /// Number of callouts.
    pub annotation_count: usize,
    /// Whether data points show hover tooltips.
    pub tooltip_enabled: bool,
}

/// Returns the view of the current scene.
#[must_use]
pub fn get_narrative<S: DisplaySurface>(controller: &NarrativeController<S>) -> NarrativeView {
    let scene = controller.current_scene();
    let index = controller.scene_index();
    NarrativeView {
        scene_index: index,
        scene_count: controller.scene_count(),
        title: scene.title.clone(),
        subtitle: scene.subtitle.clone(),
        window: scene.window,
        record_count: controller.current_window().len(),
        dataset_size: controller.dataset().len(),
        tooltip_enabled: scene.tooltip_enabled,
        annotations: scene.annotations.clone(),
        can_advance: index + 1 < controller.scene_count(),
        can_retreat: index > 0,
        notice: controller.notice().map(str::to_owned),
    }
}

/// Returns summaries of every scene, in narrative order.
#[must_use]
pub fn list_scenes<S: DisplaySurface>(controller: &NarrativeController<S>) -> Vec<SceneSummary> {
    controller
        .scenes()
        .iter()
        .enumerate()
        .map(|(index, scene)| SceneSummary {
            index,
            title: scene.title.clone(),
            subtitle: scene.subtitle.clone(),
            window: scene.window,
            annotation_count: scene.annotations.len(),
            tooltip_enabled: scene.tooltip_enabled,
        })
        .collect()
}
