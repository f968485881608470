//! The fixed scene catalog.

use serde::Serialize;
use warming_chart::chart::Annotation;
use warming_data::window::DataWindow;

/// Number of scenes in the narrative.
pub const SCENE_COUNT: usize = 3;

/// First year shown by the zoomed-in scenes.
pub const RECENT_ERA_START: i32 = 1980;

/// How one scene renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneConfig {
    /// Chart title.
    pub title: String,
    /// Chart subtitle.
    pub subtitle: String,
    /// Which records the scene shows.
    pub window: DataWindow,
    /// Callouts, in drawing order.
    pub annotations: Vec<Annotation>,
    /// Whether data points show hover tooltips.
    pub tooltip_enabled: bool,
}

/// The three scenes, in narrative order.
#[must_use]
pub fn default_scenes() -> [SceneConfig; SCENE_COUNT] {
    [
        SceneConfig {
            title: "Scene 1 – Global Temperature Anomalies (1900–2020)".to_owned(),
            subtitle: "Overall warming trend over the 20th century and beyond".to_owned(),
            window: DataWindow::All,
            annotations: Vec::new(),
            tooltip_enabled: false,
        },
        SceneConfig {
            title: "Scene 2 – Rapid Warming (1980–2020)".to_owned(),
            subtitle: "Zoomed in view shows recent temperature spikes".to_owned(),
            window: DataWindow::FromYear {
                year: RECENT_ERA_START,
            },
            annotations: Vec::new(),
            tooltip_enabled: false,
        },
        SceneConfig {
            title: "Scene 3 – Policy Milestones and Warming".to_owned(),
            subtitle: "Highlighting major climate events and agreements".to_owned(),
            window: DataWindow::FromYear {
                year: RECENT_ERA_START,
            },
            annotations: vec![
                Annotation::new(
                    "1988",
                    "Hansen Testimony to US Congress",
                    (1988, 0.4),
                    (50.0, -60.0),
                ),
                Annotation::new("1997", "Kyoto Protocol Signed", (1997, 0.6), (-60.0, -40.0)),
                Annotation::new("2015", "Paris Agreement Adopted", (2015, 1.0), (60.0, -70.0)),
            ],
            tooltip_enabled: true,
        },
    ]
}
