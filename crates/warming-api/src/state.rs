//! Shared application state.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::error;
use warming_chart::surface::SvgSurface;
use warming_core::error::DomainError;
use warming_core::source::RecordSource;
use warming_narrative::domain::controller::NarrativeController;

/// The narrative controller, rendering onto an SVG surface.
pub type Narrative = NarrativeController<SvgSurface>;

/// Application state shared across all request handlers.
///
/// The mutex serialises navigation so the controller sees one logical
/// event thread.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The single narrative controller.
    pub narrative: Arc<Mutex<Narrative>>,
}

impl AppState {
    /// Create new application state around an initialised controller.
    #[must_use]
    pub fn new(narrative: Narrative) -> Self {
        Self {
            narrative: Arc::new(Mutex::new(narrative)),
        }
    }

    /// Loads records from `source` once and renders the first scene. A failed
    /// load is logged and the narrative starts with an unavailable notice.
    pub async fn load(source: &dyn RecordSource) -> Self {
        let narrative = match source.load().await {
            Ok(records) => NarrativeController::initialize(records, SvgSurface::new()),
            Err(e) => {
                error!(error = %e, "failed to load temperature records");
                NarrativeController::unavailable(e.to_string(), SvgSurface::new())
            }
        };
        Self::new(narrative)
    }

    /// Locks the controller.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if a previous holder panicked.
    pub fn lock(&self) -> Result<MutexGuard<'_, Narrative>, DomainError> {
        self.narrative
            .lock()
            .map_err(|_| DomainError::Infrastructure("narrative state lock poisoned".into()))
    }
}
