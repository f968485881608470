//! Command handlers for the scene navigation context.
//!
//! Each handler applies one navigation command to the controller and returns
//! the resulting read-only view.

use tracing::{info, instrument};
use warming_chart::surface::DisplaySurface;
use warming_core::command::Command;

use crate::application::query_handlers::{self, NarrativeView};
use crate::domain::commands::{Advance, Retreat};
use crate::domain::controller::NarrativeController;

/// Handles the `Advance` command: moves to the next scene (saturating) and
/// re-renders.
#[instrument(skip(command, controller), fields(correlation_id = %command.correlation_id))]
pub fn handle_advance<S: DisplaySurface>(
    command: &Advance,
    controller: &mut NarrativeController<S>,
) -> NarrativeView {
    let from = controller.scene_index();
    let to = controller.advance();
    info!(command_type = command.command_type(), from, to, "handled navigation command");

    query_handlers::get_narrative(controller)
}

/// Handles the `Retreat` command: moves to the previous scene (saturating)
/// and re-renders.
#[instrument(skip(command, controller), fields(correlation_id = %command.correlation_id))]
pub fn handle_retreat<S: DisplaySurface>(
    command: &Retreat,
    controller: &mut NarrativeController<S>,
) -> NarrativeView {
    let from = controller.scene_index();
    let to = controller.retreat();
    info!(command_type = command.command_type(), from, to, "handled navigation command");

    query_handlers::get_narrative(controller)
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use crate::application::command_handlers::{handle_advance, handle_retreat};
    use crate::domain::commands::{Advance, Retreat};
    use crate::domain::controller::NarrativeController;
    use warming_test_support::{RecordingSurface, sample_records};

    #[test]
    fn test_handle_advance_returns_view_of_next_scene() {
        // Arrange
        let mut controller =
            NarrativeController::initialize(sample_records(), RecordingSurface::new());
        let command = Advance {
            correlation_id: Uuid::new_v4(),
        };

        // Act
        let view = handle_advance(&command, &mut controller);

        // Assert
        assert_eq!(view.scene_index, 1);
        assert!(view.title.starts_with("Scene 2"));
        assert!(view.can_advance);
        assert!(view.can_retreat);
    }

    #[test]
    fn test_handle_retreat_at_first_scene_reports_boundary() {
        // Arrange
        let mut controller =
            NarrativeController::initialize(sample_records(), RecordingSurface::new());
        let command = Retreat {
            correlation_id: Uuid::new_v4(),
        };

        // Act
        let view = handle_retreat(&command, &mut controller);

        // Assert
        assert_eq!(view.scene_index, 0);
        assert!(!view.can_retreat);
        assert_eq!(controller.surface().present_count(), 2);
    }
}
