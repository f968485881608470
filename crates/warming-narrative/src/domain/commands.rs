//! Commands for the scene navigation context.

use uuid::Uuid;
use warming_core::command::Command;

/// Command to move to the next scene.
#[derive(Debug, Clone)]
pub struct Advance {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

/// Command to move to the previous scene.
#[derive(Debug, Clone)]
pub struct Retreat {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for Advance {
    fn command_type(&self) -> &'static str {
        "narrative.advance"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

impl Command for Retreat {
    fn command_type(&self) -> &'static str {
        "narrative.retreat"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
