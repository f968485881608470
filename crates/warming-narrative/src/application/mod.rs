//! Application layer for the narrative context.

pub mod command_handlers;
pub mod query_handlers;
