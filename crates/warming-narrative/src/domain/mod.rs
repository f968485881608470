//! Domain layer for the narrative context.

pub mod commands;
pub mod controller;
pub mod scenes;
