//! Host-facing menu controller.
//!
//! This crate wires the pure selection core and the loaded layout data into
//! the API a host embeds: movement commands, marker placement over the
//! selected item, visibility toggling, and the lifecycle hooks a scheduling
//! loop calls. Consumers build a [`MenuController`] from a loaded layout and
//! bind their input layer to its movement methods.
//!
//! Modules are organized by responsibility:
//! - [`controller`] hosts the controller and marker geometry
//! - [`script`] defines the host lifecycle seam

pub mod controller;
pub mod script;

pub use controller::{ControllerError, MarkerAnchor, MenuController};
pub use script::Script;
