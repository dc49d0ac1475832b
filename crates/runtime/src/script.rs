//! Host lifecycle seam.

use crate::controller::MenuController;

/// Hooks a host scheduling loop calls on embedded components.
///
/// The menu is fully event-driven — movement and queries do all the work —
/// so both hooks default to no-ops. Hosts that animate or pool resources can
/// override them on their own wrapper types.
pub trait Script {
    /// Per-frame update hook.
    fn act(&mut self, _delta: f32) {}

    /// Called once when the host tears the component down.
    fn dispose(&mut self) {}
}

impl Script for MenuController {}
