//! Seam between the guard and whatever drives the screen stack.

use crate::route::Route;

/// Receives redirect decisions from the guard.
///
/// The production implementation pushes onto the UI's history stack;
/// tests substitute a recorder.
pub trait Navigator: Send + Sync {
    /// Navigate to `route`, replacing the current screen.
    fn redirect(&self, route: Route);
}
