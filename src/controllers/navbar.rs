//! Active-route tracking for navigation highlighting

/// Passive observer of route-change notifications. The routing layer fires
/// [`NavbarController::on_route_change`] before a navigation completes, so
/// the tracked path is the one being navigated to, not the one being left.
#[derive(Debug, Default)]
pub struct NavbarController {
    active_route: String,
}

impl NavbarController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the upcoming route path.
    pub fn on_route_change(&mut self, path: &str) {
        self.active_route = path.to_string();
    }

    /// True when `path` matches the route currently being shown (or
    /// navigated to). Pure comparison, no side effects.
    pub fn is_route_active(&self, path: &str) -> bool {
        self.active_route == path
    }

    pub fn active_route(&self) -> &str {
        &self.active_route
    }
}
